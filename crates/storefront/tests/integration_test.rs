use actor_framework::{ActorClient, BlobStore, JsonFileStore, MemoryStore};
use std::sync::Arc;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::{StorefrontSystem, ORDERS_KEY, PRODUCTS_KEY, SETTINGS_KEY};
use storefront::model::{
    Category, Customer, Order, OrderCreate, OrderStatus, Product, ProductCreate, ProductId,
    ProductUpdate, Size, StockPolicy,
};
use storefront::order_actor::OrderError;
use storefront::product_actor::ProductError;

fn unseeded() -> StorefrontConfig {
    StorefrontConfig {
        seed_catalog: false,
        ..Default::default()
    }
}

fn start(config: &StorefrontConfig) -> (StorefrontSystem, Arc<MemoryStore>) {
    let memory = Arc::new(MemoryStore::new());
    let system = StorefrontSystem::start_with_store(config, memory.clone()).unwrap();
    (system, memory)
}

fn polo() -> ProductCreate {
    ProductCreate {
        name: "Classic Polo".into(),
        image: "polo.png".into(),
        price: 1800,
        category: Category::Polo,
        stock: vec![(Size::S, 5), (Size::M, 3), (Size::L, -2)],
        ..Default::default()
    }
}

fn checkout(product_id: &ProductId, size: Size, quantity: u32, phone: &str) -> OrderCreate {
    OrderCreate {
        product_id: product_id.clone(),
        size: Some(size),
        quantity,
        customer: Customer {
            name: "Karim".into(),
            phone: phone.into(),
            address: "Chattogram".into(),
        },
    }
}

async fn stock(system: &StorefrontSystem, id: &ProductId, size: Size) -> u32 {
    system
        .product_client
        .check_stock(id.clone(), size)
        .await
        .unwrap()
}

#[tokio::test]
async fn test_place_order_takes_stock_and_prices_order() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();
    assert_eq!(product.size_stock.l, 0);

    let order = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 2, "01800000001"))
        .await
        .unwrap();

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_price, 3600);
    assert_eq!(order.product_name, "Classic Polo");
    assert_eq!(order.unit_price, 1800);
    assert_eq!(order.delivery_charge, None);
    assert_eq!(stock(&system, &product.id, Size::S).await, 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_over_order_floors_stock_at_zero() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();

    let order = system
        .order_client
        .place_order(checkout(&product.id, Size::M, 10, "01800000002"))
        .await
        .unwrap();

    assert_eq!(order.quantity, 10);
    assert_eq!(order.total_price, 18000);
    assert_eq!(stock(&system, &product.id, Size::M).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_strict_policy_rejects_over_order() {
    let config = StorefrontConfig {
        stock_policy: StockPolicy::Strict,
        ..unseeded()
    };
    let (system, _) = start(&config);
    let product = system.product_client.create_product(polo()).await.unwrap();

    let err = system
        .order_client
        .place_order(checkout(&product.id, Size::M, 4, "01800000003"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        OrderError::InsufficientStock {
            requested: 4,
            available: 3
        }
    );
    assert_eq!(stock(&system, &product.id, Size::M).await, 3);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_invalid_checkout_is_rejected_before_stock_moves() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();

    let mut blank_phone = checkout(&product.id, Size::S, 1, "  ");
    let err = system.order_client.place_order(blank_phone.clone()).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    blank_phone.customer.phone = "01800000004".into();
    blank_phone.size = None;
    let err = system.order_client.place_order(blank_phone).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    let zero = checkout(&product.id, Size::S, 0, "01800000004");
    let err = system.order_client.place_order(zero).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    let unknown = checkout(&ProductId::from("nosuchone"), Size::S, 1, "01800000004");
    let err = system.order_client.place_order(unknown).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    assert_eq!(stock(&system, &product.id, Size::S).await, 5);
    assert!(system.order_client.list().await.unwrap().is_empty());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_confirm_adds_delivery_charge_idempotently() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();
    let order = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 2, "01800000005"))
        .await
        .unwrap();

    let first = system.order_client.confirm(order.id.clone(), 120).await.unwrap();
    assert_eq!(first.status, OrderStatus::Confirmed);
    assert_eq!(first.total_price, 3600 + 120);

    let second = system.order_client.confirm(order.id.clone(), 120).await.unwrap();
    assert_eq!(second.total_price, first.total_price);

    // Later status changes keep the stored charge.
    let shipped = system
        .order_client
        .update_status(order.id.clone(), OrderStatus::Shipped, None)
        .await
        .unwrap();
    assert_eq!(shipped.delivery_charge, Some(120));
    assert_eq!(shipped.total_price, 3720);

    // Any status can follow any other.
    let back = system
        .order_client
        .update_status(order.id.clone(), OrderStatus::Pending, None)
        .await
        .unwrap();
    assert_eq!(back.status, OrderStatus::Pending);

    let read = system.order_client.get(order.id.clone()).await.unwrap().unwrap();
    assert_eq!(read.total_price, 3720);

    let err = system
        .order_client
        .update_status("SS000000".into(), OrderStatus::Shipped, None)
        .await
        .unwrap_err();
    assert_eq!(err, OrderError::NotFound("SS000000".into()));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_track_order_by_id_ignores_case() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();
    let order = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 1, "01800000006"))
        .await
        .unwrap();

    let query = format!("  {}  ", order.id.as_str().to_lowercase());
    let found = system.order_client.find_by_id_or_phone(&query).await.unwrap();
    assert_eq!(found.map(|o| o.id), Some(order.id.clone()));

    let by_phone = system
        .order_client
        .find_by_id_or_phone("01800000006")
        .await
        .unwrap();
    assert_eq!(by_phone.map(|o| o.id), Some(order.id));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_dashboard_excludes_cancelled_revenue() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();

    let kept = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 1, "01800000007"))
        .await
        .unwrap();
    let cancelled = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 2, "01800000008"))
        .await
        .unwrap();
    system
        .order_client
        .update_status(kept.id.clone(), OrderStatus::Delivered, None)
        .await
        .unwrap();
    system
        .order_client
        .update_status(cancelled.id.clone(), OrderStatus::Cancelled, None)
        .await
        .unwrap();

    let summary = system.dashboard().await.unwrap();
    assert_eq!(summary.total_revenue, 1800);
    assert_eq!(summary.pending_count, 0);
    assert_eq!(summary.order_count, 2);
    assert_eq!(summary.product_count, 1);
    assert_eq!(summary.recent_orders[0].id, cancelled.id);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_deleting_product_keeps_order_snapshots() {
    let (system, _) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();
    let order = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 1, "01800000009"))
        .await
        .unwrap();

    system
        .product_client
        .update_product(
            product.id.clone(),
            ProductUpdate {
                name: Some("Renamed Polo".into()),
                price: Some(2200),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    system
        .product_client
        .delete_product(product.id.clone())
        .await
        .unwrap();
    // Deleting again is a no-op.
    system
        .product_client
        .delete_product(product.id.clone())
        .await
        .unwrap();

    let orders = system.order_client.list().await.unwrap();
    assert_eq!(orders, vec![order]);
    assert_eq!(orders[0].product_name, "Classic Polo");
    assert_eq!(orders[0].unit_price, 1800);

    let err = system
        .product_client
        .update_product(product.id.clone(), ProductUpdate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::NotFound(_)));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_concurrent_orders_do_not_oversell() {
    let config = StorefrontConfig {
        stock_policy: StockPolicy::Strict,
        ..unseeded()
    };
    let (system, _) = start(&config);
    let product = system.product_client.create_product(polo()).await.unwrap();

    let mut handles = vec![];
    for n in 0..8 {
        let orders = system.order_client.clone();
        let request = checkout(&product.id, Size::S, 1, &format!("0190000000{n}"));
        handles.push(tokio::spawn(async move { orders.place_order(request).await }));
    }
    let mut placed = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            placed += 1;
        }
    }

    assert_eq!(placed, 5);
    assert_eq!(stock(&system, &product.id, Size::S).await, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_snapshot_round_trip_is_byte_identical() {
    let (system, memory) = start(&unseeded());
    let tee = system
        .product_client
        .create_product(ProductCreate {
            name: "Tee".into(),
            image: "tee.png".into(),
            price: 900,
            stock: vec![(Size::XL, 4)],
            ..Default::default()
        })
        .await
        .unwrap();
    let classic = system.product_client.create_product(polo()).await.unwrap();
    let order = system
        .order_client
        .place_order(checkout(&tee.id, Size::XL, 1, "01800000010"))
        .await
        .unwrap();
    system.order_client.confirm(order.id.clone(), 60).await.unwrap();
    system
        .order_client
        .place_order(checkout(&classic.id, Size::M, 1, "01800000011"))
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    let products_blob = memory.load(PRODUCTS_KEY).unwrap().unwrap();
    let orders_blob = memory.load(ORDERS_KEY).unwrap().unwrap();

    let restarted = StorefrontSystem::start_with_store(&unseeded(), memory.clone()).unwrap();
    let products: Vec<Product> = restarted.product_client.list().await.unwrap();
    let orders: Vec<Order> = restarted.order_client.list().await.unwrap();

    assert_eq!(serde_json::to_string(&products).unwrap(), products_blob);
    assert_eq!(serde_json::to_string(&orders).unwrap(), orders_blob);
    assert_eq!(products[0].id, classic.id);
    assert_eq!(orders[1].id, order.id);
    assert_eq!(orders[1].total_price, 960);

    restarted.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_reads_and_failed_mutations_write_nothing() {
    let (system, memory) = start(&unseeded());
    assert!(memory.load(PRODUCTS_KEY).unwrap().is_none());

    system.product_client.list().await.unwrap();
    let err = system
        .product_client
        .create_product(ProductCreate::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::ValidationError(_)));
    assert!(memory.load(PRODUCTS_KEY).unwrap().is_none());
    assert!(memory.load(ORDERS_KEY).unwrap().is_none());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_fresh_store_is_seeded_once() {
    let (system, memory) = start(&StorefrontConfig::default());
    let products = system.product_client.list().await.unwrap();
    assert_eq!(products.len(), 1);
    let seeded = &products[0];
    assert_eq!(seeded.name, "Signature Gold T-Shirt");
    assert_eq!(seeded.price, 2500);
    assert!(seeded.is_featured);
    assert_eq!(seeded.total_stock(), 55);
    assert!(memory.load(PRODUCTS_KEY).unwrap().is_some());

    system
        .product_client
        .delete_product(seeded.id.clone())
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    // An empty saved catalog is still a saved catalog.
    let restarted = StorefrontSystem::start_with_store(&StorefrontConfig::default(), memory).unwrap();
    assert!(restarted.product_client.list().await.unwrap().is_empty());
    restarted.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_restart_from_json_directory() {
    let dir = tempfile::tempdir().unwrap();
    let config = StorefrontConfig {
        data_dir: Some(dir.path().to_path_buf()),
        ..unseeded()
    };

    let system = StorefrontSystem::start(&config).unwrap();
    let product = system.product_client.create_product(polo()).await.unwrap();
    let order = system
        .order_client
        .place_order(checkout(&product.id, Size::S, 2, "01800000012"))
        .await
        .unwrap();
    system
        .settings
        .set_hero_image("https://cdn.example.com/hero.jpg")
        .await
        .unwrap();
    system.shutdown().await.unwrap();

    assert!(dir.path().join(format!("{PRODUCTS_KEY}.json")).exists());
    assert!(dir.path().join(format!("{ORDERS_KEY}.json")).exists());
    assert!(dir.path().join(format!("{SETTINGS_KEY}.json")).exists());

    let store = Arc::new(JsonFileStore::open(dir.path()).unwrap());
    let restarted = StorefrontSystem::start_with_store(&config, store).unwrap();
    assert_eq!(stock(&restarted, &product.id, Size::S).await, 3);
    assert_eq!(
        restarted.order_client.list().await.unwrap(),
        vec![order]
    );
    assert_eq!(
        restarted.settings.snapshot().await.hero_image,
        "https://cdn.example.com/hero.jpg"
    );
    restarted.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_corrupt_snapshot_fails_startup() {
    let memory = Arc::new(MemoryStore::new());
    memory.save(ORDERS_KEY, "{not json").unwrap();

    let result = StorefrontSystem::start_with_store(&unseeded(), memory);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_blank_name_patch_is_rejected_and_product_kept() {
    let (system, memory) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();
    let saved = memory.load(PRODUCTS_KEY).unwrap();

    let err = system
        .product_client
        .update_product(
            product.id.clone(),
            ProductUpdate {
                name: Some("  ".into()),
                price: Some(9999),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::ValidationError(_)));

    let err = system
        .product_client
        .update_product(
            product.id.clone(),
            ProductUpdate {
                image: Some(String::new()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ProductError::ValidationError(_)));

    let stored = system.product_client.get(product.id.clone()).await.unwrap();
    assert_eq!(stored, Some(product));
    assert_eq!(memory.load(PRODUCTS_KEY).unwrap(), saved);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_new_order_notifications() {
    let (system, memory) = start(&unseeded());
    let product = system.product_client.create_product(polo()).await.unwrap();
    assert_eq!(system.unseen_orders().await.unwrap(), 0);

    for phone in ["01700000001", "01700000002"] {
        system
            .order_client
            .place_order(checkout(&product.id, Size::S, 1, phone))
            .await
            .unwrap();
    }
    assert_eq!(system.unseen_orders().await.unwrap(), 2);
    assert_eq!(system.dashboard().await.unwrap().new_orders, 2);

    system.clear_notifications().await.unwrap();
    assert_eq!(system.unseen_orders().await.unwrap(), 0);

    system
        .order_client
        .place_order(checkout(&product.id, Size::M, 1, "01700000003"))
        .await
        .unwrap();
    assert_eq!(system.unseen_orders().await.unwrap(), 1);
    system.shutdown().await.unwrap();

    // Restored orders are not new after a restart.
    let restarted = StorefrontSystem::start_with_store(&unseeded(), memory).unwrap();
    assert_eq!(restarted.order_client.list().await.unwrap().len(), 3);
    assert_eq!(restarted.unseen_orders().await.unwrap(), 0);
    restarted.shutdown().await.unwrap();
}
