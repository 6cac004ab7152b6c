use actor_framework::mock::MockClient;
use actor_framework::{ActorClient, FrameworkError};
use chrono::Utc;
use storefront::clients::ProductClient;
use storefront::model::{
    Category, Customer, OrderCreate, OrderStatus, Product, ProductId, Size, SizeStock,
};
use storefront::order_actor::OrderError;
use storefront::product_actor::{ProductActionResult, ProductError};

fn product_after_decrement(name: &str, price: u64) -> Product {
    Product {
        id: ProductId::from("p1"),
        name: name.to_string(),
        image: "after.png".to_string(),
        gallery: vec![],
        price,
        description: String::new(),
        category: Category::Polo,
        size_stock: SizeStock::default(),
        is_featured: false,
        created_at: Utc::now(),
    }
}

fn checkout(quantity: u32) -> OrderCreate {
    OrderCreate {
        product_id: ProductId::from("p1"),
        size: Some(Size::L),
        quantity,
        customer: Customer {
            name: "Sadia".into(),
            phone: "01600000000".into(),
            address: "Sylhet".into(),
        },
    }
}

/// Real Order actor against a scripted catalog.
///
/// The snapshot fields must come from the product returned by the decrement, not from
/// anything the caller supplied.
#[tokio::test]
async fn test_order_snapshots_product_returned_by_decrement() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_action(ProductId::from("p1"))
        .return_ok(ProductActionResult::DecrementStock(Box::new(
            product_after_decrement("Navy Polo", 1500),
        )));

    let (order_actor, order_client) = storefront::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let order = order_client.place_order(checkout(3)).await.unwrap();
    assert_eq!(order.product_name, "Navy Polo");
    assert_eq!(order.product_image, "after.png");
    assert_eq!(order.unit_price, 1500);
    assert_eq!(order.total_price, 4500);
    assert_eq!(order.status, OrderStatus::Pending);
    assert!(order.id.as_str().starts_with("SS"));

    let stored = order_client.get(order.id.clone()).await.unwrap();
    assert_eq!(stored, Some(order));

    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_catalog_refusal_records_nothing() {
    let mut product_mock = MockClient::<Product>::new();
    product_mock
        .expect_action(ProductId::from("p1"))
        .return_err(FrameworkError::EntityError(Box::new(
            ProductError::InsufficientStock {
                requested: 9,
                available: 1,
            },
        )));
    product_mock
        .expect_action(ProductId::from("p1"))
        .return_err(FrameworkError::NotFound("p1".into()));

    let (order_actor, order_client) = storefront::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let err = order_client.place_order(checkout(9)).await.unwrap_err();
    assert_eq!(
        err,
        OrderError::InsufficientStock {
            requested: 9,
            available: 1
        }
    );

    let err = order_client.place_order(checkout(1)).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    assert!(order_client.list().await.unwrap().is_empty());
    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn test_invalid_checkout_never_reaches_catalog() {
    // No expectations: any catalog call would panic the mock.
    let product_mock = MockClient::<Product>::new();

    let (order_actor, order_client) = storefront::order_actor::new(8);
    let actor_handle = tokio::spawn(order_actor.run(ProductClient::new(product_mock.client())));

    let mut request = checkout(1);
    request.customer.address = String::new();
    let err = order_client.place_order(request).await.unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    product_mock.verify();

    drop(order_client);
    actor_handle.await.unwrap();
}
