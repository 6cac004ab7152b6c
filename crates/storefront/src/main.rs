use actor_framework::tracing::setup_tracing;
use actor_framework::ActorClient;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::StorefrontSystem;
use storefront::model::{Customer, OrderCreate, OrderStatus, Size};
use storefront::product_actor::query;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();
    setup_tracing();

    let config = StorefrontConfig::from_env()?;
    info!(?config, "Starting storefront");
    let system = StorefrontSystem::start(&config)?;

    let products = system.product_client.list().await?;
    let featured = query::featured(&products);
    let Some(product) = featured.first() else {
        info!("Catalog is empty; nothing to order");
        system.shutdown().await?;
        return Ok(());
    };
    info!(product_id = %product.id, name = %product.name, "Featured product");

    let checkout = OrderCreate {
        product_id: product.id.clone(),
        size: Some(Size::M),
        quantity: 2,
        customer: Customer {
            name: "Nadia Rahman".to_string(),
            phone: "01711000000".to_string(),
            address: "House 12, Road 5, Dhanmondi".to_string(),
        },
    };

    let span = tracing::info_span!("order_processing");
    let placed = async { system.order_client.place_order(checkout).await }
        .instrument(span)
        .await;

    match placed {
        Ok(order) => {
            info!(order_id = %order.id, total = order.total_price, "Order placed");
            let confirmed = system.order_client.confirm(order.id.clone(), 120).await?;
            info!(total = confirmed.total_price, "Order confirmed");

            system
                .order_client
                .update_status(order.id.clone(), OrderStatus::Shipped, None)
                .await?;
            if let Some(tracked) = system
                .order_client
                .find_by_id_or_phone(&order.id.as_str().to_lowercase())
                .await?
            {
                info!(status = %tracked.status, step = ?tracked.status.progress_step(), "Tracked order");
            }
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }

    let summary = system.dashboard().await?;
    info!(
        revenue = summary.total_revenue,
        pending = summary.pending_count,
        orders = summary.order_count,
        products = summary.product_count,
        new_orders = summary.new_orders,
        "Dashboard"
    );
    system.clear_notifications().await?;

    system.shutdown().await?;
    info!("Application completed successfully");
    Ok(())
}
