//! Domain clients wrapping the generic `ResourceClient` of each actor.

mod order_client;
mod product_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
