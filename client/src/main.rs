//! Storefront CLI
//!
//! Loads the product list into a store and prints the resulting state.
//! With a product id argument, also fetches that product.
//!
//! ```bash
//! API_URL=http://localhost:8000/ cargo run --bin storefront -- 5c1b
//! ```

use anyhow::Context;
use storefront_client::app::{self, AppState};
use storefront_client::config::ClientConfig;
use storefront_client::product::{DEFAULT_IS_LOADING, ProductApi};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront=info,storefront_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    info!(api_url = %config.api_url, timeout_secs = config.timeout_secs, "Configuration loaded");

    let api = ProductApi::new(config.rpc_client().context("building HTTP client")?);
    let store = app::new_store();

    if let Err(error) = api.get_list(&store, DEFAULT_IS_LOADING).await {
        info!(%error, "Product list not loaded");
    }

    let state = store.state(AppState::clone).await;
    info!(
        received = state.products.list.len(),
        readable = state.products.products().len(),
        "Product list state"
    );
    println!("{}", serde_json::to_string_pretty(&state)?);

    if let Some(product_id) = std::env::args().nth(1) {
        let response = api
            .get(&product_id)
            .await
            .with_context(|| format!("fetching product {product_id}"))?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
