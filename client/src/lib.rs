//! Storefront product client.
//!
//! Data access for the product catalogue plus the UI state its
//! notifications drive:
//!
//! - `product::api`: `get_list` (with `LIST_REQUEST` / `LIST_RESPONSE` /
//!   `LIST_DONE` notifications) and `get` (plain single-product lookup)
//! - `product` / `common`: the notification types and the reducers that
//!   consume them
//! - `app`: the combined state, action and reducer for a single `Store`
//! - `config`: endpoint configuration from the environment
//!
//! # Quick Start
//!
//! ```no_run
//! use storefront_client::{app, config::ClientConfig, product::ProductApi};
//! use storefront_client::product::api::DEFAULT_IS_LOADING;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env();
//! let api = ProductApi::new(config.rpc_client()?);
//! let store = app::new_store();
//!
//! // Notifications go straight into the store
//! let _ = api.get_list(&store, DEFAULT_IS_LOADING).await;
//!
//! let count = store.state(|s| s.products.list.len()).await;
//! println!("Products: {count}");
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod common;
pub mod config;
pub mod product;

// Re-export commonly used types
pub use app::{AppAction, AppState, AppStore};
pub use common::{CommonAction, MessageState};
pub use config::ClientConfig;
pub use product::{Product, ProductAction, ProductApi, ProductError, ProductListState};
