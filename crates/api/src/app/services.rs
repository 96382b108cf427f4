//! Service wiring: pick a record store and build the shared vendor handler.

use std::sync::Arc;

use vendorhub_infra::{InMemoryVendorStore, VendorHandler, VendorStore};

use crate::config::{ApiConfig, StoreBackend};

/// Store-erased handler shared by every route.
pub type SharedVendorHandler = VendorHandler<Arc<dyn VendorStore>>;

/// Services reachable from HTTP handlers (via `Extension<Arc<AppServices>>`).
#[derive(Clone)]
pub struct AppServices {
    vendors: SharedVendorHandler,
}

impl AppServices {
    pub fn new(store: Arc<dyn VendorStore>) -> Self {
        Self {
            vendors: VendorHandler::new(store),
        }
    }

    /// In-memory wiring (dev/test).
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryVendorStore::new()))
    }

    pub fn vendors(&self) -> &SharedVendorHandler {
        &self.vendors
    }
}

pub async fn build_services(config: &ApiConfig) -> anyhow::Result<AppServices> {
    match &config.store {
        StoreBackend::InMemory => {
            tracing::info!("using in-memory vendor store");
            Ok(AppServices::in_memory())
        }
        StoreBackend::Postgres { database_url } => build_persistent_services(database_url).await,
    }
}

#[cfg(feature = "postgres")]
async fn build_persistent_services(database_url: &str) -> anyhow::Result<AppServices> {
    use anyhow::Context;
    use vendorhub_infra::PostgresVendorStore;

    let store = PostgresVendorStore::connect(database_url)
        .await
        .context("failed to connect to Postgres")?;
    tracing::info!("using Postgres vendor store");
    Ok(AppServices::new(Arc::new(store)))
}

#[cfg(not(feature = "postgres"))]
async fn build_persistent_services(_database_url: &str) -> anyhow::Result<AppServices> {
    tracing::warn!(
        "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
    );
    Ok(AppServices::in_memory())
}
