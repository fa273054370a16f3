pub mod entry;
pub mod lookup;

use std::sync::Arc;

use crate::{
    config::Config,
    db::{BookstoreStore, Database},
    services::{CustomerDefaults, EntryService, LookupService},
};

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: BookstoreStore,
    pub lookup_service: Arc<LookupService>,
    pub entry_service: Arc<EntryService>,
}

impl AppState {
    pub fn new(database: Database, config: &Config) -> Self {
        let store = BookstoreStore::new(database);
        let lookup_service = Arc::new(LookupService::new(store.clone()));
        let entry_service = Arc::new(EntryService::new(
            store.clone(),
            CustomerDefaults {
                address: config.default_customer_address.clone(),
                phone: config.default_customer_phone.clone(),
            },
        ));

        Self {
            store,
            lookup_service,
            entry_service,
        }
    }
}

/// Liveness check
pub async fn health() -> &'static str {
    "Madang bookstore manager is running."
}
