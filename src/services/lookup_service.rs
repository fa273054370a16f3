use crate::db::{BookstoreStore, Table};

/// Result of one run of the customer lookup.
#[derive(Debug)]
pub enum LookupOutcome {
    /// No name entered; nothing was queried.
    Idle,
    /// The name matched no purchases.
    NoHistory { name: String },
    Found { name: String, table: Table },
    Failed { name: String, message: String },
}

pub struct LookupService {
    store: BookstoreStore,
}

impl LookupService {
    pub fn new(store: BookstoreStore) -> Self {
        Self { store }
    }

    /// Look up the purchase history of the customer named exactly `name`.
    pub async fn lookup(&self, name: &str) -> LookupOutcome {
        if name.is_empty() {
            return LookupOutcome::Idle;
        }

        match self.store.purchase_history(name).await {
            Ok(table) if table.is_empty() => {
                tracing::info!(name, "No purchase history");
                LookupOutcome::NoHistory {
                    name: name.to_string(),
                }
            }
            Ok(table) => {
                tracing::info!(name, rows = table.len(), "Purchase history found");
                LookupOutcome::Found {
                    name: name.to_string(),
                    table,
                }
            }
            Err(e) => {
                tracing::error!(name, error = %e, "Purchase history lookup failed");
                LookupOutcome::Failed {
                    name: name.to_string(),
                    message: e.to_string(),
                }
            }
        }
    }
}
