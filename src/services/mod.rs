pub mod entry_service;
pub mod lookup_service;

pub use entry_service::{CustomerDefaults, EntryOutcome, EntryService};
pub use lookup_service::{LookupOutcome, LookupService};
