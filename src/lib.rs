// Library exports for integration tests and reusable components

pub mod config;
pub mod controller;
pub mod scout_api;
pub mod supplier;
pub mod ui;

pub use config::{Config, ConfigError, PageVariant};
pub use controller::{
    PresetShortcuts, SaveOutcome, ScoutController, ScoutSnapshot, SearchOutcome,
};
pub use scout_api::{HttpScoutClient, ScoutApiError, SupplierApi};
pub use supplier::SupplierRecord;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (unit tests, or integration tests with the test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
