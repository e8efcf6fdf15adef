use crate::config;
use crate::scout_api::SupplierApi;
use std::sync::Arc;

/// Process-wide services shared with every component
#[derive(Clone)]
pub struct AppContext {
    pub config: config::Config,
    pub api: Arc<dyn SupplierApi>,
}
