pub mod app;
pub mod app_context;
pub mod components;
pub mod scout_context;

pub use app::*;
pub use app_context::AppContext;
pub use scout_context::{use_scout, ScoutContext, ScoutContextProvider};
