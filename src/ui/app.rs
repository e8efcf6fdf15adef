use dioxus::desktop::{Config as DioxusConfig, WindowBuilder};
use dioxus::prelude::*;

use crate::ui::components::*;

pub const MAIN_CSS: &str = include_str!("../../assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]
    #[route("/")]
    Search {},
    #[route("/saved")]
    SavedSuppliers {},
}

pub fn make_config() -> DioxusConfig {
    DioxusConfig::default()
        .with_window(make_window())
        .with_custom_head(format!("<style>{}</style>", MAIN_CSS))
}

fn make_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Supplier Scout")
        .with_always_on_top(false)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1000, 800))
}

#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Route> {}
    }
}
