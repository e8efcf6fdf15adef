use crate::ui::Route;
use dioxus::prelude::*;

/// Shared navbar layout
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { id: "navbar",
            Link { to: Route::Search {}, "Search" }
            Link { to: Route::SavedSuppliers {}, "Saved" }
        }
        Outlet::<Route> {}
    }
}
