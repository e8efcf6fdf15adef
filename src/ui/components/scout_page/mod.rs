mod cards;
mod compact;

pub use cards::CardsLayout;
pub use compact::CompactLayout;

use crate::config::{use_config, PageVariant};
use crate::supplier::SupplierRecord;
use crate::ui::{use_scout, ScoutContextProvider};
use dioxus::prelude::*;

/// Search route: one controller, rendered by whichever variant is configured
#[component]
pub fn Search() -> Element {
    rsx! {
        ScoutContextProvider {
            ScoutPage {}
        }
    }
}

#[component]
fn ScoutPage() -> Element {
    let config = use_config();

    match config.page_variant {
        PageVariant::Cards => rsx! { CardsLayout {} },
        PageVariant::Compact => rsx! { CompactLayout {} },
    }
}

/// Save callback shared by both layouts
fn use_save_handler() -> Callback<SupplierRecord> {
    let scout = use_scout();
    use_callback(move |supplier: SupplierRecord| {
        let controller = scout.controller.clone();
        spawn(async move {
            controller.save(supplier).await;
        });
    })
}
