use super::use_save_handler;
use crate::ui::components::{
    ConfirmationBanner, PresetList, SearchForm, SearchStatus, SupplierCard,
};
use crate::ui::use_scout;
use dioxus::prelude::*;

#[component]
pub fn CardsLayout() -> Element {
    let scout = use_scout();
    let on_save = use_save_handler();
    let results = scout.snapshot.read().results.clone();

    rsx! {
        div { class: "scout-page",
            h1 { class: "scout-title",
                "Supplier "
                span { class: "accent", "Scout" }
            }
            SearchForm { placeholder: "Enter a description..." }
            PresetList {}
            ConfirmationBanner {}
            div { class: "results",
                for (index, supplier) in results.iter().enumerate() {
                    SupplierCard {
                        key: "{index}",
                        supplier: supplier.clone(),
                        on_save: on_save,
                    }
                }
                SearchStatus {}
            }
        }
    }
}
