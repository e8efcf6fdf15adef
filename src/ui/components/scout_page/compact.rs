use super::use_save_handler;
use crate::ui::components::{
    ConfirmationBanner, PresetList, SearchForm, SearchStatus, SupplierRow,
};
use crate::ui::use_scout;
use dioxus::prelude::*;

/// Denser layout: suppliers in a table, confirmation above the form
#[component]
pub fn CompactLayout() -> Element {
    let scout = use_scout();
    let on_save = use_save_handler();
    let results = scout.snapshot.read().results.clone();

    rsx! {
        div { class: "scout-page compact",
            h1 { class: "scout-title", "Supplier Scout" }
            ConfirmationBanner {}
            SearchForm { placeholder: "Describe the parts or services you need..." }
            PresetList {}
            if results.is_empty() {
                SearchStatus {}
            } else {
                table { class: "supplier-table",
                    thead {
                        tr {
                            th { "Supplier" }
                            th { "Website" }
                            th { "Score" }
                            th { "Notes" }
                            th { "" }
                        }
                    }
                    tbody {
                        for (index, supplier) in results.iter().enumerate() {
                            SupplierRow {
                                key: "{index}",
                                supplier: supplier.clone(),
                                on_save: on_save,
                            }
                        }
                    }
                }
            }
        }
    }
}
