use crate::ui::AppContext;
use dioxus::prelude::*;

/// Suppliers already persisted by the backing store
#[component]
pub fn SavedSuppliers() -> Element {
    let app_context = use_context::<AppContext>();

    let mut saved_resource = use_resource(move || {
        let api = app_context.api.clone();
        async move { api.list_saved().await.map_err(|e| e.to_string()) }
    });

    let body = match saved_resource.value().read().as_ref() {
        None => rsx! {
            p { class: "status", "Loading saved suppliers..." }
        },
        Some(Err(error)) => rsx! {
            div { class: "error", "Failed to load saved suppliers: {error}" }
        },
        Some(Ok(suppliers)) if suppliers.is_empty() => rsx! {
            p { class: "status", "No suppliers saved yet." }
        },
        Some(Ok(suppliers)) => rsx! {
            table { class: "supplier-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Supplier" }
                        th { "Website" }
                        th { "Score" }
                        th { "Notes" }
                    }
                }
                tbody {
                    for supplier in suppliers.iter() {
                        tr {
                            td {
                                if let Some(id) = supplier.id {
                                    "{id}"
                                } else {
                                    "-"
                                }
                            }
                            td { strong { "{supplier.name}" } }
                            td { class: "website", {supplier.website_label().to_string()} }
                            td { "{supplier.relevance_score}" }
                            td { class: "notes", "{supplier.notes}" }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div { class: "scout-page compact",
            h1 { class: "scout-title", "Saved Suppliers" }
            button {
                class: "button",
                onclick: move |_| saved_resource.restart(),
                "Refresh"
            }
            {body}
        }
    }
}
