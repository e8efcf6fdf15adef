use crate::supplier::SupplierRecord;
use dioxus::prelude::*;

/// One supplier as a table row, same contract as the card
#[component]
pub fn SupplierRow(supplier: SupplierRecord, on_save: EventHandler<SupplierRecord>) -> Element {
    let website_label = supplier.website_label().to_string();

    rsx! {
        tr {
            td { strong { "{supplier.name}" } }
            td {
                a {
                    class: "website",
                    href: "{supplier.website}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{website_label}"
                }
            }
            td { span { class: "score", "{supplier.relevance_score}" } }
            td { class: "notes", "{supplier.notes}" }
            td {
                button {
                    class: "button primary",
                    onclick: {
                        let supplier = supplier.clone();
                        move |_| on_save.call(supplier.clone())
                    },
                    "Save"
                }
            }
        }
    }
}
