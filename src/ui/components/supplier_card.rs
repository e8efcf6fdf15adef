use crate::supplier::SupplierRecord;
use dioxus::prelude::*;

/// One supplier as a card.
///
/// Stateless: renders the record as received and hands it back, unmodified,
/// through `on_save`.
#[component]
pub fn SupplierCard(supplier: SupplierRecord, on_save: EventHandler<SupplierRecord>) -> Element {
    let website_label = supplier.website_label().to_string();
    let score_label = supplier.score_label();

    rsx! {
        div { class: "supplier-card",
            header {
                div {
                    h3 { "{supplier.name}" }
                    a {
                        class: "website",
                        href: "{supplier.website}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{website_label}"
                    }
                }
                span { class: "score", "{score_label}" }
            }
            p { class: "notes", "{supplier.notes}" }
            footer {
                button {
                    class: "button primary",
                    onclick: {
                        let supplier = supplier.clone();
                        move |_| on_save.call(supplier.clone())
                    },
                    "Save Supplier"
                }
            }
        }
    }
}
