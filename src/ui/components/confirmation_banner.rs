use crate::ui::use_scout;
use dioxus::prelude::*;

#[component]
pub fn ConfirmationBanner() -> Element {
    let scout = use_scout();
    let confirmation = scout.snapshot.read().confirmation.clone();

    rsx! {
        if let Some(message) = confirmation {
            div { class: "confirmation", "{message}" }
        }
    }
}
