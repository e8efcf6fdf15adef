use crate::ui::use_scout;
use dioxus::prelude::*;

/// "Searching..." while in flight, an empty-result notice once a search found nothing
#[component]
pub fn SearchStatus() -> Element {
    let scout = use_scout();
    let snapshot = scout.snapshot.read().clone();

    rsx! {
        if snapshot.is_searching {
            p { class: "status", "Searching..." }
        } else if snapshot.shows_no_results() {
            p { class: "status", "No results found. Try a different query." }
        }
    }
}
