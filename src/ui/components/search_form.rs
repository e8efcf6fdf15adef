use crate::ui::use_scout;
use dioxus::prelude::*;

/// Query input with a submit button
#[component]
pub fn SearchForm(placeholder: String) -> Element {
    let scout = use_scout();
    let snapshot_signal = scout.snapshot;
    let snapshot = snapshot_signal.read().clone();

    let submit = {
        let controller = scout.controller.clone();
        move || {
            let controller = controller.clone();
            spawn(async move {
                controller.submit().await;
            });
        }
    };
    let submit_on_enter = submit.clone();

    rsx! {
        div { class: "search-box",
            input {
                r#type: "text",
                placeholder: "{placeholder}",
                value: "{snapshot.query_text}",
                oninput: {
                    let controller = scout.controller.clone();
                    move |event: FormEvent| controller.set_query(event.value())
                },
                onkeydown: move |event: KeyboardEvent| {
                    // Enter follows the button: no submission while disabled
                    if event.key() == Key::Enter && snapshot_signal.peek().can_submit() {
                        submit_on_enter();
                    }
                },
            }
            button {
                class: "button primary",
                disabled: !snapshot.can_submit(),
                onclick: move |_| submit(),
                "Search"
            }
        }
    }
}
