use crate::ui::use_scout;
use dioxus::prelude::*;

/// Canned queries, shown only while there are no results and nothing is in flight
#[component]
pub fn PresetList() -> Element {
    let scout = use_scout();

    if !scout.snapshot.read().shows_presets() {
        return rsx! {};
    }

    let presets = scout.controller.presets().queries().to_vec();

    rsx! {
        div { class: "presets",
            for preset in presets.iter() {
                button {
                    key: "{preset}",
                    class: "preset",
                    onclick: {
                        let controller = scout.controller.clone();
                        let preset = preset.clone();
                        move |_| {
                            let controller = controller.clone();
                            let preset = preset.clone();
                            spawn(async move {
                                controller.select_preset(&preset).await;
                            });
                        }
                    },
                    "{preset}"
                }
            }
        }
    }
}
