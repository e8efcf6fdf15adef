use crate::controller::{PresetShortcuts, ScoutController, ScoutSnapshot};
use crate::ui::AppContext;
use dioxus::prelude::*;
use tracing::debug;

/// Controller handle plus a reactive mirror of its state
#[derive(Clone)]
pub struct ScoutContext {
    pub controller: ScoutController,
    pub snapshot: Signal<ScoutSnapshot>,
}

/// Provider component that owns one controller for the lifetime of its subtree
#[component]
pub fn ScoutContextProvider(children: Element) -> Element {
    let app_context = use_context::<AppContext>();

    let controller = use_hook(|| {
        ScoutController::new(
            app_context.api.clone(),
            PresetShortcuts::from_config(&app_context.config),
        )
    });

    let snapshot = use_signal(|| controller.snapshot());

    // Keep the signal in step with every state change the controller publishes
    use_hook({
        let controller = controller.clone();
        let mut snapshot = snapshot;
        move || {
            spawn(async move {
                let mut updates = controller.subscribe();
                while updates.changed().await.is_ok() {
                    let latest = updates.borrow_and_update().clone();
                    snapshot.set(latest);
                }
            })
        }
    });

    use_drop({
        let controller = controller.clone();
        move || {
            debug!("Scout view torn down");
            controller.detach();
        }
    });

    use_context_provider(|| ScoutContext {
        controller: controller.clone(),
        snapshot,
    });

    rsx! {
        {children}
    }
}

/// Hook to access the scout controller and its state
pub fn use_scout() -> ScoutContext {
    use_context::<ScoutContext>()
}
