use dioxus::prelude::*;
use shared_types::Profile;

pub const DELETE_PROMPT: &str = "Are you sure you want to delete this profile?";
pub const LEAVE_PROMPT: &str = "You have unsaved changes. Are you sure you want to leave?";

pub const PAGE_STYLE: &str = "min-height: 100%; padding: 1rem; background: var(--c2); box-sizing: border-box;";
pub const PRIMARY_BUTTON_STYLE: &str = "width: 100%; margin-top: 1rem; padding: 0.8rem; background: var(--c7); color: var(--c1); border: none; border-radius: 8px; font-size: var(--fs2); font-weight: var(--fw2); cursor: pointer;";

#[component]
pub fn ConfirmationModal(
    visible: bool,
    message: String,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    if !visible {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            style: "position: fixed; inset: 0; z-index: 100; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.5);",
            div {
                class: "modal-card",
                style: "width: min(90vw, 22rem); padding: 1.25rem; background: var(--c1); border-radius: 12px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.25);",
                p {
                    style: "margin: 0 0 1.25rem; font-size: var(--fs2); color: var(--c3); text-align: center;",
                    "{message}"
                }
                div {
                    style: "display: flex; gap: 0.75rem;",
                    button {
                        style: "flex: 1; padding: 0.6rem; background: var(--c6); color: var(--c1); border: none; border-radius: 6px; font-size: var(--fs3); font-weight: var(--fw3); cursor: pointer;",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        style: "flex: 1; padding: 0.6rem; background: var(--c8); color: var(--c1); border: none; border-radius: 6px; font-size: var(--fs3); font-weight: var(--fw3); cursor: pointer;",
                        onclick: move |_| on_confirm.call(()),
                        "Confirm"
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProfileCard(
    profile: Profile,
    on_open: EventHandler<String>,
    on_delete: EventHandler<String>,
) -> Element {
    let open_id = profile.id.clone();
    let delete_id = profile.id.clone();

    rsx! {
        div {
            class: "profile-card",
            style: "display: flex; align-items: center; justify-content: space-between; margin: 0.4rem 0; padding: 1rem; background: var(--c1); border-radius: 8px; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1); cursor: pointer;",
            onclick: move |_| on_open.call(open_id.clone()),
            span {
                style: "font-size: var(--fs2); font-weight: var(--fw2); color: var(--c3);",
                "{profile.name}"
            }
            button {
                style: "padding: 0.4rem 0.8rem; background: var(--c8); color: var(--c1); border: none; border-radius: 6px; font-size: var(--fs3); font-weight: var(--fw3); cursor: pointer;",
                onclick: move |evt| {
                    evt.stop_propagation();
                    on_delete.call(delete_id.clone());
                },
                "Delete"
            }
        }
    }
}

#[component]
pub fn ErrorBanner(message: Option<String>) -> Element {
    let Some(message) = message else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "error-banner",
            style: "margin-bottom: 0.75rem; padding: 0.6rem 0.8rem; background: rgba(255, 99, 71, 0.12); color: var(--c8); border-radius: 6px; font-size: var(--fs3);",
            "{message}"
        }
    }
}
