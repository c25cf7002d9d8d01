use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::{error, info};

use crate::components::{
    ConfirmationModal, ErrorBanner, ProfileCard, DELETE_PROMPT, LEAVE_PROMPT, PAGE_STYLE,
    PRIMARY_BUTTON_STYLE,
};
use crate::editor::{EditTarget, EditorState, ProfileEditor, RefreshChannel};
use crate::form::{profile_form_rows, settings_rows, FieldEdit, FormRows};
use crate::leave_guard::BrowserLeaveGuard;
use crate::routes::{push_route, NavIntent, Route, RouterNavigator};
use crate::settings::{set_cached_settings, AppSettings};
use crate::state::ProfileDirectory;

#[component]
pub fn Home() -> Element {
    let directory = use_context::<ProfileDirectory>();
    let refresh = use_context::<RefreshChannel>();
    let nav = navigator();
    let mut pending_delete = use_signal(|| None::<String>);

    // Each time the list mounts it becomes the target of editor refreshes.
    {
        let directory = directory.clone();
        use_hook(move || {
            let target = directory.clone();
            refresh.set(move || target.reload());
            directory.reload();
        });
    }

    let profiles = directory.profiles.read().clone();
    let delete_target = directory.clone();

    rsx! {
        div {
            style: PAGE_STYLE,
            for profile in profiles {
                ProfileCard {
                    key: "{profile.id}",
                    profile: profile.clone(),
                    on_open: move |id| push_route(nav, Route::EditProfile { id }),
                    on_delete: move |id| pending_delete.set(Some(id)),
                }
            }
            button {
                style: PRIMARY_BUTTON_STYLE,
                onclick: move |_| push_route(nav, Route::AddProfile {}),
                "Add Profile"
            }
            ConfirmationModal {
                visible: pending_delete.read().is_some(),
                message: DELETE_PROMPT.to_string(),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |_| {
                    if let Some(id) = pending_delete.write().take() {
                        info!(%id, "deleting profile");
                        delete_target.delete(id);
                    }
                },
            }
        }
    }
}

#[component]
pub fn EditProfile(id: String) -> Element {
    rsx! {
        ProfileScreen { key: "{id}", target: EditTarget::Existing(id.clone()) }
    }
}

#[component]
pub fn AddProfile() -> Element {
    rsx! {
        ProfileScreen { target: EditTarget::New }
    }
}

/// Shared add/update screen driving a [`ProfileEditor`].
#[component]
fn ProfileScreen(target: EditTarget) -> Element {
    let api = use_context::<ProfileDirectory>().api();
    let refresh = use_context::<RefreshChannel>();
    let nav = navigator();
    let route = use_route::<Route>();
    let mut editor = use_signal(|| ProfileEditor::<NavIntent>::new(target.clone()));
    let mut error_message = use_signal(|| None::<String>);

    // Browser back, URL edits, reloads and tab closes go through the editor too.
    let _leave_guard = use_hook(move || {
        Rc::new(BrowserLeaveGuard::install(
            move || editor.peek().is_dirty(),
            move || {
                let mut router = RouterNavigator::new(nav);
                editor.write().leave_from_history(
                    NavIntent::To(route.clone()),
                    NavIntent::Back,
                    &mut router,
                );
            },
        ))
    });

    {
        let api = api.clone();
        use_hook(move || {
            let Some(id) = editor.read().pending_load().map(str::to_string) else {
                return;
            };
            spawn(async move {
                let result = api.get_profile(&id).await;
                if let Err(e) = editor.write().finish_load(result) {
                    error!("Failed to load profile {}: {}", id, e);
                    error_message.set(Some(e.to_string()));
                }
            });
        });
    }

    let on_edit = move |edit: FieldEdit| {
        if let FieldEdit::Set(path, value) = edit {
            editor.write().update(path, value);
        }
    };

    let submit_refresh = refresh.clone();
    let on_submit = move |_: MouseEvent| {
        let Some(request) = editor.write().submit_request() else {
            return;
        };
        let api = api.clone();
        let refresh = submit_refresh.clone();
        spawn(async move {
            let result = request.send(api.as_ref()).await;
            let mut router = RouterNavigator::new(nav);
            match editor.write().finish_submit(result, &refresh, &mut router) {
                Ok(()) => error_message.set(None),
                Err(e) => error_message.set(Some(e.to_string())),
            }
        });
    };

    let on_back = move |_: MouseEvent| {
        let mut router = RouterNavigator::new(nav);
        editor.write().attempt_leave(NavIntent::Back, &mut router);
    };

    let on_confirm_leave = move |_: ()| {
        let mut router = RouterNavigator::new(nav);
        editor.write().confirm_discard(&refresh, &mut router);
    };

    let (state, prompt_visible, submitting, rows) = {
        let editor = editor.read();
        (
            editor.state(),
            editor.prompt_visible(),
            editor.is_submitting(),
            profile_form_rows(editor.draft()),
        )
    };

    rsx! {
        div {
            style: PAGE_STYLE,
            button {
                style: "margin-bottom: 0.5rem; padding: 0; background: none; border: none; color: var(--c7); font-size: var(--fs2); cursor: pointer;",
                onclick: on_back,
                "‹ Back"
            }
            ErrorBanner { message: error_message() }
            if let EditTarget::Existing(id) = &target {
                p {
                    style: "margin: 0 0 0.5rem; font-size: var(--fs3); color: var(--c5);",
                    "ID: {id}"
                }
            }
            if state == EditorState::Loading {
                p { style: "font-size: var(--fs3); color: var(--c5);", "Loading..." }
            } else {
                FormRows { rows, on_edit }
                button {
                    style: PRIMARY_BUTTON_STYLE,
                    disabled: submitting,
                    onclick: on_submit,
                    if submitting { "Saving..." } else { "Save Changes" }
                }
            }
            ConfirmationModal {
                visible: prompt_visible,
                message: LEAVE_PROMPT.to_string(),
                on_cancel: move |_| editor.write().cancel_leave(),
                on_confirm: on_confirm_leave,
            }
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let mut settings = use_context::<Signal<AppSettings>>();

    let on_edit = move |edit: FieldEdit| match edit {
        FieldEdit::SlidePreview(value) => settings.write().set_scale_preview(value),
        FieldEdit::SlideCommit(value) => {
            settings.write().commit_scale(value);
            set_cached_settings(&settings.read());
        }
        FieldEdit::Set(..) => {}
    };

    let rows = settings_rows(&settings.read());

    rsx! {
        div {
            style: PAGE_STYLE,
            FormRows { rows, on_edit }
            button {
                style: PRIMARY_BUTTON_STYLE,
                onclick: move |_| {
                    settings.write().reset();
                    set_cached_settings(&settings.read());
                },
                "Reset Settings"
            }
        }
    }
}
