use dioxus::prelude::*;
use dioxus::router::Navigator;
use dioxus_logger::tracing::{debug, warn};

use crate::editor::Navigation;
use crate::screens::{AddProfile, EditProfile, Home, Settings};
use crate::settings::AppSettings;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/profile/:id")]
        EditProfile { id: String },
        #[route("/add")]
        AddProfile {},
        #[route("/settings")]
        Settings {},
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home {} => "Home",
            Route::EditProfile { .. } => "Update Profile",
            Route::AddProfile {} => "Add Profile",
            Route::Settings {} => "Settings Menu",
        }
    }
}

/// A navigation captured while the editor decides whether to allow it.
#[derive(Debug, Clone, PartialEq)]
pub enum NavIntent {
    Back,
    To(Route),
}

/// [`Navigation`] backed by the Dioxus router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(Navigator);

impl RouterNavigator {
    pub fn new(navigator: Navigator) -> Self {
        Self(navigator)
    }
}

impl Navigation for RouterNavigator {
    type Intent = NavIntent;

    fn dispatch(&mut self, intent: NavIntent) {
        debug!(?intent, "navigating");
        match intent {
            NavIntent::Back => self.0.go_back(),
            NavIntent::To(route) => push_route(self.0, route),
        }
    }

    fn go_back(&mut self) {
        self.0.go_back();
    }
}

/// Push `route`, logging when the router refuses it.
pub fn push_route(navigator: Navigator, route: Route) {
    report_navigation(navigator.push(route));
}

/// Log a refused navigation. Returns whether the navigation went through.
fn report_navigation<F: std::fmt::Debug>(failure: Option<F>) -> bool {
    match failure {
        Some(failure) => {
            warn!("navigation failed: {:?}", failure);
            false
        }
        None => true,
    }
}

#[component]
pub fn AppShell() -> Element {
    let settings = use_context::<Signal<AppSettings>>();
    let route = use_route::<Route>();
    let nav = navigator();

    let css_vars = settings.read().css_variables();
    let title = route.title();
    let on_home = matches!(route, Route::Home {});
    let on_settings = matches!(route, Route::Settings {});

    rsx! {
        div {
            class: "app-shell",
            style: "{css_vars} min-height: 100vh; display: flex; flex-direction: column; background: var(--c2); font-family: system-ui, sans-serif;",
            header {
                style: "display: flex; align-items: center; gap: 0.75rem; padding: 0.9rem 1rem; background: var(--c1); border-bottom: 1px solid var(--c6);",
                if on_settings {
                    button {
                        style: "background: none; border: none; color: var(--c7); font-size: var(--fs2); cursor: pointer;",
                        onclick: move |_| nav.go_back(),
                        "‹ Back"
                    }
                }
                h1 {
                    style: "flex: 1; margin: 0; font-size: var(--fs1); font-weight: var(--fw1); color: var(--c3);",
                    "{title}"
                }
                if on_home {
                    span {
                        style: "font-size: 1.5rem;",
                        Link { to: Route::Settings {}, "⚙" }
                    }
                }
            }
            main {
                style: "flex: 1; overflow-y: auto;",
                Outlet::<Route> {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refused_navigation_is_reported() {
        assert!(report_navigation::<String>(None));
        assert!(!report_navigation(Some("external target blocked")));
    }

    #[test]
    fn titles_match_screens() {
        assert_eq!(Route::Home {}.title(), "Home");
        assert_eq!(
            Route::EditProfile { id: "1".to_string() }.title(),
            "Update Profile"
        );
        assert_eq!(Route::AddProfile {}.title(), "Add Profile");
        assert_eq!(Route::Settings {}.title(), "Settings Menu");
    }
}
