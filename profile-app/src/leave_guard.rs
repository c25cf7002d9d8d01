//! Browser-level leave detection for the profile screen.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{BeforeUnloadEvent, Event, Window};

use crate::components::LEAVE_PROMPT;

/// Window listeners active while a profile screen is mounted. Dropping the
/// guard removes them.
pub struct BrowserLeaveGuard {
    window: Window,
    on_before_unload: Closure<dyn FnMut(BeforeUnloadEvent)>,
    on_pop_state: Closure<dyn FnMut(Event)>,
}

impl BrowserLeaveGuard {
    /// `is_dirty` decides whether a reload or tab close asks the browser to
    /// confirm. `on_history_move` runs after every back/forward move.
    pub fn install(
        is_dirty: impl Fn() -> bool + 'static,
        mut on_history_move: impl FnMut() + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;

        let on_before_unload = Closure::wrap(Box::new(move |e: BeforeUnloadEvent| {
            if is_dirty() {
                e.prevent_default();
                e.set_return_value(LEAVE_PROMPT);
            }
        }) as Box<dyn FnMut(BeforeUnloadEvent)>);

        let on_pop_state = Closure::wrap(Box::new(move |_e: Event| {
            on_history_move();
        }) as Box<dyn FnMut(Event)>);

        let guard = Self {
            window,
            on_before_unload,
            on_pop_state,
        };
        // On failure the guard drops and unregisters whatever was added.
        guard
            .window
            .add_event_listener_with_callback(
                "beforeunload",
                guard.on_before_unload.as_ref().unchecked_ref(),
            )
            .ok()?;
        guard
            .window
            .add_event_listener_with_callback(
                "popstate",
                guard.on_pop_state.as_ref().unchecked_ref(),
            )
            .ok()?;

        Some(guard)
    }
}

impl Drop for BrowserLeaveGuard {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            "beforeunload",
            self.on_before_unload.as_ref().unchecked_ref(),
        );
        let _ = self.window.remove_event_listener_with_callback(
            "popstate",
            self.on_pop_state.as_ref().unchecked_ref(),
        );
    }
}
