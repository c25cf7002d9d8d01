use std::rc::Rc;

use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

use profile_app::settings::get_cached_settings;
use profile_app::{HttpProfileApi, ProfileDirectory, RefreshChannel, Route};

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    use_context_provider(|| {
        let settings = get_cached_settings().unwrap_or_default();
        info!(font_scale = settings.font_scale, "settings restored");
        Signal::new(settings)
    });
    use_context_provider(RefreshChannel::new);
    use_context_provider(|| {
        let api = HttpProfileApi::from_location();
        info!(base = %profile_app::api_base(), "profile api ready");
        ProfileDirectory::new(Rc::new(api))
    });

    rsx! {
        Router::<Route> {}
    }
}
