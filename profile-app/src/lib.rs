pub mod api;
pub mod components;
pub mod editor;
pub mod form;
pub mod leave_guard;
pub mod routes;
pub mod screens;
pub mod settings;
pub mod state;

pub use api::*;
pub use editor::*;
pub use routes::{NavIntent, Route, RouterNavigator};
pub use settings::AppSettings;
pub use state::{ProfileDirectory, SharedApi};
