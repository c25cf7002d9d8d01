use std::sync::Arc;

use crate::store::ProfileStore;

pub struct AppState {
    pub store: Arc<dyn ProfileStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProfileStore>) -> Self {
        Self { store }
    }
}
