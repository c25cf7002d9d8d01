use std::rc::Rc;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use dioxus_logger::tracing::{debug, error};
use shared_types::Profile;

use crate::api::ProfileApi;

pub type SharedApi = Rc<dyn ProfileApi>;

/// Root-level profile list shared by every screen.
///
/// Lives in the app root so a refresh fired from an editor still lands after
/// the list screen has been unmounted.
#[derive(Clone)]
pub struct ProfileDirectory {
    pub profiles: Signal<Vec<Profile>>,
    api: SharedApi,
}

impl ProfileDirectory {
    pub fn new(api: SharedApi) -> Self {
        Self {
            profiles: Signal::new(Vec::new()),
            api,
        }
    }

    pub fn api(&self) -> SharedApi {
        Rc::clone(&self.api)
    }

    /// Refetch the list in the background.
    pub fn reload(&self) {
        let api = self.api();
        let profiles = self.profiles;
        spawn_forever(async move {
            fetch_into(api.as_ref(), profiles).await;
        });
    }

    /// Delete by id, then refetch whatever the server now holds.
    pub fn delete(&self, id: String) {
        let api = self.api();
        let profiles = self.profiles;
        spawn_forever(async move {
            if let Err(e) = api.delete_profile(&id).await {
                error!("Failed to delete profile {}: {}", id, e);
            }
            fetch_into(api.as_ref(), profiles).await;
        });
    }
}

async fn fetch_into(api: &dyn ProfileApi, mut profiles: Signal<Vec<Profile>>) {
    match api.list_profiles().await {
        Ok(list) => {
            debug!(count = list.len(), "profiles loaded");
            profiles.set(list);
        }
        Err(e) => error!("Failed to fetch profiles: {}", e),
    }
}
