//! Navigation-guarded profile editor.
//!
//! Owns the draft for one profile screen and makes sure the user never leaves
//! a screen with unsaved edits without confirming. A leave attempt while dirty
//! is parked as a pending intent and replayed only after the user confirms the
//! discard.
//!
//! Network I/O is kept outside the editor: the screen asks for
//! [`ProfileEditor::pending_load`] / [`ProfileEditor::submit_request`], awaits
//! the API, and hands the result back through `finish_load` /
//! `finish_submit`. The draft is therefore never borrowed across an await.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus_logger::tracing::{debug, warn};
use shared_types::{FieldPath, PathError, Profile, ProfileFields};

use crate::api::{ApiError, ProfileApi};

/// Which profile the screen edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Waiting for the existing profile to arrive.
    Loading,
    /// Draft matches the last loaded or saved value.
    Clean,
    /// Draft has local edits that were not submitted.
    Dirty,
    /// The screen has been navigated away from.
    Left,
}

/// A leave attempt waiting for the user's answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction<I> {
    None,
    PendingLeave(I),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveOutcome {
    /// Navigation was dispatched.
    Proceeded,
    /// Navigation was held back and the confirmation prompt is showing.
    Intercepted,
}

/// The navigation system driven by the editor.
pub trait Navigation {
    type Intent;

    /// Perform a previously captured navigation.
    fn dispatch(&mut self, intent: Self::Intent);

    /// Pop the current screen.
    fn go_back(&mut self);
}

/// Shared "reload the profile list" callback.
///
/// The list screen installs a fresh callback each time it becomes active; an
/// editor fires whatever is installed at the moment it saves or discards.
#[derive(Clone, Default)]
pub struct RefreshChannel {
    slot: Rc<RefCell<Option<Rc<dyn Fn()>>>>,
}

impl RefreshChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the installed callback.
    pub fn set(&self, refresh: impl Fn() + 'static) {
        *self.slot.borrow_mut() = Some(Rc::new(refresh));
    }

    pub fn is_set(&self) -> bool {
        self.slot.borrow().is_some()
    }

    /// Invoke the installed callback. Returns false when none is installed.
    pub fn fire(&self) -> bool {
        // Clone out first: the callback may reinstall itself.
        let refresh = self.slot.borrow().clone();
        match refresh {
            Some(refresh) => {
                refresh();
                true
            }
            None => {
                debug!("refresh requested with no list screen registered");
                false
            }
        }
    }
}

impl PartialEq for RefreshChannel {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

/// The write the editor wants to perform on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(ProfileFields),
    Update { id: String, fields: ProfileFields },
}

impl SubmitRequest {
    pub async fn send<A: ProfileApi + ?Sized>(&self, api: &A) -> Result<Profile, ApiError> {
        match self {
            SubmitRequest::Create(fields) => api.create_profile(fields).await,
            SubmitRequest::Update { id, fields } => api.update_profile(id, fields).await,
        }
    }
}

pub struct ProfileEditor<I> {
    target: EditTarget,
    draft: Rc<Profile>,
    state: EditorState,
    pending: PendingAction<I>,
    submitting: bool,
}

impl<I> ProfileEditor<I> {
    pub fn new(target: EditTarget) -> Self {
        let state = match target {
            EditTarget::New => EditorState::Clean,
            EditTarget::Existing(_) => EditorState::Loading,
        };
        Self {
            target,
            draft: Rc::new(Profile::blank()),
            state,
            pending: PendingAction::None,
            submitting: false,
        }
    }

    pub fn target(&self) -> &EditTarget {
        &self.target
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.state == EditorState::Dirty
    }

    pub fn draft(&self) -> &Profile {
        &self.draft
    }

    /// Cheap handle to the current draft. Later updates copy on write, so a
    /// snapshot keeps the value it had when taken.
    pub fn snapshot(&self) -> Rc<Profile> {
        Rc::clone(&self.draft)
    }

    /// A submit has been handed out and its result has not come back yet.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn prompt_visible(&self) -> bool {
        matches!(self.pending, PendingAction::PendingLeave(_))
    }

    pub fn pending(&self) -> &PendingAction<I> {
        &self.pending
    }

    /// Id to fetch, while the existing profile has not arrived yet.
    pub fn pending_load(&self) -> Option<&str> {
        match (&self.target, self.state) {
            (EditTarget::Existing(id), EditorState::Loading) => Some(id.as_str()),
            _ => None,
        }
    }

    /// Install the fetched profile. On failure the blank template stays in
    /// place and the error is handed back for reporting; there is no retry.
    pub fn finish_load(&mut self, result: Result<Profile, ApiError>) -> Result<(), ApiError> {
        if self.state != EditorState::Loading {
            debug!(state = ?self.state, "ignoring load result");
            return Ok(());
        }

        self.state = EditorState::Clean;
        match result {
            Ok(profile) => {
                self.draft = Rc::new(profile);
                Ok(())
            }
            Err(e) => {
                warn!("profile load failed, keeping blank draft: {}", e);
                Err(e)
            }
        }
    }

    /// Write `value` at `path`. The first write after a clean point marks the
    /// draft dirty. Ignored before the profile has loaded and after leaving.
    pub fn update(&mut self, path: FieldPath, value: impl Into<String>) -> bool {
        match self.state {
            EditorState::Loading | EditorState::Left => {
                debug!(%path, state = ?self.state, "ignoring field update");
                false
            }
            EditorState::Clean | EditorState::Dirty => {
                path.set(Rc::make_mut(&mut self.draft), value);
                if self.state == EditorState::Clean {
                    debug!(%path, "draft is dirty");
                    self.state = EditorState::Dirty;
                }
                true
            }
        }
    }

    /// [`update`](Self::update) addressed by a dotted key such as
    /// `address.city`.
    pub fn update_key(&mut self, key: &str, value: impl Into<String>) -> Result<bool, PathError> {
        let path = FieldPath::parse(key)?;
        Ok(self.update(path, value))
    }

    /// The write to send for the current draft: create for a new profile,
    /// update by id otherwise. `None` until the profile is loaded, after
    /// leaving, and while an earlier submit is still in flight.
    pub fn submit_request(&mut self) -> Option<SubmitRequest> {
        if matches!(self.state, EditorState::Loading | EditorState::Left) {
            return None;
        }
        if self.submitting {
            debug!("submit already in flight");
            return None;
        }
        self.submitting = true;

        let fields = ProfileFields::from(self.draft.as_ref());
        Some(match &self.target {
            EditTarget::New => SubmitRequest::Create(fields),
            EditTarget::Existing(id) => SubmitRequest::Update {
                id: id.clone(),
                fields,
            },
        })
    }

    /// Apply the outcome of a submit. On success the list is refreshed, the
    /// draft becomes clean and the screen navigates back. On failure nothing
    /// changes and the error is handed back for reporting.
    pub fn finish_submit<N>(
        &mut self,
        result: Result<Profile, ApiError>,
        refresh: &RefreshChannel,
        nav: &mut N,
    ) -> Result<(), ApiError>
    where
        N: Navigation<Intent = I>,
    {
        self.submitting = false;
        if self.state == EditorState::Left {
            debug!("ignoring submit result after leaving");
            return result.map(|_| ());
        }

        match result {
            Ok(saved) => {
                self.draft = Rc::new(saved);
                refresh.fire();
                self.state = EditorState::Clean;
                nav.go_back();
                self.state = EditorState::Left;
                Ok(())
            }
            Err(e) => {
                warn!("profile submit failed: {}", e);
                Err(e)
            }
        }
    }

    /// Called whenever the user tries to leave the screen. A clean editor
    /// lets the navigation through; a dirty one parks it and raises the
    /// confirmation prompt.
    ///
    /// A second attempt while the prompt is already up replaces the parked
    /// intent; only the latest one is ever replayed.
    pub fn attempt_leave<N>(&mut self, intent: I, nav: &mut N) -> LeaveOutcome
    where
        N: Navigation<Intent = I>,
    {
        if self.state == EditorState::Dirty {
            if self.prompt_visible() {
                warn!("leave attempted while prompt is showing; replacing pending intent");
            }
            self.pending = PendingAction::PendingLeave(intent);
            return LeaveOutcome::Intercepted;
        }

        self.state = EditorState::Left;
        nav.dispatch(intent);
        LeaveOutcome::Proceeded
    }

    /// The browser's history already moved off the screen (back button, URL
    /// edit). A dirty editor puts the screen back with `restore` and then
    /// treats the move as a leave attempt with `back`; otherwise the move
    /// stands.
    pub fn leave_from_history<N>(&mut self, restore: I, back: I, nav: &mut N) -> LeaveOutcome
    where
        N: Navigation<Intent = I>,
    {
        if self.state != EditorState::Dirty {
            self.state = EditorState::Left;
            return LeaveOutcome::Proceeded;
        }

        nav.dispatch(restore);
        self.attempt_leave(back, nav)
    }

    /// Abandon the draft and replay the parked navigation. Returns false when
    /// no leave attempt is pending.
    pub fn confirm_discard<N>(&mut self, refresh: &RefreshChannel, nav: &mut N) -> bool
    where
        N: Navigation<Intent = I>,
    {
        let PendingAction::PendingLeave(intent) =
            std::mem::replace(&mut self.pending, PendingAction::None)
        else {
            return false;
        };

        self.state = EditorState::Clean;
        refresh.fire();
        nav.dispatch(intent);
        self.state = EditorState::Left;
        true
    }

    /// Close the prompt and drop the parked navigation; the draft stays dirty.
    pub fn cancel_leave(&mut self) {
        self.pending = PendingAction::None;
    }
}
