//! Shared types between the profile app and the profile server
//!
//! These types are used by both:
//! - the axum profile server (native Rust)
//! - the Dioxus profile app (WASM)
//!
//! Serializable with serde for JSON over HTTP

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

mod catalog;
mod path;

pub use catalog::{department_label, is_valid_department, COUNTRIES, COUNTRY_NONE, DEPARTMENTS};
pub use path::{AddressField, FieldPath, PathError};

// ============================================================================
// Profile Entity
// ============================================================================

/// Profile record as stored by the server.
///
/// `id` is empty until the server has created the record. `department` holds
/// the decimal index into [`DEPARTMENTS`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../bindings/profile-types.ts")]
pub struct Profile {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub address: Address,
    #[serde(
        rename = "createdAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        rename = "updatedAt",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    #[ts(optional)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// Blank template used when creating a new profile.
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn is_persisted(&self) -> bool {
        !self.id.is_empty()
    }
}

/// Embedded postal address. Every member is optional free text except
/// `country`, which is one of [`COUNTRIES`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../bindings/profile-types.ts")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub country: String,
}

// ============================================================================
// API Types
// ============================================================================

/// Body of `POST /profile` and `PUT /profile/:id`.
///
/// Members left as `None` are omitted from the JSON so the server can tell a
/// missing field from an empty one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, TS)]
#[ts(export, export_to = "../../bindings/profile-types.ts")]
pub struct ProfileFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub address: Option<Address>,
}

impl From<&Profile> for ProfileFields {
    fn from(profile: &Profile) -> Self {
        Self {
            name: Some(profile.name.clone()),
            phone: Some(profile.phone.clone()),
            department: Some(profile.department.clone()),
            address: Some(profile.address.clone()),
        }
    }
}

/// Success body of create and update: `{ message, profile }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../bindings/profile-types.ts")]
pub struct ProfileEnvelope {
    pub message: String,
    pub profile: Profile,
}

/// Success body of delete: `{ message }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../bindings/profile-types.ts")]
pub struct MessageBody {
    pub message: String,
}

/// Failure body of every endpoint: `{ error }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export, export_to = "../../bindings/profile-types.ts")]
pub struct ErrorBody {
    pub error: String,
}

// ============================================================================
// Constants
// ============================================================================

/// Response messages
pub const MSG_PROFILE_CREATED: &str = "profile created";
pub const MSG_PROFILE_UPDATED: &str = "profile updated";
pub const MSG_PROFILE_DELETED: &str = "profile deleted";
pub const MSG_PROFILE_NOT_FOUND: &str = "profile not found";
pub const MSG_LIST_FAILED: &str = "failed to retrieve profiles";

// ============================================================================
// Tests
// ============================================================================
