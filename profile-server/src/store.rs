use async_trait::async_trait;
use chrono::{DateTime, Utc};
use shared_types::{is_valid_department, Address, Profile, ProfileFields, DEPARTMENTS};
use sqlx::types::Json;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::ProfileError;

/// Persistence for profile records, keyed by a store-generated id.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Profile>, ProfileError>;
    async fn get(&self, id: &str) -> Result<Profile, ProfileError>;
    async fn create(&self, fields: ProfileFields) -> Result<Profile, ProfileError>;
    async fn update(&self, id: &str, fields: ProfileFields) -> Result<Profile, ProfileError>;
    async fn delete(&self, id: &str) -> Result<(), ProfileError>;
}

/// SQLite-backed profile store.
///
/// Schema (created by the embedded migration):
/// ```sql
/// CREATE TABLE profiles (
///     id          TEXT NOT NULL PRIMARY KEY,
///     name        TEXT NOT NULL,
///     phone       TEXT NOT NULL,
///     department  TEXT NOT NULL,
///     address     TEXT NOT NULL,   -- JSON
///     created_at  TEXT NOT NULL,
///     updated_at  TEXT NOT NULL
/// );
/// ```
#[derive(Debug, Clone)]
pub struct SqliteProfileStore {
    pool: SqlitePool,
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    id: String,
    name: String,
    phone: String,
    department: String,
    address: Json<Address>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            id: row.id,
            name: row.name,
            phone: row.phone,
            department: row.department,
            address: row.address.0,
            created_at: Some(row.created_at),
            updated_at: Some(row.updated_at),
        }
    }
}

const SELECT_PROFILE: &str =
    "SELECT id, name, phone, department, address, created_at, updated_at FROM profiles";

impl SqliteProfileStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for SqliteProfileStore {
    async fn list(&self) -> Result<Vec<Profile>, ProfileError> {
        let rows: Vec<ProfileRow> =
            sqlx::query_as(&format!("{SELECT_PROFILE} ORDER BY created_at, rowid"))
                .fetch_all(&self.pool)
                .await?;
        Ok(rows.into_iter().map(Profile::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Profile, ProfileError> {
        let row: Option<ProfileRow> = sqlx::query_as(&format!("{SELECT_PROFILE} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(Profile::from).ok_or(ProfileError::NotFound)
    }

    async fn create(&self, fields: ProfileFields) -> Result<Profile, ProfileError> {
        let now = Utc::now();
        let mut profile = Profile {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Some(now),
            updated_at: Some(now),
            ..Profile::default()
        };
        apply_fields(&mut profile, fields);
        validate(&profile)?;

        sqlx::query(
            "INSERT INTO profiles (id, name, phone, department, address, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&profile.id)
        .bind(&profile.name)
        .bind(&profile.phone)
        .bind(&profile.department)
        .bind(Json(&profile.address))
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        debug!(id = %profile.id, "profile created");
        Ok(profile)
    }

    async fn update(&self, id: &str, fields: ProfileFields) -> Result<Profile, ProfileError> {
        let mut profile = self.get(id).await?;
        apply_fields(&mut profile, fields);
        validate(&profile)?;

        let now = Utc::now();
        profile.updated_at = Some(now);

        let rows = sqlx::query(
            "UPDATE profiles
             SET name = ?, phone = ?, department = ?, address = ?, updated_at = ?
             WHERE id = ?",
        )
        .bind(&profile.name)
        .bind(&profile.phone)
        .bind(&profile.department)
        .bind(Json(&profile.address))
        .bind(now)
        .bind(id)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if rows == 0 {
            // Deleted between the read and the write.
            return Err(ProfileError::NotFound);
        }

        debug!(id, "profile updated");
        Ok(profile)
    }

    async fn delete(&self, id: &str) -> Result<(), ProfileError> {
        let rows = sqlx::query("DELETE FROM profiles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows == 0 {
            return Err(ProfileError::NotFound);
        }

        debug!(id, "profile deleted");
        Ok(())
    }
}

/// Copy the members present in `fields` onto `profile`.
fn apply_fields(profile: &mut Profile, fields: ProfileFields) {
    if let Some(name) = fields.name {
        profile.name = name;
    }
    if let Some(phone) = fields.phone {
        profile.phone = phone;
    }
    if let Some(department) = fields.department {
        profile.department = department;
    }
    if let Some(address) = fields.address {
        profile.address = address;
    }
}

fn validate(profile: &Profile) -> Result<(), ProfileError> {
    for (field, value) in [
        ("name", &profile.name),
        ("phone", &profile.phone),
        ("department", &profile.department),
    ] {
        if value.trim().is_empty() {
            return Err(ProfileError::Validation(format!("{field} is required")));
        }
    }

    if !is_valid_department(&profile.department) {
        return Err(ProfileError::Validation(format!(
            "department must be an index between 0 and {}",
            DEPARTMENTS.len() - 1
        )));
    }

    Ok(())
}
