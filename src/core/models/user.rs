use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Assigned by the store; `None` until the record is first saved.
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields of a user, before any business rules run.
///
/// Missing or null fields deserialize as empty so that validation, not the
/// JSON extractor, reports them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UserDraft {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    pub phone: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UserDraft {
    pub fn new(name: &str, email: &str, phone: Option<&str>) -> Self {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.map(String::from),
        }
    }
}

impl User {
    /// Builds an unsaved record with both timestamps set to `now`.
    pub fn from_draft(draft: UserDraft, now: DateTime<Utc>) -> Self {
        User {
            id: None,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the mutable fields and refreshes `updated_at`.
    ///
    /// The new stamp is always strictly later than the previous one, even when
    /// the clock has not moved between two mutations.
    pub fn apply(&mut self, draft: UserDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}
