//! # Identity models shared by every layer
//!
//! These are the types the session store hands out and the REST client decodes.
//! They are `Serialize + Deserialize` so the client can read them straight off
//! the wire.
//!
//! | Type | Represents |
//! |------|-----------|
//! | [`User`] | The signed-in account as returned by `GET /users/me`: an id, a [`Role`], and the contact identifier the backend reports. |
//! | [`Role`] | One of the three society roles. The permission table is keyed by it. |
//! | [`Page`] | One page of a paginated listing (`{data, total}`). |
//!
//! The backend is not consistent about id types (users come back with a string
//! `userId`, visitor rows with a numeric `resident_id`), so ids are normalised
//! to strings by [`deserialize_id`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A society role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Resident,
    Committee,
    Admin,
}

impl Role {
    /// Every role, in ascending order of privilege.
    pub const ALL: [Role; 3] = [Role::Resident, Role::Committee, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Resident => "resident",
            Role::Committee => "committee",
            Role::Admin => "admin",
        }
    }

    /// Human-friendly label for headers and badges.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Resident => "Resident",
            Role::Committee => "Committee",
            Role::Admin => "Admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a role string is not one of the three known roles.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown role `{0}`")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

/// The authenticated account.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct User {
    #[serde(rename = "userId")]
    pub id: String,
    pub role: Role,
    /// Contact identifier reported by the backend (email or mobile number).
    #[serde(rename = "email")]
    pub contact: String,
}

/// Wire shape of a user. The backend may send `userId`, `id`, or both.
#[derive(Deserialize)]
struct RawUser {
    #[serde(rename = "userId", default, deserialize_with = "deserialize_optional_id")]
    user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    id: Option<String>,
    role: Role,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    mobile_number: Option<String>,
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawUser::deserialize(deserializer)?;
        let id = raw
            .user_id
            .or(raw.id)
            .ok_or_else(|| serde::de::Error::missing_field("userId"))?;
        Ok(User {
            id,
            role: raw.role,
            contact: raw.email.or(raw.mobile_number).unwrap_or_default(),
        })
    }
}

impl User {
    /// Whether this user owns a record created by `owner_id`.
    pub fn owns(&self, owner_id: &str) -> bool {
        self.id == owner_id
    }
}

/// One page of a paginated listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Accepts either a JSON string or a JSON number and yields its string form.
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(i64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

/// Optional variant of [`deserialize_id`]; `null` becomes `None`.
pub fn deserialize_optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "deserialize_id")] String);

    Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(id)| id))
}

/// Writes numeric ids back as JSON numbers so the backend sees the type it issued.
pub fn serialize_id<S>(id: &str, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id.parse::<i64>() {
        Ok(n) => serializer.serialize_i64(n),
        Err(_) => serializer.serialize_str(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_identity_payload() {
        let user: User =
            serde_json::from_str(r#"{"userId":"42","role":"committee","email":"a@b.c"}"#).unwrap();
        assert_eq!(user.id, "42");
        assert_eq!(user.role, Role::Committee);
        assert_eq!(user.contact, "a@b.c");
    }

    #[test]
    fn test_numeric_user_id_is_normalised() {
        let user: User = serde_json::from_str(r#"{"id":7,"role":"resident"}"#).unwrap();
        assert_eq!(user.id, "7");
        assert!(user.owns("7"));
        assert_eq!(user.contact, "");
    }

    #[test]
    fn test_both_id_keys_prefer_user_id() {
        let user: User = serde_json::from_str(
            r#"{"id":7,"userId":"8","role":"resident","email":"a@b.c","mobile_number":"9000000000"}"#,
        )
        .unwrap();
        assert_eq!(user.id, "8");
        assert_eq!(user.contact, "a@b.c");
    }

    #[test]
    fn test_user_without_id_is_rejected() {
        assert!(serde_json::from_str::<User>(r#"{"role":"admin"}"#).is_err());
        let user: User =
            serde_json::from_str(r#"{"id":"3","role":"admin","mobile_number":"9000000000"}"#).unwrap();
        assert_eq!(user.contact, "9000000000");
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!(
            "security".parse::<Role>(),
            Err(UnknownRole("security".to_string()))
        );
        assert!(serde_json::from_str::<Role>(r#""guard""#).is_err());
    }

    #[test]
    fn test_page_defaults_total() {
        let page: Page<u32> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(page.data, vec![1, 2]);
        assert_eq!(page.total, 0);
    }
}
