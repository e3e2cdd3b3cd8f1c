//! Core value types used by titandex state.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier of a character as assigned by the remote API.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CharacterId(pub u64);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One series character as returned by the character API.
///
/// Only `id` is required. Every biographical field is optional because the
/// API leaves many of them blank or omits them entirely.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Unique, stable identifier (used as the favorites key).
    pub id: CharacterId,
    /// Display name.
    #[serde(default, deserialize_with = "de_string_or_default")]
    pub name: String,
    /// Image URI.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    /// Age as text (the API mixes numbers and strings).
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Gender.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Species list (e.g., "Human", "Titan").
    #[serde(default, deserialize_with = "de_string_list", skip_serializing_if = "Vec::is_empty")]
    pub species: Vec<String>,
    /// Occupation.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Alive/deceased/unknown status.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Place of birth.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub birthplace: Option<String>,
    /// Place of residence.
    #[serde(default, deserialize_with = "de_opt_text", skip_serializing_if = "Option::is_none")]
    pub residence: Option<String>,
}

impl Character {
    /// What: Normalize an untyped JSON record into a `Character`.
    ///
    /// Inputs:
    /// - `value`: Raw JSON value from the API or the favorites blob
    ///
    /// Output:
    /// - `Some(Character)` when the value is an object carrying a non-null id;
    ///   `None` otherwise.
    ///
    /// Details:
    /// - Ids encoded as numeric strings (`"12"`) are accepted.
    /// - Unknown fields are ignored; malformed optional fields fall back to `None`.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let obj = value.as_object()?;
        let id = match obj.get("id")? {
            serde_json::Value::Number(n) => n.as_u64()?,
            serde_json::Value::String(s) => s.trim().parse::<u64>().ok()?,
            _ => return None,
        };
        let mut normalized = obj.clone();
        normalized.insert("id".to_string(), serde_json::Value::from(id));
        serde_json::from_value(serde_json::Value::Object(normalized)).ok()
    }

    /// Species joined for display, or `None` when the list is empty.
    #[must_use]
    pub fn species_label(&self) -> Option<String> {
        if self.species.is_empty() {
            None
        } else {
            Some(self.species.join(", "))
        }
    }
}

/// What: Turn a JSON scalar into display text.
///
/// Output:
/// - Trimmed text for strings, decimal text for numbers and booleans; `None`
///   for null, empty strings, arrays, and objects.
fn scalar_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => {
            let t = s.trim();
            if t.is_empty() { None } else { Some(t.to_string()) }
        }
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn de_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(scalar_text(value))
}

fn de_string_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(de_opt_text(deserializer)?.unwrap_or_default())
}

fn de_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Array(items) => items.into_iter().filter_map(scalar_text).collect(),
        other => scalar_text(other).into_iter().collect(),
    })
}

/// Character list result sent back by the directory worker.
#[derive(Clone, Debug)]
pub struct DirectoryResults {
    /// Echoed identifier from the originating request.
    pub request_id: u64,
    /// Characters in API order, or the failure.
    pub result: Result<Vec<Character>, crate::error::Error>,
}

/// Single character fetch sent to the details worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DetailsRequest {
    /// Monotonic identifier used to correlate the response.
    pub request_id: u64,
    /// Character to fetch.
    pub id: CharacterId,
}

/// Result corresponding to a prior [`DetailsRequest`].
#[derive(Clone, Debug)]
pub struct DetailsResult {
    /// Echoed identifier from the originating request.
    pub request_id: u64,
    /// Fetched character, or the failure.
    pub result: Result<Character, crate::error::Error>,
}

/// Operation queued for the single favorites owner task.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FavoritesRequest {
    /// Reload the whole collection.
    Load {
        /// Correlation id.
        request_id: u64,
    },
    /// Check whether `id` is bookmarked.
    Contains {
        /// Correlation id.
        request_id: u64,
        /// Character to look up.
        id: CharacterId,
    },
    /// Bookmark a character.
    Add(Character),
    /// Remove a bookmark.
    Remove(CharacterId),
}

/// Outcome of a [`FavoritesRequest`].
#[derive(Clone, Debug)]
pub enum FavoritesResponse {
    /// Result of `Load`.
    Loaded {
        /// Echoed correlation id.
        request_id: u64,
        /// Collection or storage failure.
        result: Result<Vec<Character>, crate::error::Error>,
    },
    /// Result of `Contains`.
    Membership {
        /// Echoed correlation id.
        request_id: u64,
        /// Whether the character is bookmarked.
        is_favorite: bool,
    },
    /// Result of `Add`.
    Added {
        /// Character that was submitted.
        character: Character,
        /// `Ok` when written; `AlreadyExists` or `StorageFailed` otherwise.
        result: Result<(), crate::error::Error>,
    },
    /// Result of `Remove`.
    Removed {
        /// Identifier that was submitted.
        id: CharacterId,
        /// `Ok` when written (including no-op removals).
        result: Result<(), crate::error::Error>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    /// What: Normalize a realistic API record with mixed field shapes.
    ///
    /// Inputs:
    /// - Record with numeric age, species array, empty occupation, and extra fields
    ///
    /// Output:
    /// - Numeric age becomes text, empty strings become `None`, extras are ignored.
    fn from_value_normalizes_api_record() {
        let v = json!({
            "id": 1,
            "name": "Eren Yeager",
            "img": "https://example.test/eren.png",
            "age": 19,
            "gender": "Male",
            "species": ["Human", "Titan"],
            "occupation": "",
            "status": "Deceased",
            "relatives": [{"family": "Yeager"}],
        });
        let c = Character::from_value(&v).expect("valid record");
        assert_eq!(c.id, CharacterId(1));
        assert_eq!(c.name, "Eren Yeager");
        assert_eq!(c.age.as_deref(), Some("19"));
        assert_eq!(c.occupation, None);
        assert_eq!(c.species_label().as_deref(), Some("Human, Titan"));
        assert_eq!(c.birthplace, None);
    }

    #[test]
    /// What: Reject records without a usable identifier.
    ///
    /// Inputs:
    /// - Null id, missing id, non-object, and negative id
    ///
    /// Output:
    /// - `None` for each.
    fn from_value_rejects_missing_or_null_id() {
        assert!(Character::from_value(&json!({"id": null, "name": "Ghost"})).is_none());
        assert!(Character::from_value(&json!({"name": "Nobody"})).is_none());
        assert!(Character::from_value(&json!("Eren")).is_none());
        assert!(Character::from_value(&json!({"id": -3, "name": "Neg"})).is_none());
    }

    #[test]
    /// What: Accept string-encoded identifiers from legacy blobs.
    fn from_value_accepts_numeric_string_id() {
        let c = Character::from_value(&json!({"id": "42", "name": "Levi"})).expect("valid");
        assert_eq!(c.id, CharacterId(42));
    }

    #[test]
    /// What: Serialized form omits absent optional fields.
    fn serialize_skips_empty_fields() {
        let c = Character {
            id: CharacterId(7),
            name: "Mikasa".into(),
            ..Character::default()
        };
        let s = serde_json::to_string(&c).expect("serialize");
        assert_eq!(s, r#"{"id":7,"name":"Mikasa"}"#);
    }
}
