//! Data model for the user pipeline
//!
//! `RawUser` mirrors the source API's nested shape; every field is optional
//! so a partial payload degrades to null fields instead of a parse error.
//! `FlatUser` is the canonical 13-field row produced by the transformer.

use serde::{Deserialize, Serialize};

/// Column names of the flat row, in canonical order.
pub const FLAT_COLUMNS: [&str; 13] = [
    "user_id",
    "name",
    "username",
    "email",
    "phone",
    "website",
    "city",
    "zipcode",
    "latitude",
    "longitude",
    "company_name",
    "company_phrase",
    "company_bs",
];

/// Raw user record as delivered by the source API
#[derive(Debug, Clone, Deserialize)]
pub struct RawUser {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub address: Option<RawAddress>,
    #[serde(default)]
    pub company: Option<RawCompany>,
}

/// Nested address block of a raw user
#[derive(Debug, Clone, Deserialize)]
pub struct RawAddress {
    pub city: Option<String>,
    pub zipcode: Option<String>,
    #[serde(default)]
    pub geo: Option<RawGeo>,
}

/// Geo-coordinate pair nested inside the address block
///
/// The source serializes coordinates as strings; they stay textual until the
/// insight reporter parses them.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeo {
    pub lat: Option<String>,
    pub lng: Option<String>,
}

/// Nested company block of a raw user
#[derive(Debug, Clone, Deserialize)]
pub struct RawCompany {
    pub name: Option<String>,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: Option<String>,
    pub bs: Option<String>,
}

/// Canonical flat row: exactly 13 nullable fields, one per source user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FlatUser {
    pub user_id: Option<i64>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub city: Option<String>,
    pub zipcode: Option<String>,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub company_name: Option<String>,
    pub company_phrase: Option<String>,
    pub company_bs: Option<String>,
}

impl FlatUser {
    /// Render the row as CSV fields in `FLAT_COLUMNS` order, nulls as empty
    pub fn csv_fields(&self) -> Vec<String> {
        fn text(field: &Option<String>) -> String {
            field.clone().unwrap_or_default()
        }

        vec![
            self.user_id.map(|id| id.to_string()).unwrap_or_default(),
            text(&self.name),
            text(&self.username),
            text(&self.email),
            text(&self.phone),
            text(&self.website),
            text(&self.city),
            text(&self.zipcode),
            text(&self.latitude),
            text(&self.longitude),
            text(&self.company_name),
            text(&self.company_phrase),
            text(&self.company_bs),
        ]
    }
}

/// A flat row that failed validation, with the violated rule names joined
/// by `", "` in rule-evaluation order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedUser {
    pub user: FlatUser,
    pub violations: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_fields_renders_nulls_as_empty() {
        let user = FlatUser {
            user_id: Some(7),
            name: Some("Ada".to_string()),
            ..Default::default()
        };

        let fields = user.csv_fields();
        assert_eq!(fields.len(), FLAT_COLUMNS.len());
        assert_eq!(fields[0], "7");
        assert_eq!(fields[1], "Ada");
        assert!(fields[2..].iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_raw_user_tolerates_missing_blocks() {
        let raw: RawUser = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        assert_eq!(raw.id, Some(3));
        assert!(raw.address.is_none());
        assert!(raw.company.is_none());
    }
}
