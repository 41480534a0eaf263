use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A stored activity row.
#[derive(sqlx::FromRow, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: String,
    pub date: NaiveDate,
    pub duration_minutes: i32,
}

/// Incoming body for create and update. Every field is optional here so
/// that missing values surface as validation messages instead of
/// deserialization failures. Any `id` in the body is ignored.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<NaiveDate>,
    pub duration_minutes: Option<i32>,
}

/// Validated and trimmed field values, ready to be written.
#[derive(Validate, Debug, Clone, PartialEq)]
pub struct NewActivity {
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub category: String,
    pub date: NaiveDate,
    pub duration_minutes: i32,
}
