//! Presence data as embedded in the host page.
//! Shapes follow the JSON the presence API serves.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use web_sys::Document;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: u32,
    pub name: String,
}

/// `["Mon", 30047.0]`: presence seconds for a weekday, either the mean or
/// the total depending on the table it comes from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeekdayRow(pub String, pub f64);

// The total presence table leads with a `["Weekday", "Presence (s)"]` header.
#[derive(Deserialize)]
#[serde(untagged)]
enum WeekdayEntry {
    Row(WeekdayRow),
    Header(String, String),
}

fn weekday_rows_without_header<'de, D>(deserializer: D) -> Result<HashMap<u32, Vec<WeekdayRow>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<u32, Vec<WeekdayEntry>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(user_id, entries)| {
            let rows = entries
                .into_iter()
                .filter_map(|entry| match entry {
                    WeekdayEntry::Row(row) => Some(row),
                    WeekdayEntry::Header(..) => None,
                })
                .collect();
            (user_id, rows)
        })
        .collect())
}

/// `["Mon", [33134, 57257]]`: mean start and end, in seconds since midnight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StartEndRow(pub String, pub (f64, f64));

impl StartEndRow {
    pub fn weekday(&self) -> &str {
        &self.0
    }
    pub fn start(&self) -> f64 {
        self.1.0
    }
    pub fn end(&self) -> f64 {
        self.1.1
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceData {
    pub users: Vec<User>,
    #[serde(deserialize_with = "weekday_rows_without_header")]
    pub presence_weekday: HashMap<u32, Vec<WeekdayRow>>,
    pub mean_time: HashMap<u32, Vec<WeekdayRow>>,
    pub start_end: HashMap<u32, Vec<StartEndRow>>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("element #{0} not found")]
    MissingElement(String),
    #[error("malformed presence data: {0}")]
    Json(#[from] serde_json::Error),
}

impl PresenceData {
    pub fn from_json(raw: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_document(document: &Document, element_id: &str) -> Result<Self, LoadError> {
        let raw = document
            .get_element_by_id(element_id)
            .and_then(|el| el.text_content())
            .ok_or_else(|| LoadError::MissingElement(element_id.to_string()))?;
        Self::from_json(&raw)
    }

    pub fn user(&self, user_id: u32) -> Option<&User> {
        self.users.iter().find(|u| u.user_id == user_id)
    }

    pub fn presence_weekday(&self, user_id: u32) -> &[WeekdayRow] {
        self.presence_weekday.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn mean_time(&self, user_id: u32) -> &[WeekdayRow] {
        self.mean_time.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn start_end(&self, user_id: u32) -> &[StartEndRow] {
        self.start_end.get(&user_id).map(Vec::as_slice).unwrap_or(&[])
    }
}
