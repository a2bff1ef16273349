use serde::{Deserialize, Serialize};
use web_sys::Document;

pub const DEFAULT_REPOSITORY: &str = "https://intranet.stxnext.pl/api/images/users/";
pub const CONFIG_ELEMENT_ID: &str = "presence-config";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    /// URL prefix the user id is appended to. Must carry its own trailing `/`.
    pub repository: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub avatar: AvatarConfig,
    /// Id of the container holding the avatar `<img>`.
    pub image_element_id: String,
    /// Id of the `<script type="application/json">` carrying presence data.
    pub data_element_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            avatar: AvatarConfig::default(),
            image_element_id: "image".to_string(),
            data_element_id: "presence-data".to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads the optional config element of the host page. Anything missing
    /// or malformed falls back to the defaults.
    pub fn from_document(document: &Document) -> Self {
        let raw = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content());
        match raw {
            Some(raw) => Self::from_json(&raw).unwrap_or_else(|err| {
                log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, err);
                Self::default()
            }),
            None => {
                log::debug!("no #{} element, using default config", CONFIG_ELEMENT_ID);
                Self::default()
            }
        }
    }
}
