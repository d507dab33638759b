// ABOUTME: Serde data models for Canvas API responses
// ABOUTME: Tolerant parsing with optional fields and ignored extras

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Module {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub published: bool,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub title: String,
    /// Slug assigned by Canvas; authoritative once returned, may differ
    /// from the locally computed slug.
    pub url: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}


#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleItem {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "type", default)]
    pub item_type: Option<String>,
    /// Present only for items of type "Page".
    #[serde(default)]
    pub page_url: Option<String>,
}
