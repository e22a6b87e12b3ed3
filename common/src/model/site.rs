use serde::{Deserialize, Serialize};

/// A catalog entry as the backend returns it.
///
/// The backend is document-store backed and names the identifier `_id`;
/// `id` is accepted too. Fields the backend may omit fall back to their
/// defaults so an older record still decodes.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Server-assigned identifier. Never generated or changed client-side.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Filename or URL of the uploaded image.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    /// Drives the trending badge in the list view.
    #[serde(default)]
    pub is_trending: bool,
    /// Server timestamp, display only.
    #[serde(default)]
    pub updated_at: Option<String>,
}
