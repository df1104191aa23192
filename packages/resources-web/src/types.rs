//! Type definitions for the resources API
//!
//! `Raw*` types mirror the JSON the backend sends. They are converted into
//! the view-side types at the client boundary, never rendered directly.

use serde::Deserialize;

// ============================================================================
// Wire Types
// ============================================================================

/// Resource id as sent by the backend: a JSON number or a JSON string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl RawId {
    /// Normalize to the textual form used everywhere in the UI.
    ///
    /// Integral numbers print without a fractional part even when the wire
    /// spelled them as floats (`1.0`, `1e2`).
    pub fn into_text(self) -> String {
        match self {
            RawId::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => {
                    if f == 0.0 {
                        "0".to_string()
                    } else {
                        format!("{f:.0}")
                    }
                }
                _ => n.to_string(),
            },
            RawId::Text(s) => s,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawResource {
    pub id: RawId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image_url: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(alias = "datePublished")]
    pub date: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
}

/// `GET /api/resources` body. Pagination fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcesEnvelope {
    pub success: Option<bool>,
    pub resources: Option<Vec<RawResource>>,
    pub error: Option<String>,
}

/// `GET /api/resources/{id}` body.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceEnvelope {
    pub success: Option<bool>,
    pub resource: Option<RawResource>,
    pub error: Option<String>,
}

// ============================================================================
// Resource Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Blog,
    Video,
    Article,
    Other(String),
}

impl Category {
    /// Tailwind classes for the category badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            Category::Blog => "bg-blue-100 text-blue-800",
            Category::Video => "bg-red-100 text-red-800",
            Category::Article => "bg-green-100 text-green-800",
            Category::Other(_) => "bg-purple-100 text-purple-800",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Blog => "blog",
            Category::Video => "video",
            Category::Article => "article",
            Category::Other(raw) => raw,
        }
    }

    /// Badge text: the raw tag with its first character upper-cased.
    pub fn label(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl From<String> for Category {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "blog" => Category::Blog,
            "video" => Category::Video,
            "article" => Category::Article,
            _ => Category::Other(raw),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub category: Category,
    pub date: Option<String>,
    pub url: Option<String>,
    pub content: Option<String>,
}

/// Reasons a wire resource is refused at the boundary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidResource {
    #[error("resource id is blank")]
    BlankId,

    #[error("resource {id} has a blank title")]
    BlankTitle { id: String },
}

impl TryFrom<RawResource> for Resource {
    type Error = InvalidResource;

    fn try_from(raw: RawResource) -> Result<Self, Self::Error> {
        let id = raw.id.into_text();
        if id.trim().is_empty() {
            return Err(InvalidResource::BlankId);
        }
        if raw.title.trim().is_empty() {
            return Err(InvalidResource::BlankTitle { id });
        }

        Ok(Self {
            id,
            title: raw.title,
            description: raw.description,
            image_url: non_blank(raw.image_url),
            category: Category::from(raw.category),
            date: non_blank(raw.date),
            url: non_blank(raw.url),
            content: non_blank(raw.content),
        })
    }
}

/// The backend sends `null` and `""` interchangeably for unset fields.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
