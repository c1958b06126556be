//! # Notice board models
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`Notice`] | A notice as returned by `GET /notices` and `GET /notices/:id`. |
//! | [`NoticeCategory`] | The four fixed categories, with label and badge colour. |
//! | [`CategoryFilter`] | `All` or one category; `All` is never sent to the backend. |
//! | [`NoticeFilters`] | Category + free-text search, rendered as query arguments. |
//! | [`NoticeDraft`] | The notice form's text fields, validated into [`NoticeFields`]. |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::forms::{required, FormError};
use crate::models::deserialize_id;

/// Length of the excerpt shown on notice cards.
pub const EXCERPT_CHARS: usize = 150;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeCategory {
    Maintenance,
    Events,
    Security,
    General,
}

impl NoticeCategory {
    pub const ALL: [NoticeCategory; 4] = [
        NoticeCategory::Maintenance,
        NoticeCategory::Events,
        NoticeCategory::Security,
        NoticeCategory::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeCategory::Maintenance => "maintenance",
            NoticeCategory::Events => "events",
            NoticeCategory::Security => "security",
            NoticeCategory::General => "general",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoticeCategory::Maintenance => "Maintenance",
            NoticeCategory::Events => "Events",
            NoticeCategory::Security => "Security",
            NoticeCategory::General => "General",
        }
    }

    /// Badge colour.
    pub fn color(&self) -> &'static str {
        match self {
            NoticeCategory::Maintenance => "#059212",
            NoticeCategory::Events => "#AA60C8",
            NoticeCategory::Security => "#BF3131",
            NoticeCategory::General => "#108ee9",
        }
    }
}

impl fmt::Display for NoticeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NoticeCategory {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NoticeCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or(FormError::UnknownCategory)
    }
}

/// Category selector on the notice board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(NoticeCategory),
}

impl CategoryFilter {
    /// `All` followed by every category, in display order.
    pub fn options() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(NoticeCategory::ALL.into_iter().map(CategoryFilter::Only))
    }

    /// Value used in `<select>` options.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Unknown values select everything.
    pub fn parse(value: &str) -> Self {
        value
            .parse::<NoticeCategory>()
            .map_or(CategoryFilter::All, CategoryFilter::Only)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeFilters {
    pub category: CategoryFilter,
    pub search: String,
}

impl NoticeFilters {
    /// Query arguments for `GET /notices`. Empty search and `All` are omitted.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let CategoryFilter::Only(category) = self.category {
            pairs.push(("category", category.as_str().to_string()));
        }
        let search = self.search.trim();
        if !search.is_empty() {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }
}

/// PDF attached to a notice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    #[serde(default)]
    pub filename: String,
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
    #[serde(rename = "createdAt", alias = "created_at", default)]
    pub created_at: String,
    #[serde(rename = "createdBy", alias = "created_by", default)]
    pub created_by: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub attachments: Option<Attachment>,
}

impl Notice {
    pub fn excerpt(&self) -> String {
        excerpt(&self.content, EXCERPT_CHARS)
    }

    /// The PDF attachment, if it has a usable URL.
    pub fn pdf(&self) -> Option<&Attachment> {
        self.attachments.as_ref().filter(|a| !a.url.is_empty())
    }

    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}

/// First `max_chars` characters of `content`, with `...` appended when cut.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &content[..cut]),
        None => content.to_string(),
    }
}

/// Text fields of the notice form as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
    /// Raw `<select>` value; empty until a category is picked.
    pub category: String,
}

impl NoticeDraft {
    pub fn from_notice(notice: &Notice) -> Self {
        Self {
            title: notice.title.clone(),
            content: notice.content.clone(),
            category: notice.category.as_str().to_string(),
        }
    }

    pub fn validate(&self) -> Result<NoticeFields, FormError> {
        let title = required("Title", &self.title)?;
        if self.category.trim().is_empty() {
            return Err(FormError::Required("Category"));
        }
        let category = self.category.trim().parse()?;
        let content = required("Content", &self.content)?;
        Ok(NoticeFields {
            title,
            content,
            category,
        })
    }
}

/// Validated text fields, ready for the multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeFields {
    pub title: String,
    pub content: String,
    pub category: NoticeCategory,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_from_wire() {
        let notice: Notice = serde_json::from_str(
            r#"{
                "id": 12,
                "title": "Water shutdown",
                "content": "Tank cleaning on Sunday.",
                "category": "maintenance",
                "createdAt": "2025-01-05T09:37:00.000Z",
                "createdBy": "Committee",
                "image_url": "https://cdn.example/tank.png",
                "attachments": {"filename": "schedule.pdf", "url": "https://cdn.example/s.pdf"}
            }"#,
        )
        .unwrap();
        assert_eq!(notice.id, "12");
        assert_eq!(notice.category, NoticeCategory::Maintenance);
        assert_eq!(notice.image(), Some("https://cdn.example/tank.png"));
        assert_eq!(notice.pdf().map(|a| a.filename.as_str()), Some("schedule.pdf"));
    }

    #[test]
    fn test_notice_without_optional_fields() {
        let notice: Notice = serde_json::from_str(
            r#"{"id":"a1","title":"t","content":"c","category":"events","attachments":null}"#,
        )
        .unwrap();
        assert!(notice.image().is_none());
        assert!(notice.pdf().is_none());
        assert_eq!(notice.created_by, "");
    }

    #[test]
    fn test_excerpt() {
        assert_eq!(excerpt("short", 150), "short");
        let long = "a".repeat(151);
        let cut = excerpt(&long, 150);
        assert_eq!(cut.len(), 153);
        assert!(cut.ends_with("..."));
        assert_eq!(excerpt(&"a".repeat(150), 150).len(), 150);
        // Multi-byte characters are cut on char boundaries.
        assert_eq!(excerpt("ééé", 2), "éé...");
    }

    #[test]
    fn test_filter_query_never_sends_all() {
        let filters = NoticeFilters {
            category: CategoryFilter::All,
            search: "  ".to_string(),
        };
        assert!(filters.query_pairs().is_empty());

        let filters = NoticeFilters {
            category: CategoryFilter::parse("security"),
            search: " gate ".to_string(),
        };
        assert_eq!(
            filters.query_pairs(),
            vec![("category", "security".to_string()), ("search", "gate".to_string())]
        );
    }

    #[test]
    fn test_filter_options_and_parse() {
        let values: Vec<_> = CategoryFilter::options().map(|f| f.as_str()).collect();
        assert_eq!(values, ["all", "maintenance", "events", "security", "general"]);
        assert_eq!(CategoryFilter::parse("bogus"), CategoryFilter::All);
    }

    #[test]
    fn test_draft_validation() {
        let mut draft = NoticeDraft::default();
        assert_eq!(draft.validate(), Err(FormError::Required("Title")));
        draft.title = "Diwali party".to_string();
        assert_eq!(draft.validate(), Err(FormError::Required("Category")));
        draft.category = "party".to_string();
        assert_eq!(draft.validate(), Err(FormError::UnknownCategory));
        draft.category = "events".to_string();
        assert_eq!(draft.validate(), Err(FormError::Required("Content")));
        draft.content = "Clubhouse, 7 PM".to_string();
        let fields = draft.validate().unwrap();
        assert_eq!(fields.category, NoticeCategory::Events);
    }
}
