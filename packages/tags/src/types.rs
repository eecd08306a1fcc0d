// ABOUTME: Tag type definitions
// ABOUTME: Tag records, their read projection, query parameters, and input payloads

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tagdeck_users::TagSummary;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub sort_order: i64,
    pub creator: String,
}

impl From<Tag> for TagSummary {
    fn from(tag: Tag) -> Self {
        TagSummary {
            id: tag.id,
            name: tag.name,
            sort_order: tag.sort_order,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagCreateInput {
    pub name: String,
    #[serde(default)]
    pub sort_order: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagUpdateInput {
    pub name: Option<String>,
    pub sort_order: Option<i64>,
}

impl TagUpdateInput {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.sort_order.is_none()
    }
}

/// Creator as shown in the read projection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCreator {
    pub nickname: String,
    pub uid: String,
}

/// Read projection of a tag joined with its creator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagInfo {
    pub creator: TagCreator,
    pub name: String,
    pub sort_order: i64,
}

/// Listing parameters. Sorting by order wins over sorting by name;
/// ties and the unsorted listing fall back to id order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagQuery {
    pub sort_by_order: bool,
    pub sort_by_name: bool,
    pub offset: Option<i64>,
    pub length: Option<i64>,
}

impl TagQuery {
    pub(crate) fn order_clause(&self) -> &'static str {
        if self.sort_by_order {
            "t.sort_order, t.id"
        } else if self.sort_by_name {
            "t.name, t.id"
        } else {
            "t.id"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPageMeta {
    pub offset: i64,
    /// Rows in this page
    pub length: i64,
    /// All tags, ignoring paging
    pub quantity: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagPage {
    pub data: Vec<TagInfo>,
    pub meta: TagPageMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTagsInput {
    pub tags: Vec<i64>,
}
