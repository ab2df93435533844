//! School record model matching the `schools` collection documents.

use serde::{Deserialize, Serialize};

/// A school record as cached by the synchronization store.
///
/// The identifier is assigned by the remote store on creation and is
/// immutable afterwards; every other field is mutable via partial update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: String,
    pub name: String,
    pub medium: String,
    pub board: String,
    pub class: i64,
    /// RFC 3339 creation timestamp, set client-side at insert time.
    pub created_at: String,
}

/// Document body for inserting a new school (the store assigns the id).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchool {
    pub name: String,
    pub medium: String,
    pub board: String,
    pub class: i64,
    pub created_at: String,
}

impl NewSchool {
    /// Build an insert body with the creation timestamp stamped now.
    pub fn new(name: String, medium: String, board: String, class: i64) -> Self {
        Self {
            name,
            medium,
            board,
            class,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Attach the identifier assigned by the remote store.
    pub fn into_school(self, id: String) -> School {
        School {
            id,
            name: self.name,
            medium: self.medium,
            board: self.board,
            class: self.class,
            created_at: self.created_at,
        }
    }
}

/// Partial update for a school. Fields left as `None` are not sent and the
/// remote store leaves them untouched (merge semantics, not replace).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<i64>,
}

impl SchoolPatch {
    /// Shallow-merge this patch into an existing record, preserving the
    /// identifier and any field the patch does not carry.
    pub fn apply_to(&self, school: &mut School) {
        if let Some(name) = &self.name {
            school.name = name.clone();
        }
        if let Some(medium) = &self.medium {
            school.medium = medium.clone();
        }
        if let Some(board) = &self.board {
            school.board = board.clone();
        }
        if let Some(class) = self.class {
            school.class = class;
        }
    }
}
