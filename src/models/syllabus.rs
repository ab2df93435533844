//! Syllabus models matching the `syllabus` collection documents.
//!
//! Syllabus creation is fire-and-forget: the client never reads the
//! collection back, so there is no cached record type with an id. The key
//! style is mixed (snake_case body, camelCase timestamp) because that is
//! what the existing documents look like.

use serde::{Deserialize, Serialize};

/// Document body for creating a syllabus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSyllabus {
    pub board: String,
    pub class: i64,
    pub subject: String,
    pub academic_year: i64,
    pub syllabus_description: String,
    pub topics: Vec<Topic>,
    #[serde(rename = "createdOn")]
    pub created_on: String,
}

/// An ordered topic within a syllabus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub description: String,
    pub subtopics: Vec<SubTopic>,
}

/// An ordered subtopic within a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTopic {
    pub title: String,
    pub description: String,
}
