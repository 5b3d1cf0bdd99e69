//! Photo tracking models
//!
//! Photo payloads are kept in memory only: the `photos` list is skipped
//! when a record is serialized and comes back empty after a reload, while
//! `photoCount` and the record metadata survive. This keeps inline image
//! payloads out of the durable slots, which have a hard size quota.

use crate::config::MAX_PHOTOS_PER_RECORD;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a photo set documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhotoCategory {
    Progress,
    Issue,
    BeforeAfter,
    Team,
    Material,
    Finishing,
}

/// A single photo with its inline payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,
    /// Inline base64 image payload
    pub data: String,
    pub caption: String,
    pub uploaded_at: DateTime<Utc>,
}

/// A set of site photos for one subject
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoTracking {
    pub id: String,
    pub project_name: String,
    pub category: PhotoCategory,
    /// Not durable: skipped on serialization, reloaded empty
    #[serde(skip)]
    pub photos: Vec<Photo>,
    pub photo_count: usize,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PhotoTracking {
    /// Cap the photo list and mirror its length into `photo_count`.
    pub fn normalize_photos(&mut self) {
        self.photos.truncate(MAX_PHOTOS_PER_RECORD);
        self.photo_count = self.photos.len();
    }
}

/// Create photo tracking request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhotoTrackingRequest {
    pub project_name: String,
    pub category: PhotoCategory,
    #[serde(default)]
    pub photos: Vec<Photo>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Update photo tracking request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePhotoTrackingRequest {
    pub project_name: Option<String>,
    pub category: Option<PhotoCategory>,
    pub photos: Option<Vec<Photo>>,
    pub tags: Option<Vec<String>>,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: &str) -> Photo {
        Photo {
            id: id.to_string(),
            data: "aGVsbG8=".to_string(),
            caption: String::new(),
            uploaded_at: Utc::now(),
        }
    }

    #[test]
    fn test_normalize_caps_photos_and_mirrors_count() {
        let mut record = PhotoTracking {
            id: "pt1".to_string(),
            project_name: "Test".to_string(),
            category: PhotoCategory::Progress,
            photos: (0..7).map(|i| photo(&i.to_string())).collect(),
            photo_count: 0,
            tags: vec![],
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        record.normalize_photos();

        assert_eq!(record.photos.len(), MAX_PHOTOS_PER_RECORD);
        assert_eq!(record.photo_count, MAX_PHOTOS_PER_RECORD);
    }

    #[test]
    fn test_photos_are_not_serialized() {
        let mut record = PhotoTracking {
            id: "pt1".to_string(),
            project_name: "Test".to_string(),
            category: PhotoCategory::Issue,
            photos: vec![photo("a"), photo("b")],
            photo_count: 0,
            tags: vec!["foundation".to_string()],
            description: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        record.normalize_photos();

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("photos\""));
        assert!(json.contains("\"photoCount\":2"));

        let reloaded: PhotoTracking = serde_json::from_str(&json).unwrap();
        assert!(reloaded.photos.is_empty());
        assert_eq!(reloaded.photo_count, 2);
    }
}
