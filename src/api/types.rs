//! Resource models, response envelopes, and request payloads for the
//! content API.
//!
//! The backend wraps every response body in a `{ success, data, message }`
//! envelope with the collection nested one level deeper (for example
//! `data.articles`). All of that unwrapping happens here and in the client
//! so the rest of the app only ever sees plain resource structs.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Article author block, stored as structured metadata on the article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthorMeta {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub designation: String,
}

/// SEO metadata block attached to articles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    #[serde(default)]
    pub meta_title: String,
    #[serde(default)]
    pub meta_description: String,
    #[serde(default)]
    pub meta_keywords: Vec<String>,
    #[serde(default)]
    pub robots: Option<String>,
}

/// Published article as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub excerpt: String,
    #[serde(default)]
    pub content: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub author: AuthorMeta,
    #[serde(default)]
    pub seo: SeoMeta,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub featured_image: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Event as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub short_excerpt: String,
    #[serde(default)]
    pub full_description: String,
    pub category: String,
    #[serde(default)]
    pub audience: String,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub status: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub timezone: String,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form price block, `{"currency": ..., "value": ...}` shaped
    #[serde(default = "default_price")]
    pub price: serde_json::Value,
    /// Speaker list as stored by the backend
    #[serde(default = "default_speakers")]
    pub speakers: serde_json::Value,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_price() -> serde_json::Value {
    serde_json::json!({"currency": "INR", "value": 0})
}

fn default_speakers() -> serde_json::Value {
    serde_json::json!([])
}

/// Client testimonial as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub company: String,
    pub quote: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub featured: bool,
}

/// Contact form submission as stored by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub phone: String,
    pub message: String,
    pub created_at: Option<DateTime<Utc>>,
}

/// Pagination parameters for list endpoints.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ListQuery {
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 50 }
    }
}

/// Response envelope used by every endpoint.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Nested collection payloads inside list envelopes.
#[derive(Debug, Deserialize)]
pub struct ArticleList {
    #[serde(default)]
    pub articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Debug, Deserialize)]
pub struct TestimonialList {
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Deserialize)]
pub struct ContactList {
    #[serde(default)]
    pub contacts: Vec<ContactMessage>,
}

/// A single optional file bundled with a multipart submission.
///
/// Owned by the form until handed to the Submitter; dropped after a
/// successful submit.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub size: u64,
}

impl Attachment {
    /// Read a file from disk into an attachment.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read attachment {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());
        let size = bytes.len() as u64;
        Ok(Self {
            filename,
            bytes,
            size,
        })
    }
}

/// Multipart payload for article create/update.
#[derive(Debug, Clone, Default)]
pub struct ArticlePayload {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    /// Raw author JSON as entered in the form (already validated).
    pub author: String,
    /// Raw SEO JSON as entered in the form (already validated).
    pub seo: String,
    pub published: bool,
    pub featured: bool,
    pub attachment: Option<Attachment>,
}

/// Multipart payload for event create/update.
#[derive(Debug, Clone, Default)]
pub struct EventPayload {
    pub title: String,
    pub short_excerpt: String,
    pub full_description: String,
    pub category: String,
    pub audience: String,
    pub mode: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub timezone: String,
    pub capacity: Option<u32>,
    pub tags: Vec<String>,
    /// Raw price JSON as entered in the form (already validated).
    pub price: String,
    /// Raw speakers JSON as entered in the form (already validated).
    pub speakers: String,
    pub registration_link: String,
    pub featured: bool,
    pub attachment: Option<Attachment>,
}

/// JSON payload for testimonial create/update.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPayload {
    pub name: String,
    pub designation: String,
    pub company: String,
    pub quote: String,
    pub rating: u8,
    pub featured: bool,
}

/// JSON payload for the public contact form.
///
/// Optional fields are sent as empty strings rather than omitted, matching
/// what the website form submits.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub service: String,
    pub phone: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_article_list_envelope_deserializes() {
        let body = r#"{
            "success": true,
            "data": {
                "articles": [{
                    "_id": "a1",
                    "title": "Scaling GenAI Training",
                    "slug": "scaling-genai-training",
                    "excerpt": "How we run cohorts",
                    "category": "Training",
                    "tags": ["genai", "training"],
                    "author": {"name": "Nanda Kumar", "designation": "Founder & CEO"},
                    "seo": {"metaTitle": "Scaling GenAI", "metaKeywords": ["ai"]},
                    "published": true,
                    "featured": false
                }]
            }
        }"#;

        let env: Envelope<ArticleList> = serde_json::from_str(body).unwrap();
        assert!(env.success);
        let list = env.data.unwrap();
        assert_eq!(list.articles.len(), 1);
        let article = &list.articles[0];
        assert_eq!(article.id, "a1");
        assert_eq!(article.author.name, "Nanda Kumar");
        assert_eq!(article.seo.meta_title, "Scaling GenAI");
        assert!(article.published);
    }

    #[test]
    fn test_envelope_with_missing_data_and_message() {
        let body = r#"{"success": false, "message": "Article not found"}"#;
        let env: Envelope<Article> = serde_json::from_str(body).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message.as_deref(), Some("Article not found"));
    }

    #[test]
    fn test_testimonial_list_nested_collection() {
        let body = r#"{
            "success": true,
            "data": {
                "testimonials": [
                    {"_id": "t1", "name": "Jane Roe", "quote": "Great team", "rating": 5}
                ]
            }
        }"#;
        let env: Envelope<TestimonialList> = serde_json::from_str(body).unwrap();
        let list = env.data.unwrap();
        assert_eq!(list.testimonials[0].name, "Jane Roe");
        assert_eq!(list.testimonials[0].rating, 5);
        assert!(!list.testimonials[0].featured);
    }

    #[test]
    fn test_event_price_and_speakers_round_trip() {
        let body = r#"{
            "_id": "e1",
            "title": "GenAI Masterclass",
            "shortExcerpt": "Two-day deep dive",
            "category": "Masterclass",
            "startDate": "2025-10-01",
            "price": {"currency": "USD", "value": 499},
            "speakers": [{"name": "Nanda Kumar", "topic": "Agents"}]
        }"#;
        let event: Event = serde_json::from_str(body).unwrap();
        assert_eq!(event.price["currency"], "USD");
        assert_eq!(event.price["value"], 499);
        assert_eq!(event.speakers[0]["name"], "Nanda Kumar");

        // Absent fields fall back to the backend's defaults.
        let body = r#"{
            "_id": "e2",
            "title": "Intro Webinar",
            "shortExcerpt": "Free session",
            "category": "Webinar",
            "startDate": "2025-11-01"
        }"#;
        let event: Event = serde_json::from_str(body).unwrap();
        assert_eq!(event.price["currency"], "INR");
        assert_eq!(event.price["value"], 0);
        assert!(event.speakers.as_array().is_some_and(Vec::is_empty));
    }

    #[test]
    fn test_contact_payload_serializes_empty_optionals() {
        let payload = ContactPayload {
            name: "Jane Roe".to_string(),
            email: "jane@co.com".to_string(),
            message: "Interested in your AI services.".to_string(),
            ..Default::default()
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["name"], "Jane Roe");
        assert_eq!(json["company"], "");
        assert_eq!(json["service"], "");
        assert_eq!(json["phone"], "");
    }

    #[test]
    fn test_default_list_query() {
        let q = ListQuery::default();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 50);
    }
}
