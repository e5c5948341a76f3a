//! Trait abstraction for the content API client to enable mocking in tests

use super::types::{
    Article, ArticlePayload, ContactMessage, ContactPayload, Event, EventPayload, ListQuery,
    Testimonial, TestimonialPayload,
};
use anyhow::Result;
use async_trait::async_trait;

/// Trait for content API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentApi: Send + Sync {
    /// Check if the API is reachable
    async fn check_connection(&self) -> bool;

    /// List articles
    async fn list_articles(&self, query: ListQuery) -> Result<Vec<Article>>;

    /// Get a single article by slug
    async fn get_article(&self, slug: &str) -> Result<Article>;

    /// Create an article (multipart, at most one attachment)
    async fn create_article(&self, payload: ArticlePayload) -> Result<Article>;

    /// Update an existing article
    async fn update_article(&self, id: &str, payload: ArticlePayload) -> Result<Article>;

    /// Delete an article
    async fn delete_article(&self, id: &str) -> Result<()>;

    /// Toggle the featured flag on an article
    async fn toggle_article_featured(&self, id: &str) -> Result<Article>;

    /// List events
    async fn list_events(&self, query: ListQuery) -> Result<Vec<Event>>;

    /// Get a single event by slug
    async fn get_event(&self, slug: &str) -> Result<Event>;

    /// Create an event (multipart, at most one attachment)
    async fn create_event(&self, payload: EventPayload) -> Result<Event>;

    /// Update an existing event
    async fn update_event(&self, id: &str, payload: EventPayload) -> Result<Event>;

    /// Delete an event
    async fn delete_event(&self, id: &str) -> Result<()>;

    /// Toggle the featured flag on an event
    async fn toggle_event_featured(&self, id: &str) -> Result<Event>;

    /// List testimonials
    async fn list_testimonials(&self, query: ListQuery) -> Result<Vec<Testimonial>>;

    /// Create a testimonial
    async fn create_testimonial(&self, payload: TestimonialPayload) -> Result<Testimonial>;

    /// Update an existing testimonial
    async fn update_testimonial(&self, id: &str, payload: TestimonialPayload)
        -> Result<Testimonial>;

    /// Delete a testimonial
    async fn delete_testimonial(&self, id: &str) -> Result<()>;

    /// Toggle the featured flag on a testimonial
    async fn toggle_testimonial_featured(&self, id: &str) -> Result<Testimonial>;

    /// Submit the public contact form
    async fn submit_contact(&self, payload: ContactPayload) -> Result<()>;

    /// List received contact messages (admin)
    async fn list_contacts(&self, query: ListQuery) -> Result<Vec<ContactMessage>>;

    /// Delete a contact message (admin)
    async fn delete_contact(&self, id: &str) -> Result<()>;
}
