//! Form submission state machine.
//!
//! Per attempt the status moves strictly
//! Idle -> Submitting -> Success | Error, and a terminal status falls back
//! to Idle once its deadline passes. The deadline is checked from the
//! event loop tick rather than a spawned timer, so the whole machine stays
//! single threaded and deterministic under test.
//!
//! A submit is a no-op while one is already in flight. Validation runs
//! before any network activity; a form with errors never reaches the API.

use crate::api::{
    ArticlePayload, ContactPayload, ContentApi, EventPayload, TestimonialPayload,
};
use crate::state::forms::{split_tags, FormKind, FormState};
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long a success or error notice stays up before the status clears
const RESET_DELAY: Duration = Duration::from_secs(5);

/// Where a submission attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

/// Drives one form's submissions and the status shown for them
#[derive(Debug)]
pub struct Submitter {
    status: SubmissionStatus,
    reset_delay: Duration,
    reset_at: Option<Instant>,
    last_error: Option<String>,
}

impl Default for Submitter {
    fn default() -> Self {
        Self::with_delay(RESET_DELAY)
    }
}

impl Submitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(reset_delay: Duration) -> Self {
        Self {
            status: SubmissionStatus::Idle,
            reset_delay,
            reset_at: None,
            last_error: None,
        }
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Message from the most recent failed attempt, until the status clears
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Clear a terminal status once its deadline has passed. Called from
    /// the event loop tick.
    pub fn tick(&mut self, now: Instant) {
        if matches!(
            self.status,
            SubmissionStatus::Success | SubmissionStatus::Error
        ) && self.reset_at.is_some_and(|at| now >= at)
        {
            self.status = SubmissionStatus::Idle;
            self.reset_at = None;
            self.last_error = None;
        }
    }

    /// Validate and submit a form through the API.
    ///
    /// Returns true only when the backend accepted the submission; the
    /// form is reset in that case. On failure the entered values (and any
    /// attachment) are kept so the user can retry.
    pub async fn submit(&mut self, api: &dyn ContentApi, form: &mut FormState) -> bool {
        if self.is_submitting() {
            return false;
        }
        if !form.validate_all() {
            return false;
        }

        self.status = SubmissionStatus::Submitting;
        self.last_error = None;

        let result = dispatch(api, form).await;
        self.reset_at = Some(Instant::now() + self.reset_delay);
        match result {
            Ok(()) => {
                info!(form = ?form.kind, "submission accepted");
                self.status = SubmissionStatus::Success;
                form.reset();
                true
            }
            Err(err) => {
                warn!(form = ?form.kind, error = %err, "submission failed");
                self.status = SubmissionStatus::Error;
                self.last_error = Some(err.to_string());
                false
            }
        }
    }
}

/// Exactly one API call per accepted attempt, chosen by form kind
async fn dispatch(api: &dyn ContentApi, form: &FormState) -> anyhow::Result<()> {
    match &form.kind {
        FormKind::Contact => api.submit_contact(contact_payload(form)).await,
        FormKind::ArticleCreate => api.create_article(article_payload(form)).await.map(|_| ()),
        FormKind::ArticleEdit(id) => api
            .update_article(id, article_payload(form))
            .await
            .map(|_| ()),
        FormKind::EventCreate => api.create_event(event_payload(form)).await.map(|_| ()),
        FormKind::EventEdit(id) => api.update_event(id, event_payload(form)).await.map(|_| ()),
        FormKind::TestimonialCreate => api
            .create_testimonial(testimonial_payload(form))
            .await
            .map(|_| ()),
        FormKind::TestimonialEdit(id) => api
            .update_testimonial(id, testimonial_payload(form))
            .await
            .map(|_| ()),
    }
}

/// Optional fields go out as empty strings, matching what the website
/// form sends.
fn contact_payload(form: &FormState) -> ContactPayload {
    ContactPayload {
        name: form.value("name").trim().to_string(),
        email: form.value("email").trim().to_string(),
        company: form.value("company").trim().to_string(),
        service: form.value("service").to_string(),
        phone: form.value("phone").trim().to_string(),
        message: form.value("message").trim().to_string(),
    }
}

fn article_payload(form: &FormState) -> ArticlePayload {
    ArticlePayload {
        title: form.value("title").trim().to_string(),
        excerpt: form.value("excerpt").trim().to_string(),
        content: form.value("content").to_string(),
        category: form.value("category").to_string(),
        tags: split_tags(form.value("tags")),
        author: form.value("author").to_string(),
        seo: form.value("seo").to_string(),
        published: form.flag("published"),
        featured: form.flag("featured"),
        attachment: form.attachment().cloned(),
    }
}

fn event_payload(form: &FormState) -> EventPayload {
    EventPayload {
        title: form.value("title").trim().to_string(),
        short_excerpt: form.value("shortExcerpt").trim().to_string(),
        full_description: form.value("fullDescription").to_string(),
        category: form.value("category").to_string(),
        audience: form.value("audience").trim().to_string(),
        mode: form.value("mode").to_string(),
        status: form.value("status").to_string(),
        start_date: form.value("startDate").trim().to_string(),
        end_date: form.value("endDate").trim().to_string(),
        timezone: form.value("timezone").trim().to_string(),
        capacity: form.value("capacity").trim().parse().ok(),
        tags: split_tags(form.value("tags")),
        price: form.value("price").to_string(),
        speakers: form.value("speakers").to_string(),
        registration_link: form.value("registrationLink").trim().to_string(),
        featured: form.flag("featured"),
        attachment: form.attachment().cloned(),
    }
}

fn testimonial_payload(form: &FormState) -> TestimonialPayload {
    TestimonialPayload {
        name: form.value("name").trim().to_string(),
        designation: form.value("designation").trim().to_string(),
        company: form.value("company").trim().to_string(),
        quote: form.value("quote").trim().to_string(),
        rating: form.value("rating").parse().unwrap_or(5),
        featured: form.flag("featured"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Attachment, Event, MockContentApi, Testimonial};
    use crate::state::forms::{contact_form, event_form_from, testimonial_form, FormOptions};
    use anyhow::anyhow;

    fn valid_contact_form() -> FormState {
        let mut form = contact_form(&FormOptions::default());
        form.set_value("name", "Jane Roe".into());
        form.set_value("email", "jane@co.com".into());
        form.set_value("message", "Interested in your AI services.".into());
        form
    }

    mod guards {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_invalid_form_makes_no_api_call() {
            // No expectations registered: any call would panic the mock.
            let api = MockContentApi::new();
            let mut form = contact_form(&FormOptions::default());
            let mut submitter = Submitter::new();

            let ok = submitter.submit(&api, &mut form).await;

            assert!(!ok);
            assert_eq!(submitter.status(), SubmissionStatus::Idle);
            assert!(form.has_errors());
        }

        #[tokio::test]
        async fn test_in_flight_submit_is_a_no_op() {
            let api = MockContentApi::new();
            let mut form = valid_contact_form();
            let mut submitter = Submitter::new();
            submitter.status = SubmissionStatus::Submitting;

            let ok = submitter.submit(&api, &mut form).await;

            assert!(!ok);
            assert_eq!(submitter.status(), SubmissionStatus::Submitting);
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_successful_submit_resets_form() {
            let mut api = MockContentApi::new();
            api.expect_submit_contact()
                .withf(|payload| {
                    payload.name == "Jane Roe"
                        && payload.email == "jane@co.com"
                        && payload.message == "Interested in your AI services."
                        && payload.company.is_empty()
                        && payload.service.is_empty()
                        && payload.phone.is_empty()
                })
                .times(1)
                .returning(|_| Ok(()));

            let mut form = valid_contact_form();
            let mut submitter = Submitter::new();

            let ok = submitter.submit(&api, &mut form).await;

            assert!(ok);
            assert_eq!(submitter.status(), SubmissionStatus::Success);
            assert_eq!(form.value("name"), "");
            assert_eq!(form.value("message"), "");
            assert!(!form.has_errors());
        }

        #[tokio::test]
        async fn test_failed_submit_preserves_values() {
            let mut api = MockContentApi::new();
            api.expect_submit_contact()
                .times(1)
                .returning(|_| Err(anyhow!("Service temporarily unavailable")));

            let mut form = valid_contact_form();
            let mut submitter = Submitter::new();

            let ok = submitter.submit(&api, &mut form).await;

            assert!(!ok);
            assert_eq!(submitter.status(), SubmissionStatus::Error);
            assert_eq!(
                submitter.last_error(),
                Some("Service temporarily unavailable")
            );
            assert_eq!(form.value("name"), "Jane Roe");
            assert_eq!(form.value("email"), "jane@co.com");
        }
    }

    mod auto_reset {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_status_clears_after_delay() {
            let mut api = MockContentApi::new();
            api.expect_submit_contact().returning(|_| Ok(()));

            let mut form = valid_contact_form();
            let mut submitter = Submitter::new();
            submitter.submit(&api, &mut form).await;
            assert_eq!(submitter.status(), SubmissionStatus::Success);

            // Before the deadline nothing changes.
            submitter.tick(Instant::now());
            assert_eq!(submitter.status(), SubmissionStatus::Success);

            // Past the deadline we are back to idle.
            submitter.tick(Instant::now() + Duration::from_secs(6));
            assert_eq!(submitter.status(), SubmissionStatus::Idle);
            assert_eq!(submitter.last_error(), None);
        }

        #[tokio::test]
        async fn test_error_status_also_clears() {
            let mut api = MockContentApi::new();
            api.expect_submit_contact().returning(|_| Err(anyhow!("boom")));

            let mut form = valid_contact_form();
            let mut submitter = Submitter::with_delay(Duration::from_millis(10));
            submitter.submit(&api, &mut form).await;
            assert_eq!(submitter.status(), SubmissionStatus::Error);

            submitter.tick(Instant::now() + Duration::from_secs(1));
            assert_eq!(submitter.status(), SubmissionStatus::Idle);
        }
    }

    mod payloads {
        use super::*;
        use pretty_assertions::assert_eq;
        use crate::state::forms::{article_form, event_form};

        #[test]
        fn test_article_payload_carries_attachment_and_tags() {
            let mut form = article_form(&FormOptions::default());
            form.set_value("title", "Scaling GenAI Training".into());
            form.set_value("tags", "ai, training".into());
            form.set_attachment(Attachment {
                filename: "cover.png".into(),
                bytes: vec![1, 2, 3],
                size: 3,
            });

            let payload = article_payload(&form);
            assert_eq!(payload.title, "Scaling GenAI Training");
            assert_eq!(payload.tags, vec!["ai", "training"]);
            assert_eq!(
                payload.attachment.as_ref().map(|a| a.filename.as_str()),
                Some("cover.png")
            );
            assert!(payload.published);
        }

        #[test]
        fn test_event_payload_parses_capacity() {
            let mut form = event_form(&FormOptions::default());
            form.set_value("capacity", "120".into());
            assert_eq!(event_payload(&form).capacity, Some(120));

            form.set_value("capacity", "".into());
            assert_eq!(event_payload(&form).capacity, None);
        }

        #[tokio::test]
        async fn test_untouched_event_edit_keeps_price_and_speakers() {
            let event = Event {
                id: "e1".into(),
                title: "GenAI Masterclass".into(),
                slug: "genai-masterclass".into(),
                short_excerpt: "Two-day deep dive".into(),
                full_description: String::new(),
                category: "Masterclass".into(),
                audience: "Professionals".into(),
                mode: "offline".into(),
                status: "scheduled".into(),
                start_date: "2025-10-01".into(),
                end_date: None,
                timezone: "Asia/Kolkata".into(),
                capacity: None,
                tags: vec![],
                price: serde_json::json!({"currency": "USD", "value": 499}),
                speakers: serde_json::json!([{"name": "Nanda Kumar"}]),
                featured: false,
                image: None,
                registration_link: None,
                created_at: None,
                updated_at: None,
            };

            let mut api = MockContentApi::new();
            let returned = event.clone();
            api.expect_update_event()
                .withf(|id, payload| {
                    id == "e1"
                        && payload.price == "{\"currency\":\"USD\",\"value\":499}"
                        && payload.speakers.contains("Nanda Kumar")
                })
                .times(1)
                .returning(move |_, _| Ok(returned.clone()));

            // Submitting without touching any field must send the stored
            // price and speaker blocks, not the blank-form defaults.
            let mut form = event_form_from(&FormOptions::default(), &event);
            let mut submitter = Submitter::new();
            assert!(submitter.submit(&api, &mut form).await);
        }

        #[tokio::test]
        async fn test_testimonial_edit_routes_to_update() {
            let mut api = MockContentApi::new();
            api.expect_update_testimonial()
                .withf(|id, payload| id == "t1" && payload.rating == 5)
                .times(1)
                .returning(|_, _| {
                    Ok(Testimonial {
                        id: "t1".into(),
                        name: "Jane Roe".into(),
                        designation: "CTO".into(),
                        company: String::new(),
                        quote: "Transformed our ML practice".into(),
                        rating: 5,
                        featured: false,
                    })
                });

            let mut form = testimonial_form(&FormOptions::default());
            form.kind = FormKind::TestimonialEdit("t1".into());
            form.set_value("name", "Jane Roe".into());
            form.set_value("designation", "CTO".into());
            form.set_value("quote", "Transformed our ML practice".into());

            let mut submitter = Submitter::new();
            assert!(submitter.submit(&api, &mut form).await);
        }
    }
}
