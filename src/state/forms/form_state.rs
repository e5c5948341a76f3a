//! Form state management
//!
//! One parameterized controller covers every form in the app: each form is
//! a declarative list of `FormField`s plus per-field errors, an active
//! field index, and at most one attachment. The same change/blur/submit
//! contract applies everywhere:
//!
//! - editing a field optimistically clears its recorded error; the value
//!   is re-validated only on blur or submit, not on every keystroke
//! - leaving a field (blur) validates that field alone
//! - `validate_all` gates submission; a non-empty error map blocks it

use super::field::FormField;
use super::rules::{self, validate_value, FieldRule};
use crate::api::{Article, Attachment, Event, Testimonial};
use std::collections::BTreeMap;

/// Option lists consumed by the form constructors.
///
/// Explicit configuration handed to each form rather than module-level
/// globals; immutable for the lifetime of the session.
#[derive(Debug, Clone)]
pub struct FormOptions {
    pub article_categories: Vec<String>,
    pub event_categories: Vec<String>,
    pub event_modes: Vec<String>,
    pub event_statuses: Vec<String>,
    pub service_options: Vec<String>,
    pub ratings: Vec<String>,
}

impl Default for FormOptions {
    fn default() -> Self {
        let to_vec = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            article_categories: to_vec(&[
                "AI/ML",
                "Security",
                "Training",
                "Technology",
                "Business",
                "Tutorial",
                "News",
                "Case Study",
                "Research",
            ]),
            event_categories: to_vec(&[
                "Training",
                "Workshop",
                "Webinar",
                "Masterclass",
                "Conference",
            ]),
            event_modes: to_vec(&["online", "offline", "hybrid"]),
            event_statuses: to_vec(&["scheduled", "completed", "cancelled"]),
            service_options: to_vec(&["", "strategy", "training", "security", "development", "chatbot"]),
            ratings: to_vec(&["5", "4", "3", "2", "1"]),
        }
    }
}

/// Which entity a form targets; edit variants carry the entity id
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormKind {
    Contact,
    ArticleCreate,
    ArticleEdit(String),
    EventCreate,
    EventEdit(String),
    TestimonialCreate,
    TestimonialEdit(String),
}

/// Live state for one mounted form instance
#[derive(Debug, Clone)]
pub struct FormState {
    pub kind: FormKind,
    fields: Vec<FormField>,
    errors: BTreeMap<String, String>,
    active_field_index: usize,
    attachment: Option<Attachment>,
    attachment_required: bool,
}

impl FormState {
    fn new(kind: FormKind, fields: Vec<FormField>, attachment_required: bool) -> Self {
        Self {
            kind,
            fields,
            errors: BTreeMap::new(),
            active_field_index: 0,
            attachment: None,
            attachment_required,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    fn field_mut(&mut self, name: &str) -> Option<&mut FormField> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Text value of a named field (empty string when absent)
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(FormField::as_text).unwrap_or("")
    }

    /// Flag value of a named field (false when absent)
    pub fn flag(&self, name: &str) -> bool {
        self.field(name).is_some_and(FormField::as_flag)
    }

    /// Recorded error for a named field, if any
    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // --- active field navigation -----------------------------------------

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline)
    }

    /// Move focus to the next field (wraps); blurs the field being left
    pub fn next_field(&mut self) {
        self.blur_active();
        if !self.fields.is_empty() {
            self.active_field_index = (self.active_field_index + 1) % self.fields.len();
        }
    }

    /// Move focus to the previous field (wraps); blurs the field being left
    pub fn prev_field(&mut self) {
        self.blur_active();
        if !self.fields.is_empty() {
            if self.active_field_index == 0 {
                self.active_field_index = self.fields.len() - 1;
            } else {
                self.active_field_index -= 1;
            }
        }
    }

    // --- change events ----------------------------------------------------

    /// Append a character to the active field, clearing its stale error
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.push_char(c);
            let name = field.name.clone();
            self.errors.remove(&name);
        }
    }

    /// Backspace on the active field, clearing its stale error
    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.pop_char();
            let name = field.name.clone();
            self.errors.remove(&name);
        }
    }

    /// Cycle the active select field, clearing its stale error
    pub fn cycle_active(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.cycle_option();
            let name = field.name.clone();
            self.errors.remove(&name);
        }
    }

    /// Toggle the active flag field
    pub fn toggle_active(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            field.toggle();
        }
    }

    /// Replace a field's value programmatically (quick-fill helpers)
    pub fn set_value(&mut self, name: &str, value: String) {
        if let Some(field) = self.field_mut(name) {
            field.set_text(value);
            self.errors.remove(name);
        }
    }

    // --- blur / submit validation -----------------------------------------

    /// Run the validator on a single field and record the result
    pub fn on_blur(&mut self, name: &str) {
        let Some(field) = self.field_mut(name) else {
            return;
        };
        field.touched = true;
        let message = validate_value(&field.label, field.as_text(), &field.rules);
        if message.is_empty() {
            self.errors.remove(name);
        } else {
            self.errors.insert(name.to_string(), message);
        }
    }

    /// Blur the currently focused field
    pub fn blur_active(&mut self) {
        if let Some(field) = self.fields.get(self.active_field_index) {
            let name = field.name.clone();
            self.on_blur(&name);
        }
    }

    /// Validate every field (and attachment presence where required) and
    /// record the aggregate error map. Idempotent on unchanged state.
    ///
    /// Returns true when the form is clean and submission may proceed.
    pub fn validate_all(&mut self) -> bool {
        let mut errors = BTreeMap::new();
        for field in &self.fields {
            let message = validate_value(&field.label, field.as_text(), &field.rules);
            if !message.is_empty() {
                errors.insert(field.name.clone(), message);
            }
        }
        if self.attachment_required && self.attachment.is_none() {
            errors.insert(
                "imagePath".to_string(),
                "Featured image is required".to_string(),
            );
        }
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Snapshot of the current error map
    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    /// Restore every field to its declared default; clears errors and
    /// drops the attachment. Runs after a successful submit.
    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.reset();
        }
        self.errors.clear();
        self.attachment = None;
        self.active_field_index = 0;
    }

    // --- attachment -------------------------------------------------------

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn set_attachment(&mut self, attachment: Attachment) {
        self.attachment = Some(attachment);
        self.errors.remove("imagePath");
    }

    /// Human title for the form header
    pub fn title(&self) -> &'static str {
        match self.kind {
            FormKind::Contact => "Contact Us",
            FormKind::ArticleCreate => "New Article",
            FormKind::ArticleEdit(_) => "Edit Article",
            FormKind::EventCreate => "New Event",
            FormKind::EventEdit(_) => "Edit Event",
            FormKind::TestimonialCreate => "New Testimonial",
            FormKind::TestimonialEdit(_) => "Edit Testimonial",
        }
    }
}

// --- form definitions -----------------------------------------------------

/// Public contact form (name/email/company/service/phone/message)
pub fn contact_form(options: &FormOptions) -> FormState {
    FormState::new(
        FormKind::Contact,
        vec![
            FormField::text(
                "name",
                "Name",
                vec![
                    FieldRule::Required,
                    FieldRule::MinLen(2),
                    FieldRule::LettersAndSpaces,
                ],
            ),
            FormField::text("email", "Email", vec![FieldRule::Required, FieldRule::Email]),
            FormField::text("company", "Company", vec![]),
            FormField::select("service", "Service", &options.service_options, 0),
            FormField::text("phone", "Phone", vec![FieldRule::Phone]),
            FormField::multiline(
                "message",
                "Message",
                vec![FieldRule::Required, FieldRule::MinLen(10)],
            ),
        ],
        false,
    )
}

fn article_fields(options: &FormOptions) -> Vec<FormField> {
    vec![
        FormField::text(
            "title",
            "Title",
            vec![FieldRule::Required, FieldRule::MaxLen(rules::MAX_TITLE)],
        ),
        FormField::multiline(
            "excerpt",
            "Excerpt",
            vec![FieldRule::Required, FieldRule::MaxLen(rules::MAX_EXCERPT)],
        ),
        FormField::multiline("content", "Content", vec![FieldRule::Required]),
        FormField::select("category", "Category", &options.article_categories, 0),
        FormField::text(
            "tags",
            "Tags (comma separated)",
            vec![FieldRule::MaxTags(rules::MAX_TAGS)],
        ),
        FormField::text_with_value(
            "author",
            "Author",
            rules::author_template(),
            true,
            vec![FieldRule::Required, FieldRule::AuthorJson],
        ),
        FormField::text_with_value(
            "seo",
            "SEO Metadata",
            rules::seo_template("", "", ""),
            true,
            vec![FieldRule::Required, FieldRule::SeoJson],
        ),
        FormField::text("imagePath", "Featured Image Path", vec![]),
        FormField::flag("published", "Published", true),
        FormField::flag("featured", "Featured", false),
    ]
}

/// Blank article create form; the featured image is required
pub fn article_form(options: &FormOptions) -> FormState {
    FormState::new(FormKind::ArticleCreate, article_fields(options), true)
}

/// Article edit form pre-loaded from an existing article; the image is
/// optional here (the existing one is kept server-side when absent)
pub fn article_form_from(options: &FormOptions, article: &Article) -> FormState {
    let author =
        serde_json::to_string_pretty(&article.author).unwrap_or_else(|_| rules::author_template());
    let seo = serde_json::to_string_pretty(&article.seo)
        .unwrap_or_else(|_| rules::seo_template("", "", ""));
    FormState::new(
        FormKind::ArticleEdit(article.id.clone()),
        vec![
            FormField::text_with_value(
                "title",
                "Title",
                article.title.clone(),
                false,
                vec![FieldRule::Required, FieldRule::MaxLen(rules::MAX_TITLE)],
            ),
            FormField::text_with_value(
                "excerpt",
                "Excerpt",
                article.excerpt.clone(),
                true,
                vec![FieldRule::Required, FieldRule::MaxLen(rules::MAX_EXCERPT)],
            ),
            FormField::text_with_value(
                "content",
                "Content",
                article.content.clone(),
                true,
                vec![FieldRule::Required],
            ),
            FormField::select_with_value(
                "category",
                "Category",
                &options.article_categories,
                &article.category,
            ),
            FormField::text_with_value(
                "tags",
                "Tags (comma separated)",
                article.tags.join(", "),
                false,
                vec![FieldRule::MaxTags(rules::MAX_TAGS)],
            ),
            FormField::text_with_value(
                "author",
                "Author",
                author,
                true,
                vec![FieldRule::Required, FieldRule::AuthorJson],
            ),
            FormField::text_with_value(
                "seo",
                "SEO Metadata",
                seo,
                true,
                vec![FieldRule::Required, FieldRule::SeoJson],
            ),
            FormField::text("imagePath", "Featured Image Path", vec![]),
            FormField::flag("published", "Published", article.published),
            FormField::flag("featured", "Featured", article.featured),
        ],
        false,
    )
}

fn event_fields(options: &FormOptions) -> Vec<FormField> {
    vec![
        FormField::text("title", "Title", vec![FieldRule::Required]),
        FormField::multiline(
            "shortExcerpt",
            "Short Excerpt",
            vec![
                FieldRule::Required,
                FieldRule::MaxLen(rules::MAX_EVENT_EXCERPT),
            ],
        ),
        FormField::multiline("fullDescription", "Full Description", vec![]),
        FormField::select("category", "Category", &options.event_categories, 0),
        FormField::text_with_value("audience", "Audience", "Professionals".into(), false, vec![]),
        FormField::select("mode", "Mode", &options.event_modes, 0),
        FormField::select("status", "Status", &options.event_statuses, 0),
        FormField::text("startDate", "Start Date", vec![FieldRule::Required]),
        FormField::text("endDate", "End Date", vec![]),
        FormField::text_with_value("timezone", "Timezone", "Asia/Kolkata".into(), false, vec![]),
        FormField::text("capacity", "Capacity", vec![]),
        FormField::text("tags", "Tags (comma separated)", vec![]),
        FormField::text_with_value(
            "price",
            "Price",
            "{\"currency\":\"INR\",\"value\":0}".into(),
            false,
            vec![FieldRule::JsonValue],
        ),
        FormField::text_with_value(
            "speakers",
            "Speakers",
            "[]".into(),
            true,
            vec![FieldRule::JsonValue],
        ),
        FormField::text("registrationLink", "Registration Link", vec![]),
        FormField::text("imagePath", "Event Image Path", vec![]),
        FormField::flag("featured", "Featured", false),
    ]
}

/// Blank event create form; the event image is required
pub fn event_form(options: &FormOptions) -> FormState {
    FormState::new(FormKind::EventCreate, event_fields(options), true)
}

/// Event edit form pre-loaded from an existing event
pub fn event_form_from(options: &FormOptions, event: &Event) -> FormState {
    let mut form = FormState::new(
        FormKind::EventEdit(event.id.clone()),
        event_fields(options),
        false,
    );
    form.set_value("title", event.title.clone());
    form.set_value("shortExcerpt", event.short_excerpt.clone());
    form.set_value("fullDescription", event.full_description.clone());
    if let Some(field) = form.field_mut("category") {
        *field = FormField::select_with_value(
            "category",
            "Category",
            &options.event_categories,
            &event.category,
        );
    }
    form.set_value("audience", event.audience.clone());
    if let Some(field) = form.field_mut("mode") {
        *field = FormField::select_with_value("mode", "Mode", &options.event_modes, &event.mode);
    }
    if let Some(field) = form.field_mut("status") {
        *field =
            FormField::select_with_value("status", "Status", &options.event_statuses, &event.status);
    }
    form.set_value("startDate", event.start_date.clone());
    form.set_value("endDate", event.end_date.clone().unwrap_or_default());
    form.set_value("timezone", event.timezone.clone());
    form.set_value(
        "capacity",
        event.capacity.map(|c| c.to_string()).unwrap_or_default(),
    );
    form.set_value("tags", event.tags.join(", "));
    if let Ok(price) = serde_json::to_string(&event.price) {
        form.set_value("price", price);
    }
    if let Ok(speakers) = serde_json::to_string_pretty(&event.speakers) {
        form.set_value("speakers", speakers);
    }
    form.set_value(
        "registrationLink",
        event.registration_link.clone().unwrap_or_default(),
    );
    if event.featured {
        if let Some(field) = form.field_mut("featured") {
            field.toggle();
        }
    }
    form
}

fn testimonial_fields(options: &FormOptions) -> Vec<FormField> {
    vec![
        FormField::text(
            "name",
            "Client Name",
            vec![
                FieldRule::Required,
                FieldRule::MinLen(2),
                FieldRule::LettersAndSpaces,
            ],
        ),
        FormField::text("designation", "Designation", vec![FieldRule::Required]),
        FormField::text("company", "Company", vec![]),
        FormField::multiline(
            "quote",
            "Quote",
            vec![FieldRule::Required, FieldRule::MinLen(10)],
        ),
        FormField::select("rating", "Rating", &options.ratings, 0),
        FormField::flag("featured", "Featured", false),
    ]
}

/// Blank testimonial create form
pub fn testimonial_form(options: &FormOptions) -> FormState {
    FormState::new(
        FormKind::TestimonialCreate,
        testimonial_fields(options),
        false,
    )
}

/// Testimonial edit form pre-loaded from an existing testimonial
pub fn testimonial_form_from(options: &FormOptions, testimonial: &Testimonial) -> FormState {
    let mut form = FormState::new(
        FormKind::TestimonialEdit(testimonial.id.clone()),
        testimonial_fields(options),
        false,
    );
    form.set_value("name", testimonial.name.clone());
    form.set_value("designation", testimonial.designation.clone());
    form.set_value("company", testimonial.company.clone());
    form.set_value("quote", testimonial.quote.clone());
    if let Some(field) = form.field_mut("rating") {
        *field = FormField::select_with_value(
            "rating",
            "Rating",
            &options.ratings,
            &testimonial.rating.to_string(),
        );
    }
    if testimonial.featured {
        if let Some(field) = form.field_mut("featured") {
            field.toggle();
        }
    }
    form
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(form: &mut FormState, name: &str, text: &str) {
        // Position focus on the field, then type character by character.
        let index = form
            .fields()
            .iter()
            .position(|f| f.name == name)
            .expect("field exists");
        form.active_field_index = index;
        for c in text.chars() {
            form.input_char(c);
        }
    }

    mod contact {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_contact_form_defaults() {
            let form = contact_form(&FormOptions::default());
            assert_eq!(form.kind, FormKind::Contact);
            assert_eq!(form.field_count(), 6);
            assert_eq!(form.value("name"), "");
            assert_eq!(form.value("service"), "");
            assert!(!form.has_errors());
        }

        #[test]
        fn test_blur_records_error_and_editing_clears_it() {
            let mut form = contact_form(&FormOptions::default());
            form.on_blur("name");
            assert_eq!(form.error("name"), Some("Name is required"));

            // Typing clears the stale error without re-validating.
            type_into(&mut form, "name", "J");
            assert_eq!(form.error("name"), None);

            // The next blur re-validates the (still invalid) value.
            form.on_blur("name");
            assert_eq!(form.error("name"), Some("Name must be at least 2 characters"));
        }

        #[test]
        fn test_validate_all_collects_every_failure() {
            let mut form = contact_form(&FormOptions::default());
            type_into(&mut form, "email", "not-an-email");
            assert!(!form.validate_all());
            assert_eq!(form.error("name"), Some("Name is required"));
            assert_eq!(form.error("email"), Some("Please enter a valid email"));
            assert_eq!(form.error("message"), Some("Message is required"));
            // Optional fields left blank contribute no errors.
            assert_eq!(form.error("phone"), None);
            assert_eq!(form.error("company"), None);
        }

        #[test]
        fn test_validate_all_is_idempotent() {
            let mut form = contact_form(&FormOptions::default());
            type_into(&mut form, "name", "Jane Roe");
            form.validate_all();
            let first = form.errors().clone();
            form.validate_all();
            assert_eq!(&first, form.errors());
        }

        #[test]
        fn test_valid_contact_form_passes() {
            let mut form = contact_form(&FormOptions::default());
            type_into(&mut form, "name", "Jane Roe");
            type_into(&mut form, "email", "jane@co.com");
            type_into(&mut form, "message", "Interested in your AI services.");
            assert!(form.validate_all());
            assert!(!form.has_errors());
        }

        #[test]
        fn test_reset_restores_defaults_and_clears_errors() {
            let mut form = contact_form(&FormOptions::default());
            type_into(&mut form, "name", "Jane Roe");
            form.validate_all();
            assert!(form.has_errors());
            form.reset();
            assert_eq!(form.value("name"), "");
            assert!(!form.has_errors());
            assert_eq!(form.active_field(), 0);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_wraps_and_blurs() {
            let mut form = contact_form(&FormOptions::default());
            // Leaving the empty required name field records its error.
            form.next_field();
            assert_eq!(form.active_field(), 1);
            assert_eq!(form.error("name"), Some("Name is required"));

            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field(), 0);
        }

        #[test]
        fn test_prev_field_wraps_backwards() {
            let mut form = contact_form(&FormOptions::default());
            form.prev_field();
            assert_eq!(form.active_field(), form.field_count() - 1);
        }
    }

    mod article {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_create_form_requires_attachment() {
            let mut form = article_form(&FormOptions::default());
            type_into(&mut form, "title", "Scaling GenAI Training");
            type_into(&mut form, "excerpt", "How we run cohorts");
            type_into(&mut form, "content", "Long-form body");
            assert!(!form.validate_all());
            assert_eq!(form.error("imagePath"), Some("Featured image is required"));

            form.set_attachment(Attachment {
                filename: "cover.png".into(),
                bytes: vec![1, 2, 3],
                size: 3,
            });
            assert!(form.validate_all());
        }

        #[test]
        fn test_default_author_and_seo_blocks_validate() {
            let mut form = article_form(&FormOptions::default());
            form.on_blur("author");
            form.on_blur("seo");
            assert_eq!(form.error("author"), None);
            assert_eq!(form.error("seo"), None);
        }

        #[test]
        fn test_malformed_seo_block_is_rejected() {
            let mut form = article_form(&FormOptions::default());
            form.set_value("seo", "{metaTitle: oops}".into());
            form.on_blur("seo");
            assert!(form
                .error("seo")
                .is_some_and(|e| e.starts_with("Invalid JSON format in SEO Metadata field")));
        }

        #[test]
        fn test_edit_form_loads_values_and_keeps_attachment_optional() {
            let article = Article {
                id: "a1".into(),
                title: "Existing".into(),
                slug: "existing".into(),
                excerpt: "Short".into(),
                content: "Body".into(),
                category: "Security".into(),
                tags: vec!["ai".into(), "security".into()],
                author: crate::api::AuthorMeta {
                    name: "Nanda Kumar".into(),
                    designation: "Founder & CEO".into(),
                },
                seo: Default::default(),
                published: true,
                featured: true,
                featured_image: None,
                created_at: None,
                updated_at: None,
            };
            let mut form = article_form_from(&FormOptions::default(), &article);
            assert_eq!(form.kind, FormKind::ArticleEdit("a1".into()));
            assert_eq!(form.value("title"), "Existing");
            assert_eq!(form.value("category"), "Security");
            assert_eq!(form.value("tags"), "ai, security");
            assert!(form.flag("published"));
            assert!(form.flag("featured"));
            // No new image needed when editing.
            assert!(form.validate_all());
        }
    }

    mod event {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_event_defaults_match_model() {
            let form = event_form(&FormOptions::default());
            assert_eq!(form.value("category"), "Training");
            assert_eq!(form.value("audience"), "Professionals");
            assert_eq!(form.value("mode"), "online");
            assert_eq!(form.value("status"), "scheduled");
            assert_eq!(form.value("timezone"), "Asia/Kolkata");
            assert_eq!(form.value("price"), "{\"currency\":\"INR\",\"value\":0}");
            assert_eq!(form.value("speakers"), "[]");
        }

        #[test]
        fn test_event_required_fields() {
            let mut form = event_form(&FormOptions::default());
            form.set_attachment(Attachment {
                filename: "banner.png".into(),
                bytes: vec![0],
                size: 1,
            });
            assert!(!form.validate_all());
            assert_eq!(form.error("title"), Some("Title is required"));
            assert_eq!(form.error("startDate"), Some("Start Date is required"));
            assert_eq!(form.error("shortExcerpt"), Some("Short Excerpt is required"));
        }

        #[test]
        fn test_event_excerpt_length_bound() {
            let mut form = event_form(&FormOptions::default());
            form.set_value("shortExcerpt", "x".repeat(501));
            form.on_blur("shortExcerpt");
            assert_eq!(
                form.error("shortExcerpt"),
                Some("Short Excerpt exceeds the maximum limit of 500 characters")
            );
        }

        #[test]
        fn test_edit_form_prefills_price_and_speakers() {
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
                capacity: Some(40),
                tags: vec![],
                price: serde_json::json!({"currency": "USD", "value": 499}),
                speakers: serde_json::json!([{"name": "Nanda Kumar"}]),
                featured: false,
                image: None,
                registration_link: None,
                created_at: None,
                updated_at: None,
            };
            let form = event_form_from(&FormOptions::default(), &event);
            assert_eq!(form.value("price"), "{\"currency\":\"USD\",\"value\":499}");
            assert!(form.value("speakers").contains("Nanda Kumar"));
            // The stored blocks still satisfy their own rules.
            let mut form = form;
            form.on_blur("price");
            form.on_blur("speakers");
            assert_eq!(form.error("price"), None);
            assert_eq!(form.error("speakers"), None);
        }

        #[test]
        fn test_malformed_price_json_rejected() {
            let mut form = event_form(&FormOptions::default());
            form.set_value("price", "{currency: INR}".into());
            form.on_blur("price");
            assert_eq!(form.error("price"), Some("Price must be valid JSON"));
        }
    }

    mod testimonial {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_edit_form_loads_rating_and_featured() {
            let testimonial = Testimonial {
                id: "t1".into(),
                name: "Jane Roe".into(),
                designation: "CTO".into(),
                company: "Acme".into(),
                quote: "Transformed our ML practice".into(),
                rating: 4,
                featured: true,
            };
            let form = testimonial_form_from(&FormOptions::default(), &testimonial);
            assert_eq!(form.kind, FormKind::TestimonialEdit("t1".into()));
            assert_eq!(form.value("rating"), "4");
            assert!(form.flag("featured"));
        }

        #[test]
        fn test_short_quote_rejected() {
            let mut form = testimonial_form(&FormOptions::default());
            form.set_value("quote", "Nice".into());
            form.on_blur("quote");
            assert_eq!(form.error("quote"), Some("Quote must be at least 10 characters"));
        }
    }
}
