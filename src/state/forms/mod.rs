mod field;
mod form_state;
mod rules;

pub use field::{FieldValue, FormField};
pub use form_state::{
    article_form, article_form_from, contact_form, event_form, event_form_from, testimonial_form,
    testimonial_form_from, FormKind, FormOptions, FormState,
};
pub use rules::{split_tags, FieldRule};
