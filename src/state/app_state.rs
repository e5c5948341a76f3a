//! Application state definitions

use crate::api::{Article, ContactMessage, Event, Testimonial};
use crate::state::forms::FormState;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Dashboard,
    Articles,
    ArticleCreate,
    ArticleEdit,
    Events,
    EventCreate,
    EventEdit,
    Testimonials,
    TestimonialCreate,
    TestimonialEdit,
    Contacts,
    ContactForm,
}

impl View {
    /// Whether this view is reachable only with the admin role
    pub fn requires_admin(&self) -> bool {
        !matches!(self, Self::Dashboard | Self::ContactForm)
    }

}

/// Pending destructive action awaiting y/n confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingAction {
    DeleteArticle(String),
    DeleteEvent(String),
    DeleteTestimonial(String),
    DeleteContact(String),
}

/// A dismissible error notice shown in the status area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub message: String,
}

/// Keep only the newest few banners so a flapping backend cannot grow the
/// queue without bound.
const MAX_BANNERS: usize = 5;

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub view_history: Vec<View>,

    // Loaded data
    pub articles: Vec<Article>,
    pub events: Vec<Event>,
    pub testimonials: Vec<Testimonial>,
    pub contacts: Vec<ContactMessage>,

    // Selection
    pub selected_index: usize,
    pub sidebar_index: usize,
    pub scroll_offset: usize,

    // Active form, mounted while a form view is showing
    pub form: Option<FormState>,

    // UI state
    pub api_connected: bool,
    pub pending_action: Option<PendingAction>,
    pub error_banners: Vec<ErrorBanner>,
}

impl AppState {
    /// Navigate to a view, remembering where we came from
    pub fn navigate_to(&mut self, view: View) {
        if view != self.current_view {
            self.view_history.push(self.current_view);
            self.current_view = view;
            self.reset_selection();
        }
    }

    /// Return to the previous view (falls back to the dashboard)
    pub fn go_back(&mut self) {
        self.current_view = self.view_history.pop().unwrap_or_default();
        self.form = None;
        self.pending_action = None;
        self.reset_selection();
    }

    /// Move selection down
    pub fn move_selection_down(&mut self, max: usize) {
        if max > 0 && self.selected_index < max - 1 {
            self.selected_index += 1;
        }
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Reset selection
    pub fn reset_selection(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }

    /// Number of rows in the currently showing list view
    pub fn current_list_len(&self) -> usize {
        match self.current_view {
            View::Articles => self.articles.len(),
            View::Events => self.events.len(),
            View::Testimonials => self.testimonials.len(),
            View::Contacts => self.contacts.len(),
            _ => 0,
        }
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.get(self.selected_index)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.events.get(self.selected_index)
    }

    pub fn selected_testimonial(&self) -> Option<&Testimonial> {
        self.testimonials.get(self.selected_index)
    }

    pub fn selected_contact(&self) -> Option<&ContactMessage> {
        self.contacts.get(self.selected_index)
    }

    /// Queue an error banner, dropping the oldest past the cap
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.error_banners.push(ErrorBanner {
            message: message.into(),
        });
        if self.error_banners.len() > MAX_BANNERS {
            self.error_banners.remove(0);
        }
    }

    /// Dismiss the oldest banner
    pub fn dismiss_error(&mut self) {
        if !self.error_banners.is_empty() {
            self.error_banners.remove(0);
        }
    }
}
