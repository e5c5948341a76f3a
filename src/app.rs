//! Application state and core logic

use crate::api::{ApiClient, Attachment, ContentApi, ListQuery};
use crate::config::TuiConfig;
use crate::state::forms::{
    article_form, article_form_from, contact_form, event_form, event_form_from, testimonial_form,
    testimonial_form_from, FieldValue, FormOptions,
};
use crate::state::{AppState, AuthContext, PendingAction, View};
use crate::submit::Submitter;
use crate::ui::SIDEBAR_ITEMS;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::Path;
use std::time::Instant;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Content API client
    pub api: Box<dyn ContentApi>,
    /// Role-derived gating for admin screens
    pub auth: AuthContext,
    /// Submission state machine shared by every form
    pub submitter: Submitter,
    /// Option lists handed to the form constructors
    pub form_options: FormOptions,
    /// Pagination for list requests
    query: ListQuery,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from config
    pub async fn new(config: TuiConfig) -> Result<Self> {
        let api: Box<dyn ContentApi> = Box::new(ApiClient::from_config(&config));
        let auth = AuthContext::new(config.role());
        let query = ListQuery {
            limit: config.page_limit(),
            ..ListQuery::default()
        };

        let mut app = Self {
            state: AppState::default(),
            api,
            auth,
            submitter: Submitter::new(),
            form_options: FormOptions::default(),
            query,
            quit: false,
        };

        app.state.api_connected = app.api.check_connection().await;
        if app.state.api_connected {
            app.refresh_all().await;
        }
        Ok(app)
    }

    #[cfg(test)]
    pub fn with_api(api: Box<dyn ContentApi>, auth: AuthContext) -> Self {
        Self {
            state: AppState::default(),
            api,
            auth,
            submitter: Submitter::new(),
            form_options: FormOptions::default(),
            query: ListQuery::default(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Event loop tick; drives the submission status auto-reset
    pub fn tick(&mut self, now: Instant) {
        self.submitter.tick(now);
    }

    // --- data loading -----------------------------------------------------

    /// Reload everything the current role can see
    pub async fn refresh_all(&mut self) {
        if self.auth.is_admin() {
            self.refresh_articles().await;
            self.refresh_events().await;
            self.refresh_testimonials().await;
            self.refresh_contacts().await;
        }
    }

    async fn refresh_articles(&mut self) {
        match self.api.list_articles(self.query).await {
            Ok(articles) => self.state.articles = articles,
            Err(err) => self.state.push_error(format!("Failed to load articles: {err}")),
        }
    }

    async fn refresh_events(&mut self) {
        match self.api.list_events(self.query).await {
            Ok(events) => self.state.events = events,
            Err(err) => self.state.push_error(format!("Failed to load events: {err}")),
        }
    }

    async fn refresh_testimonials(&mut self) {
        match self.api.list_testimonials(self.query).await {
            Ok(testimonials) => self.state.testimonials = testimonials,
            Err(err) => self
                .state
                .push_error(format!("Failed to load testimonials: {err}")),
        }
    }

    async fn refresh_contacts(&mut self) {
        match self.api.list_contacts(self.query).await {
            Ok(contacts) => self.state.contacts = contacts,
            Err(err) => self.state.push_error(format!("Failed to load contacts: {err}")),
        }
    }

    async fn refresh_current(&mut self) {
        match self.state.current_view {
            View::Articles => self.refresh_articles().await,
            View::Events => self.refresh_events().await,
            View::Testimonials => self.refresh_testimonials().await,
            View::Contacts => self.refresh_contacts().await,
            View::Dashboard => self.refresh_all().await,
            _ => {}
        }
    }

    // --- key handling -----------------------------------------------------

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Delete confirmation is modal
        if self.state.pending_action.is_some() {
            self.handle_confirm_key(key).await;
            return Ok(());
        }

        // Banner dismissal works everywhere except while typing into a form
        if key.code == KeyCode::Char('x')
            && !self.in_form_view()
            && !self.state.error_banners.is_empty()
        {
            self.state.dismiss_error();
            return Ok(());
        }

        match self.state.current_view {
            View::Dashboard => self.handle_dashboard_key(key).await,
            View::Articles => self.handle_articles_key(key).await,
            View::Events => self.handle_events_key(key).await,
            View::Testimonials => self.handle_testimonials_key(key).await,
            View::Contacts => self.handle_contacts_key(key).await,
            View::ArticleCreate
            | View::ArticleEdit
            | View::EventCreate
            | View::EventEdit
            | View::TestimonialCreate
            | View::TestimonialEdit
            | View::ContactForm => self.handle_form_key(key).await?,
        }
        Ok(())
    }

    fn in_form_view(&self) -> bool {
        self.state.form.is_some()
    }

    /// Open a sidebar entry, honoring the role gate
    fn open_section(&mut self, view: View) {
        if view.requires_admin() && !self.auth.is_admin() {
            self.state.push_error("Admin role required for this screen");
            return;
        }
        if view == View::ContactForm {
            self.state.form = Some(contact_form(&self.form_options));
        }
        self.state.navigate_to(view);
    }

    async fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                self.state.sidebar_index = (self.state.sidebar_index + 1) % SIDEBAR_ITEMS.len();
            }
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => {
                self.state.sidebar_index = self
                    .state
                    .sidebar_index
                    .checked_sub(1)
                    .unwrap_or(SIDEBAR_ITEMS.len() - 1);
            }
            KeyCode::Enter => {
                let (_, view) = SIDEBAR_ITEMS[self.state.sidebar_index];
                self.open_section(view);
            }
            KeyCode::Char('r') => self.refresh_all().await,
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    async fn handle_articles_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.current_list_len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                self.state.form = Some(article_form(&self.form_options));
                self.state.navigate_to(View::ArticleCreate);
            }
            KeyCode::Enter => {
                if let Some(slug) = self.state.selected_article().map(|a| a.slug.clone()) {
                    // Edit the freshest copy; fall back to the cached row
                    // when the fetch fails.
                    let article = match self.api.get_article(&slug).await {
                        Ok(article) => Some(article),
                        Err(err) => {
                            self.state.push_error(format!("Failed to load article: {err}"));
                            self.state.selected_article().cloned()
                        }
                    };
                    if let Some(article) = article {
                        self.state.form = Some(article_form_from(&self.form_options, &article));
                        self.state.navigate_to(View::ArticleEdit);
                    }
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.state.selected_article().map(|a| a.id.clone()) {
                    match self.api.toggle_article_featured(&id).await {
                        Ok(updated) => {
                            if let Some(article) =
                                self.state.articles.iter_mut().find(|a| a.id == id)
                            {
                                *article = updated;
                            }
                        }
                        Err(err) => self
                            .state
                            .push_error(format!("Failed to toggle featured: {err}")),
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(article) = self.state.selected_article() {
                    self.state.pending_action =
                        Some(PendingAction::DeleteArticle(article.id.clone()));
                }
            }
            KeyCode::Char('r') => self.refresh_articles().await,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
    }

    async fn handle_events_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.current_list_len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                self.state.form = Some(event_form(&self.form_options));
                self.state.navigate_to(View::EventCreate);
            }
            KeyCode::Enter => {
                if let Some(slug) = self.state.selected_event().map(|e| e.slug.clone()) {
                    let event = match self.api.get_event(&slug).await {
                        Ok(event) => Some(event),
                        Err(err) => {
                            self.state.push_error(format!("Failed to load event: {err}"));
                            self.state.selected_event().cloned()
                        }
                    };
                    if let Some(event) = event {
                        self.state.form = Some(event_form_from(&self.form_options, &event));
                        self.state.navigate_to(View::EventEdit);
                    }
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.state.selected_event().map(|e| e.id.clone()) {
                    match self.api.toggle_event_featured(&id).await {
                        Ok(updated) => {
                            if let Some(event) = self.state.events.iter_mut().find(|e| e.id == id) {
                                *event = updated;
                            }
                        }
                        Err(err) => self
                            .state
                            .push_error(format!("Failed to toggle featured: {err}")),
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(event) = self.state.selected_event() {
                    self.state.pending_action = Some(PendingAction::DeleteEvent(event.id.clone()));
                }
            }
            KeyCode::Char('r') => self.refresh_events().await,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
    }

    async fn handle_testimonials_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.current_list_len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('n') => {
                self.state.form = Some(testimonial_form(&self.form_options));
                self.state.navigate_to(View::TestimonialCreate);
            }
            KeyCode::Enter => {
                if let Some(testimonial) = self.state.selected_testimonial() {
                    self.state.form =
                        Some(testimonial_form_from(&self.form_options, testimonial));
                    self.state.navigate_to(View::TestimonialEdit);
                }
            }
            KeyCode::Char('f') => {
                if let Some(id) = self.state.selected_testimonial().map(|t| t.id.clone()) {
                    match self.api.toggle_testimonial_featured(&id).await {
                        Ok(updated) => {
                            if let Some(testimonial) =
                                self.state.testimonials.iter_mut().find(|t| t.id == id)
                            {
                                *testimonial = updated;
                            }
                        }
                        Err(err) => self
                            .state
                            .push_error(format!("Failed to toggle featured: {err}")),
                    }
                }
            }
            KeyCode::Char('d') => {
                if let Some(testimonial) = self.state.selected_testimonial() {
                    self.state.pending_action =
                        Some(PendingAction::DeleteTestimonial(testimonial.id.clone()));
                }
            }
            KeyCode::Char('r') => self.refresh_testimonials().await,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
    }

    async fn handle_contacts_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.state.current_list_len();
                self.state.move_selection_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.move_selection_up(),
            KeyCode::Char('d') => {
                if let Some(contact) = self.state.selected_contact() {
                    self.state.pending_action =
                        Some(PendingAction::DeleteContact(contact.id.clone()));
                }
            }
            KeyCode::Char('r') => self.refresh_contacts().await,
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc => self.state.go_back(),
            _ => {}
        }
    }

    async fn handle_confirm_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y') => {
                if let Some(action) = self.state.pending_action.take() {
                    self.perform_delete(action).await;
                }
            }
            KeyCode::Char('n') | KeyCode::Esc => {
                self.state.pending_action = None;
            }
            _ => {}
        }
    }

    async fn perform_delete(&mut self, action: PendingAction) {
        let result = match &action {
            PendingAction::DeleteArticle(id) => self.api.delete_article(id).await,
            PendingAction::DeleteEvent(id) => self.api.delete_event(id).await,
            PendingAction::DeleteTestimonial(id) => self.api.delete_testimonial(id).await,
            PendingAction::DeleteContact(id) => self.api.delete_contact(id).await,
        };
        match result {
            Ok(()) => {
                self.refresh_current().await;
                self.state.reset_selection();
            }
            Err(err) => self.state.push_error(format!("Delete failed: {err}")),
        }
    }

    // --- form keys --------------------------------------------------------

    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        // Saving and attachment loading use control chords
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('s') => {
                    self.submit_active_form().await;
                    return Ok(());
                }
                KeyCode::Char('o') => {
                    self.load_attachment();
                    return Ok(());
                }
                _ => {}
            }
        }

        let Some(form) = self.state.form.as_mut() else {
            return Ok(());
        };

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Enter => {
                // Enter inserts a newline in multiline fields, otherwise
                // advances like Tab.
                if form.is_active_field_multiline() {
                    form.input_char('\n');
                } else {
                    form.next_field();
                }
            }
            KeyCode::Char(' ') => {
                let active = form.get_field(form.active_field()).map(|f| &f.value);
                let is_select = matches!(active, Some(FieldValue::Select { .. }));
                let is_flag = matches!(active, Some(FieldValue::Flag(_)));
                if is_select {
                    form.cycle_active();
                } else if is_flag {
                    form.toggle_active();
                } else {
                    form.input_char(' ');
                }
            }
            KeyCode::Char(c) => form.input_char(c),
            KeyCode::Esc => {
                // Abandoning the form also abandons interest in any
                // still-running submit.
                self.state.form = None;
                self.state.go_back();
            }
            _ => {}
        }
        Ok(())
    }

    /// Read the file named in the imagePath field into the form attachment
    fn load_attachment(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        let path = form.value("imagePath").trim().to_string();
        if path.is_empty() {
            self.state.push_error("Enter an image path first");
            return;
        }
        match Attachment::from_path(Path::new(&path)) {
            Ok(attachment) => form.set_attachment(attachment),
            Err(err) => self.state.push_error(err.to_string()),
        }
    }

    async fn submit_active_form(&mut self) {
        let Some(form) = self.state.form.as_mut() else {
            return;
        };
        let accepted = self.submitter.submit(self.api.as_ref(), form).await;
        if !accepted {
            return;
        }

        // The public contact form stays up showing the success notice;
        // admin forms return to their listing.
        let target = match self.state.current_view {
            View::ContactForm => None,
            View::ArticleCreate | View::ArticleEdit => Some(View::Articles),
            View::EventCreate | View::EventEdit => Some(View::Events),
            View::TestimonialCreate | View::TestimonialEdit => Some(View::Testimonials),
            _ => None,
        };
        if let Some(view) = target {
            self.state.form = None;
            self.state.go_back();
            self.state.current_view = view;
            self.refresh_current().await;
        }
    }
}
