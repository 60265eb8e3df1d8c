use chrono::Utc;

use crate::api::ApiClient;
use crate::error::ClientError;
use crate::models::booking::BookingForm;
use crate::models::user::{Credentials, Registration, SessionUser};
use crate::session::SessionStore;
use crate::ui::notifications::NotificationKind;
use crate::ui::tracking::TrackingPanel;
use crate::ui::{Header, Modal, UiState};

// Every handler makes at most one HTTP call and one state update; failures
// become notifications and never escape.
pub struct Controller<S: SessionStore> {
    api: ApiClient,
    store: S,
    pub ui: UiState,
}

impl<S: SessionStore> Controller<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        let header = match store.load() {
            Ok(Some(user)) => Header::LoggedIn { name: user.name },
            Ok(None) => Header::LoggedOut,
            Err(err) => {
                tracing::warn!(error = %err, "failed to restore cached session");
                Header::LoggedOut
            }
        };

        Self {
            api,
            store,
            ui: UiState::new(header),
        }
    }

    pub async fn submit_booking(&mut self, form: &mut BookingForm) {
        let request = match form.parse() {
            Ok(request) => request,
            Err(err) => return self.notify_error(err.to_string()),
        };

        match self.api.create_booking(&request).await {
            Ok(created) => {
                *form = BookingForm::default();
                self.notify_success(format!("Order booked! ID: {}", created.order_id));
            }
            Err(err) => self.notify_error(format!("Booking failed: {err}")),
        }
    }

    pub async fn track_order(&mut self, order_id: &str) {
        let order_id = order_id.trim();
        if let Err(err) = validate_order_id(order_id) {
            return self.notify_error(err.to_string());
        }

        match self.api.get_booking(order_id).await {
            Ok(order) => self.ui.tracking = Some(TrackingPanel::new(order)),
            Err(err) => {
                self.ui.tracking = None;
                self.notify_error(format!("Tracking failed: {err}"));
            }
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) {
        let credentials = Credentials {
            email: email.to_string(),
            password: password.to_string(),
        };

        match self.api.login(&credentials).await {
            Ok(response) => self.finish_auth(response.user, Modal::Login, "Login successful"),
            Err(err) => self.notify_error(format!("Login failed: {err}")),
        }
    }

    pub async fn signup(&mut self, name: &str, email: &str, phone: &str, password: &str) {
        let registration = Registration {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            password: password.to_string(),
        };

        match self.api.register(&registration).await {
            Ok(response) => {
                self.finish_auth(response.user, Modal::Signup, "Account created successfully")
            }
            Err(err) => self.notify_error(format!("Signup failed: {err}")),
        }
    }

    pub async fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear cached session");
        }

        // best effort: the local session is gone either way
        if let Err(err) = self.api.logout().await {
            tracing::debug!(error = %err, "server-side logout failed");
        }

        self.ui.header = Header::LoggedOut;
        self.notify_success("Logged out");
    }

    pub fn open_modal(&mut self, modal: Modal) {
        self.ui.open_modal = Some(modal);
    }

    pub fn close_modal(&mut self, modal: Modal) {
        if self.ui.open_modal == Some(modal) {
            self.ui.open_modal = None;
        }
    }

    pub fn backdrop_click(&mut self) {
        self.ui.open_modal = None;
    }

    fn finish_auth(&mut self, user: SessionUser, modal: Modal, message: &str) {
        if let Err(err) = self.store.save(&user) {
            tracing::warn!(error = %err, "failed to cache session user");
        }

        self.ui.header = Header::LoggedIn { name: user.name };
        self.close_modal(modal);
        self.notify_success(message);
    }

    fn notify_success(&mut self, message: impl Into<String>) {
        self.ui
            .notifications
            .push(message, NotificationKind::Success, Utc::now());
    }

    fn notify_error(&mut self, message: impl Into<String>) {
        self.ui
            .notifications
            .push(message, NotificationKind::Error, Utc::now());
    }
}

// The id becomes a URL path segment, so anything outside this set would need
// escaping before it could reach the backend intact.
fn validate_order_id(order_id: &str) -> Result<(), ClientError> {
    if order_id.is_empty() {
        return Err(ClientError::Validation("Enter order ID".to_string()));
    }

    if !order_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ClientError::Validation(
            "Order ID may only contain letters, digits, - and _".to_string(),
        ));
    }

    Ok(())
}
