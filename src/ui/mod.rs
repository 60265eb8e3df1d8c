pub mod controller;
pub mod notifications;
pub mod tracking;

use crate::ui::notifications::NotificationBoard;
use crate::ui::tracking::TrackingPanel;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Header {
    LoggedOut,
    LoggedIn { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Login,
    Signup,
}

#[derive(Debug)]
pub struct UiState {
    pub header: Header,
    pub open_modal: Option<Modal>,
    pub notifications: NotificationBoard,
    pub tracking: Option<TrackingPanel>,
}

impl UiState {
    pub fn new(header: Header) -> Self {
        Self {
            header,
            open_modal: None,
            notifications: NotificationBoard::default(),
            tracking: None,
        }
    }
}
