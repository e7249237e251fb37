use yew::prelude::*;

use super::toast::ToastContext;
use crate::settings::{self, NotificationStyle};

/// Surfaces messages to the user in the configured style.
#[derive(Clone, PartialEq)]
pub struct Notifier {
    style: NotificationStyle,
    toasts: Option<ToastContext>,
}

impl Notifier {
    /// Report a failure. Alert style blocks on `window.alert`.
    pub fn error(&self, message: &str) {
        match (&self.style, &self.toasts) {
            (NotificationStyle::Toast, Some(toasts)) => toasts.show_error(message.to_string()),
            _ => alert(message),
        }
    }

    /// Report invalid input before anything is sent.
    pub fn warning(&self, message: &str) {
        match (&self.style, &self.toasts) {
            (NotificationStyle::Toast, Some(toasts)) => toasts.show_warning(message.to_string()),
            _ => alert(message),
        }
    }

    /// Report success. Never blocks: alert style only logs.
    pub fn success(&self, message: &str) {
        match (&self.style, &self.toasts) {
            (NotificationStyle::Toast, Some(toasts)) => toasts.show_success(message.to_string()),
            _ => log::info!("{}", message),
        }
    }
}

fn alert(message: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("No window to alert: {}", message);
        return;
    };
    if let Err(e) = window.alert_with_message(message) {
        log::error!("window.alert failed: {:?}", e);
    }
}

#[hook]
pub fn use_notifier() -> Notifier {
    let toasts = use_context::<ToastContext>();
    let style = settings::get_settings().notification_style;

    if style == NotificationStyle::Toast && toasts.is_none() {
        log::warn!("Toast notifications configured without a ToastProvider, falling back to alerts");
    }

    Notifier { style, toasts }
}
