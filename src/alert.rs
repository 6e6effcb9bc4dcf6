//! Alert fragments for reporting failed interactions to the user.
//!
//! Alerts are swapped into the `#alert-container` element of the base page by
//! htmx's response-targets extension when a request returns an error status.

use axum::response::{Html, IntoResponse, Response};
use maud::{Markup, html};

/// An error message with optional details.
#[derive(Debug, Clone, PartialEq)]
pub struct Alert {
    pub message: String,
    pub details: String,
}

impl Alert {
    /// Create a new error alert.
    pub fn error(message: &str, details: &str) -> Self {
        Self {
            message: message.to_owned(),
            details: details.to_owned(),
        }
    }

    pub fn into_html(self) -> Html<String> {
        Html(self.view().into_string())
    }

    fn view(&self) -> Markup {
        html! {
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-red-800 border
                    border-red-300 rounded-lg bg-red-50 dark:bg-gray-800
                    dark:text-red-400 dark:border-red-800"
                onclick="this.remove()"
            {
                div
                {
                    p class="font-medium" { (self.message) }

                    @if !self.details.is_empty() {
                        span class="text-sm" { (self.details) }
                    }
                }
            }
        }
    }
}

impl IntoResponse for Alert {
    fn into_response(self) -> Response {
        self.into_html().into_response()
    }
}
