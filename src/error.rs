//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert, expense::ExpenseId, internal_server_error::InternalServerError,
    not_found::NotFoundError,
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An index-based store operation was given a position outside of the
    /// expense list.
    ///
    /// The store is left unchanged when this error is returned.
    #[error("index {index} is out of range for {len} expense(s)")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The number of expenses at the time of the request.
        len: usize,
    },

    /// An event referred to an expense that is no longer in the store, e.g.,
    /// it was deleted from another tab before this event arrived.
    #[error("no expense with the ID {0}")]
    ExpenseNotFound(ExpenseId),

    /// A form value could not be parsed as the number type of the field it
    /// was submitted for.
    #[error("\"{value}\" is not a valid {field}")]
    InvalidNumber {
        /// The name of the field, e.g. "price".
        field: &'static str,
        /// The raw text that was submitted.
        value: String,
    },

    /// Could not acquire the session lock.
    #[error("could not acquire the session lock")]
    SessionLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::ExpenseNotFound(_) | Error::IndexOutOfRange { .. } => {
                NotFoundError.into_response()
            }
            Error::SessionLockError => InternalServerError::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::ExpenseNotFound(_) => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not find expense",
                    "The expense could not be found. \
                    Try refreshing the page to see if the expense has already been deleted.",
                ),
            ),
            Error::IndexOutOfRange { index, len } => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Could not find expense",
                    &format!("There is no expense at position {index}, there are only {len}."),
                ),
            ),
            Error::InvalidNumber { field, value } => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    &format!("Invalid {field}"),
                    &format!("\"{value}\" is not a valid {field}. Enter a number and try again."),
                ),
            ),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        };

        (status_code, alert.into_html()).into_response()
    }
}
