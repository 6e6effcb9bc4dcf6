//! An expense tracker for keeping on top of fixed monthly expenses.
//!
//! Each browser session gets its own [ExpenseStore]: an income, an ordered
//! list of expenses and the values derived from them (balance, remaining
//! income and the index of the last expense). Every change to the store is
//! made by applying an [ExpenseEvent], after which the expenses section of the
//! page is re-rendered from the new state.
//!
//! This library provides a REST API that directly serves HTML pages.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod endpoints;
mod error;
mod expense;
mod html;
mod internal_server_error;
mod logging;
mod not_found;
mod routing;
mod session;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use error::Error;
pub use expense::{
    Expense, ExpenseBuilder, ExpenseEvent, ExpenseField, ExpenseId, ExpenseRow, ExpenseStore,
    ExpenseUpdate, ExpensesView, dispatch,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use session::{SessionId, SessionStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("Could not listen for the Ctrl+C signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("Could not listen for the terminate signal: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
