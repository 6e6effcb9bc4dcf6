//! The expenses page and its JSON counterpart.

use axum::{
    Json,
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::{
    AppState, Error,
    expense::{ExpensesView, view::expenses_page_view},
    session::{SessionStore, get_or_create_session_id},
};

/// The state needed for reading a session's expenses.
#[derive(Debug, Clone)]
pub struct ExpensesPageState {
    /// The expense stores of all active sessions.
    pub sessions: SessionStore,
}

impl FromRef<AppState> for ExpensesPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sessions: state.sessions.clone(),
        }
    }
}

/// Render the expenses page for the caller's session, starting a new session if needed.
pub async fn get_expenses_page(
    State(state): State<ExpensesPageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let (jar, session_id) = get_or_create_session_id(jar);
    let view = state
        .sessions
        .with_session(session_id, |store| Ok(ExpensesView::from_store(store)))?;

    Ok((jar, expenses_page_view(&view)).into_response())
}

/// Get a snapshot of the caller's expenses as JSON.
pub async fn get_expenses_json(
    State(state): State<ExpensesPageState>,
    jar: PrivateCookieJar,
) -> Result<Response, Error> {
    let (jar, session_id) = get_or_create_session_id(jar);
    let view = state
        .sessions
        .with_session(session_id, |store| Ok(ExpensesView::from_store(store)))?;

    Ok((jar, Json(view)).into_response())
}
