//! Per-session expense stores and the cookie that identifies a session.
//!
//! Each browser session gets its own [ExpenseStore]. The store is created the
//! first time the session is seen and lives until the session is ended or has
//! been idle for longer than the session duration. All access to a store goes
//! through [SessionStore::with_session], which holds the session lock for the
//! whole state transition so that events are applied one at a time in the
//! order they arrive.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::{
    PrivateCookieJar,
    cookie::{Cookie, SameSite},
};
use axum_htmx::HxRedirect;
use time::{Duration, OffsetDateTime};
use uuid::Uuid;

use crate::{AppState, Error, endpoints, expense::ExpenseStore};

/// Identifies a browser session.
pub type SessionId = Uuid;

pub(crate) const COOKIE_SESSION_ID: &str = "session_id";
/// How long a session is kept after its last request.
pub(crate) const DEFAULT_SESSION_DURATION: Duration = Duration::hours(2);

#[derive(Debug)]
struct Session {
    store: ExpenseStore,
    last_access: OffsetDateTime,
}

/// The expense stores of all active sessions.
///
/// Cloning a [SessionStore] gives another handle to the same sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<SessionId, Session>>>,
    idle_timeout: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_idle_timeout(DEFAULT_SESSION_DURATION)
    }
}

impl SessionStore {
    /// Create an empty session store that drops sessions after
    /// [DEFAULT_SESSION_DURATION] without a request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty session store that drops sessions after
    /// `idle_timeout` without a request.
    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_timeout,
        }
    }

    /// Run `f` on the expense store of `session_id`, creating the store if
    /// this is the first time the session has been seen.
    ///
    /// Sessions that have been idle for longer than the idle timeout are
    /// dropped first, so an expired session starts over with a new store.
    ///
    /// # Errors
    ///
    /// Returns [Error::SessionLockError] if the session lock is poisoned, or
    /// any error returned by `f`.
    pub fn with_session<T>(
        &self,
        session_id: SessionId,
        f: impl FnOnce(&mut ExpenseStore) -> Result<T, Error>,
    ) -> Result<T, Error> {
        self.with_session_at(session_id, OffsetDateTime::now_utc(), f)
    }

    fn with_session_at<T>(
        &self,
        session_id: SessionId,
        now: OffsetDateTime,
        f: impl FnOnce(&mut ExpenseStore) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let mut sessions = self
            .sessions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLockError)?;

        let session_count = sessions.len();
        sessions.retain(|_, session| now - session.last_access < self.idle_timeout);
        let evicted = session_count - sessions.len();
        if evicted > 0 {
            tracing::info!("Dropped {evicted} idle session(s)");
        }

        let session = sessions.entry(session_id).or_insert_with(|| {
            tracing::info!("Starting session {session_id}");
            Session {
                store: ExpenseStore::with_default_expense(),
                last_access: now,
            }
        });
        session.last_access = now;

        f(&mut session.store)
    }

    /// Drop the expense store of `session_id`.
    ///
    /// Returns whether the session existed.
    pub fn end_session(&self, session_id: SessionId) -> Result<bool, Error> {
        let mut sessions = self
            .sessions
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire session lock: {error}"))
            .map_err(|_| Error::SessionLockError)?;

        let existed = sessions.remove(&session_id).is_some();
        if existed {
            tracing::info!("Ended session {session_id}");
        }

        Ok(existed)
    }

    /// The number of sessions currently held, including idle sessions that
    /// have not been dropped yet.
    pub fn session_count(&self) -> Result<usize, Error> {
        self.sessions
            .lock()
            .map(|sessions| sessions.len())
            .map_err(|_| Error::SessionLockError)
    }
}

/// Get the session ID from `jar`, or start a new session if there is no valid
/// session cookie.
///
/// The session cookie is (re)set to expire [DEFAULT_SESSION_DURATION] from
/// now, so an active session keeps its cookie alive.
///
/// Returns the cookie jar with the session cookie and the session ID.
pub(crate) fn get_or_create_session_id(jar: PrivateCookieJar) -> (PrivateCookieJar, SessionId) {
    let session_id = jar
        .get(COOKIE_SESSION_ID)
        .and_then(|cookie| Uuid::parse_str(cookie.value_trimmed()).ok())
        .unwrap_or_else(Uuid::new_v4);

    (set_session_cookie(jar, session_id), session_id)
}

fn set_session_cookie(jar: PrivateCookieJar, session_id: SessionId) -> PrivateCookieJar {
    let expiry = OffsetDateTime::now_utc() + DEFAULT_SESSION_DURATION;

    jar.add(
        Cookie::build((COOKIE_SESSION_ID, session_id.to_string()))
            .path("/")
            .expires(expiry)
            .http_only(true)
            .same_site(SameSite::Strict),
    )
}

/// Set the session cookie to an invalid value and set its max age to zero, which should delete the cookie on the client side.
pub(crate) fn invalidate_session_cookie(jar: PrivateCookieJar) -> PrivateCookieJar {
    jar.add(
        Cookie::build((COOKIE_SESSION_ID, "deleted"))
            .path("/")
            .expires(OffsetDateTime::UNIX_EPOCH)
            .max_age(Duration::ZERO)
            .http_only(true)
            .same_site(SameSite::Strict),
    )
}

/// The state needed for ending a session.
#[derive(Debug, Clone)]
pub struct EndSessionState {
    /// The expense stores of all active sessions.
    pub sessions: SessionStore,
}

impl FromRef<AppState> for EndSessionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sessions: state.sessions.clone(),
        }
    }
}

/// Throw away the caller's expenses and income and send them back to a fresh
/// expenses page.
pub async fn end_session_endpoint(
    State(state): State<EndSessionState>,
    jar: PrivateCookieJar,
) -> Response {
    if let Some(cookie) = jar.get(COOKIE_SESSION_ID)
        && let Ok(session_id) = Uuid::parse_str(cookie.value_trimmed())
        && let Err(error) = state.sessions.end_session(session_id)
    {
        return error.into_alert_response();
    }

    (
        invalidate_session_cookie(jar),
        HxRedirect(endpoints::EXPENSES_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response()
}

#[cfg(test)]
mod session_store_tests {
    use uuid::Uuid;

    use crate::{Error, session::SessionStore};

    #[test]
    fn first_access_creates_store_with_default_expense() {
        let sessions = SessionStore::new();

        let len = sessions
            .with_session(Uuid::new_v4(), |store| Ok(store.len()))
            .unwrap();

        assert_eq!(len, 1);
        assert_eq!(sessions.session_count(), Ok(1));
    }

    #[test]
    fn sessions_are_isolated() {
        let sessions = SessionStore::new();
        let alice = Uuid::new_v4();
        let bob = Uuid::new_v4();

        sessions
            .with_session(alice, |store| {
                store.add_expense();
                Ok(())
            })
            .unwrap();

        assert_eq!(sessions.with_session(alice, |store| Ok(store.len())), Ok(2));
        assert_eq!(sessions.with_session(bob, |store| Ok(store.len())), Ok(1));
    }

    #[test]
    fn errors_from_closure_are_returned() {
        let sessions = SessionStore::new();

        let result = sessions.with_session(Uuid::new_v4(), |store| store.toggle_paid(9));

        assert_eq!(result, Err(Error::IndexOutOfRange { index: 9, len: 1 }));
    }

    #[test]
    fn end_session_drops_store() {
        let sessions = SessionStore::new();
        let session_id = Uuid::new_v4();
        sessions
            .with_session(session_id, |store| {
                store.update_income(10.0);
                Ok(())
            })
            .unwrap();

        assert_eq!(sessions.end_session(session_id), Ok(true));
        assert_eq!(sessions.end_session(session_id), Ok(false));

        let income = sessions
            .with_session(session_id, |store| Ok(store.income()))
            .unwrap();
        assert_eq!(income, 0.0);
    }
}
