//! Endpoints that turn UI interactions into expense events.
//!
//! Every endpoint applies one [ExpenseEvent] to the caller's session and
//! responds with the re-rendered expenses section, which htmx swaps into the
//! page. Failed events respond with an alert and leave the store unchanged.

use std::str::FromStr;

use axum::{
    Form,
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;
use serde::{Deserialize, Serialize};

use crate::{
    AppState, Error,
    expense::{ExpenseEvent, ExpenseId, dispatch, view::expenses_section},
    session::{SessionStore, get_or_create_session_id},
};

/// The state needed for changing a session's expenses.
#[derive(Debug, Clone)]
pub struct ExpenseEndpointState {
    /// The expense stores of all active sessions.
    pub sessions: SessionStore,
}

impl FromRef<AppState> for ExpenseEndpointState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            sessions: state.sessions.clone(),
        }
    }
}

/// Form data sent by a single input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValueForm {
    /// The raw text of the input.
    pub value: String,
}

/// Append a new empty expense.
pub async fn add_expense_endpoint(
    State(state): State<ExpenseEndpointState>,
    jar: PrivateCookieJar,
) -> Response {
    dispatch_for_session(&state, jar, ExpenseEvent::ExpenseAdded)
}

/// Change the title of an expense.
pub async fn update_title_endpoint(
    State(state): State<ExpenseEndpointState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
    Form(form): Form<ValueForm>,
) -> Response {
    let event = ExpenseEvent::TitleChanged {
        id: expense_id,
        title: form.value,
    };

    dispatch_for_session(&state, jar, event)
}

/// Change the price of an expense.
pub async fn update_price_endpoint(
    State(state): State<ExpenseEndpointState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
    Form(form): Form<ValueForm>,
) -> Response {
    match parse_amount("price", &form.value) {
        Ok(price) => dispatch_for_session(
            &state,
            jar,
            ExpenseEvent::PriceChanged {
                id: expense_id,
                price,
            },
        ),
        Err(error) => error.into_alert_response(),
    }
}

/// Change the due day of an expense.
pub async fn update_due_endpoint(
    State(state): State<ExpenseEndpointState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
    Form(form): Form<ValueForm>,
) -> Response {
    match parse_number::<u32>("due day", &form.value) {
        Ok(due) => dispatch_for_session(
            &state,
            jar,
            ExpenseEvent::DueChanged {
                id: expense_id,
                due,
            },
        ),
        Err(error) => error.into_alert_response(),
    }
}

/// Flip whether an expense has been paid.
pub async fn toggle_paid_endpoint(
    State(state): State<ExpenseEndpointState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
) -> Response {
    dispatch_for_session(&state, jar, ExpenseEvent::PaidToggled { id: expense_id })
}

/// Delete an expense.
pub async fn delete_expense_endpoint(
    State(state): State<ExpenseEndpointState>,
    Path(expense_id): Path<ExpenseId>,
    jar: PrivateCookieJar,
) -> Response {
    dispatch_for_session(&state, jar, ExpenseEvent::ExpenseDeleted { id: expense_id })
}

/// Change the income.
pub async fn update_income_endpoint(
    State(state): State<ExpenseEndpointState>,
    jar: PrivateCookieJar,
    Form(form): Form<ValueForm>,
) -> Response {
    match parse_amount("income", &form.value) {
        Ok(income) => dispatch_for_session(&state, jar, ExpenseEvent::IncomeChanged(income)),
        Err(error) => error.into_alert_response(),
    }
}

fn dispatch_for_session(
    state: &ExpenseEndpointState,
    jar: PrivateCookieJar,
    event: ExpenseEvent,
) -> Response {
    let (jar, session_id) = get_or_create_session_id(jar);

    match state
        .sessions
        .with_session(session_id, |store| dispatch(store, event))
    {
        Ok(view) => (jar, expenses_section(&view)).into_response(),
        Err(error) => (jar, error.into_alert_response()).into_response(),
    }
}

fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<T, Error> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_owned(),
    })
}

/// Parse a dollar amount. "NaN" and "inf" parse as floats but are not amounts.
fn parse_amount(field: &'static str, value: &str) -> Result<f64, Error> {
    let amount: f64 = parse_number(field, value)?;

    if amount.is_finite() {
        Ok(amount)
    } else {
        Err(Error::InvalidNumber {
            field,
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod parse_tests {
    use crate::Error;

    use super::{parse_amount, parse_number};

    #[test]
    fn parses_trimmed_numbers() {
        assert_eq!(parse_amount("price", " 12.5 "), Ok(12.5));
        assert_eq!(parse_number::<u32>("due day", "3"), Ok(3));
    }

    #[test]
    fn accepts_negative_amounts() {
        assert_eq!(parse_amount("price", "-4"), Ok(-4.0));
    }

    #[test]
    fn rejects_text_and_non_finite_amounts() {
        for value in ["", "abc", "NaN", "inf"] {
            assert_eq!(
                parse_amount("price", value),
                Err(Error::InvalidNumber {
                    field: "price",
                    value: value.to_owned(),
                })
            );
        }
    }

    #[test]
    fn rejects_fractional_and_negative_due_days() {
        assert!(parse_number::<u32>("due day", "1.5").is_err());
        assert!(parse_number::<u32>("due day", "-1").is_err());
    }
}
