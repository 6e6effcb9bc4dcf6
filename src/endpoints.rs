//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/expenses/{expense_id}', use [format_endpoint].

use std::fmt::Display;

/// The root route which redirects to the expenses page.
pub const ROOT: &str = "/";
/// The page for viewing and editing the session's expenses.
pub const EXPENSES_VIEW: &str = "/expenses";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";

/// The route to get a JSON snapshot of the expenses (GET) or add an expense (POST).
pub const EXPENSES_API: &str = "/api/expenses";
/// The route to delete an expense.
pub const EXPENSE: &str = "/api/expenses/{expense_id}";
/// The route to change the title of an expense.
pub const EXPENSE_TITLE: &str = "/api/expenses/{expense_id}/title";
/// The route to change the price of an expense.
pub const EXPENSE_PRICE: &str = "/api/expenses/{expense_id}/price";
/// The route to change the due day of an expense.
pub const EXPENSE_DUE: &str = "/api/expenses/{expense_id}/due";
/// The route to toggle whether an expense has been paid.
pub const EXPENSE_PAID: &str = "/api/expenses/{expense_id}/paid";
/// The route to change the income.
pub const INCOME: &str = "/api/income";
/// The route to end the current session.
pub const SESSION: &str = "/api/session";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/api/expenses/{expense_id}', '{expense_id}' is the parameter.
///
/// This function assumes that an endpoint path contains a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::EXPENSES_VIEW);
        assert_endpoint_is_valid_uri(endpoints::INTERNAL_ERROR_VIEW);

        assert_endpoint_is_valid_uri(endpoints::EXPENSES_API);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_TITLE);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_PRICE);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_DUE);
        assert_endpoint_is_valid_uri(endpoints::EXPENSE_PAID);
        assert_endpoint_is_valid_uri(endpoints::INCOME);
        assert_endpoint_is_valid_uri(endpoints::SESSION);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint("/hello/{world_id}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());

        // Parameter with single word should also work.
        let formatted_path = format_endpoint("/hello/{world}", 1);

        assert_eq!(formatted_path, "/hello/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint("/hello/world", 1);

        assert_eq!(formatted_path, "/hello/world");
    }

    #[test]
    fn parameter_in_middle() {
        let formatted_path = format_endpoint(endpoints::EXPENSE_TITLE, 42u64);

        assert_eq!(formatted_path, "/api/expenses/42/title");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
