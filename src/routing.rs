//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{delete, get, post, put},
};

use crate::{
    AppState, endpoints,
    expense::{
        add_expense_endpoint, delete_expense_endpoint, get_expenses_json, get_expenses_page,
        toggle_paid_endpoint, update_due_endpoint, update_income_endpoint, update_price_endpoint,
        update_title_endpoint,
    },
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    session::end_session_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let page_routes = Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::EXPENSES_VIEW, get(get_expenses_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        );

    let api_routes = Router::new()
        .route(
            endpoints::EXPENSES_API,
            get(get_expenses_json).post(add_expense_endpoint),
        )
        .route(endpoints::EXPENSE, delete(delete_expense_endpoint))
        .route(endpoints::EXPENSE_TITLE, put(update_title_endpoint))
        .route(endpoints::EXPENSE_PRICE, put(update_price_endpoint))
        .route(endpoints::EXPENSE_DUE, put(update_due_endpoint))
        .route(endpoints::EXPENSE_PAID, post(toggle_paid_endpoint))
        .route(endpoints::INCOME, put(update_income_endpoint))
        .route(endpoints::SESSION, delete(end_session_endpoint));

    page_routes
        .merge(api_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the expenses page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::EXPENSES_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;

    use crate::{AppState, build_router, endpoints};

    fn get_test_server() -> TestServer {
        TestServer::new(build_router(AppState::new("foobar")))
            .expect("Could not create test server.")
    }

    #[tokio::test]
    async fn unknown_route_is_not_found_page() {
        let server = get_test_server();

        let response = server.get("/does/not/exist").await;

        response.assert_status(StatusCode::NOT_FOUND);
        assert!(response.text().contains("<html"));
    }

    #[tokio::test]
    async fn error_page_is_internal_server_error() {
        let server = get_test_server();

        let response = server.get(endpoints::INTERNAL_ERROR_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn non_numeric_expense_id_is_rejected() {
        let server = get_test_server();

        let response = server.post("/api/expenses/abc/paid").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }
}
