//! Application router configuration with session-guarded read routes and
//! the open create route.

use axum::{
    Router, middleware,
    routing::{get, post},
};

use crate::{
    AppState, endpoints,
    session::session_guard,
    transaction::{
        create_transaction_endpoint, get_summary_endpoint, get_transaction_endpoint,
        list_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// The list, get-by-id, and summary routes sit behind the session guard. The
/// create route is open since it is the operation that establishes the
/// session in the first place.
pub fn build_router(state: AppState) -> Router {
    let protected_routes = Router::new()
        .route(endpoints::TRANSACTIONS, get(list_transactions_endpoint))
        .route(endpoints::TRANSACTIONS_SUMMARY, get(get_summary_endpoint))
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route_layer(middleware::from_fn(session_guard));

    let open_routes =
        Router::new().route(endpoints::TRANSACTIONS, post(create_transaction_endpoint));

    protected_routes.merge(open_routes).with_state(state)
}
