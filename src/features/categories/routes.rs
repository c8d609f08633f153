use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::features::categories::handlers::{self, CategoryState};
use crate::shared::constants::{
    ADD_CATEGORY_PATH, DELETE_CATEGORY_PATH, GET_CATEGORIES_PATH, GET_CATEGORY_BY_NAME_PATH,
    GET_CATEGORY_PATH,
};

/// Create routes for the categories feature
///
/// Each path accepts exactly one method; anything else gets `MethodNotAllowed`
/// without touching the body or the database.
pub fn routes(state: CategoryState) -> Router {
    Router::new()
        .route(
            ADD_CATEGORY_PATH,
            post(handlers::add_category).fallback(handlers::method_not_allowed),
        )
        .route(
            GET_CATEGORY_PATH,
            get(handlers::get_category).fallback(handlers::method_not_allowed),
        )
        .route(
            GET_CATEGORIES_PATH,
            get(handlers::get_categories).fallback(handlers::method_not_allowed),
        )
        .route(
            GET_CATEGORY_BY_NAME_PATH,
            get(handlers::get_category_by_name).fallback(handlers::method_not_allowed),
        )
        .route(
            DELETE_CATEGORY_PATH,
            delete(handlers::delete_category).fallback(handlers::method_not_allowed),
        )
        .with_state(state)
}
