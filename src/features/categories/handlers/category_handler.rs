use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::{decode_json, json_ok, AppJson, AppQuery};
use crate::features::categories::clients::ProductServiceClient;
use crate::features::categories::dtos::{
    AddCategoryDto, AddCategoryResponseDto, CategoryIdQuery, CategoryListResponseDto,
    CategoryNameQuery, CategoryResponseDto, DeleteCategoryDto,
};
use crate::features::categories::services::CategoryService;
use crate::shared::hostname::HostnameLookup;

/// Collaborators shared by every category handler. Built once at startup.
#[derive(Clone)]
pub struct CategoryState {
    pub service: Arc<CategoryService>,
    pub products: Arc<ProductServiceClient>,
    /// When set, `/addCategory` answers with the serving host's name
    pub hostname: Option<HostnameLookup>,
}

/// Validate a textual category id: present, an integer, not negative
pub fn parse_category_id(raw: Option<&str>) -> Result<i64> {
    let raw = raw.filter(|s| !s.is_empty()).ok_or(AppError::IdNotSet)?;
    let id = raw.parse::<i64>().map_err(AppError::StrToIntFailure)?;

    if id < 0 {
        return Err(AppError::IdNegative);
    }
    Ok(id)
}

fn require_name(name: Option<&str>) -> Result<&str> {
    name.filter(|n| !n.is_empty()).ok_or(AppError::NameNotSet)
}

/// Answer for a known path hit with the wrong method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Create a category
#[utoipa::path(
    post,
    path = "/addCategory",
    request_body = AddCategoryDto,
    responses(
        (status = 200, description = "Category created; empty body unless hostname reporting is enabled", body = AddCategoryResponseDto),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Invalid body, empty name or query failure")
    ),
    tag = "categories"
)]
pub async fn add_category(
    State(state): State<CategoryState>,
    AppJson(dto): AppJson<AddCategoryDto>,
) -> Result<Response> {
    let name = require_name(dto.name.as_deref())?;

    state.service.add_category(name).await?;
    tracing::info!("Category added: {}", name);

    if let Some(lookup) = &state.hostname {
        let hostname = lookup.resolve().await?;
        return json_ok(&AddCategoryResponseDto { hostname });
    }

    Ok(StatusCode::OK.into_response())
}

/// Get one category by id
#[utoipa::path(
    get,
    path = "/getCategory",
    params(CategoryIdQuery),
    responses(
        (status = 200, description = "Category found", body = CategoryResponseDto),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Invalid id, or no such category")
    ),
    tag = "categories"
)]
pub async fn get_category(
    State(state): State<CategoryState>,
    query: AppQuery,
) -> Result<Response> {
    let id = parse_category_id(query.first("id"))?;

    let category = state.service.get_category(id).await?;
    json_ok(&CategoryResponseDto::from(category))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/getCategories",
    responses(
        (status = 200, description = "All categories", body = CategoryListResponseDto),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Query failure")
    ),
    tag = "categories"
)]
pub async fn get_categories(State(state): State<CategoryState>) -> Result<Response> {
    let categories = state.service.get_categories().await?;
    json_ok(&CategoryListResponseDto::from(categories))
}

/// List categories with an exact name
#[utoipa::path(
    get,
    path = "/getCategoryByName",
    params(CategoryNameQuery),
    responses(
        (status = 200, description = "Matching categories, possibly none", body = CategoryListResponseDto),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Empty name or query failure")
    ),
    tag = "categories"
)]
pub async fn get_category_by_name(
    State(state): State<CategoryState>,
    query: AppQuery,
) -> Result<Response> {
    let name = require_name(query.first("name"))?;

    let categories = state.service.get_category_by_name(name).await?;
    json_ok(&CategoryListResponseDto::from(categories))
}

/// Delete a category and, first, all of its products
///
/// The id comes from the `id` query parameter, or from a JSON body
/// `{"id": integer}` when the parameter is absent. The row is only deleted
/// once the product service has answered 200. The two steps are not atomic.
#[utoipa::path(
    delete,
    path = "/delCategoryById",
    params(CategoryIdQuery),
    request_body(content = DeleteCategoryDto, description = "Used only without the `id` query parameter"),
    responses(
        (status = 200, description = "Products and category deleted"),
        (status = 405, description = "Wrong method"),
        (status = 500, description = "Invalid id, product deletion failed or query failure")
    ),
    tag = "categories"
)]
pub async fn delete_category(
    State(state): State<CategoryState>,
    query: AppQuery,
    body: Bytes,
) -> Result<Response> {
    let id = match query.first("id") {
        Some(raw) => parse_category_id(Some(raw))?,
        None => delete_id_from_body(&body)?,
    };

    state.products.delete_products_by_category_id(id).await?;
    state.service.delete_category(id).await?;
    tracing::info!("Category {} deleted", id);

    Ok(StatusCode::OK.into_response())
}

fn delete_id_from_body(body: &[u8]) -> Result<i64> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::IdNotSet);
    }

    let dto: DeleteCategoryDto = decode_json(body)?;

    match dto.id {
        Some(id) if id < 0 => Err(AppError::IdNegative),
        Some(id) => Ok(id),
        None => Err(AppError::IdNotSet),
    }
}
