use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::categories::models::Category;

/// Response DTO for category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryResponseDto {
    pub id: i64,
    pub name: String,
}

impl From<Category> for CategoryResponseDto {
    fn from(c: Category) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

/// `{"categories": [...]}` wrapper used by the list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CategoryListResponseDto {
    pub categories: Vec<CategoryResponseDto>,
}

impl From<Vec<Category>> for CategoryListResponseDto {
    fn from(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }
}

/// Request body for `/addCategory`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCategoryDto {
    pub name: Option<String>,
}

/// Returned by `/addCategory` when hostname reporting is enabled
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddCategoryResponseDto {
    pub hostname: String,
}

/// Request body accepted by `/delCategoryById` when no `id` query parameter is given
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteCategoryDto {
    pub id: Option<i64>,
}

/// Documents `?id=`. Handlers read it through `AppQuery` so a missing, empty
/// and malformed value can be told apart and repeats keep the first value.
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct CategoryIdQuery {
    /// Non-negative category id
    pub id: Option<String>,
}

/// Documents `?name=`
#[derive(Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
pub struct CategoryNameQuery {
    /// Exact category name
    pub name: Option<String>,
}
