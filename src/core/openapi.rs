use utoipa::OpenApi;

use crate::features::categories::{dtos as categories_dtos, handlers as categories_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        categories_handlers::add_category,
        categories_handlers::get_category,
        categories_handlers::get_categories,
        categories_handlers::get_category_by_name,
        categories_handlers::delete_category,
    ),
    components(schemas(
        categories_dtos::CategoryResponseDto,
        categories_dtos::CategoryListResponseDto,
        categories_dtos::AddCategoryDto,
        categories_dtos::AddCategoryResponseDto,
        categories_dtos::DeleteCategoryDto,
    )),
    tags(
        (name = "categories", description = "Category management")
    ),
    info(
        title = "Category Service",
        description = "CRUD service for product categories"
    )
)]
pub struct ApiDoc;
