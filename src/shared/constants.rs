/// Product service address used when `PRODUCT_SERVICE_URL` is unset
pub const DEFAULT_PRODUCT_SERVICE_URL: &str = "http://product-service:8082";

/// Product service endpoint that removes every product of one category
pub const PRODUCT_DELETION_PATH: &str = "/delProductsByCategoryId";

// =============================================================================
// ROUTES
// =============================================================================

pub const ADD_CATEGORY_PATH: &str = "/addCategory";
pub const GET_CATEGORY_PATH: &str = "/getCategory";
pub const GET_CATEGORIES_PATH: &str = "/getCategories";
pub const GET_CATEGORY_BY_NAME_PATH: &str = "/getCategoryByName";
pub const DELETE_CATEGORY_PATH: &str = "/delCategoryById";
