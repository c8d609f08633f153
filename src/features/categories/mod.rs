//! Category management: the category table behind five query-string/JSON
//! endpoints, plus the product cleanup that precedes every delete.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Input | Success |
//! |--------|----------|-------|---------|
//! | POST | `/addCategory` | JSON `{"name": string}` | 200, empty body |
//! | GET | `/getCategory` | `?id=` | 200, category object |
//! | GET | `/getCategories` | - | 200, `{"categories": [...]}` |
//! | GET | `/getCategoryByName` | `?name=` | 200, `{"categories": [...]}` |
//! | DELETE | `/delCategoryById` | `?id=` or JSON `{"id": integer}` | 200, empty body |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::ProductServiceClient;
pub use handlers::CategoryState;
pub use services::CategoryService;
