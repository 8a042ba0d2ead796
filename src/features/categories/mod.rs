//! Category management.
//!
//! Categories carry a display name and a globally unique slug. Writes go
//! through [`CategoryService`], which pre-checks the slug and then relies on
//! the store's unique constraint.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/category/add` | Admin | Create category |
//! | GET | `/category/show/{id}` | Admin | Get category |
//! | PUT | `/category/update/{id}` | Admin | Replace name and slug |
//! | DELETE | `/category/delete/{id}` | Admin | Delete category |
//! | GET | `/category/all-category` | No | List categories by name |
//! | GET | `/category/slugify` | No | Preview slug for a name |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;

pub use repositories::PgCategoryRepository;
pub use services::CategoryService;
