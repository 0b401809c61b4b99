pub(crate) mod helpers;
pub mod queries;
mod schema;
pub mod types;

pub use schema::{CatalogSchema, QueryRoot, build_schema};
