//! GraphQL types for the route catalog API

use async_graphql::{Enum, InputObject, SimpleObject};

/// An admission route
#[derive(SimpleObject, Debug, Clone)]
pub struct Route {
    pub id: i64,
    pub code: String,
    pub name: String,
    /// Whether the route is currently open for registration
    pub status: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// A page of routes plus the total count matching the filter
#[derive(SimpleObject, Debug, Clone)]
pub struct RouteList {
    pub items: Vec<Route>,
    pub total_count: i64,
}

/// Sortable fields for route list queries
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum RouteSortField {
    Code,
    Name,
    Status,
    CreatedAt,
    UpdatedAt,
}

/// Filter, sort and pagination options for the routes query
#[derive(InputObject, Default, Debug, Clone)]
pub struct RouteWhereInput {
    /// Substring match against route code or name
    pub search: Option<String>,
    /// Filter by the active flag
    pub status: Option<bool>,
    /// Sort field; results are unordered when absent
    pub sort_by: Option<RouteSortField>,
    /// Sort descending instead of ascending
    pub descending: Option<bool>,
    /// Number of routes to return (default 10)
    pub take: Option<i32>,
    /// Number of routes to skip (default 0)
    pub skip: Option<i32>,
}
