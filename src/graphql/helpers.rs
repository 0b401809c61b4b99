// Helper functions shared across GraphQL query modules.

use crate::db::RouteRecord;
use crate::graphql::types::{Route, RouteSortField};

/// Convert a RouteRecord from the database to a GraphQL Route type
pub(crate) fn route_record_to_graphql(r: RouteRecord) -> Route {
    Route {
        id: r.id,
        code: r.code,
        name: r.name,
        status: r.status,
        created_at: r.created_at.to_rfc3339(),
        updated_at: r.updated_at.to_rfc3339(),
    }
}

/// Convert RouteSortField enum to database column name
pub(crate) fn sort_field_to_column(field: RouteSortField) -> String {
    match field {
        RouteSortField::Code => "code",
        RouteSortField::Name => "name",
        RouteSortField::Status => "status",
        RouteSortField::CreatedAt => "created_at",
        RouteSortField::UpdatedAt => "updated_at",
    }
    .to_string()
}
