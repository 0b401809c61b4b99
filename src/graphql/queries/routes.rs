//! GraphQL resolvers for admission route queries

use async_graphql::{Context, Object, Result};

use crate::db::{Database, RouteFilter, RouteOrderBy};
use crate::graphql::helpers::{route_record_to_graphql, sort_field_to_column};
use crate::graphql::types::{Route, RouteList, RouteWhereInput};

#[derive(Default)]
pub struct RouteQueries;

#[Object]
impl RouteQueries {
    /// Get a single admission route by ID
    async fn route(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Route ID")] id: i64,
    ) -> Result<Route> {
        let db = ctx.data_unchecked::<Database>();

        let record = db
            .routes()
            .get_by_id(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?
            .ok_or_else(|| async_graphql::Error::new("Route not found"))?;

        Ok(route_record_to_graphql(record))
    }

    /// Get admission routes with optional filtering, sorting and pagination
    async fn routes(
        &self,
        ctx: &Context<'_>,
        #[graphql(desc = "Filter options")] r#where: Option<RouteWhereInput>,
    ) -> Result<RouteList> {
        let db = ctx.data_unchecked::<Database>();
        let input = r#where.unwrap_or_default();

        let filter = RouteFilter {
            search: input.search,
            status: input.status,
        };

        let order = input.sort_by.map(|field| RouteOrderBy {
            column: sort_field_to_column(field),
            direction: if input.descending.unwrap_or(false) {
                "DESC"
            } else {
                "ASC"
            }
            .to_string(),
        });

        let take = i64::from(input.take.unwrap_or(10)).max(0);
        let skip = i64::from(input.skip.unwrap_or(0)).max(0);

        let result = db
            .routes()
            .list(filter, order, take, skip)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(RouteList {
            items: result
                .routes
                .into_iter()
                .map(route_record_to_graphql)
                .collect(),
            total_count: result.total_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::db::Database;
    use crate::graphql::{CatalogSchema, build_schema};
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_schema() -> CatalogSchema {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("connect in-memory sqlite");
        let db = Database::new(pool);
        db.migrate().await.expect("run migrations");

        for (code, name, status) in [
            ("REG", "Regular Admission", 1),
            ("MERIT", "Merit Scholarship", 1),
            ("TRF", "Transfer Track", 0),
        ] {
            sqlx::query("INSERT INTO routes (code, name, status) VALUES (?1, ?2, ?3)")
                .bind(code)
                .bind(name)
                .bind(status)
                .execute(db.pool())
                .await
                .expect("seed route");
        }

        build_schema(db)
    }

    #[tokio::test]
    async fn route_by_id_returns_record() {
        let schema = test_schema().await;

        let resp = schema
            .execute("{ route(id: 1) { id code name status } }")
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(
            data,
            json!({
                "route": {
                    "id": 1,
                    "code": "REG",
                    "name": "Regular Admission",
                    "status": true,
                }
            })
        );
    }

    #[tokio::test]
    async fn route_missing_id_is_an_error() {
        let schema = test_schema().await;

        let resp = schema.execute("{ route(id: 999) { id } }").await;
        assert_eq!(resp.errors.len(), 1);
        assert_eq!(resp.errors[0].message, "Route not found");
    }

    #[tokio::test]
    async fn routes_defaults_return_first_page_with_total() {
        let schema = test_schema().await;

        let resp = schema
            .execute("{ routes { items { code } totalCount } }")
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["routes"]["totalCount"], 3);
        assert_eq!(data["routes"]["items"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn routes_search_filters_on_code_and_name() {
        let schema = test_schema().await;

        let resp = schema
            .execute(r#"{ routes(where: { search: "Scholarship" }) { items { code } totalCount } }"#)
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["routes"]["totalCount"], 1);
        assert_eq!(data["routes"]["items"][0]["code"], "MERIT");
    }

    #[tokio::test]
    async fn routes_status_filter() {
        let schema = test_schema().await;

        let resp = schema
            .execute("{ routes(where: { status: false }) { items { code } totalCount } }")
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["routes"]["totalCount"], 1);
        assert_eq!(data["routes"]["items"][0]["code"], "TRF");
    }

    #[tokio::test]
    async fn routes_sorted_descending() {
        let schema = test_schema().await;

        let resp = schema
            .execute(
                "{ routes(where: { sortBy: CODE, descending: true }) { items { code } } }",
            )
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        let codes: Vec<&str> = data["routes"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|i| i["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["TRF", "REG", "MERIT"]);
    }

    #[tokio::test]
    async fn routes_pagination_keeps_total_count() {
        let schema = test_schema().await;

        let resp = schema
            .execute(
                "{ routes(where: { sortBy: CODE, take: 2, skip: 2 }) { items { code } totalCount } }",
            )
            .await;
        assert!(resp.errors.is_empty(), "unexpected errors: {:?}", resp.errors);

        let data = resp.data.into_json().unwrap();
        assert_eq!(data["routes"]["totalCount"], 3);
        let items = data["routes"]["items"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["code"], "TRF");
    }
}
