//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the users endpoints, the health probes and the
//! request/response schemas. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, User};
use crate::inbound::http::users::{DeleteUserResponse, UserRequest};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User directory API",
        description = "In-memory CRUD service for user records, with health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(User, UserRequest, DeleteUserResponse, Error, ErrorCode)),
    tags(
        (name = "users", description = "User records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_fields(name: &str, fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        match schemas.get(name).expect("schema registered") {
            RefOr::T(Schema::Object(obj)) => {
                for field in fields {
                    assert!(
                        obj.properties.contains_key(*field),
                        "{name} should have field '{field}'"
                    );
                }
            }
            _ => panic!("expected Object schema for {name}"),
        }
    }

    #[rstest]
    #[case("User", &["id", "name", "email", "age"])]
    #[case("UserRequest", &["id", "name", "email", "age"])]
    #[case("DeleteUserResponse", &["message"])]
    #[case("Error", &["code", "message"])]
    fn schemas_expose_wire_fields(#[case] name: &str, #[case] fields: &[&str]) {
        assert_object_schema_has_fields(name, fields);
    }

    #[rstest]
    #[case("/users")]
    #[case("/users/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn item_path_carries_get_put_and_delete() {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get("/users/{id}").expect("item path");
        assert!(item.get.is_some());
        assert!(item.put.is_some());
        assert!(item.delete.is_some());
        assert!(item.post.is_none());
    }

    #[rstest]
    fn list_advertises_only_success() {
        let doc = ApiDoc::openapi();
        let list = doc
            .paths
            .paths
            .get("/users")
            .and_then(|item| item.get.as_ref())
            .expect("list operation");
        let statuses: Vec<&str> = list.responses.responses.keys().map(String::as_str).collect();
        assert_eq!(statuses, vec!["200"]);
    }
}
