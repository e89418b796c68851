//! Users API handlers.
//!
//! ```text
//! GET    /users
//! GET    /users/{id}
//! POST   /users       {"id":3,"name":"Carol","email":"carol@example.com","age":22}
//! PUT    /users/{id}  {"name":"Bobby","email":"bob2@example.com","age":31}
//! DELETE /users/{id}
//! ```
//!
//! Request bodies are decoded into a [`UserDraft`] before the directory is
//! consulted, so an undecodable body never mutates state.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::{Error, User, UserDraft, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{json_config, parse_user_id};

/// Confirmation message returned by `DELETE /users/{id}`.
pub const DELETED_MESSAGE: &str = "User deleted successfully";

/// Request body for `POST /users` and `PUT /users/{id}`.
///
/// Example JSON:
/// `{"id":3,"name":"Carol","email":"carol@example.com","age":22}`
///
/// `id` is optional. On create it is checked for uniqueness (or assigned when
/// absent); on update it is ignored.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UserRequest {
    /// Requested identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 3)]
    pub id: Option<i64>,
    /// Full name.
    #[schema(example = "Carol")]
    pub name: String,
    /// Contact email address.
    #[schema(example = "carol@example.com")]
    pub email: String,
    /// Age in years.
    #[schema(example = 22)]
    pub age: i64,
}

impl From<UserRequest> for UserDraft {
    fn from(value: UserRequest) -> Self {
        let UserRequest {
            id,
            name,
            email,
            age,
        } = value;
        Self::new(id.map(UserId::new), name, email, age)
    }
}

/// Body returned after a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    /// Human-readable confirmation.
    #[schema(example = "User deleted successfully")]
    pub message: String,
}

/// Register the users endpoints and their JSON extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_directory::inbound::http::users;
///
/// let app = App::new().configure(users::configure);
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(list_users)
        .service(get_user)
        .service(create_user)
        .service(update_user)
        .service(delete_user);
}

/// List every user in creation order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User])
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> web::Json<Vec<User>> {
    let users = state.users.list().await;
    info!(count = users.len(), "listed users");
    web::Json(users)
}

/// Fetch one user by id.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "No user with this id", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let user = state.users.get(id).await?;
    Ok(web::Json(user))
}

/// Create a user.
#[utoipa::path(
    post,
    path = "/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 400, description = "Malformed body", body = Error),
        (status = 409, description = "Id already exists", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<UserRequest>,
) -> ApiResult<HttpResponse> {
    let draft = UserDraft::from(payload.into_inner());
    let user = state.users.create(draft).await?;
    info!(user_id = %user.id(), "user created");
    Ok(HttpResponse::Created().json(user))
}

/// Replace a user's name, email and age; the id never changes.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Malformed body", body = Error),
        (status = 404, description = "No user with this id", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> ApiResult<web::Json<User>> {
    let id = parse_user_id(&path)?;
    let patch = UserDraft::from(payload.into_inner());
    let user = state.users.update(id, patch).await?;
    info!(user_id = %id, "user updated");
    Ok(web::Json(user))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = DeleteUserResponse),
        (status = 404, description = "No user with this id", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let id = parse_user_id(&path)?;
    let removed = state.users.delete(id).await?;
    info!(user_id = %removed.id(), "user deleted");
    Ok(web::Json(DeleteUserResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}
