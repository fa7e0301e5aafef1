use utoipa::OpenApi;

use crate::{
    api::models::ErrorResponse,
    core::{
        errors::FieldError,
        models::user::{User, UserDraft},
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::get_all_users,
        super::handlers::get_user_by_id,
        super::handlers::create_user,
        super::handlers::update_user,
        super::handlers::delete_user
    ),
    components(schemas(User, UserDraft, FieldError, ErrorResponse)),
    info(
        title = "User CRUD API",
        description = "API for creating, reading, updating and deleting users",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
