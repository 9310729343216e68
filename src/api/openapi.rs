//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::User;
use crate::types::MessageResponse;

/// OpenAPI documentation for the user API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "userdesk",
        version = "0.1.0",
        description = "CRUD operations on users backed by SeaORM",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        user_handler::create_sample_users,
        user_handler::display_users,
        user_handler::display_users_one_by_one,
    ),
    components(
        schemas(
            User,
            MessageResponse,
            user_handler::UserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;
