use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::client::list_clients,
        api::client::get_client,
        api::client::create_client,
        api::client::update_client,
        api::client::delete_client,
        // Add other endpoints here as we document them
    ),
    tags(
        (name = "optigest", description = "Optics retail management API")
    )
)]
pub struct ApiDoc;
