use utoipa::OpenApi;

use crate::routes::{ask, health, messages, profiles, sessions};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "TourlATabogo API",
        description = "Chat sessions with the Bogotá tourism guide"
    ),
    paths(
        health::health_check,
        sessions::create_session,
        sessions::list_sessions,
        sessions::get_session,
        messages::list_messages,
        messages::send_message,
        profiles::get_profile,
        profiles::update_profile,
        ask::ask,
    ),
    components(schemas(
        health::HealthResponse,
        sessions::CreateSessionRequest,
        sessions::SessionResponse,
        sessions::ListSessionsResponse,
        messages::MessageResponse,
        messages::ListMessagesResponse,
        messages::SendMessageRequest,
        messages::SendMessageResponse,
        profiles::ProfileResponse,
        profiles::UpdateProfileRequest,
        ask::AskRequest,
        ask::AskResponse,
    )),
    tags(
        (name = "health"),
        (name = "sessions"),
        (name = "messages"),
        (name = "profiles"),
        (name = "assistant")
    )
)]
pub struct ApiDoc;
