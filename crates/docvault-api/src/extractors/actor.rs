//! `Actor` extractor: resolves the uploader from the `X-Actor-Id` header.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use docvault_core::error::AppError;
use docvault_core::types::ActorId;
use docvault_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Header naming the acting uploader.
pub const ACTOR_HEADER: &str = "x-actor-id";

/// Request context for the acting uploader.
///
/// Falls back to `uploads.default_actor_id` when the header is absent.
/// Ids must be positive.
#[derive(Debug, Clone)]
pub struct Actor(pub RequestContext);

impl std::ops::Deref for Actor {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Actor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let actor_id = match parts.headers.get(ACTOR_HEADER) {
            Some(value) => value
                .to_str()
                .ok()
                .and_then(|v| v.trim().parse::<ActorId>().ok())
                .filter(|id| id.get() >= 1)
                .ok_or_else(|| AppError::validation("Invalid X-Actor-Id header"))?,
            None => ActorId(state.config.uploads.default_actor_id),
        };

        Ok(Actor(RequestContext::new(actor_id)))
    }
}
