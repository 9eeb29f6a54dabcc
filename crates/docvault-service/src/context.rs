//! Request context carrying the acting uploader.

use docvault_core::types::ActorId;

/// Context for the current request.
///
/// Built by the API layer (or the CLI) and passed into service methods so
/// the uploader identity is explicit rather than ambient.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext {
    /// The actor credited with any versions created by this request.
    pub actor_id: ActorId,
}

impl RequestContext {
    /// Creates a new request context for `actor_id`.
    pub fn new(actor_id: ActorId) -> Self {
        Self { actor_id }
    }
}
