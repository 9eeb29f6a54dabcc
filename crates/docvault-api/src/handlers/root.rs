//! Service banner.

use axum::Json;

use crate::dto::response::MessageResponse;

/// GET /
pub async fn banner() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "DocVault document API. Upload files to /api/files/upload".to_string(),
    })
}
