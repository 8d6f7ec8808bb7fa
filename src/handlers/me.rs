//! Current-user endpoint, gated by bearer-token verification.
//! Used by: server.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::extract::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct MeResponse {
    pub status: &'static str,
    pub data: UserProfile,
}

/// Public projection of a user row. The password hash has no field here.
#[derive(Serialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: String,
    pub created_at: String,
}

/// Returns the fresh store record for the verified identity rather than
/// echoing the claims: the row may have changed since issuance.
pub async fn me(State(state): State<AppState>, user: AuthUser) -> Result<Json<MeResponse>> {
    let Some(fresh) = state.users.find_by_id(&user.id)? else {
        return Err(Error::UserNotFound);
    };
    Ok(Json(MeResponse {
        status: "success",
        data: UserProfile {
            id: fresh.id,
            username: fresh.username,
            email: fresh.email,
            role: fresh.role,
            created_at: fresh.created_at,
        },
    }))
}
