use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::Activity;
use crate::services::activities_service;
use crate::store::{Roster, RosterError};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let status = match self {
            RosterError::ActivityNotFound => StatusCode::NOT_FOUND,
            RosterError::AlreadySignedUp | RosterError::NotSignedUp => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(ErrorBody {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub async fn list_activities_handler(
    State(roster): State<Roster>,
) -> Json<HashMap<String, Activity>> {
    Json(activities_service::list_activities(&roster))
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(roster): State<Roster>,
) -> Result<Json<MessageBody>, RosterError> {
    let message = activities_service::signup_for_activity(&roster, &activity_name, &query.email)
        .map_err(|e| {
            warn!(activity = %activity_name, email = %query.email, "signup rejected: {}", e);
            e
        })?;
    Ok(Json(MessageBody { message }))
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(roster): State<Roster>,
) -> Result<Json<MessageBody>, RosterError> {
    let message =
        activities_service::unregister_from_activity(&roster, &activity_name, &query.email)
            .map_err(|e| {
                warn!(activity = %activity_name, email = %query.email, "unregister rejected: {}", e);
                e
            })?;
    Ok(Json(MessageBody { message }))
}
