//! API Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use concession_forms::{ChangeFieldCommand, SessionId, SessionView, TimeslotOption, UseCaseError};
use uuid::Uuid;

use crate::{models::*, AppState};

/// Use case failure rendered as a JSON error body
#[derive(Debug)]
pub struct ApiError(UseCaseError);

impl From<UseCaseError> for ApiError {
    fn from(err: UseCaseError) -> Self {
        Self(err)
    }
}

impl ApiError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self.0 {
            UseCaseError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            UseCaseError::UnknownField(_) | UseCaseError::BadRequest(_) => {
                (StatusCode::BAD_REQUEST, "bad_request")
            }
            UseCaseError::Conflict(_) => (StatusCode::CONFLICT, "not_editable"),
            UseCaseError::Rejected(_) | UseCaseError::NoCollectionDate => {
                (StatusCode::UNPROCESSABLE_ENTITY, "rejected")
            }
            UseCaseError::Persistence(_) => (StatusCode::BAD_GATEWAY, "persistence_failed"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        let body = ErrorResponse { code: code.to_string(), message: self.0.to_string() };
        (status, Json(body)).into_response()
    }
}

type ApiResult<T> = Result<T, ApiError>;

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".into(),
        version: env!("CARGO_PKG_VERSION").into(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

pub async fn form_schema() -> Json<FormSchema> {
    Json(FormSchema::current())
}

pub async fn open_session(State(state): State<AppState>) -> ApiResult<(StatusCode, Json<SessionView>)> {
    let view = state.forms.open_session().await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn get_session(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<Json<SessionView>> {
    let view = state.forms.get_session(SessionId::from_uuid(id)).await?;
    Ok(Json(view))
}

pub async fn change_field(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
    Json(change): Json<FieldChangeRequest>,
) -> ApiResult<Json<SessionView>> {
    let command = ChangeFieldCommand {
        session_id: SessionId::from_uuid(id),
        field: change.field,
        value: change.value,
    };
    Ok(Json(state.forms.change_field(command).await?))
}

pub async fn open_timeslots(
    Path(id): Path<Uuid>,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<TimeslotOption>>> {
    let options = state.forms.open_timeslot_selector(SessionId::from_uuid(id)).await?;
    Ok(Json(options))
}

pub async fn submit(Path(id): Path<Uuid>, State(state): State<AppState>) -> ApiResult<Json<SessionView>> {
    let view = state.forms.submit(SessionId::from_uuid(id)).await?;
    Ok(Json(view))
}
