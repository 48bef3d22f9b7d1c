//! Robot CRUD handlers.
//!
//! Handlers only translate HTTP to service calls. Caching and event
//! publishing happen inside [`RobotService`](crate::service::RobotService).

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use robosync_core::robot::{
    CreateRobotRequest, Robot, RobotId, UpdateCoordinatesRequest, UpdateNameRequest,
    UpdateTypeRequest,
};

use crate::{
    handlers::{AppError, BadRequest},
    state::AppState,
};

fn json_body<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    body.map(|Json(payload)| payload)
        .map_err(|e| AppError::from(BadRequest(e.body_text())))
}

fn path_id(id: Result<Path<RobotId>, PathRejection>) -> Result<RobotId, AppError> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::from(BadRequest(e.body_text())))
}

/// Create a robot (POST /robots/create). Responds with the new id.
pub async fn create_robot(
    State(state): State<AppState>,
    body: Result<Json<CreateRobotRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RobotId>), AppError> {
    let new_robot = json_body(body)?.into_new_robot()?;

    let id = state.robots.create(&new_robot).await?;

    Ok((StatusCode::CREATED, Json(id)))
}

/// Get a robot by id (GET /robots/{id}).
pub async fn get_robot(
    State(state): State<AppState>,
    id: Result<Path<RobotId>, PathRejection>,
) -> Result<Json<Robot>, AppError> {
    let id = path_id(id)?;

    let robot = state.robots.get(id).await?;

    Ok(Json(robot))
}

/// Move a robot (PUT /robots/updatecord).
pub async fn update_coordinates(
    State(state): State<AppState>,
    body: Result<Json<UpdateCoordinatesRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let request = json_body(body)?;

    state
        .robots
        .update_coordinates(request.id, request.coordinates)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Rename a robot (PUT /robots/updatename).
pub async fn update_name(
    State(state): State<AppState>,
    body: Result<Json<UpdateNameRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let request = json_body(body)?;
    request.validate()?;

    state.robots.update_name(request.id, &request.name).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change a robot's type (PUT /robots/updatetype).
pub async fn update_type(
    State(state): State<AppState>,
    body: Result<Json<UpdateTypeRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let request = json_body(body)?;
    request.validate()?;

    state.robots.update_type(request.id, &request.kind).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a robot (DELETE /robots/delete/{id}).
pub async fn delete_robot(
    State(state): State<AppState>,
    id: Result<Path<RobotId>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = path_id(id)?;

    state.robots.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
