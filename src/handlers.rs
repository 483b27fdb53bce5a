use crate::terminal::TerminalManager;

use serde::Deserialize;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};
use tracing::instrument;
use uuid::Uuid;
use warp::http::StatusCode;
use warp::reply::Reply;

#[derive(Debug, Deserialize)]
pub(crate) struct ExecuteRequest {
    pub(crate) line: String,
}

#[instrument(name = "handlers.get_version", level = "info")]
pub(crate) fn get_version() -> Result<impl warp::Reply, Infallible> {
    Ok(warp::reply::with_status(
        warp::reply::json(&env!("CARGO_PKG_VERSION").to_string()),
        StatusCode::OK,
    ))
}

#[instrument(name = "handlers.create_terminal", level = "info", skip(manager))]
pub(crate) fn create_terminal(
    manager: Arc<Mutex<TerminalManager>>,
) -> Result<impl warp::Reply, Infallible> {
    let id = manager.lock().unwrap().create_terminal();
    tracing::info!("Created terminal session {id}");
    Ok(
        warp::reply::with_status(warp::reply::json(&id.to_string()), StatusCode::CREATED)
            .into_response(),
    )
}

#[instrument(
    name = "handlers.execute_command",
    level = "info",
    skip(manager, request),
    fields(
        terminal_id = %id
    )
)]
pub(crate) fn execute_command(
    manager: Arc<Mutex<TerminalManager>>,
    id: Uuid,
    request: ExecuteRequest,
) -> Result<impl warp::Reply, Infallible> {
    let result = manager.lock().unwrap().execute(&id, &request.line);
    match result {
        Ok(output) => Ok(warp::reply::json(&output).into_response()),
        Err(e) => {
            tracing::error!("No terminal session {id}");
            Ok(e.into_response())
        }
    }
}

#[instrument(name = "handlers.get_design", level = "info", skip(manager))]
pub(crate) fn get_design(
    manager: Arc<Mutex<TerminalManager>>,
) -> Result<impl warp::Reply, Infallible> {
    let document = manager.lock().unwrap().designs().current();
    match document {
        Ok(document) => Ok(warp::reply::json(&document).into_response()),
        Err(e) => Ok(e.into_response()),
    }
}
