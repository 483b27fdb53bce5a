use crate::handlers;
use crate::terminal::TerminalManager;
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use warp::Filter;

pub(crate) fn routes(
    manager: Arc<Mutex<TerminalManager>>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    get_version()
        .or(create_terminal(manager.clone()))
        .or(execute_command(manager.clone()))
        .or(get_design(manager.clone()))
}

fn get_version() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("version")
        .and(warp::get())
        .map(handlers::get_version)
}

fn create_terminal(
    manager: Arc<Mutex<TerminalManager>>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("terminals")
        .and(warp::post())
        .map(move || handlers::create_terminal(manager.clone()))
}

fn execute_command(
    manager: Arc<Mutex<TerminalManager>>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("terminals" / Uuid / "execute")
        .and(warp::post())
        .and(warp::body::json())
        .map(move |id: Uuid, request: handlers::ExecuteRequest| {
            handlers::execute_command(manager.clone(), id, request)
        })
}

fn get_design(
    manager: Arc<Mutex<TerminalManager>>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path!("design")
        .and(warp::get())
        .map(move || handlers::get_design(manager.clone()))
}
