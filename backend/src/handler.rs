use serde::Serialize;
use warp::{reply::json, Rejection, Reply};

type Result<T> = std::result::Result<T, Rejection>;

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

pub async fn health_handler() -> Result<impl Reply> {
    Ok(json(&HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
