use crate::config::{Config, ConfigError};
use std::path::PathBuf;
use tracing::info;
use warp::{
    http::{header, Method},
    Filter, Rejection, Reply,
};

mod config;
mod handler;

#[tokio::main]
async fn main() -> Result<(), ConfigError> {
    let config = Config::from_env()?;

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "server.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(non_blocking)
        .finish();
    tracing::subscriber::set_global_default(subscriber).unwrap();

    info!(?config, "starting server");

    let routes = routes(config.static_dir.clone())
        .with(warp::trace::request())
        .with(
            warp::cors()
                .allow_methods(&[Method::OPTIONS, Method::GET])
                .allow_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
                .max_age(300)
                .allow_any_origin(),
        );

    warp::serve(routes).run(config.addr()).await;
    Ok(())
}

// Health check plus the built frontend; unknown paths fall back to
// index.html so the client-side router can handle them
fn routes(static_dir: PathBuf) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let health_route = warp::path!("health")
        .and(warp::get())
        .and_then(handler::health_handler);

    let index = static_dir.join("index.html");
    let static_route = warp::get()
        .and(warp::fs::dir(static_dir))
        .or(warp::get().and(warp::fs::file(index)));

    health_route.or(static_route)
}
