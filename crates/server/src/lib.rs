//! Match Server
//!
//! Hosts the two-player arena behind an actix-web edge: one WebSocket
//! route for play, a liveness route, request logging, and cross-origin
//! policy.
//!
//! ## Submodules
//!
//! - [`handlers`] — WebSocket upgrade and per-connection bridging

pub mod handlers;

use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpResponse;
use actix_web::HttpServer;
use actix_web::Responder;
use actix_web::middleware::Logger;
use actix_web::web;
use clash_arena::Arena;

async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Cross-origin policy from external configuration.
/// ALLOWED_ORIGINS is a comma-separated allow-list; unset permits any
/// origin.
fn cors() -> Cors {
    match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) => origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .allow_any_method()
            .allow_any_header(),
        Err(_) => Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header(),
    }
}

pub async fn run() -> Result<(), std::io::Error> {
    let arena = web::Data::new(Arena::spawn());
    log::info!("starting match server");
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::new("%r %s %Ts"))
            .wrap(cors())
            .app_data(arena.clone())
            .route("/health", web::get().to(health))
            .route("/play", web::get().to(handlers::play))
    })
    .workers(2)
    .bind(std::env::var("BIND_ADDR").expect("BIND_ADDR must be set"))?
    .run()
    .await
}
