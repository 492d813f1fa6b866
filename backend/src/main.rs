mod config;
mod order_desk;
mod services;

use crate::config::ServerConfig;
use crate::order_desk::state::OrdersState;
use actix_web::http::Method;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::info;
use mime_guess::from_path;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// Serves the embedded bundle for any unrouted GET/HEAD.
///
/// Other methods get `405` so that a POST aimed at the wrong order path is
/// never mistaken for an accepted order.
async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    if *req.method() != Method::GET && *req.method() != Method::HEAD {
        return HttpResponse::MethodNotAllowed()
            .insert_header(("Allow", "GET, HEAD"))
            .finish();
    }

    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = ServerConfig::load();
    let url = config.url();

    if config.open_browser {
        let url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&url_clone);
        });
    }

    let (tx, rx) = mpsc::channel(config.order_queue_capacity.max(1));
    let orders_state = OrdersState { tx };

    tokio::spawn(order_desk::state::start_order_desk(rx));

    info!("Server running at {}", url);
    info!("Accepting orders on POST {}", config.order_path);

    let order_path = config.order_path.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(orders_state.clone()))
            .service(services::orders::configure_routes(&order_path))
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
