#[macro_use]
extern crate log;
extern crate pretty_env_logger;

use actix_web::{App, HttpServer};
use dotenvy::dotenv;
use hotel_ops::{api, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = dotenv() {
        eprintln!("Failed to load .env file: {}", e);
    }

    // Setup logging
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    pretty_env_logger::init();

    let database_url = std::env::var("DATABASE_URL").unwrap_or_else(|_| "hotel.db".to_string());

    info!("Initializing database at '{}'...", database_url);
    let state = AppState::new(&database_url);

    // Server configuration
    const HOST: &str = "127.0.0.1";
    const PORT: u16 = 8080;

    info!("Starting server at http://{}:{}", HOST, PORT);

    HttpServer::new(move || App::new().configure(|cfg| api::configure(cfg, &state)))
        .bind((HOST, PORT))?
        .run()
        .await
}
