mod billing;
mod errors;
mod food;
mod rooms;
mod supplies;

use crate::AppState;
use actix_web::{get, web, HttpResponse, Responder};
pub(crate) use errors::default_error_handler;

const MAIN_MENU: &str = "Hotel Operations\n\
    GET  /book-room       list available rooms\n\
    POST /book            book a room\n\
    GET  /checkout        list active reservations\n\
    POST /generate-bill   check a guest out\n\
    GET  /bills           list past bills\n\
    GET  /supplies        housekeeping supplies\n\
    GET  /food-inventory  food inventory\n";

#[get("/")]
async fn main_menu() -> impl Responder {
    HttpResponse::Ok().body(MAIN_MENU)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().body("OK")
}

pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    cfg.app_data(web::FormConfig::default().error_handler(default_error_handler))
        .service(main_menu)
        .service(health)
        .configure(|cfg| rooms::config(cfg, &state.room_ops))
        .configure(|cfg| billing::config(cfg, &state.billing_ops))
        .configure(|cfg| supplies::config(cfg, &state.supply_ops))
        .configure(|cfg| food::config(cfg, &state.food_ops));
}
