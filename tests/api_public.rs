mod common;

use actix_web::http::StatusCode;
use actix_web::test;

#[actix_rt::test]
async fn main_menu_lists_sections() {
    let (app, _state, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    let text = std::str::from_utf8(&body).expect("utf8 body");
    assert!(text.contains("/book-room"));
    assert!(text.contains("/food-inventory"));
}

#[actix_rt::test]
async fn health_endpoint() {
    let (app, _state, _db) = common::setup_api_app().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "OK");
}
