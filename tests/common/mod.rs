//! Test conventions:
//! - Each test builds its own throwaway SQLite file under a tempdir, so
//!   tests run in parallel without cross-test cleanup.
//! - Seed fixtures through `hotel_ops::test_utils`.

#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, App, Error};
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::SqliteConnection;
use hotel_ops::test_utils::{build_test_pool, seed_basic_fixtures, TestFixtures};
use hotel_ops::{api, AppState};
use tempfile::TempDir;

pub struct TestDb {
    pub database_url: String,
    _dir: TempDir,
}

pub fn setup_test_db() -> TestDb {
    let dir = TempDir::new().expect("create tempdir");
    let database_url = dir
        .path()
        .join("hotel_test.db")
        .to_string_lossy()
        .into_owned();

    TestDb {
        database_url,
        _dir: dir,
    }
}

pub fn setup_pool() -> (Pool<ConnectionManager<SqliteConnection>>, TestDb) {
    let db = setup_test_db();
    let pool = build_test_pool(&db.database_url);
    (pool, db)
}

pub fn setup_pool_with_fixtures() -> (
    Pool<ConnectionManager<SqliteConnection>>,
    TestFixtures,
    TestDb,
) {
    let (pool, db) = setup_pool();
    let fixtures = seed_basic_fixtures(&pool).expect("seed fixtures");
    (pool, fixtures, db)
}

pub async fn setup_api_app() -> (
    impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>,
    AppState,
    TestDb,
) {
    let db = setup_test_db();
    // AppState::new runs migrations and seeds rooms 101-110.
    let state = AppState::new(&db.database_url);
    let app = test::init_service(App::new().configure(|cfg| api::configure(cfg, &state))).await;
    (app, state, db)
}
