#[macro_use]
extern crate log;

pub mod api;
pub mod db;
pub mod enums;
pub mod models;
pub mod test_utils;

use crate::db::{
    establish_connection_pool, run_db_migrations, seed_rooms, BillingOperations, FoodOperations,
    RoomOperations, SupplyOperations,
};

#[derive(Clone)]
pub struct AppState {
    pub room_ops: RoomOperations,
    pub billing_ops: BillingOperations,
    pub supply_ops: SupplyOperations,
    pub food_ops: FoodOperations,
}

impl AppState {
    pub fn new(database_url: &str) -> Self {
        let db = establish_connection_pool(database_url);
        run_db_migrations(db.clone()).expect("Unable to run migrations");

        let seeded = seed_rooms(&db).expect("Unable to seed rooms");
        if seeded > 0 {
            info!("Seeded {} rooms into empty database", seeded);
        }

        AppState {
            room_ops: RoomOperations::new(db.clone()),
            billing_ops: BillingOperations::new(db.clone()),
            supply_ops: SupplyOperations::new(db.clone()),
            food_ops: FoodOperations::new(db),
        }
    }
}
