use crate::db::errors::RepositoryError;
use crate::db::schema::food_inventory::dsl::*;
use crate::db::DbConnection;
use crate::models::inventory::{FoodItem, NewFoodItem};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use log::error;

pub struct FoodOperations {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl FoodOperations {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_food_item(&self, item: NewFoodItem) -> Result<FoodItem, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_food_item: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(food_inventory)
            .values(&item)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_food_item: error inserting food item '{}': {}",
                    item.item_name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn get_all_food_items(&self) -> Result<Vec<FoodItem>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "get_all_food_items: failed to acquire DB connection: {}",
                e
            );
            e
        })?;

        food_inventory
            .order_by(id.asc())
            .load::<FoodItem>(conn.connection())
            .map_err(|e| {
                error!("get_all_food_items: error fetching food items: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    // Items are created with free-form quantities ("3kg") but updated with a
    // bare integer, which replaces whatever unit text was stored before.
    pub fn update_quantity(
        &self,
        food_id: i32,
        new_quantity: i32,
    ) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_quantity: failed to acquire DB connection for food item {}: {}",
                food_id, e
            );
            e
        })?;

        diesel::update(food_inventory.filter(id.eq(food_id)))
            .set(quantity.eq(new_quantity.to_string()))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "update_quantity: error updating food item {}: {}",
                    food_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn delete_food_item(&self, food_id: i32) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "delete_food_item: failed to acquire DB connection for food item {}: {}",
                food_id, e
            );
            e
        })?;

        diesel::delete(food_inventory.filter(id.eq(food_id)))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "delete_food_item: error deleting food item {}: {}",
                    food_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}

impl Clone for FoodOperations {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}
