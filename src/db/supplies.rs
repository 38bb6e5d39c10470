use crate::db::errors::RepositoryError;
use crate::db::schema::supplies::dsl::*;
use crate::db::DbConnection;
use crate::models::inventory::{NewSupply, Supply};
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

use log::error;

pub struct SupplyOperations {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl SupplyOperations {
    pub fn new(pool: Pool<ConnectionManager<SqliteConnection>>) -> Self {
        Self { pool }
    }

    pub fn create_supply(&self, supply: NewSupply) -> Result<Supply, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("create_supply: failed to acquire DB connection: {}", e);
            e
        })?;

        diesel::insert_into(supplies)
            .values(&supply)
            .get_result(conn.connection())
            .map_err(|e| {
                error!(
                    "create_supply: error inserting supply '{}': {}",
                    supply.item_name, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    pub fn get_all_supplies(&self) -> Result<Vec<Supply>, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!("get_all_supplies: failed to acquire DB connection: {}", e);
            e
        })?;

        supplies
            .order_by(id.asc())
            .load::<Supply>(conn.connection())
            .map_err(|e| {
                error!("get_all_supplies: error fetching supplies: {}", e);
                RepositoryError::DatabaseError(e)
            })
    }

    // Unknown ids update zero rows without error.
    pub fn update_quantity(
        &self,
        supply_id: i32,
        new_quantity: i32,
    ) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "update_quantity: failed to acquire DB connection for supply {}: {}",
                supply_id, e
            );
            e
        })?;

        diesel::update(supplies.filter(id.eq(supply_id)))
            .set(quantity.eq(new_quantity))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "update_quantity: error updating supply {}: {}",
                    supply_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }

    // Deleting an unknown id is a no-op, matching updates.
    pub fn delete_supply(&self, supply_id: i32) -> Result<usize, RepositoryError> {
        let mut conn = DbConnection::new(&self.pool).map_err(|e| {
            error!(
                "delete_supply: failed to acquire DB connection for supply {}: {}",
                supply_id, e
            );
            e
        })?;

        diesel::delete(supplies.filter(id.eq(supply_id)))
            .execute(conn.connection())
            .map_err(|e| {
                error!(
                    "delete_supply: error deleting supply {}: {}",
                    supply_id, e
                );
                RepositoryError::DatabaseError(e)
            })
    }
}

impl Clone for SupplyOperations {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
        }
    }
}
