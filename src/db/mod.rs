use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::{r2d2, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

mod billing;
mod errors;
mod food;
mod rooms;
pub mod schema;
mod supplies;

pub use billing::BillingOperations;
pub use errors::RepositoryError;
pub use food::FoodOperations;
pub use rooms::RoomOperations;
pub use supplies::SupplyOperations;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

// Room numbers seeded into an empty database on first run.
const SEED_ROOM_NUMBERS: std::ops::RangeInclusive<u32> = 101..=110;

pub fn establish_connection_pool(database_url: &str) -> Pool<ConnectionManager<SqliteConnection>> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    Pool::builder().max_size(20).build(manager).unwrap()
}

pub fn run_db_migrations(
    pool: Pool<ConnectionManager<SqliteConnection>>,
) -> Result<(), RepositoryError> {
    let mut conn = DbConnection::new(&pool)?;
    conn.connection()
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| RepositoryError::MigrationError(e.to_string()))?;
    Ok(())
}

/// Inserts rooms 101-110 if the rooms table is empty. Idempotent across
/// restarts; rooms are never deleted afterwards.
pub fn seed_rooms(
    pool: &Pool<ConnectionManager<SqliteConnection>>,
) -> Result<usize, RepositoryError> {
    use crate::db::schema::rooms::dsl::*;

    let mut conn = DbConnection::new(pool)?;

    let existing: i64 = rooms
        .count()
        .get_result(conn.connection())
        .map_err(RepositoryError::DatabaseError)?;
    if existing > 0 {
        return Ok(0);
    }

    let seed_rows: Vec<_> = SEED_ROOM_NUMBERS
        .map(|number| room_number.eq(number.to_string()))
        .collect();

    diesel::insert_into(rooms)
        .values(&seed_rows)
        .execute(conn.connection())
        .map_err(RepositoryError::DatabaseError)
}

// Connection Guard - Manages pool
pub struct DbConnection<'a> {
    conn: r2d2::PooledConnection<ConnectionManager<SqliteConnection>>,
    _lifetime: std::marker::PhantomData<&'a ()>,
}

impl DbConnection<'_> {
    pub fn new(
        pool: &Pool<ConnectionManager<SqliteConnection>>,
    ) -> Result<Self, RepositoryError> {
        Ok(Self {
            conn: pool.get().map_err(RepositoryError::ConnectionPoolError)?,
            _lifetime: std::marker::PhantomData,
        })
    }

    pub fn connection(&mut self) -> &mut SqliteConnection {
        &mut self.conn
    }
}
