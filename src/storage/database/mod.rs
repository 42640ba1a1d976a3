use crate::storage::database::migrations::run_migrations;
use crate::storage::error::StorageError::{ConnectionFailed, MissingDatabaseUrl};
use crate::storage::{KeyValueStorage, Result};
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::{log_error_and_return, log_message_and_return};
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};

mod dao;
mod migrations;
mod model;
mod schema;

const DATABASE_URL_ARG: &str = "--database-url";
const IN_MEMORY_DATABASE_URL: &str = ":memory:";

/// Stores member session entries in a SQLite database, so that they survive restarts.
pub struct DatabaseStorage {
    pool: Pool<ConnectionManager<SqliteConnection>>,
}

impl DatabaseStorage {
    /// Open the database whose path is passed with `--database-url=<path>`.
    pub fn from_env_args() -> Result<Self> {
        let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
        Self::new(&database_url)
    }

    /// Open (or create) the database at `database_url` and bring its schema up to date.
    ///
    /// An in-memory database (`:memory:`) only lives as long as its connection,
    /// so it is served by a single connection which is never recycled.
    pub fn new(database_url: &str) -> Result<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let builder = if is_in_memory(database_url) {
            Pool::builder()
                .max_size(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            Pool::builder()
        };
        let pool = builder
            .build(manager)
            .map_err(log_message_and_return(
                "Can't connect to database",
                ConnectionFailed,
            ))?;

        {
            let mut connection = pool.get()?;
            run_migrations(&mut *connection)?;
        }
        debug!("Member session database is ready [url: {database_url}]");

        Ok(Self { pool })
    }

    fn connection(&self) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
        self.pool
            .get()
            .map_err(log_error_and_return(ConnectionFailed))
    }
}

fn is_in_memory(database_url: &str) -> bool {
    database_url == IN_MEMORY_DATABASE_URL || database_url.contains("mode=memory")
}

impl KeyValueStorage for DatabaseStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut connection = self.connection()?;
        dao::get_entry(&mut connection, key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut connection = self.connection()?;
        dao::set_entry(&mut connection, key, value)
    }

    fn set_all(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut connection = self.connection()?;
        dao::set_entries(&mut connection, entries)
    }
}
