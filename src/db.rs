//! SQLite pool setup for the catalog database.
//!
//! SQLite's own `LOWER()`, `LIKE` and `NOCASE` only fold ASCII letters, so
//! every pooled connection also gets a Unicode-aware lower-casing function
//! and collation that generated statements use for name matching and ordering.

use std::cmp::Ordering;
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::result::QueryResult;
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::error;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Collation ordering text by its Unicode lower-case form.
pub const UNICODE_NOCASE: &str = "unicode_nocase";

define_sql_function! {
    /// Lower-cases text with full Unicode case mapping.
    fn unicode_lower(value: Text) -> Text;
}

/// Case-insensitive comparison with a byte-order tiebreak, so distinct
/// strings never compare equal.
fn compare_nocase(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[derive(Debug)]
/// Per-connection setup run whenever the pool opens a connection.
pub struct ConnectionOptions {
    /// Switch the journal to write-ahead logging.
    pub enable_wal: bool,
    /// How long a statement waits on a locked database.
    pub busy_timeout: Option<Duration>,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            enable_wal: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }
    }
}

impl ConnectionOptions {
    fn apply(&self, conn: &mut SqliteConnection) -> QueryResult<()> {
        if self.enable_wal {
            conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
        }
        if let Some(timeout) = self.busy_timeout {
            conn.batch_execute(&format!("PRAGMA busy_timeout = {};", timeout.as_millis()))?;
        }
        unicode_lower_utils::register_impl(conn, |value: String| value.to_lowercase())?;
        conn.register_collation(UNICODE_NOCASE, compare_nocase)?;
        Ok(())
    }
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        self.apply(conn).map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(ConnectionOptions::default()))
        .build(manager)
}

/// Retrieve a connection from the pool, logging pool exhaustion or setup failures.
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    pool.get().inspect_err(|e| error!("Failed to get connection from pool: {e}"))
}
