//! Shared fixtures for integration tests.
#![allow(dead_code)]

use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tempfile::TempDir;

use bookshop_catalog::db::{DbPool, establish_connection_pool};
use bookshop_catalog::schema::books;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

/// A migrated SQLite database living in a temporary directory.
///
/// The directory, and the database file with it, is removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("create temp dir");
        let path = dir.path().join(filename);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 temp path"))
            .expect("create pool");
        let mut conn = pool.get().expect("get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Inserts books directly; the service itself is read-only.
    pub fn seed(&self, rows: &[(&str, f64)]) {
        let mut conn = self.pool.get().expect("get connection");
        for (name, price) in rows {
            diesel::insert_into(books::table)
                .values((books::name.eq(*name), books::price.eq(*price)))
                .execute(&mut conn)
                .expect("insert book");
        }
    }
}

/// The three-row table used throughout the catalog scenarios.
pub fn seed_greek(db: &TestDb) {
    db.seed(&[("Alpha", 10.0), ("beta", 20.0), ("Gamma", 30.0)]);
}
