//! Shared test fixtures: in-memory database with the schema applied and a
//! couple of members and dishes seeded (members and dishes are administered
//! by out-of-scope surfaces, so tests insert them directly).
#![allow(dead_code)] // each test binary uses a different subset

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

pub const MEMBER_ALICE: &str = "120000000001";
pub const MEMBER_BEN: &str = "120000000002";

pub const DISH_ADOBO: i64 = 1; // $10.00
pub const DISH_LUMPIA: i64 = 2; // $5.00
pub const DISH_HALO_HALO: i64 = 3; // $4.50

pub async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .unwrap()
        .pragma("foreign_keys", "ON");
    // One connection: every pool handle must see the same in-memory database
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    kusina::db::MIGRATOR.run(&pool).await.unwrap();

    for (id, name, contact) in [
        (MEMBER_ALICE, "Alicia Reyes", "09170000001"),
        (MEMBER_BEN, "Benigno Cruz", "09170000002"),
    ] {
        sqlx::query("INSERT INTO member (id, name, contact_number) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(contact)
            .execute(&pool)
            .await
            .unwrap();
    }

    for (id, name, price) in [
        (DISH_ADOBO, "Adobo", 10.00),
        (DISH_LUMPIA, "Lumpia", 5.00),
        (DISH_HALO_HALO, "Halo-halo", 4.50),
    ] {
        sqlx::query("INSERT INTO dish (id, name, price) VALUES (?, ?, ?)")
            .bind(id)
            .bind(name)
            .bind(price)
            .execute(&pool)
            .await
            .unwrap();
    }

    pool
}

/// Count rows of a table (fixed set of table names, test-only).
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
