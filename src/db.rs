use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use tracing::info;

use crate::model::NormalizedRecord;

pub fn connect(path: &str) -> Result<Connection> {
    let conn = Connection::open(path).with_context(|| format!("failed to open {path}"))?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS products (
            id            INTEGER PRIMARY KEY,
            title         TEXT NOT NULL UNIQUE,
            category      TEXT NOT NULL,
            brand         TEXT,
            price         REAL NOT NULL CHECK(price > 0),
            image_url     TEXT,
            product_link  TEXT,
            amazon_link   TEXT,
            item_features TEXT NOT NULL DEFAULT '[]',
            specs         TEXT NOT NULL DEFAULT '{}',
            processed_at  TEXT NOT NULL,
            created_at    TEXT NOT NULL DEFAULT (datetime('now')),
            updated_at    TEXT NOT NULL DEFAULT (datetime('now'))
        );
        CREATE INDEX IF NOT EXISTS idx_products_category ON products(category);
        CREATE INDEX IF NOT EXISTS idx_products_brand ON products(brand);
        CREATE INDEX IF NOT EXISTS idx_products_price ON products(price);
        ",
    )?;
    Ok(())
}

/// Upsert the whole batch inside one transaction; any failure rolls the
/// batch back so a mid-batch error never leaves partial writes. The title
/// is the natural key: a re-run updates derived columns in place, keeps
/// `created_at`, and refreshes `updated_at`.
pub fn upsert_products(conn: &Connection, records: &[NormalizedRecord]) -> Result<usize> {
    let tx = conn.unchecked_transaction()?;
    {
        let mut stmt = tx.prepare(
            "INSERT INTO products (
                title, category, brand, price, image_url, product_link,
                amazon_link, item_features, specs, processed_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(title) DO UPDATE SET
                category      = excluded.category,
                brand         = excluded.brand,
                price         = excluded.price,
                image_url     = excluded.image_url,
                product_link  = excluded.product_link,
                amazon_link   = excluded.amazon_link,
                item_features = excluded.item_features,
                specs         = excluded.specs,
                processed_at  = excluded.processed_at,
                updated_at    = datetime('now')",
        )?;
        for record in records {
            let specs = serde_json::to_string(&record.specs)?;
            let features = serde_json::to_string(&record.item_features)?;
            stmt.execute(params![
                record.title,
                record.category.label(),
                record.brand,
                record.price,
                record.image_url,
                record.product_link,
                record.amazon_link,
                features,
                specs,
                record.processed_at.to_rfc3339(),
            ])?;
        }
    }
    tx.commit()?;
    info!(count = records.len(), "batch upserted");
    Ok(records.len())
}

pub struct DbStats {
    pub total: i64,
    pub categories: Vec<(String, i64)>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub avg_price: Option<f64>,
}

pub fn get_stats(conn: &Connection) -> Result<DbStats> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;

    let mut stmt = conn.prepare(
        "SELECT category, COUNT(*) FROM products GROUP BY category ORDER BY COUNT(*) DESC",
    )?;
    let categories = stmt
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    let (min_price, max_price, avg_price) = conn.query_row(
        "SELECT MIN(price), MAX(price), AVG(price) FROM products",
        [],
        |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
    )?;

    Ok(DbStats {
        total,
        categories,
        min_price,
        max_price,
        avg_price,
    })
}

pub struct OverviewRow {
    pub title: String,
    pub category: String,
    pub brand: Option<String>,
    pub price: f64,
}

pub fn fetch_overview(
    conn: &Connection,
    category: Option<&str>,
    brand: Option<&str>,
    limit: usize,
) -> Result<Vec<OverviewRow>> {
    let mut sql = String::from("SELECT title, category, brand, price FROM products WHERE 1=1");
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();
    if let Some(c) = category {
        sql.push_str(" AND category = ?");
        params_vec.push(Box::new(c.to_string()));
    }
    if let Some(b) = brand {
        sql.push_str(" AND brand = ?");
        params_vec.push(Box::new(b.to_string()));
    }
    sql.push_str(" ORDER BY price DESC LIMIT ?");
    params_vec.push(Box::new(limit as i64));

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt
        .query_map(
            rusqlite::params_from_iter(params_vec.iter().map(|p| p.as_ref())),
            |row| {
                Ok(OverviewRow {
                    title: row.get(0)?,
                    category: row.get(1)?,
                    brand: row.get(2)?,
                    price: row.get(3)?,
                })
            },
        )?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RawRecord;
    use crate::pipeline::normalize::Normalizer;
    use crate::settings::Settings;

    fn setup() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        conn
    }

    fn cpu_record(price: &str) -> NormalizedRecord {
        let raw: RawRecord = serde_json::from_value(serde_json::json!({
            "title": "AMD Ryzen 5 5600X 6-Core 3.7 GHz Socket AM4 65W Desktop Processor",
            "price": price,
        }))
        .unwrap();
        Normalizer::new(&Settings::for_tests())
            .normalize(&raw)
            .unwrap()
    }

    #[test]
    fn upsert_is_idempotent() {
        let conn = setup();
        upsert_products(&conn, &[cpu_record("$159.99")]).unwrap();
        upsert_products(&conn, &[cpu_record("$149.99")]).unwrap();

        let stats = get_stats(&conn).unwrap();
        assert_eq!(stats.total, 1);
        // Derived fields follow the most recent normalization.
        assert_eq!(stats.max_price, Some(149.99));
    }

    #[test]
    fn upsert_keeps_created_at() {
        let conn = setup();
        upsert_products(&conn, &[cpu_record("$159.99")]).unwrap();
        let created: String = conn
            .query_row("SELECT created_at FROM products", [], |r| r.get(0))
            .unwrap();
        upsert_products(&conn, &[cpu_record("$149.99")]).unwrap();
        let created_after: String = conn
            .query_row("SELECT created_at FROM products", [], |r| r.get(0))
            .unwrap();
        assert_eq!(created, created_after);
    }

    #[test]
    fn specs_round_trip_as_json() {
        let conn = setup();
        upsert_products(&conn, &[cpu_record("$159.99")]).unwrap();
        let specs: String = conn
            .query_row("SELECT specs FROM products", [], |r| r.get(0))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&specs).unwrap();
        assert_eq!(value["model"], "5600X");
        assert_eq!(value["cores"], 6);
    }

    #[test]
    fn overview_filters_by_category() {
        let conn = setup();
        upsert_products(&conn, &[cpu_record("$159.99")]).unwrap();
        let rows = fetch_overview(&conn, Some("CPU"), None, 10).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].brand.as_deref(), Some("AMD"));
        let rows = fetch_overview(&conn, Some("SSD"), None, 10).unwrap();
        assert!(rows.is_empty());
    }
}
