use recs_core::models::{Interest, Product};
use recs_core::service;
use recs_sqlite::{Db, config::SqliteConfig};

pub async fn open_db() -> anyhow::Result<Db> {
    Ok(Db::open(&SqliteConfig::default()).await?)
}

pub fn product(id: &str, name: &str, category: &str) -> Product {
    Product {
        product_id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
    }
}

pub fn interest(product_id: &str, user_id: &str, score: f64) -> Interest {
    Interest {
        product_id: product_id.to_owned(),
        user_id: user_id.to_owned(),
        score,
    }
}

/// Install a small two-category catalog used across the tests.
pub async fn seed_catalog(db: &Db) -> anyhow::Result<()> {
    service::replace_catalog(
        db,
        vec![
            product("espresso", "Espresso", "coffee"),
            product("latte", "Latte", "coffee"),
            product("matcha", "Matcha", "tea"),
        ],
    )
    .await?;
    Ok(())
}
