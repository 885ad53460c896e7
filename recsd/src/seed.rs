//! Startup seeding for demonstration purposes.

use rand::Rng as _;
use recs_core::models::{Interest, Product, RecomputeMode, User};
use recs_core::ports::UserRepository as _;
use recs_core::service;
use recs_sqlite::Db;

/// Populate the database with demo users, a small product catalog, and one
/// interest per (user, product) pair with a random integral score in 0..=10.
///
/// Installing the catalog goes through the regular replace operation, so
/// running this against a populated database wipes the previous catalog and
/// its interests.
pub async fn run(db: &Db, mode: RecomputeMode) -> anyhow::Result<()> {
    let users = ["alice", "bob", "carol"];
    let products = [
        ("espresso", "Espresso", "coffee"),
        ("latte", "Latte", "coffee"),
        ("matcha", "Matcha", "tea"),
    ]
    .map(|(id, name, category)| Product {
        product_id: id.to_owned(),
        name: name.to_owned(),
        category: category.to_owned(),
    });

    for user in users {
        db.save_user(User {
            user_id: user.to_owned(),
        })
        .await?;
    }

    service::replace_catalog(db, products.to_vec()).await?;

    let mut rng = rand::rng();
    for user in users {
        for product in &products {
            let score = rng.random_range(0..=10) as f64;
            service::record_interest(
                db,
                mode,
                Interest {
                    product_id: product.product_id.clone(),
                    user_id: user.to_owned(),
                    score,
                },
            )
            .await?;
        }
    }

    tracing::info!(
        "seeded {} users, {} products, {} interests",
        users.len(),
        products.len(),
        users.len() * products.len()
    );

    Ok(())
}
