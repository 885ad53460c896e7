//! Row types for mapping query results back into domain models.

use recs_core::models::{Category, Interest, Product, ProductScore, User};

#[derive(sqlx::FromRow)]
pub(crate) struct ProductRow {
    pub id: String,
    pub name: String,
    pub category: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            product_id: row.id,
            name: row.name,
            category: row.category,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct CategoryRow {
    pub name: String,
    pub score: Option<f64>,
}

impl From<CategoryRow> for Category {
    fn from(row: CategoryRow) -> Self {
        Category {
            category: row.name,
            score: row.score,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct UserRow {
    pub id: String,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User { user_id: row.id }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct InterestRow {
    pub product_id: String,
    pub user_id: String,
    pub score: f64,
}

impl From<InterestRow> for Interest {
    fn from(row: InterestRow) -> Self {
        Interest {
            product_id: row.product_id,
            user_id: row.user_id,
            score: row.score,
        }
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct ScoreRow {
    pub product_id: String,
    pub score: f64,
}

impl From<ScoreRow> for ProductScore {
    fn from(row: ScoreRow) -> Self {
        ProductScore {
            product_id: row.product_id,
            score: row.score,
        }
    }
}
