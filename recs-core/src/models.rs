mod category;
mod config;
mod interest;
mod product;
mod query;
mod score;
mod user;

pub use category::Category;
pub use config::RecomputeMode;
pub use interest::Interest;
pub use product::{Product, ProductWithScore};
pub use query::RankQuery;
pub use score::ProductScore;
pub use user::User;
