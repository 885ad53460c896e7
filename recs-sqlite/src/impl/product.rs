use super::{score_order, sql_limit};
use crate::Db;
use crate::types::{ProductRow, ScoreRow};
use recs_core::{
    models::{Product, ProductScore},
    ports::ProductRepository,
};

impl ProductRepository for Db {
    async fn get_product(&self, product_id: &str) -> Result<Option<Product>, Self::Error> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            select id, name, category
            from product
            where id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_products(&self, ids: &[String]) -> Result<Vec<Product>, Self::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut query_builder =
            sqlx::QueryBuilder::new("select id, name, category from product where id in (");
        let mut separated = query_builder.separated(", ");
        for id in ids {
            separated.push_bind(id);
        }
        separated.push_unseparated(")");

        let rows = query_builder
            .build_query_as::<ProductRow>()
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn products_in_category(&self, category: &str) -> Result<Vec<Product>, Self::Error> {
        let rows = sqlx::query_as::<_, ProductRow>(
            r#"
            select id, name, category
            from product
            where category = $1
            order by id
            "#,
        )
        .bind(category)
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn replace_catalog(&self, products: Vec<Product>) -> Result<Vec<Product>, Self::Error> {
        // Distinct categories referenced by the new catalog, first-seen order.
        let mut categories: Vec<&str> = Vec::new();
        for product in &products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }

        // One transaction for the whole cascade. The writer pool is capped
        // at one connection, so this also serializes against every other
        // mutation; WAL readers never observe a half-replaced catalog.
        let mut tx = self.writer.begin().await?;

        sqlx::query("delete from category").execute(&mut *tx).await?;
        for name in categories {
            sqlx::query("insert into category (name, score) values ($1, null)")
                .bind(name)
                .execute(&mut *tx)
                .await?;
        }

        sqlx::query("delete from interest").execute(&mut *tx).await?;
        sqlx::query("delete from product_score")
            .execute(&mut *tx)
            .await?;

        sqlx::query("delete from product").execute(&mut *tx).await?;
        for product in &products {
            sqlx::query("insert into product (id, name, category) values ($1, $2, $3)")
                .bind(&product.product_id)
                .bind(&product.name)
                .bind(&product.category)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        Ok(products)
    }

    async fn cached_product_scores(
        &self,
        limit: usize,
        reverse: bool,
    ) -> Result<Vec<ProductScore>, Self::Error> {
        let sql = format!(
            "select product_id, score from product_score order by score {} limit $1",
            score_order(reverse)
        );

        let rows = sqlx::query_as::<_, ScoreRow>(&sql)
            .bind(sql_limit(limit))
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
