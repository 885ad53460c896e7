use super::{score_order, sql_limit};
use crate::Db;
use crate::types::CategoryRow;
use recs_core::{models::Category, ports::CategoryRepository};

impl CategoryRepository for Db {
    async fn get_category(&self, name: &str) -> Result<Option<Category>, Self::Error> {
        let row = sqlx::query_as::<_, CategoryRow>(
            r#"
            select name, score
            from category
            where name = $1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn get_categories(&self, names: &[String]) -> Result<Vec<Category>, Self::Error> {
        if names.is_empty() {
            return Ok(Vec::new());
        }

        let mut query_builder =
            sqlx::QueryBuilder::new("select name, score from category where name in (");
        let mut separated = query_builder.separated(", ");
        for name in names {
            separated.push_bind(name);
        }
        separated.push_unseparated(")");

        let rows = query_builder
            .build_query_as::<CategoryRow>()
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn save_category(&self, category: Category) -> Result<Category, Self::Error> {
        sqlx::query(
            r#"
            insert into category (name, score)
            values ($1, $2)
            on conflict (name) do update set score = excluded.score
            "#,
        )
        .bind(&category.category)
        .bind(category.score)
        .execute(&self.writer)
        .await?;

        Ok(category)
    }

    async fn cached_category_scores(
        &self,
        limit: usize,
        reverse: bool,
    ) -> Result<Vec<Category>, Self::Error> {
        let sql = format!(
            "select name, score from category where score is not null order by score {} limit $1",
            score_order(reverse)
        );

        let rows = sqlx::query_as::<_, CategoryRow>(&sql)
            .bind(sql_limit(limit))
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
