use super::{score_order, sql_limit};
use crate::Db;
use crate::types::{CategoryRow, InterestRow, ScoreRow};
use recs_core::{
    models::{Category, Interest, ProductScore},
    ports::{InterestFailure, InterestRepository},
};

impl InterestRepository for Db {
    async fn get_interest(
        &self,
        product_id: &str,
        user_id: &str,
    ) -> Result<Option<Interest>, Self::Error> {
        let row = sqlx::query_as::<_, InterestRow>(
            r#"
            select product_id, user_id, score
            from interest
            where product_id = $1 and user_id = $2
            "#,
        )
        .bind(product_id)
        .bind(user_id)
        .fetch_optional(&self.reader)
        .await?;

        Ok(row.map(Into::into))
    }

    async fn insert_interest(
        &self,
        interest: &Interest,
        refresh_scores: bool,
    ) -> Result<Result<(), InterestFailure>, Self::Error> {
        // Every check and write shares one transaction on the single writer
        // connection, so no catalog replace or competing insert can land
        // between the checks and the insert. Early returns drop the
        // transaction, rolling back.
        let mut tx = self.writer.begin().await?;

        let duplicates = sqlx::query_scalar::<_, i64>(
            "select count(*) from interest where product_id = $1 and user_id = $2",
        )
        .bind(&interest.product_id)
        .bind(&interest.user_id)
        .fetch_one(&mut *tx)
        .await?;
        if duplicates > 0 {
            return Ok(Err(InterestFailure::Duplicate));
        }

        let category =
            sqlx::query_scalar::<_, String>("select category from product where id = $1")
                .bind(&interest.product_id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(category) = category else {
            return Ok(Err(InterestFailure::MissingProduct));
        };

        let known = sqlx::query_scalar::<_, i64>("select count(*) from category where name = $1")
            .bind(&category)
            .fetch_one(&mut *tx)
            .await?;
        if known == 0 {
            return Ok(Err(InterestFailure::MissingCategory { category }));
        }

        sqlx::query("insert into interest (product_id, user_id, score) values ($1, $2, $3)")
            .bind(&interest.product_id)
            .bind(&interest.user_id)
            .bind(interest.score)
            .execute(&mut *tx)
            .await?;

        if refresh_scores {
            // The means include the row just inserted.
            sqlx::query(
                r#"
                insert into product_score (product_id, score)
                select product_id, avg(score) from interest where product_id = $1
                on conflict (product_id) do update set score = excluded.score
                "#,
            )
            .bind(&interest.product_id)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                update category
                set score = (
                    select avg(i.score)
                    from interest i
                    inner join product p on i.product_id = p.id
                    where p.category = $1
                )
                where name = $1
                "#,
            )
            .bind(&category)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(Ok(()))
    }

    async fn interests_for_product(&self, product_id: &str) -> Result<Vec<Interest>, Self::Error> {
        let rows = sqlx::query_as::<_, InterestRow>(
            r#"
            select product_id, user_id, score
            from interest
            where product_id = $1
            order by user_id
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.reader)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn product_score_means(
        &self,
        limit: usize,
        reverse: bool,
        save: bool,
    ) -> Result<Vec<ProductScore>, Self::Error> {
        // The inner join drops interests whose product has vanished; the
        // service layer treats those as integrity violations elsewhere.
        let sql = format!(
            r#"
            select p.id as product_id, avg(i.score) as score
            from interest i
            inner join product p on i.product_id = p.id
            group by p.id
            order by score {} limit $1
            "#,
            score_order(reverse)
        );

        let rows = if save {
            // Compute and persist under one writer transaction so the cache
            // can never hold scores for a catalog replaced mid-flight.
            let mut tx = self.writer.begin().await?;
            let rows = sqlx::query_as::<_, ScoreRow>(&sql)
                .bind(sql_limit(limit))
                .fetch_all(&mut *tx)
                .await?;
            for row in &rows {
                sqlx::query(
                    r#"
                    insert into product_score (product_id, score) values ($1, $2)
                    on conflict (product_id) do update set score = excluded.score
                    "#,
                )
                .bind(&row.product_id)
                .bind(row.score)
                .execute(&mut *tx)
                .await?;
            }
            tx.commit().await?;
            rows
        } else {
            sqlx::query_as::<_, ScoreRow>(&sql)
                .bind(sql_limit(limit))
                .fetch_all(&self.reader)
                .await?
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn category_score_means(
        &self,
        limit: usize,
        reverse: bool,
        save: bool,
    ) -> Result<Vec<Category>, Self::Error> {
        let sql = format!(
            r#"
            select c.name as name, avg(i.score) as score
            from interest i
            inner join product p on i.product_id = p.id
            inner join category c on p.category = c.name
            group by c.name
            order by score {} limit $1
            "#,
            score_order(reverse)
        );

        let rows = if save {
            let mut tx = self.writer.begin().await?;
            let rows = sqlx::query_as::<_, CategoryRow>(&sql)
                .bind(sql_limit(limit))
                .fetch_all(&mut *tx)
                .await?;
            for row in &rows {
                // The join guarantees the category row exists in this
                // transaction, so a plain update suffices.
                sqlx::query("update category set score = $2 where name = $1")
                    .bind(&row.name)
                    .bind(row.score)
                    .execute(&mut *tx)
                    .await?;
            }
            tx.commit().await?;
            rows
        } else {
            sqlx::query_as::<_, CategoryRow>(&sql)
                .bind(sql_limit(limit))
                .fetch_all(&self.reader)
                .await?
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
