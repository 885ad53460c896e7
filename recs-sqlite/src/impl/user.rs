use crate::Db;
use crate::types::UserRow;
use recs_core::{models::User, ports::UserRepository};

impl UserRepository for Db {
    async fn get_user(&self, user_id: &str) -> Result<Option<User>, Self::Error> {
        let row = sqlx::query_as::<_, UserRow>("select id from user where id = $1")
            .bind(user_id)
            .fetch_optional(&self.reader)
            .await?;

        Ok(row.map(Into::into))
    }

    async fn save_user(&self, user: User) -> Result<User, Self::Error> {
        sqlx::query("insert into user (id) values ($1) on conflict (id) do nothing")
            .bind(&user.user_id)
            .execute(&self.writer)
            .await?;

        Ok(user)
    }

    async fn all_users(&self) -> Result<Vec<User>, Self::Error> {
        let rows = sqlx::query_as::<_, UserRow>("select id from user order by id")
            .fetch_all(&self.reader)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
