use crate::models::User;

/// Repository interface for users.
pub trait UserRepository: super::Repository {
    /// Look up a single user by id.
    fn get_user(
        &self,
        user_id: &str,
    ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send;

    /// Insert a user, returning the stored value. Saving an existing user
    /// is a no-op.
    fn save_user(&self, user: User) -> impl Future<Output = Result<User, Self::Error>> + Send;

    /// All users, in id order.
    fn all_users(&self) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send;
}
