use crate::models::Category;

/// Repository interface for categories and their cached scores.
pub trait CategoryRepository: super::Repository {
    /// Look up a single category by name.
    fn get_category(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send;

    /// Fetch the categories with the given names. Missing names are absent
    /// from the result.
    fn get_categories(
        &self,
        names: &[String],
    ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send;

    /// Insert or update a category, returning the stored value.
    fn save_category(
        &self,
        category: Category,
    ) -> impl Future<Output = Result<Category, Self::Error>> + Send;

    /// Read the scored categories in score order, skipping categories with
    /// no cached score.
    ///
    /// `reverse = false` yields descending order, `reverse = true`
    /// ascending.
    fn cached_category_scores(
        &self,
        limit: usize,
        reverse: bool,
    ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send;
}
