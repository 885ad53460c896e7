use crate::models::{Product, ProductScore};

/// Repository interface for the product catalog and the product score
/// cache.
pub trait ProductRepository: super::Repository {
    /// Look up a single product by id.
    fn get_product(
        &self,
        product_id: &str,
    ) -> impl Future<Output = Result<Option<Product>, Self::Error>> + Send;

    /// Fetch the products with the given ids.
    ///
    /// Missing ids are simply absent from the result; callers decide
    /// whether that is an error.
    fn get_products(
        &self,
        ids: &[String],
    ) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// All products belonging to the given category.
    fn products_in_category(
        &self,
        category: &str,
    ) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Replace the entire catalog as one atomic unit.
    ///
    /// Deletes all categories, then inserts the distinct categories
    /// referenced by the new products (with no score), deletes all
    /// interests and cached product scores, deletes all products, and
    /// finally inserts the new product list. Concurrent readers must never
    /// observe a half-replaced catalog.
    ///
    /// # Returns
    ///
    /// The stored product list.
    fn replace_catalog(
        &self,
        products: Vec<Product>,
    ) -> impl Future<Output = Result<Vec<Product>, Self::Error>> + Send;

    /// Read the product score cache in score order.
    ///
    /// `reverse = false` yields descending order (highest first),
    /// `reverse = true` ascending; see [`RankQuery`] for why the flag is
    /// inverted.
    ///
    /// [`RankQuery`]: crate::models::RankQuery
    fn cached_product_scores(
        &self,
        limit: usize,
        reverse: bool,
    ) -> impl Future<Output = Result<Vec<ProductScore>, Self::Error>> + Send;
}
