use crate::{
    error::Result,
    options::Options,
    types::{CollectionCreated, CollectionDescriptor, SubmitResult, TokenDescriptor, TokenId},
};

/// Chain operations the demos depend on
#[allow(async_fn_in_trait)]
pub trait NftApi {
    fn options(&self) -> &Options;

    async fn create_collection(
        &self,
        collection: &CollectionDescriptor,
    ) -> Result<SubmitResult<CollectionCreated>>;

    /// Mints `tokens` in one batch; the result lists ids in submission order
    async fn create_tokens(
        &self,
        collection_id: u32,
        tokens: &[TokenDescriptor],
    ) -> Result<SubmitResult<Vec<TokenId>>>;
}
