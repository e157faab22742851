use crate::{
    links::{collection_link, token_link},
    output::Output,
};
use tracing::info;
use unique_client::{CollectionDescriptor, NftApi, Result, TokenDescriptor};

pub struct Minter<'a, A, O> {
    api: &'a A,
    out: &'a O,
}

impl<'a, A: NftApi, O: Output> Minter<'a, A, O> {
    pub fn new(api: &'a A, out: &'a O) -> Self {
        Minter { api, out }
    }

    fn base_url(&self) -> &str {
        self.api.options().base_url()
    }

    /// Create the collection and report its link
    pub async fn create_collection(&self, collection: &CollectionDescriptor) -> Result<u32> {
        let collection_id = self
            .api
            .create_collection(collection)
            .await?
            .into_parsed()?
            .collection_id;

        self.out.print(&format!(
            "Collection created, id {}. {}",
            collection_id,
            collection_link(self.base_url(), collection_id)
        ));

        Ok(collection_id)
    }

    /// Mint `tokens` in one batch and report a link per minted token
    pub async fn mint_tokens(
        &self,
        collection_id: u32,
        tokens: &[TokenDescriptor],
    ) -> Result<Vec<u32>> {
        let token_ids = self
            .api
            .create_tokens(collection_id, tokens)
            .await?
            .into_parsed()?
            .into_iter()
            .map(|token| token.token_id)
            .collect::<Vec<_>>();

        let ids = token_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        self.out.print(&format!(
            "Tokens minted in collection {}, ids {}",
            collection_id, ids
        ));
        for token_id in &token_ids {
            self.out
                .print(&token_link(self.base_url(), collection_id, *token_id));
        }

        Ok(token_ids)
    }

    /// Create the collection, then mint `tokens` into it. Minting is skipped if
    /// the collection was not created.
    pub async fn create_and_mint(
        &self,
        collection: &CollectionDescriptor,
        tokens: &[TokenDescriptor],
    ) -> Result<(u32, Vec<u32>)> {
        let collection_id = self.create_collection(collection).await?;
        info!(collection_id, "collection ready");

        let token_ids = self.mint_tokens(collection_id, tokens).await?;

        Ok((collection_id, token_ids))
    }
}


#[cfg(test)]
mod test {
    use super::{testing::MockApi, *};
    use crate::{output::testing::MockOutput, payloads};
    use serde_json::json;
    use unique_client::{CollectionCreated, ExtrinsicError, SdkError, SubmitResult, TokenId};

    const BASE: &str = "https://rest.unique.network/unique/v1";

    fn tokens() -> Vec<TokenDescriptor> {
        vec![payloads::demo_token(
            payloads::DEMO_OWNER,
            payloads::IMAGE_URL,
            "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY",
        )]
    }

    fn minted(collection_id: u32, ids: &[u32]) -> Vec<TokenId> {
        ids.iter()
            .map(|&token_id| TokenId {
                collection_id,
                token_id,
            })
            .collect()
    }

    #[tokio::test]
    async fn collection_created() {
        let api = MockApi::new(BASE).on_create_collection(Ok(SubmitResult::parsed(
            CollectionCreated { collection_id: 7 },
        )));
        let out = MockOutput::new();

        let id = Minter::new(&api, &out)
            .create_collection(&payloads::dotphin_collection())
            .await
            .unwrap();

        assert_eq!(id, 7);
        assert_eq!(
            out.messages(),
            vec![format!(
                "Collection created, id 7. {}/collections/v2?collectionId=7",
                BASE
            )]
        );
        assert!(out.errors().is_empty());
    }

    #[tokio::test]
    async fn failed_collection_skips_minting() {
        let api = MockApi::new(BASE)
            .on_create_collection(Ok(SubmitResult::failed(ExtrinsicError {
                name: None,
                message: "E".to_string(),
                details: Some(json!({ "reason": "no balance" })),
            })))
            .on_create_tokens(Ok(SubmitResult::parsed(minted(7, &[1]))));
        let out = MockOutput::new();

        let err = Minter::new(&api, &out)
            .create_and_mint(&payloads::dotphin_collection(), &tokens())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "E");
        assert_eq!(err.details(), Some(&json!({ "reason": "no balance" })));
        assert!(api.mint_calls().is_empty());
        assert!(out.messages().is_empty());
    }

    #[tokio::test]
    async fn token_ids_in_result_order() {
        let api = MockApi::new(BASE)
            .on_create_collection(Ok(SubmitResult::parsed(CollectionCreated {
                collection_id: 3019,
            })))
            .on_create_tokens(Ok(SubmitResult::parsed(minted(3019, &[5, 2, 9]))));
        let out = MockOutput::new();

        let (collection_id, token_ids) = Minter::new(&api, &out)
            .create_and_mint(&payloads::dotphin_collection(), &tokens())
            .await
            .unwrap();

        assert_eq!(collection_id, 3019);
        assert_eq!(token_ids, vec![5, 2, 9]);
        assert_eq!(api.mint_calls(), vec![(3019, 1)]);
        assert_eq!(
            out.messages()[1..],
            [
                "Tokens minted in collection 3019, ids 5, 2, 9".to_string(),
                format!("{}/tokens/v2?collectionId=3019&tokenId=5", BASE),
                format!("{}/tokens/v2?collectionId=3019&tokenId=2", BASE),
                format!("{}/tokens/v2?collectionId=3019&tokenId=9", BASE),
            ]
        );
    }

    #[tokio::test]
    async fn mint_transport_error_propagates() {
        let api = MockApi::new(BASE).on_create_tokens(Err(SdkError::Transport {
            url: "U".to_string(),
            status: Some(400),
            body: json!({ "msg": "bad" }),
            message: "400 Bad Request".to_string(),
        }));
        let out = MockOutput::new();

        let err = Minter::new(&api, &out)
            .mint_tokens(127, &tokens())
            .await
            .unwrap_err();

        assert!(err.is_transport());
        assert_eq!(api.mint_calls(), vec![(127, 1)]);
        assert!(out.messages().is_empty());
    }
}
