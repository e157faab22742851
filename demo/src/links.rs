pub fn collection_link(base_url: &str, collection_id: u32) -> String {
    format!("{}/collections/v2?collectionId={}", base_url, collection_id)
}

pub fn token_link(base_url: &str, collection_id: u32, token_id: u32) -> String {
    format!(
        "{}/tokens/v2?collectionId={}&tokenId={}",
        base_url, collection_id, token_id
    )
}
