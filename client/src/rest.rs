use {
    crate::{
        api::NftApi,
        error::{Result, SdkError},
        options::Options,
        types::{
            CollectionCreated, CollectionDescriptor, ExtrinsicError, SubmitResult, TokenDescriptor,
            TokenId,
        },
    },
    reqwest::{Client, Response},
    serde::{de::DeserializeOwned, Deserialize, Serialize},
    serde_json::Value,
    tracing::{debug, info},
};

const COLLECTIONS_V2: &str = "collections/v2";
const TOKENS_CREATE_MULTIPLE_V2: &str = "tokens/create-multiple/v2";
const EXTRINSIC_STATUS: &str = "extrinsic/status";

#[derive(Deserialize)]
struct UnsignedTx {
    #[serde(rename = "signerPayloadJSON")]
    signer_payload_json: Value,
    #[serde(rename = "signerPayloadHex")]
    signer_payload_hex: String,
}

#[derive(Serialize)]
struct SignedTx {
    #[serde(rename = "signerPayloadJSON")]
    signer_payload_json: Value,
    signature: String,
    #[serde(rename = "signatureType")]
    signature_type: &'static str,
}

#[derive(Deserialize)]
struct Submitted {
    hash: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateTokens<'a> {
    collection_id: u32,
    tokens: &'a [TokenDescriptor],
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ExtrinsicStatus<T> {
    #[serde(default)]
    is_completed: bool,
    #[serde(default)]
    is_error: bool,
    status: Option<String>,
    parsed: Option<T>,
    error: Option<ExtrinsicError>,
}

impl<T> ExtrinsicStatus<T> {
    fn into_result(self) -> SubmitResult<T> {
        if self.is_error {
            let error = self
                .error
                .unwrap_or_else(|| ExtrinsicError::new("Extrinsic failed"));
            return SubmitResult::failed(error);
        }

        match self.parsed {
            Some(parsed) => SubmitResult::parsed(parsed),
            None => SubmitResult {
                parsed: None,
                error: self.error,
            },
        }
    }
}

/// REST client: build, sign, submit and watch each mutation
pub struct Sdk {
    http: Client,
    options: Options,
}

impl Sdk {
    pub fn new(options: Options) -> Self {
        Self {
            http: Client::new(),
            options,
        }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.options.base_url(), endpoint)
    }

    async fn mutate<P, T>(&self, endpoint: &str, payload: &P) -> Result<SubmitResult<T>>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let account = self.options.signer(endpoint)?;
        let body = with_signer_address(payload, account.address())?;

        let unsigned: UnsignedTx = self.post(endpoint, "Build", &body).await?;
        let raw = decode_payload(&unsigned.signer_payload_hex)?;
        debug!(endpoint, payload_len = raw.len(), "signing extrinsic");

        let signed = SignedTx {
            signer_payload_json: unsigned.signer_payload_json,
            signature: format!("0x{}", hex::encode(account.sign(&raw))),
            signature_type: "sr25519",
        };
        let submitted: Submitted = self.post(endpoint, "SubmitWatch", &signed).await?;
        info!(endpoint, hash = %submitted.hash, "extrinsic submitted");

        self.wait_for_result(&submitted.hash).await
    }

    async fn post<B, T>(&self, endpoint: &str, stage: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!(%url, stage, "POST");

        let response = self
            .http
            .post(&url)
            .query(&[("use", stage)])
            .json(body)
            .send()
            .await?;

        decode(response).await
    }

    async fn wait_for_result<T: DeserializeOwned>(&self, hash: &str) -> Result<SubmitResult<T>> {
        let url = self.url(EXTRINSIC_STATUS);

        loop {
            tokio::time::sleep(self.options.wait_between_status_requests()).await;

            let response = self.http.get(&url).query(&[("hash", hash)]).send().await?;
            let status: ExtrinsicStatus<T> = decode(response).await?;
            debug!(hash, status = ?status.status, "extrinsic status");

            if status.is_completed {
                return Ok(status.into_result());
            }
        }
    }
}

impl NftApi for Sdk {
    fn options(&self) -> &Options {
        &self.options
    }

    async fn create_collection(
        &self,
        collection: &CollectionDescriptor,
    ) -> Result<SubmitResult<CollectionCreated>> {
        info!(name = %collection.name, "creating collection");
        self.mutate(COLLECTIONS_V2, collection).await
    }

    async fn create_tokens(
        &self,
        collection_id: u32,
        tokens: &[TokenDescriptor],
    ) -> Result<SubmitResult<Vec<TokenId>>> {
        info!(collection_id, count = tokens.len(), "minting tokens");
        let payload = CreateTokens {
            collection_id,
            tokens,
        };
        self.mutate(TOKENS_CREATE_MULTIPLE_V2, &payload).await
    }
}

fn with_signer_address<P: Serialize>(payload: &P, address: &str) -> Result<Value> {
    let mut body = serde_json::to_value(payload).map_err(SdkError::Encode)?;
    if let Value::Object(map) = &mut body {
        map.insert("address".to_string(), Value::String(address.to_string()));
    }

    Ok(body)
}

fn decode_payload(payload_hex: &str) -> Result<Vec<u8>> {
    let hex_part = payload_hex.strip_prefix("0x").unwrap_or(payload_hex);
    hex::decode(hex_part).map_err(|e| SdkError::Application {
        message: format!("Invalid signer payload: {}", e),
        details: None,
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let body = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(_) => Value::String(text),
        };
        return Err(SdkError::Transport {
            url,
            status: Some(status.as_u16()),
            body,
            message: status.to_string(),
        });
    }

    serde_json::from_str(&text).map_err(|source| SdkError::Decode { url, source })
}
