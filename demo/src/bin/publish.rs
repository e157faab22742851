//! Mints the demo token into an existing collection addressed by its EVM
//! mirror address.

use anyhow::Context;
use std::process::ExitCode;
use unique_client::{address::collection_address_to_id, Options, Sdk};
use unique_demo::{failure, output::ConsoleOutput, params::DemoParams, payloads, workflow::Minter};

const REST_URL: &str = "https://rest.unique.network/opal/v1";
const COLLECTION_ADDRESS: &str = "0x17c4e6453cC49aAAAeACa894E6d9683E0000007f";
const TOKEN_OWNER: &str = "0xcafe52dae8874E9E6d7511e05d213590E47e97B6";

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    unique_demo::init_tracing();

    let out = ConsoleOutput;
    ExitCode::from(failure::terminate(run(&out).await, &out))
}

async fn run(out: &ConsoleOutput) -> anyhow::Result<()> {
    let params = DemoParams::from_env(REST_URL).context("Failed to get publish params from env")?;
    let account = params.account()?;

    let signer = account.address().to_string();
    let sdk = Sdk::new(Options::new(&params.rest_url).with_account(account));

    let collection_id = collection_address_to_id(COLLECTION_ADDRESS)
        .context("Failed to resolve collection address")?;
    tracing::info!(collection_id, address = COLLECTION_ADDRESS, "minting into collection");

    let tokens = [payloads::demo_token(
        TOKEN_OWNER,
        payloads::PUBLISH_IMAGE_URL,
        &signer,
    )];
    Minter::new(&sdk, out)
        .mint_tokens(collection_id, &tokens)
        .await
        .context("Failed to mint tokens")?;

    Ok(())
}
