use anyhow::Context;
use std::{process::ExitCode, time::Duration};
use unique_client::{Options, Sdk};
use unique_demo::{
    failure,
    output::{ConsoleOutput, Output},
    params::DemoParams,
    payloads,
    workflow::Minter,
};

const REST_URL: &str = "https://rest.unique.network/unique/v1";
const WAIT_BETWEEN_STATUS_REQUESTS: Duration = Duration::from_millis(5000);

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    DemoParams::load_dotenv();
    unique_demo::init_tracing();

    let out = ConsoleOutput;
    ExitCode::from(failure::terminate(run(&out).await, &out))
}

async fn run(out: &ConsoleOutput) -> anyhow::Result<()> {
    let params = DemoParams::from_env(REST_URL).context("Failed to get demo params from env")?;
    let account = params.account()?;
    out.print(&format!("Account address: {}", account.address()));

    let signer = account.address().to_string();
    let sdk = Sdk::new(
        Options::new(&params.rest_url)
            .with_account(account)
            .with_wait_between_status_requests(WAIT_BETWEEN_STATUS_REQUESTS),
    );
    let tokens = [payloads::demo_token(
        payloads::DEMO_OWNER,
        payloads::IMAGE_URL,
        &signer,
    )];
    let (collection_id, token_ids) = Minter::new(&sdk, out)
        .create_and_mint(&payloads::dotphin_collection(), &tokens)
        .await
        .context("Failed to create collection and mint tokens")?;

    out.print(&format!("Collection created: {}", collection_id));
    out.print(&format!("Tokens minted: {:?}", token_ids));

    Ok(())
}
