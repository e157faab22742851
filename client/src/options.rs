use {
    crate::{
        account::Account,
        error::{Result, SdkError},
    },
    std::time::Duration,
};

pub const DEFAULT_WAIT_BETWEEN_STATUS_REQUESTS: Duration = Duration::from_millis(3000);

/// Client configuration, fixed once the client is built
#[derive(Clone, Debug)]
pub struct Options {
    base_url: String,
    account: Option<Account>,
    wait_between_status_requests: Duration,
}

impl Options {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            account: None,
            wait_between_status_requests: DEFAULT_WAIT_BETWEEN_STATUS_REQUESTS,
        }
    }

    pub fn with_account(mut self, account: Account) -> Self {
        self.account = Some(account);
        self
    }

    pub fn with_wait_between_status_requests(mut self, wait: Duration) -> Self {
        self.wait_between_status_requests = wait;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn account(&self) -> Option<&Account> {
        self.account.as_ref()
    }

    pub fn wait_between_status_requests(&self) -> Duration {
        self.wait_between_status_requests
    }

    /// Account for a mutation of `action`, or [SdkError::MissingAccount]
    pub fn signer(&self, action: &str) -> Result<&Account> {
        self.account
            .as_ref()
            .ok_or_else(|| SdkError::MissingAccount(action.to_string()))
    }
}
