//! Thin client for the Unique Network REST service: sr25519 account, typed
//! collection/token payloads and the build, sign, submit, watch cycle.

pub mod account;
pub mod address;
mod api;
pub mod error;
mod options;
mod rest;
pub mod types;

pub use account::Account;
pub use api::NftApi;
pub use error::{Result, SdkError};
pub use options::{Options, DEFAULT_WAIT_BETWEEN_STATUS_REQUESTS};
pub use rest::Sdk;
pub use types::*;
