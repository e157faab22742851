use {
    crate::error::{Result, SdkError},
    sp_core::{blake2_256, crypto::Ss58Codec, sr25519, Pair},
    std::fmt,
};

/// Signing payloads longer than this are blake2-256 hashed first
const MAX_UNHASHED_PAYLOAD: usize = 256;

/// sr25519 account derived from a secret URI
#[derive(Clone)]
pub struct Account {
    pair: sr25519::Pair,
    address: String,
}

impl Account {
    /// Accepts a mnemonic phrase with optional `//hard`, `/soft` junctions and `///password`
    pub fn from_uri(uri: &str) -> Result<Self> {
        let pair = sr25519::Pair::from_string(uri, None)
            .map_err(|e| SdkError::Signing(format!("{:?}", e)))?;
        let address = pair.public().to_ss58check();

        Ok(Self { pair, address })
    }

    /// SS58 address with the generic substrate prefix
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn sign(&self, payload: &[u8]) -> Vec<u8> {
        let signature = if payload.len() > MAX_UNHASHED_PAYLOAD {
            self.pair.sign(&blake2_256(payload))
        } else {
            self.pair.sign(payload)
        };

        let bytes: &[u8] = signature.as_ref();
        bytes.to_vec()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const ALICE: &str = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

    fn verify(signature: &[u8], message: &[u8], account: &Account) -> bool {
        let mut raw = [0_u8; 64];
        raw.copy_from_slice(signature);
        sr25519::Pair::verify(
            &sr25519::Signature::from_raw(raw),
            message,
            &account.pair.public(),
        )
    }

    #[test]
    fn dev_account_address() {
        let account = Account::from_uri("//Alice").unwrap();
        assert_eq!(account.address(), ALICE);
    }

    #[test]
    fn same_uri_same_account() {
        let a = Account::from_uri("//Alice//stash").unwrap();
        let b = Account::from_uri("//Alice//stash").unwrap();
        assert_eq!(a.address(), b.address());
        assert_ne!(a.address(), ALICE);
    }

    #[test]
    fn invalid_phrase() {
        let err = Account::from_uri("certainly not a valid mnemonic phrase").unwrap_err();
        assert!(matches!(err, SdkError::Signing(_)));
    }

    #[test]
    fn short_payload_signed_as_is() {
        let account = Account::from_uri("//Bob").unwrap();
        let payload = [7_u8; 64];
        let signature = account.sign(&payload);

        assert_eq!(signature.len(), 64);
        assert!(verify(&signature, &payload, &account));
    }

    #[test]
    fn long_payload_signed_hashed() {
        let account = Account::from_uri("//Bob").unwrap();
        let payload = [7_u8; 300];
        let signature = account.sign(&payload);

        assert!(verify(&signature, &blake2_256(&payload), &account));
        assert!(!verify(&signature, &payload, &account));
    }

    #[test]
    fn debug_hides_secret() {
        let account = Account::from_uri("//Alice").unwrap();
        let debug = format!("{:?}", account);
        assert!(debug.contains(ALICE));
        assert!(!debug.contains("pair"));
    }
}
