//! Conversions between collection/token ids and their EVM mirror addresses

use {
    crate::{
        error::{Result, SdkError},
        types::TokenId,
    },
    sp_core::{crypto::Ss58Codec, sr25519},
};

const COLLECTION_ADDRESS_PREFIX: &str = "17c4e6453cc49aaaaeaca894e6d9683e";
const TOKEN_ADDRESS_PREFIX: &str = "f8238ccfff8ed887463fd5e0";
const ETHEREUM_ADDRESS_LEN: usize = 20;

pub fn collection_id_to_address(collection_id: u32) -> String {
    format!("0x{}{:08x}", COLLECTION_ADDRESS_PREFIX, collection_id)
}

pub fn collection_address_to_id(address: &str) -> Result<u32> {
    let bytes = decode_ethereum(address)?;
    check_prefix(address, &bytes, COLLECTION_ADDRESS_PREFIX)?;

    Ok(be_u32(&bytes[16..20]))
}

pub fn token_id_to_address(collection_id: u32, token_id: u32) -> String {
    format!(
        "0x{}{:08x}{:08x}",
        TOKEN_ADDRESS_PREFIX, collection_id, token_id
    )
}

pub fn token_address_to_ids(address: &str) -> Result<TokenId> {
    let bytes = decode_ethereum(address)?;
    check_prefix(address, &bytes, TOKEN_ADDRESS_PREFIX)?;

    Ok(TokenId {
        collection_id: be_u32(&bytes[12..16]),
        token_id: be_u32(&bytes[16..20]),
    })
}

pub fn is_ethereum_address(address: &str) -> bool {
    decode_ethereum(address).is_ok()
}

pub fn is_substrate_address(address: &str) -> bool {
    sr25519::Public::from_ss58check(address).is_ok()
}

fn decode_ethereum(address: &str) -> Result<Vec<u8>> {
    let invalid = |reason: &str| SdkError::InvalidAddress(address.to_string(), reason.to_string());

    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| invalid("missing 0x prefix"))?;
    let bytes = hex::decode(hex_part).map_err(|e| invalid(&e.to_string()))?;

    if bytes.len() != ETHEREUM_ADDRESS_LEN {
        return Err(invalid("expected 20 bytes"));
    }

    Ok(bytes)
}

fn check_prefix(address: &str, bytes: &[u8], prefix: &str) -> Result<()> {
    if hex::encode(&bytes[..prefix.len() / 2]) != prefix {
        return Err(SdkError::InvalidAddress(
            address.to_string(),
            format!("expected prefix 0x{}", prefix),
        ));
    }

    Ok(())
}

fn be_u32(bytes: &[u8]) -> u32 {
    let mut buf = [0_u8; 4];
    buf.copy_from_slice(bytes);
    u32::from_be_bytes(buf)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn collection_address_from_publish_script() {
        let id = collection_address_to_id("0x17c4e6453cC49aAAAeACa894E6d9683E0000007f").unwrap();
        assert_eq!(id, 127);
        assert_eq!(
            collection_id_to_address(127),
            "0x17c4e6453cc49aaaaeaca894e6d9683e0000007f"
        );
    }

    #[test]
    fn token_address() {
        let address = token_id_to_address(3019, 5);
        assert_eq!(address, "0xf8238ccfff8ed887463fd5e000000bcb00000005");
        assert_eq!(
            token_address_to_ids(&address.to_uppercase().replacen("0X", "0x", 1)).unwrap(),
            TokenId {
                collection_id: 3019,
                token_id: 5
            }
        );
    }

    #[test]
    fn rejects_foreign_addresses() {
        let token = token_id_to_address(1, 1);
        assert!(matches!(
            collection_address_to_id(&token),
            Err(SdkError::InvalidAddress(..))
        ));
        assert!(collection_address_to_id("17c4e6453cc49aaaaeaca894e6d9683e0000007f").is_err());
        assert!(collection_address_to_id("0x17c4e6453cc49aaaaeaca894e6d9683e00007f").is_err());
        assert!(collection_address_to_id("0x17c4e6453cc49aaaaeaca894e6d9683e0000007g").is_err());
    }

    #[test]
    fn address_kinds() {
        let ethereum = "0xcafe52dae8874E9E6d7511e05d213590E47e97B6";
        let substrate = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";

        assert!(is_ethereum_address(ethereum));
        assert!(!is_substrate_address(ethereum));
        assert!(is_substrate_address(substrate));
        assert!(!is_ethereum_address(substrate));
    }
}
