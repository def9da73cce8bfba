use alloy_primitives::Address;

use crate::error::EthError;

/// Derives an EIP-55 checksummed Ethereum address from an uncompressed secp256k1
/// public key (65 bytes, starting with 0x04).
///
/// The address is the last 20 bytes of the Keccak-256 hash of the 64-byte
/// key body.
pub fn pubkey_to_eth_address(uncompressed_pubkey: &[u8; 65]) -> Result<String, EthError> {
    if uncompressed_pubkey[0] != 0x04 {
        return Err(EthError::InvalidPublicKey(
            "uncompressed key must start with 0x04".into(),
        ));
    }

    let address = Address::from_raw_public_key(&uncompressed_pubkey[1..]);
    Ok(address.to_checksum(None))
}

/// Validates an Ethereum address string.
///
/// Malformed input (missing `0x`, wrong length, non-hex) is an error. A
/// well-formed address in a single case is accepted as-is; mixed case must
/// match its EIP-55 checksum, otherwise `Ok(false)`.
pub fn validate_address(address: &str) -> Result<bool, EthError> {
    let hex_part = strip_hex_prefix(address)?;
    let parsed = parse_hex_body(hex_part)?;

    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());
    if is_all_lower || is_all_upper {
        return Ok(true);
    }

    Ok(parsed.to_checksum(None)[2..] == *hex_part)
}

/// Applies EIP-55 mixed-case checksum encoding to a 0x-prefixed address in
/// any case.
pub fn checksum_address(address: &str) -> Result<String, EthError> {
    let hex_part = strip_hex_prefix(address)?;
    Ok(parse_hex_body(hex_part)?.to_checksum(None))
}

fn strip_hex_prefix(address: &str) -> Result<&str, EthError> {
    address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))
}

fn parse_hex_body(hex_part: &str) -> Result<Address, EthError> {
    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }
    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    format!("0x{}", hex_part.to_ascii_lowercase())
        .parse::<Address>()
        .map_err(|e| EthError::InvalidAddress(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::elliptic_curve::sec1::ToEncodedPoint;
    use k256::SecretKey;

    #[test]
    fn eip55_checksum_known_addresses() {
        let cases = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in &cases {
            let lower = format!("0x{}", expected[2..].to_lowercase());
            assert_eq!(&checksum_address(&lower).unwrap(), expected);
        }
    }

    #[test]
    fn checksum_accepts_uppercase_input() {
        let input = "0X5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED";
        assert_eq!(
            checksum_address(input).unwrap(),
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
        );
    }

    #[test]
    fn validate_checksummed_and_single_case() {
        assert!(validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").unwrap());
        assert!(validate_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap());
        assert!(validate_address("0x5AAEB6053F3E94C9B9A09F33669435E7EF1BEAED").unwrap());
    }

    #[test]
    fn validate_bad_checksum_returns_false() {
        let addr = "0x5AAEB6053F3E94C9b9A09f33669435E7Ef1BeAed";
        assert!(!validate_address(addr).unwrap());
    }

    #[test]
    fn validate_malformed_errors() {
        assert!(validate_address("0x5aAeb6053F").is_err());
        assert!(validate_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
        assert!(validate_address("0xGGGGb6053F3E94C9b9A09f33669435E7Ef1BeAed").is_err());
    }

    #[test]
    fn pubkey_to_address_known_vector() {
        // Private key 0x00..01.
        let mut privkey = [0u8; 32];
        privkey[31] = 1;

        let secret = SecretKey::from_bytes((&privkey).into()).expect("valid private key");
        let uncompressed = secret.public_key().to_encoded_point(false);
        let key_65: [u8; 65] = uncompressed.as_bytes().try_into().unwrap();

        let address = pubkey_to_eth_address(&key_65).unwrap();
        assert_eq!(address, "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
    }

    #[test]
    fn invalid_uncompressed_prefix_errors() {
        let mut key = [0u8; 65];
        key[0] = 0x03;
        assert!(pubkey_to_eth_address(&key).is_err());
    }
}
