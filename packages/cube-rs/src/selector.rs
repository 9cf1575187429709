use sha3::{Digest, Keccak256};

pub const SENDER_IS_NOT_THE_MINTER: &str = "CubeToken__SenderIsNotTheMinter()";
pub const AMOUNT_MUST_BE_MORE_THAN_ZERO: &str = "CubeToken__AmountMustBeMoreThanZero()";
pub const BURN_AMOUNT_EXCEEDS_BALANCE: &str = "CubeToken__BurnAmountExceedsBalance()";

pub const TYPED_ERROR_PREFIX: &str = "typed error: ";

pub fn keccak256(data: impl AsRef<[u8]>) -> [u8; 32] {
    Keccak256::digest(data.as_ref()).into()
}

/// The first four bytes of the keccak256 hash of a function or error signature.
pub fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

pub fn selector_hex(signature: &str) -> String {
    format!("0x{}", hex::encode(selector(signature)))
}

/// Revert reason reported for a custom error with no arguments,
/// e.g. `typed error: 0x2e3aa449`.
pub fn typed_error(signature: &str) -> String {
    format!("{TYPED_ERROR_PREFIX}{}", selector_hex(signature))
}
