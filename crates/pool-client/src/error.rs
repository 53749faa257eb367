use sol_core::{CoreError, Pubkey};
use thiserror::Error;

/// Protocol-layer errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The 8-byte discriminator at the front of the buffer did not match
    /// the expected account kind. No field is decoded when this fires.
    #[error("wrong account kind: expected {expected}, found discriminator {}", hex::encode(found))]
    WrongAccountKind {
        expected: &'static str,
        found: [u8; 8],
    },

    /// The buffer ended before the layout did.
    #[error("truncated buffer: needed {needed} more bytes, {remaining} remaining")]
    TruncatedBuffer { needed: usize, remaining: usize },

    /// The transport reported no account at the given address.
    #[error("account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Transport-level failure, surfaced verbatim. Retry policy belongs to
    /// the transport, never to decode or derive paths.
    #[error("transport error: {0}")]
    Transport(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}
