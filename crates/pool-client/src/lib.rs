//! Client-side model of the omnipool staking-pool protocol.
//!
//! Reconstructs protocol state from raw account bytes, derives the
//! program's deterministic addresses, and builds its instructions. No
//! protocol logic executes here; the validator network does that. The only
//! I/O boundary is the [`Transport`] trait.

pub mod client;
pub mod codec;
pub mod error;
pub mod instruction;
pub mod ops;
pub mod pda;
pub mod state;

pub use client::{PoolClient, Transport};
pub use codec::{AccountRecord, Reader, Writer};
pub use error::ClientError;
pub use instruction::UpdatePoolData;
pub use pda::PROGRAM_ID;
pub use state::{
    Collateral, LiquidationFee, Liquidator, Manager, Oracle, Pool, QueueMember, User, Whitelist,
    WithdrawInfo,
};
