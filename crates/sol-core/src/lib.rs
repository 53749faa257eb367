//! Low-level Solana primitives for the staking-pool client.
//!
//! This crate handles addresses, program-derived address search, exact
//! lamport arithmetic, Ed25519 signing and the legacy transaction wire
//! format — all without pulling in `solana-sdk` (which drags in tokio and
//! 200+ transitive dependencies).
//!
//! The compact binary wire format is implemented by hand, with
//! `ed25519-dalek` for signing and `bs58` for Base58 encoding.

pub mod error;
pub mod lamports;
pub mod pda;
pub mod pubkey;
pub mod signer;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use error::CoreError;
pub use lamports::{lamports_to_sol, sol_str_to_lamports, sol_to_lamports, LAMPORTS_PER_SOL};
pub use pda::{find_program_address, is_on_curve, try_create_program_address};
pub use pubkey::{
    Pubkey, CLOCK_SYSVAR_ID, STAKE_HISTORY_SYSVAR_ID, STAKE_PROGRAM_ID, SYSTEM_PROGRAM_ID,
    TOKEN_PROGRAM_ID,
};
pub use signer::Keypair;
pub use transaction::{
    compile_transaction, decode_compact_u16, encode_compact_u16, serialize_message,
    sign_transaction, AccountMeta, CompiledInstruction, Instruction, Transaction,
};
