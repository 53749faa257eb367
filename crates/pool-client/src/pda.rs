//! Protocol seed catalogue.
//!
//! Seed lists are a fixed wire contract with the deployed program: both
//! sides must derive byte-identical addresses. Every helper takes the
//! program id as a parameter so test deployments can substitute their own.

use sol_core::{find_program_address, CoreError, Pubkey};

/// The protocol's mainnet program id:
/// `6sccaGNYx7RSjVgFD13UKE7dyUiNavr2KXgeqaQvZUz7`.
pub const PROGRAM_ID: Pubkey = Pubkey::new([
    0x57, 0x41, 0xbe, 0x43, 0x42, 0xd0, 0x4e, 0xc9, 0xae, 0xb7, 0xba, 0xa5, 0x76, 0x37, 0x87,
    0xcc, 0x8c, 0x92, 0x5b, 0x3f, 0x6b, 0x7e, 0x47, 0xcd, 0xa3, 0x7b, 0x52, 0x7e, 0x6c, 0x72,
    0x93, 0xac,
]);

/// Signing authority over a pool's token holdings.
pub fn pool_authority(pool: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"pool_authority", pool.as_ref()], program_id)
}

/// Per-wallet user record.
pub fn user(wallet: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"user", wallet.as_ref()], program_id)
}

/// Collateral record for a `(source_stake, user)` pair.
pub fn collateral(
    source_stake: &Pubkey,
    user: &Pubkey,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(
        &[b"collateral", source_stake.as_ref(), user.as_ref()],
        program_id,
    )
}

/// Withdraw request record; `index` is the user's strictly-increasing
/// request counter, encoded as 8 little-endian bytes.
pub fn withdraw_info(
    user: &Pubkey,
    index: u64,
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(
        &[b"withdraw", user.as_ref(), &index.to_le_bytes()],
        program_id,
    )
}

/// Manager grant for a wallet.
pub fn manager(wallet: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"manager", wallet.as_ref()], program_id)
}

/// Liquidator grant for a wallet.
pub fn liquidator(wallet: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"liquidator", wallet.as_ref()], program_id)
}

/// Whitelist record for an LP token mint.
pub fn whitelist(token: &Pubkey, program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"whitelist", token.as_ref()], program_id)
}

/// The protocol-wide oracle singleton.
pub fn oracle(program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"oracle"], program_id)
}

/// The protocol-wide liquidation fee singleton.
pub fn liquidation_fee(program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"liquidation_fee"], program_id)
}

/// Mint authority over the pool token mint.
pub fn mint_authority(program_id: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
    find_program_address(&[b"mint_authority"], program_id)
}
