//! Instruction discriminators and argument payloads.
//!
//! Instruction data on the wire is the operation's fixed 8-byte
//! discriminator followed by the encoded arguments. Like the account
//! discriminators, the constants belong to the deployed program and are
//! never recomputed at runtime.
//!
//! Argument encoding rules: integers little-endian, booleans one byte,
//! `Option` a 1-byte presence flag plus payload, `Vec` a u32 LE count plus
//! elements.

use sol_core::Pubkey;

use crate::codec::Writer;

// ---------------------------------------------------------------------------
// Operation discriminators
// ---------------------------------------------------------------------------

pub const INIT_POOL: [u8; 8] = [116, 233, 199, 204, 115, 159, 171, 36];
pub const CLOSE_POOL: [u8; 8] = [140, 189, 209, 23, 239, 62, 239, 11];
pub const PAUSE_POOL: [u8; 8] = [160, 15, 12, 189, 160, 0, 243, 245];
pub const RESUME_POOL: [u8; 8] = [52, 182, 28, 44, 146, 165, 190, 119];
pub const UPDATE_POOL: [u8; 8] = [239, 214, 170, 78, 36, 35, 30, 34];
pub const ADD_MANAGER: [u8; 8] = [125, 38, 192, 212, 101, 91, 179, 16];
pub const REMOVE_MANAGER: [u8; 8] = [150, 55, 157, 77, 128, 148, 7, 15];
pub const ADD_LIQUIDATOR: [u8; 8] = [60, 33, 46, 47, 162, 22, 248, 97];
pub const REMOVE_LIQUIDATOR: [u8; 8] = [103, 72, 97, 148, 79, 148, 220, 93];
pub const ADD_TO_WHITELIST: [u8; 8] = [188, 249, 141, 125, 143, 232, 62, 116];
pub const REMOVE_FROM_WHITELIST: [u8; 8] = [7, 144, 216, 239, 243, 236, 193, 235];
pub const BLOCK_USER: [u8; 8] = [10, 164, 178, 6, 231, 175, 185, 191];
pub const UNBLOCK_USER: [u8; 8] = [216, 208, 128, 98, 74, 210, 18, 114];
pub const DEPOSIT_LP: [u8; 8] = [83, 107, 16, 26, 26, 20, 130, 56];
pub const DEPOSIT_STAKE: [u8; 8] = [160, 167, 9, 220, 74, 243, 228, 43];
pub const MINT_POOL_TOKENS: [u8; 8] = [105, 36, 86, 59, 230, 159, 93, 12];
pub const BURN_POOL_TOKENS: [u8; 8] = [9, 228, 220, 251, 222, 150, 179, 169];
pub const WITHDRAW_LP_TOKENS: [u8; 8] = [58, 6, 25, 91, 179, 55, 213, 78];
pub const WITHDRAW_STAKE: [u8; 8] = [153, 8, 22, 138, 105, 176, 87, 66];
pub const WITHDRAW_SOL: [u8; 8] = [145, 131, 74, 136, 65, 137, 42, 38];
pub const INIT_ORACLE: [u8; 8] = [78, 100, 33, 183, 96, 207, 60, 91];
pub const CLOSE_ORACLE: [u8; 8] = [74, 239, 49, 223, 206, 52, 189, 123];
pub const UPDATE_ORACLE_INFO: [u8; 8] = [164, 24, 241, 250, 136, 128, 30, 227];
pub const SET_LIQUIDATION_FEE: [u8; 8] = [23, 215, 203, 90, 133, 247, 235, 183];
pub const LIQUIDATE_COLLATERAL: [u8; 8] = [160, 199, 78, 141, 140, 146, 166, 212];

// ---------------------------------------------------------------------------
// Argument payloads
// ---------------------------------------------------------------------------

/// All-optional pool settings update; `None` fields are left unchanged by
/// the program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdatePoolData {
    pub fee_receiver: Option<Pubkey>,
    pub withdraw_fee: Option<u16>,
    pub deposit_fee: Option<u16>,
    pub mint_fee: Option<u16>,
    pub storage_fee: Option<u16>,
    pub min_deposit: Option<u64>,
}

impl UpdatePoolData {
    pub(crate) fn write(&self, w: &mut Writer) {
        w.write_option(&self.fee_receiver, |w, v| w.write_pubkey(v));
        w.write_option(&self.withdraw_fee, |w, v| w.write_u16(*v));
        w.write_option(&self.deposit_fee, |w, v| w.write_u16(*v));
        w.write_option(&self.mint_fee, |w, v| w.write_u16(*v));
        w.write_option(&self.storage_fee, |w, v| w.write_u16(*v));
        w.write_option(&self.min_deposit, |w, v| w.write_u64(*v));
    }
}

/// Discriminator-only payload, for operations with no arguments.
pub(crate) fn data(discriminator: [u8; 8]) -> Vec<u8> {
    discriminator.to_vec()
}

/// Discriminator plus a single u64 amount, the most common shape.
pub(crate) fn data_with_amount(discriminator: [u8; 8], amount: u64) -> Vec<u8> {
    let mut w = Writer::new();
    w.write_bytes(&discriminator);
    w.write_u64(amount);
    w.into_bytes()
}

pub(crate) fn update_pool_data(args: &UpdatePoolData) -> Vec<u8> {
    let mut w = Writer::new();
    w.write_bytes(&UPDATE_POOL);
    args.write(&mut w);
    w.into_bytes()
}

pub(crate) fn set_liquidation_fee_data(fee: Option<u16>, fee_receiver: Option<Pubkey>) -> Vec<u8> {
    let mut w = Writer::new();
    w.write_bytes(&SET_LIQUIDATION_FEE);
    w.write_option(&fee, |w, v| w.write_u16(*v));
    w.write_option(&fee_receiver, |w, v| w.write_pubkey(v));
    w.into_bytes()
}

pub(crate) fn update_oracle_info_data(
    addresses: &[Pubkey],
    values: &[u64],
    clear: bool,
) -> Vec<u8> {
    let mut w = Writer::new();
    w.write_bytes(&UPDATE_ORACLE_INFO);
    w.write_vec(addresses, |w, a| w.write_pubkey(a));
    w.write_vec(values, |w, v| w.write_u64(*v));
    w.write_bool(clear);
    w.into_bytes()
}

pub(crate) fn withdraw_stake_data(amount: u64, with_burn: bool, with_merge: bool) -> Vec<u8> {
    let mut w = Writer::new();
    w.write_bytes(&WITHDRAW_STAKE);
    w.write_u64(amount);
    w.write_bool(with_burn);
    w.write_bool(with_merge);
    w.into_bytes()
}

pub(crate) fn withdraw_lp_tokens_data(amount: u64, with_burn: bool) -> Vec<u8> {
    let mut w = Writer::new();
    w.write_bytes(&WITHDRAW_LP_TOKENS);
    w.write_u64(amount);
    w.write_bool(with_burn);
    w.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn anchor_instruction_discriminator(name: &str) -> [u8; 8] {
        let hash = Sha256::digest(format!("global:{name}").as_bytes());
        hash[..8].try_into().unwrap()
    }

    #[test]
    fn discriminators_match_deployed_handler_names() {
        // Hashed over the deployed program's handler names, which differ
        // from this crate's builder names for three operations
        // (add_to_token_whitelist, mint_omnisol, burn_omnisol).
        for (constant, name) in [
            (INIT_POOL, "init_pool"),
            (CLOSE_POOL, "close_pool"),
            (PAUSE_POOL, "pause_pool"),
            (RESUME_POOL, "resume_pool"),
            (UPDATE_POOL, "update_pool"),
            (ADD_MANAGER, "add_manager"),
            (REMOVE_MANAGER, "remove_manager"),
            (ADD_LIQUIDATOR, "add_liquidator"),
            (REMOVE_LIQUIDATOR, "remove_liquidator"),
            (ADD_TO_WHITELIST, "add_to_token_whitelist"),
            (REMOVE_FROM_WHITELIST, "remove_from_whitelist"),
            (BLOCK_USER, "block_user"),
            (UNBLOCK_USER, "unblock_user"),
            (DEPOSIT_LP, "deposit_lp"),
            (DEPOSIT_STAKE, "deposit_stake"),
            (MINT_POOL_TOKENS, "mint_omnisol"),
            (BURN_POOL_TOKENS, "burn_omnisol"),
            (WITHDRAW_LP_TOKENS, "withdraw_lp_tokens"),
            (WITHDRAW_STAKE, "withdraw_stake"),
            (WITHDRAW_SOL, "withdraw_sol"),
            (INIT_ORACLE, "init_oracle"),
            (CLOSE_ORACLE, "close_oracle"),
            (UPDATE_ORACLE_INFO, "update_oracle_info"),
            (SET_LIQUIDATION_FEE, "set_liquidation_fee"),
            (LIQUIDATE_COLLATERAL, "liquidate_collateral"),
        ] {
            assert_eq!(
                constant,
                anchor_instruction_discriminator(name),
                "discriminator mismatch for {name}"
            );
        }
    }

    #[test]
    fn amount_payload_layout() {
        let bytes = data_with_amount(DEPOSIT_STAKE, 1_500_000_000);
        assert_eq!(bytes.len(), 16);
        assert_eq!(&bytes[..8], &DEPOSIT_STAKE);
        assert_eq!(&bytes[8..], &1_500_000_000u64.to_le_bytes());
    }

    #[test]
    fn update_pool_all_none_is_six_flag_bytes() {
        let bytes = update_pool_data(&UpdatePoolData::default());
        assert_eq!(bytes.len(), 8 + 6);
        assert!(bytes[8..].iter().all(|b| *b == 0));
    }

    #[test]
    fn update_pool_some_fields() {
        let bytes = update_pool_data(&UpdatePoolData {
            withdraw_fee: Some(50),
            min_deposit: Some(1_000_000),
            ..Default::default()
        });
        // fee_receiver absent, withdraw_fee present.
        assert_eq!(bytes[8], 0);
        assert_eq!(bytes[9], 1);
        assert_eq!(&bytes[10..12], &50u16.to_le_bytes());
        // deposit_fee, mint_fee, storage_fee absent; min_deposit present.
        assert_eq!(&bytes[12..15], &[0, 0, 0]);
        assert_eq!(bytes[15], 1);
        assert_eq!(&bytes[16..24], &1_000_000u64.to_le_bytes());
        assert_eq!(bytes.len(), 24);
    }

    #[test]
    fn set_liquidation_fee_payload() {
        let receiver = Pubkey::new([9u8; 32]);
        let bytes = set_liquidation_fee_data(Some(30), Some(receiver));
        assert_eq!(&bytes[..8], &SET_LIQUIDATION_FEE);
        assert_eq!(bytes[8], 1);
        assert_eq!(&bytes[9..11], &30u16.to_le_bytes());
        assert_eq!(bytes[11], 1);
        assert_eq!(&bytes[12..44], receiver.as_bytes());
    }

    #[test]
    fn update_oracle_info_payload() {
        let addrs = [Pubkey::new([1u8; 32]), Pubkey::new([2u8; 32])];
        let values = [10u64, 20];
        let bytes = update_oracle_info_data(&addrs, &values, true);
        assert_eq!(&bytes[..8], &UPDATE_ORACLE_INFO);
        assert_eq!(&bytes[8..12], &2u32.to_le_bytes());
        assert_eq!(&bytes[12..44], addrs[0].as_bytes());
        assert_eq!(&bytes[44..76], addrs[1].as_bytes());
        assert_eq!(&bytes[76..80], &2u32.to_le_bytes());
        assert_eq!(&bytes[80..88], &10u64.to_le_bytes());
        assert_eq!(&bytes[88..96], &20u64.to_le_bytes());
        assert_eq!(bytes[96], 1);
        assert_eq!(bytes.len(), 97);
    }

    #[test]
    fn withdraw_stake_payload() {
        let bytes = withdraw_stake_data(500, true, false);
        assert_eq!(bytes.len(), 18);
        assert_eq!(&bytes[8..16], &500u64.to_le_bytes());
        assert_eq!(bytes[16], 1);
        assert_eq!(bytes[17], 0);
    }
}
