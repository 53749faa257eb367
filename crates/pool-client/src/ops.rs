//! One builder per protocol operation.
//!
//! Account order per operation is a fixed wire contract with the deployed
//! program. Callers pass only operation-specific accounts; program and
//! sysvar trailers (system program, token program, stake program, clock,
//! stake history) are filled in here with their documented defaults.

use sol_core::{
    AccountMeta, Instruction, Pubkey, CLOCK_SYSVAR_ID, STAKE_HISTORY_SYSVAR_ID, STAKE_PROGRAM_ID,
    SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

use crate::instruction::{
    self, UpdatePoolData, ADD_LIQUIDATOR, ADD_MANAGER, ADD_TO_WHITELIST, BLOCK_USER,
    BURN_POOL_TOKENS, CLOSE_ORACLE, CLOSE_POOL, DEPOSIT_LP, DEPOSIT_STAKE, INIT_ORACLE, INIT_POOL,
    LIQUIDATE_COLLATERAL, MINT_POOL_TOKENS, PAUSE_POOL, REMOVE_FROM_WHITELIST, REMOVE_LIQUIDATOR,
    REMOVE_MANAGER, RESUME_POOL, UNBLOCK_USER, WITHDRAW_SOL,
};

// ---------------------------------------------------------------------------
// Pool management
// ---------------------------------------------------------------------------

/// The pool account itself signs on creation; the rest are PDAs the caller
/// derives up front.
pub struct InitPoolAccounts {
    pub pool: Pubkey,
    pub pool_mint: Pubkey,
    pub pool_authority: Pubkey,
    pub mint_authority: Pubkey,
    pub stake_source: Pubkey,
    pub manager: Pubkey,
    pub authority: Pubkey,
    pub fee_receiver: Pubkey,
}

pub fn init_pool(accounts: &InitPoolAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::signer(accounts.pool),
            AccountMeta::writable(accounts.pool_mint),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::readonly(accounts.mint_authority),
            AccountMeta::readonly(accounts.stake_source),
            AccountMeta::writable(accounts.manager),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(accounts.fee_receiver),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(INIT_POOL),
    }
}

pub fn close_pool(pool: &Pubkey, authority: &Pubkey, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(*pool),
            AccountMeta::signer(*authority),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(CLOSE_POOL),
    }
}

pub fn pause_pool(
    pool: &Pubkey,
    manager: &Pubkey,
    authority: &Pubkey,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(*pool),
            AccountMeta::writable(*manager),
            AccountMeta::signer(*authority),
        ],
        data: instruction::data(PAUSE_POOL),
    }
}

pub fn resume_pool(pool: &Pubkey, authority: &Pubkey, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(*pool),
            AccountMeta::signer(*authority),
        ],
        data: instruction::data(RESUME_POOL),
    }
}

pub fn update_pool(
    pool: &Pubkey,
    manager: &Pubkey,
    authority: &Pubkey,
    args: &UpdatePoolData,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(*pool),
            AccountMeta::writable(*manager),
            AccountMeta::signer(*authority),
        ],
        data: instruction::update_pool_data(args),
    }
}

// ---------------------------------------------------------------------------
// Role grants
// ---------------------------------------------------------------------------

pub struct AddManagerAccounts {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub manager_wallet: Pubkey,
    pub manager: Pubkey,
}

pub fn add_manager(accounts: &AddManagerAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly(accounts.pool),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(accounts.manager_wallet),
            AccountMeta::writable(accounts.manager),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(ADD_MANAGER),
    }
}

pub struct RemoveManagerAccounts {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub manager: Pubkey,
    pub manager_wallet: Pubkey,
}

pub fn remove_manager(accounts: &RemoveManagerAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly(accounts.pool),
            AccountMeta::signer(accounts.authority),
            AccountMeta::writable(accounts.manager),
            AccountMeta::readonly(accounts.manager_wallet),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(REMOVE_MANAGER),
    }
}

pub struct AddLiquidatorAccounts {
    pub authority: Pubkey,
    pub liquidator_wallet: Pubkey,
    pub liquidator: Pubkey,
    pub manager: Pubkey,
}

pub fn add_liquidator(accounts: &AddLiquidatorAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(accounts.liquidator_wallet),
            AccountMeta::writable(accounts.liquidator),
            AccountMeta::writable(accounts.manager),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(ADD_LIQUIDATOR),
    }
}

pub fn remove_liquidator(accounts: &AddLiquidatorAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(accounts.liquidator_wallet),
            AccountMeta::writable(accounts.liquidator),
            AccountMeta::writable(accounts.manager),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(REMOVE_LIQUIDATOR),
    }
}

// ---------------------------------------------------------------------------
// Whitelist and user moderation
// ---------------------------------------------------------------------------

pub struct WhitelistAccounts {
    pub pool: Pubkey,
    pub authority: Pubkey,
    pub token: Pubkey,
    pub whitelist: Pubkey,
}

pub fn add_to_whitelist(accounts: &WhitelistAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly(accounts.pool),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(accounts.token),
            AccountMeta::writable(accounts.whitelist),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(ADD_TO_WHITELIST),
    }
}

pub fn remove_from_whitelist(accounts: &WhitelistAccounts, program_id: &Pubkey) -> Instruction {
    // Same accounts as add, but whitelist precedes the token on the wire.
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly(accounts.pool),
            AccountMeta::signer(accounts.authority),
            AccountMeta::writable(accounts.whitelist),
            AccountMeta::readonly(accounts.token),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(REMOVE_FROM_WHITELIST),
    }
}

pub struct UserModerationAccounts {
    pub authority: Pubkey,
    pub manager: Pubkey,
    pub user: Pubkey,
    pub user_wallet: Pubkey,
}

pub fn block_user(accounts: &UserModerationAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::signer(accounts.authority),
            AccountMeta::writable(accounts.manager),
            AccountMeta::writable(accounts.user),
            AccountMeta::readonly(accounts.user_wallet),
        ],
        data: instruction::data(BLOCK_USER),
    }
}

pub fn unblock_user(accounts: &UserModerationAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.manager),
            AccountMeta::signer(accounts.authority),
            AccountMeta::writable(accounts.user),
            AccountMeta::readonly(accounts.user_wallet),
        ],
        data: instruction::data(UNBLOCK_USER),
    }
}

pub struct SetLiquidationFeeAccounts {
    pub liquidation_fee: Pubkey,
    pub manager: Pubkey,
    pub authority: Pubkey,
}

pub fn set_liquidation_fee(
    accounts: &SetLiquidationFeeAccounts,
    fee: Option<u16>,
    fee_receiver: Option<Pubkey>,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.liquidation_fee),
            AccountMeta::writable(accounts.manager),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::set_liquidation_fee_data(fee, fee_receiver),
    }
}

// ---------------------------------------------------------------------------
// Deposits and minting
// ---------------------------------------------------------------------------

pub struct DepositStakeAccounts {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub user: Pubkey,
    pub collateral: Pubkey,
    pub source_stake: Pubkey,
    /// Whichever of `source_stake` / `split_stake` ends up delegated to the
    /// pool; the program enforces it is one of the two.
    pub delegated_stake: Pubkey,
    /// Fresh keypair account; signs so the program can split into it.
    pub split_stake: Pubkey,
    pub authority: Pubkey,
    pub fee_payer: Pubkey,
    pub fee_receiver: Pubkey,
}

pub fn deposit_stake(
    accounts: &DepositStakeAccounts,
    amount: u64,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::writable(accounts.user),
            AccountMeta::writable(accounts.collateral),
            AccountMeta::writable(accounts.source_stake),
            AccountMeta::writable(accounts.delegated_stake),
            AccountMeta::signer(accounts.split_stake),
            AccountMeta::signer(accounts.authority),
            AccountMeta::signer(accounts.fee_payer),
            AccountMeta::writable(accounts.fee_receiver),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(STAKE_PROGRAM_ID),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data_with_amount(DEPOSIT_STAKE, amount),
    }
}

pub struct DepositLpAccounts {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub user: Pubkey,
    pub collateral: Pubkey,
    /// The caller's LP token account.
    pub source: Pubkey,
    /// The pool authority's LP token account.
    pub destination: Pubkey,
    pub whitelist: Pubkey,
    pub lp_token: Pubkey,
    pub authority: Pubkey,
    pub fee_payer: Pubkey,
    pub fee_receiver: Pubkey,
}

pub fn deposit_lp(accounts: &DepositLpAccounts, amount: u64, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::writable(accounts.user),
            AccountMeta::writable(accounts.collateral),
            AccountMeta::writable(accounts.source),
            AccountMeta::writable(accounts.destination),
            AccountMeta::readonly(accounts.whitelist),
            AccountMeta::readonly(accounts.lp_token),
            AccountMeta::signer(accounts.authority),
            AccountMeta::signer(accounts.fee_payer),
            AccountMeta::writable(accounts.fee_receiver),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data_with_amount(DEPOSIT_LP, amount),
    }
}

pub struct MintPoolTokensAccounts {
    pub pool: Pubkey,
    pub pool_mint: Pubkey,
    pub pool_authority: Pubkey,
    pub user: Pubkey,
    pub collateral: Pubkey,
    pub user_pool_token: Pubkey,
    /// Stake account or LP mint the collateral was created from; only a
    /// seed input here.
    pub staked_address: Pubkey,
    pub authority: Pubkey,
}

pub fn mint_pool_tokens(
    accounts: &MintPoolTokensAccounts,
    amount: u64,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::readonly(accounts.pool_mint),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::writable(accounts.user),
            AccountMeta::writable(accounts.collateral),
            AccountMeta::writable(accounts.user_pool_token),
            AccountMeta::readonly(accounts.staked_address),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data_with_amount(MINT_POOL_TOKENS, amount),
    }
}

pub struct BurnPoolTokensAccounts {
    pub pool: Pubkey,
    pub pool_mint: Pubkey,
    pub source_token_account: Pubkey,
    pub authority: Pubkey,
    pub user: Pubkey,
    pub withdraw_info: Pubkey,
    pub liquidation_fee: Pubkey,
    pub fee_payer: Pubkey,
    pub fee_receiver: Pubkey,
}

pub fn burn_pool_tokens(
    accounts: &BurnPoolTokensAccounts,
    amount: u64,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::writable(accounts.pool_mint),
            AccountMeta::writable(accounts.source_token_account),
            AccountMeta::signer(accounts.authority),
            AccountMeta::writable(accounts.user),
            AccountMeta::writable(accounts.withdraw_info),
            AccountMeta::writable(accounts.liquidation_fee),
            AccountMeta::signer(accounts.fee_payer),
            AccountMeta::writable(accounts.fee_receiver),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data_with_amount(BURN_POOL_TOKENS, amount),
    }
}

// ---------------------------------------------------------------------------
// Withdrawals
// ---------------------------------------------------------------------------

pub struct WithdrawStakeAccounts {
    pub pool: Pubkey,
    pub pool_mint: Pubkey,
    pub pool_authority: Pubkey,
    pub collateral: Pubkey,
    pub source_stake: Pubkey,
    pub split_stake: Pubkey,
    pub ephemeral_stake: Pubkey,
    pub source_token_account: Pubkey,
    pub authority: Pubkey,
}

pub fn withdraw_stake(
    accounts: &WithdrawStakeAccounts,
    amount: u64,
    with_burn: bool,
    with_merge: bool,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::readonly(accounts.pool_mint),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::writable(accounts.collateral),
            AccountMeta::writable(accounts.source_stake),
            AccountMeta::writable(accounts.split_stake),
            AccountMeta::writable(accounts.ephemeral_stake),
            AccountMeta::writable(accounts.source_token_account),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(STAKE_HISTORY_SYSVAR_ID),
            AccountMeta::readonly(STAKE_PROGRAM_ID),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::withdraw_stake_data(amount, with_burn, with_merge),
    }
}

pub struct WithdrawLpTokensAccounts {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub user: Pubkey,
    pub collateral: Pubkey,
    /// The pool authority's LP token account.
    pub source: Pubkey,
    /// The caller's LP token account.
    pub destination: Pubkey,
    pub lp_token: Pubkey,
    pub pool_mint: Pubkey,
    pub user_pool_token: Pubkey,
    pub authority: Pubkey,
}

pub fn withdraw_lp_tokens(
    accounts: &WithdrawLpTokensAccounts,
    amount: u64,
    with_burn: bool,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::writable(accounts.user),
            AccountMeta::writable(accounts.collateral),
            AccountMeta::writable(accounts.source),
            AccountMeta::writable(accounts.destination),
            AccountMeta::readonly(accounts.lp_token),
            AccountMeta::writable(accounts.pool_mint),
            AccountMeta::writable(accounts.user_pool_token),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
        ],
        data: instruction::withdraw_lp_tokens_data(amount, with_burn),
    }
}

pub struct WithdrawSolAccounts {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub destination: Pubkey,
    pub manager: Pubkey,
    pub authority: Pubkey,
}

pub fn withdraw_sol(
    accounts: &WithdrawSolAccounts,
    amount: u64,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::writable(accounts.pool_authority),
            AccountMeta::writable(accounts.destination),
            AccountMeta::writable(accounts.manager),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data_with_amount(WITHDRAW_SOL, amount),
    }
}

// ---------------------------------------------------------------------------
// Oracle and liquidation
// ---------------------------------------------------------------------------

pub struct InitOracleAccounts {
    pub pool: Pubkey,
    pub authority: Pubkey,
    /// Fresh keypair account; signs on creation.
    pub oracle: Pubkey,
    pub oracle_authority: Pubkey,
}

pub fn init_oracle(accounts: &InitOracleAccounts, program_id: &Pubkey) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly(accounts.pool),
            AccountMeta::signer(accounts.authority),
            AccountMeta::signer(accounts.oracle),
            AccountMeta::readonly(accounts.oracle_authority),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(INIT_ORACLE),
    }
}

pub fn close_oracle(
    pool: &Pubkey,
    authority: &Pubkey,
    oracle: &Pubkey,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::readonly(*pool),
            AccountMeta::signer(*authority),
            AccountMeta::writable(*oracle),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data(CLOSE_ORACLE),
    }
}

pub fn update_oracle_info(
    authority: &Pubkey,
    oracle: &Pubkey,
    addresses: &[Pubkey],
    values: &[u64],
    clear: bool,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::signer(*authority),
            AccountMeta::writable(*oracle),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::update_oracle_info_data(addresses, values, clear),
    }
}

pub struct LiquidateCollateralAccounts {
    pub pool: Pubkey,
    pub pool_authority: Pubkey,
    pub collateral: Pubkey,
    pub collateral_owner: Pubkey,
    pub collateral_owner_wallet: Pubkey,
    pub user_wallet: Pubkey,
    pub user: Pubkey,
    pub withdraw_info: Pubkey,
    pub oracle: Pubkey,
    pub source_stake: Pubkey,
    pub liquidator: Pubkey,
    /// Unstake-pool accounts used to convert the stake to SOL.
    pub unstake_pool: Pubkey,
    pub sol_reserves: Pubkey,
    pub protocol_fee: Pubkey,
    pub protocol_fee_destination: Pubkey,
    pub fee_account: Pubkey,
    pub stake_account_record: Pubkey,
    pub unstake_program: Pubkey,
    pub authority: Pubkey,
}

pub fn liquidate_collateral(
    accounts: &LiquidateCollateralAccounts,
    amount: u64,
    program_id: &Pubkey,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::writable(accounts.pool),
            AccountMeta::readonly(accounts.pool_authority),
            AccountMeta::writable(accounts.collateral),
            AccountMeta::writable(accounts.collateral_owner),
            AccountMeta::writable(accounts.collateral_owner_wallet),
            AccountMeta::writable(accounts.user_wallet),
            AccountMeta::writable(accounts.user),
            AccountMeta::writable(accounts.withdraw_info),
            AccountMeta::writable(accounts.oracle),
            AccountMeta::writable(accounts.source_stake),
            AccountMeta::readonly(accounts.liquidator),
            AccountMeta::writable(accounts.unstake_pool),
            AccountMeta::writable(accounts.sol_reserves),
            AccountMeta::readonly(accounts.protocol_fee),
            AccountMeta::writable(accounts.protocol_fee_destination),
            AccountMeta::readonly(accounts.fee_account),
            AccountMeta::writable(accounts.stake_account_record),
            AccountMeta::readonly(accounts.unstake_program),
            AccountMeta::signer(accounts.authority),
            AccountMeta::readonly(CLOCK_SYSVAR_ID),
            AccountMeta::readonly(TOKEN_PROGRAM_ID),
            AccountMeta::readonly(STAKE_PROGRAM_ID),
            AccountMeta::readonly(SYSTEM_PROGRAM_ID),
        ],
        data: instruction::data_with_amount(LIQUIDATE_COLLATERAL, amount),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pda::PROGRAM_ID;

    fn key(byte: u8) -> Pubkey {
        Pubkey::new([byte; 32])
    }

    #[test]
    fn init_pool_account_order() {
        let ix = init_pool(
            &InitPoolAccounts {
                pool: key(1),
                pool_mint: key(2),
                pool_authority: key(3),
                mint_authority: key(4),
                stake_source: key(5),
                manager: key(6),
                authority: key(7),
                fee_receiver: key(8),
            },
            &PROGRAM_ID,
        );

        assert_eq!(ix.program_id, PROGRAM_ID);
        assert_eq!(ix.data, INIT_POOL.to_vec());
        assert_eq!(ix.accounts.len(), 9);

        // The pool account itself signs on creation.
        assert_eq!(ix.accounts[0].pubkey, key(1));
        assert!(ix.accounts[0].is_signer);
        // PDAs are read-only.
        assert!(!ix.accounts[2].is_writable);
        assert!(!ix.accounts[3].is_writable);
        // The trailing system program is filled in by the builder.
        assert_eq!(ix.accounts[8].pubkey, SYSTEM_PROGRAM_ID);
        assert!(!ix.accounts[8].is_signer);
        assert!(!ix.accounts[8].is_writable);
    }

    #[test]
    fn pause_pool_has_no_program_trailer() {
        let ix = pause_pool(&key(1), &key(2), &key(3), &PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 3);
        assert!(ix.accounts[2].is_signer);
    }

    #[test]
    fn whitelist_add_and_remove_swap_token_and_record() {
        let accounts = WhitelistAccounts {
            pool: key(1),
            authority: key(2),
            token: key(3),
            whitelist: key(4),
        };
        let add = add_to_whitelist(&accounts, &PROGRAM_ID);
        let remove = remove_from_whitelist(&accounts, &PROGRAM_ID);

        assert_eq!(add.accounts[2].pubkey, key(3));
        assert_eq!(add.accounts[3].pubkey, key(4));
        assert_eq!(remove.accounts[2].pubkey, key(4));
        assert_eq!(remove.accounts[3].pubkey, key(3));
    }

    #[test]
    fn deposit_stake_fills_sysvar_trailer() {
        let ix = deposit_stake(
            &DepositStakeAccounts {
                pool: key(1),
                pool_authority: key(2),
                user: key(3),
                collateral: key(4),
                source_stake: key(5),
                delegated_stake: key(5),
                split_stake: key(6),
                authority: key(7),
                fee_payer: key(7),
                fee_receiver: key(8),
            },
            2_000_000_000,
            &PROGRAM_ID,
        );

        assert_eq!(ix.accounts.len(), 13);
        assert_eq!(ix.accounts[10].pubkey, CLOCK_SYSVAR_ID);
        assert_eq!(ix.accounts[11].pubkey, STAKE_PROGRAM_ID);
        assert_eq!(ix.accounts[12].pubkey, SYSTEM_PROGRAM_ID);
        // split_stake is a fresh keypair that must sign.
        assert!(ix.accounts[6].is_signer);
        assert_eq!(&ix.data[..8], &DEPOSIT_STAKE);
        assert_eq!(&ix.data[8..], &2_000_000_000u64.to_le_bytes());
    }

    #[test]
    fn burn_pool_tokens_includes_liquidation_fee() {
        let ix = burn_pool_tokens(
            &BurnPoolTokensAccounts {
                pool: key(1),
                pool_mint: key(2),
                source_token_account: key(3),
                authority: key(4),
                user: key(5),
                withdraw_info: key(6),
                liquidation_fee: key(7),
                fee_payer: key(8),
                fee_receiver: key(9),
            },
            1_000,
            &PROGRAM_ID,
        );

        assert_eq!(ix.accounts.len(), 12);
        assert_eq!(ix.accounts[6].pubkey, key(7));
        assert!(ix.accounts[7].is_signer); // fee payer
        assert_eq!(ix.accounts[10].pubkey, TOKEN_PROGRAM_ID);
    }

    #[test]
    fn withdraw_stake_flags_in_data() {
        let ix = withdraw_stake(
            &WithdrawStakeAccounts {
                pool: key(1),
                pool_mint: key(2),
                pool_authority: key(3),
                collateral: key(4),
                source_stake: key(5),
                split_stake: key(6),
                ephemeral_stake: key(7),
                source_token_account: key(8),
                authority: key(9),
            },
            750,
            true,
            true,
            &PROGRAM_ID,
        );

        assert_eq!(ix.accounts.len(), 14);
        assert_eq!(ix.accounts[10].pubkey, STAKE_HISTORY_SYSVAR_ID);
        assert_eq!(ix.data.len(), 18);
        assert_eq!(ix.data[16], 1);
        assert_eq!(ix.data[17], 1);
    }

    #[test]
    fn update_oracle_info_encodes_both_vectors() {
        let ix = update_oracle_info(
            &key(1),
            &key(2),
            &[key(3)],
            &[99],
            false,
            &PROGRAM_ID,
        );
        assert_eq!(ix.accounts.len(), 3);
        // discriminator + vec(1 pubkey) + vec(1 u64) + bool.
        assert_eq!(ix.data.len(), 8 + 4 + 32 + 4 + 8 + 1);
        assert_eq!(*ix.data.last().unwrap(), 0);
    }

    #[test]
    fn liquidate_collateral_account_count() {
        let a = LiquidateCollateralAccounts {
            pool: key(1),
            pool_authority: key(2),
            collateral: key(3),
            collateral_owner: key(4),
            collateral_owner_wallet: key(5),
            user_wallet: key(6),
            user: key(7),
            withdraw_info: key(8),
            oracle: key(9),
            source_stake: key(10),
            liquidator: key(11),
            unstake_pool: key(12),
            sol_reserves: key(13),
            protocol_fee: key(14),
            protocol_fee_destination: key(15),
            fee_account: key(16),
            stake_account_record: key(17),
            unstake_program: key(18),
            authority: key(19),
        };
        let ix = liquidate_collateral(&a, 123, &PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 23);
        assert!(ix.accounts[18].is_signer);
        assert_eq!(ix.accounts[22].pubkey, SYSTEM_PROGRAM_ID);
    }
}
