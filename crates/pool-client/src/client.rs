//! The protocol client: typed account fetchers, PDA helpers and operation
//! builders behind a single `Transport` boundary.

use sol_core::{CoreError, Instruction, Pubkey};

use crate::codec::AccountRecord;
use crate::error::ClientError;
use crate::instruction::UpdatePoolData;
use crate::ops;
use crate::pda;
use crate::state::{
    Collateral, LiquidationFee, Liquidator, Manager, Oracle, Pool, User, Whitelist, WithdrawInfo,
};

/// Narrow boundary to the validator network. Everything else in this crate
/// is pure; retries and rate limiting belong behind this trait.
pub trait Transport {
    /// Fetch raw account bytes, `None` if no account exists at the address.
    fn fetch(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, String>;

    /// Submit a signed wire-format transaction; returns the signature as
    /// reported by the network.
    fn submit(&self, signed_tx: &[u8]) -> Result<[u8; 64], String>;
}

/// Client for one deployment of the staking-pool program.
pub struct PoolClient<T: Transport> {
    transport: T,
    program_id: Pubkey,
}

impl<T: Transport> PoolClient<T> {
    /// Client against the mainnet deployment.
    pub fn new(transport: T) -> Self {
        Self::with_program_id(transport, pda::PROGRAM_ID)
    }

    /// Client against a custom deployment (test validators).
    pub fn with_program_id(transport: T, program_id: Pubkey) -> Self {
        PoolClient {
            transport,
            program_id,
        }
    }

    pub fn program_id(&self) -> &Pubkey {
        &self.program_id
    }

    // -- fetchers ----------------------------------------------------------

    fn fetch_record<R: AccountRecord>(&self, address: &Pubkey) -> Result<R, ClientError> {
        let bytes = self
            .transport
            .fetch(address)
            .map_err(ClientError::Transport)?
            .ok_or(ClientError::AccountNotFound(*address))?;
        R::decode(&bytes)
    }

    pub fn fetch_pool(&self, address: &Pubkey) -> Result<Pool, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_oracle(&self, address: &Pubkey) -> Result<Oracle, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_collateral(&self, address: &Pubkey) -> Result<Collateral, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_user(&self, address: &Pubkey) -> Result<User, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_withdraw_info(&self, address: &Pubkey) -> Result<WithdrawInfo, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_whitelist(&self, address: &Pubkey) -> Result<Whitelist, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_manager(&self, address: &Pubkey) -> Result<Manager, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_liquidator(&self, address: &Pubkey) -> Result<Liquidator, ClientError> {
        self.fetch_record(address)
    }

    pub fn fetch_liquidation_fee(&self, address: &Pubkey) -> Result<LiquidationFee, ClientError> {
        self.fetch_record(address)
    }

    // -- PDA helpers -------------------------------------------------------

    pub fn pool_authority(&self, pool: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
        pda::pool_authority(pool, &self.program_id)
    }

    pub fn user_address(&self, wallet: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
        pda::user(wallet, &self.program_id)
    }

    pub fn collateral_address(
        &self,
        source_stake: &Pubkey,
        user: &Pubkey,
    ) -> Result<(Pubkey, u8), CoreError> {
        pda::collateral(source_stake, user, &self.program_id)
    }

    pub fn withdraw_info_address(
        &self,
        user: &Pubkey,
        index: u64,
    ) -> Result<(Pubkey, u8), CoreError> {
        pda::withdraw_info(user, index, &self.program_id)
    }

    pub fn manager_address(&self, wallet: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
        pda::manager(wallet, &self.program_id)
    }

    pub fn liquidator_address(&self, wallet: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
        pda::liquidator(wallet, &self.program_id)
    }

    pub fn whitelist_address(&self, token: &Pubkey) -> Result<(Pubkey, u8), CoreError> {
        pda::whitelist(token, &self.program_id)
    }

    pub fn oracle_address(&self) -> Result<(Pubkey, u8), CoreError> {
        pda::oracle(&self.program_id)
    }

    pub fn liquidation_fee_address(&self) -> Result<(Pubkey, u8), CoreError> {
        pda::liquidation_fee(&self.program_id)
    }

    pub fn mint_authority_address(&self) -> Result<(Pubkey, u8), CoreError> {
        pda::mint_authority(&self.program_id)
    }

    // -- operations --------------------------------------------------------
    //
    // Builders that only forward fixed account lists take the accounts
    // struct directly; the ones below derive their PDAs first.

    pub fn init_pool(&self, accounts: &ops::InitPoolAccounts) -> Instruction {
        ops::init_pool(accounts, &self.program_id)
    }

    pub fn close_pool(&self, pool: &Pubkey, authority: &Pubkey) -> Instruction {
        ops::close_pool(pool, authority, &self.program_id)
    }

    /// Derives the caller's manager record from their wallet.
    pub fn pause_pool(&self, pool: &Pubkey, authority: &Pubkey) -> Result<Instruction, ClientError> {
        let (manager, _) = self.manager_address(authority)?;
        Ok(ops::pause_pool(pool, &manager, authority, &self.program_id))
    }

    pub fn resume_pool(&self, pool: &Pubkey, authority: &Pubkey) -> Instruction {
        ops::resume_pool(pool, authority, &self.program_id)
    }

    pub fn update_pool(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        args: &UpdatePoolData,
    ) -> Result<Instruction, ClientError> {
        let (manager, _) = self.manager_address(authority)?;
        Ok(ops::update_pool(
            pool,
            &manager,
            authority,
            args,
            &self.program_id,
        ))
    }

    pub fn add_manager(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        manager_wallet: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let (manager, _) = self.manager_address(manager_wallet)?;
        Ok(ops::add_manager(
            &ops::AddManagerAccounts {
                pool: *pool,
                authority: *authority,
                manager_wallet: *manager_wallet,
                manager,
            },
            &self.program_id,
        ))
    }

    pub fn remove_manager(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        manager_wallet: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let (manager, _) = self.manager_address(manager_wallet)?;
        Ok(ops::remove_manager(
            &ops::RemoveManagerAccounts {
                pool: *pool,
                authority: *authority,
                manager,
                manager_wallet: *manager_wallet,
            },
            &self.program_id,
        ))
    }

    pub fn add_liquidator(
        &self,
        authority: &Pubkey,
        liquidator_wallet: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let accounts = self.liquidator_accounts(authority, liquidator_wallet)?;
        Ok(ops::add_liquidator(&accounts, &self.program_id))
    }

    pub fn remove_liquidator(
        &self,
        authority: &Pubkey,
        liquidator_wallet: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let accounts = self.liquidator_accounts(authority, liquidator_wallet)?;
        Ok(ops::remove_liquidator(&accounts, &self.program_id))
    }

    fn liquidator_accounts(
        &self,
        authority: &Pubkey,
        liquidator_wallet: &Pubkey,
    ) -> Result<ops::AddLiquidatorAccounts, ClientError> {
        let (liquidator, _) = self.liquidator_address(liquidator_wallet)?;
        let (manager, _) = self.manager_address(authority)?;
        Ok(ops::AddLiquidatorAccounts {
            authority: *authority,
            liquidator_wallet: *liquidator_wallet,
            liquidator,
            manager,
        })
    }

    pub fn add_to_whitelist(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        token: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let accounts = self.whitelist_accounts(pool, authority, token)?;
        Ok(ops::add_to_whitelist(&accounts, &self.program_id))
    }

    pub fn remove_from_whitelist(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        token: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let accounts = self.whitelist_accounts(pool, authority, token)?;
        Ok(ops::remove_from_whitelist(&accounts, &self.program_id))
    }

    fn whitelist_accounts(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        token: &Pubkey,
    ) -> Result<ops::WhitelistAccounts, ClientError> {
        let (whitelist, _) = self.whitelist_address(token)?;
        Ok(ops::WhitelistAccounts {
            pool: *pool,
            authority: *authority,
            token: *token,
            whitelist,
        })
    }

    pub fn block_user(
        &self,
        authority: &Pubkey,
        user_wallet: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let accounts = self.moderation_accounts(authority, user_wallet)?;
        Ok(ops::block_user(&accounts, &self.program_id))
    }

    pub fn unblock_user(
        &self,
        authority: &Pubkey,
        user_wallet: &Pubkey,
    ) -> Result<Instruction, ClientError> {
        let accounts = self.moderation_accounts(authority, user_wallet)?;
        Ok(ops::unblock_user(&accounts, &self.program_id))
    }

    fn moderation_accounts(
        &self,
        authority: &Pubkey,
        user_wallet: &Pubkey,
    ) -> Result<ops::UserModerationAccounts, ClientError> {
        let (manager, _) = self.manager_address(authority)?;
        let (user, _) = self.user_address(user_wallet)?;
        Ok(ops::UserModerationAccounts {
            authority: *authority,
            manager,
            user,
            user_wallet: *user_wallet,
        })
    }

    pub fn set_liquidation_fee(
        &self,
        authority: &Pubkey,
        fee: Option<u16>,
        fee_receiver: Option<Pubkey>,
    ) -> Result<Instruction, ClientError> {
        let (liquidation_fee, _) = self.liquidation_fee_address()?;
        let (manager, _) = self.manager_address(authority)?;
        Ok(ops::set_liquidation_fee(
            &ops::SetLiquidationFeeAccounts {
                liquidation_fee,
                manager,
                authority: *authority,
            },
            fee,
            fee_receiver,
            &self.program_id,
        ))
    }

    pub fn deposit_stake(
        &self,
        accounts: &ops::DepositStakeAccounts,
        amount: u64,
    ) -> Instruction {
        ops::deposit_stake(accounts, amount, &self.program_id)
    }

    pub fn deposit_lp(&self, accounts: &ops::DepositLpAccounts, amount: u64) -> Instruction {
        ops::deposit_lp(accounts, amount, &self.program_id)
    }

    pub fn mint_pool_tokens(
        &self,
        accounts: &ops::MintPoolTokensAccounts,
        amount: u64,
    ) -> Instruction {
        ops::mint_pool_tokens(accounts, amount, &self.program_id)
    }

    pub fn burn_pool_tokens(
        &self,
        accounts: &ops::BurnPoolTokensAccounts,
        amount: u64,
    ) -> Instruction {
        ops::burn_pool_tokens(accounts, amount, &self.program_id)
    }

    pub fn withdraw_stake(
        &self,
        accounts: &ops::WithdrawStakeAccounts,
        amount: u64,
        with_burn: bool,
        with_merge: bool,
    ) -> Instruction {
        ops::withdraw_stake(accounts, amount, with_burn, with_merge, &self.program_id)
    }

    pub fn withdraw_lp_tokens(
        &self,
        accounts: &ops::WithdrawLpTokensAccounts,
        amount: u64,
        with_burn: bool,
    ) -> Instruction {
        ops::withdraw_lp_tokens(accounts, amount, with_burn, &self.program_id)
    }

    pub fn withdraw_sol(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        destination: &Pubkey,
        amount: u64,
    ) -> Result<Instruction, ClientError> {
        let (pool_authority, _) = self.pool_authority(pool)?;
        let (manager, _) = self.manager_address(authority)?;
        Ok(ops::withdraw_sol(
            &ops::WithdrawSolAccounts {
                pool: *pool,
                pool_authority,
                destination: *destination,
                manager,
                authority: *authority,
            },
            amount,
            &self.program_id,
        ))
    }

    pub fn init_oracle(&self, accounts: &ops::InitOracleAccounts) -> Instruction {
        ops::init_oracle(accounts, &self.program_id)
    }

    pub fn close_oracle(
        &self,
        pool: &Pubkey,
        authority: &Pubkey,
        oracle: &Pubkey,
    ) -> Instruction {
        ops::close_oracle(pool, authority, oracle, &self.program_id)
    }

    /// Targets the oracle singleton of this deployment.
    pub fn update_oracle_info(
        &self,
        authority: &Pubkey,
        addresses: &[Pubkey],
        values: &[u64],
        clear: bool,
    ) -> Result<Instruction, ClientError> {
        let (oracle, _) = self.oracle_address()?;
        Ok(ops::update_oracle_info(
            authority,
            &oracle,
            addresses,
            values,
            clear,
            &self.program_id,
        ))
    }

    pub fn liquidate_collateral(
        &self,
        accounts: &ops::LiquidateCollateralAccounts,
        amount: u64,
    ) -> Instruction {
        ops::liquidate_collateral(accounts, amount, &self.program_id)
    }

    // -- submission --------------------------------------------------------

    /// Hand a signed wire-format transaction to the transport.
    pub fn submit(&self, signed_tx: &[u8]) -> Result<[u8; 64], ClientError> {
        self.transport.submit(signed_tx).map_err(ClientError::Transport)
    }
}
