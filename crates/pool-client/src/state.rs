//! Protocol account records.
//!
//! Each record mirrors the deployed program's account layout: an 8-byte
//! discriminator followed by the fields in wire order, all little-endian.
//! The discriminators are fixed constants of the deployed program and are
//! never recomputed at runtime.

use sol_core::Pubkey;

use crate::codec::{AccountRecord, Reader, Writer};
use crate::error::ClientError;

/// Main pool record: token mint, stake source, fee schedule and status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    pub pool_mint: Pubkey,
    pub stake_source: Pubkey,
    pub authority: Pubkey,
    pub fee_receiver: Pubkey,
    pub deposit_amount: u64,
    pub min_deposit: u64,
    /// Fees in basis points (0..=10000).
    pub deposit_fee: u16,
    pub withdraw_fee: u16,
    pub mint_fee: u16,
    pub storage_fee: u16,
    pub is_active: bool,
    pub authority_bump: u8,
}

impl AccountRecord for Pool {
    const KIND: &'static str = "Pool";
    const DISCRIMINATOR: [u8; 8] = [241, 154, 109, 4, 17, 177, 109, 188];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(Pool {
            pool_mint: r.read_pubkey()?,
            stake_source: r.read_pubkey()?,
            authority: r.read_pubkey()?,
            fee_receiver: r.read_pubkey()?,
            deposit_amount: r.read_u64()?,
            min_deposit: r.read_u64()?,
            deposit_fee: r.read_u16()?,
            withdraw_fee: r.read_u16()?,
            mint_fee: r.read_u16()?,
            storage_fee: r.read_u16()?,
            is_active: r.read_bool()?,
            authority_bump: r.read_u8()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.pool_mint);
        w.write_pubkey(&self.stake_source);
        w.write_pubkey(&self.authority);
        w.write_pubkey(&self.fee_receiver);
        w.write_u64(self.deposit_amount);
        w.write_u64(self.min_deposit);
        w.write_u16(self.deposit_fee);
        w.write_u16(self.withdraw_fee);
        w.write_u16(self.mint_fee);
        w.write_u16(self.storage_fee);
        w.write_bool(self.is_active);
        w.write_u8(self.authority_bump);
    }
}

/// One entry in the oracle's liquidation priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueueMember {
    pub collateral: Pubkey,
    pub amount: u64,
}

/// Oracle record: liquidation priority queue, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Oracle {
    pub authority: Pubkey,
    pub priority_queue: Vec<QueueMember>,
}

impl AccountRecord for Oracle {
    const KIND: &'static str = "Oracle";
    const DISCRIMINATOR: [u8; 8] = [139, 194, 131, 179, 140, 179, 229, 244];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(Oracle {
            authority: r.read_pubkey()?,
            priority_queue: r.read_vec(|r| {
                Ok(QueueMember {
                    collateral: r.read_pubkey()?,
                    amount: r.read_u64()?,
                })
            })?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.authority);
        w.write_vec(&self.priority_queue, |w, m| {
            w.write_pubkey(&m.collateral);
            w.write_u64(m.amount);
        });
    }
}

/// A user's staked position backing minted pool tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collateral {
    pub user: Pubkey,
    pub pool: Pubkey,
    pub source_stake: Pubkey,
    pub delegation_stake: u64,
    /// Pool tokens minted against this collateral; never exceeds
    /// `delegation_stake`.
    pub amount: u64,
    pub liquidated_amount: u64,
    pub created_at: i64,
    pub creation_epoch: u64,
    pub bump: u8,
    pub is_native: bool,
}

impl AccountRecord for Collateral {
    const KIND: &'static str = "Collateral";
    const DISCRIMINATOR: [u8; 8] = [123, 130, 234, 63, 255, 240, 255, 92];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(Collateral {
            user: r.read_pubkey()?,
            pool: r.read_pubkey()?,
            source_stake: r.read_pubkey()?,
            delegation_stake: r.read_u64()?,
            amount: r.read_u64()?,
            liquidated_amount: r.read_u64()?,
            created_at: r.read_i64()?,
            creation_epoch: r.read_u64()?,
            bump: r.read_u8()?,
            is_native: r.read_bool()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.user);
        w.write_pubkey(&self.pool);
        w.write_pubkey(&self.source_stake);
        w.write_u64(self.delegation_stake);
        w.write_u64(self.amount);
        w.write_u64(self.liquidated_amount);
        w.write_i64(self.created_at);
        w.write_u64(self.creation_epoch);
        w.write_u8(self.bump);
        w.write_bool(self.is_native);
    }
}

/// Per-wallet protocol state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub wallet: Pubkey,
    pub rate: u64,
    pub num_of_collaterals: u64,
    /// Withdraw requests created so far; `last_withdraw_index` never runs
    /// ahead of it.
    pub requests_amount: u32,
    pub last_withdraw_index: u32,
    pub is_blocked: bool,
}

impl AccountRecord for User {
    const KIND: &'static str = "User";
    const DISCRIMINATOR: [u8; 8] = [159, 117, 95, 227, 239, 151, 58, 236];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(User {
            wallet: r.read_pubkey()?,
            rate: r.read_u64()?,
            num_of_collaterals: r.read_u64()?,
            requests_amount: r.read_u32()?,
            last_withdraw_index: r.read_u32()?,
            is_blocked: r.read_bool()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.wallet);
        w.write_u64(self.rate);
        w.write_u64(self.num_of_collaterals);
        w.write_u32(self.requests_amount);
        w.write_u32(self.last_withdraw_index);
        w.write_bool(self.is_blocked);
    }
}

/// A pending withdraw request, addressed by `(user, index)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawInfo {
    pub authority: Pubkey,
    pub amount: u64,
    pub created_at: i64,
    pub index: u64,
}

impl AccountRecord for WithdrawInfo {
    const KIND: &'static str = "WithdrawInfo";
    const DISCRIMINATOR: [u8; 8] = [103, 244, 107, 42, 135, 228, 81, 107];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(WithdrawInfo {
            authority: r.read_pubkey()?,
            amount: r.read_u64()?,
            created_at: r.read_i64()?,
            index: r.read_u64()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.authority);
        w.write_u64(self.amount);
        w.write_i64(self.created_at);
        w.write_u64(self.index);
    }
}

/// Marks an LP token mint as accepted by a pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Whitelist {
    pub whitelisted_token: Pubkey,
    pub pool: Pubkey,
}

impl AccountRecord for Whitelist {
    const KIND: &'static str = "Whitelist";
    const DISCRIMINATOR: [u8; 8] = [204, 176, 52, 79, 146, 121, 54, 247];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(Whitelist {
            whitelisted_token: r.read_pubkey()?,
            pool: r.read_pubkey()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.whitelisted_token);
        w.write_pubkey(&self.pool);
    }
}

/// Grants a wallet pool-management rights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    pub authority: Pubkey,
}

impl AccountRecord for Manager {
    const KIND: &'static str = "Manager";
    const DISCRIMINATOR: [u8; 8] = [221, 78, 171, 233, 213, 142, 113, 56];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(Manager {
            authority: r.read_pubkey()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.authority);
    }
}

/// Grants a wallet liquidation rights.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Liquidator {
    pub authority: Pubkey,
}

impl AccountRecord for Liquidator {
    const KIND: &'static str = "Liquidator";
    const DISCRIMINATOR: [u8; 8] = [76, 44, 252, 81, 20, 72, 135, 220];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(Liquidator {
            authority: r.read_pubkey()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_pubkey(&self.authority);
    }
}

/// Singleton record holding the protocol-wide liquidation fee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidationFee {
    /// Basis points (0..=10000).
    pub fee: u16,
    pub fee_receiver: Pubkey,
}

impl AccountRecord for LiquidationFee {
    const KIND: &'static str = "LiquidationFee";
    const DISCRIMINATOR: [u8; 8] = [9, 40, 53, 191, 46, 106, 50, 57];

    fn read_fields(r: &mut Reader<'_>) -> Result<Self, ClientError> {
        Ok(LiquidationFee {
            fee: r.read_u16()?,
            fee_receiver: r.read_pubkey()?,
        })
    }

    fn write_fields(&self, w: &mut Writer) {
        w.write_u16(self.fee);
        w.write_pubkey(&self.fee_receiver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    fn anchor_account_discriminator(name: &str) -> [u8; 8] {
        let hash = Sha256::digest(format!("account:{name}").as_bytes());
        hash[..8].try_into().unwrap()
    }

    #[test]
    fn discriminators_match_account_names() {
        assert_eq!(Pool::DISCRIMINATOR, anchor_account_discriminator("Pool"));
        assert_eq!(Oracle::DISCRIMINATOR, anchor_account_discriminator("Oracle"));
        assert_eq!(
            Collateral::DISCRIMINATOR,
            anchor_account_discriminator("Collateral")
        );
        assert_eq!(User::DISCRIMINATOR, anchor_account_discriminator("User"));
        assert_eq!(
            WithdrawInfo::DISCRIMINATOR,
            anchor_account_discriminator("WithdrawInfo")
        );
        assert_eq!(
            Whitelist::DISCRIMINATOR,
            anchor_account_discriminator("Whitelist")
        );
        assert_eq!(
            Manager::DISCRIMINATOR,
            anchor_account_discriminator("Manager")
        );
        assert_eq!(
            Liquidator::DISCRIMINATOR,
            anchor_account_discriminator("Liquidator")
        );
        assert_eq!(
            LiquidationFee::DISCRIMINATOR,
            anchor_account_discriminator("LiquidationFee")
        );
    }

    fn pool() -> Pool {
        Pool {
            pool_mint: Pubkey::new([1u8; 32]),
            stake_source: Pubkey::new([2u8; 32]),
            authority: Pubkey::new([3u8; 32]),
            fee_receiver: Pubkey::new([4u8; 32]),
            deposit_amount: 5_000_000_000,
            min_deposit: 1_000_000,
            deposit_fee: 25,
            withdraw_fee: 50,
            mint_fee: 10,
            storage_fee: 100,
            is_active: true,
            authority_bump: 254,
        }
    }

    #[test]
    fn pool_round_trip() {
        let p = pool();
        let bytes = p.encode();
        assert_eq!(Pool::decode(&bytes).unwrap(), p);
        assert_eq!(Pool::decode(&bytes).unwrap().encode(), bytes);
    }

    #[test]
    fn pool_layout_size() {
        // 8 discriminator + 4*32 pubkeys + 2*8 + 4*2 + 1 + 1.
        assert_eq!(pool().encode().len(), 8 + 128 + 16 + 8 + 2);
    }

    #[test]
    fn pool_altered_discriminator_is_wrong_kind() {
        let mut bytes = pool().encode();
        bytes[0] = bytes[0].wrapping_add(1);
        assert!(matches!(
            Pool::decode(&bytes),
            Err(ClientError::WrongAccountKind {
                expected: "Pool",
                ..
            })
        ));
    }

    #[test]
    fn pool_truncated_by_one_byte() {
        let bytes = pool().encode();
        assert!(matches!(
            Pool::decode(&bytes[..bytes.len() - 1]),
            Err(ClientError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn oracle_bytes_are_not_a_pool() {
        let oracle = Oracle {
            authority: Pubkey::new([7u8; 32]),
            priority_queue: vec![],
        };
        assert!(matches!(
            Pool::decode(&oracle.encode()),
            Err(ClientError::WrongAccountKind {
                expected: "Pool",
                found
            }) if found == Oracle::DISCRIMINATOR
        ));
    }

    #[test]
    fn oracle_queue_round_trips_in_order() {
        let oracle = Oracle {
            authority: Pubkey::new([7u8; 32]),
            priority_queue: vec![
                QueueMember {
                    collateral: Pubkey::new([10u8; 32]),
                    amount: 300,
                },
                QueueMember {
                    collateral: Pubkey::new([11u8; 32]),
                    amount: 200,
                },
                QueueMember {
                    collateral: Pubkey::new([12u8; 32]),
                    amount: 100,
                },
            ],
        };
        let decoded = Oracle::decode(&oracle.encode()).unwrap();
        assert_eq!(decoded, oracle);
        assert_eq!(decoded.priority_queue[0].amount, 300);
        assert_eq!(decoded.priority_queue[2].amount, 100);
    }

    #[test]
    fn oracle_empty_queue_round_trips() {
        let oracle = Oracle {
            authority: Pubkey::new([7u8; 32]),
            priority_queue: vec![],
        };
        let bytes = oracle.encode();
        // 8 discriminator + 32 authority + 4 count.
        assert_eq!(bytes.len(), 44);
        assert_eq!(Oracle::decode(&bytes).unwrap(), oracle);
    }

    #[test]
    fn oracle_count_beyond_buffer_is_truncation() {
        let mut bytes = Oracle {
            authority: Pubkey::new([7u8; 32]),
            priority_queue: vec![],
        }
        .encode();
        // Claim 5 entries but provide none.
        bytes[40..44].copy_from_slice(&5u32.to_le_bytes());
        assert!(matches!(
            Oracle::decode(&bytes),
            Err(ClientError::TruncatedBuffer { .. })
        ));
    }

    #[test]
    fn collateral_round_trip() {
        let c = Collateral {
            user: Pubkey::new([1u8; 32]),
            pool: Pubkey::new([2u8; 32]),
            source_stake: Pubkey::new([3u8; 32]),
            delegation_stake: 10_000,
            amount: 8_000,
            liquidated_amount: 500,
            created_at: 1_700_000_000,
            creation_epoch: 520,
            bump: 255,
            is_native: true,
        };
        let bytes = c.encode();
        assert_eq!(Collateral::decode(&bytes).unwrap(), c);
        assert_eq!(Collateral::decode(&bytes).unwrap().encode(), bytes);
    }

    #[test]
    fn user_round_trip() {
        let u = User {
            wallet: Pubkey::new([1u8; 32]),
            rate: 42,
            num_of_collaterals: 3,
            requests_amount: 7,
            last_withdraw_index: 5,
            is_blocked: false,
        };
        let bytes = u.encode();
        assert_eq!(User::decode(&bytes).unwrap(), u);
        assert_eq!(User::decode(&bytes).unwrap().encode(), bytes);
    }

    #[test]
    fn withdraw_info_round_trip() {
        let w = WithdrawInfo {
            authority: Pubkey::new([1u8; 32]),
            amount: 1_500_000_000,
            created_at: -1, // pre-epoch timestamps stay intact
            index: 9,
        };
        let bytes = w.encode();
        assert_eq!(WithdrawInfo::decode(&bytes).unwrap(), w);
    }

    #[test]
    fn random_records_round_trip() {
        use rand::Rng;

        let mut rng = rand::thread_rng();
        for _ in 0..200 {
            let c = Collateral {
                user: Pubkey::new(rng.gen()),
                pool: Pubkey::new(rng.gen()),
                source_stake: Pubkey::new(rng.gen()),
                delegation_stake: rng.gen(),
                amount: rng.gen(),
                liquidated_amount: rng.gen(),
                created_at: rng.gen(),
                creation_epoch: rng.gen(),
                bump: rng.gen(),
                is_native: rng.gen(),
            };
            let bytes = c.encode();
            assert_eq!(Collateral::decode(&bytes).unwrap(), c);
            assert_eq!(Collateral::decode(&bytes).unwrap().encode(), bytes);

            let queue_len = rng.gen_range(0..8);
            let o = Oracle {
                authority: Pubkey::new(rng.gen()),
                priority_queue: (0..queue_len)
                    .map(|_| QueueMember {
                        collateral: Pubkey::new(rng.gen()),
                        amount: rng.gen(),
                    })
                    .collect(),
            };
            let bytes = o.encode();
            assert_eq!(Oracle::decode(&bytes).unwrap(), o);
            assert_eq!(Oracle::decode(&bytes).unwrap().encode(), bytes);

            let u = User {
                wallet: Pubkey::new(rng.gen()),
                rate: rng.gen(),
                num_of_collaterals: rng.gen(),
                requests_amount: rng.gen(),
                last_withdraw_index: rng.gen(),
                is_blocked: rng.gen(),
            };
            let bytes = u.encode();
            assert_eq!(User::decode(&bytes).unwrap(), u);
            assert_eq!(User::decode(&bytes).unwrap().encode(), bytes);
        }
    }

    #[test]
    fn small_records_round_trip() {
        let wl = Whitelist {
            whitelisted_token: Pubkey::new([1u8; 32]),
            pool: Pubkey::new([2u8; 32]),
        };
        assert_eq!(Whitelist::decode(&wl.encode()).unwrap(), wl);

        let m = Manager {
            authority: Pubkey::new([3u8; 32]),
        };
        assert_eq!(Manager::decode(&m.encode()).unwrap(), m);

        let l = Liquidator {
            authority: Pubkey::new([4u8; 32]),
        };
        assert_eq!(Liquidator::decode(&l.encode()).unwrap(), l);

        let f = LiquidationFee {
            fee: 30,
            fee_receiver: Pubkey::new([5u8; 32]),
        };
        assert_eq!(LiquidationFee::decode(&f.encode()).unwrap(), f);
    }
}
