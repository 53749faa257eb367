//! Program-derived address (PDA) derivation.
//!
//! A PDA is computed as
//! `SHA-256(seed_0 || ... || seed_n || bump || program_id || "ProgramDerivedAddress")`
//! where `bump` is a single byte searched from 255 down to 0. The first
//! candidate that is NOT a valid Ed25519 curve point wins: an off-curve
//! address can never correspond to a private key, which is what makes the
//! account controllable only by the owning program.

use sha2::{Digest, Sha256};

use crate::error::CoreError;
use crate::pubkey::Pubkey;

/// Domain separator appended to every PDA hash input.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the program-derived address and bump for the given seeds.
///
/// Deterministic: identical seeds and program always yield the identical
/// `(address, bump)` pair. The on-chain runtime searches the same 255..=0
/// space, so both sides always agree on the bump.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &Pubkey,
) -> Result<(Pubkey, u8), CoreError> {
    for bump in (0u8..=255).rev() {
        if let Some(address) = try_create_program_address(seeds, bump, program_id) {
            return Ok((address, bump));
        }
    }

    Err(CoreError::ExhaustedBumpSeeds {
        seeds: seeds
            .iter()
            .map(|s| hex::encode(s))
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// Derive the candidate address for an explicit bump.
///
/// Returns `None` if the candidate falls ON the Ed25519 curve (the bump is
/// unusable and the caller must try the next one).
pub fn try_create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &Pubkey,
) -> Option<Pubkey> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id.as_bytes());
    hasher.update(PDA_MARKER);

    let hash: [u8; 32] = hasher.finalize().into();

    if is_on_curve(&hash) {
        return None;
    }

    Some(Pubkey::new(hash))
}

/// Check whether 32 bytes decompress to a valid Ed25519 point.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program() -> Pubkey {
        Pubkey::new([0x57u8; 32])
    }

    #[test]
    fn derivation_is_deterministic() {
        let a = find_program_address(&[b"user", &[0x11u8; 32]], &program()).unwrap();
        let b = find_program_address(&[b"user", &[0x11u8; 32]], &program()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn derived_address_is_off_curve() {
        let (addr, _) = find_program_address(&[b"pool_authority", &[0xAAu8; 32]], &program())
            .unwrap();
        assert!(!is_on_curve(addr.as_bytes()));
    }

    #[test]
    fn single_seed_byte_changes_address() {
        let mut wallet = [0x22u8; 32];
        let (a, _) = find_program_address(&[b"user", &wallet], &program()).unwrap();
        wallet[31] ^= 1;
        let (b, _) = find_program_address(&[b"user", &wallet], &program()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn different_programs_give_different_addresses() {
        let (a, _) = find_program_address(&[b"oracle"], &Pubkey::new([1u8; 32])).unwrap();
        let (b, _) = find_program_address(&[b"oracle"], &Pubkey::new([2u8; 32])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn seed_order_matters() {
        let x = [0x01u8; 32];
        let y = [0x02u8; 32];
        let (a, _) = find_program_address(&[&x, &y], &program()).unwrap();
        let (b, _) = find_program_address(&[&y, &x], &program()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn explicit_bump_matches_search() {
        let seeds: &[&[u8]] = &[b"withdraw", &[0x33u8; 32]];
        let (found, bump) = find_program_address(seeds, &program()).unwrap();
        let direct = try_create_program_address(seeds, bump, &program()).unwrap();
        assert_eq!(found, direct);
    }

    #[test]
    fn higher_bumps_than_found_are_on_curve() {
        // Every bump above the found one must have been rejected, i.e.
        // produced an on-curve candidate.
        let seeds: &[&[u8]] = &[b"collateral", &[0x44u8; 32], &[0x55u8; 32]];
        let (_, bump) = find_program_address(seeds, &program()).unwrap();
        for rejected in (bump as u16 + 1)..=255 {
            assert!(try_create_program_address(seeds, rejected as u8, &program()).is_none());
        }
    }

    #[test]
    fn is_on_curve_accepts_basepoint() {
        // The Ed25519 basepoint in compressed form.
        let basepoint: [u8; 32] = [
            0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66,
        ];
        assert!(is_on_curve(&basepoint));
    }

    #[test]
    fn is_on_curve_rejects_non_point() {
        // y = 0x0202...02 has no square root for the recovered x.
        assert!(!is_on_curve(&[0x02u8; 32]));
    }
}
