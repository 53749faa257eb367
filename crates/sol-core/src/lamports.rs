//! Exact fixed-point conversion between lamports and SOL.
//!
//! 1 SOL = 10^9 lamports. Conversions never round through binary floating
//! point: the decimal form is produced and consumed as a digit string, so
//! amounts survive the round trip exactly up to the full integer range.

use crate::error::CoreError;

/// Number of lamports in one SOL.
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

const DECIMALS: usize = 9;

/// Render a lamport amount as a decimal SOL string.
///
/// The sign is isolated, the absolute digit string is left-padded with
/// zeros to at least 10 digits, and the last 9 digits become the fractional
/// part: `lamports_to_sol(1_500_000_000) == "1.500000000"`.
pub fn lamports_to_sol(lamports: i128) -> String {
    let sign = if lamports < 0 { "-" } else { "" };
    let digits = format!("{:0>width$}", lamports.unsigned_abs(), width = DECIMALS + 1);
    let split = digits.len() - DECIMALS;
    format!("{sign}{}.{}", &digits[..split], &digits[split..])
}

/// Parse a decimal SOL string into lamports, exactly.
///
/// At most 9 fractional digits are accepted; excess precision is rejected
/// rather than silently rounded. Integer arithmetic only — no float
/// intermediate, so amounts with more than ~7 significant digits stay
/// exact.
pub fn sol_str_to_lamports(s: &str) -> Result<u64, CoreError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CoreError::InvalidAmount("empty amount".into()));
    }
    if s.starts_with('-') {
        return Err(CoreError::InvalidAmount(format!("negative amount: {s}")));
    }

    let (int_part, frac_part) = match s.split_once('.') {
        Some((i, f)) => (i, f),
        None => (s, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(CoreError::InvalidAmount(format!("malformed amount: {s}")));
    }
    if frac_part.len() > DECIMALS {
        return Err(CoreError::InvalidAmount(format!(
            "more than {DECIMALS} fractional digits: {s}"
        )));
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(CoreError::InvalidAmount(format!("malformed amount: {s}")));
    }

    let int_val: u128 = if int_part.is_empty() {
        0
    } else {
        int_part
            .parse()
            .map_err(|_| CoreError::InvalidAmount(format!("integer part overflow: {s}")))?
    };

    // Right-pad the fractional digits to a full 9-digit lamport remainder.
    let mut frac_digits = [b'0'; DECIMALS];
    frac_digits[..frac_part.len()].copy_from_slice(frac_part.as_bytes());
    let frac_val: u128 = frac_digits
        .iter()
        .fold(0u128, |acc, b| acc * 10 + (b - b'0') as u128);

    let total = int_val
        .checked_mul(LAMPORTS_PER_SOL as u128)
        .and_then(|v| v.checked_add(frac_val))
        .ok_or_else(|| CoreError::InvalidAmount(format!("amount overflow: {s}")))?;

    u64::try_from(total).map_err(|_| CoreError::InvalidAmount(format!("amount overflow: {s}")))
}

/// Convert a numeric SOL amount to lamports.
///
/// NaN, infinities and negative inputs all map to 0 so that blank or
/// garbage user-supplied fields degrade to "no amount" instead of an
/// error. The value is formatted with a fixed 9-digit fractional part and
/// parsed as a digit string, mirroring the exact path.
pub fn sol_to_lamports(amount: f64) -> u64 {
    if !amount.is_finite() || amount <= 0.0 {
        return 0;
    }
    sol_str_to_lamports(&format!("{amount:.9}")).unwrap_or(0)
}
