use super::*;

/// `10^decimals` for a settlement token precision.
pub fn decimal_factor(decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .ok_or_else(|| error!(TreasuryBondsError::MathOverflow))
}

/// Convert whole settlement tokens into base units of a mint with `decimals`.
pub fn to_base_units(amount: u64, decimals: u8) -> Result<u64> {
    amount.safe_mul(decimal_factor(decimals)?)
}

/// Value, in settlement base units, of `amount` bonds priced at `unit_cost`.
pub fn settlement_value(amount: u64, unit_cost: u64, decimals: u8) -> Result<u64> {
    to_base_units(amount.safe_mul(unit_cost)?, decimals)
}
