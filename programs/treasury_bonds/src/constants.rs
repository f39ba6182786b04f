// PDA seeds
pub const ADMIN_REGISTRY_SEED: &[u8] = b"admin-registry";
pub const BOND_ISSUE_SEED: &[u8] = b"treasury-bonds";
pub const INVESTOR_SEED: &[u8] = b"investor";
pub const HOLDING_SEED: &[u8] = b"holding";
pub const ESCROW_AUTHORITY_SEED: &[u8] = b"escrow-auth";
pub const ESCROW_VAULT_SEED: &[u8] = b"escrow-vault";
pub const SETTLEMENT_MINT_SEED: &[u8] = b"settlement-mint";

// Bond issue terms
pub const ISSUER_NAME_MAX_LEN: usize = 30;
pub const ISSUE_NO_MAX_LEN: usize = 20;
pub const COUNTRY_CODE_LENGTHS: [usize; 2] = [2, 3];
pub const COUNTRY_CODE_MAX_LEN: usize = 3;
pub const MIN_TENOR_YEARS: u8 = 2;
pub const MAX_TENOR_YEARS: u8 = 30;
pub const MAX_COUPON_RATE_PERCENT: u8 = 100;
pub const MAX_DECIMALS: u8 = 9;

// Investor details
pub const FULL_NAME_MAX_LEN: usize = 50;

pub const BOND_TYPE_FIXED_COUPON: u8 = 1;
pub const BOND_TYPE_INFRASTRUCTURE: u8 = 2;
