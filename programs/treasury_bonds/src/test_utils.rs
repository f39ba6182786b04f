use super::*;
use std::fmt::Debug;

pub const VALUE_DATE: i64 = 1_700_000_000;
pub const MATURITY: i64 = VALUE_DATE + 2 * 365 * 24 * 60 * 60;

#[track_caller]
pub fn assert_error<T: Debug>(result: Result<T>, expected: TreasuryBondsError) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(err, anchor_lang::error::Error::from(expected)),
    }
}

pub fn empty_registry() -> AdminRegistry {
    AdminRegistry {
        bump: 0,
        admin_owner: Pubkey::default(),
        is_initialized: false,
        initialized_at: 0,
    }
}

/// 1_000 bonds at 1 token each, settled in a 2 decimal token.
pub fn sample_terms() -> BondTerms {
    BondTerms {
        issuer_name: "Republic of Kenya".to_string(),
        country: "KEN".to_string(),
        issue_no: "FXD1/2024/002".to_string(),
        bond_type: BOND_TYPE_FIXED_COUPON,
        tenor_years: 2,
        coupon_rate_percent: 16,
        total_amount_offered: 1_000,
        minimum_bid_amount: 10,
        unit_cost: 1,
        decimals: 2,
        value_date: VALUE_DATE,
        redemption_date: MATURITY,
    }
}

pub fn empty_bond_issue() -> BondIssue {
    BondIssue {
        bump: 0,
        owner: Pubkey::default(),
        issuer_name: String::new(),
        country: String::new(),
        issue_no: String::new(),
        bond_type: BondType::FixedCoupon,
        tenor_years: 0,
        coupon_rate_percent: 0,
        total_amount_offered: 0,
        amount_sold: 0,
        minimum_bid_amount: 0,
        unit_cost: 0,
        decimals: 0,
        value_date: 0,
        redemption_date: 0,
        escrow_authority: Pubkey::default(),
        escrow_authority_bump: 0,
        settlement_mint: Pubkey::default(),
        escrow_vault: Pubkey::default(),
        escrowed_value: 0,
        is_initialized: false,
        registered_at: 0,
    }
}

/// A registered bond built from `terms` with its settlement token attached.
pub fn listed_bond(terms: &BondTerms) -> BondIssue {
    let mut bond = empty_bond_issue();
    let bond_type = terms.validate().unwrap();
    bond.initialize(
        Pubkey::new_unique(),
        terms,
        bond_type,
        Pubkey::new_unique(),
        254,
        255,
        VALUE_DATE,
    )
    .unwrap();
    bond.attach_settlement_token(Pubkey::new_unique(), Pubkey::new_unique())
        .unwrap();
    bond
}

pub fn empty_investor() -> Investor {
    Investor {
        bump: 0,
        owner: Pubkey::default(),
        full_name: String::new(),
        country: String::new(),
        active: false,
        is_initialized: false,
        registered_at: 0,
    }
}

pub fn empty_holding() -> Holding {
    Holding {
        bump: 0,
        investor: Pubkey::default(),
        owner: Pubkey::default(),
        bond_issue: Pubkey::default(),
        amount: 0,
    }
}

/// A holding already bound to `bond_issue` with `amount` credited.
pub fn holding_of(bond_issue: Pubkey, amount: u64) -> Holding {
    let mut holding = empty_holding();
    holding
        .open_if_new(Pubkey::new_unique(), Pubkey::new_unique(), bond_issue, 250)
        .unwrap();
    holding.credit(amount).unwrap();
    holding
}
