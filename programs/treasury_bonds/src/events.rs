use super::*;

#[event]
pub struct AdminRegistryInitializedEvent {
    pub admin_owner: Pubkey,
    pub admin_registry: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct InvestorStatusUpdatedEvent {
    pub admin_owner: Pubkey,
    pub investor: Pubkey,
    pub active: bool,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryBondsRegisteredEvent {
    pub owner: Pubkey,
    pub bond_issue: Pubkey,
    pub issuer_name: String,
    pub country: String,
    pub issue_no: String,
    pub bond_type: BondType,
    pub tenor_years: u8,
    pub coupon_rate_percent: u8,
    pub total_amount_offered: u64,
    pub minimum_bid_amount: u64,
    pub unit_cost: u64,
    pub decimals: u8,
    pub value_date: i64,
    pub redemption_date: i64,
    pub escrow_authority: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct SettlementTokenCreatedEvent {
    pub owner: Pubkey,
    pub bond_issue: Pubkey,
    pub settlement_mint: Pubkey,
    pub escrow_vault: Pubkey,
    pub minted: u64,
    pub timestamp: i64,
}

#[event]
pub struct SettlementTokenTransferredEvent {
    pub authority: Pubkey,
    pub bond_issue: Pubkey,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct InvestorRegisteredEvent {
    pub owner: Pubkey,
    pub investor: Pubkey,
    pub full_name: String,
    pub country: String,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryBondsPurchasedEvent {
    pub investor: Pubkey,
    pub bond_issue: Pubkey,
    pub amount: u64,
    pub payment: u64,
    pub holding_amount: u64,
    pub amount_sold: u64,
    pub escrowed_value: u64,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryBondsSoldEvent {
    pub seller: Pubkey,
    pub buyer: Pubkey,
    pub bond_issue: Pubkey,
    pub amount: u64,
    pub payment: u64,
    pub seller_holding_amount: u64,
    pub buyer_holding_amount: u64,
    pub timestamp: i64,
}

#[event]
pub struct TreasuryBondsRedeemedEvent {
    pub investor: Pubkey,
    pub bond_issue: Pubkey,
    pub amount: u64,
    pub payout: u64,
    pub holding_amount: u64,
    pub amount_sold: u64,
    pub escrowed_value: u64,
    pub timestamp: i64,
}
