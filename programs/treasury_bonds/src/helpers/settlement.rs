use super::*;

/// Primary market purchase: investor pays the escrow vault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Purchase {
    pub amount: u64,
    pub payment: u64,
}

/// Secondary market trade: buyer pays the seller directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecondaryTrade {
    pub amount: u64,
    pub payment: u64,
}

/// Redemption at maturity: escrow vault pays the investor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redemption {
    pub amount: u64,
    pub payout: u64,
}

fn require_settleable(bond: &BondIssue, amount: u64) -> Result<()> {
    require!(amount > 0, TreasuryBondsError::InvalidAmount);
    bond.require_settlement_token()
}

pub fn plan_purchase(
    bond: &BondIssue,
    amount: u64,
    payer_balance: u64,
    now: i64,
) -> Result<Purchase> {
    require_settleable(bond, amount)?;
    match bond.phase(now) {
        BondPhase::Matured => return err!(TreasuryBondsError::BondMatured),
        BondPhase::FullySubscribed => return err!(TreasuryBondsError::SupplyExceeded),
        BondPhase::Offering => {}
    }
    require!(
        amount >= bond.minimum_bid_amount,
        TreasuryBondsError::BelowMinimumBid
    );
    require!(
        amount <= bond.remaining_supply(),
        TreasuryBondsError::SupplyExceeded
    );

    let payment = settlement_value(amount, bond.unit_cost, bond.decimals)?;
    require!(payer_balance >= payment, TreasuryBondsError::PaymentFailed);

    Ok(Purchase { amount, payment })
}

pub fn apply_purchase(bond: &mut BondIssue, holding: &mut Holding, purchase: &Purchase) -> Result<()> {
    let amount_sold = bond.amount_sold.safe_add(purchase.amount)?;
    let escrowed_value = bond.escrowed_value.safe_add(purchase.payment)?;
    holding.credit(purchase.amount)?;

    bond.amount_sold = amount_sold;
    bond.escrowed_value = escrowed_value;
    Ok(())
}

pub fn plan_secondary_trade(
    bond: &BondIssue,
    seller_holding: &Holding,
    buyer_holding: &Holding,
    amount: u64,
    buyer_balance: u64,
    now: i64,
) -> Result<SecondaryTrade> {
    require_settleable(bond, amount)?;
    require!(
        bond.phase(now) != BondPhase::Matured,
        TreasuryBondsError::BondMatured
    );
    require!(
        seller_holding.investor != buyer_holding.investor,
        TreasuryBondsError::InvalidCounterparty
    );
    require!(
        seller_holding.amount >= amount,
        TreasuryBondsError::InsufficientHoldings
    );

    let payment = settlement_value(amount, bond.unit_cost, bond.decimals)?;
    require!(buyer_balance >= payment, TreasuryBondsError::PaymentFailed);

    Ok(SecondaryTrade { amount, payment })
}

pub fn apply_secondary_trade(
    seller_holding: &mut Holding,
    buyer_holding: &mut Holding,
    trade: &SecondaryTrade,
) -> Result<()> {
    seller_holding.debit(trade.amount)?;
    buyer_holding.credit(trade.amount)
}

pub fn plan_redemption(
    bond: &BondIssue,
    holding: &Holding,
    amount: u64,
    vault_balance: u64,
    now: i64,
) -> Result<Redemption> {
    require_settleable(bond, amount)?;
    require!(
        bond.phase(now) == BondPhase::Matured,
        TreasuryBondsError::NotYetMature
    );
    require!(holding.amount >= amount, TreasuryBondsError::InsufficientHoldings);

    let payout = settlement_value(amount, bond.unit_cost, bond.decimals)?;
    if vault_balance < payout || bond.escrowed_value < payout {
        msg!(
            "Escrow underfunded: payout {}, vault balance {}, escrowed value {}",
            payout,
            vault_balance,
            bond.escrowed_value
        );
        return err!(TreasuryBondsError::VaultUnderfunded);
    }

    Ok(Redemption { amount, payout })
}

pub fn apply_redemption(bond: &mut BondIssue, holding: &mut Holding, redemption: &Redemption) -> Result<()> {
    let amount_sold = bond.amount_sold.safe_sub(redemption.amount)?;
    let escrowed_value = bond.escrowed_value.safe_sub(redemption.payout)?;
    holding.debit(redemption.amount)?;

    bond.amount_sold = amount_sold;
    bond.escrowed_value = escrowed_value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        assert_error, empty_bond_issue, empty_holding, holding_of, listed_bond, sample_terms,
        MATURITY, VALUE_DATE,
    };

    const TRADING: i64 = VALUE_DATE + 60;

    fn bond_of(total: u64, min_bid: u64) -> BondIssue {
        listed_bond(&BondTerms {
            total_amount_offered: total,
            minimum_bid_amount: min_bid,
            ..sample_terms()
        })
    }

    #[test]
    fn purchase_moves_supply_into_holding_and_escrow() {
        let mut bond = bond_of(100, 1);
        let mut holding = holding_of(Pubkey::new_unique(), 0);

        let purchase = plan_purchase(&bond, 40, u64::MAX, TRADING).unwrap();
        assert_eq!(purchase.payment, 4_000);

        apply_purchase(&mut bond, &mut holding, &purchase).unwrap();
        assert_eq!(bond.amount_sold, 40);
        assert_eq!(bond.escrowed_value, 4_000);
        assert_eq!(holding.amount, 40);
        assert_eq!(bond.phase(TRADING), BondPhase::Offering);
    }

    #[test]
    fn purchase_beyond_supply_is_rejected() {
        let mut bond = bond_of(100, 1);
        bond.amount_sold = 95;

        assert_error(
            plan_purchase(&bond, 10, u64::MAX, TRADING),
            TreasuryBondsError::SupplyExceeded,
        );
        assert_eq!(bond.amount_sold, 95);

        let mut holding = holding_of(Pubkey::new_unique(), 0);
        let purchase = plan_purchase(&bond, 5, u64::MAX, TRADING).unwrap();
        apply_purchase(&mut bond, &mut holding, &purchase).unwrap();
        assert_eq!(bond.phase(TRADING), BondPhase::FullySubscribed);
    }

    #[test]
    fn purchase_preconditions() {
        let bond = bond_of(100, 10);

        assert_error(plan_purchase(&bond, 0, u64::MAX, TRADING), TreasuryBondsError::InvalidAmount);
        assert_error(plan_purchase(&bond, 9, u64::MAX, TRADING), TreasuryBondsError::BelowMinimumBid);
        assert_error(plan_purchase(&bond, 10, u64::MAX, MATURITY), TreasuryBondsError::BondMatured);
        assert_error(plan_purchase(&bond, 10, 999, TRADING), TreasuryBondsError::PaymentFailed);
        plan_purchase(&bond, 10, 1_000, TRADING).unwrap();

        let mut unlisted = empty_bond_issue();
        unlisted.total_amount_offered = 100;
        unlisted.redemption_date = MATURITY;
        assert_error(
            plan_purchase(&unlisted, 10, u64::MAX, TRADING),
            TreasuryBondsError::SettlementTokenNotCreated,
        );
    }

    #[test]
    fn secondary_trade_conserves_supply() {
        let mut bond = bond_of(100, 1);
        let bond_key = Pubkey::new_unique();
        let mut seller = holding_of(bond_key, 0);
        let mut buyer = holding_of(bond_key, 0);

        let purchase = plan_purchase(&bond, 30, u64::MAX, TRADING).unwrap();
        apply_purchase(&mut bond, &mut seller, &purchase).unwrap();

        let trade = plan_secondary_trade(&bond, &seller, &buyer, 12, u64::MAX, TRADING).unwrap();
        assert_eq!(trade.payment, 1_200);
        apply_secondary_trade(&mut seller, &mut buyer, &trade).unwrap();

        assert_eq!(seller.amount, 18);
        assert_eq!(buyer.amount, 12);
        assert_eq!(bond.amount_sold, 30);
        assert_eq!(bond.escrowed_value, 3_000);
    }

    #[test]
    fn oversell_leaves_both_holdings_unchanged() {
        let bond = bond_of(100, 1);
        let bond_key = Pubkey::new_unique();
        let mut seller = holding_of(bond_key, 10);
        let mut buyer = holding_of(bond_key, 3);

        assert_error(
            plan_secondary_trade(&bond, &seller, &buyer, 20, u64::MAX, TRADING),
            TreasuryBondsError::InsufficientHoldings,
        );

        let forced = SecondaryTrade { amount: 20, payment: 2_000 };
        assert_error(
            apply_secondary_trade(&mut seller, &mut buyer, &forced),
            TreasuryBondsError::InsufficientHoldings,
        );
        assert_eq!(seller.amount, 10);
        assert_eq!(buyer.amount, 3);
    }

    #[test]
    fn secondary_trade_preconditions() {
        let bond = bond_of(100, 1);
        let bond_key = Pubkey::new_unique();
        let seller = holding_of(bond_key, 10);
        let buyer = holding_of(bond_key, 0);

        assert_error(
            plan_secondary_trade(&bond, &seller, &seller, 5, u64::MAX, TRADING),
            TreasuryBondsError::InvalidCounterparty,
        );
        assert_error(
            plan_secondary_trade(&bond, &seller, &buyer, 0, u64::MAX, TRADING),
            TreasuryBondsError::InvalidAmount,
        );
        assert_error(
            plan_secondary_trade(&bond, &seller, &buyer, 5, u64::MAX, MATURITY),
            TreasuryBondsError::BondMatured,
        );
        assert_error(
            plan_secondary_trade(&bond, &seller, &buyer, 5, 499, TRADING),
            TreasuryBondsError::PaymentFailed,
        );
    }

    #[test]
    fn redemption_before_maturity_is_rejected() {
        let mut bond = bond_of(100, 1);
        let mut holding = holding_of(Pubkey::new_unique(), 0);
        let purchase = plan_purchase(&bond, 10, u64::MAX, TRADING).unwrap();
        apply_purchase(&mut bond, &mut holding, &purchase).unwrap();

        assert_error(
            plan_redemption(&bond, &holding, 10, bond.escrowed_value, MATURITY - 1),
            TreasuryBondsError::NotYetMature,
        );
        assert_error(
            plan_redemption(&bond, &holding, 11, bond.escrowed_value, MATURITY),
            TreasuryBondsError::InsufficientHoldings,
        );
    }

    #[test]
    fn fully_subscribed_issue_rejects_purchases() {
        let mut bond = bond_of(100, 10);
        bond.amount_sold = 100;

        assert_eq!(bond.phase(TRADING), BondPhase::FullySubscribed);
        assert_error(
            plan_purchase(&bond, 10, u64::MAX, TRADING),
            TreasuryBondsError::SupplyExceeded,
        );
    }

    #[test]
    fn never_held_bonds_cannot_be_sold_or_redeemed() {
        let mut bond = bond_of(100, 1);
        let bond_key = Pubkey::new_unique();
        let mut buyer = holding_of(bond_key, 0);
        let purchase = plan_purchase(&bond, 10, u64::MAX, TRADING).unwrap();
        apply_purchase(&mut bond, &mut buyer, &purchase).unwrap();

        // a holding record created on the spot starts empty
        let mut fresh = empty_holding();
        fresh
            .open_if_new(Pubkey::new_unique(), Pubkey::new_unique(), bond_key, 252)
            .unwrap();

        assert_error(
            plan_secondary_trade(&bond, &fresh, &buyer, 5, u64::MAX, TRADING),
            TreasuryBondsError::InsufficientHoldings,
        );
        assert_error(
            plan_redemption(&bond, &fresh, 1, bond.escrowed_value, MATURITY),
            TreasuryBondsError::InsufficientHoldings,
        );
        assert_eq!(fresh.amount, 0);
        assert_eq!(buyer.amount, 10);
    }

    #[test]
    fn underfunded_vault_blocks_redemption() {
        let mut bond = bond_of(100, 1);
        let mut holding = holding_of(Pubkey::new_unique(), 0);
        let purchase = plan_purchase(&bond, 10, u64::MAX, TRADING).unwrap();
        apply_purchase(&mut bond, &mut holding, &purchase).unwrap();

        assert_error(
            plan_redemption(&bond, &holding, 10, 999, MATURITY),
            TreasuryBondsError::VaultUnderfunded,
        );

        bond.escrowed_value = 999;
        assert_error(
            plan_redemption(&bond, &holding, 10, 1_000, MATURITY),
            TreasuryBondsError::VaultUnderfunded,
        );
    }

    #[test]
    fn buy_then_redeem_restores_state() {
        let mut bond = bond_of(100, 1);
        let mut holding = holding_of(Pubkey::new_unique(), 0);

        let purchase = plan_purchase(&bond, 25, u64::MAX, TRADING).unwrap();
        apply_purchase(&mut bond, &mut holding, &purchase).unwrap();
        let vault_balance = purchase.payment;

        let redemption = plan_redemption(&bond, &holding, 25, vault_balance, MATURITY).unwrap();
        assert_eq!(redemption.payout, purchase.payment);
        apply_redemption(&mut bond, &mut holding, &redemption).unwrap();

        assert_eq!(holding.amount, 0);
        assert_eq!(bond.amount_sold, 0);
        assert_eq!(bond.escrowed_value, 0);
        assert_eq!(bond.phase(MATURITY), BondPhase::Matured);
    }

    #[test]
    fn holdings_always_sum_to_amount_sold() {
        let mut bond = bond_of(1_000, 1);
        let bond_key = Pubkey::new_unique();
        let mut holdings: Vec<Holding> = (0..4).map(|_| holding_of(bond_key, 0)).collect();
        let mut vault: u64 = 0;
        let mut seed: u64 = 0x2545_f491_4f6c_dd1d;

        for step in 0..400u32 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;

            let now = if step < 300 { TRADING } else { MATURITY };
            let a = (seed % 4) as usize;
            let b = ((seed >> 8) % 4) as usize;
            let amount = (seed >> 16) % 60;

            match (seed >> 32) % 3 {
                0 => {
                    if let Ok(p) = plan_purchase(&bond, amount, u64::MAX, now) {
                        apply_purchase(&mut bond, &mut holdings[a], &p).unwrap();
                        vault += p.payment;
                    }
                }
                1 if a != b => {
                    let (seller, buyer) = if a < b {
                        let (left, right) = holdings.split_at_mut(b);
                        (&mut left[a], &mut right[0])
                    } else {
                        let (left, right) = holdings.split_at_mut(a);
                        (&mut right[0], &mut left[b])
                    };
                    if let Ok(t) = plan_secondary_trade(&bond, seller, buyer, amount, u64::MAX, now) {
                        apply_secondary_trade(seller, buyer, &t).unwrap();
                    }
                }
                _ => {
                    if let Ok(r) = plan_redemption(&bond, &holdings[a], amount, vault, now) {
                        apply_redemption(&mut bond, &mut holdings[a], &r).unwrap();
                        vault -= r.payout;
                    }
                }
            }

            let held: u64 = holdings.iter().map(|h| h.amount).sum();
            assert_eq!(held, bond.amount_sold);
            assert!(bond.amount_sold <= bond.total_amount_offered);
            assert_eq!(vault, bond.escrowed_value);
        }
    }
}
