use super::*;

#[event_cpi]
#[derive(Accounts)]
#[instruction(terms: BondTerms)]
pub struct RegisterTreasuryBonds<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: may not exist yet, read through `AdminRegistry::load` in `validate`
    #[account(
        seeds = [ADMIN_REGISTRY_SEED],
        bump,
    )]
    pub admin_registry: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + BondIssue::INIT_SPACE,
        seeds = [BOND_ISSUE_SEED, owner.key().as_ref(), terms.issue_seed()],
        bump
    )]
    pub bond_issue: Box<Account<'info, BondIssue>>,

    pub system_program: Program<'info, System>,
}

impl RegisterTreasuryBonds<'_> {
    pub fn validate(&self, terms: &BondTerms) -> Result<()> {
        AdminRegistry::load(&self.admin_registry)?
            .authorize_issuer(&self.owner.key(), ISSUANCE_POLICY)?;
        terms.validate()?;

        Ok(())
    }

    pub fn handler(ctx: Context<Self>, terms: BondTerms) -> Result<()> {
        let bond_type = terms.validate()?;
        let clock = Clock::get()?;

        let bond_issue_key = ctx.accounts.bond_issue.key();
        let (escrow_authority, escrow_authority_bump) = find_escrow_authority(&bond_issue_key);

        let bond_issue = &mut ctx.accounts.bond_issue;
        bond_issue.initialize(
            ctx.accounts.owner.key(),
            &terms,
            bond_type,
            escrow_authority,
            escrow_authority_bump,
            ctx.bumps.bond_issue,
            clock.unix_timestamp,
        )?;

        msg!(
            "Registered {} issue {} ({} offered)",
            terms.issuer_name,
            terms.issue_no,
            terms.total_amount_offered
        );

        emit_cpi!(TreasuryBondsRegisteredEvent {
            owner: ctx.accounts.owner.key(),
            bond_issue: bond_issue_key,
            issuer_name: terms.issuer_name,
            country: terms.country,
            issue_no: terms.issue_no,
            bond_type,
            tenor_years: terms.tenor_years,
            coupon_rate_percent: terms.coupon_rate_percent,
            total_amount_offered: terms.total_amount_offered,
            minimum_bid_amount: terms.minimum_bid_amount,
            unit_cost: terms.unit_cost,
            decimals: terms.decimals,
            value_date: terms.value_date,
            redemption_date: terms.redemption_date,
            escrow_authority,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
