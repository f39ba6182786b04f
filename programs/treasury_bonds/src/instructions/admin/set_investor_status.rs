use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct SetInvestorStatusArgs {
    pub active: bool,
}

#[event_cpi]
#[derive(Accounts)]
pub struct SetInvestorStatus<'info> {
    pub admin: Signer<'info>,

    #[account(
        seeds = [ADMIN_REGISTRY_SEED],
        bump = admin_registry.bump,
        constraint = is_registry_admin(&admin_registry, &admin.key()) @ TreasuryBondsError::Unauthorized,
    )]
    pub admin_registry: Box<Account<'info, AdminRegistry>>,

    #[account(
        mut,
        seeds = [INVESTOR_SEED, investor.owner.as_ref()],
        bump = investor.bump,
    )]
    pub investor: Box<Account<'info, Investor>>,
}

impl SetInvestorStatus<'_> {
    pub fn handler(ctx: Context<Self>, args: SetInvestorStatusArgs) -> Result<()> {
        let investor = &mut ctx.accounts.investor;
        investor.set_active(args.active);

        let clock = Clock::get()?;
        emit_cpi!(InvestorStatusUpdatedEvent {
            admin_owner: ctx.accounts.admin.key(),
            investor: ctx.accounts.investor.key(),
            active: args.active,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
