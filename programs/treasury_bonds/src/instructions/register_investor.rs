use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct RegisterInvestorArgs {
    pub full_name: String,
    pub country: String,
}

#[event_cpi]
#[derive(Accounts)]
pub struct RegisterInvestor<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Investor::INIT_SPACE,
        seeds = [INVESTOR_SEED, owner.key().as_ref()],
        bump
    )]
    pub investor: Box<Account<'info, Investor>>,

    pub system_program: Program<'info, System>,
}

impl RegisterInvestor<'_> {
    pub fn validate(args: &RegisterInvestorArgs) -> Result<()> {
        Investor::validate_details(&args.full_name, &args.country)
    }

    pub fn handler(ctx: Context<Self>, args: RegisterInvestorArgs) -> Result<()> {
        let clock = Clock::get()?;
        let investor = &mut ctx.accounts.investor;

        investor.initialize(
            ctx.accounts.owner.key(),
            &args.full_name,
            &args.country,
            ctx.bumps.investor,
            clock.unix_timestamp,
        )?;

        emit_cpi!(InvestorRegisteredEvent {
            owner: ctx.accounts.owner.key(),
            investor: ctx.accounts.investor.key(),
            full_name: args.full_name,
            country: args.country,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
