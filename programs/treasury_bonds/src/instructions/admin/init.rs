use super::*;

#[event_cpi]
#[derive(Accounts)]
pub struct Init<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    // Created on first call; a repeat call finds it initialized and fails
    #[account(
        init_if_needed,
        payer = admin,
        space = 8 + AdminRegistry::INIT_SPACE,
        seeds = [ADMIN_REGISTRY_SEED],
        bump
    )]
    pub admin_registry: Box<Account<'info, AdminRegistry>>,

    pub system_program: Program<'info, System>,
}

impl Init<'_> {
    pub fn handler(ctx: Context<Self>) -> Result<()> {
        let clock = Clock::get()?;
        let admin_registry = &mut ctx.accounts.admin_registry;

        admin_registry.initialize(
            ctx.accounts.admin.key(),
            ctx.bumps.admin_registry,
            clock.unix_timestamp,
        )?;

        emit_cpi!(AdminRegistryInitializedEvent {
            admin_owner: ctx.accounts.admin.key(),
            admin_registry: ctx.accounts.admin_registry.key(),
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
