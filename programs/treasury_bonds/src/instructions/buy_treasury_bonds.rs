use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct BuyTreasuryBondsArgs {
    pub amount: u64,    // bond face value units
}

#[event_cpi]
#[derive(Accounts)]
pub struct BuyTreasuryBonds<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        constraint = is_record_owner(&investor.owner, &owner.key()) @ TreasuryBondsError::Unauthorized,
    )]
    pub investor: Box<Account<'info, Investor>>,

    #[account(mut)]
    pub bond_issue: Box<Account<'info, BondIssue>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + Holding::INIT_SPACE,
        seeds = [HOLDING_SEED, bond_issue.key().as_ref(), investor.key().as_ref()],
        bump
    )]
    pub holding: Box<Account<'info, Holding>>,

    #[account(
        address = bond_issue.settlement_mint @ TreasuryBondsError::InvalidSettlementMint,
    )]
    pub settlement_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = settlement_mint,
        token::authority = owner,
    )]
    pub investor_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        address = bond_issue.escrow_vault @ TreasuryBondsError::InvalidEscrowVault,
    )]
    pub escrow_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl BuyTreasuryBonds<'_> {
    pub fn handler(ctx: Context<Self>, args: BuyTreasuryBondsArgs) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.investor.require_active()?;

        let bond_issue_key = ctx.accounts.bond_issue.key();
        let investor_key = ctx.accounts.investor.key();
        ctx.accounts.holding.open_if_new(
            investor_key,
            ctx.accounts.owner.key(),
            bond_issue_key,
            ctx.bumps.holding,
        )?;

        let purchase = plan_purchase(
            &ctx.accounts.bond_issue,
            args.amount,
            ctx.accounts.investor_token_account.amount,
            clock.unix_timestamp,
        )?;

        token_interface::transfer_checked(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.investor_token_account.to_account_info(),
                    mint: ctx.accounts.settlement_mint.to_account_info(),
                    to: ctx.accounts.escrow_vault.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            purchase.payment,
            ctx.accounts.settlement_mint.decimals,
        )
        .map_err(|_| error!(TreasuryBondsError::PaymentFailed))?;

        apply_purchase(
            &mut ctx.accounts.bond_issue,
            &mut ctx.accounts.holding,
            &purchase,
        )?;

        emit_cpi!(TreasuryBondsPurchasedEvent {
            investor: investor_key,
            bond_issue: bond_issue_key,
            amount: purchase.amount,
            payment: purchase.payment,
            holding_amount: ctx.accounts.holding.amount,
            amount_sold: ctx.accounts.bond_issue.amount_sold,
            escrowed_value: ctx.accounts.bond_issue.escrowed_value,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
