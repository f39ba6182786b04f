use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct RedeemTreasuryBondsArgs {
    pub amount: u64,    // bond face value units
}

#[event_cpi]
#[derive(Accounts)]
pub struct RedeemTreasuryBonds<'info> {
    // Pays for the holding record when the investor never held this bond
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

    /// CHECK: PDA signer for the escrow vault, matched against the bond record
    #[account(
        address = bond_issue.escrow_authority @ TreasuryBondsError::InvalidEscrowAuthority,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = bond_issue.escrow_vault @ TreasuryBondsError::InvalidEscrowVault,
    )]
    pub escrow_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = settlement_mint,
        token::authority = owner,
    )]
    pub investor_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl RedeemTreasuryBonds<'_> {
    pub fn handler(ctx: Context<Self>, args: RedeemTreasuryBondsArgs) -> Result<()> {
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

        let redemption = plan_redemption(
            &ctx.accounts.bond_issue,
            &ctx.accounts.holding,
            args.amount,
            ctx.accounts.escrow_vault.amount,
            clock.unix_timestamp,
        )?;

        let escrow = EscrowCapability::derive(bond_issue_key, &ctx.accounts.bond_issue)?;
        let escrow_seeds = escrow.seeds();
        let escrow_signer = &[&escrow_seeds[..]];

        token_interface::transfer_checked(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.escrow_vault.to_account_info(),
                    mint: ctx.accounts.settlement_mint.to_account_info(),
                    to: ctx.accounts.investor_token_account.to_account_info(),
                    authority: ctx.accounts.escrow_authority.to_account_info(),
                },
                escrow_signer,
            ),
            redemption.payout,
            ctx.accounts.settlement_mint.decimals,
        )
        .map_err(|_| error!(TreasuryBondsError::PaymentFailed))?;

        apply_redemption(
            &mut ctx.accounts.bond_issue,
            &mut ctx.accounts.holding,
            &redemption,
        )?;

        emit_cpi!(TreasuryBondsRedeemedEvent {
            investor: investor_key,
            bond_issue: bond_issue_key,
            amount: redemption.amount,
            payout: redemption.payout,
            holding_amount: ctx.accounts.holding.amount,
            amount_sold: ctx.accounts.bond_issue.amount_sold,
            escrowed_value: ctx.accounts.bond_issue.escrowed_value,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
