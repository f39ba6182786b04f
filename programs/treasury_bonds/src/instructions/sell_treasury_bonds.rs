use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct SellTreasuryBondsArgs {
    pub amount: u64,    // bond face value units
}

#[event_cpi]
#[derive(Accounts)]
pub struct SellTreasuryBonds<'info> {
    // Each side pays for its own holding record when it does not exist yet
    #[account(mut)]
    pub seller: Signer<'info>,

    #[account(mut)]
    pub buyer: Signer<'info>,

    #[account(
        constraint = is_record_owner(&seller_investor.owner, &seller.key()) @ TreasuryBondsError::Unauthorized,
    )]
    pub seller_investor: Box<Account<'info, Investor>>,

    #[account(
        constraint = is_record_owner(&buyer_investor.owner, &buyer.key()) @ TreasuryBondsError::Unauthorized,
        constraint = buyer_investor.key() != seller_investor.key() @ TreasuryBondsError::InvalidCounterparty,
    )]
    pub buyer_investor: Box<Account<'info, Investor>>,

    // Read only, secondary trades never touch supply or escrow
    pub bond_issue: Box<Account<'info, BondIssue>>,

    #[account(
        init_if_needed,
        payer = seller,
        space = 8 + Holding::INIT_SPACE,
        seeds = [HOLDING_SEED, bond_issue.key().as_ref(), seller_investor.key().as_ref()],
        bump
    )]
    pub seller_holding: Box<Account<'info, Holding>>,

    #[account(
        init_if_needed,
        payer = buyer,
        space = 8 + Holding::INIT_SPACE,
        seeds = [HOLDING_SEED, bond_issue.key().as_ref(), buyer_investor.key().as_ref()],
        bump
    )]
    pub buyer_holding: Box<Account<'info, Holding>>,

    #[account(
        address = bond_issue.settlement_mint @ TreasuryBondsError::InvalidSettlementMint,
    )]
    pub settlement_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = settlement_mint,
        token::authority = buyer,
    )]
    pub buyer_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = settlement_mint,
        token::authority = seller,
    )]
    pub seller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl SellTreasuryBonds<'_> {
    pub fn handler(ctx: Context<Self>, args: SellTreasuryBondsArgs) -> Result<()> {
        let clock = Clock::get()?;
        ctx.accounts.seller_investor.require_active()?;
        ctx.accounts.buyer_investor.require_active()?;

        let bond_issue_key = ctx.accounts.bond_issue.key();
        let seller_investor_key = ctx.accounts.seller_investor.key();
        let buyer_investor_key = ctx.accounts.buyer_investor.key();
        ctx.accounts.seller_holding.open_if_new(
            seller_investor_key,
            ctx.accounts.seller.key(),
            bond_issue_key,
            ctx.bumps.seller_holding,
        )?;
        ctx.accounts.buyer_holding.open_if_new(
            buyer_investor_key,
            ctx.accounts.buyer.key(),
            bond_issue_key,
            ctx.bumps.buyer_holding,
        )?;

        let trade = plan_secondary_trade(
            &ctx.accounts.bond_issue,
            &ctx.accounts.seller_holding,
            &ctx.accounts.buyer_holding,
            args.amount,
            ctx.accounts.buyer_token_account.amount,
            clock.unix_timestamp,
        )?;

        token_interface::transfer_checked(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.buyer_token_account.to_account_info(),
                    mint: ctx.accounts.settlement_mint.to_account_info(),
                    to: ctx.accounts.seller_token_account.to_account_info(),
                    authority: ctx.accounts.buyer.to_account_info(),
                },
            ),
            trade.payment,
            ctx.accounts.settlement_mint.decimals,
        )
        .map_err(|_| error!(TreasuryBondsError::PaymentFailed))?;

        apply_secondary_trade(
            &mut ctx.accounts.seller_holding,
            &mut ctx.accounts.buyer_holding,
            &trade,
        )?;

        emit_cpi!(TreasuryBondsSoldEvent {
            seller: seller_investor_key,
            buyer: buyer_investor_key,
            bond_issue: bond_issue_key,
            amount: trade.amount,
            payment: trade.payment,
            seller_holding_amount: ctx.accounts.seller_holding.amount,
            buyer_holding_amount: ctx.accounts.buyer_holding.amount,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
