use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct TransferTokenArgs {
    pub amount: u64,    // whole settlement tokens
}

#[event_cpi]
#[derive(Accounts)]
pub struct TransferToken<'info> {
    pub authority: Signer<'info>,

    pub bond_issue: Box<Account<'info, BondIssue>>,

    #[account(
        address = bond_issue.settlement_mint @ TreasuryBondsError::InvalidSettlementMint,
    )]
    pub settlement_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        token::mint = settlement_mint,
        token::authority = authority,
    )]
    pub from: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = settlement_mint,
    )]
    pub to: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl TransferToken<'_> {
    pub fn handler(ctx: Context<Self>, args: TransferTokenArgs) -> Result<()> {
        require!(args.amount > 0, TreasuryBondsError::InvalidAmount);
        ctx.accounts.bond_issue.require_settlement_token()?;

        let decimals = ctx.accounts.settlement_mint.decimals;
        let value = to_base_units(args.amount, decimals)?;
        require!(
            ctx.accounts.from.amount >= value,
            TreasuryBondsError::PaymentFailed
        );

        token_interface::transfer_checked(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                TransferChecked {
                    from: ctx.accounts.from.to_account_info(),
                    mint: ctx.accounts.settlement_mint.to_account_info(),
                    to: ctx.accounts.to.to_account_info(),
                    authority: ctx.accounts.authority.to_account_info(),
                },
            ),
            value,
            decimals,
        )
        .map_err(|_| error!(TreasuryBondsError::PaymentFailed))?;

        let clock = Clock::get()?;
        emit_cpi!(SettlementTokenTransferredEvent {
            authority: ctx.accounts.authority.key(),
            bond_issue: ctx.accounts.bond_issue.key(),
            from: ctx.accounts.from.key(),
            to: ctx.accounts.to.key(),
            amount: value,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
