use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone)]
pub struct CreateTokenArgs {
    pub amount: u64,    // whole settlement tokens minted to the owner
}

#[event_cpi]
#[derive(Accounts)]
pub struct CreateToken<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        has_one = owner @ TreasuryBondsError::Unauthorized,
        constraint = !bond_issue.has_settlement_token() @ TreasuryBondsError::SettlementTokenAlreadyCreated,
    )]
    pub bond_issue: Box<Account<'info, BondIssue>>,

    /// CHECK: PDA that owns the escrow vault, never holds data
    #[account(
        seeds = [ESCROW_AUTHORITY_SEED, bond_issue.key().as_ref()],
        bump = bond_issue.escrow_authority_bump,
        address = bond_issue.escrow_authority @ TreasuryBondsError::InvalidEscrowAuthority,
    )]
    pub escrow_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = owner,
        seeds = [SETTLEMENT_MINT_SEED, bond_issue.key().as_ref()],
        bump,
        mint::decimals = bond_issue.decimals,
        mint::authority = owner,
        mint::token_program = token_program,
    )]
    pub settlement_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = settlement_mint,
        associated_token::authority = owner,
        associated_token::token_program = token_program,
    )]
    pub owner_token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = owner,
        seeds = [ESCROW_VAULT_SEED, bond_issue.key().as_ref()],
        bump,
        token::mint = settlement_mint,
        token::authority = escrow_authority,
        token::token_program = token_program,
    )]
    pub escrow_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl CreateToken<'_> {
    pub fn handler(ctx: Context<Self>, args: CreateTokenArgs) -> Result<()> {
        require!(args.amount > 0, TreasuryBondsError::InvalidAmount);

        let minted = to_base_units(args.amount, ctx.accounts.bond_issue.decimals)?;
        let settlement_mint = ctx.accounts.settlement_mint.key();
        let escrow_vault = ctx.accounts.escrow_vault.key();

        ctx.accounts
            .bond_issue
            .attach_settlement_token(settlement_mint, escrow_vault)?;

        token_interface::mint_to(
            CpiContext::new(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.settlement_mint.to_account_info(),
                    to: ctx.accounts.owner_token_account.to_account_info(),
                    authority: ctx.accounts.owner.to_account_info(),
                },
            ),
            minted,
        )?;

        let clock = Clock::get()?;
        emit_cpi!(SettlementTokenCreatedEvent {
            owner: ctx.accounts.owner.key(),
            bond_issue: ctx.accounts.bond_issue.key(),
            settlement_mint,
            escrow_vault,
            minted,
            timestamp: clock.unix_timestamp,
        });

        Ok(())
    }
}
