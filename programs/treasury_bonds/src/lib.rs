use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        self,
        Mint,
        MintTo,
        TokenAccount,
        TokenInterface,
        TransferChecked,
    },
};
use std::panic::Location;
use static_assertions::const_assert_eq;

pub mod error;
pub mod instructions;
pub mod state;
pub mod helpers;
pub mod events;
pub mod constants;
pub mod math;

#[cfg(test)]
mod test_utils;

pub use error::TreasuryBondsError;
pub use instructions::*;
pub use state::*;
pub use helpers::*;
pub use events::*;
pub use constants::*;
pub use math::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "treasury_bonds",
    project_url: "https://github.com/treasury-bonds/treasury_bonds",
    contacts: "email:security@treasury-bonds.dev",
    policy: "Please report vulnerabilities privately before disclosure.",
    source_code: "https://github.com/treasury-bonds/treasury_bonds",
    source_release: "v0.1.0",
    auditors: "None for now"
}

declare_id!("7EzeMYFy3nrsfLFvBBTZ3NCndKuSkmYHW4Fd2nGDB9uX");

#[program]
pub mod treasury_bonds {
    use super::*;

    // admin instructions
    pub fn init(ctx: Context<Init>) -> Result<()> {
        Init::handler(ctx)
    }

    pub fn set_investor_status(
        ctx: Context<SetInvestorStatus>,
        args: SetInvestorStatusArgs,
    ) -> Result<()> {
        SetInvestorStatus::handler(ctx, args)
    }

    // issuer instructions
    #[access_control(RegisterTreasuryBonds::validate(&ctx.accounts, &terms))]
    pub fn register_treasury_bonds(
        ctx: Context<RegisterTreasuryBonds>,
        terms: BondTerms,
    ) -> Result<()> {
        RegisterTreasuryBonds::handler(ctx, terms)
    }

    pub fn create_token(ctx: Context<CreateToken>, args: CreateTokenArgs) -> Result<()> {
        CreateToken::handler(ctx, args)
    }

    pub fn transfer_token(ctx: Context<TransferToken>, args: TransferTokenArgs) -> Result<()> {
        TransferToken::handler(ctx, args)
    }

    // investor instructions
    #[access_control(RegisterInvestor::validate(&args))]
    pub fn register_investor(
        ctx: Context<RegisterInvestor>,
        args: RegisterInvestorArgs,
    ) -> Result<()> {
        RegisterInvestor::handler(ctx, args)
    }

    pub fn buy_treasury_bonds(
        ctx: Context<BuyTreasuryBonds>,
        args: BuyTreasuryBondsArgs,
    ) -> Result<()> {
        BuyTreasuryBonds::handler(ctx, args)
    }

    pub fn sell_treasury_bonds(
        ctx: Context<SellTreasuryBonds>,
        args: SellTreasuryBondsArgs,
    ) -> Result<()> {
        SellTreasuryBonds::handler(ctx, args)
    }

    pub fn redeem_treasury_bonds(
        ctx: Context<RedeemTreasuryBonds>,
        args: RedeemTreasuryBondsArgs,
    ) -> Result<()> {
        RedeemTreasuryBonds::handler(ctx, args)
    }
}
