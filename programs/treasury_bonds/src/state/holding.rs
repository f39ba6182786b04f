use super::*;

/// Face value of one bond issue held by one investor.
#[account]
#[derive(InitSpace, Debug)]
pub struct Holding {
    pub bump: u8,
    pub investor: Pubkey,
    pub owner: Pubkey,
    pub bond_issue: Pubkey,
    pub amount: u64,
}

const_assert_eq!(Holding::INIT_SPACE, 105);

impl Holding {
    /// Binds a freshly created holding to its investor and bond. Existing
    /// holdings must already carry the same binding.
    pub fn open_if_new(
        &mut self,
        investor: Pubkey,
        owner: Pubkey,
        bond_issue: Pubkey,
        bump: u8,
    ) -> Result<()> {
        if self.bond_issue == Pubkey::default() {
            self.bump = bump;
            self.investor = investor;
            self.owner = owner;
            self.bond_issue = bond_issue;
            self.amount = 0;
            return Ok(());
        }

        require!(
            self.investor == investor && self.owner == owner && self.bond_issue == bond_issue,
            TreasuryBondsError::InvalidHolding
        );
        Ok(())
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.amount = self.amount.safe_add(amount)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(self.amount >= amount, TreasuryBondsError::InsufficientHoldings);
        self.amount = self.amount.safe_sub(amount)?;
        Ok(())
    }
}
