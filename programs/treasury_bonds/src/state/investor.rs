use super::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct Investor {
    pub bump: u8,
    pub owner: Pubkey,
    #[max_len(50)]
    pub full_name: String,
    #[max_len(3)]
    pub country: String,
    pub active: bool,         // inactive investors cannot trade or redeem
    pub is_initialized: bool,
    pub registered_at: i64,
}

impl Investor {
    pub fn validate_details(full_name: &str, country: &str) -> Result<()> {
        let name_len = full_name.trim().as_bytes().len();
        if name_len == 0 || full_name.as_bytes().len() > FULL_NAME_MAX_LEN {
            msg!("Invalid investor full names: {} bytes", full_name.as_bytes().len());
            return err!(TreasuryBondsError::InvalidInvestorDetails);
        }
        if !COUNTRY_CODE_LENGTHS.contains(&country.as_bytes().len()) {
            msg!("Invalid investor country: {}", country);
            return err!(TreasuryBondsError::InvalidInvestorDetails);
        }
        Ok(())
    }

    pub fn initialize(
        &mut self,
        owner: Pubkey,
        full_name: &str,
        country: &str,
        bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(!self.is_initialized, TreasuryBondsError::DuplicateInvestor);

        self.bump = bump;
        self.owner = owner;
        self.full_name = full_name.to_string();
        self.country = country.to_string();
        self.active = true;
        self.is_initialized = true;
        self.registered_at = now;
        Ok(())
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn require_active(&self) -> Result<()> {
        require!(self.active, TreasuryBondsError::InvalidInvestorStatus);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_error, empty_investor};

    #[test]
    fn registered_investors_start_active() {
        let mut investor = empty_investor();
        let owner = Pubkey::new_unique();
        investor.initialize(owner, "Jane Wanjiru", "KEN", 254, 1_700_000_000).unwrap();

        assert_eq!(investor.owner, owner);
        assert_eq!(investor.full_name, "Jane Wanjiru");
        assert_eq!(investor.country, "KEN");
        assert_eq!(investor.registered_at, 1_700_000_000);
        investor.require_active().unwrap();
    }

    #[test]
    fn second_registration_keeps_first_details() {
        let mut investor = empty_investor();
        let owner = Pubkey::new_unique();
        investor.initialize(owner, "Jane Wanjiru", "KEN", 254, 1).unwrap();

        assert_error(
            investor.initialize(owner, "Someone Else", "UG", 254, 2),
            TreasuryBondsError::DuplicateInvestor,
        );
        assert_eq!(investor.full_name, "Jane Wanjiru");
        assert_eq!(investor.registered_at, 1);
    }

    #[test]
    fn details_are_validated() {
        Investor::validate_details("Jane Wanjiru", "KE").unwrap();
        Investor::validate_details(&"a".repeat(FULL_NAME_MAX_LEN), "KEN").unwrap();

        assert_error(Investor::validate_details("", "KEN"), TreasuryBondsError::InvalidInvestorDetails);
        assert_error(Investor::validate_details("   ", "KEN"), TreasuryBondsError::InvalidInvestorDetails);
        assert_error(
            Investor::validate_details(&"a".repeat(FULL_NAME_MAX_LEN + 1), "KEN"),
            TreasuryBondsError::InvalidInvestorDetails,
        );
        assert_error(Investor::validate_details("Jane", "K"), TreasuryBondsError::InvalidInvestorDetails);
        assert_error(Investor::validate_details("Jane", "KENY"), TreasuryBondsError::InvalidInvestorDetails);
    }

    #[test]
    fn deactivated_investors_are_rejected() {
        let mut investor = empty_investor();
        investor.initialize(Pubkey::new_unique(), "Jane", "KEN", 1, 1).unwrap();

        investor.set_active(false);
        assert_error(investor.require_active(), TreasuryBondsError::InvalidInvestorStatus);

        investor.set_active(true);
        investor.require_active().unwrap();
    }
}
