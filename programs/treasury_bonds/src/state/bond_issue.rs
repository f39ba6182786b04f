use super::*;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum BondType {
    FixedCoupon,
    Infrastructure,
}

impl TryFrom<u8> for BondType {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            BOND_TYPE_FIXED_COUPON => Ok(BondType::FixedCoupon),
            BOND_TYPE_INFRASTRUCTURE => Ok(BondType::Infrastructure),
            _ => {
                msg!("Invalid type of bond: {}", value);
                err!(TreasuryBondsError::InvalidTerms)
            }
        }
    }
}

/// Lifecycle phase of an issue, derived from the clock and the supply counters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BondPhase {
    Offering,
    FullySubscribed,
    Matured,
}

/// Terms supplied by the issuer when registering a bond issue.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct BondTerms {
    pub issuer_name: String,         // issues the bond for purchase eg Republic of Kenya
    pub country: String,             // home country where the bond is issued
    pub issue_no: String,            // issue number, unique per issuer
    pub bond_type: u8,               // 1 - Fixed coupon, 2 - Infrastructure
    pub tenor_years: u8,             // maturity period in years
    pub coupon_rate_percent: u8,     // coupon rate (%)
    pub total_amount_offered: u64,   // face value that may ever be outstanding
    pub minimum_bid_amount: u64,
    pub unit_cost: u64,              // settlement tokens per bond unit
    pub decimals: u8,                // decimals of the settlement token
    pub value_date: i64,
    pub redemption_date: i64,
}

fn require_term(valid: bool, field: &str) -> Result<()> {
    if !valid {
        msg!("Invalid bond terms: {}", field);
        return err!(TreasuryBondsError::InvalidTerms);
    }
    Ok(())
}

impl BondTerms {
    pub fn validate(&self) -> Result<BondType> {
        let issuer_len = self.issuer_name.as_bytes().len();
        require_term(issuer_len > 0 && issuer_len <= ISSUER_NAME_MAX_LEN, "issuer_name")?;
        require_term(
            COUNTRY_CODE_LENGTHS.contains(&self.country.as_bytes().len()),
            "country",
        )?;
        let issue_no_len = self.issue_no.as_bytes().len();
        require_term(issue_no_len > 0 && issue_no_len <= ISSUE_NO_MAX_LEN, "issue_no")?;

        let bond_type = BondType::try_from(self.bond_type)?;

        require_term(
            (MIN_TENOR_YEARS..=MAX_TENOR_YEARS).contains(&self.tenor_years),
            "tenor_years",
        )?;
        require_term(
            self.coupon_rate_percent > 0 && self.coupon_rate_percent <= MAX_COUPON_RATE_PERCENT,
            "coupon_rate_percent",
        )?;
        require_term(self.total_amount_offered > 0, "total_amount_offered")?;
        require_term(
            self.minimum_bid_amount > 0 && self.minimum_bid_amount <= self.total_amount_offered,
            "minimum_bid_amount",
        )?;
        require_term(self.unit_cost > 0, "unit_cost")?;
        require_term(
            self.decimals > 0 && self.decimals <= MAX_DECIMALS,
            "decimals",
        )?;
        require_term(self.redemption_date > self.value_date, "redemption_date")?;

        // every later trade is bounded by the full issue, so its value must fit
        require_term(
            settlement_value(self.total_amount_offered, self.unit_cost, self.decimals).is_ok(),
            "total_amount_offered",
        )?;

        Ok(bond_type)
    }

    /// Issue number bytes used in the bond PDA seeds. Capped so seed
    /// derivation cannot fail before `validate` rejects an oversized value.
    pub fn issue_seed(&self) -> &[u8] {
        let bytes = self.issue_no.as_bytes();
        &bytes[..bytes.len().min(ISSUE_NO_MAX_LEN)]
    }
}

#[account]
#[derive(InitSpace, Debug)]
pub struct BondIssue {
    pub bump: u8,
    pub owner: Pubkey,                // issuing authority
    #[max_len(30)]
    pub issuer_name: String,
    #[max_len(3)]
    pub country: String,
    #[max_len(20)]
    pub issue_no: String,
    pub bond_type: BondType,
    pub tenor_years: u8,
    pub coupon_rate_percent: u8,
    pub total_amount_offered: u64,
    pub amount_sold: u64,             // face value currently held by investors
    pub minimum_bid_amount: u64,
    pub unit_cost: u64,
    pub decimals: u8,
    pub value_date: i64,
    pub redemption_date: i64,
    pub escrow_authority: Pubkey,     // PDA that signs for the escrow vault
    pub escrow_authority_bump: u8,
    pub settlement_mint: Pubkey,      // set once by create_token
    pub escrow_vault: Pubkey,         // set once by create_token
    pub escrowed_value: u64,          // purchase proceeds minus redemption payouts, in base units
    pub is_initialized: bool,
    pub registered_at: i64,
}

impl BondIssue {
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        &mut self,
        owner: Pubkey,
        terms: &BondTerms,
        bond_type: BondType,
        escrow_authority: Pubkey,
        escrow_authority_bump: u8,
        bump: u8,
        now: i64,
    ) -> Result<()> {
        require!(!self.is_initialized, TreasuryBondsError::DuplicateIssue);

        self.bump = bump;
        self.owner = owner;
        self.issuer_name = terms.issuer_name.to_string();
        self.country = terms.country.to_string();
        self.issue_no = terms.issue_no.to_string();
        self.bond_type = bond_type;
        self.tenor_years = terms.tenor_years;
        self.coupon_rate_percent = terms.coupon_rate_percent;
        self.total_amount_offered = terms.total_amount_offered;
        self.amount_sold = 0;
        self.minimum_bid_amount = terms.minimum_bid_amount;
        self.unit_cost = terms.unit_cost;
        self.decimals = terms.decimals;
        self.value_date = terms.value_date;
        self.redemption_date = terms.redemption_date;
        self.escrow_authority = escrow_authority;
        self.escrow_authority_bump = escrow_authority_bump;
        self.settlement_mint = Pubkey::default();
        self.escrow_vault = Pubkey::default();
        self.escrowed_value = 0;
        self.is_initialized = true;
        self.registered_at = now;
        Ok(())
    }

    pub fn phase(&self, now: i64) -> BondPhase {
        if self.is_matured(now) {
            BondPhase::Matured
        } else if self.amount_sold == self.total_amount_offered {
            BondPhase::FullySubscribed
        } else {
            BondPhase::Offering
        }
    }

    pub fn is_matured(&self, now: i64) -> bool {
        now >= self.redemption_date
    }

    pub fn remaining_supply(&self) -> u64 {
        self.total_amount_offered.saturating_sub(self.amount_sold)
    }

    pub fn has_settlement_token(&self) -> bool {
        self.settlement_mint != Pubkey::default()
    }

    pub fn require_settlement_token(&self) -> Result<()> {
        require!(self.has_settlement_token(), TreasuryBondsError::SettlementTokenNotCreated);
        Ok(())
    }

    pub fn attach_settlement_token(&mut self, mint: Pubkey, escrow_vault: Pubkey) -> Result<()> {
        require!(
            !self.has_settlement_token(),
            TreasuryBondsError::SettlementTokenAlreadyCreated
        );
        self.settlement_mint = mint;
        self.escrow_vault = escrow_vault;
        Ok(())
    }
}
