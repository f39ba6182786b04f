use super::*;

/// Who may register new bond issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssuancePolicy {
    /// Any signer may register an issue of its own.
    Open,
    /// Only the registry admin may register issues.
    AdminOnly,
}

#[account]
#[derive(InitSpace, Debug)]
pub struct AdminRegistry {
    pub bump: u8,
    pub admin_owner: Pubkey,   // account permitted to approve issuance and manage investors
    pub is_initialized: bool,
    pub initialized_at: i64,
}

const_assert_eq!(AdminRegistry::INIT_SPACE, 42);

impl AdminRegistry {
    pub fn initialize(&mut self, admin_owner: Pubkey, bump: u8, now: i64) -> Result<()> {
        require!(!self.is_initialized, TreasuryBondsError::AlreadyInitialized);

        self.bump = bump;
        self.admin_owner = admin_owner;
        self.is_initialized = true;
        self.initialized_at = now;
        Ok(())
    }

    /// Reads the registry from an account that may not have been created yet.
    pub fn load(info: &AccountInfo) -> Result<Self> {
        if info.owner != &crate::ID || info.data_is_empty() {
            msg!("Admin registry {} has not been initialized", info.key);
            return err!(TreasuryBondsError::RegistryNotInitialized);
        }

        let data = info.try_borrow_data()?;
        AdminRegistry::try_deserialize(&mut &data[..])
    }

    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.is_initialized && self.admin_owner == *key
    }

    pub fn authorize_issuer(&self, issuer: &Pubkey, policy: IssuancePolicy) -> Result<()> {
        require!(self.is_initialized, TreasuryBondsError::RegistryNotInitialized);

        match policy {
            IssuancePolicy::Open => Ok(()),
            IssuancePolicy::AdminOnly => {
                require!(self.is_admin(issuer), TreasuryBondsError::Unauthorized);
                Ok(())
            }
        }
    }
}
