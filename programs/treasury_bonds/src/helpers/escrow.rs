use super::*;

/// Signing capability for a bond's escrow vault.
///
/// Only this crate can build one, and only for the escrow authority recorded
/// on the bond issue, so vault outflows cannot be signed for any other PDA.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscrowCapability {
    bond_issue: Pubkey,
    bump: [u8; 1],
}

impl EscrowCapability {
    pub(crate) fn derive(bond_issue: Pubkey, bond: &BondIssue) -> Result<Self> {
        let bump = [bond.escrow_authority_bump];
        let authority = Pubkey::create_program_address(
            &[ESCROW_AUTHORITY_SEED, bond_issue.as_ref(), &bump],
            &crate::ID,
        )
        .map_err(|_| error!(TreasuryBondsError::InvalidEscrowAuthority))?;

        require_keys_eq!(
            authority,
            bond.escrow_authority,
            TreasuryBondsError::InvalidEscrowAuthority
        );

        Ok(Self { bond_issue, bump })
    }

    pub fn seeds(&self) -> [&[u8]; 3] {
        [ESCROW_AUTHORITY_SEED, self.bond_issue.as_ref(), &self.bump]
    }
}

pub fn find_escrow_authority(bond_issue: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[ESCROW_AUTHORITY_SEED, bond_issue.as_ref()], &crate::ID)
}
