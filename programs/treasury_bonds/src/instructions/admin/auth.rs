use super::*;

// Who may register bond issues is fixed at build time
#[cfg(feature = "admin-issuance")]
pub const ISSUANCE_POLICY: IssuancePolicy = IssuancePolicy::AdminOnly;

#[cfg(not(feature = "admin-issuance"))]
pub const ISSUANCE_POLICY: IssuancePolicy = IssuancePolicy::Open;

// Verify if a Pubkey is the registry admin
pub fn is_registry_admin(admin_registry: &AdminRegistry, key: &Pubkey) -> bool {
    admin_registry.is_admin(key)
}

// Verify if a signer owns an investor or bond record
pub fn is_record_owner(owner: &Pubkey, signer: &Pubkey) -> bool {
    owner != &Pubkey::default() && owner == signer
}
