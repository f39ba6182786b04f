use super::*;

#[error_code]
pub enum TreasuryBondsError {
    // identity
    #[msg("Signer is not authorized for this record")]
    Unauthorized,

    // registry
    #[msg("Admin registry is already initialized")]
    AlreadyInitialized,
    #[msg("Admin registry has not been initialized")]
    RegistryNotInitialized,
    #[msg("A bond issue with this issuer and issue number already exists")]
    DuplicateIssue,
    #[msg("Invalid bond terms")]
    InvalidTerms,

    // investor
    #[msg("Investor is already registered")]
    DuplicateInvestor,
    #[msg("Invalid investor full names or country")]
    InvalidInvestorDetails,
    #[msg("Investor has no active status")]
    InvalidInvestorStatus,

    // settlement
    #[msg("Please enter a valid amount greater than zero")]
    InvalidAmount,
    #[msg("Amount is below the minimum bid amount")]
    BelowMinimumBid,
    #[msg("Insufficient bond holdings")]
    InsufficientHoldings,
    #[msg("Purchase would exceed the total amount offered")]
    SupplyExceeded,
    #[msg("Settlement payment could not be completed")]
    PaymentFailed,
    #[msg("Bond has not reached its redemption date")]
    NotYetMature,
    #[msg("Bond has matured and can no longer be traded")]
    BondMatured,
    #[msg("Escrow vault cannot fund this redemption")]
    VaultUnderfunded,
    #[msg("Buyer and seller must be different investors")]
    InvalidCounterparty,

    // accounts
    #[msg("Settlement token has not been created for this bond")]
    SettlementTokenNotCreated,
    #[msg("Settlement token already exists for this bond")]
    SettlementTokenAlreadyCreated,
    #[msg("Invalid settlement mint")]
    InvalidSettlementMint,
    #[msg("Invalid escrow authority")]
    InvalidEscrowAuthority,
    #[msg("Invalid escrow vault")]
    InvalidEscrowVault,
    #[msg("Holding does not belong to this investor and bond")]
    InvalidHolding,

    // arithmetic
    #[msg("Math Overflow Error")]
    MathOverflow,
}
