use super::*;

pub mod admin;
pub mod register_treasury_bonds;
pub mod create_token;
pub mod transfer_token;
pub mod register_investor;
pub mod buy_treasury_bonds;
pub mod sell_treasury_bonds;
pub mod redeem_treasury_bonds;

pub use admin::*;
pub use register_treasury_bonds::*;
pub use create_token::*;
pub use transfer_token::*;
pub use register_investor::*;
pub use buy_treasury_bonds::*;
pub use sell_treasury_bonds::*;
pub use redeem_treasury_bonds::*;
