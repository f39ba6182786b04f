use super::*;

pub mod auth;
pub mod init;
pub mod set_investor_status;

pub use auth::*;
pub use init::*;
pub use set_investor_status::*;
