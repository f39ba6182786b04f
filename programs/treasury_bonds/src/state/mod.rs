use super::*;

pub mod admin_registry;
pub mod bond_issue;
pub mod investor;
pub mod holding;

pub use admin_registry::*;
pub use bond_issue::*;
pub use investor::*;
pub use holding::*;
