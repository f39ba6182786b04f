use super::*;

pub mod escrow;
pub mod settlement;

pub use escrow::*;
pub use settlement::*;
