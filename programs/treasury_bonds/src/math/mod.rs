use super::*;

pub mod safe_math;
pub mod conversion;

pub use safe_math::*;
pub use conversion::*;
