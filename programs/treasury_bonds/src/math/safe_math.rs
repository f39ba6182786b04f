use super::*;

/// Checked arithmetic that fails with [`TreasuryBondsError::MathOverflow`]
/// and logs where the overflow happened.
pub trait SafeMath<T>: Sized {
    fn safe_add(self, rhs: Self) -> Result<Self>;
    fn safe_sub(self, rhs: Self) -> Result<Self>;
    fn safe_mul(self, rhs: Self) -> Result<Self>;
    fn safe_div(self, rhs: Self) -> Result<Self>;
}

macro_rules! checked_impl {
    ($t:ty) => {
        impl SafeMath<$t> for $t {
            #[inline(always)]
            #[track_caller]
            fn safe_add(self, v: $t) -> Result<$t> {
                match self.checked_add(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(TreasuryBondsError::MathOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_sub(self, v: $t) -> Result<$t> {
                match self.checked_sub(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(TreasuryBondsError::MathOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_mul(self, v: $t) -> Result<$t> {
                match self.checked_mul(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(TreasuryBondsError::MathOverflow.into())
                    }
                }
            }

            #[inline(always)]
            #[track_caller]
            fn safe_div(self, v: $t) -> Result<$t> {
                match self.checked_div(v) {
                    Some(result) => Ok(result),
                    None => {
                        let caller = Location::caller();
                        msg!("Math error thrown at {}:{}", caller.file(), caller.line());
                        Err(TreasuryBondsError::MathOverflow.into())
                    }
                }
            }
        }
    };
}

checked_impl!(u8);
checked_impl!(u32);
checked_impl!(u64);
checked_impl!(u128);
checked_impl!(i64);
