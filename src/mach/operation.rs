use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Integer arithmetic
///
/// Every operation is checked. Results outside `i32` are an `OVERFLOW`.

pub struct Operation {}

impl Operation {
    pub fn multiply(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_mul(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    /// Truncates toward zero.
    pub fn divide(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_div(rhs) {
            Some(i) => Ok(i),
            None => {
                if rhs == 0 {
                    Err(error!(DivisionByZero))
                } else {
                    Err(error!(Overflow))
                }
            }
        }
    }

    pub fn sum(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_add(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }

    pub fn subtract(lhs: i32, rhs: i32) -> Result<i32> {
        match lhs.checked_sub(rhs) {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_divide_truncates_toward_zero() {
        assert_eq!(Operation::divide(7, 2), Ok(3));
        assert_eq!(Operation::divide(-7, 2), Ok(-3));
        assert_eq!(Operation::divide(7, -2), Ok(-3));
    }

    #[test]
    fn test_divide_errors() {
        assert_eq!(
            Operation::divide(1, 0).map_err(|e| e.code()),
            Err(ErrorCode::DivisionByZero)
        );
        assert_eq!(
            Operation::divide(i32::MIN, -1).map_err(|e| e.code()),
            Err(ErrorCode::Overflow)
        );
    }

    #[test]
    fn test_overflow() {
        assert!(Operation::sum(i32::MAX, 1).is_err());
        assert!(Operation::subtract(i32::MIN, 1).is_err());
        assert!(Operation::multiply(65536, 65536).is_err());
        assert_eq!(Operation::multiply(-3, 4), Ok(-12));
    }
}
