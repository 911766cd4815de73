use serde::Deserialize;

/// The two integers a sum utility adds together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "[i64; 2]")]
pub struct SumOperands {
    pub a: i64,
    pub b: i64,
}

impl SumOperands {
    pub fn new(a: i64, b: i64) -> Self {
        Self { a, b }
    }

    /// Widened so that no pair of `i64` inputs can overflow.
    pub fn sum(&self) -> i128 {
        i128::from(self.a) + i128::from(self.b)
    }
}

impl From<[i64; 2]> for SumOperands {
    fn from([a, b]: [i64; 2]) -> Self {
        Self { a, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_without_overflow() {
        assert_eq!(SumOperands::new(5, 7).sum(), 12);
        assert_eq!(SumOperands::new(-3, 3).sum(), 0);
        assert_eq!(
            SumOperands::new(i64::MAX, i64::MAX).sum(),
            2 * i128::from(i64::MAX)
        );
    }

    #[test]
    fn deserializes_from_pair() {
        let ops: SumOperands = serde_json::from_str("[1, -2]").unwrap();
        assert_eq!(ops, SumOperands::new(1, -2));
        assert!(serde_json::from_str::<SumOperands>("[1, 2, 3]").is_err());
    }
}
