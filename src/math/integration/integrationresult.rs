/// 積分結果：近似值與估計的相對誤差
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntegrationResult {
    value: f64,
    error: f64
}

impl IntegrationResult {
    pub fn new(value: f64, error: f64) -> IntegrationResult {
        IntegrationResult { value, error }
    }

    pub fn zero() -> IntegrationResult {
        IntegrationResult { value: 0.0, error: 0.0 }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn error(&self) -> f64 {
        self.error
    }

    /// 呼叫端以此判斷是否信任結果；未收斂不會回報錯誤，只會反映在 `error`
    pub fn is_within(&self, tolerance: f64) -> bool {
        self.error <= tolerance
    }

    pub fn negate(self) -> IntegrationResult {
        IntegrationResult { value: -self.value, error: self.error }
    }
}

impl From<IntegrationResult> for (f64, f64) {
    fn from(result: IntegrationResult) -> (f64, f64) {
        (result.value, result.error)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negate_keeps_error() {
        let result = IntegrationResult::new(1.5, 1e-10).negate();
        assert_eq!(result.value(), -1.5);
        assert_eq!(result.error(), 1e-10);
    }

    #[test]
    fn tolerance_check_uses_error_estimate() {
        let result = IntegrationResult::new(3.0, 1e-8);
        assert!(result.is_within(1e-7));
        assert!(!result.is_within(1e-9));
        assert!(!IntegrationResult::new(0.0, f64::NAN).is_within(1.0));
    }

    #[test]
    fn converts_to_value_error_pair() {
        let pair: (f64, f64) = IntegrationResult::new(2.0, 0.5).into();
        assert_eq!(pair, (2.0, 0.5));
        assert_eq!(IntegrationResult::zero().value(), 0.0);
    }
}
