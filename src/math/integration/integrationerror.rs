use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IntegrationError {
    #[error("relative tolerance must be finite and strictly positive, got {0}")]
    NonPositiveTolerance(f64),
    #[error("integration bound is NaN: [{a}, {b}]")]
    NanBound {
        a: f64,
        b: f64
    }
}

impl IntegrationError {
    pub fn check_tolerance(eps: f64) -> Result<(), IntegrationError> {
        if eps.is_finite() && eps > 0.0 {
            Ok(())
        } else {
            Err(IntegrationError::NonPositiveTolerance(eps))
        }
    }

    pub fn check_bounds(a: f64, b: f64) -> Result<(), IntegrationError> {
        if a.is_nan() || b.is_nan() {
            Err(IntegrationError::NanBound { a, b })
        } else {
            Ok(())
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tolerance_must_be_positive_and_finite() {
        assert!(IntegrationError::check_tolerance(1e-9).is_ok());
        assert_eq!(IntegrationError::check_tolerance(0.0), Err(IntegrationError::NonPositiveTolerance(0.0)));
        assert!(IntegrationError::check_tolerance(-1e-9).is_err());
        assert!(IntegrationError::check_tolerance(f64::INFINITY).is_err());
        assert!(IntegrationError::check_tolerance(f64::NAN).is_err());
    }

    #[test]
    fn infinite_bounds_are_accepted_nan_is_not() {
        assert!(IntegrationError::check_bounds(f64::NEG_INFINITY, f64::INFINITY).is_ok());
        assert!(IntegrationError::check_bounds(f64::NAN, 1.0).is_err());
        assert!(IntegrationError::check_bounds(0.0, f64::NAN).is_err());
    }

    #[test]
    fn messages_name_the_offending_value() {
        let message = IntegrationError::NonPositiveTolerance(-2.0).to_string();
        assert!(message.contains("-2"));
        let message = IntegrationError::NanBound { a: 0.0, b: f64::NAN }.to_string();
        assert!(message.contains("NaN"));
    }
}
