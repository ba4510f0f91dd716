use serde::{
    de,
    Deserialize,
    Deserializer,
    Serialize
};

use crate::math::integration::integrand::Integrand;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrationresult::IntegrationResult;
use crate::math::integration::transformdispatcher::dispatch;

pub const DEFAULT_LEVELS: u32 = 6;

pub const DEFAULT_EPS: f64 = 1e-9;

#[derive(Deserialize)]
pub(crate) struct TanhSinhQuadratureJsonProp {
    #[serde(default = "default_levels")]
    levels: u32,
    #[serde(default = "default_eps")]
    eps: f64
}

impl TanhSinhQuadratureJsonProp {
    pub(crate) fn build(self) -> Result<TanhSinhQuadrature, IntegrationError> {
        TanhSinhQuadrature::new(self.levels, self.eps)
    }
}

fn default_levels() -> u32 {
    DEFAULT_LEVELS
}

fn default_eps() -> f64 {
    DEFAULT_EPS
}

/// 可重複使用的 tanh-sinh 積分器設定 {levels, eps}
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TanhSinhQuadrature {
    levels: u32,
    eps: f64
}

impl TanhSinhQuadrature {
    pub fn new(levels: u32, eps: f64) -> Result<TanhSinhQuadrature, IntegrationError> {
        IntegrationError::check_tolerance(eps)?;
        Ok(TanhSinhQuadrature { levels, eps })
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn integrate<I, D>(&self, 
                           f: &I, 
                           a: f64, 
                           b: f64, 
                           data: &D) -> Result<IntegrationResult, IntegrationError> where 
        I: Integrand<D> + ?Sized,
        D: ?Sized {
        IntegrationError::check_bounds(a, b)?;
        Ok(dispatch(f, a, b, self.levels, self.eps, data))
    }
}

impl Default for TanhSinhQuadrature {
    fn default() -> TanhSinhQuadrature {
        TanhSinhQuadrature { levels: DEFAULT_LEVELS, eps: DEFAULT_EPS }
    }
}

impl <'de> Deserialize<'de> for TanhSinhQuadrature {
    fn deserialize<De>(deserializer: De) -> Result<TanhSinhQuadrature, De::Error> where 
        De: Deserializer<'de> {
        let json_prop = TanhSinhQuadratureJsonProp::deserialize(deserializer)?;
        json_prop.build().map_err(de::Error::custom)
    }
}


#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn defaults_follow_recommended_settings() {
        let quadrature = TanhSinhQuadrature::default();
        assert_eq!(quadrature.levels(), 6);
        assert_eq!(quadrature.eps(), 1e-9);
    }

    #[test]
    fn rejects_non_positive_tolerance() {
        assert!(TanhSinhQuadrature::new(6, 0.0).is_err());
        assert!(TanhSinhQuadrature::new(6, f64::NAN).is_err());
        assert!(TanhSinhQuadrature::new(0, 1e-3).is_ok());
    }

    #[test]
    fn deserializes_with_validation() {
        let quadrature: TanhSinhQuadrature = serde_json::from_value(json!({"levels": 15, "eps": 1e-15})).unwrap();
        assert_eq!(quadrature, TanhSinhQuadrature::new(15, 1e-15).unwrap());

        let quadrature: TanhSinhQuadrature = serde_json::from_value(json!({})).unwrap();
        assert_eq!(quadrature, TanhSinhQuadrature::default());

        let error = serde_json::from_value::<TanhSinhQuadrature>(json!({"eps": -1.0})).unwrap_err();
        assert!(error.to_string().contains("strictly positive"));
    }

    #[test]
    fn serializes_its_settings() {
        let value = serde_json::to_value(TanhSinhQuadrature::default()).unwrap();
        assert_eq!(value, json!({"levels": 6, "eps": 1e-9}));
    }

    #[test]
    fn integrates_with_its_settings() {
        let quadrature = TanhSinhQuadrature::new(15, 1e-15).unwrap();
        let result = quadrature.integrate(&|x: f64, _: &()| (1.0 - x).powf(-0.8), 0.0, 1.0, &()).unwrap();
        assert_relative_eq!(result.value(), 4.997462936822409, max_relative = 1e-12);
        assert!(quadrature.integrate(&|x: f64, _: &()| x, f64::NAN, 1.0, &()).is_err());
    }
}
