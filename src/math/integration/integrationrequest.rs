use crate::math::integration::integrand::Integrand;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrationresult::IntegrationResult;
use crate::math::integration::transformdispatcher::dispatch;

/// 一次積分所需的全部參數；建構時即檢查合法性，之後不可變更
pub struct IntegrationRequest<'d, D: ?Sized> {
    a: f64,
    b: f64,
    levels: u32,
    eps: f64,
    data: &'d D
}

impl <'d, D: ?Sized> IntegrationRequest<'d, D> {
    pub fn new(a: f64, 
               b: f64, 
               levels: u32, 
               eps: f64, 
               data: &'d D) -> Result<IntegrationRequest<'d, D>, IntegrationError> {
        IntegrationError::check_tolerance(eps)?;
        IntegrationError::check_bounds(a, b)?;
        Ok(IntegrationRequest { a, b, levels, eps, data })
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    pub fn eps(&self) -> f64 {
        self.eps
    }

    pub fn data(&self) -> &'d D {
        self.data
    }

    pub fn evaluate<I>(&self, f: &I) -> IntegrationResult where 
        I: Integrand<D> + ?Sized {
        dispatch(f, self.a, self.b, self.levels, self.eps, self.data)
    }
}
