use log::debug;

use crate::math::integration::evaluationcontext::{
    doubly_infinite,
    lower_infinite,
    upper_infinite,
    EvaluationContext
};
use crate::math::integration::integrand::Integrand;
use crate::math::integration::integrationerror::IntegrationError;
use crate::math::integration::integrationresult::IntegrationResult;
use crate::math::integration::tanhsinhkernel::tanh_sinh;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalKind {
    Empty,
    Finite,
    DoublyInfinite,
    UpperInfinite,
    LowerInfinite
}

impl IntervalKind {
    /// 假設 a ≤ b 且兩者皆非 NaN
    pub fn classify(a: f64, b: f64) -> IntervalKind {
        if a == b {
            IntervalKind::Empty
        } else {
            match (a.is_finite(), b.is_finite()) {
                (true, true) => IntervalKind::Finite,
                (false, false) => IntervalKind::DoublyInfinite,
                (true, false) => IntervalKind::UpperInfinite,
                (false, true) => IntervalKind::LowerInfinite
            }
        }
    }
}

/// 計算 ∫_a^b f(x, data) dx，a、b 可為 ±∞，亦可 a > b（結果變號）。
///
/// `levels` 為最大細分層數（建議 6），`eps` 為相對誤差容忍度。
/// 未收斂不視為錯誤：回傳值中的 `error()` 即為估計的相對誤差，
/// 只有參數本身不合法時才回傳 `Err`。
pub fn integrate<I, D>(f: &I,
                       a: f64,
                       b: f64,
                       levels: u32,
                       eps: f64,
                       data: &D) -> Result<IntegrationResult, IntegrationError> where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    IntegrationError::check_tolerance(eps)?;
    IntegrationError::check_bounds(a, b)?;
    Ok(dispatch(f, a, b, levels, eps, data))
}

pub(crate) fn dispatch<I, D>(f: &I,
                             a: f64,
                             b: f64,
                             levels: u32,
                             eps: f64,
                             data: &D) -> IntegrationResult where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    let (lower, upper, flipped) = if b < a {
        (b, a, true)
    } else {
        (a, b, false)
    };
    let kind = IntervalKind::classify(lower, upper);
    debug!("integrating over [{}, {}] as {:?}{}", lower, upper, kind, if flipped { " (bounds swapped)" } else { "" });

    let result = match kind {
        IntervalKind::Empty => IntegrationResult::zero(),
        IntervalKind::Finite => tanh_sinh(f, lower, upper, levels, eps, data),
        IntervalKind::DoublyInfinite => {
            let context = EvaluationContext::new(f, lower, upper, data);
            tanh_sinh(&doubly_infinite::<I, D>, 0.0, 1.0, levels, eps, &context)
        },
        IntervalKind::UpperInfinite => {
            let context = EvaluationContext::new(f, lower, upper, data);
            tanh_sinh(&upper_infinite::<I, D>, 0.0, 1.0, levels, eps, &context)
        },
        IntervalKind::LowerInfinite => {
            let context = EvaluationContext::new(f, lower, upper, data);
            tanh_sinh(&lower_infinite::<I, D>, 0.0, 1.0, levels, eps, &context)
        }
    };

    if flipped {
        result.negate()
    } else {
        result
    }
}
