use log::{
    debug,
    trace
};

use crate::math::integration::integrand::Integrand;
use crate::math::integration::integrationresult::IntegrationResult;

// ─────────────────────────────────────────────────────────────────────────────
// Tanh-Sinh (double exponential) quadrature kernel
// ─────────────────────────────────────────────────────────────────────────────
//
// 只處理有限區間 [a, b]。以中點 c、半寬 d 改寫：
//
//   ∫_a^b f(x) dx = d · h · Σ_j w_j · [f(a + d·r_j) + f(b - d·r_j)]
//
// 其中 (t = exp(j·h))：
//   u = exp(1/t - t)         = exp(-2·sinh(j·h))
//   r = 2u / (1 + u)         = 1 - tanh(sinh(j·h))
//   w = (t + 1/t)·r / (1+u)  = cosh(j·h) / cosh(sinh(j·h))²
//
// 每一層 h 減半，只計算新增的奇數格點（第 k > 0 層步進 eh²）。
// 內層：項 |q| ≤ eps·|p| 時停止；外層：|v| ≤ tol·|s| 或超過 levels 時停止。

/// 判斷外層收斂時對 eps 的放大倍數
pub const CONVERGENCE_FUDGE: f64 = 10.0;

/// 計算相對誤差時對 |s| 的縮放倍數
pub const ERROR_FUDGE: f64 = 1.0;

fn finite_or(y: f64, previous: f64) -> f64 {
    if y.is_finite() { y } else { previous }
}

pub fn tanh_sinh<I, D>(f: &I,
                       a: f64,
                       b: f64,
                       levels: u32,
                       eps: f64,
                       data: &D) -> IntegrationResult where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    let tol = CONVERGENCE_FUDGE * eps;
    let c = (a + b) / 2.0;
    let d = (b - a) / 2.0;
    let mut s = finite_or(f.value(c, data), 0.0);
    let mut v;
    let mut h = 2.0;
    let mut k: u32 = 0;

    loop {
        let mut p = 0.0;
        let mut fp = 0.0;
        let mut fm = 0.0;
        h /= 2.0;
        let mut eh = f64::exp(h);
        let mut t = eh;
        if k > 0 {
            eh *= eh;
        }

        loop {
            let u = f64::exp(1.0 / t - t);
            let r = 2.0 * u / (1.0 + u);
            let w = (t + 1.0 / t) * r / (1.0 + u);
            let x = d * r;
            // 太接近端點時沿用上一個函數值
            if a + x > a {
                fp = finite_or(f.value(a + x, data), fp);
            }
            if b - x < b {
                fm = finite_or(f.value(b - x, data), fm);
            }
            let q = w * (fp + fm);
            p += q;
            t *= eh;
            if !(q.abs() > eps * p.abs()) {
                break;
            }
        }

        v = s - p;
        s += p;
        k += 1;
        trace!("tanh-sinh level {}: h = {:e}, partial = {:e}, delta = {:e}", k - 1, h, p, v);
        if !(v.abs() > tol * s.abs() && k <= levels) {
            break;
        }
    }

    let value = d * s * h;
    let error = v.abs() / (ERROR_FUDGE * s.abs() + eps);
    debug!("tanh-sinh on [{}, {}] stopped after {} level(s): value = {:e}, error = {:e}", a, b, k, value, error);
    IntegrationResult::new(value, error)
}
