use crate::math::integration::integrand::Integrand;

// ─────────────────────────────────────────────────────────────────────────────
// EvaluationContext - 變數代換用的呼叫期間紀錄
// ─────────────────────────────────────────────────────────────────────────────
//
// 無窮區間先代換到 y ∈ (0, 1]，再交給只認得有限區間的 kernel。
// 代換後的被積分函數是一般函數（trampoline），context 以「不透明參數」
// 的身份傳入，內含原函數、原始端點與原始 data。
//
//   雙側無窮： x = (1-y)/y - y/(1-y),  dx/dy = 1/(1-y)² + 1/y²
//   上界無窮： x = 1/y - 1 + a,        dx/dy = 1/y²
//   下界無窮： x = 1/y - 1 - b,        dx/dy = 1/y²，於 -x 求值

pub struct EvaluationContext<'a, I, D> where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    integrand: &'a I,
    a: f64,
    b: f64,
    data: &'a D
}

impl <'a, I, D> EvaluationContext<'a, I, D> where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    pub fn new(integrand: &'a I, a: f64, b: f64, data: &'a D) -> EvaluationContext<'a, I, D> {
        EvaluationContext { integrand, a, b, data }
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    fn integrand_at(&self, x: f64) -> f64 {
        self.integrand.value(x, self.data)
    }
}

impl <'a, I, D> Clone for EvaluationContext<'a, I, D> where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    fn clone(&self) -> Self {
        *self
    }
}

impl <'a, I, D> Copy for EvaluationContext<'a, I, D> where
    I: Integrand<D> + ?Sized,
    D: ?Sized {}


pub fn doubly_infinite<I, D>(y: f64, context: &EvaluationContext<'_, I, D>) -> f64 where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    let z = 1.0 - y;
    let x = z / y - y / z;
    let dx = 1.0 / (z * z) + 1.0 / (y * y);
    context.integrand_at(x) * dx
}

pub fn upper_infinite<I, D>(y: f64, context: &EvaluationContext<'_, I, D>) -> f64 where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    let x = 1.0 / y - 1.0 + context.a;
    let dx = 1.0 / (y * y);
    context.integrand_at(x) * dx
}

pub fn lower_infinite<I, D>(y: f64, context: &EvaluationContext<'_, I, D>) -> f64 where
    I: Integrand<D> + ?Sized,
    D: ?Sized {
    let x = 1.0 / y - 1.0 - context.b;
    let dx = 1.0 / (y * y);
    context.integrand_at(-x) * dx
}
