/// 被積分函數：以 (x, 不透明參數) 求值
///
/// `data` 由呼叫端擁有，積分器只負責原封不動地傳遞，不讀取也不修改。
pub trait Integrand<D: ?Sized> {
    fn value(&self, x: f64, data: &D) -> f64;
}

impl <D, F> Integrand<D> for F where 
    D: ?Sized,
    F: Fn(f64, &D) -> f64 + ?Sized {
    fn value(&self, x: f64, data: &D) -> f64 {
        self(x, data)
    }
}
