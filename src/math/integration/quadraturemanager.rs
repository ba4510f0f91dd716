use crate::manager::manager::{
    IManager,
    Manager
};
use crate::manager::managererror::ManagerError;
use crate::math::integration::tanhsinhquadrature::{
    TanhSinhQuadrature,
    TanhSinhQuadratureJsonProp
};

pub const DEFAULT_QUADRATURE_NAME: &str = "Default";

fn get_quadrature_from_json(json_value: serde_json::Value) -> Result<TanhSinhQuadrature, ManagerError> {
    let json_prop: TanhSinhQuadratureJsonProp = ManagerError::from_json_or_json_parse_error(json_value)?;
    Ok(json_prop.build()?)
}


pub struct QuadratureManager;

impl QuadratureManager {
    /// 預先登錄 "Default"（levels = 6, eps = 1e-9）
    pub fn new() -> Manager<TanhSinhQuadrature> {
        let manager = Manager::new(get_quadrature_from_json);
        manager.insert(DEFAULT_QUADRATURE_NAME.to_owned(), TanhSinhQuadrature::default());
        manager
    }
}
