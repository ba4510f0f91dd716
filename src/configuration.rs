use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::Deserialize;

use crate::manager::managererror::ManagerError;
use crate::manager::manager::{
    IManager, 
    Manager
};
use crate::math::integration::quadraturemanager::QuadratureManager;
use crate::math::integration::tanhsinhquadrature::TanhSinhQuadrature;


#[derive(Deserialize)]
struct ConfigurationJsonProp {
    #[serde(default)]
    quadrature: Vec<serde_json::Value>
}

pub struct Configuration {
    quadrature_manager: Manager<TanhSinhQuadrature>
}


impl Configuration {
    pub fn new() -> Configuration {
        Configuration {
            quadrature_manager: QuadratureManager::new()
        }
    }

    pub fn quadrature_manager(&self) -> &Manager<TanhSinhQuadrature> {
        &self.quadrature_manager
    }

    pub fn from_reader<P: AsRef<Path>>(&self, file_path: P) -> Result<(), ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_prop: ConfigurationJsonProp = serde_json::from_reader(reader)?;
        self.load(json_prop)
    }

    pub fn from_json_str(&self, json: &str) -> Result<(), ManagerError> {
        let json_prop: ConfigurationJsonProp = serde_json::from_str(json)?;
        self.load(json_prop)
    }

    fn load(&self, json_prop: ConfigurationJsonProp) -> Result<(), ManagerError> {
        self.quadrature_manager.insert_obj_from_json_vec(&json_prop.quadrature)
    }
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration::new()
    }
}
