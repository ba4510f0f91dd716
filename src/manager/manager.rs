use std::cell::RefCell;
use std::collections::HashMap;

use log::debug;
use serde::Deserialize;

use super::managererror::ManagerError;

#[derive(Deserialize)]
struct NamedJsonObject {
    name: String
}


pub trait IManager<V> where 
    V: Clone {
    fn insert(&self, name: String, obj: V);

    fn lookup(&self, name: &str) -> Option<V>;

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError>;

    fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.lookup(name).ok_or_else(|| ManagerError::map_elem_not_found(name))
    }

    fn insert_obj_from_json_vec(&self, json_vec: &[serde_json::Value]) -> Result<(), ManagerError> {
        for j in json_vec.iter() {
            self.insert_obj_from_json(j.clone())?;
        }
        Ok(())
    }
}


/// 以名稱索引的物件表，物件由 JSON 建構
pub struct Manager<V> {
    map_cell: RefCell<HashMap<String, V>>,
    get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>
}

impl <V> Manager<V> where 
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<V, ManagerError>) -> Manager<V> {
        Manager { map_cell: RefCell::new(HashMap::new()), get_obj_from_json }
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map_cell.borrow().keys().cloned().collect();
        names.sort();
        names
    }
}

impl <V> IManager<V> for Manager<V> where 
    V: Clone {
    fn insert(&self, name: String, obj: V) {
        self.map_cell.borrow_mut().insert(name, obj);
    }

    fn lookup(&self, name: &str) -> Option<V> {
        self.map_cell.borrow().get(name).cloned()
    }

    fn insert_obj_from_json(&self, json_value: serde_json::Value) -> Result<(), ManagerError> {
        let named_object: NamedJsonObject = ManagerError::from_json_or_json_parse_error(json_value.clone())?;
        let v = (self.get_obj_from_json)(json_value)?;
        debug!("registered '{}'", named_object.name);
        self.insert(named_object.name, v);
        Ok(())
    }
}
