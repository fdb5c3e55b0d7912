use crate::domain::model::{Cell, TransformResult};
use crate::utils::error::Result;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
}

pub trait Pipeline: Send + Sync {
    fn extract(&self) -> Result<Vec<Cell>>;
    fn transform(&self, cells: Vec<Cell>) -> Result<TransformResult>;
    fn load(&self, result: TransformResult) -> Result<String>;
}
