pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig};
pub use core::{engine::convert, engine::ConvertEngine, pipeline::NotebookPipeline};
pub use domain::model::{Cell, CellType, Notebook, TransformResult};
pub use utils::error::{ConvertError, Result};
