use crate::core::render::render_cells;
use crate::core::{Cell, CellType, ConfigProvider, Notebook, Pipeline, Storage, TransformResult};
use crate::utils::error::Result;

pub struct NotebookPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NotebookPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for NotebookPipeline<S, C> {
    fn extract(&self) -> Result<Vec<Cell>> {
        // 讀取筆記本檔案並解析 JSON
        tracing::debug!("Reading notebook from: {}", self.config.input_path());
        let data = self.storage.read_file(self.config.input_path())?;

        let notebook: Notebook = serde_json::from_slice(&data)?;
        tracing::debug!("Parsed notebook with {} cells", notebook.cells.len());

        let cells = notebook.cells.into_iter().map(Cell::from).collect();
        Ok(cells)
    }

    fn transform(&self, cells: Vec<Cell>) -> Result<TransformResult> {
        let cell_count = cells.len();
        let mut code_cells = 0;
        let mut markdown_cells = 0;
        let mut raw_cells = 0;

        for cell in &cells {
            match cell.cell_type {
                CellType::Code => code_cells += 1,
                CellType::Markdown => markdown_cells += 1,
                CellType::Raw => raw_cells += 1,
            }
        }

        let script = render_cells(&cells);

        tracing::debug!(
            "Rendered {} cells ({} code, {} markdown, {} raw) into {} bytes",
            cell_count,
            code_cells,
            markdown_cells,
            raw_cells,
            script.len()
        );

        Ok(TransformResult {
            script,
            cell_count,
            code_cells,
            markdown_cells,
            raw_cells,
        })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path().to_string();

        // 寫出結果；即使沒有任何儲存格也要建立輸出檔案
        tracing::debug!(
            "Writing script ({} bytes) to: {}",
            result.script.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.script.as_bytes())?;

        Ok(output_path)
    }
}
