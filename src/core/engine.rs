use crate::config::cli::LocalStorage;
use crate::config::CliConfig;
use crate::core::pipeline::NotebookPipeline;
use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<String> {
        // Extract
        let cells = self.pipeline.extract()?;
        tracing::info!("Extracted {} cells", cells.len());

        // Transform
        let result = self.pipeline.transform(cells)?;
        tracing::info!(
            "Formatted {} cells ({} code, {} markdown, {} raw)",
            result.cell_count,
            result.code_cells,
            result.markdown_cells,
            result.raw_cells
        );

        // Load
        let output_path = self.pipeline.load(result)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}

/// Top-level conversion boundary. Every failure is intercepted here, turned
/// into a stderr diagnostic and a `false` return; nothing propagates further.
pub fn convert(input: &str, output: &str) -> bool {
    let config = CliConfig::new(input.to_string(), output.to_string());
    let storage = LocalStorage::new();
    let pipeline = NotebookPipeline::new(storage, config);
    let engine = ConvertEngine::new(pipeline);

    match engine.run() {
        Ok(_) => {
            println!("Conversion completed: {} → {}", input, output);
            true
        }
        Err(e) => {
            tracing::error!("❌ Conversion failed: {}", e);
            if e.is_expected() {
                eprintln!("Error during conversion: {}", e);
            } else {
                eprintln!("Unexpected error: {}", e);
            }
            false
        }
    }
}
