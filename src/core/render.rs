use crate::domain::model::{Cell, CellType};

/// Opens and closes the docstring regions markdown and raw cells are kept in.
const DOCSTRING: &str = "\"\"\"";

/// Render the whole cell sequence into one script. Cell numbers are 1-based
/// and follow input order, which is the execution order Zed reconstructs.
pub fn render_cells(cells: &[Cell]) -> String {
    let mut script = String::new();
    for (index, cell) in cells.iter().enumerate() {
        write_cell(&mut script, index + 1, cell);
    }
    script
}

/// 寫入單一儲存格：標記行、依類型格式化的內容、一個空行
pub fn write_cell(script: &mut String, cell_number: usize, cell: &Cell) {
    script.push_str(&format!("# %% Cell {}\n", cell_number));

    match cell.cell_type {
        CellType::Code => write_code_cell(script, &cell.content),
        CellType::Markdown => write_markdown_cell(script, &cell.content),
        CellType::Raw => write_raw_cell(script, &cell.content),
    }

    script.push('\n');
}

/// Code passes through verbatim. Empty content emits nothing, so an empty
/// code cell is just its marker line and the separator.
fn write_code_cell(script: &mut String, content: &str) {
    if content.is_empty() {
        return;
    }

    script.push_str(content);
    if !content.ends_with('\n') {
        script.push('\n');
    }
}

/// Markdown goes inside a docstring, fenced as a ```md block so tools that
/// scan the raw text still render it as markdown.
fn write_markdown_cell(script: &mut String, content: &str) {
    script.push_str(DOCSTRING);
    script.push('\n');
    script.push_str("```md\n");
    script.push_str(content);
    if !content.ends_with('\n') {
        script.push('\n');
    }
    script.push_str("```\n");
    script.push_str(DOCSTRING);
    script.push('\n');
}

/// Raw cells are preserved inside a bare docstring, with no markdown fence.
fn write_raw_cell(script: &mut String, content: &str) {
    script.push_str(DOCSTRING);
    script.push('\n');
    script.push_str(content);
    if !content.ends_with('\n') {
        script.push('\n');
    }
    script.push_str(DOCSTRING);
    script.push('\n');
}
