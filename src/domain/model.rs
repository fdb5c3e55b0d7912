use serde::Deserialize;

/// Type tag of a notebook cell. Anything outside the three known tags is
/// folded to `Code` at parse time, so downstream dispatch stays a closed
/// three-way match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum CellType {
    #[default]
    Code,
    Markdown,
    Raw,
}

impl From<String> for CellType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "markdown" => Self::Markdown,
            "raw" => Self::Raw,
            _ => Self::Code,
        }
    }
}

impl std::fmt::Display for CellType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Code => "code",
            Self::Markdown => "markdown",
            Self::Raw => "raw",
        };
        write!(f, "{s}")
    }
}

/// Cell source as stored on disk: either a sequence of line fragments or a
/// single scalar string. Fragments carry their own line terminators.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SourceText {
    Fragments(Vec<String>),
    Text(String),
}

impl Default for SourceText {
    fn default() -> Self {
        Self::Fragments(Vec::new())
    }
}

impl SourceText {
    /// 直接串接片段，不插入任何分隔符
    pub fn concat(&self) -> String {
        match self {
            Self::Fragments(parts) => parts.concat(),
            Self::Text(text) => text.clone(),
        }
    }
}

/// One cell as it appears in the notebook JSON. Only the two consumed fields
/// are declared; everything else (metadata, outputs, execution counts) is
/// ignored by serde and thereby dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookCell {
    #[serde(default)]
    pub cell_type: CellType,
    #[serde(default)]
    pub source: SourceText,
}

/// The parsed notebook document. A missing `cells` field is an empty
/// notebook, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Notebook {
    #[serde(default)]
    pub cells: Vec<NotebookCell>,
}

/// One cell after extraction: type tag plus the already-joined source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub cell_type: CellType,
    pub content: String,
}

impl From<NotebookCell> for Cell {
    fn from(cell: NotebookCell) -> Self {
        Self {
            cell_type: cell.cell_type,
            content: cell.source.concat(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub script: String,
    pub cell_count: usize,
    pub code_cells: usize,
    pub markdown_cells: usize,
    pub raw_cells: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_type_known_tags() {
        assert_eq!(CellType::from("code".to_string()), CellType::Code);
        assert_eq!(CellType::from("markdown".to_string()), CellType::Markdown);
        assert_eq!(CellType::from("raw".to_string()), CellType::Raw);
    }

    #[test]
    fn test_cell_type_unknown_tag_defaults_to_code() {
        assert_eq!(CellType::from("unknown".to_string()), CellType::Code);
        assert_eq!(CellType::from("".to_string()), CellType::Code);
        assert_eq!(CellType::from("Markdown".to_string()), CellType::Code);
    }

    #[test]
    fn test_cell_type_display() {
        assert_eq!(CellType::Code.to_string(), "code");
        assert_eq!(CellType::Markdown.to_string(), "markdown");
        assert_eq!(CellType::Raw.to_string(), "raw");
    }

    #[test]
    fn test_source_concat_no_separator_inserted() {
        let source = SourceText::Fragments(vec![
            "line one\n".to_string(),
            "line two\n".to_string(),
            "line three".to_string(),
        ]);
        assert_eq!(source.concat(), "line one\nline two\nline three");
    }

    #[test]
    fn test_source_scalar_string_passes_through() {
        let source = SourceText::Text("x = 1\ny = 2\n".to_string());
        assert_eq!(source.concat(), "x = 1\ny = 2\n");
    }

    #[test]
    fn test_notebook_missing_cells_field() {
        let notebook: Notebook = serde_json::from_str("{}").unwrap();
        assert!(notebook.cells.is_empty());
    }

    #[test]
    fn test_cell_missing_type_and_source() {
        let cell: NotebookCell = serde_json::from_str("{}").unwrap();
        assert_eq!(cell.cell_type, CellType::Code);
        assert_eq!(cell.source.concat(), "");
    }

    #[test]
    fn test_cell_extra_fields_ignored() {
        let json = r#"{
            "cell_type": "code",
            "execution_count": 3,
            "metadata": {"collapsed": true},
            "outputs": [{"output_type": "stream", "text": ["hi\n"]}],
            "source": ["print(1)\n"]
        }"#;
        let cell: Cell = serde_json::from_str::<NotebookCell>(json).unwrap().into();
        assert_eq!(cell.cell_type, CellType::Code);
        assert_eq!(cell.content, "print(1)\n");
    }

    #[test]
    fn test_cell_scalar_source() {
        let json = r##"{"cell_type": "markdown", "source": "# Title"}"##;
        let cell: Cell = serde_json::from_str::<NotebookCell>(json).unwrap().into();
        assert_eq!(cell.cell_type, CellType::Markdown);
        assert_eq!(cell.content, "# Title");
    }

    #[test]
    fn test_non_string_cell_type_is_malformed() {
        let json = r#"{"cell_type": 7, "source": []}"#;
        assert!(serde_json::from_str::<NotebookCell>(json).is_err());
    }
}
