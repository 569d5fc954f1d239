//! End-to-end conversion of one Markdown document
//!
//! The orchestrator wires the extractor and the renderer together so
//! callers can convert a whole document without handling each piece
//! manually: validate and read the input, extract blocks, derive output
//! names, and drive the renderer strictly in index order.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, span, warn, Level};

use crate::convert::extract::{extract_blocks, unterminated_fences};
use crate::convert::renderer::MermaidRenderer;
use crate::core::{DiagramBlock, MastheadError, RenderOptions};

/// Result of one block's conversion attempt
#[derive(Debug)]
pub struct BlockOutcome {
    /// Index of the block this outcome belongs to
    pub index: usize,
    /// Image path the renderer was asked to produce
    pub output: PathBuf,
    /// Conversion result; per-block errors never abort the run
    pub result: Result<(), MastheadError>,
}

/// Aggregated outcome of a whole conversion run
///
/// Per-block failures are recorded here rather than propagated; only the
/// two fatal input conditions abort a run.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<BlockOutcome>,
}

impl RunSummary {
    /// Number of blocks processed
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of blocks rendered successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    /// Number of blocks whose conversion failed
    pub fn failed(&self) -> usize {
        self.total() - self.succeeded()
    }

    /// True if the document contained no diagram blocks
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Per-block outcomes in index order
    pub fn outcomes(&self) -> &[BlockOutcome] {
        &self.outcomes
    }

    fn push(&mut self, outcome: BlockOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Drives extraction and rendering for one document
pub struct Orchestrator {
    renderer: MermaidRenderer,
    options: RenderOptions,
}

impl Orchestrator {
    /// Create an orchestrator with the default renderer location
    pub fn new(options: RenderOptions) -> Self {
        Self {
            renderer: MermaidRenderer::new(),
            options,
        }
    }

    /// Create an orchestrator around a specific renderer
    pub fn with_renderer(renderer: MermaidRenderer, options: RenderOptions) -> Self {
        Self { renderer, options }
    }

    /// Convert every Mermaid block in the document at `input` to a PNG
    ///
    /// Output images land next to the input file, named
    /// `<stem>_mermaid_<index>.png`. Blocks are processed sequentially in
    /// index order; a block that fails to render is reported and skipped,
    /// and processing continues with the next one. Returns the per-block
    /// and aggregate outcomes.
    ///
    /// A missing or unreadable input file is fatal and returns an error.
    pub fn convert_file(&self, input: &Path) -> Result<RunSummary, MastheadError> {
        let convert_span = span!(Level::INFO, "convert_file", input = %input.display());
        let _enter = convert_span.enter();

        if !input.exists() {
            return Err(MastheadError::input_not_found(input));
        }

        let document =
            fs::read_to_string(input).map_err(|e| MastheadError::read_failed(input, e))?;

        for line in unterminated_fences(&document) {
            warn!(line, "Unterminated mermaid fence ignored");
        }

        let blocks: Vec<DiagramBlock> = extract_blocks(&document).collect();

        if blocks.is_empty() {
            info!("No diagram blocks in document");
            println!("No Mermaid diagrams found in the markdown file.");
            return Ok(RunSummary::default());
        }

        println!("Found {} Mermaid diagram(s)", blocks.len());
        info!(count = blocks.len(), "Extracted diagram blocks");

        let mut summary = RunSummary::default();
        for block in &blocks {
            let output = output_path(input, block.index);
            let result = self.renderer.render(&block.content, &output, &self.options);
            match &result {
                Ok(()) => println!("Generated: {}", output.display()),
                Err(e) => {
                    error!(index = block.index, error = %e, "Diagram conversion failed");
                    eprintln!("Error converting diagram: {}", e);
                }
            }
            summary.push(BlockOutcome {
                index: block.index,
                output,
                result,
            });
        }

        Ok(summary)
    }
}

/// Output image path for a given input document and block index
///
/// A pure function of the input's base name and the index: block 1 of
/// `docs/diagram.md` maps to `docs/diagram_mermaid_1.png`.
pub fn output_path(input: &Path, index: usize) -> PathBuf {
    let stem = input
        .file_stem()
        .unwrap_or_else(|| OsStr::new(""))
        .to_string_lossy();
    let dir = input.parent().unwrap_or_else(|| Path::new(""));
    dir.join(format!("{}_mermaid_{}.png", stem, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_same_directory() {
        let path = output_path(Path::new("/docs/diagram.md"), 0);
        assert_eq!(path, Path::new("/docs/diagram_mermaid_0.png"));
    }

    #[test]
    fn test_output_path_strips_one_extension() {
        let path = output_path(Path::new("notes.markdown"), 7);
        assert_eq!(path, Path::new("notes_mermaid_7.png"));
    }

    #[test]
    fn test_output_path_no_extension() {
        let path = output_path(Path::new("README"), 0);
        assert_eq!(path, Path::new("README_mermaid_0.png"));
    }

    #[test]
    fn test_missing_input_is_fatal() {
        let orchestrator = Orchestrator::new(RenderOptions::default());
        let result = orchestrator.convert_file(Path::new("no_such_document.md"));
        match result {
            Err(e) => assert!(e.is_fatal()),
            Ok(_) => panic!("expected a fatal error for a missing input"),
        }
    }

    #[test]
    fn test_summary_counts() {
        let mut summary = RunSummary::default();
        assert!(summary.is_empty());

        summary.push(BlockOutcome {
            index: 0,
            output: PathBuf::from("a_mermaid_0.png"),
            result: Ok(()),
        });
        summary.push(BlockOutcome {
            index: 1,
            output: PathBuf::from("a_mermaid_1.png"),
            result: Err(MastheadError::definition_write(std::io::Error::new(
                std::io::ErrorKind::Other,
                "disk full",
            ))),
        });

        assert_eq!(summary.total(), 2);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.failed(), 1);
        assert!(!summary.is_empty());
        assert_eq!(summary.outcomes()[1].index, 1);
    }
}
