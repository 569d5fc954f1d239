//! Masthead - Extract Mermaid.js diagrams from Markdown and render them to PNG
//!
//! A library for finding fenced `mermaid` code blocks in Markdown documents
//! and converting each one to a PNG image by invoking the Mermaid CLI
//! (`mmdc`) as a subprocess.
//!
//! # Quick Start
//!
//! ```rust
//! use masthead::extract;
//!
//! let doc = "# Title\n\n```mermaid\ngraph TD; A-->B;\n```\n";
//! let blocks = extract(doc);
//! assert_eq!(blocks.len(), 1);
//! assert_eq!(blocks[0].content, "graph TD; A-->B;");
//! ```
//!
//! # Converting a whole document
//!
//! For more control, use the individual components:
//!
//! ```no_run
//! use masthead::convert::{MermaidRenderer, Orchestrator};
//! use masthead::RenderOptions;
//! use std::path::Path;
//!
//! let renderer = MermaidRenderer::with_binary("/usr/local/bin/mmdc");
//! let orchestrator = Orchestrator::with_renderer(renderer, RenderOptions::default());
//! let summary = orchestrator.convert_file(Path::new("guide.md"))?;
//! println!("{} of {} diagrams rendered", summary.succeeded(), summary.total());
//! # Ok::<(), masthead::MastheadError>(())
//! ```

pub mod convert;
pub mod core;

pub use self::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::convert::{
        extract_blocks, output_path, unterminated_fences, BlockOutcome, MermaidRenderer,
        Orchestrator, RunSummary,
    };
    pub use crate::core::{DiagramBlock, MastheadError, RenderOptions};
}

use std::path::Path;

use convert::{Orchestrator, RunSummary};

/// Extract every Mermaid block from a Markdown document
///
/// The simplest entry point: returns the blocks in document order with
/// indices starting at 0, content trimmed. Zero matches yields an empty
/// vector, not an error.
///
/// # Example
/// ```rust
/// use masthead::extract;
///
/// let blocks = extract("no diagrams here");
/// assert!(blocks.is_empty());
/// ```
pub fn extract(document: &str) -> Vec<DiagramBlock> {
    convert::extract_blocks(document).collect()
}

/// Convert every Mermaid block in the file at `path` to a PNG image
///
/// Images are written next to the input file as
/// `<stem>_mermaid_<index>.png` using the locally installed Mermaid CLI.
/// Per-block render failures are recorded in the returned summary;
/// only a missing or unreadable input file returns an error.
///
/// # Example
/// ```no_run
/// use masthead::{convert_file, RenderOptions};
/// use std::path::Path;
///
/// let summary = convert_file(Path::new("guide.md"), RenderOptions::default())?;
/// assert_eq!(summary.failed(), 0);
/// # Ok::<(), masthead::MastheadError>(())
/// ```
pub fn convert_file(
    path: impl AsRef<Path>,
    options: RenderOptions,
) -> Result<RunSummary, MastheadError> {
    Orchestrator::new(options).convert_file(path.as_ref())
}
