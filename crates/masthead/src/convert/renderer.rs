//! External Mermaid renderer invocation
//!
//! Writes one diagram definition to a uniquely named temporary file and
//! runs the Mermaid CLI (`mmdc`) against it synchronously. The renderer's
//! own stdout and stderr pass straight through to the calling process's
//! console.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::Builder;
use tracing::{debug, info, span, Level};

use crate::core::{MastheadError, RenderOptions};

/// Invokes the external Mermaid CLI to render single diagram definitions
#[derive(Debug, Clone)]
pub struct MermaidRenderer {
    binary: PathBuf,
}

impl MermaidRenderer {
    /// Create a renderer using the locally installed Mermaid CLI
    /// (`node_modules/.bin/mmdc` under the current working directory)
    pub fn new() -> Self {
        Self {
            binary: default_binary(),
        }
    }

    /// Create a renderer that invokes the given executable instead
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Path of the renderer executable this instance runs
    pub fn binary(&self) -> &Path {
        &self.binary
    }

    /// Render one diagram definition to an image at `output`
    ///
    /// The definition is written to a `masthead_*.mmd` temporary file in
    /// the current working directory and the renderer runs to completion
    /// before this returns. The temporary file is removed whether or not
    /// the renderer succeeded. No timeout is applied: a hung renderer
    /// blocks the call indefinitely.
    pub fn render(
        &self,
        definition: &str,
        output: &Path,
        options: &RenderOptions,
    ) -> Result<(), MastheadError> {
        let render_span = span!(Level::INFO, "render_diagram", output = %output.display());
        let _enter = render_span.enter();

        // Dropped (and deleted) on every exit path.
        let mut definition_file = Builder::new()
            .prefix("masthead_")
            .suffix(".mmd")
            .tempfile_in(scratch_dir())
            .map_err(MastheadError::definition_write)?;
        definition_file
            .write_all(definition.as_bytes())
            .map_err(MastheadError::definition_write)?;
        definition_file
            .flush()
            .map_err(MastheadError::definition_write)?;

        debug!(
            definition_file = %definition_file.path().display(),
            bytes = definition.len(),
            "Wrote diagram definition"
        );

        let status = Command::new(&self.binary)
            .arg("-i")
            .arg(definition_file.path())
            .arg("-o")
            .arg(output)
            .arg("-w")
            .arg(options.width.to_string())
            .arg("-H")
            .arg(options.height.to_string())
            .arg("-s")
            .arg(options.scale.to_string())
            .arg("-b")
            .arg(&options.background)
            .status()
            .map_err(|e| MastheadError::renderer_launch(&self.binary, e))?;

        if !status.success() {
            return Err(MastheadError::RendererExit { status });
        }

        info!(output = %output.display(), "Rendered diagram");
        Ok(())
    }
}

impl Default for MermaidRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Default renderer location: the project-local Mermaid CLI install
fn default_binary() -> PathBuf {
    scratch_dir().join("node_modules").join(".bin").join("mmdc")
}

/// Directory for temporary definition files
fn scratch_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
