//! Core type definitions for diagram conversion
//!
//! This module contains the fundamental types used throughout Masthead:
//! extracted diagram blocks and renderer image options.

use std::fmt;

/// One Mermaid definition extracted from a Markdown document
///
/// Blocks are produced in document order with indices starting at 0.
/// The content is the verbatim text between the fence lines, trimmed of
/// leading and trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagramBlock {
    /// Zero-based position of this block among all blocks in the document
    pub index: usize,
    /// Trimmed Mermaid definition text
    pub content: String,
}

impl DiagramBlock {
    /// Create a block, trimming the raw fence content
    pub fn new(index: usize, raw: &str) -> Self {
        Self {
            index,
            content: raw.trim().to_string(),
        }
    }
}

impl fmt::Display for DiagramBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagram #{} ({} bytes)", self.index, self.content.len())
    }
}

/// Image options passed to the Mermaid renderer
///
/// Defaults match the fixed values used when no options are given on the
/// command line: 1920x1080, scale 1, white background.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Scale factor applied by the renderer
    pub scale: f64,
    /// Background color (any value the renderer accepts, e.g. `white`,
    /// `transparent`, `#F0F0F0`)
    pub background: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1920,
            height: 1080,
            scale: 1.0,
            background: "white".to_string(),
        }
    }
}

impl RenderOptions {
    /// Create options with explicit values
    pub fn new(width: u32, height: u32, scale: f64, background: impl Into<String>) -> Self {
        Self {
            width,
            height,
            scale,
            background: background.into(),
        }
    }
}
