//! Core error types for diagram conversion
//!
//! This module defines the error types used throughout the conversion
//! pipeline. The two input errors are fatal for a run; the renderer errors
//! are confined to a single block and never abort the run.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors produced by the conversion pipeline
#[derive(Error, Debug)]
pub enum MastheadError {
    #[error("Input file '{}' does not exist", .path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write diagram definition file: {source}")]
    DefinitionWrite { source: std::io::Error },

    #[error("Failed to launch renderer '{}': {source}", .binary.display())]
    RendererLaunch {
        binary: PathBuf,
        source: std::io::Error,
    },

    #[error("Renderer exited with {status}")]
    RendererExit { status: ExitStatus },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl MastheadError {
    /// Create an error for a missing input file
    pub fn input_not_found(path: impl Into<PathBuf>) -> Self {
        Self::InputNotFound { path: path.into() }
    }

    /// Create an error for an unreadable input file
    pub fn read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a failed definition-file write
    pub fn definition_write(source: std::io::Error) -> Self {
        Self::DefinitionWrite { source }
    }

    /// Create an error for a renderer that could not be launched
    pub fn renderer_launch(binary: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RendererLaunch {
            binary: binary.into(),
            source,
        }
    }

    /// Returns true if this error must terminate the whole run
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            MastheadError::InputNotFound { .. } | MastheadError::ReadFailed { .. }
        )
    }
}
