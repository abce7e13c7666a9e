//! Error types for mesh loading and scene configuration.
//!
//! Both are startup-time failures: a mesh or config that fails to load aborts
//! initialization. Per-frame math has no error path.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to build a [`Mesh`](crate::mesh::Mesh) from a text source.
///
/// Line numbers are 1-based and refer to the offending record.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read mesh file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: vertex record needs exactly 3 coordinates, found {found}")]
    VertexArity { line: usize, found: usize },

    #[error("line {line}: face record needs at least 3 vertex indices, found {found}")]
    FaceArity { line: usize, found: usize },

    #[error("line {line}: invalid number {token:?}")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: vertex index {index} out of range (mesh has {vertex_count} vertices)")]
    IndexOutOfRange {
        line: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("triangle or edge references vertex {index}, but the mesh has {vertex_count} vertices")]
    DanglingIndex { index: usize, vertex_count: usize },
}

/// Failure to load or validate a [`SceneConfig`](crate::config::SceneConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// A command name that is not part of [`Command`](crate::camera::Command).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown command {0:?}")]
pub struct UnknownCommand(pub String);
