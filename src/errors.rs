//! Error Types
//!
//! This module defines the fatal error type used throughout the crate.
//!
//! # Overview
//!
//! Loading a scene document distinguishes two tiers of problems:
//!
//! - **Fatal** problems abort the whole load and surface as a [`SceneError`]
//!   (missing required section, missing root id, duplicate node id, ...).
//! - **Minor** problems are logged as warnings, recorded in
//!   [`Diagnostics`](crate::parser::Diagnostics) and parsing continues with a
//!   documented fallback.
//!
//! Scene traversal reuses the same type for the (post-validation impossible)
//! dangling composite reference and for cyclic graphs.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lsf::errors::{SceneError, Result};
//!
//! fn load() -> Result<()> {
//!     let scene = lsf::parser::parse_document(&text)?;
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The fatal error type for scene loading and traversal.
#[derive(Error, Debug)]
pub enum SceneError {
    // ========================================================================
    // Document Errors
    // ========================================================================
    /// The document is not well-formed XML.
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// The document root is not `<lsf>`.
    #[error("root tag <lsf> missing (found <{0}>)")]
    UnexpectedRootTag(String),

    /// A required top-level section is absent.
    #[error("tag <{0}> missing")]
    MissingSection(&'static str),

    // ========================================================================
    // Section Errors
    // ========================================================================
    /// `<initials>` declares no usable `<root id>`.
    #[error("no root id defined for scene")]
    MissingRootId,

    /// The declared root id names no parsed node.
    #[error("there isn't a root node with id {0}")]
    UnknownRootNode(String),

    /// A `<node>` element lacks its `id` attribute.
    #[error("no ID defined for node")]
    MissingNodeId,

    /// Two `<node>` elements share an id.
    #[error("ID must be unique for each node (conflict: ID = {0})")]
    DuplicateNode(String),

    /// A `<node>` element lacks its `<descendants>` block.
    #[error("there is no descendants tag in node {0}")]
    MissingDescendants(String),

    /// A `<light>` element is missing or has an invalid component.
    #[error("light {light}: {reason}")]
    InvalidLight {
        /// Id of the offending light
        light: String,
        /// What was wrong with it
        reason: String,
    },

    /// `<illumination>` is missing or has an invalid color.
    #[error("illumination: {0}")]
    InvalidIllumination(String),

    // ========================================================================
    // Traversal Errors
    // ========================================================================
    /// A composite descendant references a node that does not exist.
    #[error("node {parent} references unknown node {child}")]
    UnknownNode {
        /// Node holding the reference
        parent: String,
        /// The dangling child id
        child: String,
    },

    /// A composite descendant re-enters a node already on the active path.
    #[error("cycle detected: node {node} is its own ancestor")]
    CycleDetected {
        /// The node that was revisited
        node: String,
    },

    // ========================================================================
    // I/O Errors
    // ========================================================================
    /// Scene file could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings JSON could not be decoded.
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

/// Alias for `Result<T, SceneError>`.
pub type Result<T> = std::result::Result<T, SceneError>;
