#![warn(missing_docs)]
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/// Core domain models for customs export declarations.
///
/// This module contains the reference-table entities, the declaration
/// aggregate with its goods and supporting documents, and the resolved
/// bundle consumed by the XML export.
///
/// The models are plain data with normalization and presence checks, and
/// no knowledge of how they are persisted or rendered.
pub mod models;

/// Interface traits for storing and retrieving the domain models.
///
/// These are the "ports" of the hexagonal architecture: the HTTP layer and
/// the command-line tools are written against them, and the SQLite adapter
/// implements them.
pub mod ports;
