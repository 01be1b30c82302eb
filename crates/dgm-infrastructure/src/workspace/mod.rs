//! Workspace services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`EmptyFileSystem`] | Default provider; nothing can be read |
//! | [`InMemoryFileSystem`] | URI → text map for hosts and tests |
//! | [`WorkspaceDocuments`] | Parsed documents indexed by URI |

pub mod documents;
pub mod file_system;

pub use documents::WorkspaceDocuments;
pub use file_system::{EmptyFileSystem, InMemoryFileSystem};
