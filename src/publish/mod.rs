//! Publication: ordering, pagination, summaries and the artifact tree.
//!
//! ```text
//! Documents + Indices ──► assemble() ──► PublicationSnapshot
//!                                              │
//!                         ArtifactTree::layout()
//!                                              │
//!                         write_artifacts() ──► <output>/api/**.json
//! ```

mod artifact;
mod date;
mod error;
mod openapi;
mod paginate;
mod snapshot;
mod types;
mod writer;

pub use artifact::ArtifactTree;
pub use error::PublishError;
pub use openapi::OpenApi;
pub use snapshot::assemble;
pub use writer::{prune_stale, write_artifacts};
