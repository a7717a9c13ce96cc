//! Arbor Core Library
//!
//! Pure workspace state model: the snapshot, its transition events, and
//! the outline data types shared with the content engine.
//! No IO dependencies, pure logic only.

pub mod model;
pub mod outline;
pub mod snapshot;

pub use model::{
    content_digest, NodeId, OutlineNode, ParsedOutline, QueryResultItem, SearchMatch, SessionData,
    VaultInfo,
};
pub use outline::OutlineIndex;
pub use snapshot::{apply, ActiveResults, AppEvent, ResultSet, WorkspaceSnapshot};
