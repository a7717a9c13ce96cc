use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Opaque node identifier assigned by the content engine.
/// Unique within a single parse; the engine may emit either an integer
/// or a string, so both wire shapes are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(u64),
    Str(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{}", n),
            NodeId::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for NodeId {
    fn from(n: u64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Str(s.to_string())
    }
}

/// One parsed structural unit of a note, positioned in a depth-first
/// hierarchy. Relationships are weak references by id; the engine never
/// mutates them, it replaces the whole sequence per parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutlineNode {
    pub id: NodeId,
    pub depth: usize,
    pub text: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub parent_id: Option<NodeId>,
    #[serde(default)]
    pub children_ids: Vec<NodeId>,
}

impl OutlineNode {
    /// Tag membership check; duplicate tags in the payload are harmless.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// A tagged list item matched by a tag query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResultItem {
    pub file_path: String,
    /// Human-readable ancestor breadcrumb, when the node is nested.
    pub parent_path: Option<String>,
    pub node: OutlineNode,
}

/// A full-text search result. Offsets index into the match context as it
/// was at search time; there is no alignment guarantee against the
/// current editor content if the file was edited since.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchMatch {
    pub file_path: String,
    pub snippet_or_line: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_offset: Option<usize>,
}

/// Durable navigation state. Also serves as the partial patch passed to
/// `save_session`: fields left `None` are preserved by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_vault_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

/// Response of `open_vault`. The file path order defines display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultInfo {
    pub root_path: String,
    pub file_paths: Vec<String>,
}

/// Response envelope of `parse_file`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedOutline {
    pub nodes: Vec<OutlineNode>,
}

/// SHA-256 hex digest of editor content. Parse requests are keyed by the
/// digest of their originating content so a stale response remains
/// identifiable after further edits.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_accepts_integer_and_string_wire_shapes() {
        let node: OutlineNode = serde_json::from_str(
            r#"{"id": 7, "depth": 0, "text": "top", "tags": [], "parent_id": null, "children_ids": [8]}"#,
        )
        .unwrap();
        assert_eq!(node.id, NodeId::Int(7));
        assert_eq!(node.children_ids, vec![NodeId::Int(8)]);

        let node: OutlineNode = serde_json::from_str(
            r#"{"id": "n-1", "depth": 2, "text": "leaf", "tags": ["todo"], "parent_id": "n-0", "children_ids": []}"#,
        )
        .unwrap();
        assert_eq!(node.id, NodeId::Str("n-1".to_string()));
        assert_eq!(node.parent_id, Some(NodeId::Str("n-0".to_string())));
    }

    #[test]
    fn search_match_offsets_are_optional_on_the_wire() {
        let m: SearchMatch = serde_json::from_str(
            r#"{"file_path": "notes/a.md", "snippet_or_line": "a line"}"#,
        )
        .unwrap();
        assert_eq!(m.start_offset, None);
        assert_eq!(m.end_offset, None);
    }

    #[test]
    fn session_patch_omits_absent_fields() {
        let patch = SessionData {
            last_file_path: Some("notes/a.md".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"last_file_path":"notes/a.md"}"#);
    }

    #[test]
    fn content_digest_is_stable_and_content_sensitive() {
        assert_eq!(content_digest("# note"), content_digest("# note"));
        assert_ne!(content_digest("# note"), content_digest("# note edited"));
        assert_eq!(content_digest("").len(), 64);
    }

    #[test]
    fn has_tag_ignores_duplicates() {
        let node = OutlineNode {
            id: NodeId::Int(1),
            depth: 0,
            text: "item".to_string(),
            tags: vec!["todo".to_string(), "todo".to_string()],
            parent_id: None,
            children_ids: vec![],
        };
        assert!(node.has_tag("todo"));
        assert!(!node.has_tag("done"));
    }
}
