use crate::model::{OutlineNode, QueryResultItem, SearchMatch};

/// The single in-memory representation of what the user is looking at.
///
/// Created empty once at startup and thereafter replaced wholesale on
/// every transition, never mutated in place. `selected_path` is either
/// `None` or a member of `file_paths`; that invariant is maintained by
/// callers, not re-checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkspaceSnapshot {
    pub root_path: Option<String>,
    pub file_paths: Vec<String>,
    pub selected_path: Option<String>,
    pub editor_content: String,
    pub outline_nodes: Vec<OutlineNode>,
    /// Retained even while hidden; see `active_results` for which list
    /// is authoritative.
    pub query_results: Vec<QueryResultItem>,
    pub search_results: Vec<SearchMatch>,
    pub results_title: String,
    pub results_visible: bool,
    active: ActiveKind,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum ActiveKind {
    #[default]
    None,
    Query,
    Search,
}

/// The result list authoritative for display: whichever was most
/// recently populated. Both lists may be non-empty at once; this
/// discriminant removes any ambiguity between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveResults<'a> {
    None,
    Query(&'a [QueryResultItem]),
    Search(&'a [SearchMatch]),
}

impl WorkspaceSnapshot {
    pub fn active_results(&self) -> ActiveResults<'_> {
        match self.active {
            ActiveKind::None => ActiveResults::None,
            ActiveKind::Query => ActiveResults::Query(&self.query_results),
            ActiveKind::Search => ActiveResults::Search(&self.search_results),
        }
    }
}

/// Payload of a `ShowResults` transition. Exactly one list kind per
/// event; the other stored list is retained untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultSet {
    Query(Vec<QueryResultItem>),
    Search(Vec<SearchMatch>),
}

/// All recognized state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    LoadVault {
        root_path: String,
        file_paths: Vec<String>,
    },
    SetFilePaths(Vec<String>),
    SelectFile {
        path: String,
        content: String,
    },
    SetEditorContent(String),
    SetOutlineNodes(Vec<OutlineNode>),
    ShowResults {
        title: String,
        results: ResultSet,
    },
    HideResults,
    ClearSelection,
    ClearEditor,
}

/// Pure transition function; the only place the snapshot changes.
pub fn apply(snapshot: &WorkspaceSnapshot, event: AppEvent) -> WorkspaceSnapshot {
    let mut next = snapshot.clone();
    match event {
        AppEvent::LoadVault {
            root_path,
            file_paths,
        } => {
            next.root_path = Some(root_path);
            next.file_paths = file_paths;
            next.selected_path = None;
            next.editor_content = String::new();
            next.outline_nodes = Vec::new();
        }
        AppEvent::SetFilePaths(paths) => {
            next.file_paths = paths;
        }
        AppEvent::SelectFile { path, content } => {
            next.selected_path = Some(path);
            next.editor_content = content;
        }
        AppEvent::SetEditorContent(text) => {
            next.editor_content = text;
        }
        AppEvent::SetOutlineNodes(nodes) => {
            next.outline_nodes = nodes;
        }
        AppEvent::ShowResults { title, results } => {
            next.results_title = title;
            next.results_visible = true;
            match results {
                ResultSet::Query(items) => {
                    next.query_results = items;
                    next.active = ActiveKind::Query;
                }
                ResultSet::Search(matches) => {
                    next.search_results = matches;
                    next.active = ActiveKind::Search;
                }
            }
        }
        AppEvent::HideResults => {
            next.results_visible = false;
        }
        AppEvent::ClearSelection => {
            next.selected_path = None;
            next.editor_content = String::new();
            next.outline_nodes = Vec::new();
        }
        AppEvent::ClearEditor => {
            next.editor_content = String::new();
            next.outline_nodes = Vec::new();
        }
    }
    next
}
