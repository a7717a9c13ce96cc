use arbor_core::{ParsedOutline, QueryResultItem, SearchMatch, SessionData, VaultInfo};
use async_trait::async_trait;

/// File extension the engine accepts for `create_file`.
pub const NOTE_EXTENSION: &str = ".md";

/// Failure of a content engine call.
///
/// The gateway never fails synchronously; every failure arrives as a
/// rejected result carrying the engine's message. Clonable and
/// comparable so call sites and tests can assert on it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("content engine call `{call}` failed: {message}")]
pub struct EngineError {
    pub call: &'static str,
    pub message: String,
}

impl EngineError {
    pub fn new(call: &'static str, message: impl Into<String>) -> Self {
        Self {
            call,
            message: message.into(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;

/// The typed surface through which this layer reaches the external
/// content engine (file IO, outline parsing, tag index, full-text
/// search, folder picker, session storage).
///
/// All calls are request/response with no streaming and no timeout at
/// this layer. Every call is a suspension point: arbitrary user events
/// may be processed between issuing a call and its resolution, so any
/// handler applying a result must re-validate its originating context
/// against the then-current snapshot.
#[async_trait]
pub trait ContentEngine: Send + Sync {
    async fn open_vault(&self, path: &str) -> EngineResult<VaultInfo>;

    async fn get_session(&self) -> EngineResult<SessionData>;

    /// Partial update; fields left `None` are preserved by the engine.
    async fn save_session(&self, patch: SessionData) -> EngineResult<()>;

    async fn list_files(&self) -> EngineResult<Vec<String>>;

    async fn read_file(&self, path: &str) -> EngineResult<String>;

    async fn write_file(&self, path: &str, content: &str) -> EngineResult<()>;

    /// `path` must end in [`NOTE_EXTENSION`].
    async fn create_file(&self, path: &str) -> EngineResult<()>;

    async fn delete_file(&self, path: &str) -> EngineResult<()>;

    /// Pure function of `content`; no side effects engine-side.
    async fn parse_file(&self, path: &str, content: &str) -> EngineResult<ParsedOutline>;

    async fn query_by_tag(
        &self,
        tag_names: &[String],
        scope_node_id: Option<&str>,
        paths: Option<&[String]>,
    ) -> EngineResult<Vec<QueryResultItem>>;

    async fn search_full_text(
        &self,
        query: &str,
        paths: Option<&[String]>,
        fuzzy: bool,
    ) -> EngineResult<Vec<SearchMatch>>;

    /// `None` means the user cancelled the picker.
    async fn select_folder(&self) -> EngineResult<Option<String>>;
}
