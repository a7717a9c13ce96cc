//! Result navigation coordinator: runs tag queries and full-text
//! searches and populates the results overlay. Failures are returned to
//! the caller for a blocking notification; prior results and visibility
//! stay untouched.

use arbor_core::{AppEvent, ResultSet};

use crate::gateway::{ContentEngine, EngineResult};
use crate::store::Store;

pub(crate) async fn run_tag_query(
    store: &Store,
    engine: &dyn ContentEngine,
    input: &str,
) -> EngineResult<()> {
    let tag = input.trim();
    if tag.is_empty() {
        return Ok(());
    }

    let items = engine.query_by_tag(&[tag.to_string()], None, None).await?;
    store
        .dispatch(AppEvent::ShowResults {
            title: format!("Query: #{tag}"),
            results: ResultSet::Query(items),
        })
        .await;
    Ok(())
}

pub(crate) async fn run_search(
    store: &Store,
    engine: &dyn ContentEngine,
    input: &str,
) -> EngineResult<()> {
    let query = input.trim();
    if query.is_empty() {
        return Ok(());
    }

    let matches = engine.search_full_text(query, None, false).await?;
    store
        .dispatch(AppEvent::ShowResults {
            title: format!("Search: {query}"),
            results: ResultSet::Search(matches),
        })
        .await;
    Ok(())
}
