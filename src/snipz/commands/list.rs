use crate::collection::SnippetCollection;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_snippets;

pub fn run(collection: &SnippetCollection) -> Result<CmdResult> {
    Ok(CmdResult::default().with_listed_snippets(index_snippets(collection.snippets())))
}
