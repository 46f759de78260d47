use crate::collection::SnippetCollection;
use crate::commands::{require_index, CmdResult};
use crate::error::Result;
use crate::index::{DisplayIndex, DisplaySnippet};

pub fn run(collection: &SnippetCollection, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let mut listed = Vec::with_capacity(indexes.len());
    for index in indexes {
        let id = require_index(collection, *index)?;
        if let Some(snippet) = collection.get(id) {
            listed.push(DisplaySnippet {
                index: *index,
                snippet: snippet.clone(),
            });
        }
    }
    Ok(CmdResult::default().with_listed_snippets(listed))
}
