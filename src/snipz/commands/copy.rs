use crate::clipboard::{self, Clipboard};
use crate::collection::SnippetCollection;
use crate::commands::{require_index, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;

/// Puts the text of the snippet at `index` on the clipboard.
///
/// The index must exist. A clipboard that refuses the write is logged by the
/// bridge and yields a result without messages.
pub fn run<C: Clipboard + ?Sized>(
    collection: &SnippetCollection,
    clipboard: &mut C,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let id = require_index(collection, index)?;
    let mut result = CmdResult::default();

    if let Some(snippet) = collection.get(id) {
        if clipboard::copy(clipboard, &snippet.text) {
            result.add_message(CmdMessage::success(format!(
                "Copied snippet {} to clipboard.",
                index
            )));
        }
        result.affected_snippets.push(snippet.clone());
    }

    Ok(result)
}
