use crate::collection::{Change, SnippetCollection, Subscriber};
use crate::commands::{publish, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::reorder::{self, DragGesture};

/// Drags the snippet at `from` onto the snippet at `to`.
///
/// A `to` past the end of the list is a drop outside any target; an unknown
/// `from` has nothing to drag. Both are silent no-ops, as is `from == to`.
pub fn run<P: Subscriber + ?Sized>(
    collection: &mut SnippetCollection,
    subscriber: &mut P,
    from: DisplayIndex,
    to: DisplayIndex,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let Some(active) = from.resolve(collection) else {
        return Ok(result);
    };
    let gesture = DragGesture::new(active, to.resolve(collection));

    let change = reorder::apply(collection, gesture);
    if let Some(Change::Moved { id, to, .. }) = publish(subscriber, collection, change) {
        if let Some(snippet) = collection.get(id).cloned() {
            result.add_message(CmdMessage::success(format!(
                "Snippet moved ({} -> {}): {}",
                from,
                DisplayIndex::from_position(to),
                snippet.preview()
            )));
            result.affected_snippets.push(snippet);
        }
    }

    Ok(result)
}
