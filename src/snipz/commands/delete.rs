use crate::collection::{Change, SnippetCollection, Subscriber};
use crate::commands::{publish, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;

/// Removes the snippets at the given indexes. Unknown indexes are skipped.
pub fn run<P: Subscriber + ?Sized>(
    collection: &mut SnippetCollection,
    subscriber: &mut P,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    // Resolve everything up front: removing shifts later positions.
    let targets: Vec<_> = indexes
        .iter()
        .filter_map(|index| index.resolve(collection).map(|id| (*index, id)))
        .collect();

    let mut result = CmdResult::default();
    for (index, id) in targets {
        let change = collection.remove(id);
        if let Some(Change::Removed(snippet)) = publish(subscriber, collection, change) {
            result.add_message(CmdMessage::success(format!(
                "Snippet deleted ({}): {}",
                index,
                snippet.preview()
            )));
            result.affected_snippets.push(snippet);
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::{abc, ids};
    use crate::commands::test_support::Recorder;

    #[test]
    fn deletes_by_index() {
        let mut collection = abc();
        let mut recorder = Recorder::default();

        let result = run(&mut collection, &mut recorder, &[DisplayIndex(2)]).unwrap();

        assert_eq!(ids(&collection), vec![1, 3]);
        assert_eq!(result.affected_snippets[0].text, "b");
        assert_eq!(recorder.changes.len(), 1);
    }

    #[test]
    fn multiple_indexes_refer_to_original_positions() {
        let mut collection = abc();
        let mut recorder = Recorder::default();

        run(
            &mut collection,
            &mut recorder,
            &[DisplayIndex(1), DisplayIndex(2)],
        )
        .unwrap();

        assert_eq!(ids(&collection), vec![3]);
    }

    #[test]
    fn repeated_index_deletes_once() {
        let mut collection = abc();
        let mut recorder = Recorder::default();

        run(
            &mut collection,
            &mut recorder,
            &[DisplayIndex(1), DisplayIndex(1)],
        )
        .unwrap();

        assert_eq!(ids(&collection), vec![2, 3]);
        assert_eq!(recorder.changes.len(), 1);
    }

    #[test]
    fn unknown_index_is_silently_ignored() {
        let mut collection = abc();
        let mut recorder = Recorder::default();

        let result = run(&mut collection, &mut recorder, &[DisplayIndex(999)]).unwrap();

        assert_eq!(ids(&collection), vec![1, 2, 3]);
        assert!(result.messages.is_empty());
        assert!(recorder.changes.is_empty());
    }
}
