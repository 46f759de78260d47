use crate::clipboard::{self, Clipboard};
use crate::collection::{Change, SnippetCollection, Subscriber};
use crate::commands::{publish, CmdMessage, CmdResult};
use crate::error::Result;

/// Saves `text` as a new snippet at the top of the list.
///
/// Blank text is dropped without a message. With `copy_to_clipboard`, the saved
/// text is also placed on the clipboard (best-effort).
pub fn run<P: Subscriber + ?Sized, C: Clipboard + ?Sized>(
    collection: &mut SnippetCollection,
    subscriber: &mut P,
    clipboard: &mut C,
    text: &str,
    copy_to_clipboard: bool,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let change = collection.add(text);
    let Some(Change::Added(id)) = publish(subscriber, collection, change) else {
        return Ok(result);
    };

    if let Some(snippet) = collection.get(id).cloned() {
        result.add_message(CmdMessage::success(format!(
            "Snippet saved: {}",
            snippet.preview()
        )));
        if copy_to_clipboard && clipboard::copy(clipboard, &snippet.text) {
            result.add_message(CmdMessage::info("Copied to clipboard."));
        }
        result.affected_snippets.push(snippet);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MemoryClipboard;
    use crate::commands::test_support::Recorder;

    #[test]
    fn saves_and_notifies() {
        let mut collection = SnippetCollection::new();
        let mut recorder = Recorder::default();
        let mut clipboard = MemoryClipboard::new();

        let result = run(&mut collection, &mut recorder, &mut clipboard, "buy milk", false).unwrap();

        assert_eq!(collection.len(), 1);
        assert_eq!(result.affected_snippets[0].text, "buy milk");
        assert_eq!(recorder.changes.len(), 1);
        assert_eq!(recorder.last_state.unwrap(), collection.snippets().to_vec());
        assert_eq!(clipboard.contents(), None);
    }

    #[test]
    fn blank_text_is_silent_noop() {
        let mut collection = SnippetCollection::new();
        let mut recorder = Recorder::default();
        let mut clipboard = MemoryClipboard::new();

        let result = run(&mut collection, &mut recorder, &mut clipboard, "   ", false).unwrap();

        assert!(collection.is_empty());
        assert!(result.messages.is_empty());
        assert!(recorder.changes.is_empty());
    }

    #[test]
    fn copies_when_requested() {
        let mut collection = SnippetCollection::new();
        let mut recorder = Recorder::default();
        let mut clipboard = MemoryClipboard::new();

        run(&mut collection, &mut recorder, &mut clipboard, "token", true).unwrap();
        assert_eq!(clipboard.contents(), Some("token"));
    }

    #[test]
    fn denied_clipboard_still_saves() {
        let mut collection = SnippetCollection::new();
        let mut recorder = Recorder::default();
        let mut clipboard = MemoryClipboard::denied();

        let result = run(&mut collection, &mut recorder, &mut clipboard, "token", true).unwrap();
        assert_eq!(collection.len(), 1);
        assert_eq!(result.messages.len(), 1);
    }
}
