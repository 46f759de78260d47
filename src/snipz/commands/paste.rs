use crate::clipboard::{self, Clipboard};
use crate::input::InputField;

/// Fills `field` from the clipboard. Returns whether the field changed.
///
/// An unreadable clipboard leaves the field as it was.
pub fn run<C: Clipboard + ?Sized>(clipboard: &mut C, field: &mut InputField) -> bool {
    let ticket = field.begin_paste();
    let pasted = clipboard::paste(clipboard);
    field.complete_paste(ticket, pasted)
}
