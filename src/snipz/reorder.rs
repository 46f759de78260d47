//! # Reorder Engine
//!
//! Turns a drag gesture into a move within the [`SnippetCollection`].
//!
//! A gesture names the dragged snippet (`active`) and the snippet under the
//! pointer at drop time (`over`). Dropping outside any target leaves `over` empty.
//! The gesture is a no-op when:
//!
//! - `over` is absent,
//! - `active == over`,
//! - either id is not in the collection.
//!
//! Otherwise the dragged snippet takes the position of the target, and the
//! snippets in between shift by one (array-move semantics, not a swap).

use crate::collection::{Change, SnippetCollection};
use crate::model::SnippetId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragGesture {
    pub active: SnippetId,
    pub over: Option<SnippetId>,
}

impl DragGesture {
    pub fn new(active: SnippetId, over: Option<SnippetId>) -> Self {
        Self { active, over }
    }
}

/// A resolved move, in collection positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

/// Resolves a gesture to positions without touching the collection.
pub fn resolve(collection: &SnippetCollection, gesture: DragGesture) -> Option<Move> {
    let over = gesture.over?;
    if gesture.active == over {
        return None;
    }
    let from = collection.position(gesture.active)?;
    let to = collection.position(over)?;
    Some(Move { from, to })
}

/// Applies a gesture to the collection.
pub fn apply(collection: &mut SnippetCollection, gesture: DragGesture) -> Option<Change> {
    resolve(collection, gesture)?;
    let over = gesture.over?;
    collection.reorder(gesture.active, over)
}

/// Moves the element at `from` to `to`, shifting everything in between.
///
/// Out-of-range positions leave the slice untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from == to || from >= items.len() || to >= items.len() {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}
