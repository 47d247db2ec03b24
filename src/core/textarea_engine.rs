use crossterm::event::KeyEvent;

use crate::domain::ui::TextBuffer;

/// Engine interface that applies a sequence of key events to a text buffer
/// snapshot and returns the resulting snapshot. Implementations must be
/// deterministic and free of side effects so they can run on the update path.
pub trait TextAreaEngine {
    fn apply_keys(&self, snapshot: &TextBuffer, keys: &[KeyEvent]) -> TextBuffer;

    /// Insert `text` at the snapshot's cursor, replacing any selection.
    fn insert_text(&self, snapshot: &TextBuffer, text: &str) -> TextBuffer;

    fn apply_key(&self, snapshot: &TextBuffer, key: KeyEvent) -> TextBuffer {
        self.apply_keys(snapshot, &[key])
    }
}

/// Leaves every field untouched; update tests use it when only the form's
/// control flow matters.
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextBuffer, _keys: &[KeyEvent]) -> TextBuffer {
        snapshot.clone()
    }

    fn insert_text(&self, snapshot: &TextBuffer, _text: &str) -> TextBuffer {
        snapshot.clone()
    }
}
