use crossterm::event::{Event, KeyEvent};
use tui_textarea::TextArea;

use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextBuffer, TextSelection};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies keys, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// Build a TextArea holding the snapshot's content, cursor and selection.
    /// Also used by the form field widget for rendering.
    pub fn hydrate(snapshot: &TextBuffer) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            clamp_u16(snapshot.cursor_position.line),
            clamp_u16(snapshot.cursor_position.column),
        ));
        if let Some(sel) = &snapshot.selection {
            Self::restore_selection(&mut textarea, sel);
        }
        textarea
    }

    fn snapshot(textarea: &TextArea<'_>) -> TextBuffer {
        TextBuffer::new(
            textarea.lines().join("\n"),
            Self::extract_cursor_position(textarea),
            Self::extract_selection(textarea),
        )
    }

    fn extract_cursor_position(textarea: &TextArea<'_>) -> CursorPosition {
        let (line, column) = textarea.cursor();
        CursorPosition { line, column }
    }

    fn extract_selection(textarea: &TextArea<'_>) -> Option<TextSelection> {
        textarea.selection_range().map(|((sr, sc), (er, ec))| TextSelection {
            start: CursorPosition { line: sr, column: sc },
            end: CursorPosition { line: er, column: ec },
        })
    }

    fn restore_selection(textarea: &mut TextArea<'_>, selection: &TextSelection) {
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            clamp_u16(selection.start.line),
            clamp_u16(selection.start.column),
        ));
        textarea.start_selection();
        textarea.move_cursor(tui_textarea::CursorMove::Jump(
            clamp_u16(selection.end.line),
            clamp_u16(selection.end.column),
        ));
    }
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextBuffer, keys: &[KeyEvent]) -> TextBuffer {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot(&textarea)
    }

    fn insert_text(&self, snapshot: &TextBuffer, text: &str) -> TextBuffer {
        let mut textarea = Self::hydrate(snapshot);
        textarea.insert_str(text);
        Self::snapshot(&textarea)
    }
}
