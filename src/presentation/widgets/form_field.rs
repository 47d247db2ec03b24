use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::domain::{contact::Field, ui::TextBuffer};
use crate::infrastructure::tui::textarea_engine::TuiTextAreaEngine;

pub const REQUIRED_PROMPT: &str = "Please fill out this field.";

/// Bordered input for one contact form field. The text is drawn by a
/// tui-textarea rebuilt from the field's buffer so the cursor matches editing.
#[derive(Debug, Clone)]
pub struct FormFieldWidget<'a> {
    field: Field,
    buffer: &'a TextBuffer,
    focused: bool,
    editing: bool,
    prompt: bool,
    focus_style: Style,
    muted_style: Style,
    error_style: Style,
}

impl<'a> FormFieldWidget<'a> {
    pub fn new(field: Field, buffer: &'a TextBuffer) -> Self {
        Self {
            field,
            buffer,
            focused: false,
            editing: false,
            prompt: false,
            focus_style: Style::default().fg(Color::Cyan),
            muted_style: Style::default().dim(),
            error_style: Style::default().fg(Color::Red),
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    /// Show the required-field prompt under this field
    pub fn prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn styles(mut self, focus: Style, muted: Style, error: Style) -> Self {
        self.focus_style = focus;
        self.muted_style = muted;
        self.error_style = error;
        self
    }

    fn block(&self) -> Block<'a> {
        let border_style = if self.prompt {
            self.error_style
        } else if self.focused {
            self.focus_style
        } else {
            Style::default()
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(format!("{} *", self.field.label()));
        if self.prompt {
            block = block.title_bottom(Line::styled(REQUIRED_PROMPT, self.error_style));
        }
        block
    }
}

impl Widget for FormFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = self.block();
        let inner = block.inner(area);
        block.render(area, buf);

        let active = self.focused && self.editing;
        if self.buffer.is_empty() && !active {
            Paragraph::new(Span::styled(self.field.placeholder(), self.muted_style))
                .render(inner, buf);
            return;
        }

        let mut textarea = TuiTextAreaEngine::hydrate(self.buffer);
        textarea.set_cursor_line_style(Style::default());
        textarea.set_cursor_style(if active {
            Style::default().reversed()
        } else {
            Style::default()
        });
        textarea.render(inner, buf);
    }
}
