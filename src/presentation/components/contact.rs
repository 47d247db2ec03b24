//! Contact page component
//!
//! Contact details on the left, the four-field form on the right. Each field
//! is drawn by [`FormFieldWidget`]; the form never owns text itself.

use ratatui::{prelude::*, widgets::*};
use strum::IntoEnumIterator;

use crate::{
    core::state::AppState,
    domain::contact::{Field, SUCCESS_MESSAGE},
    presentation::widgets::FormFieldWidget,
};

pub const SEND_LABEL: &str = "[ Send Message ]";
pub const SENDING_LABEL: &str = "[ Sending... ]";

const INFO_WIDTH: u16 = 34;
const MESSAGE_HEIGHT: u16 = 6;

#[derive(Debug, Clone, Default)]
pub struct ContactComponent;

impl ContactComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn button_label(&self, state: &AppState) -> &'static str {
        if state.contact.submitting {
            SENDING_LABEL
        } else {
            SEND_LABEL
        }
    }

    pub fn hint(&self, state: &AppState) -> &'static str {
        if state.contact.editing {
            "esc: stop editing  tab: next field  ctrl-s: send"
        } else {
            "i: edit  j/k: move  ctrl-s: send"
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::horizontal([Constraint::Length(INFO_WIDTH), Constraint::Min(0)])
            .spacing(1)
            .split(area);
        self.view_info(state, frame, layout[0]);
        self.view_form(state, frame, layout[1]);
    }

    fn view_info(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let profile = &state.content.profile;

        let mut lines = vec![
            Line::styled("Get In Touch", styles.style("title")),
            Line::default(),
            Line::from(vec![
                Span::styled("Email     ", styles.style("muted")),
                Span::styled(profile.email.as_str(), styles.style("link")),
            ]),
        ];
        if let Some(phone) = &profile.phone {
            lines.push(Line::from(vec![
                Span::styled("Phone     ", styles.style("muted")),
                Span::raw(phone.as_str()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Location  ", styles.style("muted")),
            Span::raw(profile.location.as_str()),
        ]));
        lines.push(Line::default());
        lines.push(Line::styled("Follow Me", styles.style("title")));
        lines.extend(profile.socials.iter().map(|social| {
            Line::from(vec![
                Span::styled(format!("{:<10}", social.label), styles.style("muted")),
                Span::styled(social.href.as_str(), styles.style("link")),
            ])
        }));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
    }

    fn view_form(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let styles = &state.config.config.styles;
        let contact = &state.contact;

        let mut constraints: Vec<Constraint> = Field::iter()
            .map(|field| {
                if field.is_multiline() {
                    Constraint::Length(MESSAGE_HEIGHT)
                } else {
                    Constraint::Length(3)
                }
            })
            .collect();
        constraints.extend([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)]);
        let rows = Layout::vertical(constraints).split(area);

        for (idx, field) in Field::iter().enumerate() {
            frame.render_widget(
                FormFieldWidget::new(field, contact.fields.get(field))
                    .focused(contact.focus == field)
                    .editing(contact.editing)
                    .prompt(contact.prompt == Some(field))
                    .styles(
                        styles.style("accent"),
                        styles.style("muted"),
                        styles.style("error"),
                    ),
                rows[idx],
            );
        }

        let button_style = if contact.submitting {
            styles.style("muted")
        } else {
            styles.style("highlight")
        };
        let status = if contact.submitted {
            Span::styled(format!("  {SUCCESS_MESSAGE}"), styles.style("success"))
        } else {
            Span::raw("")
        };
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(self.button_label(state), button_style),
                status,
            ])),
            rows[4],
        );
        frame.render_widget(
            Paragraph::new(Span::styled(self.hint(state), styles.style("muted"))),
            rows[5],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::{Page, TextBuffer};
    use crate::infrastructure::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn state() -> AppState {
        AppState::new_with_config(Config::embedded().expect("embedded config"))
            .with_start_page(Page::Contact)
    }

    fn render(state: &AppState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 24)).expect("terminal");
        terminal
            .draw(|f| ContactComponent::new().view(state, f, f.area()))
            .expect("draw");
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_renders_info_and_empty_form() {
        let content = render(&state());
        assert!(content.contains("sherry258012@gmail.com"));
        assert!(content.contains("Your Name *"));
        assert!(content.contains("John Doe"));
        assert!(content.contains(SEND_LABEL));
    }

    #[test]
    fn test_submitting_disables_button_label() {
        let mut s = state();
        s.contact.submitting = true;
        assert!(render(&s).contains(SENDING_LABEL));
    }

    #[test]
    fn test_success_acknowledgment_and_field_text() {
        let mut s = state();
        s.contact.submitted = true;
        s.contact.fields.name = TextBuffer::with_content("Jane");
        let content = render(&s);
        assert!(content.contains("Message sent successfully!"));
        assert!(content.contains("Jane"));
    }

    #[test]
    fn test_prompt_on_missing_field() {
        let mut s = state();
        s.contact.prompt = Some(Field::Email);
        assert!(render(&s).contains("Please fill out this field."));
    }
}
