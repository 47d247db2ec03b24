use std::time::Duration;

use crossterm::event::KeyEvent;

use crate::{
    core::{
        cmd::Cmd,
        msg::contact::ContactMsg,
        textarea_engine::TextAreaEngine,
        timer::{TimerId, TimerKey},
    },
    domain::{
        contact::{ContactPayload, Field, MailOutcome, Notice, SubmissionId},
        ui::TextBuffer,
    },
};

/// The four form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: TextBuffer,
    pub email: TextBuffer,
    pub subject: TextBuffer,
    pub message: TextBuffer,
}

impl ContactFields {
    pub fn get(&self, field: Field) -> &TextBuffer {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut TextBuffer {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        }
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.content.clone(),
            email: self.email.content.clone(),
            subject: self.subject.content.clone(),
            message: self.message.content.clone(),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn single_line(field: Field, value: String) -> String {
    if field.is_multiline() {
        value
    } else {
        value.replace("\r\n", " ").replace(['\r', '\n'], " ")
    }
}

/// Contact page state
///
/// Each visit of the page gets its own number; a mail result tagged with an
/// earlier visit arrives after the page was torn down and is dropped.
#[derive(Debug, Clone)]
pub struct ContactState {
    pub fields: ContactFields,
    pub focus: Field,
    pub editing: bool,
    /// A request is in flight; the submit control is disabled
    pub submitting: bool,
    /// The success acknowledgment is shown
    pub submitted: bool,
    /// Inline prompt on the first empty required field
    pub prompt: Option<Field>,
    /// Blocking notification awaiting dismissal
    pub notice: Option<Notice>,
    pub ack_duration: Duration,
    visit: u64,
    next_seq: u64,
    ack_token: u64,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}

impl ContactState {
    pub fn new(ack_duration: Duration) -> Self {
        Self {
            fields: ContactFields::default(),
            focus: Field::default(),
            editing: false,
            submitting: false,
            submitted: false,
            prompt: None,
            notice: None,
            ack_duration,
            visit: 0,
            next_seq: 0,
            ack_token: 0,
        }
    }

    pub fn visit(&self) -> u64 {
        self.visit
    }

    pub fn update(&mut self, msg: ContactMsg, engine: &dyn TextAreaEngine) -> Vec<Cmd> {
        match msg {
            ContactMsg::StartEditing => {
                if self.notice.is_none() {
                    self.editing = true;
                }
                vec![]
            }
            ContactMsg::StopEditing => {
                self.editing = false;
                vec![]
            }
            ContactMsg::FocusNext => {
                self.focus = self.focus.next();
                vec![]
            }
            ContactMsg::FocusPrev => {
                self.focus = self.focus.prev();
                vec![]
            }
            ContactMsg::Focus(field) => {
                self.focus = field;
                vec![]
            }
            ContactMsg::Input(key) => {
                self.apply_input(key, engine);
                vec![]
            }
            ContactMsg::SetField(field, value) => {
                let value = single_line(field, value);
                *self.fields.get_mut(field) = TextBuffer::with_content(value);
                self.clear_prompt_if_filled(field);
                vec![]
            }
            ContactMsg::Paste(text) => {
                self.apply_paste(text, engine);
                vec![]
            }
            ContactMsg::Submit => self.submit(),
            ContactMsg::MailCompleted {
                submission,
                outcome,
            } => self.complete(submission, outcome),
            ContactMsg::DismissNotice => {
                self.notice = None;
                vec![]
            }
        }
    }

    /// Tear down on leaving the page. Late mail results for this visit are ignored.
    pub fn unmount(&mut self) -> Vec<Cmd> {
        let ack_duration = self.ack_duration;
        let visit = self.visit.wrapping_add(1);
        let next_seq = self.next_seq;
        let ack_token = self.ack_token;
        *self = Self::new(ack_duration);
        self.visit = visit;
        self.next_seq = next_seq;
        self.ack_token = ack_token;
        vec![Cmd::CancelTimer {
            id: TimerId::AckDismiss,
        }]
    }

    pub fn on_timer(&mut self, key: TimerKey) -> Vec<Cmd> {
        if key.id == TimerId::AckDismiss && key.token == self.ack_token {
            self.submitted = false;
        }
        vec![]
    }

    fn apply_input(&mut self, key: KeyEvent, engine: &dyn TextAreaEngine) {
        if !self.editing {
            return;
        }
        let field = self.focus;
        let updated = engine.apply_key(self.fields.get(field), key);
        // Shift-Enter, Ctrl-M and friends would break a single-line field
        if !field.is_multiline() && updated.content.contains('\n') {
            return;
        }
        *self.fields.get_mut(field) = updated;
        self.clear_prompt_if_filled(field);
    }

    fn apply_paste(&mut self, text: String, engine: &dyn TextAreaEngine) {
        if !self.editing {
            return;
        }
        let field = self.focus;
        let text = single_line(field, text);
        let updated = engine.insert_text(self.fields.get(field), &text);
        *self.fields.get_mut(field) = updated;
        self.clear_prompt_if_filled(field);
    }

    fn clear_prompt_if_filled(&mut self, field: Field) {
        if self.prompt == Some(field) && !self.fields.get(field).is_empty() {
            self.prompt = None;
        }
    }

    fn submit(&mut self) -> Vec<Cmd> {
        if self.submitting {
            return vec![Cmd::LogInfo {
                message: "Submit ignored while a message is being sent".to_string(),
            }];
        }

        let payload = self.fields.payload();
        if let Some(missing) = payload.first_missing() {
            self.prompt = Some(missing);
            self.focus = missing;
            self.editing = true;
            return vec![];
        }

        self.prompt = None;
        self.submitting = true;
        self.next_seq += 1;
        vec![Cmd::SendMail {
            submission: SubmissionId {
                visit: self.visit,
                seq: self.next_seq,
            },
            payload,
        }]
    }

    fn complete(&mut self, submission: SubmissionId, outcome: MailOutcome) -> Vec<Cmd> {
        if submission.visit != self.visit {
            return vec![Cmd::LogInfo {
                message: format!("Dropping mail result for a closed contact page: {outcome:?}"),
            }];
        }

        self.submitting = false;
        match outcome {
            MailOutcome::Sent => {
                self.fields.clear();
                self.focus = Field::default();
                self.editing = false;
                self.submitted = true;
                self.ack_token += 1;
                vec![Cmd::schedule(
                    TimerId::AckDismiss,
                    self.ack_token,
                    self.ack_duration,
                )]
            }
            failed => {
                self.notice = failed.notice();
                vec![Cmd::LogError {
                    message: format!("Contact form submission failed: {failed:?}"),
                }]
            }
        }
    }
}
