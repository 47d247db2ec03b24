//! Typewriter animator
//!
//! Reveals `text` one character at a time: nothing for `start_delay`, then the
//! first character, then one more character every `speed` until the whole text
//! is shown. The animator only decides *what* happens next; waiting is done by
//! the timer service, which reports back with the [`Activation`] the step was
//! scheduled under. Steps carrying an older activation are ignored, so a
//! restart can never be overtaken by a reveal from the run it replaced.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::text::{char_len, char_prefix};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TypewriterParams {
    pub text: String,
    pub speed: Duration,
    pub start_delay: Duration,
}

impl TypewriterParams {
    pub fn new(text: impl Into<String>, speed: Duration, start_delay: Duration) -> Self {
        Self {
            text: text.into(),
            speed,
            start_delay,
        }
    }
}

/// Identifies one run of the animator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Activation(u64);

impl Activation {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn id(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// What the caller must do after driving the animator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Wait `after`, then call [`Typewriter::advance`] with `activation`.
    Schedule {
        activation: Activation,
        after: Duration,
    },
    /// The full text is now displayed.
    Completed { activation: Activation },
    /// Stale or finished activation; nothing to do.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Typewriter {
    params: TypewriterParams,
    activation: Activation,
    revealed: usize,
    complete: bool,
    running: bool,
}

impl Typewriter {
    pub fn new(params: TypewriterParams) -> Self {
        Self {
            params,
            ..Default::default()
        }
    }

    pub fn params(&self) -> &TypewriterParams {
        &self.params
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Started and not yet complete.
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Number of characters currently shown.
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Longest revealed prefix of the text.
    pub fn display_text(&self) -> &str {
        char_prefix(&self.params.text, self.revealed)
    }

    /// Begin a fresh activation from an empty display.
    pub fn start(&mut self) -> Step {
        self.activation = self.activation.next();
        self.revealed = 0;
        self.complete = false;
        self.running = true;
        Step::Schedule {
            activation: self.activation,
            after: self.params.start_delay,
        }
    }

    /// Abandon the current activation. Any step still in flight becomes stale.
    pub fn stop(&mut self) {
        self.activation = self.activation.next();
        self.revealed = 0;
        self.complete = false;
        self.running = false;
    }

    /// Swap parameters. An animator that was started restarts from zero;
    /// identical parameters leave everything untouched.
    pub fn reconfigure(&mut self, params: TypewriterParams) -> Option<Step> {
        if params == self.params {
            return None;
        }
        self.params = params;
        if self.running || self.complete {
            Some(self.start())
        } else {
            None
        }
    }

    /// Reveal the next character for `activation`.
    pub fn advance(&mut self, activation: Activation) -> Step {
        if !self.running || activation != self.activation {
            return Step::Ignored;
        }

        let len = char_len(&self.params.text);
        if self.revealed < len {
            self.revealed += 1;
        }

        if self.revealed >= len {
            self.complete = true;
            self.running = false;
            Step::Completed { activation }
        } else {
            Step::Schedule {
                activation,
                after: self.params.speed,
            }
        }
    }
}
