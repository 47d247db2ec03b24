use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within a text buffer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

/// Snapshot of an editable text field
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextBuffer {
    pub content: String,
    pub cursor_position: CursorPosition,
    pub selection: Option<TextSelection>,
}

impl TextBuffer {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Buffer holding `content` with the cursor after its last character.
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let line = content.matches('\n').count();
        let column = content
            .rsplit('\n')
            .next()
            .map(|last| last.chars().count())
            .unwrap_or_default();
        Self {
            content,
            cursor_position: CursorPosition { line, column },
            selection: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.content.split('\n').map(str::to_string).collect()
    }
}

/// Top-level pages, in navigation order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum Page {
    #[default]
    Home,
    About,
    Projects,
    Resume,
    Contact,
}

impl Page {
    pub fn next(self) -> Self {
        let pages: Vec<Page> = Page::iter().collect();
        let idx = pages.iter().position(|p| *p == self).unwrap_or_default();
        pages[(idx + 1) % pages.len()]
    }

    pub fn prev(self) -> Self {
        let pages: Vec<Page> = Page::iter().collect();
        let idx = pages.iter().position(|p| *p == self).unwrap_or_default();
        pages[(idx + pages.len() - 1) % pages.len()]
    }
}

/// Panels of the home page below the hero block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize)]
pub enum Section {
    #[default]
    Skills,
    Experience,
    Projects,
}

impl Section {
    pub fn next(self) -> Self {
        match self {
            Section::Skills => Section::Experience,
            Section::Experience => Section::Projects,
            Section::Projects => Section::Skills,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Section::Skills => Section::Projects,
            Section::Experience => Section::Skills,
            Section::Projects => Section::Experience,
        }
    }
}

/// An entry in the navigation bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: &'static str,
    pub page: Page,
    /// Home-page panel the entry jumps to, if any
    pub section: Option<Section>,
}

pub const NAV_ENTRIES: [NavEntry; 6] = [
    NavEntry {
        label: "Home",
        page: Page::Home,
        section: None,
    },
    NavEntry {
        label: "About",
        page: Page::About,
        section: None,
    },
    NavEntry {
        label: "Experience",
        page: Page::Home,
        section: Some(Section::Experience),
    },
    NavEntry {
        label: "Projects",
        page: Page::Projects,
        section: None,
    },
    NavEntry {
        label: "Resume",
        page: Page::Resume,
        section: None,
    },
    NavEntry {
        label: "Contact",
        page: Page::Contact,
        section: None,
    },
];
