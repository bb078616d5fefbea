use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

/// Placeholder shown in the parent pane when the current directory is the root.
pub const NO_PARENT_MESSAGE: &str = "No files under ROOT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: OsString,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<OsString>) -> Self {
        Self { name: name.into() }
    }

    pub fn display_name(&self) -> Cow<'_, str> {
        self.name.to_string_lossy()
    }
}

/// A directory listing together with its highlighted row.
///
/// `selected` is `None` only for an empty listing; otherwise it always
/// indexes into `entries`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryContent {
    entries: Vec<DirectoryEntry>,
    selected: Option<usize>,
}

impl DirectoryContent {
    /// Listing with the first entry selected.
    pub fn new(entries: Vec<DirectoryEntry>) -> Self {
        let selected = if entries.is_empty() { None } else { Some(0) };
        Self { entries, selected }
    }

    /// Listing with the entry called `name` selected, if there is one.
    pub fn with_selected_name(entries: Vec<DirectoryEntry>, name: &OsStr) -> Option<Self> {
        let selected = entries.iter().position(|entry| entry.name == name)?;
        Some(Self {
            entries,
            selected: Some(selected),
        })
    }

    pub fn entries(&self) -> &[DirectoryEntry] {
        &self.entries
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.selected.and_then(|idx| self.entries.get(idx))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn select_next(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some((idx + 1).min(self.entries.len() - 1));
        }
    }

    pub fn select_previous(&mut self) {
        if let Some(idx) = self.selected {
            self.selected = Some(idx.saturating_sub(1));
        }
    }
}

/// What a single pane shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    Directory(DirectoryContent),
    Text(String),
}

impl Content {
    pub fn as_directory(&self) -> Option<&DirectoryContent> {
        match self {
            Content::Directory(dir) => Some(dir),
            Content::Empty | Content::Text(_) => None,
        }
    }

    pub fn no_parent() -> Self {
        Content::Text(NO_PARENT_MESSAGE.to_string())
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            Content::Empty => "empty",
            Content::Directory(_) => "directory",
            Content::Text(_) => "text",
        }
    }
}

/// The triad of panes plus the directory they are centred on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    pub previous: Content,
    pub current: Content,
    /// Reserved for a preview of the selected child; always `Content::Empty`.
    pub next: Content,
    pub current_path: PathBuf,
}
