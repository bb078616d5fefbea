/// Navigation commands the key handler can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NavCommand {
    MoveUp,
    MoveDown,
    Enter,
    Parent,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum StatusKind {
    /// An ordinary failure such as a permission error; the user can retry.
    Error,
    /// The engine's assumptions about the filesystem stopped holding.
    Diagnostic,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct StatusMessage {
    pub(super) kind: StatusKind,
    pub(super) text: String,
}
