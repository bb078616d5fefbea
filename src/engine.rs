//! Navigation state engine.
//!
//! [`NavigationEngine`] owns the previous/current/next triad and the path the
//! triad is centred on. Every transition either fully applies or leaves the
//! state untouched and returns the error.

use crate::content::{Content, DirectoryContent, DirectoryEntry, NavigationState};
use crate::dir_reader::{DirectorySource, FsDirectorySource};
use crate::error::{NavigationError, Result};
use crate::paths;
use std::path::Path;
use tracing::{debug, warn};

pub struct NavigationEngine<S: DirectorySource = FsDirectorySource> {
    source: S,
    state: NavigationState,
}

impl NavigationEngine<FsDirectorySource> {
    pub fn new(start_path: &Path) -> Result<Self> {
        Self::with_source(start_path, FsDirectorySource)
    }
}

impl<S: DirectorySource> NavigationEngine<S> {
    pub fn with_source(start_path: &Path, source: S) -> Result<Self> {
        let current_path = paths::normalize(start_path)?;
        let current = DirectoryContent::new(source.read_entries(&current_path)?);
        let previous = parent_view(&source, &current_path)?;

        debug!(path = %current_path.display(), "navigation initialised");

        Ok(Self {
            source,
            state: NavigationState {
                previous,
                current: Content::Directory(current),
                next: Content::Empty,
                current_path,
            },
        })
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_path(&self) -> &Path {
        &self.state.current_path
    }

    pub fn selected_entry(&self) -> Option<&DirectoryEntry> {
        self.state.current.as_directory()?.selected_entry()
    }

    pub fn move_selection_down(&mut self) -> Result<()> {
        self.current_directory_mut()?.select_next();
        Ok(())
    }

    pub fn move_selection_up(&mut self) -> Result<()> {
        self.current_directory_mut()?.select_previous();
        Ok(())
    }

    /// Descend into the selected entry. Does nothing in an empty directory.
    pub fn enter(&mut self) -> Result<()> {
        let current = self.current_directory()?;
        let Some(selected) = current.selected_entry() else {
            return Ok(());
        };

        let child_path = self.state.current_path.join(&selected.name);
        let child = DirectoryContent::new(self.source.read_entries(&child_path)?);

        debug!(path = %child_path.display(), "entered directory");

        let parent = std::mem::replace(&mut self.state.current, Content::Directory(child));
        self.state.previous = parent;
        self.state.current_path = child_path;
        Ok(())
    }

    /// Ascend to the parent directory. Does nothing at the filesystem root.
    pub fn go_to_parent_directory(&mut self) -> Result<()> {
        let Some(parent_path) = paths::parent(&self.state.current_path) else {
            return Ok(());
        };
        let parent_path = parent_path.to_path_buf();

        if self.state.previous.as_directory().is_none() {
            return Err(inconsistent(
                &self.state.current_path,
                format!(
                    "parent pane holds {} content instead of a directory listing",
                    self.state.previous.kind()
                ),
            ));
        }

        let grandparent = parent_view(&self.source, &parent_path)?;

        debug!(path = %parent_path.display(), "ascended to parent directory");

        let parent = std::mem::replace(&mut self.state.previous, grandparent);
        self.state.current = parent;
        self.state.current_path = parent_path;
        Ok(())
    }

    fn current_directory(&self) -> Result<&DirectoryContent> {
        match &self.state.current {
            Content::Directory(dir) => Ok(dir),
            other @ (Content::Empty | Content::Text(_)) => {
                Err(wrong_current_pane(&self.state.current_path, other))
            }
        }
    }

    fn current_directory_mut(&mut self) -> Result<&mut DirectoryContent> {
        let state = &mut self.state;
        match &mut state.current {
            Content::Directory(dir) => Ok(dir),
            other @ (Content::Empty | Content::Text(_)) => {
                Err(wrong_current_pane(&state.current_path, other))
            }
        }
    }
}

fn wrong_current_pane(path: &Path, content: &Content) -> NavigationError {
    inconsistent(
        path,
        format!(
            "current pane holds {} content instead of a directory listing",
            content.kind()
        ),
    )
}

fn inconsistent(path: &Path, message: String) -> NavigationError {
    warn!(path = %path.display(), "{message}");
    NavigationError::InconsistentState(message)
}

/// Build the pane showing `path`'s parent with `path` itself highlighted,
/// or the placeholder text when `path` is the root.
fn parent_view<S: DirectorySource>(source: &S, path: &Path) -> Result<Content> {
    let (Some(parent), Some(name)) = (paths::parent(path), paths::basename(path)) else {
        return Ok(Content::no_parent());
    };

    let entries = source.read_entries(parent)?;
    DirectoryContent::with_selected_name(entries, name)
        .map(Content::Directory)
        .ok_or_else(|| {
            inconsistent(
                path,
                format!(
                    "{} is missing from the listing of its parent {}",
                    name.to_string_lossy(),
                    parent.display()
                ),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NO_PARENT_MESSAGE;
    use crate::dir_reader::MockDirectorySource;
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    /// Mock source serving fixed listings; anything listed in `files` reads as
    /// a plain file and everything else is missing.
    fn scripted(listings: &[(&str, &[&str])], files: &[&str]) -> MockDirectorySource {
        let listings: HashMap<PathBuf, Vec<DirectoryEntry>> = listings
            .iter()
            .map(|(path, names)| {
                let entries = names.iter().map(|name| DirectoryEntry::new(*name)).collect();
                (PathBuf::from(path), entries)
            })
            .collect();
        let files: Vec<PathBuf> = files.iter().map(PathBuf::from).collect();

        let mut source = MockDirectorySource::new();
        source.expect_read_entries().returning(move |path| {
            if files.iter().any(|file| file == path) {
                return Err(NavigationError::NotADirectory {
                    path: path.to_path_buf(),
                });
            }
            listings
                .get(path)
                .cloned()
                .ok_or_else(|| NavigationError::NotFound {
                    path: path.to_path_buf(),
                })
        });
        source
    }

    fn home_tree() -> MockDirectorySource {
        scripted(
            &[
                ("/", &["etc", "home"]),
                ("/home", &["guest", "user"]),
                ("/home/user", &["docs", "music", "notes.txt"]),
                ("/home/user/docs", &["a.md", "b.md"]),
                ("/home/user/music", &[]),
            ],
            &["/home/user/notes.txt"],
        )
    }

    fn current(engine: &NavigationEngine<impl DirectorySource>) -> &DirectoryContent {
        engine.state().current.as_directory().unwrap()
    }

    fn previous(engine: &NavigationEngine<impl DirectorySource>) -> &DirectoryContent {
        engine.state().previous.as_directory().unwrap()
    }

    fn select_named(engine: &mut NavigationEngine<impl DirectorySource>, name: &str) {
        while engine.selected_entry().unwrap().display_name() != name {
            let before = current(engine).selected();
            engine.move_selection_down().unwrap();
            assert_ne!(before, current(engine).selected(), "{name} not listed");
        }
    }

    #[test]
    fn test_init_selects_first_entry_and_locates_self_in_parent() {
        // Act
        let engine = NavigationEngine::with_source(Path::new("/home/user/"), home_tree()).unwrap();

        // Assert
        let state = engine.state();
        assert_eq!(state.current_path, PathBuf::from("/home/user"));
        assert_eq!(current(&engine).selected(), Some(0));
        assert_eq!(previous(&engine).selected(), Some(1));
        assert_eq!(previous(&engine).selected_entry().unwrap().display_name(), "user");
        assert_eq!(state.next, Content::Empty);
    }

    #[test]
    fn test_init_parent_selection_follows_listing_order() {
        // Arrange
        let source = scripted(
            &[("/home", &["user", "guest"]), ("/home/user", &["docs"])],
            &[],
        );

        // Act
        let engine = NavigationEngine::with_source(Path::new("/home/user"), source).unwrap();

        // Assert
        assert_eq!(previous(&engine).selected(), Some(0));
    }

    #[test]
    fn test_init_at_root_shows_placeholder() {
        // Act
        let engine = NavigationEngine::with_source(Path::new("/"), home_tree()).unwrap();

        // Assert
        assert_eq!(engine.current_path(), Path::new("/"));
        assert_eq!(
            engine.state().previous,
            Content::Text(NO_PARENT_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_init_fails_when_start_path_is_missing() {
        // Act
        let result = NavigationEngine::with_source(Path::new("/nowhere"), home_tree());

        // Assert
        assert!(matches!(result, Err(NavigationError::NotFound { .. })));
    }

    #[test]
    fn test_init_fails_when_start_path_is_a_file() {
        // Act
        let result = NavigationEngine::with_source(Path::new("/home/user/notes.txt"), home_tree());

        // Assert
        assert!(matches!(result, Err(NavigationError::NotADirectory { .. })));
    }

    #[test]
    fn test_init_reports_child_missing_from_parent_listing() {
        // Arrange
        let source = scripted(&[("/home", &["guest"]), ("/home/user", &["docs"])], &[]);

        // Act
        let result = NavigationEngine::with_source(Path::new("/home/user"), source);

        // Assert
        let err = result.err().unwrap();
        assert!(err.is_inconsistent());
    }

    #[test]
    fn test_move_selection_down_clamps_at_last_entry() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home/user"), home_tree()).unwrap();

        // Act / Assert
        engine.move_selection_down().unwrap();
        engine.move_selection_down().unwrap();
        assert_eq!(current(&engine).selected(), Some(2));
        assert_eq!(engine.selected_entry().unwrap().display_name(), "notes.txt");
        engine.move_selection_down().unwrap();
        assert_eq!(current(&engine).selected(), Some(2));
    }

    #[test]
    fn test_move_selection_up_clamps_at_first_entry() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home/user"), home_tree()).unwrap();

        // Act
        engine.move_selection_up().unwrap();

        // Assert
        assert_eq!(current(&engine).selected(), Some(0));
    }

    #[test]
    fn test_moves_in_empty_directory_are_noops() {
        // Arrange
        let mut engine =
            NavigationEngine::with_source(Path::new("/home/user/music"), home_tree()).unwrap();

        // Act
        engine.move_selection_down().unwrap();
        engine.move_selection_up().unwrap();
        engine.enter().unwrap();

        // Assert
        assert_eq!(current(&engine).selected(), None);
        assert_eq!(engine.current_path(), Path::new("/home/user/music"));
    }

    #[test]
    fn test_enter_descends_into_selected_directory() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home/user"), home_tree()).unwrap();
        let listing_before = current(&engine).clone();

        // Act
        engine.enter().unwrap();

        // Assert
        assert_eq!(engine.current_path(), Path::new("/home/user/docs"));
        assert_eq!(engine.state().previous, Content::Directory(listing_before));
        assert_eq!(previous(&engine).selected_entry().unwrap().display_name(), "docs");
        assert_eq!(current(&engine).selected(), Some(0));
        assert_eq!(current(&engine).entries().len(), 2);
    }

    #[test]
    fn test_enter_on_file_fails_and_keeps_state() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home/user"), home_tree()).unwrap();
        engine.move_selection_down().unwrap();
        engine.move_selection_down().unwrap();
        let before = engine.state().clone();

        // Act
        let result = engine.enter();

        // Assert
        assert!(matches!(result, Err(NavigationError::NotADirectory { .. })));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_enter_then_parent_restores_path_and_selection() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home/user"), home_tree()).unwrap();
        engine.move_selection_down().unwrap();
        let before = engine.state().clone();

        // Act
        engine.enter().unwrap();
        engine.go_to_parent_directory().unwrap();

        // Assert
        assert_eq!(engine.current_path(), Path::new("/home/user"));
        assert_eq!(current(&engine).selected(), Some(1));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_go_to_parent_rebuilds_grandparent_view() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home/user"), home_tree()).unwrap();

        // Act
        engine.go_to_parent_directory().unwrap();

        // Assert
        assert_eq!(engine.current_path(), Path::new("/home"));
        assert_eq!(current(&engine).selected_entry().unwrap().display_name(), "user");
        assert_eq!(previous(&engine).selected_entry().unwrap().display_name(), "home");
    }

    #[test]
    fn test_go_to_parent_reaching_root_uses_placeholder() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/home"), home_tree()).unwrap();

        // Act
        engine.go_to_parent_directory().unwrap();

        // Assert
        assert_eq!(engine.current_path(), Path::new("/"));
        assert_eq!(current(&engine).selected_entry().unwrap().display_name(), "home");
        assert_eq!(engine.state().previous, Content::no_parent());
    }

    #[test]
    fn test_go_to_parent_at_root_is_noop() {
        // Arrange
        let mut engine = NavigationEngine::with_source(Path::new("/"), home_tree()).unwrap();
        let before = engine.state().clone();

        // Act
        engine.go_to_parent_directory().unwrap();

        // Assert
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_go_to_parent_fails_when_grandparent_is_unreadable() {
        // Arrange
        let source = scripted(
            &[("/home/user", &["docs"]), ("/home/user/docs", &["a.md"])],
            &[],
        );
        let mut engine = NavigationEngine::with_source(Path::new("/home/user/docs"), source).unwrap();
        let before = engine.state().clone();

        // Act
        let result = engine.go_to_parent_directory();

        // Assert
        assert!(matches!(result, Err(NavigationError::NotFound { path }) if path == Path::new("/home")));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_go_to_parent_reports_missing_basename_as_inconsistent() {
        // Arrange
        let source = scripted(
            &[
                ("/home", &["guest"]),
                ("/home/user", &["docs"]),
                ("/home/user/docs", &["a.md"]),
            ],
            &[],
        );
        let mut engine = NavigationEngine::with_source(Path::new("/home/user/docs"), source).unwrap();
        let before = engine.state().clone();

        // Act
        let err = engine.go_to_parent_directory().err().unwrap();

        // Assert
        assert!(err.is_inconsistent());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_real_filesystem_round_trip() {
        // Arrange
        let temp = tempdir().unwrap();
        for name in ["alpha", "beta", "gamma"] {
            fs::create_dir(temp.path().join(name)).unwrap();
        }
        fs::write(temp.path().join("beta/inner.txt"), "x").unwrap();
        let mut engine = NavigationEngine::new(temp.path()).unwrap();
        select_named(&mut engine, "beta");
        let selection = current(&engine).selected();

        // Act
        engine.enter().unwrap();
        let inner_path = engine.current_path().to_path_buf();
        let inner_names: Vec<String> = current(&engine)
            .entries()
            .iter()
            .map(|e| e.display_name().into_owned())
            .collect();
        engine.go_to_parent_directory().unwrap();

        // Assert
        assert_eq!(inner_path, temp.path().join("beta"));
        assert_eq!(inner_names, vec!["inner.txt"]);
        assert_eq!(engine.current_path(), temp.path());
        assert_eq!(current(&engine).selected(), selection);
        let temp_name = temp.path().file_name().unwrap();
        assert_eq!(previous(&engine).selected_entry().unwrap().name, temp_name);
    }

    #[test]
    fn test_real_filesystem_enter_file_is_not_a_directory() {
        // Arrange
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("notes.txt"), "x").unwrap();
        let mut engine = NavigationEngine::new(temp.path()).unwrap();

        // Act
        let result = engine.enter();

        // Assert
        assert!(matches!(result, Err(NavigationError::NotADirectory { .. })));
        assert_eq!(engine.current_path(), temp.path());
    }

    #[cfg(unix)]
    #[test]
    fn test_real_filesystem_enter_unreadable_entry_keeps_state() {
        // Arrange
        let temp = tempdir().unwrap();
        let looping = temp.path().join("loop");
        std::os::unix::fs::symlink(&looping, &looping).unwrap();
        let mut engine = NavigationEngine::new(temp.path()).unwrap();
        let before = engine.state().clone();

        // Act
        let result = engine.enter();

        // Assert
        assert!(matches!(result, Err(NavigationError::Io { path, .. }) if path == looping));
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_real_filesystem_root_has_no_parent() {
        // Arrange
        let mut engine = NavigationEngine::new(Path::new("/")).unwrap();

        // Act
        engine.go_to_parent_directory().unwrap();

        // Assert
        assert_eq!(engine.current_path(), Path::new("/"));
        assert_eq!(engine.state().previous, Content::no_parent());
    }
}
