//! Key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked the shell to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the program.
    Quit,
    /// Parse the form and draw it.
    Render,
    /// Blank the axes.
    Clear,
    /// Switch between 2D and 3D.
    ToggleMode,
    /// Focus the next input.
    FocusNext,
    /// Focus the previous input.
    FocusPrev,
    /// Type a character into the focused input.
    Input(char),
    /// Delete the last character of the focused input.
    Backspace,
    /// Empty the focused input.
    ClearField,
    /// Next surface palette.
    CyclePalette,
    /// Next theme.
    CycleTheme,
    /// Rotate the 3D view by whole steps.
    Orbit {
        /// Azimuth steps.
        azimuth: i32,
        /// Elevation steps.
        elevation: i32,
    },
    /// Restore the default 3D view.
    ResetView,
    /// Copy the scene summary to the clipboard.
    CopyScene,
    /// Close the error popup.
    Dismiss,
}

/// Map a key press to an action.
///
/// While the error popup is shown only dismissing and quitting are possible.
pub fn action_for(key: KeyEvent, error_visible: bool) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if error_visible {
        return match (key.modifiers, key.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c'))
            | (KeyModifiers::CONTROL, KeyCode::Char('q')) => Some(Action::Quit),
            (_, KeyCode::Esc) | (_, KeyCode::Enter) => Some(Action::Dismiss),
            _ => None,
        };
    }

    let action = match (key.modifiers, key.code) {
        // Quit
        (KeyModifiers::CONTROL, KeyCode::Char('c'))
        | (KeyModifiers::CONTROL, KeyCode::Char('q')) => Action::Quit,

        // Render / clear / mode
        (_, KeyCode::Enter) | (_, KeyCode::F(5)) => Action::Render,
        (KeyModifiers::CONTROL, KeyCode::Char('l')) => Action::Clear,
        (_, KeyCode::F(2)) | (KeyModifiers::CONTROL, KeyCode::Char('t')) => Action::ToggleMode,

        // Form navigation
        (_, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Down) => Action::FocusNext,
        (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Up) => Action::FocusPrev,
        (_, KeyCode::Backspace) => Action::Backspace,
        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Action::ClearField,

        // View
        (KeyModifiers::CONTROL, KeyCode::Left) => Action::Orbit {
            azimuth: -1,
            elevation: 0,
        },
        (KeyModifiers::CONTROL, KeyCode::Right) => Action::Orbit {
            azimuth: 1,
            elevation: 0,
        },
        (KeyModifiers::CONTROL, KeyCode::Up) => Action::Orbit {
            azimuth: 0,
            elevation: 1,
        },
        (KeyModifiers::CONTROL, KeyCode::Down) => Action::Orbit {
            azimuth: 0,
            elevation: -1,
        },
        (KeyModifiers::CONTROL, KeyCode::Char('r')) => Action::ResetView,
        (KeyModifiers::CONTROL, KeyCode::Char('p')) => Action::CyclePalette,
        (_, KeyCode::F(3)) => Action::CycleTheme,
        (KeyModifiers::CONTROL, KeyCode::Char('y')) => Action::CopyScene,

        // Typing
        (KeyModifiers::NONE, KeyCode::Char(c)) | (KeyModifiers::SHIFT, KeyCode::Char(c)) => {
            Action::Input(c)
        },

        _ => return None,
    };
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn typing_goes_to_input() {
        assert_eq!(
            action_for(key(KeyCode::Char('x'), KeyModifiers::NONE), false),
            Some(Action::Input('x'))
        );
        assert_eq!(
            action_for(key(KeyCode::Char('<'), KeyModifiers::SHIFT), false),
            Some(Action::Input('<'))
        );
    }

    #[test]
    fn control_bindings() {
        assert_eq!(
            action_for(key(KeyCode::Enter, KeyModifiers::NONE), false),
            Some(Action::Render)
        );
        assert_eq!(
            action_for(key(KeyCode::Char('l'), KeyModifiers::CONTROL), false),
            Some(Action::Clear)
        );
        assert_eq!(
            action_for(key(KeyCode::F(2), KeyModifiers::NONE), false),
            Some(Action::ToggleMode)
        );
        assert_eq!(
            action_for(key(KeyCode::Left, KeyModifiers::CONTROL), false),
            Some(Action::Orbit {
                azimuth: -1,
                elevation: 0
            })
        );
    }

    #[test]
    fn popup_is_modal() {
        assert_eq!(
            action_for(key(KeyCode::Char('x'), KeyModifiers::NONE), true),
            None
        );
        assert_eq!(
            action_for(key(KeyCode::Esc, KeyModifiers::NONE), true),
            Some(Action::Dismiss)
        );
        assert_eq!(
            action_for(key(KeyCode::Char('c'), KeyModifiers::CONTROL), true),
            Some(Action::Quit)
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut release = key(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(action_for(release, false), None);
    }
}
