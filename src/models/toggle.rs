//! Open/closed state machine for dropdown controls.
//!
//! The language toggle renders from [`DropdownState`] and feeds every user
//! interaction through [`DropdownState::handle`]. A selection is reported
//! back to the caller; the machine never stores the selected value.

/// Dropdown visibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DropdownState {
    #[default]
    Closed,
    Open,
}

/// User interactions the dropdown reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropdownEvent {
    /// The trigger button was activated.
    Activate,
    /// An option with this code was chosen.
    Select(String),
    /// Escape was pressed anywhere in the window.
    Escape,
    /// A pointer went down somewhere in the window.
    PointerDown { inside: bool },
}

impl DropdownState {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Apply one event, returning the next state and the code to report, if any.
    pub fn handle(self, event: DropdownEvent) -> (Self, Option<String>) {
        match (self, event) {
            (Self::Closed, DropdownEvent::Activate) => (Self::Open, None),
            (Self::Open, DropdownEvent::Activate) => (Self::Closed, None),
            (Self::Open, DropdownEvent::Select(code)) => (Self::Closed, Some(code)),
            (Self::Open, DropdownEvent::Escape) => (Self::Closed, None),
            (Self::Open, DropdownEvent::PointerDown { inside: false }) => (Self::Closed, None),
            (state, _) => (state, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open() -> DropdownState {
        DropdownState::default().handle(DropdownEvent::Activate).0
    }

    #[test]
    fn test_initially_closed() {
        assert_eq!(DropdownState::default(), DropdownState::Closed);
        assert!(!DropdownState::default().is_open());
    }

    #[test]
    fn test_activate_toggles() {
        let state = open();
        assert!(state.is_open());
        assert_eq!(
            state.handle(DropdownEvent::Activate),
            (DropdownState::Closed, None)
        );
    }

    #[test]
    fn test_select_reports_code_once_and_closes() {
        let (state, selected) = open().handle(DropdownEvent::Select("hi".into()));
        assert_eq!(state, DropdownState::Closed);
        assert_eq!(selected.as_deref(), Some("hi"));

        // A second selection against the now-closed dropdown reports nothing.
        let (state, selected) = state.handle(DropdownEvent::Select("hi".into()));
        assert_eq!(state, DropdownState::Closed);
        assert_eq!(selected, None);
    }

    #[test]
    fn test_escape_closes() {
        assert_eq!(
            open().handle(DropdownEvent::Escape),
            (DropdownState::Closed, None)
        );
    }

    #[test]
    fn test_pointer_outside_closes() {
        assert_eq!(
            open().handle(DropdownEvent::PointerDown { inside: false }),
            (DropdownState::Closed, None)
        );
    }

    #[test]
    fn test_pointer_inside_keeps_open() {
        assert_eq!(
            open().handle(DropdownEvent::PointerDown { inside: true }),
            (DropdownState::Open, None)
        );
    }

    #[test]
    fn test_dismiss_events_ignored_while_closed() {
        for event in [
            DropdownEvent::Escape,
            DropdownEvent::PointerDown { inside: false },
            DropdownEvent::PointerDown { inside: true },
        ] {
            assert_eq!(
                DropdownState::Closed.handle(event),
                (DropdownState::Closed, None)
            );
        }
    }
}
