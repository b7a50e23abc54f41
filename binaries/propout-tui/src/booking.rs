//! Shared visibility state for the booking dialog.
//!
//! One owned value on [`crate::app::App`]; every page reads it, property
//! cards and the hero CTA write it through the two methods below. The
//! selection is only meaningful while the dialog is open and closing always
//! clears it, so a later `open(None)` can never inherit a stale property.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingState {
    pub is_open: bool,
    pub selected_property: Option<String>,
}

impl BookingState {
    /// Show the dialog, optionally targeting a property. The id is not
    /// validated here; the backend rejects unknown ids at submission.
    pub fn open(&mut self, property_id: Option<&str>) {
        self.is_open = true;
        self.selected_property = property_id.map(str::to_string);
    }

    /// Hide the dialog and drop any selection, unconditionally.
    pub fn close(&mut self) {
        self.is_open = false;
        self.selected_property = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed_and_unselected() {
        let state = BookingState::default();
        assert!(!state.is_open);
        assert!(state.selected_property.is_none());
    }

    #[test]
    fn test_open_without_property() {
        let mut state = BookingState::default();
        state.open(None);
        assert!(state.is_open);
        assert_eq!(state.selected_property, None);
    }

    #[test]
    fn test_open_with_property() {
        let mut state = BookingState::default();
        state.open(Some("p1"));
        assert!(state.is_open);
        assert_eq!(state.selected_property.as_deref(), Some("p1"));
    }

    #[test]
    fn test_close_always_clears_selection() {
        let mut state = BookingState::default();
        state.open(Some("p1"));
        state.close();
        assert_eq!(
            state,
            BookingState {
                is_open: false,
                selected_property: None
            }
        );

        // Closing an already-closed dialog is a no-op with the same result.
        state.close();
        assert!(!state.is_open);
        assert!(state.selected_property.is_none());
    }

    #[test]
    fn test_reopen_without_id_sees_no_stale_selection() {
        let mut state = BookingState::default();
        state.open(Some("p1"));
        state.close();
        state.open(None);
        assert!(state.is_open);
        assert_eq!(state.selected_property, None);
    }
}
