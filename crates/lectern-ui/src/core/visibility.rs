//! Open/closed state of the settings panel.
//!
//! # Design
//! - One reducer owns the flag; every event is applied to the current value, never a captured copy.
//! - Pointer-down events only carry whether the target was inside the panel region.
//! - While the panel is closed, pointer-down events are ignored.

use std::rc::Rc;
use yew::Reducible;

/// Events that can change panel visibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityAction {
    /// The toggle control was activated.
    Toggle,
    /// A document-level pointer-down happened while the dismiss listener was attached.
    PointerDown {
        /// Whether the event target lies inside the panel region.
        inside: bool,
    },
}

/// Visibility flag for the settings panel. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelVisibility {
    open: bool,
}

impl PanelVisibility {
    /// Whether the panel is expanded.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Whether the outside-click listener should be attached.
    #[must_use]
    pub const fn wants_dismiss_listener(self) -> bool {
        self.open
    }

    /// Next state after `action`.
    #[must_use]
    pub const fn apply(self, action: VisibilityAction) -> Self {
        match action {
            VisibilityAction::Toggle => Self { open: !self.open },
            VisibilityAction::PointerDown { inside: false } if self.open => Self { open: false },
            VisibilityAction::PointerDown { .. } => self,
        }
    }
}

impl Reducible for PanelVisibility {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Whether a key press activates a button-like control.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::{PanelVisibility, VisibilityAction, is_activation_key};
    use std::rc::Rc;
    use yew::Reducible;

    const OUTSIDE: VisibilityAction = VisibilityAction::PointerDown { inside: false };
    const INSIDE: VisibilityAction = VisibilityAction::PointerDown { inside: true };

    fn opened() -> PanelVisibility {
        PanelVisibility::default().apply(VisibilityAction::Toggle)
    }

    #[test]
    fn starts_closed_and_toggles() {
        let closed = PanelVisibility::default();
        assert!(!closed.is_open());
        assert!(opened().is_open());
        assert!(!opened().apply(VisibilityAction::Toggle).is_open());
    }

    #[test]
    fn outside_pointer_down_closes_open_panel() {
        assert!(!opened().apply(OUTSIDE).is_open());
    }

    #[test]
    fn inside_pointer_down_keeps_panel_open() {
        assert!(opened().apply(INSIDE).is_open());
    }

    #[test]
    fn pointer_down_while_closed_is_ignored() {
        let closed = PanelVisibility::default();
        assert_eq!(closed.apply(OUTSIDE), closed);
        assert_eq!(closed.apply(INSIDE), closed);
    }

    #[test]
    fn toggle_click_on_open_panel_closes_exactly_once() {
        // The toggle control is part of the panel region, so its pointer-down is inside.
        let after = opened().apply(INSIDE).apply(VisibilityAction::Toggle);
        assert!(!after.is_open());
        assert!(!after.wants_dismiss_listener());
    }

    #[test]
    fn repeated_outside_events_do_not_reopen() {
        let after = opened().apply(OUTSIDE).apply(OUTSIDE);
        assert!(!after.is_open());
    }

    #[test]
    fn reducer_keeps_the_same_rc_when_nothing_changes() {
        let closed = Rc::new(PanelVisibility::default());
        let same = Rc::clone(&closed).reduce(OUTSIDE);
        assert!(Rc::ptr_eq(&closed, &same));
        let open = Rc::clone(&closed).reduce(VisibilityAction::Toggle);
        assert!(open.is_open());
    }

    #[test]
    fn enter_and_space_activate() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
        assert!(!is_activation_key("a"));
    }
}
