//! Presentation primitives used by the settings panel.
//!
//! # Design
//! - Pickers only ever emit options from their category's catalog.
//! - Buttons and toggles emit once per activation and hold no state.

pub(crate) mod action_button;
pub(crate) mod arrow_button;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod separator;

pub(crate) use action_button::{ActionButton, ActionKind};
pub(crate) use arrow_button::ArrowButton;
pub(crate) use radio_group::OptionRadioGroup;
pub(crate) use select::OptionSelect;
pub(crate) use separator::Separator;
