pub(crate) mod article;
pub(crate) mod controls;
pub(crate) mod params_panel;
