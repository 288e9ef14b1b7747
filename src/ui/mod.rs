pub mod i18n;
pub mod state;
pub mod theme;
