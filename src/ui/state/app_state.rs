use chrono::{Local, NaiveDate};
use dioxus::prelude::{use_signal, Signal};

use crate::config::AppConfig;
use crate::domain::entities::entry::JournalEntry;
use crate::domain::entities::language::Language;
use crate::ui::theme::Theme;
use crate::usecase::services::chart_service::LIQUID_FIELDS;
use crate::usecase::services::entry_service::EntryDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Entry,
    Charts,
    History,
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub language: Signal<Language>,
    pub theme: Signal<Theme>,
    pub tab: Signal<Tab>,
    pub entries: Signal<Vec<JournalEntry>>,
    pub draft: Signal<EntryDraft>,
    pub selected_liquids: Signal<Vec<&'static str>>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

impl AppState {
    pub fn new(config: &AppConfig) -> Self {
        let language = config.language;
        let theme = config.theme;
        Self {
            language: use_signal(move || language),
            theme: use_signal(move || theme),
            tab: use_signal(|| Tab::Entry),
            entries: use_signal(Vec::<JournalEntry>::new),
            draft: use_signal(|| EntryDraft::defaults_for(today(), None)),
            selected_liquids: use_signal(|| LIQUID_FIELDS.to_vec()),
            busy: use_signal(|| false),
            status: use_signal(String::new),
        }
    }
}
