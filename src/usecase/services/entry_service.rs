use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};

use crate::domain::entities::entry::JournalEntry;
use crate::domain::entities::language::{day_name, Language};
use crate::domain::time_codec::{duration_hours, format_clock, parse_clock_text};
use crate::usecase::ports::repo::{JournalRepository, RepoError};

pub const DEFAULT_NICO: f64 = 3.17;

/// Inclusive input ranges of the entry form.
pub mod limits {
    pub const WATER_L: (f64, f64) = (0.0, 10.0);
    pub const COFFEE: (i64, i64) = (0, 30);
    pub const BEER_L: (f64, f64) = (0.0, 10.0);
    pub const ALCOOL_CL: (f64, f64) = (0.0, 100.0);
    pub const WINE_CL: (f64, f64) = (0.0, 200.0);
    pub const SODA_L: (f64, f64) = (0.0, 10.0);
    pub const NICO: (f64, f64) = (0.0, 20.0);
    pub const RUN_KM: (f64, f64) = (0.0, 100.0);
    pub const WEIGHT: (f64, f64) = (0.0, 400.0);
}

fn default_wake() -> NaiveTime {
    NaiveTime::from_hms_opt(6, 0, 0).unwrap_or_default()
}

fn default_sleep() -> NaiveTime {
    NaiveTime::from_hms_opt(23, 0, 0).unwrap_or_default()
}

fn clamp(value: f64, (min, max): (f64, f64)) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

/// Values as the entry form holds them, before clamping.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    /// Whether the date already had a stored entry when the draft was loaded.
    pub existing: bool,
    pub nico: f64,
    pub water_l: f64,
    pub coffee: i64,
    pub beer_l: f64,
    pub alcool_cl: f64,
    pub wine_cl: f64,
    pub soda_l: f64,
    pub soiree: bool,
    pub soiree_name: String,
    pub wake_time: NaiveTime,
    pub sleep_time: NaiveTime,
    pub ran: bool,
    pub run_km: f64,
    pub weight: f64,
}

impl EntryDraft {
    pub fn defaults_for(date: NaiveDate, existing: Option<&JournalEntry>) -> Self {
        let Some(entry) = existing else {
            return Self {
                date,
                existing: false,
                nico: DEFAULT_NICO,
                water_l: 0.0,
                coffee: 0,
                beer_l: 0.0,
                alcool_cl: 0.0,
                wine_cl: 0.0,
                soda_l: 0.0,
                soiree: false,
                soiree_name: String::new(),
                wake_time: default_wake(),
                sleep_time: default_sleep(),
                ran: false,
                run_km: 0.0,
                weight: 0.0,
            };
        };

        Self {
            date,
            existing: true,
            nico: entry.nico.unwrap_or(DEFAULT_NICO),
            water_l: entry.water_l,
            coffee: entry.coffee,
            beer_l: entry.beer_l,
            alcool_cl: entry.alcool_cl,
            wine_cl: entry.wine_cl,
            soda_l: entry.soda_l,
            soiree: entry.soiree,
            soiree_name: entry.soiree_name.clone().unwrap_or_default(),
            wake_time: entry
                .wake_time
                .as_deref()
                .and_then(parse_clock_text)
                .unwrap_or_else(default_wake),
            sleep_time: entry
                .sleep_time
                .as_deref()
                .and_then(parse_clock_text)
                .unwrap_or_else(default_sleep),
            ran: entry.ran,
            run_km: entry.run_km,
            weight: entry.weight.unwrap_or(0.0),
        }
    }

    pub fn sleep_hours(&self) -> f64 {
        duration_hours(Some(self.sleep_time), Some(self.wake_time))
    }

    /// Clamps every value into its form range. A zero weight means "not
    /// weighed" and is stored as null; the evening label only survives when
    /// the evening flag is set.
    pub fn to_entry(&self, language: Language) -> JournalEntry {
        let weight = clamp(self.weight, limits::WEIGHT);
        let soiree_name = self.soiree_name.trim();

        JournalEntry {
            date: self.date,
            day_name: day_name(self.date, language).to_string(),
            nico: Some(clamp(self.nico, limits::NICO)),
            water_l: clamp(self.water_l, limits::WATER_L),
            coffee: self.coffee.clamp(limits::COFFEE.0, limits::COFFEE.1),
            beer_l: clamp(self.beer_l, limits::BEER_L),
            alcool_cl: clamp(self.alcool_cl, limits::ALCOOL_CL),
            wine_cl: clamp(self.wine_cl, limits::WINE_CL),
            soda_l: clamp(self.soda_l, limits::SODA_L),
            soiree: self.soiree,
            soiree_name: (self.soiree && !soiree_name.is_empty()).then(|| soiree_name.to_string()),
            wake_time: Some(format_clock(self.wake_time)),
            sleep_time: Some(format_clock(self.sleep_time)),
            sleep_hours: self.sleep_hours(),
            ran: self.ran,
            run_km: clamp(self.run_km, limits::RUN_KM),
            weight: (weight != 0.0).then_some(weight),
        }
    }
}

pub struct EntryService {
    repo: Arc<dyn JournalRepository>,
}

impl EntryService {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub fn draft_for(&self, date: NaiveDate) -> Result<EntryDraft, RepoError> {
        let existing = self.repo.get(date)?;
        Ok(EntryDraft::defaults_for(date, existing.as_ref()))
    }

    pub fn save(&self, draft: &EntryDraft, language: Language) -> Result<JournalEntry, RepoError> {
        let entry = draft.to_entry(language);
        self.repo.put(&entry)?;
        tracing::info!(date = %entry.date, "saved journal entry");
        Ok(entry)
    }
}
