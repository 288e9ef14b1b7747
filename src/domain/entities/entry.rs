use chrono::NaiveDate;

/// One journal day. `date` is the unique key; a second write for the same
/// date replaces every field.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalEntry {
    pub date: NaiveDate,
    pub day_name: String,
    pub nico: Option<f64>,
    pub water_l: f64,
    pub coffee: i64,
    pub beer_l: f64,
    pub alcool_cl: f64,
    pub wine_cl: f64,
    pub soda_l: f64,
    pub soiree: bool,
    pub soiree_name: Option<String>,
    /// `HH:MM`
    pub wake_time: Option<String>,
    /// `HH:MM`
    pub sleep_time: Option<String>,
    pub sleep_hours: f64,
    pub ran: bool,
    pub run_km: f64,
    pub weight: Option<f64>,
}

impl JournalEntry {
    /// An entry with every metric at its storage default.
    pub fn empty(date: NaiveDate, day_name: impl Into<String>) -> Self {
        Self {
            date,
            day_name: day_name.into(),
            nico: None,
            water_l: 0.0,
            coffee: 0,
            beer_l: 0.0,
            alcool_cl: 0.0,
            wine_cl: 0.0,
            soda_l: 0.0,
            soiree: false,
            soiree_name: None,
            wake_time: None,
            sleep_time: None,
            sleep_hours: 0.0,
            ran: false,
            run_km: 0.0,
            weight: None,
        }
    }

    /// Value of a plottable numeric field, `None` when the field is null or
    /// not numeric.
    pub fn metric(&self, field: &str) -> Option<f64> {
        match field {
            "nico" => self.nico,
            "water_l" => Some(self.water_l),
            "coffee" => Some(self.coffee as f64),
            "beer_l" => Some(self.beer_l),
            "alcool_cl" => Some(self.alcool_cl),
            "wine_cl" => Some(self.wine_cl),
            "soda_l" => Some(self.soda_l),
            "sleep_hours" => Some(self.sleep_hours),
            "run_km" => Some(self.run_km),
            "weight" => self.weight,
            _ => None,
        }
    }
}
