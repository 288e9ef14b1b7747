use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Fr,
    Nl,
}

const DAY_NAMES_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];
const DAY_NAMES_FR: [&str; 7] = [
    "Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi", "Samedi", "Dimanche",
];
const DAY_NAMES_NL: [&str; 7] = [
    "Maandag",
    "Dinsdag",
    "Woensdag",
    "Donderdag",
    "Vrijdag",
    "Zaterdag",
    "Zondag",
];

impl Language {
    pub const ALL: [Language; 3] = [Language::En, Language::Fr, Language::Nl];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::Nl => "nl",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "en" => Some(Language::En),
            "fr" => Some(Language::Fr),
            "nl" => Some(Language::Nl),
            _ => None,
        }
    }

    /// Name shown in the language selector, in the language itself.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "Français",
            Language::Nl => "Nederlands",
        }
    }
}

pub fn day_name(date: NaiveDate, language: Language) -> &'static str {
    let names = match language {
        Language::En => &DAY_NAMES_EN,
        Language::Fr => &DAY_NAMES_FR,
        Language::Nl => &DAY_NAMES_NL,
    };
    names[date.weekday().num_days_from_monday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_name_follows_language_table() {
        let thursday = NaiveDate::from_ymd_opt(2024, 2, 1).expect("valid date");
        assert_eq!(day_name(thursday, Language::En), "Thursday");
        assert_eq!(day_name(thursday, Language::Fr), "Jeudi");
        assert_eq!(day_name(thursday, Language::Nl), "Donderdag");

        let sunday = NaiveDate::from_ymd_opt(2024, 2, 4).expect("valid date");
        assert_eq!(day_name(sunday, Language::Fr), "Dimanche");
    }

    #[test]
    fn from_code_is_lenient_on_case_and_whitespace() {
        assert_eq!(Language::from_code(" FR "), Some(Language::Fr));
        assert_eq!(Language::from_code("nl"), Some(Language::Nl));
        assert_eq!(Language::from_code("de"), None);
    }
}
