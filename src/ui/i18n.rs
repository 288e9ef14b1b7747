use crate::domain::entities::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    LanguageLabel,
    EntryTab,
    ChartsTab,
    HistoryTab,
    EntrySubheader,
    DateLabel,
    ExistingEntry,
    NewEntry,
    SectionDrinks,
    WaterInput,
    CoffeeInput,
    BeerInput,
    AlcoholInput,
    WineInput,
    SodaInput,
    SectionNicotine,
    NicoInput,
    SectionParty,
    PartyCheckbox,
    PartyName,
    SectionSleep,
    WakeLabel,
    SleepLabel,
    SleepMetric,
    SectionRun,
    RanCheckbox,
    RunDistance,
    SectionWeight,
    WeightInput,
    SaveButton,
    SaveSuccess,
    SaveFailed,
    NoDataInfo,
    WeightChartTitle,
    WeightChartInfo,
    SleepChartTitle,
    SleepChartInfo,
    NicoChartTitle,
    NicoChartInfo,
    RunChartTitle,
    RunChartInfo,
    LiquidsSection,
    LiquidNoData,
    HistorySubheader,
    ExportSection,
    ExportInfo,
    ExportButton,
    ExportSuccess,
    ImportSection,
    ImportButton,
    ImportHelp,
    ImportSuccess,
    ImportFailed,
    Cancelled,
    LoadFailed,
}

/// `(en, fr, nl)`
fn variants(text: Text) -> (&'static str, &'static str, &'static str) {
    match text {
        Text::AppTitle => ("〆 Daily Journal", "〆 Suivi journalier", "〆 Dagelijks logboek"),
        Text::LanguageLabel => ("Language", "Langue", "Taal"),
        Text::EntryTab => ("Daily Entry", "Saisie du jour", "Dagelijkse invoer"),
        Text::ChartsTab => ("Charts", "Graphiques", "Grafieken"),
        Text::HistoryTab => ("History", "Historique", "Historiek"),
        Text::EntrySubheader => (
            "Enter / edit a day",
            "Saisie / édition d'une journée",
            "Dag invullen / bewerken",
        ),
        Text::DateLabel => ("Date", "Date", "Datum"),
        Text::ExistingEntry => (
            "Data already exists for {day_name} {date} (editing).",
            "Données déjà existantes pour {day_name} {date} (édition).",
            "Gegevens bestaan al voor {day_name} {date} (bewerking).",
        ),
        Text::NewEntry => (
            "New entry for {day_name} {date}.",
            "Nouvelle entrée pour {day_name} {date}.",
            "Nieuwe invoer voor {day_name} {date}.",
        ),
        Text::SectionDrinks => ("Drinks & nicotine", "Boissons & nicotine", "Dranken & nicotine"),
        Text::WaterInput => ("Water (L / day)", "Eau (L / jour)", "Water (L / dag)"),
        Text::CoffeeInput => (
            "Coffee (cups / day)",
            "Cafés (tasses / jour)",
            "Koffie (tassen / dag)",
        ),
        Text::BeerInput => ("Beer (L / day)", "Bière (L / jour)", "Bier (L / dag)"),
        Text::AlcoholInput => (
            "Spirits (cl / day)",
            "Alcool fort (cl / jour)",
            "Sterke drank (cl / dag)",
        ),
        Text::WineInput => ("Wine (cl / day)", "Vin (cl / jour)", "Wijn (cl / dag)"),
        Text::SodaInput => ("Soda (L / day)", "Soda (L / jour)", "Frisdrank (L / dag)"),
        Text::SectionNicotine => ("Nicotine / E-vape", "Nicotine / E-vape", "Nicotine / e-vape"),
        Text::NicoInput => (
            "%nico (mg/mL or equivalent)",
            "%nico (mg/mL ou équivalent)",
            "%nico (mg/mL of equivalent)",
        ),
        Text::SectionParty => ("Evening", "Soirée", "Avond"),
        Text::PartyCheckbox => ("Night out?", "Soirée ?", "Uitstapje?"),
        Text::PartyName => ("With whom / where", "Avec qui / où", "Met wie / waar"),
        Text::SectionSleep => (
            "Sleep (wake / bed / duration)",
            "Sommeil (debout / couché / durée)",
            "Slaap (opstaan / naar bed / duur)",
        ),
        Text::WakeLabel => ("Wake-up time", "Heure de lever", "Opstaan uur"),
        Text::SleepLabel => ("Bedtime", "Heure de coucher", "Slaaptijd"),
        Text::SleepMetric => ("Sleep hours", "Heures de sommeil", "Slaapuren"),
        Text::SectionRun => ("Running", "Sport (courir)", "Sport (lopen)"),
        Text::RanCheckbox => ("Run?", "Courir ?", "Gelopen?"),
        Text::RunDistance => ("Distance (km)", "Distance (km)", "Afstand (km)"),
        Text::SectionWeight => ("Weight", "Poids", "Gewicht"),
        Text::WeightInput => ("Weight (kg)", "Poids (kg)", "Gewicht (kg)"),
        Text::SaveButton => (
            "💾 Save / update",
            "💾 Enregistrer / mettre à jour",
            "💾 Opslaan / bijwerken",
        ),
        Text::SaveSuccess => ("Data saved ✅", "Données enregistrées ✅", "Gegevens opgeslagen ✅"),
        Text::SaveFailed => (
            "Save error: {error}",
            "Erreur lors de l'enregistrement : {error}",
            "Opslagfout: {error}",
        ),
        Text::NoDataInfo => (
            "No data recorded yet.",
            "Pas encore de données enregistrées.",
            "Nog geen gegevens geregistreerd.",
        ),
        Text::WeightChartTitle => ("Weight (kg)", "Poids (kg)", "Gewicht (kg)"),
        Text::WeightChartInfo => (
            "No useful weight data (all zero or empty).",
            "Pas de données de poids utiles (toutes à 0 ou vides).",
            "Geen bruikbare gewichtgegevens (alles nul of leeg).",
        ),
        Text::SleepChartTitle => (
            "Sleep (hours per night)",
            "Sommeil (heures par nuit)",
            "Slaap (uren per nacht)",
        ),
        Text::SleepChartInfo => (
            "No useful sleep data.",
            "Pas de données de sommeil utiles.",
            "Geen bruikbare slaapgegevens.",
        ),
        Text::NicoChartTitle => ("Nicotine (%nico)", "Nicotine (%nico)", "Nicotine (%nico)"),
        Text::NicoChartInfo => (
            "No useful nicotine data.",
            "Pas de données de nicotine utiles.",
            "Geen bruikbare nicotinegegevens.",
        ),
        Text::RunChartTitle => ("Running (km)", "Course (km)", "Lopen (km)"),
        Text::RunChartInfo => (
            "No useful running data.",
            "Pas de données de course utiles.",
            "Geen bruikbare loopgegevens.",
        ),
        Text::LiquidsSection => (
            "Liquid consumption",
            "Consommation de liquides",
            "Vloeistofconsumptie",
        ),
        Text::LiquidNoData => (
            "No useful liquid data (all empty).",
            "Pas de données de liquides utiles (toutes vides).",
            "Geen bruikbare vloeistofgegevens (alles leeg).",
        ),
        Text::HistorySubheader => (
            "Detailed history",
            "Historique détaillé",
            "Gedetailleerde historiek",
        ),
        Text::ExportSection => ("Data export", "Export des données", "Gegevens export"),
        Text::ExportInfo => (
            "No data recorded yet, nothing to export.",
            "Pas encore de données enregistrées, rien à exporter.",
            "Nog geen gegevens geregistreerd, niets om te exporteren.",
        ),
        Text::ExportButton => (
            "📥 Export data to CSV",
            "📥 Exporter les données en CSV",
            "📥 Gegevens exporteren naar CSV",
        ),
        Text::ExportSuccess => (
            "{rows} rows exported ✅",
            "{rows} lignes exportées ✅",
            "{rows} rijen geëxporteerd ✅",
        ),
        Text::ImportSection => (
            "Import from CSV (Excel or app export)",
            "Import depuis un CSV (Excel ou export de l'app)",
            "Importeer vanuit CSV (Excel of app-export)",
        ),
        Text::ImportButton => (
            "Choose a CSV or Excel file to import",
            "Choisis un fichier CSV ou Excel à importer",
            "Kies een CSV- of Excel-bestand om te importeren",
        ),
        Text::ImportHelp => (
            "Export your DB_DATA_SCADA sheet from Excel as CSV, then import it here.",
            "Tu peux exporter ton onglet DB_DATA_SCADA en CSV depuis Excel, puis l'importer ici.",
            "Exporteer je DB_DATA_SCADA-blad uit Excel naar CSV en importeer het hier.",
        ),
        Text::ImportSuccess => (
            "{rows} rows imported/updated successfully ✅",
            "{rows} lignes importées / mises à jour avec succès ✅",
            "{rows} rijen succesvol geïmporteerd/bijgewerkt ✅",
        ),
        Text::ImportFailed => (
            "Import error: {error}",
            "Erreur lors de l'import : {error}",
            "Importfout: {error}",
        ),
        Text::Cancelled => ("Cancelled", "Annulé", "Geannuleerd"),
        Text::LoadFailed => (
            "Could not load the journal: {error}",
            "Impossible de charger le journal : {error}",
            "Kan het logboek niet laden: {error}",
        ),
    }
}

pub fn tr(text: Text, language: Language) -> &'static str {
    let (en, fr, nl) = variants(text);
    match language {
        Language::En => en,
        Language::Fr => fr,
        Language::Nl => nl,
    }
}

/// [`tr`] with `{name}` placeholders substituted.
pub fn tr_with(text: Text, language: Language, args: &[(&str, &str)]) -> String {
    args.iter()
        .fold(tr(text, language).to_string(), |acc, (name, value)| {
            acc.replace(&format!("{{{name}}}"), value)
        })
}

pub fn liquid_label(field: &str, language: Language) -> &'static str {
    let (en, fr, nl) = match field {
        "water_l" => ("Water (L)", "Eau (L)", "Water (L)"),
        "beer_l" => ("Beer (L)", "Bière (L)", "Bier (L)"),
        "wine_cl" => ("Wine (cl)", "Vin (cl)", "Wijn (cl)"),
        "alcool_cl" => ("Spirits (cl)", "Alcool fort (cl)", "Sterke drank (cl)"),
        "soda_l" => ("Soda (L)", "Soda (L)", "Frisdrank (L)"),
        _ => ("?", "?", "?"),
    };
    match language {
        Language::En => en,
        Language::Fr => fr,
        Language::Nl => nl,
    }
}
