use std::sync::Arc;

use chrono::NaiveDate;
use dioxus::prelude::*;
use rfd::FileDialog;

use crate::config::AppConfig;
use crate::domain::column_map::CANONICAL_FIELDS;
use crate::domain::entities::entry::JournalEntry;
use crate::domain::entities::language::{day_name, Language};
use crate::domain::time_codec::{format_clock, parse_clock_text};
use crate::infra::sqlite::repo::SqliteRepo;
use crate::ui::i18n::{liquid_label, tr, tr_with, Text};
use crate::ui::state::app_state::{today, AppState, Tab};
use crate::ui::theme::Palette;
use crate::usecase::ports::repo::JournalRepository;
use crate::usecase::services::chart_service::{
    liquid_series, series, ChartKind, ChartSeries, LIQUID_FIELDS,
};
use crate::usecase::services::entry_service::{EntryDraft, EntryService};
use crate::usecase::services::export_service::{entry_record, ExportService};
use crate::usecase::services::import_service::ImportService;

const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 200.0;
const LIQUID_COLORS: [&str; 5] = ["#2563eb", "#d97706", "#9f1239", "#7c3aed", "#059669"];

const FIELD_STYLE: &str = "display: flex; flex-direction: column; gap: 4px; min-width: 180px;";

fn reload_entries(repo: &dyn JournalRepository, mut entries: Signal<Vec<JournalEntry>>) {
    match repo.scan_all() {
        Ok(all) => *entries.write() = all,
        Err(err) => tracing::error!(error = %err, "failed to reload journal"),
    }
}

/// SVG polyline coordinates; x spans the date range, y the series domain.
fn polyline_points(chart: &ChartSeries) -> String {
    let (Some((first, _)), Some((last, _))) = (chart.points.first(), chart.points.last()) else {
        return String::new();
    };
    let span_days = (*last - *first).num_days().max(1) as f64;
    let y_span = chart.y_max - chart.y_min;
    let y_span = if y_span > 0.0 { y_span } else { 1.0 };

    chart
        .points
        .iter()
        .map(|(date, value)| {
            let x = (*date - *first).num_days() as f64 / span_days * CHART_WIDTH;
            let y = CHART_HEIGHT - (value - chart.y_min) / y_span * CHART_HEIGHT;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn chart_svg(chart: &ChartSeries, color: &str, palette: Palette) -> Element {
    let points = polyline_points(chart);
    let top = format!("{:.1}", chart.y_max);
    let bottom = format!("{:.1}", chart.y_min);
    let first_date = chart
        .points
        .first()
        .map(|(date, _)| date.to_string())
        .unwrap_or_default();
    let last_date = chart
        .points
        .last()
        .map(|(date, _)| date.to_string())
        .unwrap_or_default();

    rsx! {
        div {
            style: "display: flex; gap: 8px; align-items: stretch;",
            div {
                style: "display: flex; flex-direction: column; justify-content: space-between; font-size: 12px; color: {palette.muted};",
                span { "{top}" }
                span { "{bottom}" }
            }
            div {
                svg {
                    width: "{CHART_WIDTH}",
                    height: "{CHART_HEIGHT}",
                    view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                    style: "border: 1px solid {palette.border}; background: {palette.surface}; overflow: visible;",
                    polyline {
                        points: "{points}",
                        fill: "none",
                        stroke: "{color}",
                        stroke_width: "2",
                    }
                }
                div {
                    style: "display: flex; justify-content: space-between; font-size: 12px; color: {palette.muted};",
                    span { "{first_date}" }
                    span { "{last_date}" }
                }
            }
        }
    }
}

fn number_field(
    label: &'static str,
    value: f64,
    step: &'static str,
    mut draft: Signal<EntryDraft>,
    apply: fn(&mut EntryDraft, f64),
) -> Element {
    rsx! {
        label {
            style: FIELD_STYLE,
            "{label}"
            input {
                r#type: "number",
                step: "{step}",
                min: "0",
                value: "{value}",
                oninput: move |event| {
                    if let Ok(parsed) = event.value().trim().replace(',', ".").parse::<f64>() {
                        apply(&mut draft.write(), parsed);
                    }
                },
            }
        }
    }
}

fn time_field(
    label: &'static str,
    value: String,
    mut draft: Signal<EntryDraft>,
    apply: fn(&mut EntryDraft, chrono::NaiveTime),
) -> Element {
    rsx! {
        label {
            style: FIELD_STYLE,
            "{label}"
            input {
                r#type: "time",
                value: "{value}",
                oninput: move |event| {
                    if let Some(time) = parse_clock_text(&event.value()) {
                        apply(&mut draft.write(), time);
                    }
                },
            }
        }
    }
}

fn entry_panel(
    repo: Arc<dyn JournalRepository>,
    lang: Language,
    palette: Palette,
    mut draft: Signal<EntryDraft>,
    entries: Signal<Vec<JournalEntry>>,
    mut status: Signal<String>,
) -> Element {
    let current = draft();
    let date_text = current.date.format("%Y-%m-%d").to_string();
    let banner_args = [("day_name", day_name(current.date, lang)), ("date", date_text.as_str())];
    let banner = if current.existing {
        tr_with(Text::ExistingEntry, lang, &banner_args)
    } else {
        tr_with(Text::NewEntry, lang, &banner_args)
    };
    let sleep_text = format!("{:.2}", current.sleep_hours());
    let muted = palette.muted_style();

    let repo_for_date = repo.clone();
    let repo_for_save = repo;

    rsx! {
        section {
            style: "display: flex; flex-direction: column; gap: 12px;",
            h2 { "{tr(Text::EntrySubheader, lang)}" }
            label {
                style: FIELD_STYLE,
                "{tr(Text::DateLabel, lang)}"
                input {
                    r#type: "date",
                    value: "{date_text}",
                    onchange: move |event| {
                        let Ok(date) = NaiveDate::parse_from_str(&event.value(), "%Y-%m-%d") else {
                            return;
                        };
                        match EntryService::new(repo_for_date.clone()).draft_for(date) {
                            Ok(next) => *draft.write() = next,
                            Err(err) => {
                                *status.write() =
                                    tr_with(Text::LoadFailed, lang, &[("error", err.to_string().as_str())]);
                            }
                        }
                    },
                }
            }
            p { style: "{muted}", "{banner}" }

            h3 { "{tr(Text::SectionDrinks, lang)}" }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                {number_field(tr(Text::WaterInput, lang), current.water_l, "0.1", draft, |d, v| d.water_l = v)}
                {number_field(tr(Text::CoffeeInput, lang), current.coffee as f64, "1", draft, |d, v| d.coffee = v as i64)}
                {number_field(tr(Text::BeerInput, lang), current.beer_l, "0.1", draft, |d, v| d.beer_l = v)}
                {number_field(tr(Text::AlcoholInput, lang), current.alcool_cl, "1", draft, |d, v| d.alcool_cl = v)}
                {number_field(tr(Text::WineInput, lang), current.wine_cl, "1", draft, |d, v| d.wine_cl = v)}
                {number_field(tr(Text::SodaInput, lang), current.soda_l, "0.1", draft, |d, v| d.soda_l = v)}
            }

            h3 { "{tr(Text::SectionNicotine, lang)}" }
            div {
                {number_field(tr(Text::NicoInput, lang), current.nico, "0.01", draft, |d, v| d.nico = v)}
            }

            h3 { "{tr(Text::SectionParty, lang)}" }
            label {
                input {
                    r#type: "checkbox",
                    checked: current.soiree,
                    onchange: move |event| {
                        draft.write().soiree = event.value().parse::<bool>().unwrap_or(false);
                    },
                }
                " {tr(Text::PartyCheckbox, lang)}"
            }
            if current.soiree {
                label {
                    style: FIELD_STYLE,
                    "{tr(Text::PartyName, lang)}"
                    input {
                        r#type: "text",
                        value: "{current.soiree_name}",
                        oninput: move |event| draft.write().soiree_name = event.value(),
                    }
                }
            }

            h3 { "{tr(Text::SectionSleep, lang)}" }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap; align-items: flex-end;",
                {time_field(tr(Text::WakeLabel, lang), format_clock(current.wake_time), draft, |d, t| d.wake_time = t)}
                {time_field(tr(Text::SleepLabel, lang), format_clock(current.sleep_time), draft, |d, t| d.sleep_time = t)}
                div {
                    style: FIELD_STYLE,
                    span { "{tr(Text::SleepMetric, lang)}" }
                    strong { "{sleep_text}" }
                }
            }

            h3 { "{tr(Text::SectionRun, lang)}" }
            label {
                input {
                    r#type: "checkbox",
                    checked: current.ran,
                    onchange: move |event| {
                        draft.write().ran = event.value().parse::<bool>().unwrap_or(false);
                    },
                }
                " {tr(Text::RanCheckbox, lang)}"
            }
            if current.ran {
                div {
                    {number_field(tr(Text::RunDistance, lang), current.run_km, "0.1", draft, |d, v| d.run_km = v)}
                }
            }

            h3 { "{tr(Text::SectionWeight, lang)}" }
            div {
                {number_field(tr(Text::WeightInput, lang), current.weight, "0.1", draft, |d, v| d.weight = v)}
            }

            div {
                button {
                    onclick: move |_| {
                        let service = EntryService::new(repo_for_save.clone());
                        match service.save(&draft(), lang) {
                            Ok(_) => {
                                reload_entries(repo_for_save.as_ref(), entries);
                                draft.write().existing = true;
                                *status.write() = tr(Text::SaveSuccess, lang).to_string();
                            }
                            Err(err) => {
                                tracing::error!(error = %err, "failed to save entry");
                                *status.write() =
                                    tr_with(Text::SaveFailed, lang, &[("error", err.to_string().as_str())]);
                            }
                        }
                    },
                    "{tr(Text::SaveButton, lang)}"
                }
            }
        }
    }
}

fn charts_panel(
    lang: Language,
    palette: Palette,
    entries: &[JournalEntry],
    mut selected_liquids: Signal<Vec<&'static str>>,
) -> Element {
    if entries.is_empty() {
        return rsx! {
            p { "{tr(Text::NoDataInfo, lang)}" }
        };
    }

    let muted = palette.muted_style();
    let metric_charts = [
        (Text::WeightChartTitle, Text::WeightChartInfo, "weight", ChartKind::Dynamic),
        (Text::SleepChartTitle, Text::SleepChartInfo, "sleep_hours", ChartKind::Dynamic),
        (Text::NicoChartTitle, Text::NicoChartInfo, "nico", ChartKind::Basic),
        (Text::RunChartTitle, Text::RunChartInfo, "run_km", ChartKind::Basic),
    ]
    .into_iter()
    .map(|(title, info, field, kind)| {
        let body = match series(entries, field, kind) {
            Some(chart) => chart_svg(&chart, LIQUID_COLORS[0], palette),
            None => rsx! {
                p { style: "{muted}", "{tr(info, lang)}" }
            },
        };
        rsx! {
            div {
                key: "{field}",
                h3 { "{tr(title, lang)}" }
                {body}
            }
        }
    });

    let selected = selected_liquids();
    let liquid_charts = liquid_series(entries, &selected);
    let liquid_views = liquid_charts.iter().map(|chart| {
        let color = LIQUID_FIELDS
            .iter()
            .position(|field| *field == chart.field)
            .map(|index| LIQUID_COLORS[index])
            .unwrap_or(LIQUID_COLORS[0]);
        rsx! {
            div {
                key: "{chart.field}",
                h4 { style: "color: {color};", "{liquid_label(chart.field, lang)}" }
                {chart_svg(chart, color, palette)}
            }
        }
    });

    rsx! {
        section {
            style: "display: flex; flex-direction: column; gap: 16px;",
            {metric_charts}
            h3 { "{tr(Text::LiquidsSection, lang)}" }
            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap;",
                for field in LIQUID_FIELDS {
                    label {
                        key: "{field}",
                        input {
                            r#type: "checkbox",
                            checked: selected.contains(&field),
                            onchange: move |event| {
                                let checked = event.value().parse::<bool>().unwrap_or(false);
                                let mut current = selected_liquids.write();
                                current.retain(|item| *item != field);
                                if checked {
                                    current.push(field);
                                    current.sort_by_key(|item| {
                                        LIQUID_FIELDS.iter().position(|f| f == item)
                                    });
                                }
                            },
                        }
                        " {liquid_label(field, lang)}"
                    }
                }
            }
            if liquid_charts.is_empty() {
                p { style: "{muted}", "{tr(Text::LiquidNoData, lang)}" }
            } else {
                {liquid_views}
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn history_panel(
    repo: Arc<dyn JournalRepository>,
    lang: Language,
    palette: Palette,
    import_language: Language,
    entries: Signal<Vec<JournalEntry>>,
    mut draft: Signal<EntryDraft>,
    mut busy: Signal<bool>,
    mut status: Signal<String>,
) -> Element {
    let rows = entries()
        .iter()
        .rev()
        .map(entry_record)
        .collect::<Vec<_>>();
    let has_rows = !rows.is_empty();
    let cell_style = palette.cell_style();
    let header_cell_style = palette.header_cell_style();
    let muted = palette.muted_style();

    let repo_for_import = repo.clone();
    let repo_for_export = repo;

    rsx! {
        section {
            style: "display: flex; flex-direction: column; gap: 12px;",
            h2 { "{tr(Text::HistorySubheader, lang)}" }
            div {
                style: "overflow: auto; max-height: 480px;",
                table { style: "border-collapse: collapse; width: 100%; border: 1px solid {palette.border};",
                    thead {
                        tr {
                            for header in CANONICAL_FIELDS {
                                th { style: "{header_cell_style}", "{header}" }
                            }
                        }
                    }
                    tbody {
                        if !has_rows {
                            tr {
                                td { style: "{cell_style}",
                                    colspan: CANONICAL_FIELDS.len(),
                                    "{tr(Text::NoDataInfo, lang)}"
                                }
                            }
                        } else {
                            for row in rows {
                                tr {
                                    for cell in row {
                                        td { style: "{cell_style}", "{cell}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            h3 { "{tr(Text::ExportSection, lang)}" }
            if has_rows {
                div {
                    button {
                        disabled: busy(),
                        onclick: move |_| {
                            let Some(file_path) = FileDialog::new()
                                .add_filter("CSV", &["csv"])
                                .set_file_name("journal_export.csv")
                                .save_file() else {
                                *status.write() = tr(Text::Cancelled, lang).to_string();
                                return;
                            };

                            *busy.write() = true;
                            match ExportService::new(repo_for_export.clone()).export_csv_path(&file_path) {
                                Ok(count) => {
                                    *status.write() =
                                        tr_with(Text::ExportSuccess, lang, &[("rows", count.to_string().as_str())]);
                                }
                                Err(err) => {
                                    tracing::error!(error = %err, path = %file_path.display(), "export failed");
                                    *status.write() = format!("{err:#}");
                                }
                            }
                            *busy.write() = false;
                        },
                        "{tr(Text::ExportButton, lang)}"
                    }
                }
            } else {
                p { style: "{muted}", "{tr(Text::ExportInfo, lang)}" }
            }

            h3 { "{tr(Text::ImportSection, lang)}" }
            p { style: "{muted}", "{tr(Text::ImportHelp, lang)}" }
            div {
                button {
                    disabled: busy(),
                    onclick: move |_| {
                        if busy() {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("CSV / Excel", &["csv", "txt", "xlsx", "xlsm", "xls", "ods"])
                            .pick_file() else {
                            *status.write() = tr(Text::Cancelled, lang).to_string();
                            return;
                        };

                        *busy.write() = true;
                        tracing::info!(path = %file_path.display(), "importing journal file");

                        let service = ImportService::new(repo_for_import.clone()).with_language(import_language);
                        match service.import_path(&file_path) {
                            Ok(count) => {
                                *status.write() =
                                    tr_with(Text::ImportSuccess, lang, &[("rows", count.to_string().as_str())]);
                            }
                            Err(err) => {
                                tracing::error!(error = %err, path = %file_path.display(), "import failed");
                                *status.write() =
                                    tr_with(Text::ImportFailed, lang, &[("error", err.to_string().as_str())]);
                            }
                        }

                        // Rows written before a failure are committed too.
                        reload_entries(repo_for_import.as_ref(), entries);
                        let date = draft.peek().date;
                        if let Ok(next) = EntryService::new(repo_for_import.clone()).draft_for(date) {
                            *draft.write() = next;
                        }
                        *busy.write() = false;
                    },
                    "{tr(Text::ImportButton, lang)}"
                }
            }
        }
    }
}

#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();
    let import_language = config.import_language;
    let repo = use_hook(|| {
        Arc::new(SqliteRepo::new(config.db_path.clone())) as Arc<dyn JournalRepository>
    });

    let AppState {
        mut language,
        mut theme,
        mut tab,
        entries,
        mut draft,
        selected_liquids,
        busy,
        mut status,
    } = AppState::new(&config);

    let repo_for_init = repo.clone();
    use_effect(move || {
        let lang = *language.peek();
        let loaded = repo_for_init
            .init()
            .and_then(|_| EntryService::new(repo_for_init.clone()).draft_for(today()));
        match loaded {
            Ok(next) => {
                *draft.write() = next;
                reload_entries(repo_for_init.as_ref(), entries);
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to open journal");
                *status.write() = tr_with(Text::LoadFailed, lang, &[("error", err.to_string().as_str())]);
            }
        }
    });

    let lang = language();
    let active_theme = theme();
    let palette = active_theme.palette();
    let page_style = palette.page_style();
    let active_tab = tab();
    let all_entries = entries();
    let tabs = [
        (Tab::Entry, Text::EntryTab),
        (Tab::Charts, Text::ChartsTab),
        (Tab::History, Text::HistoryTab),
    ];

    rsx! {
        div {
            style: "{page_style}",
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                h1 { style: "margin: 0 16px 0 0; font-size: 20px;", "{tr(Text::AppTitle, lang)}" }
                for (id, label) in tabs {
                    button {
                        key: "{label:?}",
                        disabled: active_tab == id,
                        onclick: move |_| *tab.write() = id,
                        "{tr(label, lang)}"
                    }
                }
                button {
                    style: "margin-left: auto;",
                    title: "{active_theme.toggled().code()}",
                    onclick: move |_| {
                        let next = theme.peek().toggled();
                        *theme.write() = next;
                    },
                    "{active_theme.toggle_icon()}"
                }
                label {
                    "{tr(Text::LanguageLabel, lang)} "
                    select {
                        value: "{lang.code()}",
                        onchange: move |event| {
                            if let Some(next) = Language::from_code(&event.value()) {
                                *language.write() = next;
                            }
                        },
                        for option_lang in Language::ALL {
                            option {
                                value: "{option_lang.code()}",
                                selected: option_lang == lang,
                                "{option_lang.native_name()}"
                            }
                        }
                    }
                }
            }

            {
                match active_tab {
                    Tab::Entry => entry_panel(repo.clone(), lang, palette, draft, entries, status),
                    Tab::Charts => charts_panel(lang, palette, &all_entries, selected_liquids),
                    Tab::History => history_panel(repo.clone(), lang, palette, import_language, entries, draft, busy, status),
                }
            }

            p { style: "min-height: 1.2em;", "{status}" }
        }
    }
}
