use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::config::{default_db_path, ensure_webview_data_dir};
use crate::domain::entities::entry::JournalEntry;
use crate::domain::entities::language::Language;
use crate::domain::entities::table::{RawCell, RawTable};
use crate::infra::import::xlsx::read_xlsx_table;
use crate::infra::sqlite::repo::SqliteRepo;
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::JournalRepository;
use crate::usecase::services::entry_service::{EntryDraft, EntryService};
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::{ImportError, ImportService};

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("daily-journal-{prefix}-{nanos}"))
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("should build a valid date")
}

fn open_repo(prefix: &str) -> (PathBuf, Arc<SqliteRepo>) {
    let temp_dir = unique_test_dir(prefix);
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let repo = Arc::new(SqliteRepo::new(temp_dir.join("journal.sqlite")));
    repo.init().expect("init should succeed");
    (temp_dir, repo)
}

fn text_table(headers: &[&str], rows: &[&[&str]]) -> RawTable {
    RawTable::new(
        headers.iter().map(|header| header.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|value| RawCell::text(*value)).collect())
            .collect(),
    )
}

fn sample_entry(date: NaiveDate) -> JournalEntry {
    JournalEntry {
        date,
        day_name: "Jeudi".to_string(),
        nico: Some(3.17),
        water_l: 1.5,
        coffee: 2,
        beer_l: 0.33,
        alcool_cl: 4.0,
        wine_cl: 12.5,
        soda_l: 0.25,
        soiree: true,
        soiree_name: Some("Chez Paul; avec \"Marie\"".to_string()),
        wake_time: Some("07:15".to_string()),
        sleep_time: Some("23:30".to_string()),
        sleep_hours: 7.75,
        ran: true,
        run_km: 5.2,
        weight: Some(70.5),
    }
}

#[test]
fn init_db_creates_journal_table() {
    let temp_dir = unique_test_dir("init-db");
    fs::create_dir_all(&temp_dir).expect("should create temp dir");
    let db_path = temp_dir.join("journal.sqlite");

    let result = init_db(&db_path);
    assert!(result.is_ok(), "init_db should succeed: {result:?}");
    init_db(&db_path).expect("init_db should be idempotent");

    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let column_count: i64 = conn
        .query_row("SELECT COUNT(*) FROM pragma_table_info('journal')", [], |row| {
            row.get(0)
        })
        .expect("column count query should succeed");
    assert_eq!(column_count, 17, "journal should have one column per field");

    let pk_column: String = conn
        .query_row(
            "SELECT name FROM pragma_table_info('journal') WHERE pk = 1",
            [],
            |row| row.get(0),
        )
        .expect("primary key query should succeed");
    assert_eq!(pk_column, "date");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn put_replaces_every_field_for_same_date() {
    let (temp_dir, repo) = open_repo("upsert");
    let date = ymd(2024, 2, 1);

    repo.put(&sample_entry(date)).expect("first put should succeed");
    let mut replacement = JournalEntry::empty(date, "Thursday");
    replacement.water_l = 2.0;
    repo.put(&replacement).expect("second put should succeed");

    let stored = repo
        .get(date)
        .expect("get should succeed")
        .expect("entry should exist");
    assert_eq!(stored, replacement, "upsert should replace all fields");
    assert_eq!(repo.scan_all().expect("scan should succeed").len(), 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn get_miss_is_none() {
    let (temp_dir, repo) = open_repo("get-miss");

    let stored = repo.get(ymd(2024, 2, 1)).expect("get should succeed");
    assert_eq!(stored, None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn scan_all_is_ordered_by_date() {
    let (temp_dir, repo) = open_repo("scan-order");

    for date in [ymd(2024, 3, 1), ymd(2023, 12, 31), ymd(2024, 1, 15)] {
        repo.put(&JournalEntry::empty(date, ""))
            .expect("put should succeed");
    }

    let dates = repo
        .scan_all()
        .expect("scan should succeed")
        .into_iter()
        .map(|entry| entry.date)
        .collect::<Vec<_>>();
    assert_eq!(dates, vec![ymd(2023, 12, 31), ymd(2024, 1, 15), ymd(2024, 3, 1)]);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn spreadsheet_table_with_date_and_weight_is_imported() {
    let (temp_dir, repo) = open_repo("import-weight");
    let service = ImportService::new(repo.clone());

    let written = service
        .import_table(&text_table(
            &["Temps", "V_poids"],
            &[&["01/02/2024", "70.5"], &["bad-date", "80"]],
        ))
        .expect("import should succeed");
    assert_eq!(written, 1, "the row with a bad date should be dropped");

    let stored = repo
        .get(ymd(2024, 2, 1))
        .expect("get should succeed")
        .expect("entry should exist");
    let mut expected = JournalEntry::empty(ymd(2024, 2, 1), "Jeudi");
    expected.weight = Some(70.5);
    assert_eq!(stored, expected, "absent columns should take their defaults");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn import_without_date_column_writes_nothing() {
    let (temp_dir, repo) = open_repo("import-no-date");
    let service = ImportService::new(repo.clone());

    let result = service.import_table(&text_table(&["V_poids", "L_eau"], &[&["70.5", "1.5"]]));
    assert!(
        matches!(result, Err(ImportError::NoDateColumn)),
        "expected NoDateColumn: {result:?}"
    );

    let result = service.import_table(&text_table(&["Temps", "V_poids"], &[]));
    assert!(
        matches!(result, Err(ImportError::NoDateColumn)),
        "an empty table should also be rejected: {result:?}"
    );

    assert!(repo.scan_all().expect("scan should succeed").is_empty());

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn rows_with_bad_dates_are_skipped() {
    let (temp_dir, repo) = open_repo("import-bad-date");
    let service = ImportService::new(repo.clone()).with_language(Language::En);

    let written = service
        .import_table(&text_table(
            &["Temps", "T_coffee", "%nico"],
            &[&["01/02/2024", "2", "3.17"], &["bad-date", "4", ""], &["02/02/2024", "abc", "n/a"]],
        ))
        .expect("import should succeed");
    assert_eq!(written, 2);

    let all = repo.scan_all().expect("scan should succeed");
    assert_eq!(all[0].coffee, 2);
    assert_eq!(all[0].day_name, "Thursday");
    assert_eq!(all[1].coffee, 0, "non-numeric coffee should default to zero");
    assert_eq!(all[1].nico, None, "unparseable nico should stay null");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn semicolon_csv_file_is_imported() {
    let (temp_dir, repo) = open_repo("import-semicolon");
    let csv_path = temp_dir.join("db_data_scada.csv");
    fs::write(
        &csv_path,
        "Temps;V_jour;L_eau;B_soiree;N_soiree;V_debout;V_couche;V_somm\n\
         01/02/2024;Jeudi;1,5;1;Chez Paul;6.5;23;7.5\n\
         02/02/2024;;2;0;;7;22.75;8.25\n",
    )
    .expect("should write csv fixture");

    let written = ImportService::new(repo.clone())
        .import_path(&csv_path)
        .expect("import should succeed");
    assert_eq!(written, 2);

    let all = repo.scan_all().expect("scan should succeed");
    assert_eq!(all[0].water_l, 1.5, "decimal comma should be accepted");
    assert!(all[0].soiree);
    assert_eq!(all[0].soiree_name.as_deref(), Some("Chez Paul"));
    assert_eq!(all[0].wake_time.as_deref(), Some("06:30"));
    assert_eq!(all[0].sleep_time.as_deref(), Some("23:00"));
    assert_eq!(all[1].day_name, "Vendredi", "blank day name should be derived");
    assert_eq!(all[1].sleep_time.as_deref(), Some("22:45"));
    assert_eq!(all[1].soiree_name, None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn reimport_of_same_rows_keeps_one_entry_per_date() {
    let (temp_dir, repo) = open_repo("import-twice");
    let service = ImportService::new(repo.clone());
    let table = text_table(&["Temps", "L_eau"], &[&["01/02/2024", "1.5"]]);

    service.import_table(&table).expect("first import should succeed");
    service.import_table(&table).expect("second import should succeed");

    assert_eq!(repo.scan_all().expect("scan should succeed").len(), 1);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn export_then_import_restores_identical_table() {
    let (temp_dir, source) = open_repo("roundtrip-source");
    let mut empty_day = JournalEntry::empty(ymd(2024, 2, 2), "Vendredi");
    empty_day.sleep_hours = 8.0;
    source
        .put(&sample_entry(ymd(2024, 2, 1)))
        .expect("put should succeed");
    source.put(&empty_day).expect("put should succeed");

    let mut exported = Vec::new();
    let rows = ExportService::new(source.clone())
        .export_csv(&mut exported)
        .expect("export should succeed");
    assert_eq!(rows, 2);

    let (target_dir, target) = open_repo("roundtrip-target");
    let written = ImportService::new(target.clone())
        .import_csv_reader(exported.as_slice())
        .expect("import should succeed");
    assert_eq!(written, 2);

    assert_eq!(
        target.scan_all().expect("scan should succeed"),
        source.scan_all().expect("scan should succeed"),
        "round trip should preserve every field"
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
    fs::remove_dir_all(&target_dir).expect("should cleanup temp dir");
}

#[test]
fn export_path_writes_canonical_header() {
    let (temp_dir, repo) = open_repo("export-path");
    repo.put(&sample_entry(ymd(2024, 2, 1)))
        .expect("put should succeed");
    let csv_path = temp_dir.join("journal_export.csv");

    ExportService::new(repo.clone())
        .export_csv_path(&csv_path)
        .expect("export should succeed");

    let content = fs::read_to_string(&csv_path).expect("should read export");
    let header = content.lines().next().expect("export should have a header");
    assert_eq!(
        header,
        "date,day_name,nico,water_l,coffee,beer_l,alcool_cl,wine_cl,soda_l,soiree,soiree_name,wake_time,sleep_time,sleep_hours,ran,run_km,weight"
    );

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn saved_draft_is_loaded_back_for_editing() {
    let (temp_dir, repo) = open_repo("entry-form");
    let service = EntryService::new(repo.clone());
    let date = ymd(2024, 2, 1);

    let mut draft = service.draft_for(date).expect("draft should load");
    assert!(!draft.existing);
    draft.water_l = 1.25;
    draft.ran = true;
    draft.run_km = 250.0;
    draft.weight = 71.0;
    service
        .save(&draft, Language::Nl)
        .expect("save should succeed");

    let reloaded = service.draft_for(date).expect("draft should load");
    assert!(reloaded.existing);
    assert_eq!(reloaded.water_l, 1.25);
    assert_eq!(reloaded.run_km, 100.0, "distance should be clamped");
    assert_eq!(reloaded.weight, 71.0);

    let stored = repo
        .get(date)
        .expect("get should succeed")
        .expect("entry should exist");
    assert_eq!(stored.day_name, "Donderdag");
    assert_eq!(stored.sleep_hours, 7.0);
    assert_eq!(stored, EntryDraft::defaults_for(date, Some(&stored)).to_entry(Language::Nl));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

fn workbook_fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("journal_test.xlsx")
}

#[test]
fn workbook_reader_skips_empty_first_sheet() {
    let table = read_xlsx_table(&workbook_fixture(), None).expect("should read fixture workbook");

    assert_eq!(
        table.headers,
        vec!["Temps", "V_jour", "V_poids", "V_debout", "L_eau"]
    );
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[0][0], RawCell::Number(45323.0));
    assert_eq!(table.rows[1][4], RawCell::Empty);

    let named = read_xlsx_table(&workbook_fixture(), Some("DB_DATA_SCADA"))
        .expect("should read named sheet");
    assert_eq!(named, table);

    let missing = read_xlsx_table(&workbook_fixture(), Some("Absent"));
    assert!(missing.is_err(), "unknown sheet name should fail");
}

#[test]
fn workbook_file_is_imported() {
    let (_temp_dir, repo) = open_repo("import-xlsx");
    let service = ImportService::new(repo.clone());

    let written = service
        .import_path(&workbook_fixture())
        .expect("workbook import should succeed");
    assert_eq!(written, 2);

    let first = repo
        .get(ymd(2024, 2, 1))
        .expect("get should succeed")
        .expect("first day should be stored");
    assert_eq!(first.day_name, "Jeudi");
    assert_eq!(first.weight, Some(70.5));
    assert_eq!(first.wake_time.as_deref(), Some("06:30"));
    assert_eq!(first.water_l, 1.5);

    let second = repo
        .get(ymd(2024, 2, 2))
        .expect("get should succeed")
        .expect("second day should be stored");
    assert_eq!(second.day_name, "Vendredi");
    assert_eq!(second.weight, Some(71.0));
    assert_eq!(second.wake_time.as_deref(), Some("07:15"));
    assert_eq!(second.water_l, 0.0);
}

#[test]
fn default_db_path_is_inside_app_data_dir() {
    let path = default_db_path().expect("default db path should resolve");

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("journal.sqlite")
    );
    assert!(
        path.to_string_lossy().contains("daily-journal"),
        "db path should live in the app data dir: {}",
        path.display()
    );
}

#[test]
fn webview_data_dir_is_created() {
    let temp_dir = unique_test_dir("webview");

    let dir = ensure_webview_data_dir(&temp_dir).expect("webview dir should be created");

    assert!(dir.is_dir());
    assert!(dir.starts_with(&temp_dir));

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}
