use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::domain::entities::language::Language;
use crate::ui::theme::Theme;

pub const DB_PATH_VAR: &str = "JOURNAL_DB_PATH";
pub const LANGUAGE_VAR: &str = "JOURNAL_LANGUAGE";
pub const IMPORT_LANGUAGE_VAR: &str = "JOURNAL_IMPORT_LANGUAGE";
pub const THEME_VAR: &str = "JOURNAL_THEME";

/// Startup settings, handed to the UI explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    /// Initial UI language; the user can switch it at runtime.
    pub language: Language,
    /// Language for day names derived during import.
    pub import_language: Language,
    /// Initial color theme; toggled from the nav bar.
    pub theme: Theme,
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "hellhbbd", "daily-journal")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

pub fn default_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("journal.sqlite"))
}

pub fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview2");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}

fn language_var(name: &str, default: Language) -> Language {
    match env::var(name) {
        Ok(code) => Language::from_code(&code).unwrap_or_else(|| {
            tracing::warn!(var = name, value = %code, "unknown language code, using default");
            default
        }),
        Err(_) => default,
    }
}

fn theme_var(name: &str) -> Theme {
    match env::var(name) {
        Ok(code) => Theme::from_code(&code).unwrap_or_else(|| {
            tracing::warn!(var = name, value = %code, "unknown theme, using light");
            Theme::Light
        }),
        Err(_) => Theme::Light,
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let db_path = match env::var(DB_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => default_db_path()?,
        };

        Ok(Self {
            db_path,
            language: language_var(LANGUAGE_VAR, Language::En),
            import_language: language_var(IMPORT_LANGUAGE_VAR, Language::Fr),
            theme: theme_var(THEME_VAR),
        })
    }
}
