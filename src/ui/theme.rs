#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Colors every panel draws with; charts use `surface` as their plot fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub header: &'static str,
}

const LIGHT: Palette = Palette {
    background: "#ffffff",
    text: "#222222",
    muted: "#555555",
    surface: "#ffffff",
    border: "#bbbbbb",
    header: "#f2f2f2",
};

const NIGHTFALL: Palette = Palette {
    background: "#0b1220",
    text: "#f5f7ff",
    muted: "#e2e8f0",
    surface: "#0f172a",
    border: "#1f2937",
    header: "rgba(255, 255, 255, 0.05)",
};

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Button label; shows the theme a click switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Light => LIGHT,
            Theme::Dark => NIGHTFALL,
        }
    }
}

impl Palette {
    pub fn page_style(&self) -> String {
        format!(
            "font-family: sans-serif; padding: 12px; display: flex; flex-direction: column; gap: 12px; min-height: 100vh; box-sizing: border-box; background: {}; color: {};",
            self.background, self.text
        )
    }

    pub fn cell_style(&self) -> String {
        format!("border: 1px solid {}; padding: 6px;", self.border)
    }

    pub fn header_cell_style(&self) -> String {
        format!(
            "border: 1px solid {}; padding: 6px; background: {};",
            self.border, self.header
        )
    }

    pub fn muted_style(&self) -> String {
        format!("color: {};", self.muted)
    }
}
