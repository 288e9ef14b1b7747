/// One cell of an uploaded table. CSV only ever yields `Text`/`Empty`;
/// workbooks keep their numeric cells typed.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
}

const NULL_MARKERS: [&str; 4] = ["nan", "NaN", "NaT", "None"];

impl RawCell {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(value)
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_text().is_none()
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawCell::Empty => None,
            RawCell::Number(value) => value.is_finite().then_some(*value),
            RawCell::Text(value) => parse_number(value),
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Number(value) if value.is_finite() => Some(value.to_string()),
            RawCell::Number(_) => None,
            RawCell::Text(value) => {
                let trimmed = value.trim();
                if trimmed.is_empty() || NULL_MARKERS.contains(&trimmed) {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

/// Parses a spreadsheet number. A lone decimal comma (`70,5`) is accepted
/// since semicolon-separated exports use it.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replace(',', ".").parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };
    parsed.ok().filter(|number| number.is_finite())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<RawCell>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
