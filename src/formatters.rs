use chrono::NaiveDate;

use crate::catalog::{self, GlyphRow, WeatherClass};
use crate::config::Theme;
use crate::constants::{COLUMN_SEPARATOR, DEFAULT_COLUMN_WIDTH};
use crate::models::{DailyForecast, ForecastSet, Location};

/// Centers `text` in a column of `width` characters.
///
/// An odd leftover space goes to the right. Text wider than the column is
/// returned unpadded.
pub fn center(text: &str, width: usize) -> String {
    center_declared(text, text.chars().count(), width)
}

/// Like [`center`], but pads as if `text` were `declared` characters long.
pub fn center_declared(text: &str, declared: usize, width: usize) -> String {
    let left = width.saturating_sub(declared) / 2;
    let right = width.saturating_sub(declared).saturating_sub(left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Centers each item's text in a `width` column
pub fn columns<T>(items: &[T], width: usize, to_text: impl Fn(&T) -> String) -> Vec<String> {
    items
        .iter()
        .map(|item| center(&to_text(item), width))
        .collect()
}

/// Centers each item's text in a `width` column and joins the columns with `" | "`
pub fn line<T>(items: &[T], width: usize, to_text: impl Fn(&T) -> String) -> String {
    join_columns(&columns(items, width, to_text))
}

fn join_columns<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|column| column.as_ref())
        .collect::<Vec<&str>>()
        .join(COLUMN_SEPARATOR)
}

/// `"2024-10-13"` becomes `"Sunday October 13"`; anything unparsable becomes `""`
pub fn format_date(text: &str) -> String {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map(|date| date.format("%A %B %-d").to_string())
        .unwrap_or_default()
}

pub fn format_high(temperature: f64) -> String {
    format!("High {:.0}", temperature)
}

pub fn format_low(temperature: f64) -> String {
    format!("Low {:.0}", temperature)
}

pub fn format_header(location: &Location) -> [String; 2] {
    [
        format!("Weather for {}, {}", location.city, location.region),
        format!(
            "Latitude: {}, Longitude: {}",
            location.latitude, location.longitude
        ),
    ]
}

#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub column_width: usize,
    pub theme: Theme,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            column_width: DEFAULT_COLUMN_WIDTH,
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    Date,
    Spacer,
    Glyph(GlyphRow),
    Description,
    High,
    Low,
}

/// One already padded column of a row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub class: Option<WeatherClass>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub kind: RowKind,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn text(&self) -> String {
        let texts: Vec<&str> = self.cells.iter().map(|cell| cell.text.as_str()).collect();
        join_columns(&texts)
    }
}

/// Lays a forecast out as fixed-width columns, one per day
#[derive(Debug, Clone, Default)]
pub struct ForecastRenderer {
    config: RenderConfig,
}

impl ForecastRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Date, spacer, three pictogram rows, spacer, description, high, low
    pub fn rows(&self, forecast: &ForecastSet) -> Vec<Row> {
        let days = forecast.days();
        let mut rows = Vec::with_capacity(9);

        rows.push(self.text_row(RowKind::Date, days, |d| format_date(&d.date)));
        rows.push(self.text_row(RowKind::Spacer, days, |_| String::new()));
        for glyph_row in GlyphRow::ALL {
            rows.push(self.glyph_row(days, glyph_row));
        }
        rows.push(self.text_row(RowKind::Spacer, days, |_| String::new()));
        rows.push(self.text_row(RowKind::Description, days, |d| {
            catalog::description(d.weather_code).to_string()
        }));
        rows.push(self.text_row(RowKind::High, days, |d| format_high(d.temperature_max)));
        rows.push(self.text_row(RowKind::Low, days, |d| format_low(d.temperature_min)));

        rows
    }

    /// The nine forecast rows joined by newlines
    pub fn render_block(&self, forecast: &ForecastSet) -> String {
        self.rows(forecast)
            .iter()
            .map(Row::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Header with the resolved place, a blank line, then the forecast block
    pub fn render(&self, location: &Location, forecast: &ForecastSet) -> String {
        let [title, coordinates] = format_header(location);
        format!("{}\n{}\n\n{}", title, coordinates, self.render_block(forecast))
    }

    fn text_row(
        &self,
        kind: RowKind,
        days: &[DailyForecast],
        to_text: impl Fn(&DailyForecast) -> String,
    ) -> Row {
        let cells = columns(days, self.config.column_width, to_text)
            .into_iter()
            .zip(days)
            .map(|(text, day)| Cell {
                text,
                class: WeatherClass::from_code(day.weather_code),
            })
            .collect();
        Row { kind, cells }
    }

    fn glyph_row(&self, days: &[DailyForecast], row: GlyphRow) -> Row {
        let cells = days
            .iter()
            .map(|day| {
                let glyph = catalog::glyph_row(day.weather_code, row);
                Cell {
                    text: center_declared(glyph.text, glyph.width, self.config.column_width),
                    class: WeatherClass::from_code(day.weather_code),
                }
            })
            .collect();
        Row {
            kind: RowKind::Glyph(row),
            cells,
        }
    }
}
