//! WMO weather code lookup: class, description and a three row pictogram.

/// Description and glyph text for any code outside the known classes
pub const UNKNOWN_WEATHER_CODE: &str = "Unknown weather code";

/// Declared width of the unknown-code glyph. It does not match the text.
const UNKNOWN_GLYPH_WIDTH: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherClass {
    Sunny,
    Cloudy,
    Fog,
    Rain,
    Snow,
    Thunderstorm,
}

impl WeatherClass {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Sunny),
            1 | 2 | 3 => Some(Self::Cloudy),
            45 | 48 => Some(Self::Fog),
            51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 => Some(Self::Rain),
            71 | 73 | 75 | 77 | 85 | 86 => Some(Self::Snow),
            95 | 96 | 99 => Some(Self::Thunderstorm),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sunny => "Sunny",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Thunderstorm => "Thunderstorm",
        }
    }

    /// The pictogram rows paired with the width used to center them
    fn glyphs(self) -> [(&'static str, usize); 3] {
        match self {
            Self::Sunny => [("\\ | /", 5), ("-- O --", 7), ("/ | \\", 5)],
            Self::Cloudy => [("  ____", 6), ("_(    )", 7), ("(____)___)", 10)],
            Self::Fog => [("o o o", 5), ("o o o o", 7), ("o o o", 5)],
            Self::Rain => [("/ / /", 5), ("/ / / /", 7), ("/ /  /", 6)],
            Self::Snow => [("* * * *", 7), (" * * *", 6), ("* * * *", 7)],
            Self::Thunderstorm => [("(   ( )", 7), ("(   (   )", 9), ("/ / / /", 7)],
        }
    }
}

/// Pictogram row, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphRow {
    First,
    Second,
    Third,
}

impl GlyphRow {
    pub const ALL: [GlyphRow; 3] = [GlyphRow::First, GlyphRow::Second, GlyphRow::Third];

    fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
            Self::Third => 2,
        }
    }
}

/// One row of a pictogram. `width` is the declared display width and is what
/// centering uses, whatever the length of `text`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub text: &'static str,
    pub width: usize,
}

pub fn description(code: i32) -> &'static str {
    WeatherClass::from_code(code)
        .map(WeatherClass::label)
        .unwrap_or(UNKNOWN_WEATHER_CODE)
}

pub fn glyph_row(code: i32, row: GlyphRow) -> Glyph {
    match WeatherClass::from_code(code) {
        Some(class) => {
            let (text, width) = class.glyphs()[row.index()];
            Glyph { text, width }
        }
        None => Glyph {
            text: UNKNOWN_WEATHER_CODE,
            width: UNKNOWN_GLYPH_WIDTH,
        },
    }
}
