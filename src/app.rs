use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::constants::MALFORMED_QUERY_MESSAGE;
use crate::models::{ForecastSet, Location};

/// Keystrokes the view reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Char(char),
    Backspace,
    Submit,
    /// Ctrl+C
    Interrupt,
}

impl InputEvent {
    /// Maps a terminal key to an input event; anything else is ignored
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') => Some(Self::Interrupt),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Enter => Some(Self::Submit),
            KeyCode::Backspace => Some(Self::Backspace),
            KeyCode::Char(c) => Some(Self::Char(c)),
            _ => None,
        }
    }
}

/// What the event loop must do after an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Lookup { city: String, state: String },
}

/// View state: the pending input plus the location and forecast on screen
#[derive(Debug, Clone)]
pub struct App {
    pub input: String,
    pub message: Option<String>,
    pub location: Location,
    pub forecast: ForecastSet,
}

impl App {
    pub fn new(location: Location, forecast: ForecastSet) -> Self {
        Self {
            input: String::new(),
            message: None,
            location,
            forecast,
        }
    }

    /// Applies one input event. Lookups are left to the caller, which feeds
    /// the result back through [`App::apply_lookup`].
    pub fn update(&mut self, event: InputEvent) -> Option<Command> {
        match event {
            InputEvent::Char(c) => {
                self.input.push(c);
                None
            }
            InputEvent::Backspace => {
                self.input.pop();
                None
            }
            InputEvent::Interrupt => Some(Command::Quit),
            InputEvent::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Option<Command> {
        if self.input.eq_ignore_ascii_case("quit") {
            return Some(Command::Quit);
        }

        match parse_query(&self.input) {
            Some((city, state)) => Some(Command::Lookup { city, state }),
            None => {
                tracing::debug!("Rejected query without a state: {:?}", self.input);
                self.message = Some(MALFORMED_QUERY_MESSAGE.to_string());
                None
            }
        }
    }

    /// Replaces the location and forecast together and clears the prompt
    pub fn apply_lookup(&mut self, location: Location, forecast: ForecastSet) {
        self.location = location;
        self.forecast = forecast;
        self.input.clear();
        self.message = None;
    }
}

/// Splits `"City, State"` on the first comma and trims both halves.
/// Anything after a second comma is dropped.
pub fn parse_query(input: &str) -> Option<(String, String)> {
    let mut parts = input.split(',');
    let city = parts.next()?.trim();
    let state = parts.next()?.trim();
    Some((city.to_string(), state.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DailyForecast;
    use rstest::rstest;

    fn app() -> App {
        App::new(Location::fallback(), ForecastSet::default())
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            assert_eq!(app.update(InputEvent::Char(c)), None);
        }
    }

    #[rstest]
    #[case("quit")]
    #[case("QUIT")]
    #[case("Quit")]
    #[case("qUiT")]
    fn quit_is_case_insensitive(#[case] word: &str) {
        let mut app = app();
        type_text(&mut app, word);
        assert_eq!(app.update(InputEvent::Submit), Some(Command::Quit));
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app();
        type_text(&mut app, "Duluth");
        assert_eq!(app.update(InputEvent::Interrupt), Some(Command::Quit));
    }

    #[test]
    fn backspace_edits_the_buffer() {
        let mut app = app();
        type_text(&mut app, "Bostonn");
        app.update(InputEvent::Backspace);
        assert_eq!(app.input, "Boston");

        let mut empty = self::app();
        empty.update(InputEvent::Backspace);
        assert_eq!(empty.input, "");
    }

    #[test]
    fn submit_issues_a_trimmed_lookup() {
        let mut app = app();
        type_text(&mut app, "  Los Angeles ,  CA ");
        assert_eq!(
            app.update(InputEvent::Submit),
            Some(Command::Lookup {
                city: "Los Angeles".to_string(),
                state: "CA".to_string(),
            })
        );
    }

    #[test]
    fn query_without_comma_sets_message_and_keeps_state() {
        let mut app = app();
        type_text(&mut app, "Chicago");
        assert_eq!(app.update(InputEvent::Submit), None);
        assert_eq!(app.message.as_deref(), Some(MALFORMED_QUERY_MESSAGE));
        assert_eq!(app.input, "Chicago");
        assert_eq!(app.location, Location::fallback());
    }

    #[test]
    fn apply_lookup_replaces_everything_at_once() {
        let mut app = app();
        app.message = Some("stale".to_string());
        type_text(&mut app, "Austin, TX");

        let forecast = ForecastSet::new(vec![DailyForecast {
            date: "2024-10-13".to_string(),
            weather_code: 0,
            temperature_max: 90.0,
            temperature_min: 70.0,
        }]);
        let location = Location::new("Austin", "TX", "30.27", "-97.74");
        app.apply_lookup(location.clone(), forecast.clone());

        assert_eq!(app.location, location);
        assert_eq!(app.forecast, forecast);
        assert!(app.input.is_empty());
        assert!(app.message.is_none());
    }

    #[rstest]
    #[case("Portland, OR", Some(("Portland", "OR")))]
    #[case("Portland,", Some(("Portland", "")))]
    #[case("a, b, c", Some(("a", "b")))]
    #[case("Portland", None)]
    #[case("", None)]
    fn query_parsing(#[case] input: &str, #[case] expected: Option<(&str, &str)>) {
        let expected = expected.map(|(c, s)| (c.to_string(), s.to_string()));
        assert_eq!(parse_query(input), expected);
    }

    #[test]
    fn key_mapping() {
        let key = |code, modifiers| KeyEvent::new(code, modifiers);
        assert_eq!(
            InputEvent::from_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(InputEvent::Interrupt)
        );
        assert_eq!(
            InputEvent::from_key(key(KeyCode::Char('C'), KeyModifiers::SHIFT)),
            Some(InputEvent::Char('C'))
        );
        assert_eq!(
            InputEvent::from_key(key(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputEvent::Submit)
        );
        assert_eq!(
            InputEvent::from_key(key(KeyCode::Backspace, KeyModifiers::NONE)),
            Some(InputEvent::Backspace)
        );
        assert_eq!(InputEvent::from_key(key(KeyCode::Up, KeyModifiers::NONE)), None);
    }
}
