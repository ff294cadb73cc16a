use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::catalog::WeatherClass;
use crate::config::Theme;
use crate::constants::{COLUMN_SEPARATOR, PROMPT};
use crate::formatters::{format_header, ForecastRenderer, Row, RowKind};

pub fn render(f: &mut Frame, app: &App, renderer: &ForecastRenderer) {
    let area = f.area();
    let theme = &renderer.config().theme;

    // blank(1) + header(2) + blank(1) + forecast(9) + blank(2) + prompt(1) + input(1) + message(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    render_header(f, app, theme, chunks[1]);
    render_forecast(f, app, renderer, chunks[3]);

    f.render_widget(Paragraph::new(PROMPT), chunks[5]);
    f.render_widget(Paragraph::new(app.input.as_str()), chunks[6]);

    if let Some(message) = &app.message {
        f.render_widget(
            Paragraph::new(Span::styled(message.as_str(), theme.message)),
            chunks[7],
        );
    }
}

fn render_header(f: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let lines: Vec<Line> = format_header(&app.location)
        .into_iter()
        .map(|text| Line::from(Span::styled(text, theme.title)))
        .collect();
    f.render_widget(Paragraph::new(lines), area);
}

fn render_forecast(f: &mut Frame, app: &App, renderer: &ForecastRenderer, area: Rect) {
    let theme = &renderer.config().theme;
    let rows = renderer.rows(&app.forecast);
    let lines: Vec<Line> = rows.iter().map(|row| styled_row(row, theme)).collect();
    f.render_widget(Paragraph::new(lines), area);
}

/// Pictogram cells take the colour of their weather class; everything else is plain
fn styled_row<'a>(row: &'a Row, theme: &Theme) -> Line<'a> {
    let mut spans = Vec::with_capacity(row.cells.len() * 2);
    for (i, cell) in row.cells.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(COLUMN_SEPARATOR));
        }
        let style = match row.kind {
            RowKind::Glyph(_) => glyph_style(cell.class, theme),
            _ => Style::default(),
        };
        spans.push(Span::styled(cell.text.as_str(), style));
    }
    Line::from(spans)
}

fn glyph_style(class: Option<WeatherClass>, theme: &Theme) -> Style {
    match class {
        Some(WeatherClass::Sunny) => theme.sunny,
        Some(WeatherClass::Rain) => theme.rain,
        Some(WeatherClass::Cloudy) => theme.cloud,
        _ => Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyForecast, ForecastSet, Location};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn screen_lines(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn draw(app: &App) -> Vec<String> {
        let renderer = ForecastRenderer::default();
        let mut terminal = Terminal::new(TestBackend::new(120, 20)).unwrap();
        terminal.draw(|f| render(f, app, &renderer)).unwrap();
        screen_lines(terminal.backend().buffer())
    }

    fn sample_app() -> App {
        App::new(
            Location::new("Minneapolis", "Minnesota", "44.98", "-93.2638"),
            ForecastSet::new(vec![
                DailyForecast {
                    date: "2024-10-13".to_string(),
                    weather_code: 0,
                    temperature_max: 75.4,
                    temperature_min: 60.2,
                },
                DailyForecast {
                    date: "2024-10-14".to_string(),
                    weather_code: 63,
                    temperature_max: 66.0,
                    temperature_min: 49.5,
                },
            ]),
        )
    }

    #[test]
    fn draws_header_forecast_and_prompt() {
        let lines = draw(&sample_app());

        assert!(lines[1].starts_with("Weather for Minneapolis, Minnesota"));
        assert!(lines[2].starts_with("Latitude: 44.98, Longitude: -93.2638"));
        assert!(lines[4].contains("Sunday October 13"));
        assert!(lines[4].contains("Monday October 14"));
        assert!(lines[10].contains("Sunny"));
        assert!(lines[10].contains("Rain"));
        assert!(lines[11].contains("High 75"));
        assert!(lines[12].contains("Low 60"));
        assert!(lines[15].starts_with("Enter a city and state"));
    }

    #[test]
    fn draws_pictogram_rows_from_the_renderer() {
        let lines = draw(&sample_app());
        let rows = ForecastRenderer::default().rows(&sample_app().forecast);

        for (offset, row) in rows.iter().enumerate() {
            assert!(
                lines[4 + offset].starts_with(&row.text()),
                "row {offset}: {:?}",
                lines[4 + offset]
            );
        }
        assert!(lines[6].contains("\\ | /"));
        assert!(lines[7].contains("/ / / /"));
    }

    #[test]
    fn draws_pending_input_and_message() {
        let mut app = sample_app();
        app.input = "Chicago".to_string();
        app.message = Some("Please enter both a city and a state".to_string());

        let lines = draw(&app);
        assert!(lines[16].starts_with("Chicago"));
        assert!(lines[17].starts_with("Please enter both a city and a state"));
    }

    #[test]
    fn pictogram_cells_are_coloured_by_class() {
        let theme = Theme::default();
        let rows = ForecastRenderer::default().rows(&sample_app().forecast);
        let line = styled_row(&rows[2], &theme);

        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].style, theme.sunny);
        assert_eq!(line.spans[1].content, " | ");
        assert_eq!(line.spans[2].style, theme.rain);

        let dates = styled_row(&rows[0], &theme);
        assert_eq!(dates.spans[0].style, Style::default());
    }
}
