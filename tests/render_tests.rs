//! Render tests using RenderHarness
//!
//! Components render to a test buffer which is flattened to plain text.

use ratatui::{Terminal, backend::TestBackend, style::Color};
use tui_dispatch::testing::*;
use weather_hub::{
    components::{
        Component, FORECAST_HEADING, INPUT_PLACEHOLDER, TITLE, WELCOME_TITLE, WeatherWidget,
        WeatherWidgetProps,
    },
    state::{AppState, CITY_NOT_FOUND, CurrentWeather, ForecastEntry},
};

fn render_widget(state: &AppState, width: u16, height: u16) -> String {
    let mut render = RenderHarness::new(width, height);
    let mut component = WeatherWidget::new();

    render.render_to_string_plain(|frame| {
        let props = WeatherWidgetProps {
            state,
            is_focused: true,
        };
        component.render(frame, frame.area(), props);
    })
}

fn paris() -> CurrentWeather {
    CurrentWeather {
        city: "Paris".into(),
        temperature: 18.0,
        temp_min: 12.6,
        temp_max: 19.4,
        humidity: 77,
        cloud_cover: 100,
        wind_speed: 6.2,
    }
}

fn loaded_state() -> AppState {
    let mut state = AppState {
        intro_visible: false,
        query: "Paris".into(),
        ..Default::default()
    };
    state.apply_weather(paris());
    state
}

#[test]
fn test_render_intro() {
    let output = render_widget(&AppState::default(), 80, 24);

    assert!(output.contains(WELCOME_TITLE), "intro missing:\n{}", output);
    assert!(!output.contains(INPUT_PLACEHOLDER), "input shown during intro");
}

#[test]
fn test_render_idle() {
    let state = AppState {
        intro_visible: false,
        ..Default::default()
    };
    let output = render_widget(&state, 80, 24);

    assert!(output.contains(TITLE));
    assert!(output.contains(INPUT_PLACEHOLDER));
    assert!(!output.contains(FORECAST_HEADING));
    assert!(output.contains("quit"), "Should show quit hint");
}

#[test]
fn test_render_current_conditions() {
    let output = render_widget(&loaded_state(), 80, 24);

    assert!(output.contains("18°"));
    assert!(output.contains("Paris"));
    assert!(output.contains("Temp min"));
    assert!(output.contains("13°"));
    assert!(output.contains("Temp max"));
    assert!(output.contains("19°"));
    assert!(output.contains("77%"));
    assert!(output.contains("100%"));
    assert!(output.contains("6.2m/s"));
}

#[test]
fn test_render_error_state() {
    let mut state = AppState {
        intro_visible: false,
        query: "Nowhereistan".into(),
        ..Default::default()
    };
    state.apply_lookup_error();

    let output = render_widget(&state, 80, 24);

    assert!(output.contains(CITY_NOT_FOUND));
    assert!(!output.contains("Temp min"));
}

#[test]
fn test_render_forecast_samples_one_per_day() {
    let mut state = loaded_state();
    state.forecast = (0..40)
        .map(|i| ForecastEntry {
            // Monday 2024-01-01T12:00:00Z, 3-hourly
            timestamp: 1_704_110_400 + i * 3 * 3600,
            temperature: if i % 8 == 0 { 20.0 + (i / 8) as f64 } else { -9.0 },
            description: if i % 8 == 0 { "clear sky" } else { "skipped" }.into(),
        })
        .collect();

    let output = render_widget(&state, 100, 30);

    assert!(output.contains(FORECAST_HEADING));
    for day in ["Mon", "Tue", "Wed", "Thu", "Fri"] {
        assert!(output.contains(day), "missing {day}:\n{output}");
    }
    for temp in ["20°C", "21°C", "22°C", "23°C", "24°C"] {
        assert!(output.contains(temp), "missing {temp}:\n{output}");
    }
    assert!(!output.contains("skipped"));
    assert!(!output.contains("-9°C"));
}

#[test]
fn test_background_follows_temperature() {
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).expect("test terminal");
    let mut component = WeatherWidget::new();
    let state = loaded_state();

    terminal
        .draw(|frame| {
            let props = WeatherWidgetProps {
                state: &state,
                is_focused: true,
            };
            component.render(frame, frame.area(), props);
        })
        .expect("draw");

    // Top-left corner is plain background
    assert_eq!(
        terminal.backend().buffer()[(0, 0)].bg,
        Color::Rgb(0xFA, 0xFA, 0xD2)
    );
}
