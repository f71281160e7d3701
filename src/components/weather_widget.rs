use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    BaseStyle, Padding, StatusBar, StatusBarHint, StatusBarProps, StatusBarSection,
    StatusBarStyle, TextInput, TextInputProps, TextInputStyle,
};

use super::current_conditions::CURRENT_CONDITIONS_HEIGHT;
use super::{
    Component, CurrentConditions, CurrentConditionsProps, ForecastStrip, ForecastStripProps,
    IntroMessage,
};
use crate::action::Action;
use crate::state::AppState;

pub const TITLE: &str = "Weather Hub";
pub const INPUT_PLACEHOLDER: &str = "Enter city";

const TEXT_MAIN: Color = Color::Rgb(20, 20, 20);
const TEXT_DIM: Color = Color::Rgb(110, 110, 110);
const INPUT_BG: Color = Color::Rgb(255, 255, 255);
const ERROR_FG: Color = Color::Rgb(200, 35, 51);

/// Props for WeatherWidget - read-only view of state
pub struct WeatherWidgetProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// The whole widget: intro splash, then input + current conditions + forecast
pub struct WeatherWidget {
    input: TextInput,
}

impl Default for WeatherWidget {
    fn default() -> Self {
        Self {
            input: TextInput::new(),
        }
    }
}

impl WeatherWidget {
    pub fn new() -> Self {
        Self::default()
    }
}

fn input_style() -> TextInputStyle {
    TextInputStyle {
        base: BaseStyle {
            border: None,
            padding: Padding::xy(1, 0),
            bg: Some(INPUT_BG),
            fg: Some(TEXT_MAIN),
        },
        placeholder_style: Some(Style::default().fg(TEXT_DIM)),
        cursor_style: None,
    }
}

impl Component<Action> for WeatherWidget {
    type Props<'a> = WeatherWidgetProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return Vec::new();
        }

        let EventKind::Key(key) = event else {
            return Vec::new();
        };

        match key.code {
            KeyCode::Esc => return vec![Action::Quit],
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return vec![Action::Quit];
            }
            _ => {}
        }

        // The input only exists once the intro is gone
        if props.state.intro_visible {
            return Vec::new();
        }

        let input_props = TextInputProps {
            value: &props.state.query,
            placeholder: INPUT_PLACEHOLDER,
            is_focused: true,
            style: input_style(),
            on_change: Action::CityInputChange,
            on_submit: |_| Action::Render,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input
            .handle_event(event, input_props)
            .into_iter()
            .collect()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let state = props.state;
        frame.render_widget(
            Block::default().style(Style::default().bg(state.background().color()).fg(TEXT_MAIN)),
            area,
        );

        let [content, status] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area);

        if state.intro_visible {
            IntroMessage.render(frame, content, ());
        } else {
            self.render_main(frame, content, state, props.is_focused);
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            status,
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[StatusBarHint::new("esc", "quit")]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

impl WeatherWidget {
    fn render_main(&mut self, frame: &mut Frame, area: Rect, state: &AppState, is_focused: bool) {
        let [title, _, input, _, error, current, rule, forecast] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(CURRENT_CONDITIONS_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(area);

        let heading = Line::from(vec![Span::styled(
            TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(heading), title);

        let [_, input_area, _] = Layout::horizontal([
            Constraint::Fill(1),
            Constraint::Length(32),
            Constraint::Fill(1),
        ])
        .areas(input);
        let input_props = TextInputProps {
            value: &state.query,
            placeholder: INPUT_PLACEHOLDER,
            is_focused,
            style: input_style(),
            on_change: Action::CityInputChange,
            on_submit: |_| Action::Render,
            on_cursor_move: Some(|_| Action::Render),
        };
        self.input.render(frame, input_area, input_props);

        if let Some(message) = &state.error {
            frame.render_widget(
                Paragraph::new(message.as_str())
                    .style(Style::default().fg(ERROR_FG).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center),
                error,
            );
        }

        if let Some(weather) = &state.weather {
            CurrentConditions.render(frame, current, CurrentConditionsProps { weather });
        }

        frame.render_widget(
            Paragraph::new("─".repeat(rule.width as usize)).style(Style::default().fg(TEXT_DIM)),
            rule,
        );

        ForecastStrip.render(
            frame,
            forecast,
            ForecastStripProps {
                entries: &state.forecast,
            },
        );
    }
}
