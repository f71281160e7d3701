use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::action::Action;
use crate::presentation::round_temperature;
use crate::state::CurrentWeather;

/// Rows: headline, blank, then one per detail.
pub const CURRENT_CONDITIONS_HEIGHT: u16 = 7;

pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub weather: &'a CurrentWeather,
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let rows = Layout::vertical([Constraint::Length(1); CURRENT_CONDITIONS_HEIGHT as usize])
            .horizontal_margin(2)
            .split(area);

        let headline = Line::from(vec![
            Span::styled(
                format!("{}°", round_temperature(weather.temperature)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(weather.city.clone()),
        ])
        .centered();
        frame.render_widget(Paragraph::new(headline), rows[0]);

        let details = [
            ("Temp min", format!("{}°", round_temperature(weather.temp_min))),
            ("Temp max", format!("{}°", round_temperature(weather.temp_max))),
            ("Humidity", format!("{}%", weather.humidity)),
            ("Cloudy", format!("{}%", weather.cloud_cover)),
            ("Wind", format!("{}m/s", weather.wind_speed)),
        ];
        for ((label, value), row) in details.into_iter().zip(rows.iter().skip(2)) {
            render_detail(frame, *row, label, value);
        }
    }
}

fn render_detail(frame: &mut Frame, area: Rect, label: &str, value: String) {
    let [left, right] = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);
    frame.render_widget(Paragraph::new(Line::from(label.to_string())), left);
    frame.render_widget(Paragraph::new(Line::from(value).right_aligned()), right);
}
