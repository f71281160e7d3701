use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;
use crate::presentation::{daily_sample, day_name, round_temperature};
use crate::state::ForecastEntry;

pub const FORECAST_HEADING: &str = "5-Day Forecast";

/// One column per sampled day. Renders nothing for an empty forecast.
pub struct ForecastStrip;

pub struct ForecastStripProps<'a> {
    pub entries: &'a [ForecastEntry],
}

impl Component<Action> for ForecastStrip {
    type Props<'a> = ForecastStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let days = daily_sample(props.entries);
        if days.is_empty() || area.height < 3 {
            return;
        }

        let [heading, _, body] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(area);

        let title = Line::from(vec![Span::styled(
            FORECAST_HEADING,
            Style::default().add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(title), heading);

        let columns = Layout::horizontal(vec![Constraint::Fill(1); days.len()]).split(body);
        for (entry, column) in days.into_iter().zip(columns.iter()) {
            let text = Text::from(vec![
                Line::from(Span::styled(
                    day_name(entry.timestamp),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("{}°C", round_temperature(entry.temperature))),
                Line::from(entry.description.clone()),
            ]);
            frame.render_widget(
                Paragraph::new(text)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                *column,
            );
        }
    }
}
