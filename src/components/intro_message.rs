use artbox::{
    Alignment as ArtAlignment, Color as ArtColor, Fill, LinearGradient, Renderer, fonts,
    integrations::ratatui::ArtBox,
};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::Component;
use crate::action::Action;

pub const WELCOME_TITLE: &str = "Welcome to Your Weather Hub!";
pub const WELCOME_TAGLINE: &str = "Stay ahead of the weather with real-time updates! \
     Let's find out what the skies have in store for you!";

/// Splash shown until the intro timer fires
pub struct IntroMessage;

fn banner_fill() -> Fill {
    Fill::Linear(LinearGradient::horizontal(
        ArtColor::rgb(255, 170, 60),  // Sun
        ArtColor::rgb(70, 130, 200), // Rain
    ))
}

impl Component<Action> for IntroMessage {
    type Props<'a> = ();

    fn render(&mut self, frame: &mut Frame, area: Rect, _props: Self::Props<'_>) {
        let chunks = Layout::vertical([
            Constraint::Max(6),    // FIGlet banner
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Welcome line
            Constraint::Length(1), // Spacer
            Constraint::Length(2), // Tagline
        ])
        .flex(Flex::Center)
        .split(area);

        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(banner_fill());
        frame.render_widget(ArtBox::new(&renderer, "Weather Hub"), chunks[0]);

        let welcome = Line::from(vec![Span::styled(
            WELCOME_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        )])
        .centered();
        frame.render_widget(Paragraph::new(welcome), chunks[2]);

        let tagline = Line::from(vec![Span::styled(
            WELCOME_TAGLINE,
            Style::default().fg(Color::DarkGray),
        )])
        .centered();
        frame.render_widget(
            Paragraph::new(tagline).wrap(Wrap { trim: true }),
            chunks[4],
        );
    }
}
