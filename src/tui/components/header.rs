//! # Header Component
//!
//! Two-line banner at the top of the screen: app name with tagline on the
//! left, active theme on the right.
//!
//! Stateless: everything it shows arrives as props.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::theme::Theme;
use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const APP_TITLE: &str = "Nexia Idea Generator";
pub const TAGLINE: &str = "Turn Your Thoughts Into Reality";

pub struct Header {
    pub theme: Theme,
    pub palette: Palette,
}

impl Header {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
        }
    }
}

impl Component for Header {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(16)]).areas(area);

        let title = Paragraph::new(vec![
            Line::from(vec![
                Span::styled("⚙ ", Style::default().fg(self.palette.highlight)),
                Span::styled(
                    APP_TITLE,
                    Style::default()
                        .fg(self.palette.accent)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(TAGLINE, Style::default().fg(self.palette.muted))),
        ]);
        frame.render_widget(title, left);

        let icon = match self.theme {
            Theme::Dark => "☾",
            Theme::Light => "☀",
        };
        let theme_hint = Paragraph::new(format!("{} {} (^T)", icon, self.theme.label()))
            .style(Style::default().fg(self.palette.muted))
            .alignment(Alignment::Right);
        frame.render_widget(theme_hint, right);
    }
}
