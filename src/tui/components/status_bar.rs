use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::palette::Palette;

pub const KEY_HINTS: &str = "Tab Focus  Enter Select/Generate  PgUp/PgDn Scroll  Esc Quit";

/// Bottom line: status message on the left, key hints on the right.
pub struct StatusBar {
    pub status_message: String,
    pub palette: Palette,
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hints_width = (KEY_HINTS.len() as u16).min(area.width / 2);
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(hints_width)]).areas(area);

        frame.render_widget(
            Span::styled(self.status_message.as_str(), Style::default().fg(self.palette.text)),
            left,
        );
        frame.render_widget(
            Paragraph::new(KEY_HINTS)
                .style(Style::default().fg(self.palette.muted))
                .right_aligned(),
            right,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::theme::Theme;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_status_bar_shows_message_and_hints() {
        let mut terminal = Terminal::new(TestBackend::new(140, 1)).unwrap();
        let mut bar = StatusBar {
            status_message: "3 ideas generated".to_string(),
            palette: Palette::for_theme(Theme::Dark),
        };
        terminal.draw(|f| bar.render(f, f.area())).unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>();
        assert!(text.contains("3 ideas generated"));
        assert!(text.contains("Tab Focus"));
    }
}
