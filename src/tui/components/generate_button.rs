use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::tui::component::Component;
use crate::tui::palette::Palette;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The submit control. Drawn dimmed unless the generate guard would pass.
pub struct GenerateButton {
    pub enabled: bool,
    pub loading: bool,
    pub focused: bool,
    pub spinner_frame: usize,
    pub palette: Palette,
}

impl GenerateButton {
    pub fn label(&self) -> String {
        if self.loading {
            format!("{} Generating Ideas...", SPINNER[self.spinner_frame % SPINNER.len()])
        } else {
            "✨ Generate Ideas".to_string()
        }
    }
}

impl Component for GenerateButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = if self.enabled {
            Style::default()
                .fg(self.palette.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
                .fg(self.palette.muted)
                .add_modifier(Modifier::DIM)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(if self.focused {
                self.palette.border(true)
            } else {
                style
            });

        let button = Paragraph::new(self.label())
            .style(style)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(button, area);
    }
}
