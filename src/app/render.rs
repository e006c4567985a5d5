use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{List, ListItem, Paragraph};
use throbber_widgets_tui::Throbber;

use super::App;

const PROMPT: &str = "Job title > ";
pub(super) const RELATED_HEADING: &str = "Explore Similar Jobs";
const ACTION_HINT: &str = "enter submit · ^y copy · ^l linkedin · ^g google · esc quit";

impl App<'_> {
    pub(crate) fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area().inner(Margin {
            vertical: 0,
            horizontal: 1,
        });

        // Input row on top, results below, one footer line.
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_input_row(frame, layout[0]);
        self.render_body(frame, layout[1]);
        self.render_footer(frame, layout[2]);
    }

    fn render_input_row(&mut self, frame: &mut Frame, area: Rect) {
        let layout = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(PROMPT.len() as u16),
                Constraint::Min(1),
                Constraint::Length(12),
            ])
            .split(area);

        frame.render_widget(Paragraph::new(PROMPT).style(self.theme.prompt), layout[0]);
        self.title_input.render_textarea(frame, layout[1]);

        if self.loading {
            let throbber = Throbber::default()
                .label("querying")
                .style(self.theme.loading)
                .throbber_style(self.theme.loading);
            frame.render_stateful_widget(throbber, layout[2], &mut self.throbber_state);
        }
    }

    /// Two mutually exclusive fragments below the form: the loading
    /// indicator, or the result lists. Stale lists stay hidden while a
    /// submission is in flight.
    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        if self.loading {
            let loading = Paragraph::new("Generating queries…")
                .alignment(Alignment::Center)
                .style(self.theme.loading);
            frame.render_widget(loading, area);
            return;
        }

        if self.queries.is_empty() {
            return;
        }

        let related_height = self.related_titles.len() as u16 + 2;
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(related_height)])
            .split(area);

        let rows: Vec<ListItem> = self
            .queries
            .iter()
            .map(|query| ListItem::new(query.as_str()).style(self.theme.query_row))
            .collect();
        let list = List::new(rows)
            .highlight_style(self.theme.selected_row)
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, layout[0], &mut self.list_state);

        let mut lines = Vec::with_capacity(self.related_titles.len() + 2);
        lines.push(Line::default());
        lines.push(Line::styled(RELATED_HEADING, self.theme.heading));
        for title in &self.related_titles {
            lines.push(Line::styled(title.as_str(), self.theme.related));
        }
        frame.render_widget(Paragraph::new(lines), layout[1]);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = if let Some(error) = &self.error {
            Paragraph::new(error.as_str()).style(self.theme.error)
        } else if let Some(status) = &self.status {
            Paragraph::new(status.as_str()).style(self.theme.status)
        } else {
            Paragraph::new(ACTION_HINT).style(self.theme.hint)
        };
        frame.render_widget(footer, area);
    }
}
