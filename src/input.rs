//! Single-line text input for the job title, backed by `tui-textarea`.

use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::Style;
use tui_textarea::{CursorMove, TextArea};

pub(crate) struct TitleInput<'a> {
    textarea: TextArea<'a>,
}

impl<'a> TitleInput<'a> {
    pub(crate) fn new(initial: String) -> Self {
        let mut textarea = TextArea::new(vec![initial]);
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(CursorMove::End);
        Self { textarea }
    }

    /// Feed a key event to the widget. Returns true when the text changed.
    /// Enter never reaches this point; the app consumes it as submit, so the
    /// content stays single-line.
    pub(crate) fn input(&mut self, key: KeyEvent) -> bool {
        self.textarea.input(key)
    }

    pub(crate) fn text(&self) -> &str {
        self.textarea
            .lines()
            .first()
            .map(String::as_str)
            .unwrap_or("")
    }

    pub(crate) fn set_style(&mut self, style: Style) {
        self.textarea.set_style(style);
    }

    pub(crate) fn render_textarea(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}
