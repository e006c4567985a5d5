use ratatui::style::{Color, Modifier, Style};

/// Styles applied to the fixed parts of the view.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) prompt: Style,
    pub(crate) input: Style,
    pub(crate) query_row: Style,
    pub(crate) selected_row: Style,
    pub(crate) heading: Style,
    pub(crate) related: Style,
    pub(crate) loading: Style,
    pub(crate) hint: Style,
    pub(crate) error: Style,
    pub(crate) status: Style,
}

pub(crate) const SLATE: Theme = Theme {
    prompt: Style::new().fg(Color::LightCyan),
    input: Style::new().fg(Color::Rgb(226, 232, 240)),
    query_row: Style::new().fg(Color::Rgb(203, 213, 225)),
    selected_row: Style::new()
        .bg(Color::Rgb(30, 41, 59))
        .fg(Color::Rgb(250, 204, 21)),
    heading: Style::new()
        .fg(Color::Rgb(226, 232, 240))
        .add_modifier(Modifier::BOLD),
    related: Style::new().fg(Color::Rgb(148, 163, 184)),
    loading: Style::new().fg(Color::Yellow),
    hint: Style::new().fg(Color::DarkGray),
    error: Style::new().fg(Color::LightRed),
    status: Style::new().fg(Color::LightGreen),
};

pub(crate) const LIGHT: Theme = Theme {
    prompt: Style::new().fg(Color::Blue),
    input: Style::new().fg(Color::Black),
    query_row: Style::new().fg(Color::Rgb(51, 65, 85)),
    selected_row: Style::new()
        .bg(Color::Rgb(219, 234, 254))
        .fg(Color::Rgb(30, 64, 175)),
    heading: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    related: Style::new().fg(Color::Rgb(100, 116, 139)),
    loading: Style::new().fg(Color::Rgb(180, 83, 9)),
    hint: Style::new().fg(Color::Gray),
    error: Style::new().fg(Color::Red),
    status: Style::new().fg(Color::Rgb(21, 128, 61)),
};

const BUILTINS: &[(&str, Theme)] = &[("slate", SLATE), ("light", LIGHT)];

/// Names of the built-in themes, in registration order.
pub(crate) fn names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|(name, _)| *name)
}

/// Look up a built-in theme by name.
pub(crate) fn by_name(name: &str) -> Option<Theme> {
    BUILTINS
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, theme)| *theme)
}

impl Default for Theme {
    fn default() -> Self {
        SLATE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_is_resolvable_by_name() {
        for name in names() {
            assert!(by_name(name).is_some(), "missing theme {name}");
        }
        assert!(by_name("neon").is_none());
    }
}
