//! Status bar widget for displaying status messages and hints

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Theme};
use crate::shortcuts::MAIN_CONTEXT;

/// Number of shortcut hints shown when there is no status message.
const HINT_COUNT: usize = 6;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: message or hints on top, current choices below.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let first_line = if state.status_message.is_empty() {
            Self::hints_line(state, theme)
        } else {
            Line::from(Span::styled(
                state.status_message.as_str(),
                Style::default().fg(theme.success),
            ))
        };

        let status = Paragraph::new(vec![first_line, Self::summary_line(state, theme)])
            .style(Style::default().bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .border_style(Style::default().fg(theme.inactive))
                    .style(Style::default().bg(theme.background)),
            );
        f.render_widget(status, area);
    }

    /// Shortcut hints from the registry.
    fn hints_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let mut spans: Vec<Span<'static>> = Vec::new();
        let hints = state.shortcuts.help_entries(MAIN_CONTEXT);
        // Skip the per-tab rows; "Tab" already covers them
        for (i, (keys, action)) in hints
            .into_iter()
            .skip(4)
            .take(HINT_COUNT)
            .enumerate()
        {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(
                keys,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(action, Style::default().fg(theme.text_muted)));
        }
        spans.push(Span::styled("  ? help", Style::default().fg(theme.text_muted)));
        Line::from(spans)
    }

    /// Current configuration, scheme, efficiency and add-on.
    fn summary_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let selection = &state.selection;
        let add_on = selection
            .selected_add_on_descriptor()
            .map_or_else(|| "none".to_string(), |a| format!("{} ({})", a.name, a.price));

        let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.primary));
        let value = |text: String| Span::styled(text, Style::default().fg(theme.text));

        Line::from(vec![
            label("Configuration: "),
            value(selection.active_configuration().label().to_string()),
            label("  Scheme: "),
            value(selection.color_scheme().label().to_string()),
            label("  Space: "),
            value(format!(
                "{}% (x{:.2})",
                selection.space_efficiency(),
                selection.scale()
            )),
            label("  Add-on: "),
            value(add_on),
        ])
    }
}
