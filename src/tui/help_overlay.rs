//! Help overlay listing every keyboard shortcut.
//!
//! Rows come from the [`ShortcutRegistry`], so the overlay never drifts from
//! the bindings the event loop actually uses.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::component::{ComponentEvent, ContextualComponent};
use super::Theme;
use crate::constants::APP_NAME;
use crate::shortcuts::{Action, ShortcutRegistry, HELP_CONTEXT, MAIN_CONTEXT};

/// Width of the key column.
const KEY_COLUMN: usize = 18;

/// Scrollable help overlay.
#[derive(Debug, Clone, Default)]
pub struct HelpOverlay {
    /// Current scroll offset (line number)
    scroll_offset: usize,
}

impl HelpOverlay {
    /// Creates a new help overlay scrolled to the top.
    #[must_use]
    pub const fn new() -> Self {
        Self { scroll_offset: 0 }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Builds the overlay content.
    fn content(theme: &Theme, registry: &ShortcutRegistry) -> Vec<Line<'static>> {
        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let row = |keys: String, description: &'static str| {
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{keys:<width$}", width = KEY_COLUMN),
                    Style::default().fg(theme.success),
                ),
                Span::styled(description, Style::default().fg(theme.text)),
            ])
        };

        let mut lines = vec![
            Line::from(Span::styled(
                format!("{APP_NAME} - configure your modular furniture"),
                Style::default()
                    .fg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            heading("═══ SHORTCUTS ═══"),
        ];
        lines.extend(
            registry
                .help_entries(MAIN_CONTEXT)
                .into_iter()
                .map(|(keys, description)| row(keys, description)),
        );

        lines.push(Line::from(""));
        lines.push(heading("═══ MOUSE ═══"));
        lines.push(row(
            "Click / drag".to_string(),
            "Set space efficiency on the slider track",
        ));
        lines.push(row("Click".to_string(), "Select or clear an add-on card"));

        lines.push(Line::from(""));
        lines.push(heading("═══ IN THIS HELP ═══"));
        lines.push(row("↑ / ↓".to_string(), "Scroll"));
        lines.extend(
            registry
                .help_entries(HELP_CONTEXT)
                .into_iter()
                .map(|(keys, description)| row(keys, description)),
        );
        lines
    }
}

impl ContextualComponent for HelpOverlay {
    type Context = ShortcutRegistry;
    type Event = ComponentEvent;

    fn handle_input(&mut self, key: KeyEvent, registry: &ShortcutRegistry) -> Option<ComponentEvent> {
        match registry.lookup(HELP_CONTEXT, key) {
            Some(Action::ToggleHelp | Action::Cancel) => return Some(ComponentEvent::Closed),
            Some(Action::Quit) => return Some(ComponentEvent::QuitRequested),
            _ => {}
        }

        match key.code {
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => {
                // Styling does not change the line count
                let total_lines = Self::content(&Theme::dark(), registry).len();
                if self.scroll_offset + 1 < total_lines {
                    self.scroll_offset += 1;
                }
            }
            KeyCode::Home => self.scroll_offset = 0,
            _ => {}
        }
        None
    }

    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, registry: &ShortcutRegistry) {
        let content = Self::content(theme, registry);
        let total_lines = content.len();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);

        let visible_height = chunks[0].height.saturating_sub(2) as usize;
        let max_offset = total_lines.saturating_sub(visible_height);
        let offset = self.scroll_offset.min(max_offset);

        f.render_widget(Clear, area);
        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.primary))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text))
            .scroll((u16::try_from(offset).unwrap_or(u16::MAX), 0));
        f.render_widget(paragraph, chunks[0]);

        let scrollbar = Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .style(Style::default().fg(theme.primary));
        let mut scrollbar_state = ScrollbarState::new(max_offset).position(offset);
        f.render_stateful_widget(scrollbar, chunks[1], &mut scrollbar_state);
    }
}
