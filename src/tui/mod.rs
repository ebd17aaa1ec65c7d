//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and the widgets that present the configurator using Ratatui.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod canvas;
pub mod component;
pub mod help_overlay;
pub mod panels;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEvent, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

use crate::config::Config;
use crate::constants::APP_NAME;
use crate::models::ADD_ONS;
use crate::selection::{SelectionState, SPACE_EFFICIENCY_MAX, SPACE_EFFICIENCY_MIN};
use crate::shortcuts::{Action, ShortcutRegistry, MAIN_CONTEXT};

use component::{ComponentEvent, ContextualComponent};
use help_overlay::HelpOverlay;
use status_bar::StatusBar;
pub use theme::Theme;

/// Application state - single source of truth
///
/// All widgets read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    /// The user's choices; every change goes through its transitions
    pub selection: SelectionState,
    /// Loaded configuration
    pub config: Config,
    /// Resolved UI theme
    pub theme: Theme,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    /// Highlighted add-on card
    pub add_on_cursor: usize,
    /// Message shown in the status bar until the next accepted action
    pub status_message: String,
    /// Help overlay, when open
    pub help: Option<HelpOverlay>,
    /// A mouse drag started on the slider track
    pub dragging_slider: bool,
    /// Set when the event loop should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates the initial state for a session.
    #[must_use]
    pub fn new(config: Config, theme: Theme) -> Self {
        let help = config.ui.show_help_on_startup.then(HelpOverlay::new);
        Self {
            selection: SelectionState::new(),
            config,
            theme,
            shortcuts: ShortcutRegistry::new(),
            add_on_cursor: 0,
            status_message: String::new(),
            help,
            dragging_slider: false,
            should_quit: false,
        }
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Applies one action from the main screen.
    pub fn dispatch(&mut self, action: Action) {
        self.status_message.clear();

        match action {
            Action::SelectConfiguration(key) => self.selection.select_configuration(key),
            Action::NextConfiguration => self.selection.next_configuration(),
            Action::PreviousConfiguration => self.selection.previous_configuration(),
            Action::SelectColorScheme(key) => self.selection.select_color_scheme(key),
            Action::CycleColorScheme => self.selection.next_color_scheme(),
            Action::DecreaseEfficiency => self.selection.decrease_space_efficiency(),
            Action::IncreaseEfficiency => self.selection.increase_space_efficiency(),
            Action::EfficiencyMin => self.selection.set_space_efficiency(SPACE_EFFICIENCY_MIN),
            Action::EfficiencyMax => self.selection.set_space_efficiency(SPACE_EFFICIENCY_MAX),
            Action::AddOnCursorUp => {
                self.add_on_cursor = self.add_on_cursor.saturating_sub(1);
            }
            Action::AddOnCursorDown => {
                self.add_on_cursor = (self.add_on_cursor + 1).min(ADD_ONS.len() - 1);
            }
            Action::ToggleAddOn => self.selection.toggle_add_on(ADD_ONS[self.add_on_cursor].id),
            Action::AddSelectedAccessory => self.add_selected_accessory(),
            Action::ToggleHelp => self.help = Some(HelpOverlay::new()),
            Action::Cancel | Action::Quit => self.should_quit = true,
        }

        tracing::debug!(
            action = action.id(),
            configuration = %self.selection.active_configuration(),
            scheme = %self.selection.color_scheme(),
            space_efficiency = self.selection.space_efficiency(),
            add_on = ?self.selection.selected_add_on(),
            "action applied"
        );
    }

    /// Reports the selected accessory, or asks the user to pick one.
    fn add_selected_accessory(&mut self) {
        match self.selection.selected_add_on_descriptor() {
            Some(add_on) => {
                tracing::info!(add_on = %add_on.id, price = add_on.price, "accessory added");
                self.set_status(format!(
                    "Added {} ({}) to your {}",
                    add_on.name,
                    add_on.price,
                    self.selection.descriptor().title
                ));
            }
            None => self.set_status("Select an accessory first: ↑/↓ then Enter"),
        }
    }

    /// Sets the space efficiency from a slider position.
    fn slide_to(&mut self, track: Rect, column: u16) {
        let value = panels::value_at(track, column);
        if value != self.selection.space_efficiency() {
            self.selection.set_space_efficiency(value);
            tracing::debug!(space_efficiency = value, "slider moved");
        }
    }
}

/// Screen regions, derived from the frame size alone so that rendering and
/// mouse hit-testing agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    /// Title bar
    pub title: Rect,
    /// Configuration tabs
    pub tabs: Rect,
    /// Furniture illustration
    pub canvas: Rect,
    /// Space-efficiency slider
    pub slider: Rect,
    /// Color-scheme buttons
    pub schemes: Rect,
    /// Title, description, benefits and modules
    pub details: Rect,
    /// Add-on cards
    pub add_ons: Rect,
    /// Status bar
    pub status: Rect,
}

/// Splits the frame into its regions.
#[must_use]
pub fn layout_areas(area: Rect) -> ScreenAreas {
    let rows = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Tabs
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status bar
        ])
        .split(area);

    let columns = RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    let left = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(3), // Slider
            Constraint::Length(3), // Schemes
        ])
        .split(columns[0]);

    let right = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(panels::add_ons_height()),
        ])
        .split(columns[1]);

    ScreenAreas {
        title: rows[0],
        tabs: rows[1],
        canvas: left[0],
        slider: left[1],
        schemes: left[2],
        details: right[0],
        add_ons: right[1],
        status: rows[3],
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    loop {
        terminal
            .draw(|f| render(f, state))
            .context("Failed to draw frame")?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100)).context("Failed to poll events")? {
            match event::read().context("Failed to read event")? {
                Event::Key(key) => handle_key_event(state, key),
                Event::Mouse(mouse) => {
                    let size = terminal.size().context("Failed to query terminal size")?;
                    handle_mouse_event(state, mouse, Rect::new(0, 0, size.width, size.height));
                }
                // Resize and focus changes only need the redraw
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }

    tracing::info!("leaving event loop");
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let theme = &state.theme;
    let full_bg = Block::default().style(Style::default().bg(theme.background));
    f.render_widget(full_bg, f.area());

    let areas = layout_areas(f.area());
    let selection = &state.selection;

    render_title_bar(f, areas.title, theme);
    panels::render_tabs(f, areas.tabs, selection, theme);

    let illustration = selection.illustration();
    canvas::render_illustration(
        f,
        areas.canvas,
        &illustration,
        state.config.ui.canvas_marker.to_marker(),
        selection.descriptor().title,
        theme,
    );
    panels::render_slider(f, areas.slider, selection.space_efficiency(), theme);
    panels::render_color_schemes(f, areas.schemes, selection, theme);
    panels::render_details(f, areas.details, selection.descriptor(), theme);
    panels::render_add_ons(
        f,
        areas.add_ons,
        selection.selected_add_on(),
        state.add_on_cursor,
        theme,
    );
    StatusBar::render(f, areas.status, state, theme);

    if let Some(help) = &state.help {
        help.render(f, centered_rect(70, 80, f.area()), theme, &state.shortcuts);
    }
}

/// Render title bar
fn render_title_bar(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME} "),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "- modular furniture configurator",
            Style::default().fg(theme.text_secondary),
        ),
    ]);

    let title_widget = Paragraph::new(title).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.inactive))
            .style(Style::default().bg(theme.background)),
    );
    f.render_widget(title_widget, area);
}

/// Helper to create a centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = RatatuiLayout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    RatatuiLayout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: KeyEvent) {
    // Some platforms report releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Route to the overlay while it is open
    if let Some(help) = state.help.as_mut() {
        match help.handle_input(key, &state.shortcuts) {
            Some(ComponentEvent::Closed) => state.help = None,
            Some(ComponentEvent::QuitRequested) => state.should_quit = true,
            None => {}
        }
        return;
    }

    if let Some(action) = state.shortcuts.lookup(MAIN_CONTEXT, key) {
        state.dispatch(action);
    }
}

/// Handle mouse input on the slider track and the add-on cards.
///
/// `frame` is the full terminal area the last frame was drawn into.
pub fn handle_mouse_event(state: &mut AppState, mouse: MouseEvent, frame: Rect) {
    if state.help.is_some() {
        return;
    }

    let areas = layout_areas(frame);
    let track = panels::slider_track(areas.slider);
    let on_slider_row = mouse.row == track.y && track.height > 0;
    let on_track = on_slider_row && mouse.column >= track.x && mouse.column < track.right();

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if on_track => {
            state.dragging_slider = true;
            state.status_message.clear();
            state.slide_to(track, mouse.column);
        }
        MouseEventKind::Down(MouseButton::Left) => {
            let in_cards = mouse.column >= areas.add_ons.x && mouse.column < areas.add_ons.right();
            if let Some(index) = in_cards
                .then(|| panels::add_on_at(areas.add_ons, mouse.row))
                .flatten()
            {
                state.add_on_cursor = index;
                state.dispatch(Action::ToggleAddOn);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) if state.dragging_slider => {
            state.slide_to(track, mouse.column);
        }
        MouseEventKind::Up(MouseButton::Left) => state.dragging_slider = false,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AddOnId, ColorSchemeKey, ConfigurationKey};
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::backend::TestBackend;

    fn state() -> AppState {
        AppState::new(Config::default(), Theme::dark())
    }

    fn press(state: &mut AppState, code: KeyCode) {
        handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn screen_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_keys_drive_selection() {
        let mut state = state();
        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.selection.active_configuration(), ConfigurationKey::Desk);
        press(&mut state, KeyCode::Char('v'));
        assert_eq!(state.selection.color_scheme(), ColorSchemeKey::Vibrant);
        press(&mut state, KeyCode::Char('-'));
        assert_eq!(state.selection.space_efficiency(), 60);
        press(&mut state, KeyCode::End);
        assert_eq!(state.selection.space_efficiency(), 100);
        press(&mut state, KeyCode::Tab);
        assert_eq!(state.selection.active_configuration(), ConfigurationKey::Storage);
    }

    #[test]
    fn test_add_on_cursor_and_toggle() {
        let mut state = state();
        press(&mut state, KeyCode::Up);
        assert_eq!(state.add_on_cursor, 0);
        for _ in 0..10 {
            press(&mut state, KeyCode::Down);
        }
        assert_eq!(state.add_on_cursor, ADD_ONS.len() - 1);

        press(&mut state, KeyCode::Enter);
        assert_eq!(state.selection.selected_add_on(), Some(AddOnId::Cushions));
        press(&mut state, KeyCode::Char(' '));
        assert_eq!(state.selection.selected_add_on(), None);
    }

    #[test]
    fn test_accessory_action_reports_selection() {
        let mut state = state();
        press(&mut state, KeyCode::Char('a'));
        assert!(state.status_message.starts_with("Select an accessory"));

        press(&mut state, KeyCode::Down);
        press(&mut state, KeyCode::Enter);
        press(&mut state, KeyCode::Char('a'));
        assert_eq!(
            state.status_message,
            "Added Power Hub ($39) to your Sleep Configuration"
        );

        // Any later action clears the message
        press(&mut state, KeyCode::Char('c'));
        assert!(state.status_message.is_empty());
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut state = state();
        press(&mut state, KeyCode::Char('?'));
        assert!(state.help.is_some());

        // Main bindings are inactive under the overlay
        press(&mut state, KeyCode::Char('3'));
        assert_eq!(state.selection.active_configuration(), ConfigurationKey::Bed);

        press(&mut state, KeyCode::Esc);
        assert!(state.help.is_none());
        assert!(!state.should_quit);

        press(&mut state, KeyCode::Esc);
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_on_startup_from_config() {
        let mut config = Config::default();
        config.ui.show_help_on_startup = true;
        let state = AppState::new(config, Theme::light());
        assert!(state.help.is_some());
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut state = state();
        let mut key = KeyEvent::new(KeyCode::Char('4'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key_event(&mut state, key);
        assert_eq!(state.selection.active_configuration(), ConfigurationKey::Bed);
    }

    #[test]
    fn test_mouse_click_and_drag_on_slider() {
        let mut state = state();
        let frame = Rect::new(0, 0, 120, 40);
        let track = panels::slider_track(layout_areas(frame).slider);

        handle_mouse_event(
            &mut state,
            click(MouseEventKind::Down(MouseButton::Left), track.x, track.y),
            frame,
        );
        assert_eq!(state.selection.space_efficiency(), 0);
        assert!(state.dragging_slider);

        // Dragging past the end pins to the ceiling
        handle_mouse_event(
            &mut state,
            click(MouseEventKind::Drag(MouseButton::Left), 119, 0),
            frame,
        );
        assert_eq!(state.selection.space_efficiency(), 100);

        handle_mouse_event(
            &mut state,
            click(MouseEventKind::Up(MouseButton::Left), 119, 0),
            frame,
        );
        assert!(!state.dragging_slider);

        // Drags that did not start on the track are ignored
        handle_mouse_event(
            &mut state,
            click(MouseEventKind::Drag(MouseButton::Left), track.x, track.y),
            frame,
        );
        assert_eq!(state.selection.space_efficiency(), 100);
    }

    #[test]
    fn test_mouse_click_toggles_add_on_card() {
        let mut state = state();
        let frame = Rect::new(0, 0, 120, 40);
        let cards = layout_areas(frame).add_ons;

        // Second card starts two rows below the first
        let row = cards.y + 1 + 2;
        handle_mouse_event(
            &mut state,
            click(MouseEventKind::Down(MouseButton::Left), cards.x + 3, row),
            frame,
        );
        assert_eq!(state.add_on_cursor, 1);
        assert_eq!(state.selection.selected_add_on(), Some(AddOnId::Power));
    }

    #[test]
    fn test_layout_areas_do_not_overlap_vertically() {
        let areas = layout_areas(Rect::new(0, 0, 120, 40));
        assert_eq!(areas.title.y, 0);
        assert_eq!(areas.tabs.y, areas.title.bottom());
        assert_eq!(areas.canvas.y, areas.tabs.bottom());
        assert_eq!(areas.slider.y, areas.canvas.bottom());
        assert_eq!(areas.schemes.y, areas.slider.bottom());
        assert_eq!(areas.status.bottom(), 40);
        assert_eq!(areas.add_ons.height, panels::add_ons_height());
    }

    #[test]
    fn test_render_shows_active_title() {
        let mut state = state();
        let text = screen_text(&state, 120, 40);
        assert!(text.contains("Sleep Configuration"));

        state.dispatch(Action::SelectConfiguration(ConfigurationKey::Lounge));
        let text = screen_text(&state, 120, 40);
        assert!(text.contains("Lounge Configuration"));
        assert!(text.contains("Side Table Attachment"));
    }

    #[test]
    fn test_render_paints_palette_colors() {
        let state = state();
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let secondary = state.selection.palette().secondary.to_ratatui_color();
        let canvas = layout_areas(Rect::new(0, 0, 120, 40)).canvas;
        let buffer = terminal.backend().buffer();
        let painted = (canvas.y..canvas.bottom())
            .flat_map(|y| (canvas.x..canvas.right()).map(move |x| (x, y)))
            .filter_map(|(x, y)| buffer.cell((x, y)))
            .any(|cell| cell.fg == secondary || cell.bg == secondary);
        assert!(painted, "bed frame color not found on the canvas");
    }

    #[test]
    fn test_render_help_overlay() {
        let mut state = state();
        state.dispatch(Action::ToggleHelp);
        let text = screen_text(&state, 120, 40);
        assert!(text.contains("Help - Keyboard Shortcuts"));
    }

    #[test]
    fn test_render_survives_tiny_terminal() {
        let state = state();
        let text = screen_text(&state, 20, 8);
        assert!(!text.is_empty());
    }
}
