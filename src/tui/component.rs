//! Component trait pattern for TUI overlays.
//!
//! An overlay owns its own view state, handles the keys routed to it while
//! it is open and reports back to `AppState` through [`ComponentEvent`]s.

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::tui::Theme;

/// A component that needs read access to shared application data.
pub trait ContextualComponent {
    /// The type of context this component needs
    type Context;

    /// Event type this component can emit
    type Event;

    /// Handle keyboard input with access to shared context.
    ///
    /// Returns `Some(Event)` if the parent has to act; `None` if the key was
    /// handled internally or ignored.
    fn handle_input(&mut self, key: KeyEvent, context: &Self::Context) -> Option<Self::Event>;

    /// Render the component within `area`.
    fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, context: &Self::Context);
}

/// Events emitted by overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentEvent {
    /// Overlay dismissed
    Closed,
    /// User asked to leave the application from inside the overlay
    QuitRequested,
}
