//! Centralized shortcut and action system.
//!
//! This module maps key events to actions per input context and carries the
//! help text for each action, so the help overlay and the event loop read
//! from the same table.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::models::{ColorSchemeKey, ConfigurationKey};

/// Input context of the main screen.
pub const MAIN_CONTEXT: &str = "main";
/// Input context while the help overlay is open.
pub const HELP_CONTEXT: &str = "help";

/// All possible actions in the application.
///
/// This enum represents every action a user can take. It serves as the
/// bridge between keyboard shortcuts and application behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === CONFIGURATION TABS ===
    /// Show the given configuration
    SelectConfiguration(ConfigurationKey),
    /// Show the next configuration tab
    NextConfiguration,
    /// Show the previous configuration tab
    PreviousConfiguration,

    // === COLOR SCHEME ===
    /// Apply the given color scheme
    SelectColorScheme(ColorSchemeKey),
    /// Apply the next color scheme
    CycleColorScheme,

    // === SPACE EFFICIENCY ===
    /// One step towards "compact"
    DecreaseEfficiency,
    /// One step towards "expanded"
    IncreaseEfficiency,
    /// Jump to the slider floor
    EfficiencyMin,
    /// Jump to the slider ceiling
    EfficiencyMax,

    // === ADD-ONS ===
    /// Move the add-on cursor up
    AddOnCursorUp,
    /// Move the add-on cursor down
    AddOnCursorDown,
    /// Toggle the add-on under the cursor
    ToggleAddOn,
    /// Confirm the selected accessory
    AddSelectedAccessory,

    // === HELP ===
    /// Open or close the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Close the topmost overlay, or quit
    Cancel,
    /// Leave the application
    Quit,
}

impl Action {
    /// Stable identifier, used in log events.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::SelectConfiguration(_) => "select_configuration",
            Self::NextConfiguration => "next_configuration",
            Self::PreviousConfiguration => "previous_configuration",
            Self::SelectColorScheme(_) => "select_color_scheme",
            Self::CycleColorScheme => "cycle_color_scheme",
            Self::DecreaseEfficiency => "decrease_efficiency",
            Self::IncreaseEfficiency => "increase_efficiency",
            Self::EfficiencyMin => "efficiency_min",
            Self::EfficiencyMax => "efficiency_max",
            Self::AddOnCursorUp => "add_on_cursor_up",
            Self::AddOnCursorDown => "add_on_cursor_down",
            Self::ToggleAddOn => "toggle_add_on",
            Self::AddSelectedAccessory => "add_selected_accessory",
            Self::ToggleHelp => "toggle_help",
            Self::Cancel => "cancel",
            Self::Quit => "quit",
        }
    }

    /// One-line description shown in the help overlay.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::SelectConfiguration(key) => match key {
                ConfigurationKey::Bed => "Show the bed configuration",
                ConfigurationKey::Desk => "Show the desk configuration",
                ConfigurationKey::Storage => "Show the storage configuration",
                ConfigurationKey::Lounge => "Show the lounge configuration",
            },
            Self::NextConfiguration => "Next configuration",
            Self::PreviousConfiguration => "Previous configuration",
            Self::SelectColorScheme(key) => match key {
                ColorSchemeKey::Natural => "Natural wood color scheme",
                ColorSchemeKey::Modern => "Modern grey color scheme",
                ColorSchemeKey::Vibrant => "Vibrant color scheme",
            },
            Self::CycleColorScheme => "Cycle color schemes",
            Self::DecreaseEfficiency => "More compact",
            Self::IncreaseEfficiency => "More expanded",
            Self::EfficiencyMin => "Most compact",
            Self::EfficiencyMax => "Fully expanded",
            Self::AddOnCursorUp => "Previous add-on",
            Self::AddOnCursorDown => "Next add-on",
            Self::ToggleAddOn => "Select or clear the highlighted add-on",
            Self::AddSelectedAccessory => "Add the selected accessory",
            Self::ToggleHelp => "Toggle this help",
            Self::Cancel => "Close help / quit",
            Self::Quit => "Quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifier keys held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    ///
    /// Shift is dropped from character keys since the character already
    /// carries it; terminals disagree on whether `+` or `?` report it.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers.difference(KeyModifiers::SHIFT),
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }

    /// Human-readable form ("Tab", "Ctrl+q", "?").
    #[must_use]
    pub fn display(&self) -> String {
        let key = match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            other => format!("{other:?}"),
        };
        if self.modifiers.contains(KeyModifiers::CONTROL) {
            format!("Ctrl+{key}")
        } else {
            key
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
///
/// This is the central source of truth for all keyboard shortcuts in the application.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(&'static str, KeyBinding), Action>,
    /// Registration order, for help listings
    order: Vec<(&'static str, KeyBinding, Action)>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
            order: Vec::new(),
        };

        registry.register_main_shortcuts();
        registry.register_help_shortcuts();
        registry
    }

    /// Register all shortcuts for the main context.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = MAIN_CONTEXT;

        // === CONFIGURATION TABS ===
        for (digit, key) in ('1'..='4').zip(ConfigurationKey::ALL) {
            self.register(ctx, K::Char(digit), M::NONE, Action::SelectConfiguration(key));
        }
        self.register(ctx, K::Tab, M::NONE, Action::NextConfiguration);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousConfiguration);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousConfiguration);

        // === COLOR SCHEME ===
        self.register(
            ctx,
            K::Char('n'),
            M::NONE,
            Action::SelectColorScheme(ColorSchemeKey::Natural),
        );
        self.register(
            ctx,
            K::Char('m'),
            M::NONE,
            Action::SelectColorScheme(ColorSchemeKey::Modern),
        );
        self.register(
            ctx,
            K::Char('v'),
            M::NONE,
            Action::SelectColorScheme(ColorSchemeKey::Vibrant),
        );
        self.register(ctx, K::Char('c'), M::NONE, Action::CycleColorScheme);

        // === SPACE EFFICIENCY ===
        self.register(ctx, K::Char('-'), M::NONE, Action::DecreaseEfficiency);
        self.register(ctx, K::Char('+'), M::NONE, Action::IncreaseEfficiency);
        self.register(ctx, K::Char('='), M::NONE, Action::IncreaseEfficiency);
        self.register(ctx, K::Home, M::NONE, Action::EfficiencyMin);
        self.register(ctx, K::End, M::NONE, Action::EfficiencyMax);

        // === ADD-ONS ===
        self.register(ctx, K::Up, M::NONE, Action::AddOnCursorUp);
        self.register(ctx, K::Down, M::NONE, Action::AddOnCursorDown);
        self.register(ctx, K::Enter, M::NONE, Action::ToggleAddOn);
        self.register(ctx, K::Char(' '), M::NONE, Action::ToggleAddOn);
        self.register(ctx, K::Char('a'), M::NONE, Action::AddSelectedAccessory);

        // === HELP ===
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register the shortcuts available while help is shown.
    fn register_help_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = HELP_CONTEXT;
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::NONE, Action::Cancel);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
    }

    /// Register a shortcut binding.
    fn register(
        &mut self,
        context: &'static str,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: Action,
    ) {
        let binding = KeyBinding::new(code, modifiers);
        if self.bindings.insert((context, binding), action).is_none() {
            self.order.push((context, binding, action));
        }
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &'static str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context, binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &'static str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }

    /// Help rows for a context: the keys bound to each action, in
    /// registration order, one row per action.
    #[must_use]
    pub fn help_entries(&self, context: &str) -> Vec<(String, &'static str)> {
        let mut rows: Vec<(Action, Vec<String>)> = Vec::new();
        for (_, binding, action) in self.order.iter().filter(|(ctx, _, _)| *ctx == context) {
            // Shift+Tab is registered twice for terminal differences
            let label = binding.display();
            match rows.iter_mut().find(|(a, _)| a == action) {
                Some((_, keys)) if !keys.contains(&label) => keys.push(label),
                Some(_) => {}
                None => rows.push((*action, vec![label])),
            }
        }
        rows.into_iter()
            .map(|(action, keys)| (keys.join(" / "), action.description()))
            .collect()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}
