//! Session state for the configurator and the transitions that mutate it.
//!
//! [`SelectionState`] is the single owner of the user's choices. Every
//! mutation goes through one of its named transition methods; readers get
//! plain values back and pass them to the renderer explicitly.

use crate::illustration::{self, Illustration};
use crate::models::{
    AddOn, AddOnId, ColorSchemeKey, ConfigurationDescriptor, ConfigurationKey, PaletteDescriptor,
};

/// Lowest space-efficiency percentage.
pub const SPACE_EFFICIENCY_MIN: u8 = 0;
/// Highest space-efficiency percentage.
pub const SPACE_EFFICIENCY_MAX: u8 = 100;
/// Granularity of every space-efficiency change.
pub const SPACE_EFFICIENCY_STEP: u8 = 10;
/// Space efficiency at the start of a session.
pub const SPACE_EFFICIENCY_DEFAULT: u8 = 70;

/// The user's current choices.
///
/// Invariants:
/// - `space_efficiency` is a multiple of [`SPACE_EFFICIENCY_STEP`] within
///   [`SPACE_EFFICIENCY_MIN`]..=[`SPACE_EFFICIENCY_MAX`]
/// - at most one add-on is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    active_configuration: ConfigurationKey,
    color_scheme: ColorSchemeKey,
    space_efficiency: u8,
    selected_add_on: Option<AddOnId>,
}

impl SelectionState {
    /// Creates the initial session state: bed, natural, 70%, no add-on.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active_configuration: ConfigurationKey::Bed,
            color_scheme: ColorSchemeKey::Natural,
            space_efficiency: SPACE_EFFICIENCY_DEFAULT,
            selected_add_on: None,
        }
    }

    // === Accessors ===

    /// Currently shown configuration.
    pub const fn active_configuration(&self) -> ConfigurationKey {
        self.active_configuration
    }

    /// Currently applied color scheme.
    pub const fn color_scheme(&self) -> ColorSchemeKey {
        self.color_scheme
    }

    /// Current space-efficiency percentage.
    pub const fn space_efficiency(&self) -> u8 {
        self.space_efficiency
    }

    /// Currently selected add-on, if any.
    pub const fn selected_add_on(&self) -> Option<AddOnId> {
        self.selected_add_on
    }

    /// Descriptor of the active configuration.
    pub const fn descriptor(&self) -> &'static ConfigurationDescriptor {
        self.active_configuration.descriptor()
    }

    /// Palette of the active color scheme.
    pub const fn palette(&self) -> PaletteDescriptor {
        self.color_scheme.palette()
    }

    /// Full entry of the selected add-on, if any.
    pub fn selected_add_on_descriptor(&self) -> Option<&'static AddOn> {
        self.selected_add_on.map(|id| id.add_on())
    }

    /// Scale factor the illustration is drawn at.
    pub fn scale(&self) -> f64 {
        illustration::scale_factor(self.space_efficiency)
    }

    /// Renders the illustration for the current state.
    pub fn illustration(&self) -> Illustration {
        illustration::render(
            self.active_configuration,
            &self.palette(),
            self.space_efficiency,
        )
    }

    // === Transitions ===

    /// Shows the given configuration.
    pub fn select_configuration(&mut self, key: ConfigurationKey) {
        self.active_configuration = key;
    }

    /// Applies the given color scheme.
    pub fn select_color_scheme(&mut self, key: ColorSchemeKey) {
        self.color_scheme = key;
    }

    /// Moves one step towards "expanded"; stays at the ceiling.
    pub fn increase_space_efficiency(&mut self) {
        self.space_efficiency = self
            .space_efficiency
            .saturating_add(SPACE_EFFICIENCY_STEP)
            .min(SPACE_EFFICIENCY_MAX);
    }

    /// Moves one step towards "compact"; stays at the floor.
    pub fn decrease_space_efficiency(&mut self) {
        self.space_efficiency = self
            .space_efficiency
            .saturating_sub(SPACE_EFFICIENCY_STEP)
            .max(SPACE_EFFICIENCY_MIN);
    }

    /// Sets the space efficiency to a value reported by the slider.
    ///
    /// The slider only reports multiples of the step inside the range, so the
    /// value is taken as-is.
    pub fn set_space_efficiency(&mut self, value: u8) {
        debug_assert!(
            value <= SPACE_EFFICIENCY_MAX && value % SPACE_EFFICIENCY_STEP == 0,
            "slider reported out-of-contract value {value}"
        );
        self.space_efficiency = value;
    }

    /// Selects the add-on, or clears the selection if it is already selected.
    pub fn toggle_add_on(&mut self, id: AddOnId) {
        self.selected_add_on = if self.selected_add_on == Some(id) {
            None
        } else {
            Some(id)
        };
    }

    /// Shows the configuration after the active one, wrapping around.
    pub fn next_configuration(&mut self) {
        self.select_configuration(self.active_configuration.next());
    }

    /// Shows the configuration before the active one, wrapping around.
    pub fn previous_configuration(&mut self) {
        self.select_configuration(self.active_configuration.previous());
    }

    /// Applies the scheme after the active one, wrapping around.
    pub fn next_color_scheme(&mut self) {
        self.select_color_scheme(self.color_scheme.next());
    }
}

impl Default for SelectionState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ADD_ONS;

    #[test]
    fn test_initial_state() {
        let state = SelectionState::new();
        assert_eq!(state.active_configuration(), ConfigurationKey::Bed);
        assert_eq!(state.color_scheme(), ColorSchemeKey::Natural);
        assert_eq!(state.space_efficiency(), 70);
        assert_eq!(state.selected_add_on(), None);
        assert_eq!(state, SelectionState::default());
    }

    #[test]
    fn test_select_configuration_is_read_back() {
        let mut state = SelectionState::new();
        for key in ConfigurationKey::ALL {
            state.select_configuration(key);
            assert_eq!(state.active_configuration(), key);
            assert_eq!(state.descriptor(), key.descriptor());
        }
    }

    #[test]
    fn test_select_desk_scenario() {
        let mut state = SelectionState::new();
        state.select_configuration(ConfigurationKey::Desk);

        assert_eq!(state.active_configuration(), ConfigurationKey::Desk);
        assert_eq!(state.descriptor().title, "Study Configuration");
        assert_eq!(
            state.descriptor().modules,
            &[
                "Base Frame",
                "Desk Surface",
                "Shelf Attachments",
                "Organization Grid"
            ]
        );
        // Other fields untouched
        assert_eq!(state.color_scheme(), ColorSchemeKey::Natural);
        assert_eq!(state.space_efficiency(), 70);
    }

    #[test]
    fn test_select_color_scheme_vibrant() {
        let mut state = SelectionState::new();
        state.select_color_scheme(ColorSchemeKey::Vibrant);

        assert_eq!(state.color_scheme(), ColorSchemeKey::Vibrant);
        assert_eq!(state.palette().primary.to_hex(), "#4682B4");
        assert_eq!(state.palette().accent.to_hex(), "#FF6347");
    }

    #[test]
    fn test_increase_is_idempotent_at_ceiling() {
        let mut state = SelectionState::new();
        state.set_space_efficiency(100);
        state.increase_space_efficiency();
        assert_eq!(state.space_efficiency(), 100);
        state.increase_space_efficiency();
        assert_eq!(state.space_efficiency(), 100);
    }

    #[test]
    fn test_decrease_is_idempotent_at_floor() {
        let mut state = SelectionState::new();
        state.set_space_efficiency(0);
        state.decrease_space_efficiency();
        assert_eq!(state.space_efficiency(), 0);
    }

    #[test]
    fn test_decrease_from_default_scales_to_point_eight() {
        let mut state = SelectionState::new();
        state.decrease_space_efficiency();
        assert_eq!(state.space_efficiency(), 60);
        assert!((state.scale() - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_steps_walk_the_whole_range() {
        let mut state = SelectionState::new();
        for _ in 0..20 {
            state.decrease_space_efficiency();
            assert_eq!(state.space_efficiency() % SPACE_EFFICIENCY_STEP, 0);
        }
        assert_eq!(state.space_efficiency(), SPACE_EFFICIENCY_MIN);

        let mut visited = vec![state.space_efficiency()];
        for _ in 0..20 {
            state.increase_space_efficiency();
            if visited.last() != Some(&state.space_efficiency()) {
                visited.push(state.space_efficiency());
            }
        }
        assert_eq!(visited, [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 100]);
    }

    #[test]
    fn test_toggle_same_add_on_twice_clears() {
        let mut state = SelectionState::new();
        state.toggle_add_on(AddOnId::Lighting);
        assert_eq!(state.selected_add_on(), Some(AddOnId::Lighting));
        state.toggle_add_on(AddOnId::Lighting);
        assert_eq!(state.selected_add_on(), None);
    }

    #[test]
    fn test_toggle_different_add_on_replaces() {
        let mut state = SelectionState::new();
        state.toggle_add_on(AddOnId::Lighting);
        state.toggle_add_on(AddOnId::Cushions);
        assert_eq!(state.selected_add_on(), Some(AddOnId::Cushions));
        assert_eq!(
            state.selected_add_on_descriptor().map(|a| a.name),
            Some("Premium Cushions")
        );
    }

    #[test]
    fn test_toggle_pairs_for_every_add_on() {
        for a in &ADD_ONS {
            for b in &ADD_ONS {
                let mut state = SelectionState::new();
                state.toggle_add_on(a.id);
                state.toggle_add_on(b.id);
                let expected = if a.id == b.id { None } else { Some(b.id) };
                assert_eq!(state.selected_add_on(), expected, "{} then {}", a.id, b.id);
            }
        }
    }

    #[test]
    fn test_cycling_helpers() {
        let mut state = SelectionState::new();
        state.previous_configuration();
        assert_eq!(state.active_configuration(), ConfigurationKey::Lounge);
        state.next_configuration();
        assert_eq!(state.active_configuration(), ConfigurationKey::Bed);

        state.next_color_scheme();
        assert_eq!(state.color_scheme(), ColorSchemeKey::Modern);
    }

    #[test]
    fn test_illustration_follows_state() {
        let mut state = SelectionState::new();
        state.select_configuration(ConfigurationKey::Storage);
        state.set_space_efficiency(40);
        let picture = state.illustration();
        assert_eq!(picture.configuration(), ConfigurationKey::Storage);
        assert!((picture.scale() - 0.7).abs() < f64::EPSILON);
    }
}
