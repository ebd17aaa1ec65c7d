//! Side panels around the illustration: configuration tabs, descriptive
//! text, color-scheme buttons, the space-efficiency slider and add-on cards.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

use super::Theme;
use crate::models::{AddOnId, ColorSchemeKey, ConfigurationDescriptor, ConfigurationKey, ADD_ONS};
use crate::selection::{SelectionState, SPACE_EFFICIENCY_MAX, SPACE_EFFICIENCY_STEP};

/// Width of the "Compact " label left of the slider track.
const SLIDER_LEFT_LABEL: u16 = 8;
/// Width of the " Expanded 100%" label right of the slider track.
const SLIDER_RIGHT_LABEL: u16 = 14;
/// Terminal rows per add-on card.
const CARD_HEIGHT: u16 = 2;

fn bordered<'a>(title: &'a str, theme: &Theme) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(Style::default().fg(theme.primary))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.inactive))
}

/// Glyph for a configuration's icon name.
#[must_use]
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "bed" => "▭",
        "book-open" => "◫",
        "layers" => "▤",
        "sofa" => "◡",
        _ => "•",
    }
}

// === Tabs ===

/// Renders the four configuration tabs.
pub fn render_tabs(f: &mut Frame, area: Rect, selection: &SelectionState, theme: &Theme) {
    let titles: Vec<Line> = ConfigurationKey::ALL
        .iter()
        .enumerate()
        .map(|(i, key)| {
            Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(theme.text_muted)),
                Span::raw(format!("{} {}", icon_glyph(key.descriptor().icon), key.label())),
            ])
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(bordered(" Configurations ", theme))
        .select(selection.active_configuration().index())
        .style(Style::default().fg(theme.text_secondary))
        .highlight_style(
            Style::default()
                .fg(theme.active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        );
    f.render_widget(tabs, area);
}

// === Details ===

/// Renders title, description, benefits and included modules.
pub fn render_details(
    f: &mut Frame,
    area: Rect,
    descriptor: &ConfigurationDescriptor,
    theme: &Theme,
) {
    let mut lines = vec![
        Line::from(Span::styled(
            format!("{} {}", icon_glyph(descriptor.icon), descriptor.title),
            Style::default()
                .fg(theme.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            descriptor.description,
            Style::default().fg(theme.text_secondary),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Benefits",
            Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
        )),
    ];
    lines.extend(descriptor.benefits.iter().map(|benefit| {
        Line::from(vec![
            Span::styled("  ✓ ", Style::default().fg(theme.success)),
            Span::styled(*benefit, Style::default().fg(theme.text)),
        ])
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Included Modules",
        Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
    )));
    lines.extend(descriptor.modules.iter().map(|module| {
        Line::from(vec![
            Span::styled("  • ", Style::default().fg(theme.text_muted)),
            Span::styled(*module, Style::default().fg(theme.text)),
        ])
    }));

    let details = Paragraph::new(lines)
        .block(bordered(" Details ", theme))
        .wrap(Wrap { trim: true });
    f.render_widget(details, area);
}

// === Color schemes ===

/// Key that selects each scheme, shown on its button.
const fn scheme_key(scheme: ColorSchemeKey) -> char {
    match scheme {
        ColorSchemeKey::Natural => 'n',
        ColorSchemeKey::Modern => 'm',
        ColorSchemeKey::Vibrant => 'v',
    }
}

/// Renders the three scheme buttons with a swatch of each palette.
pub fn render_color_schemes(f: &mut Frame, area: Rect, selection: &SelectionState, theme: &Theme) {
    let mut spans = Vec::new();
    for scheme in ColorSchemeKey::ALL {
        let active = scheme == selection.color_scheme();
        let label_style = if active {
            Style::default()
                .fg(theme.active)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text_secondary)
        };
        spans.push(Span::styled(
            format!(" [{}] {} ", scheme_key(scheme), scheme.label()),
            label_style,
        ));
        for color in scheme.palette().colors() {
            spans.push(Span::styled("█", Style::default().fg(color.to_ratatui_color())));
        }
        spans.push(Span::raw("  "));
    }

    let buttons = Paragraph::new(Line::from(spans)).block(bordered(" Color Scheme ", theme));
    f.render_widget(buttons, area);
}

// === Slider ===

/// Track of the slider drawn in `area` (the bordered slider block).
#[must_use]
pub fn slider_track(area: Rect) -> Rect {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    Rect {
        x: inner.x + SLIDER_LEFT_LABEL.min(inner.width),
        y: inner.y,
        width: inner
            .width
            .saturating_sub(SLIDER_LEFT_LABEL + SLIDER_RIGHT_LABEL),
        height: inner.height.min(1),
    }
}

/// Value reported for a click or drag at `column`, snapped to the step.
///
/// Columns left of the track give the floor, columns right of it the
/// ceiling, so every result is a valid slider value.
#[must_use]
pub fn value_at(track: Rect, column: u16) -> u8 {
    let steps = SPACE_EFFICIENCY_MAX / SPACE_EFFICIENCY_STEP;
    if track.width <= 1 {
        return if column > track.x { SPACE_EFFICIENCY_MAX } else { 0 };
    }
    let last = track.width - 1;
    let offset = column.saturating_sub(track.x).min(last);
    let fraction = f64::from(offset) / f64::from(last);
    let step = (fraction * f64::from(steps)).round() as u8;
    step.min(steps) * SPACE_EFFICIENCY_STEP
}

/// Column of the slider knob for `value`.
#[must_use]
pub fn knob_column(track: Rect, value: u8) -> u16 {
    let last = f64::from(track.width.saturating_sub(1));
    let fraction = f64::from(value) / f64::from(SPACE_EFFICIENCY_MAX);
    track.x + (fraction * last).round() as u16
}

/// Renders the "Compact ... Expanded" slider.
pub fn render_slider(f: &mut Frame, area: Rect, value: u8, theme: &Theme) {
    let track = slider_track(area);
    let knob = knob_column(track, value);

    let mut spans = vec![Span::styled(
        format!("{:<width$}", "Compact", width = usize::from(SLIDER_LEFT_LABEL)),
        Style::default().fg(theme.text_secondary),
    )];
    for column in track.x..track.x + track.width {
        let span = if column == knob {
            Span::styled("●", Style::default().fg(theme.active))
        } else if column < knob {
            Span::styled("━", Style::default().fg(theme.accent))
        } else {
            Span::styled("─", Style::default().fg(theme.text_muted))
        };
        spans.push(span);
    }
    spans.push(Span::styled(
        " Expanded",
        Style::default().fg(theme.text_secondary),
    ));
    spans.push(Span::styled(
        format!(" {value:>3}%"),
        Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
    ));

    let slider = Paragraph::new(Line::from(spans)).block(bordered(" Space Efficiency ", theme));
    f.render_widget(slider, area);
}

// === Add-ons ===

/// Height the add-on panel needs, borders included.
#[must_use]
pub fn add_ons_height() -> u16 {
    u16::try_from(ADD_ONS.len()).unwrap_or(u16::MAX) * CARD_HEIGHT + 2
}

/// Index of the add-on card at terminal `row`, if any.
#[must_use]
pub fn add_on_at(area: Rect, row: u16) -> Option<usize> {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    let index = usize::from((row - inner.y) / CARD_HEIGHT);
    (index < ADD_ONS.len()).then_some(index)
}

/// Renders the add-on cards; `cursor` is the highlighted card.
pub fn render_add_ons(
    f: &mut Frame,
    area: Rect,
    selected: Option<AddOnId>,
    cursor: usize,
    theme: &Theme,
) {
    let mut lines = Vec::with_capacity(ADD_ONS.len() * 2);
    for (index, add_on) in ADD_ONS.iter().enumerate() {
        let is_selected = selected == Some(add_on.id);
        let focused = index == cursor;

        let marker = if focused { "▶ " } else { "  " };
        let check = if is_selected { "[x] " } else { "[ ] " };
        let name_style = if focused {
            Style::default()
                .fg(theme.active)
                .bg(theme.highlight_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        let check_style = if is_selected {
            Style::default().fg(theme.success)
        } else {
            Style::default().fg(theme.text_muted)
        };

        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.active)),
            Span::styled(check, check_style),
            Span::styled(add_on.name, name_style),
            Span::styled(format!("  {}", add_on.price), Style::default().fg(theme.accent)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("      {}", add_on.description),
            Style::default().fg(theme.text_muted),
        )));
    }

    let cards = Paragraph::new(lines).block(bordered(" Add-ons ", theme));
    f.render_widget(cards, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slider_area() -> Rect {
        // 2 borders + 8 + 21-column track + 14
        Rect::new(0, 10, 45, 3)
    }

    #[test]
    fn test_track_geometry() {
        let track = slider_track(slider_area());
        assert_eq!(track, Rect::new(9, 11, 21, 1));
    }

    #[test]
    fn test_value_at_ends_and_middle() {
        let track = slider_track(slider_area());
        assert_eq!(value_at(track, track.x), 0);
        assert_eq!(value_at(track, track.x + track.width - 1), 100);
        assert_eq!(value_at(track, track.x + 10), 50);
    }

    #[test]
    fn test_value_at_clamps_outside_track() {
        let track = slider_track(slider_area());
        assert_eq!(value_at(track, 0), 0);
        assert_eq!(value_at(track, 200), 100);
    }

    #[test]
    fn test_value_at_snaps_to_step() {
        let track = Rect::new(3, 0, 37, 1);
        for column in 0..50 {
            let value = value_at(track, column);
            assert!(value <= 100);
            assert_eq!(value % 10, 0, "column {column} gave {value}");
        }
    }

    #[test]
    fn test_knob_round_trips() {
        let track = slider_track(slider_area());
        for value in (0..=100).step_by(10) {
            assert_eq!(value_at(track, knob_column(track, value)), value);
        }
    }

    #[test]
    fn test_degenerate_track() {
        let track = Rect::new(5, 0, 1, 1);
        assert_eq!(value_at(track, 5), 0);
        assert_eq!(value_at(track, 6), 100);
    }

    #[test]
    fn test_add_on_hit_testing() {
        let area = Rect::new(0, 20, 40, add_ons_height());
        assert_eq!(add_on_at(area, 20), None); // top border
        assert_eq!(add_on_at(area, 21), Some(0));
        assert_eq!(add_on_at(area, 22), Some(0));
        assert_eq!(add_on_at(area, 23), Some(1));
        assert_eq!(add_on_at(area, 28), Some(3));
        assert_eq!(add_on_at(area, 29), None); // bottom border
    }

    #[test]
    fn test_icon_glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<_> = ConfigurationKey::ALL
            .iter()
            .map(|key| icon_glyph(key.descriptor().icon))
            .collect();
        assert_eq!(glyphs.len(), 4);
    }
}
