//! Avatar engine integration tests
//!
//! End-to-end coverage of the partition -> cache -> composition flow as the
//! application's render sites drive it: list rows, conversation headers,
//! and message-bubble sender colorizers sharing one injected cache.

use mosaic_avatar::{
    flat_color, render_group_avatar, sender_color, AvatarComposition, AvatarConfig, AvatarSize,
    ColorStrategy, ConversationColorCache, Participant, ThemeName, OVERFLOW_GLYPH,
};

fn participant(name: &str) -> Participant {
    Participant::new(format!("{}@example.com", name.to_lowercase())).with_display_name(name)
}

fn group(names: &[&str]) -> Vec<Participant> {
    names.iter().map(|n| participant(n)).collect()
}

/// Scenario: a list row and a conversation header both render the same
/// group, then a message bubble asks for one sender's color.
#[test]
fn test_multiple_render_sites_agree() {
    let config = AvatarConfig::default();
    let cache = ConversationColorCache::new(config.cache_capacity);
    let participants = group(&["Ann", "Bob", "Cid"]);

    // List row renders first
    let row = render_group_avatar(
        &participants,
        ThemeName::Light,
        AvatarSize::Sm,
        Some("conv-42"),
        &cache,
        &config,
    );

    // Conversation header renders later, at a different size
    let header = render_group_avatar(
        &participants,
        ThemeName::Light,
        AvatarSize::Xl,
        Some("conv-42"),
        &cache,
        &config,
    );

    // Same colors and glyphs in both renders
    for (a, b) in row.cells.iter().zip(&header.cells) {
        assert_eq!(a.background, b.background);
        assert_eq!(a.glyph, b.glyph);
    }

    // A message bubble colors Bob's sender name with the decided color
    let bob_color = sender_color(
        &cache,
        "conv-42",
        "bob@example.com",
        "Bob",
        ThemeName::Light,
    );
    let bob_cell = row
        .cells
        .iter()
        .find(|c| c.glyph == "B")
        .expect("Bob's cell");
    assert_eq!(bob_color, bob_cell.background);
}

/// Scenario: the participant list arrives in a different order at a second
/// render site; colors per identity must not change.
#[test]
fn test_shuffled_input_keeps_identity_colors() {
    let config = AvatarConfig::default();
    let cache = ConversationColorCache::new(config.cache_capacity);

    let forward = group(&["Ann", "Bob", "Cid", "Dee"]);
    let mut reversed = forward.clone();
    reversed.reverse();

    render_group_avatar(
        &forward,
        ThemeName::Dark,
        AvatarSize::Md,
        Some("conv-1"),
        &cache,
        &config,
    );
    let from_forward = cache.entry("conv-1").unwrap();

    render_group_avatar(
        &reversed,
        ThemeName::Dark,
        AvatarSize::Md,
        Some("conv-1"),
        &cache,
        &config,
    );
    let from_reversed = cache.entry("conv-1").unwrap();

    for p in &forward {
        assert_eq!(
            from_forward.color_for(&p.identifier),
            from_reversed.color_for(&p.identifier),
            "color changed for {}",
            p.identifier
        );
    }
}

/// Scenario 1 from the product brief: a single participant renders as one
/// full-square cell with the flat color and an uppercase initial.
#[test]
fn test_single_participant_scenario() {
    let config = AvatarConfig::default();
    let cache = ConversationColorCache::new(config.cache_capacity);
    let ann = Participant::new("a@x.com").with_display_name("Ann");

    let avatar = render_group_avatar(
        std::slice::from_ref(&ann),
        ThemeName::Light,
        AvatarSize::Md,
        None,
        &cache,
        &config,
    );

    assert_eq!(avatar.cells.len(), 1);
    assert_eq!(avatar.cells[0].glyph, "A");
    assert_eq!(
        avatar.cells[0].background,
        flat_color("Ann", ThemeName::Light)
    );
    // No conversation id: nothing cached
    assert!(cache.is_empty());
}

/// Scenario: five participants in dark theme collapse to a 2x2 grid with
/// exactly one overflow marker that keeps the replaced slot's color.
#[test]
fn test_overflow_scenario_dark_theme() {
    let config = AvatarConfig::default();
    let cache = ConversationColorCache::new(config.cache_capacity);
    let five = group(&["Ann", "Bob", "Cid", "Dee", "Eli"]);

    let avatar = render_group_avatar(
        &five,
        ThemeName::Dark,
        AvatarSize::Lg,
        Some("conv-5"),
        &cache,
        &config,
    );

    assert_eq!(avatar.cells.len(), 4);
    let markers: Vec<_> = avatar
        .cells
        .iter()
        .filter(|c| c.glyph == OVERFLOW_GLYPH)
        .collect();
    assert_eq!(markers.len(), 1);

    // The marked slot keeps the color of the participant it replaced
    let first_four = render_group_avatar(
        &five[..4],
        ThemeName::Dark,
        AvatarSize::Lg,
        None,
        &cache,
        &config,
    );
    for (with_marker, without) in avatar.cells.iter().zip(&first_four.cells) {
        assert_eq!(with_marker.background, without.background);
    }
}

/// Theme switches may change colors but never layout decisions.
#[test]
fn test_theme_switch_keeps_geometry() {
    let config = AvatarConfig::default();
    let cache = ConversationColorCache::new(config.cache_capacity);
    let participants = group(&["Ann", "Bob", "Dee"]);

    let light = render_group_avatar(
        &participants,
        ThemeName::Light,
        AvatarSize::Md,
        None,
        &cache,
        &config,
    );
    let dark = render_group_avatar(
        &participants,
        ThemeName::Dark,
        AvatarSize::Md,
        None,
        &cache,
        &config,
    );

    for (l, d) in light.cells.iter().zip(&dark.cells) {
        assert_eq!((l.x, l.y, l.width, l.height), (d.x, d.y, d.width, d.height));
        assert_eq!(l.glyph, d.glyph);
    }
    // Rounding is the one theme-cosmetic difference in geometry
    assert!(dark.corner_radius > light.corner_radius);
}

/// Sender colorizer falls back to the flat color before any render.
#[test]
fn test_sender_color_fallback_before_first_render() {
    let cache = ConversationColorCache::new(8);
    let color = sender_color(
        &cache,
        "conv-never-rendered",
        "bob@example.com",
        "Bob",
        ThemeName::Light,
    );
    assert_eq!(color, flat_color("Bob", ThemeName::Light));
}

/// The flat strategy produces a single engine behavior change (pair
/// coloring) without touching layout.
#[test]
fn test_flat_strategy_end_to_end() {
    let zoned_config = AvatarConfig::default();
    let flat_config = AvatarConfig::new().strategy(ColorStrategy::Flat);
    let cache = ConversationColorCache::new(8);
    let pair = group(&["Ann", "Bob"]);

    let zoned = render_group_avatar(
        &pair,
        ThemeName::Light,
        AvatarSize::Md,
        None,
        &cache,
        &zoned_config,
    );
    let flat = render_group_avatar(
        &pair,
        ThemeName::Light,
        AvatarSize::Md,
        None,
        &cache,
        &flat_config,
    );

    // Identical geometry, potentially different colors
    for (z, f) in zoned.cells.iter().zip(&flat.cells) {
        assert_eq!((z.x, z.y, z.width, z.height), (f.x, f.y, f.width, f.height));
    }
    assert_eq!(flat.cells[0].background, flat_color("Ann", ThemeName::Light));
    assert_eq!(flat.cells[1].background, flat_color("Bob", ThemeName::Light));
}

/// Compositions serialize for snapshotting and cross-process handoff.
#[test]
fn test_composition_is_serializable() {
    let config = AvatarConfig::default();
    let cache = ConversationColorCache::new(8);
    let avatar = render_group_avatar(
        &group(&["Ann", "Bob", "Cid", "Dee", "Eli"]),
        ThemeName::Dark,
        AvatarSize::Custom(120),
        Some("conv-9"),
        &cache,
        &config,
    );
    let json = serde_json::to_string_pretty(&avatar).unwrap();
    let back: AvatarComposition = serde_json::from_str(&json).unwrap();
    assert_eq!(back, avatar);
}
