//! Curated palette zones for two-participant avatars
//!
//! A zone is a small subset of palette indices whose hues sit well next to
//! each other. Two-participant avatars draw both cell colors from one zone
//! picked by the group digest, then force the two picks apart if they land
//! on the same index, so the pair is never identical.
//!
//! Zones are fixed per-theme constants; the light and dark palettes have
//! different hue orderings, so their zones group indices differently.

use crate::digest::label_digest;
use crate::palette::{palette, Color, ThemeName};
use crate::participant::Participant;

/// Light palette zones: pairs of close or complementary hues
const LIGHT_ZONES: [&[usize]; 4] = [
    &[0, 5], // sky blue / teal
    &[1, 4], // coral / amber
    &[2, 7], // sage / lime
    &[3, 6], // lavender / rose
];

/// Dark palette zones: triples of close or complementary hues
const DARK_ZONES: [&[usize]; 4] = [
    &[0, 5, 8],  // light blue / aqua / periwinkle
    &[1, 4, 9],  // salmon / gold / peach
    &[2, 7, 10], // mint / pear / seafoam
    &[3, 6, 11], // lilac / pink / mauve
];

/// Get the palette zones for a theme
pub fn zones(theme: ThemeName) -> &'static [&'static [usize]] {
    match theme {
        ThemeName::Light => &LIGHT_ZONES,
        ThemeName::Dark => &DARK_ZONES,
    }
}

/// Pick the two cell colors for a two-participant avatar.
///
/// The zone is chosen by the group digest, each participant's slot within
/// the zone by its own label digest. When both land on the same slot the
/// second is pushed to the next slot in the zone, so the returned colors
/// always differ.
pub fn pair_colors(
    first: &Participant,
    second: &Participant,
    group_digest: u64,
    theme: ThemeName,
) -> (Color, Color) {
    let zones = zones(theme);
    let zone = zones[(group_digest % zones.len() as u64) as usize];
    let len = zone.len() as u64;

    let i0 = (label_digest(first.label()) % len) as usize;
    let mut i1 = (label_digest(second.label()) % len) as usize;
    if i1 == i0 {
        i1 = (i0 + 1) % zone.len();
    }

    let pal = palette(theme);
    (pal[zone[i0]].to_string(), pal[zone[i1]].to_string())
}
