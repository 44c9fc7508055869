//! Fixed geometric partitions of the avatar square
//!
//! A layout is an ordered list of 1-4 slots tiling the unit square with a
//! fixed inter-cell gap. Layouts are constants selected by participant
//! count; counts with more than one structural option (2 and 3) pick the
//! variant from the group digest.

use serde::{Deserialize, Serialize};

/// Gap between cells, as a fraction of the avatar edge
pub const CELL_GAP: f32 = 0.03;

/// A rectangle in unit-square coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    /// Create a rectangle
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Area
    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    /// Whether this rectangle overlaps another (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// One cell of a layout
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutSlot {
    /// Position and size within the unit square
    pub rect: Rect,
    /// Index of this cell within the layout
    pub cell_index: usize,
}

/// Split direction for two-participant avatars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitOrientation {
    /// Horizontal split line: top/bottom halves
    Horizontal,
    /// Vertical split line: left/right halves
    Vertical,
}

impl SplitOrientation {
    /// Pick the orientation from the group digest (even = horizontal)
    pub fn from_digest(group_digest: u64) -> Self {
        if group_digest % 2 == 0 {
            SplitOrientation::Horizontal
        } else {
            SplitOrientation::Vertical
        }
    }
}

/// Edge holding the double-size cell in a three-participant layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WideEdge {
    /// Double cell fills the left half
    Left,
    /// Double cell fills the right half
    Right,
    /// Double cell fills the top half
    Top,
    /// Double cell fills the bottom half
    Bottom,
}

impl WideEdge {
    /// Pick the variant from the group digest
    pub fn from_digest(group_digest: u64) -> Self {
        match group_digest % 4 {
            0 => WideEdge::Left,
            1 => WideEdge::Right,
            2 => WideEdge::Top,
            _ => WideEdge::Bottom,
        }
    }
}

// Half-edge length once the gap is taken out of the middle
fn half() -> f32 {
    (1.0 - CELL_GAP) / 2.0
}

fn far() -> f32 {
    half() + CELL_GAP
}

fn slots(rects: Vec<Rect>) -> Vec<LayoutSlot> {
    rects
        .into_iter()
        .enumerate()
        .map(|(cell_index, rect)| LayoutSlot { rect, cell_index })
        .collect()
}

/// Single full-square slot
fn single() -> Vec<LayoutSlot> {
    slots(vec![Rect::new(0.0, 0.0, 1.0, 1.0)])
}

/// Two half-square slots, split per the orientation
fn pair(orientation: SplitOrientation) -> Vec<LayoutSlot> {
    let h = half();
    let rects = match orientation {
        SplitOrientation::Horizontal => vec![
            Rect::new(0.0, 0.0, 1.0, h),
            Rect::new(0.0, far(), 1.0, h),
        ],
        SplitOrientation::Vertical => vec![
            Rect::new(0.0, 0.0, h, 1.0),
            Rect::new(far(), 0.0, h, 1.0),
        ],
    };
    slots(rects)
}

/// One double-size slot on the chosen edge plus two quarter slots.
///
/// The double slot is always first, so the first participant in input order
/// occupies it.
fn triple(edge: WideEdge) -> Vec<LayoutSlot> {
    let h = half();
    let rects = match edge {
        WideEdge::Left => vec![
            Rect::new(0.0, 0.0, h, 1.0),
            Rect::new(far(), 0.0, h, h),
            Rect::new(far(), far(), h, h),
        ],
        WideEdge::Right => vec![
            Rect::new(far(), 0.0, h, 1.0),
            Rect::new(0.0, 0.0, h, h),
            Rect::new(0.0, far(), h, h),
        ],
        WideEdge::Top => vec![
            Rect::new(0.0, 0.0, 1.0, h),
            Rect::new(0.0, far(), h, h),
            Rect::new(far(), far(), h, h),
        ],
        WideEdge::Bottom => vec![
            Rect::new(0.0, far(), 1.0, h),
            Rect::new(0.0, 0.0, h, h),
            Rect::new(far(), 0.0, h, h),
        ],
    };
    slots(rects)
}

/// Fixed 2x2 grid of quarter slots in reading order
fn quad() -> Vec<LayoutSlot> {
    let h = half();
    slots(vec![
        Rect::new(0.0, 0.0, h, h),
        Rect::new(far(), 0.0, h, h),
        Rect::new(0.0, far(), h, h),
        Rect::new(far(), far(), h, h),
    ])
}

/// Select the layout for a participant count.
///
/// Counts of 0 and 1 share the full-square layout; counts above 4 share the
/// 2x2 grid (overflow reduction happens downstream). The digest is consulted
/// only where the count has structural variants.
pub fn layout_for(count: usize, group_digest: u64) -> Vec<LayoutSlot> {
    match count {
        0 | 1 => single(),
        2 => pair(SplitOrientation::from_digest(group_digest)),
        3 => triple(WideEdge::from_digest(group_digest)),
        _ => quad(),
    }
}
