// =============================================================================
// GEOMETRY.RS — Arena geometry
//
// The arena is tested with axis-aligned boxes only:
// - Overlap tests between entities (enemy hits, treasure pickup, door goal)
// - Containment of moving entities inside the playable boundary
// - The dungeon tile layout (wall ring around a floor)
// =============================================================================

use glam::Vec2;

/// Axis-aligned rectangle in arena pixel coordinates. `(x, y)` is the
/// top-left corner; y grows downward.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_pos_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

// =============================================================================
// COLLISION
// =============================================================================

/// True iff the two boxes intersect on both axes.
///
/// Compares the distance between centers against the sum of half extents.
/// The comparison is strict, so boxes that only share an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    let d = (a.center() - b.center()).abs();
    let reach = a.half_extents() + b.half_extents();
    d.x < reach.x && d.y < reach.y
}

// =============================================================================
// CONTAINMENT
// =============================================================================

/// Boundary edge crossed during a [`clamp`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// Top and bottom are the edges that reverse a vertical patrol.
    pub fn is_vertical_bound(self) -> bool {
        matches!(self, Edge::Top | Edge::Bottom)
    }
}

/// Snap `position` back inside `boundary` and report the edge it crossed.
///
/// The entity is treated as `extent × extent` for the right and bottom checks.
/// Edges are checked left, top, right, bottom; when more than one is crossed
/// the last one checked is reported.
pub fn clamp(position: &mut Vec2, boundary: &Rect, extent: f32) -> Option<Edge> {
    let mut crossed = None;

    if position.x < boundary.x {
        position.x = boundary.x;
        crossed = Some(Edge::Left);
    }
    if position.y < boundary.y {
        position.y = boundary.y;
        crossed = Some(Edge::Top);
    }
    if position.x + extent > boundary.right() {
        position.x = boundary.right() - extent;
        crossed = Some(Edge::Right);
    }
    if position.y + extent > boundary.bottom() {
        position.y = boundary.bottom() - extent;
        crossed = Some(Edge::Bottom);
    }

    crossed
}

// =============================================================================
// DUNGEON LAYOUT
// =============================================================================

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TileKind {
    Wall,
    Floor,
}

/// Tile kind at column `i`, row `j` of a square dungeon `size` tiles wide.
/// The outermost ring is wall.
pub fn tile_at(i: u32, j: u32, size: u32) -> TileKind {
    if i == 0 || j == 0 || i + 1 == size || j + 1 == size {
        TileKind::Wall
    } else {
        TileKind::Floor
    }
}

/// Every tile of the dungeon as `(i, j, kind)`, column-major.
pub fn dungeon_tiles(size: u32) -> impl Iterator<Item = (u32, u32, TileKind)> {
    (0..size).flat_map(move |i| (0..size).map(move |j| (i, j, tile_at(i, j, size))))
}

/// Playable region inside the wall ring of a `size × size` dungeon.
pub fn arena_boundary(size: u32, tile_size: f32) -> Rect {
    let inner = size.saturating_sub(2) as f32 * tile_size;
    Rect::new(tile_size, tile_size, inner, inner)
}
