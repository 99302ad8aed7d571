//! TileMap: collision grid with spatial queries.
//!
//! All queries clamp out-of-range coordinates instead of failing.
//! Cells outside the grid never block.

use glam::Vec2;

use tilestrike_core::enums::ZoneKind;
use tilestrike_core::types::Rect;

use crate::zone::Zone;

/// Outcome of an axis-separated sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Displacement left over on x. Equals the request when x was free,
    /// zero when the axis was fully cancelled.
    pub remaining_dx: f32,
    /// Same for y.
    pub remaining_dy: f32,
    /// Box after movement and world clamping.
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// Grid of walkable/blocked tiles plus static zones.
#[derive(Debug, Clone, PartialEq)]
pub struct TileMap {
    tiles_w: usize,
    tiles_h: usize,
    tile_size: i32,
    /// Decorative tile ids, row-major. Not read by any collision query.
    ground: Vec<u16>,
    /// Blocked flags, row-major.
    collision: Vec<bool>,
    zones: Vec<Zone>,
}

impl TileMap {
    /// Open map with every border cell blocked.
    pub fn bordered(tiles_w: usize, tiles_h: usize, tile_size: i32) -> Self {
        let mut map = Self {
            tiles_w,
            tiles_h,
            tile_size: tile_size.max(1),
            ground: vec![0; tiles_w * tiles_h],
            collision: vec![false; tiles_w * tiles_h],
            zones: Vec::new(),
        };
        for x in 0..tiles_w {
            map.set_blocked(x, 0, true);
            map.set_blocked(x, tiles_h.saturating_sub(1), true);
        }
        for y in 0..tiles_h {
            map.set_blocked(0, y, true);
            map.set_blocked(tiles_w.saturating_sub(1), y, true);
        }
        map
    }

    pub fn tiles_w(&self) -> usize {
        self.tiles_w
    }

    pub fn tiles_h(&self) -> usize {
        self.tiles_h
    }

    pub fn tile_size(&self) -> i32 {
        self.tile_size
    }

    pub fn pixel_width(&self) -> i32 {
        self.tiles_w as i32 * self.tile_size
    }

    pub fn pixel_height(&self) -> i32 {
        self.tiles_h as i32 * self.tile_size
    }

    /// The whole world as a pixel box anchored at the origin.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.pixel_width(), self.pixel_height())
    }

    /// Pixel box covered by a tile.
    pub fn tile_rect(&self, tx: usize, ty: usize) -> Rect {
        Rect::new(
            tx as i32 * self.tile_size,
            ty as i32 * self.tile_size,
            self.tile_size,
            self.tile_size,
        )
    }

    /// World-space centre of a tile.
    pub fn tile_center(&self, tx: usize, ty: usize) -> Vec2 {
        let half = self.tile_size as f32 * 0.5;
        Vec2::new(
            tx as f32 * self.tile_size as f32 + half,
            ty as f32 * self.tile_size as f32 + half,
        )
    }

    fn index(&self, tx: usize, ty: usize) -> Option<usize> {
        (tx < self.tiles_w && ty < self.tiles_h).then(|| ty * self.tiles_w + tx)
    }

    /// Whether a cell blocks movement. Out-of-range cells never block.
    pub fn is_blocked(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || ty < 0 {
            return false;
        }
        self.index(tx as usize, ty as usize)
            .is_some_and(|i| self.collision[i])
    }

    fn set_blocked(&mut self, tx: usize, ty: usize, blocked: bool) {
        if let Some(i) = self.index(tx, ty) {
            self.collision[i] = blocked;
        }
    }

    fn is_border(&self, tx: usize, ty: usize) -> bool {
        tx == 0 || ty == 0 || tx + 1 == self.tiles_w || ty + 1 == self.tiles_h
    }

    /// Block a rectangle of cells. Construction-time only.
    pub fn block_region(&mut self, tx: usize, ty: usize, w: usize, h: usize) {
        for y in ty..(ty + h).min(self.tiles_h) {
            for x in tx..(tx + w).min(self.tiles_w) {
                self.set_blocked(x, y, true);
            }
        }
    }

    /// Unblock a rectangle of interior cells; the border stays blocked.
    pub fn clear_region(&mut self, tx: usize, ty: usize, w: usize, h: usize) {
        for y in ty..(ty + h).min(self.tiles_h) {
            for x in tx..(tx + w).min(self.tiles_w) {
                if !self.is_border(x, y) {
                    self.set_blocked(x, y, false);
                }
            }
        }
    }

    pub fn add_zone(&mut self, zone: Zone) {
        self.zones.push(zone);
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Zones overlapping a view box, for drawing.
    pub fn zones_in<'a>(&'a self, view: &'a Rect) -> impl Iterator<Item = &'a Zone> + 'a {
        self.zones.iter().filter(move |z| z.rect.overlaps(view))
    }

    /// Decorative tile id; 0 outside the grid.
    pub fn ground_at(&self, tx: usize, ty: usize) -> u16 {
        self.index(tx, ty).map_or(0, |i| self.ground[i])
    }

    /// Editor hook: change a decorative id. Has no effect on collision.
    pub fn set_ground(&mut self, tx: usize, ty: usize, id: u16) {
        if let Some(i) = self.index(tx, ty) {
            self.ground[i] = id;
        }
    }

    /// Inclusive cell range covered by a pixel span, clamped to the grid.
    /// Returns `None` when the clamped range is empty.
    fn cell_span(&self, lo: i32, hi_exclusive: i32, cells: usize) -> Option<(usize, usize)> {
        let min = lo.div_euclid(self.tile_size).max(0);
        let max = (hi_exclusive - 1)
            .div_euclid(self.tile_size)
            .min(cells as i32 - 1);
        (min <= max).then_some((min as usize, max as usize))
    }

    /// True iff any blocked cell overlaps `rect`.
    pub fn collides(&self, rect: &Rect) -> bool {
        let Some((min_tx, max_tx)) = self.cell_span(rect.left(), rect.right(), self.tiles_w)
        else {
            return false;
        };
        let Some((min_ty, max_ty)) = self.cell_span(rect.top(), rect.bottom(), self.tiles_h)
        else {
            return false;
        };
        (min_ty..=max_ty).any(|ty| {
            let row = ty * self.tiles_w;
            self.collision[row + min_tx..=row + max_tx]
                .iter()
                .any(|&blocked| blocked)
        })
    }

    /// Axis-separated sweep: x first, then y on the x-adjusted box, then
    /// clamp into the world. Each axis moves by its truncated integer delta.
    /// A blocked axis backs off one pixel at a time until free. If the
    /// integer displacement runs out first, the axis is restored to where it
    /// started and its residual is zero.
    pub fn resolve_movement(&self, rect: &Rect, dx: f32, dy: f32) -> MoveResult {
        let mut moved = *rect;
        let remaining_dx = self.sweep_axis(&mut moved, dx, Axis::X);
        let remaining_dy = self.sweep_axis(&mut moved, dy, Axis::Y);
        MoveResult {
            remaining_dx,
            remaining_dy,
            rect: moved.clamped_within(&self.bounds()),
        }
    }

    fn sweep_axis(&self, rect: &mut Rect, delta: f32, axis: Axis) -> f32 {
        let origin = *rect;
        shift(rect, axis, delta.trunc() as i32);
        if !self.collides(rect) {
            return delta;
        }

        let step: i32 = if delta > 0.0 { 1 } else { -1 };
        let mut remaining = delta;
        while remaining.trunc() != 0.0 {
            shift(rect, axis, -step);
            remaining -= step as f32;
            if !self.collides(rect) {
                return remaining;
            }
        }

        *rect = origin;
        0.0
    }

    /// Coarse visibility test: samples `max(|dx|,|dy|) / tile_size + 1`
    /// equal steps along the segment, both ends included, and reports
    /// whether any sample lands in a blocked cell. Thin walls crossed at a
    /// shallow angle can be missed.
    pub fn raycast_blocked(&self, start: Vec2, end: Vec2) -> bool {
        let delta = end - start;
        let span = delta.x.abs().max(delta.y.abs());
        let steps = (span / self.tile_size as f32).floor() as i32 + 1;
        (0..=steps).any(|i| {
            let t = i as f32 / steps as f32;
            let p = start + delta * t;
            let tx = (p.x as i32).div_euclid(self.tile_size);
            let ty = (p.y as i32).div_euclid(self.tile_size);
            self.is_blocked(tx, ty)
        })
    }

    /// Sum of `dps` over damage zones overlapping `rect`.
    pub fn damage_per_second(&self, rect: &Rect) -> f32 {
        self.zones
            .iter()
            .filter(|z| z.kind == ZoneKind::Damage && rect.overlaps(&z.rect))
            .map(|z| z.dps)
            .sum()
    }

    /// Cells a renderer needs for `view` (grown by one pixel), as
    /// `(tx, ty, blocked)` in row-major order.
    pub fn visible_cells(&self, view: &Rect) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        let grown = view.inflate(1);
        let xs = self.cell_span(grown.left(), grown.right() + 1, self.tiles_w);
        let ys = self.cell_span(grown.top(), grown.bottom() + 1, self.tiles_h);
        let (x_range, y_range) = match (xs, ys) {
            (Some((x0, x1)), Some((y0, y1))) => (x0..x1 + 1, y0..y1 + 1),
            _ => (0..0, 0..0),
        };
        y_range.flat_map(move |ty| {
            x_range
                .clone()
                .map(move |tx| (tx, ty, self.collision[ty * self.tiles_w + tx]))
        })
    }

    /// Number of blocked cells.
    pub fn blocked_count(&self) -> usize {
        self.collision.iter().filter(|&&b| b).count()
    }
}

fn shift(rect: &mut Rect, axis: Axis, by: i32) {
    match axis {
        Axis::X => rect.x += by,
        Axis::Y => rect.y += by,
    }
}
