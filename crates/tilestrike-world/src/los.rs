//! Line-of-sight between world points.

use glam::Vec2;

use crate::grid::TileMap;

/// Check line-of-sight between two world-space points.
///
/// Returns true if no sampled point along the segment lands in a blocked
/// cell. See [`TileMap::raycast_blocked`] for the sampling rule.
pub fn has_line_of_sight(map: &TileMap, from: Vec2, to: Vec2) -> bool {
    !map.raycast_blocked(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20×20 map with a pillar in the middle (cells 9..11, 9..11).
    fn make_pillar_map() -> TileMap {
        let mut map = TileMap::bordered(20, 20, 32);
        map.block_region(9, 9, 2, 2);
        map
    }

    #[test]
    fn test_los_open_ground() {
        let map = make_pillar_map();
        let from = Vec2::new(100.0, 100.0);
        let to = Vec2::new(500.0, 100.0);
        assert!(has_line_of_sight(&map, from, to));
    }

    #[test]
    fn test_los_blocked_by_pillar() {
        let map = make_pillar_map();
        let from = Vec2::new(100.0, 320.0);
        let to = Vec2::new(540.0, 320.0);
        assert!(!has_line_of_sight(&map, from, to));
    }

    #[test]
    fn test_los_is_symmetric_for_axis_aligned_segments() {
        let map = make_pillar_map();
        let a = Vec2::new(320.0, 100.0);
        let b = Vec2::new(320.0, 540.0);
        assert_eq!(has_line_of_sight(&map, a, b), has_line_of_sight(&map, b, a));
        assert!(!has_line_of_sight(&map, a, b));
    }

    #[test]
    fn test_los_same_point() {
        let map = make_pillar_map();
        let p = Vec2::new(100.0, 100.0);
        assert!(has_line_of_sight(&map, p, p));
    }
}
