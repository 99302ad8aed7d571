//! Deadzone-follow camera with world clamping.
//!
//! The camera position is the world-space centre of the view. Following
//! snaps (no smoothing) so the target sits on the deadzone edge it crossed,
//! independently per axis, then clamps the view inside the world.

use glam::Vec2;

use tilestrike_core::constants::DEADZONE_FRACTION;
use tilestrike_core::state::CameraView;
use tilestrike_core::types::{Positioned, Rect};

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec2,
    view_size: Vec2,
    world_size: Vec2,
    deadzone: Vec2,
    /// Reserved. Not applied by any transform.
    pub zoom: f32,
    /// Reserved. Not applied by any transform.
    pub shake_timer: f32,
    /// Reserved. Not applied by any transform.
    pub shake_magnitude: f32,
}

impl Camera {
    pub fn new(view_size: Vec2, world_size: Vec2) -> Self {
        let mut camera = Self {
            position: Vec2::ZERO,
            view_size,
            world_size,
            deadzone: view_size * DEADZONE_FRACTION,
            zoom: 1.0,
            shake_timer: 0.0,
            shake_magnitude: 0.0,
        };
        camera.clamp_to_world();
        camera
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn view_size(&self) -> Vec2 {
        self.view_size
    }

    pub fn world_size(&self) -> Vec2 {
        self.world_size
    }

    pub fn deadzone(&self) -> Vec2 {
        self.deadzone
    }

    /// Change the view extent; the deadzone is re-derived and the position re-clamped.
    pub fn resize_view(&mut self, view_size: Vec2) {
        self.view_size = view_size;
        self.deadzone = view_size * DEADZONE_FRACTION;
        self.clamp_to_world();
    }

    /// Follow anything that exposes a position.
    pub fn follow<T: Positioned + ?Sized>(&mut self, target: &T) {
        self.update_follow(target.position());
    }

    pub fn update_follow(&mut self, target: Vec2) {
        let half_dz = self.deadzone * 0.5;
        self.position.x = snap_axis(self.position.x, target.x, half_dz.x);
        self.position.y = snap_axis(self.position.y, target.y, half_dz.y);
        self.clamp_to_world();
    }

    /// Keep the view inside the world. On an axis where the world is
    /// smaller than the view the camera sits at the world midpoint.
    pub fn clamp_to_world(&mut self) {
        let half = self.view_size * 0.5;
        self.position.x = clamp_axis(self.position.x, half.x, self.world_size.x);
        self.position.y = clamp_axis(self.position.y, half.y, self.world_size.y);
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world - self.position + self.view_size * 0.5
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen + self.position - self.view_size * 0.5
    }

    /// Visible world area in whole pixels.
    pub fn view_rect(&self) -> Rect {
        Rect::from_center(self.position, self.view_size)
    }

    pub fn view(&self) -> CameraView {
        CameraView {
            position: self.position,
            view_size: self.view_size,
        }
    }
}

fn snap_axis(camera: f32, target: f32, half_deadzone: f32) -> f32 {
    if target < camera - half_deadzone {
        target + half_deadzone
    } else if target > camera + half_deadzone {
        target - half_deadzone
    } else {
        camera
    }
}

fn clamp_axis(pos: f32, half_view: f32, world: f32) -> f32 {
    let min = half_view;
    let max = world - half_view;
    if min > max {
        world * 0.5
    } else {
        pos.clamp(min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_camera() -> Camera {
        Camera::new(Vec2::new(960.0, 540.0), Vec2::new(5120.0, 5120.0))
    }

    #[test]
    fn test_new_camera_is_clamped() {
        let camera = make_camera();
        assert_eq!(camera.position(), Vec2::new(480.0, 270.0));
        assert_eq!(camera.deadzone(), Vec2::new(336.0, 189.0));
    }

    #[test]
    fn test_target_inside_deadzone_does_not_move_camera() {
        let mut camera = make_camera();
        camera.update_follow(Vec2::new(1000.0, 1000.0));
        let before = camera.position();
        camera.update_follow(before + Vec2::new(100.0, -50.0));
        assert_eq!(camera.position(), before);
    }

    #[test]
    fn test_deadzone_exit_snaps_to_edge() {
        let mut camera = make_camera();
        camera.update_follow(Vec2::new(2000.0, 2000.0));
        // Target ends up exactly on the right/bottom deadzone edge.
        assert_eq!(camera.position(), Vec2::new(2000.0 - 168.0, 2000.0 - 94.5));

        camera.update_follow(Vec2::new(1000.0, 2000.0));
        assert_eq!(camera.position().x, 1000.0 + 168.0);
    }

    #[test]
    fn test_clamped_at_world_edges() {
        let mut camera = make_camera();
        camera.update_follow(Vec2::new(5100.0, 5100.0));
        assert_eq!(camera.position(), Vec2::new(5120.0 - 480.0, 5120.0 - 270.0));
        camera.update_follow(Vec2::new(0.0, 0.0));
        assert_eq!(camera.position(), Vec2::new(480.0, 270.0));
    }

    #[test]
    fn test_small_world_centres_and_transforms_invert() {
        let mut camera = Camera::new(Vec2::new(960.0, 540.0), Vec2::new(320.0, 2000.0));
        camera.update_follow(Vec2::new(300.0, 1500.0));
        assert_eq!(camera.position().x, 160.0);

        for p in [
            Vec2::new(0.0, 0.0),
            Vec2::new(13.0, 77.0),
            Vec2::new(319.0, 1999.0),
            Vec2::new(-40.0, 2500.0),
        ] {
            let screen = camera.world_to_screen(p);
            assert_eq!(camera.screen_to_world(screen), p);
        }
    }

    #[test]
    fn test_transforms_invert_on_normal_world() {
        let mut camera = make_camera();
        camera.update_follow(Vec2::new(2500.0, 1200.0));
        for p in [Vec2::new(2500.0, 1200.0), Vec2::new(2100.0, 1000.0)] {
            assert_eq!(camera.screen_to_world(camera.world_to_screen(p)), p);
        }
        // Camera centre maps to the middle of the screen.
        assert_eq!(
            camera.world_to_screen(camera.position()),
            Vec2::new(480.0, 270.0)
        );
    }

    #[test]
    fn test_resize_view_rederives_deadzone() {
        let mut camera = make_camera();
        camera.resize_view(Vec2::new(400.0, 200.0));
        assert_eq!(camera.deadzone(), Vec2::new(140.0, 70.0));
        assert_eq!(camera.position(), Vec2::new(480.0, 270.0));
    }

    #[test]
    fn test_follow_positioned() {
        struct Marker(Vec2);
        impl Positioned for Marker {
            fn position(&self) -> Vec2 {
                self.0
            }
        }
        let mut camera = make_camera();
        camera.follow(&Marker(Vec2::new(3000.0, 3000.0)));
        assert_eq!(camera.position().x, 3000.0 - 168.0);
    }

    #[test]
    fn test_view_rect() {
        let camera = make_camera();
        assert_eq!(camera.view_rect(), Rect::new(0, 0, 960, 540));
    }
}
