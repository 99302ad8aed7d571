//! One-line text HUD.

use tilestrike_core::state::HudView;

/// `HP: 92 | Enemies: 5 | Proj: 3 | FPS: 60`. Values are rounded.
pub fn hud_line(hud: &HudView, fps: f64) -> String {
    format!(
        "HP: {:.0} | Enemies: {} | Proj: {} | FPS: {:.0}",
        hud.player_health, hud.enemies_alive, hud.projectiles_active, fps
    )
}
