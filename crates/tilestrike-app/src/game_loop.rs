//! Real-time frame loop driving the simulation at a fixed tick rate.
//!
//! Each real frame samples input once, feeds the wall-clock frame time to
//! the `FixedTimeStep`, and runs however many ticks it yields. Save and
//! load requests returned by the engine are served here, outside the tick.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;

use tilestrike_core::enums::PersistenceRequest;
use tilestrike_core::input::{Action, ActionSet, InputFrame};
use tilestrike_core::Vec2;
use tilestrike_sim::fixed_step::FixedTimeStep;
use tilestrike_sim::SimulationEngine;

use crate::config::{AppConfig, SessionConfig};
use crate::hud::hud_line;
use crate::input::{InputMapper, ScriptedInput};
use crate::persistence::SaveStore;
use crate::profiling::FrameProfiler;

const HUD_INTERVAL: Duration = Duration::from_secs(1);

/// Counters reported when the loop ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub ticks: u64,
}

pub struct GameLoop {
    engine: SimulationEngine,
    stepper: FixedTimeStep,
    mapper: InputMapper,
    saves: SaveStore,
    profiler: FrameProfiler,
    session: SessionConfig,
    /// Edges sampled on frames that ran no tick, delivered to the next tick.
    carried_pressed: ActionSet,
    carried_released: ActionSet,
    summary: RunSummary,
}

impl GameLoop {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            engine: SimulationEngine::new(config.sim.clone()),
            stepper: FixedTimeStep::new(config.sim.tick_rate),
            mapper: InputMapper::new(&config.input),
            saves: SaveStore::new(config.save_dir.clone()),
            profiler: FrameProfiler::default(),
            session: config.session.clone(),
            carried_pressed: ActionSet::default(),
            carried_released: ActionSet::default(),
            summary: RunSummary::default(),
        }
    }

    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    pub fn summary(&self) -> RunSummary {
        self.summary
    }

    /// Play `script` in real time until it finishes or the frame cap is hit.
    ///
    /// An error from a frame stops the loop; the exit auto-save is still
    /// attempted before the error is returned.
    pub fn run(&mut self, script: &mut ScriptedInput) -> anyhow::Result<RunSummary> {
        let frame_budget = match self.session.target_fps {
            0 => Duration::ZERO,
            fps => Duration::from_secs_f64(1.0 / f64::from(fps)),
        };
        let mut last_frame = Instant::now();
        let mut last_hud = Instant::now();

        let result = loop {
            // 1. Quit check, once per real frame
            let capped = self
                .session
                .frame_cap
                .is_some_and(|cap| self.summary.frames >= cap);
            if capped || script.quit_requested() {
                break Ok(());
            }

            self.profiler.begin_frame();
            let now = Instant::now();
            let frame_time = now.duration_since(last_frame).as_secs_f64();
            last_frame = now;

            // 2. Input, ticks, persistence
            let keys = script.next_keys();
            if let Err(err) = self.step_frame(&keys, script.cursor_screen(), frame_time) {
                break Err(err);
            }

            // 3. HUD once per second
            if last_hud.elapsed() >= HUD_INTERVAL {
                last_hud = Instant::now();
                let snapshot = self.engine.snapshot();
                tracing::info!("{}", hud_line(&snapshot.hud, self.profiler.fps()));
            }

            // 4. Sleep out the rest of the frame
            let spent = now.elapsed();
            if spent < frame_budget {
                thread::sleep(frame_budget - spent);
            }
            self.profiler.end_frame();
        };

        self.shutdown();
        result.map(|()| self.summary)
    }

    /// One real frame: map `keys` to an input frame, run the ticks that
    /// `frame_time` pays for, then serve at most one persistence request
    /// per tick.
    pub fn step_frame(
        &mut self,
        keys: &[&str],
        cursor_screen: Vec2,
        frame_time: f64,
    ) -> anyhow::Result<()> {
        let mut input = self.mapper.frame(keys, cursor_screen);
        self.summary.frames += 1;

        let ticks = self.stepper.advance(frame_time);
        if ticks == 0 {
            self.carry_edges(&input);
            return Ok(());
        }

        merge_into(&mut input.pressed, std::mem::take(&mut self.carried_pressed));
        merge_into(&mut input.released, std::mem::take(&mut self.carried_released));

        for i in 0..ticks {
            // Edges belong to the first tick of the frame only.
            let tick_input = if i == 0 { input } else { input.without_edges() };
            let request = self.engine.tick(&tick_input);
            self.summary.ticks += 1;
            if let Some(request) = request {
                self.serve(request)?;
            }
        }
        Ok(())
    }

    fn carry_edges(&mut self, input: &InputFrame) {
        merge_into(&mut self.carried_pressed, input.pressed);
        merge_into(&mut self.carried_released, input.released);
    }

    fn serve(&mut self, request: PersistenceRequest) -> anyhow::Result<()> {
        match request {
            PersistenceRequest::QuickSave => self
                .saves
                .quick_save(&self.engine.to_save_data())
                .context("quick-save failed")?,
            PersistenceRequest::QuickLoad => {
                let loaded = self.saves.quick_load().context("quick-load failed")?;
                match loaded {
                    Some(data) => self.engine.apply_save_data(&data),
                    None => tracing::info!("quick-load requested with no save present"),
                }
            }
        }
        Ok(())
    }

    /// Best-effort exit save. Failure is logged, never returned.
    fn shutdown(&mut self) {
        if !self.session.auto_save_on_exit {
            return;
        }
        if let Err(err) = self.saves.auto_save(&self.engine.to_save_data()) {
            tracing::warn!(error = %err, "auto-save on exit failed");
        }
        tracing::info!(
            frames = self.summary.frames,
            ticks = self.summary.ticks,
            "game loop stopped"
        );
    }
}

fn merge_into(target: &mut ActionSet, extra: ActionSet) {
    for action in Action::ALL {
        if extra.contains(action) {
            target.insert(action);
        }
    }
}
