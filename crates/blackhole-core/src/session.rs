//! The per-frame entry point tying parameters, observer, gate and renderer together.

use crate::camera::CameraFrameSynchronizer;
use crate::constants::MAX_PENDING_DT_SEC;
use crate::error::SessionError;
use crate::gate::{GateDecision, GateInputs, RenderGate};
use crate::observer::{Kinematics, Observer};
use crate::params::{Effect, ObserverMode, ParameterStore, Quality};
use crate::renderer::Renderer;
use crate::shader::{CompileOutcome, ShaderCompiler};
use crate::uniforms::{SceneUniforms, UniformBridge};
use glam::DMat4;
use std::collections::VecDeque;

/// External input, applied at the start of the next tick in submission order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    SetQuality(Quality),
    SetEffect(Effect, bool),
    SetObserverMotion(bool),
    SetObserverDistance(f64),
    SetOrbitalInclination(f64),
    SetPlanetEnabled(bool),
    SetPlanetDistance(f64),
    SetPlanetRadius(f64),
    SetTimeScale(f64),
    Resize { width: u32, height: u32 },
    Reset,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    Skipped,
    Rendered { recompiled: bool },
}

pub struct Session {
    params: ParameterStore,
    observer: Observer,
    sync: CameraFrameSynchronizer,
    gate: RenderGate,
    compiler: ShaderCompiler,
    uniforms: SceneUniforms,
    commands: VecDeque<Command>,
    control: Option<DMat4>,
    resolution: [u32; 2],
    pending_dt: f64,
    surface_invalidated: bool,
}

impl Session {
    /// Build a session around the shader template. The first tick always renders.
    pub fn new(template: impl Into<String>, resolution: [u32; 2]) -> Self {
        let params = ParameterStore::default();
        let sync = CameraFrameSynchronizer::new(params.observer_mode());
        Self {
            params,
            observer: Observer::default(),
            sync,
            gate: RenderGate::default(),
            compiler: ShaderCompiler::new(template),
            uniforms: SceneUniforms::default(),
            commands: VecDeque::new(),
            control: None,
            resolution: [resolution[0].max(1), resolution[1].max(1)],
            pending_dt: 0.0,
            surface_invalidated: true,
        }
    }

    pub fn submit(&mut self, command: Command) {
        self.commands.push_back(command);
    }

    pub fn params(&self) -> &ParameterStore {
        &self.params
    }

    pub fn observer(&self) -> &Observer {
        &self.observer
    }

    pub fn uniforms(&self) -> &SceneUniforms {
        &self.uniforms
    }

    pub fn resolution(&self) -> [u32; 2] {
        self.resolution
    }

    /// Commands submitted but not yet applied.
    pub fn pending_commands(&self) -> usize {
        self.commands.len()
    }

    /// Wall-clock seconds carried over from skipped ticks.
    pub fn pending_dt(&self) -> f64 {
        self.pending_dt
    }

    /// Force a redraw next tick, e.g. after the surface was reconfigured.
    pub fn invalidate_surface(&mut self) {
        self.surface_invalidated = true;
    }

    /// Advance and maybe render one frame.
    ///
    /// `dt_raw` is wall-clock seconds since the previous tick; skipped ticks
    /// carry their time forward, capped at `MAX_PENDING_DT_SEC`. A compile
    /// failure is reported after the frame has been drawn with the previous
    /// program.
    pub fn tick<R: Renderer + ?Sized>(
        &mut self,
        dt_raw: f64,
        control: &DMat4,
        renderer: &mut R,
    ) -> Result<TickOutcome, SessionError> {
        if dt_raw.is_finite() && dt_raw > 0.0 {
            self.pending_dt = (self.pending_dt + dt_raw).min(MAX_PENDING_DT_SEC);
        }

        let mut resync = self.control.as_ref() != Some(control);
        self.control = Some(*control);
        while let Some(command) = self.commands.pop_front() {
            resync |= self.apply(command);
        }
        if resync {
            self.sync.update(&mut self.observer, control, &self.params);
        }

        let inputs = GateInputs {
            compile_dirty: self.compiler.is_pending(&self.params),
            moving_parts: self.params.has_moving_parts(),
            surface_invalidated: self.surface_invalidated,
        };
        if self.gate.evaluate(inputs, control) == GateDecision::Skip {
            return Ok(TickOutcome::Skipped);
        }

        let dt = std::mem::take(&mut self.pending_dt);
        self.observer.advance(dt, &self.params);
        if self.params.observer_mode() == ObserverMode::Orbiting {
            self.sync.update(&mut self.observer, control, &self.params);
        }
        UniformBridge::push(&self.observer, &self.params, self.resolution, &mut self.uniforms);

        let compiled = self.compiler.compile(&mut self.params, renderer);
        let recompiled = matches!(compiled, Ok(CompileOutcome::Compiled));

        if let Err(err) = renderer.draw(&self.uniforms) {
            self.surface_invalidated = true;
            if let Err(compile_err) = compiled {
                log::warn!("[session] draw failed after compile error: {err}");
                return Err(compile_err.into());
            }
            return Err(err.into());
        }
        self.gate.record(control);
        self.surface_invalidated = false;

        compiled?;
        Ok(TickOutcome::Rendered { recompiled })
    }

    /// Returns true when the camera frame must be re-synchronized.
    fn apply(&mut self, command: Command) -> bool {
        log::debug!("[session] {command:?}");
        match command {
            Command::SetQuality(quality) => {
                self.params.set_quality(quality);
                false
            }
            Command::SetEffect(effect, enabled) => {
                self.params.set_effect(effect, enabled);
                false
            }
            Command::SetObserverMotion(motion) => {
                self.params.set_observer_mode(ObserverMode::from_motion(motion));
                true
            }
            Command::SetObserverDistance(distance) => {
                self.params.set_observer_distance(distance);
                true
            }
            Command::SetOrbitalInclination(degrees) => {
                self.params.set_orbital_inclination(degrees);
                false
            }
            Command::SetPlanetEnabled(enabled) => {
                self.params.set_planet_enabled(enabled);
                false
            }
            Command::SetPlanetDistance(distance) => {
                self.params.set_planet_distance(distance);
                false
            }
            Command::SetPlanetRadius(radius) => {
                self.params.set_planet_radius(radius);
                false
            }
            Command::SetTimeScale(scale) => {
                self.params.set_time_scale(scale);
                false
            }
            Command::Resize { width, height } => {
                let resolution = [width.max(1), height.max(1)];
                if resolution != self.resolution {
                    log::info!("[session] resize {}x{}", resolution[0], resolution[1]);
                    self.resolution = resolution;
                }
                self.surface_invalidated = true;
                false
            }
            Command::Reset => {
                log::info!("[session] reset to defaults");
                self.params.reset();
                self.observer.reset();
                self.pending_dt = 0.0;
                self.compiler.forget_failure();
                true
            }
        }
    }
}
