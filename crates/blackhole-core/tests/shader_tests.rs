// Shader compiler: dirty lifecycle, failure memo and the shipped template.

use blackhole_core::{
    CompileError, CompileOutcome, Effect, ObserverMode, ParameterStore, Quality, RenderError,
    Renderer, SceneUniforms, ShaderCompiler, FALLBACK_FRAGMENT_WGSL,
};

const RAYTRACER: &str = include_str!("../../../assets/shaders/raytracer.wgsl");

#[derive(Default)]
struct Recorder {
    sources: Vec<String>,
    reject_marker: Option<&'static str>,
}

impl Renderer for Recorder {
    fn compile(&mut self, fragment_source: &str) -> Result<(), CompileError> {
        self.sources.push(fragment_source.to_string());
        match self.reject_marker {
            Some(marker) if fragment_source.contains(marker) => {
                Err(CompileError::Rejected(format!("found {marker}")))
            }
            _ => Ok(()),
        }
    }

    fn draw(&mut self, _uniforms: &SceneUniforms) -> Result<(), RenderError> {
        Ok(())
    }
}

fn clean_store(compiler: &mut ShaderCompiler, renderer: &mut Recorder) -> ParameterStore {
    let mut params = ParameterStore::default();
    assert_eq!(
        compiler.compile(&mut params, renderer),
        Ok(CompileOutcome::Compiled)
    );
    assert!(!params.is_dirty());
    params
}

#[test]
fn exactly_one_compile_per_dirty_cycle() {
    let mut compiler = ShaderCompiler::new("steps={{n_steps}}");
    let mut renderer = Recorder::default();
    let mut params = clean_store(&mut compiler, &mut renderer);

    assert_eq!(
        compiler.compile(&mut params, &mut renderer),
        Ok(CompileOutcome::UpToDate)
    );
    params.set_quality(Quality::High);
    assert!(params.is_dirty());
    assert_eq!(
        compiler.compile(&mut params, &mut renderer),
        Ok(CompileOutcome::Compiled)
    );
    assert_eq!(
        compiler.compile(&mut params, &mut renderer),
        Ok(CompileOutcome::UpToDate)
    );
    assert_eq!(renderer.sources, vec!["steps=100", "steps=200"]);
    assert_eq!(compiler.compile_count(), 2);
}

#[test]
fn each_compile_affecting_write_dirties() {
    let writes: [fn(&mut ParameterStore); 5] = [
        |p| p.set_quality(Quality::Fast),
        |p| p.set_effect(Effect::LightTravelTime, false),
        |p| p.set_effect(Effect::Aberration, false),
        |p| p.set_observer_mode(ObserverMode::Stationary),
        |p| p.set_planet_enabled(false),
    ];
    for (i, write) in writes.iter().enumerate() {
        let mut compiler = ShaderCompiler::new("");
        let mut renderer = Recorder::default();
        let mut params = clean_store(&mut compiler, &mut renderer);
        write(&mut params);
        assert!(params.is_dirty(), "write {i}");
    }
}

#[test]
fn continuous_and_idempotent_writes_stay_clean() {
    let mut compiler = ShaderCompiler::new("");
    let mut renderer = Recorder::default();
    let mut params = clean_store(&mut compiler, &mut renderer);

    params.set_observer_distance(20.0);
    params.set_orbital_inclination(30.0);
    params.set_planet_distance(4.0);
    params.set_planet_radius(1.0);
    params.set_time_scale(0.5);
    params.set_quality(Quality::Medium);
    params.set_effect(Effect::Beaming, true);
    params.set_planet_enabled(true);
    params.set_observer_mode(ObserverMode::Orbiting);
    assert!(!params.is_dirty());
}

#[test]
fn failure_is_reported_once_and_not_resubmitted() {
    let mut compiler = ShaderCompiler::new("ok{{#beaming}} BROKEN{{/beaming}}");
    let mut renderer = Recorder {
        reject_marker: Some("BROKEN"),
        ..Recorder::default()
    };
    let mut params = ParameterStore::default();
    assert!(compiler.is_pending(&params));

    let first = compiler.compile(&mut params, &mut renderer);
    assert!(matches!(first, Err(CompileError::Rejected(_))));
    assert!(params.is_dirty());
    assert!(!compiler.is_pending(&params));

    assert_eq!(
        compiler.compile(&mut params, &mut renderer),
        Ok(CompileOutcome::PreviouslyRejected)
    );
    assert_eq!(renderer.sources.len(), 1);

    params.set_effect(Effect::Beaming, false);
    assert!(compiler.is_pending(&params));
    assert_eq!(
        compiler.compile(&mut params, &mut renderer),
        Ok(CompileOutcome::Compiled)
    );
    assert!(!params.is_dirty());
    assert!(!compiler.is_pending(&params));
    assert_eq!(renderer.sources.last().map(String::as_str), Some("ok"));
}

#[test]
fn template_errors_surface_as_compile_errors() {
    let mut compiler = ShaderCompiler::new("{{#beaming}}");
    let mut renderer = Recorder::default();
    let mut params = ParameterStore::default();
    let result = compiler.compile(&mut params, &mut renderer);
    assert!(matches!(result, Err(CompileError::Template(_))));
    assert!(renderer.sources.is_empty());
    assert!(params.is_dirty());

    compiler.forget_failure();
    let again = compiler.compile(&mut params, &mut renderer);
    assert!(matches!(again, Err(CompileError::Template(_))));
}

#[test]
fn shipped_template_renders_for_every_combination() {
    let compiler = ShaderCompiler::new(RAYTRACER);
    let mut params = ParameterStore::default();
    for quality in Quality::ALL {
        params.set_quality(quality);
        for mask in 0u32..(1 << Effect::ALL.len()) {
            for (bit, effect) in Effect::ALL.iter().enumerate() {
                params.set_effect(*effect, mask & (1 << bit) != 0);
            }
            for motion in [true, false] {
                params.set_observer_mode(ObserverMode::from_motion(motion));
                let source = compiler
                    .render(&params)
                    .unwrap_or_else(|e| panic!("{quality:?} mask {mask:#b}: {e}"));
                assert!(source.contains("fn fs_main"));
                assert!(!source.contains("{{"));
            }
        }
    }
}

#[test]
fn fallback_program_has_no_tags() {
    let compiler = ShaderCompiler::new(FALLBACK_FRAGMENT_WGSL);
    let source = compiler.render(&ParameterStore::default()).unwrap();
    assert_eq!(source, FALLBACK_FRAGMENT_WGSL);
}
