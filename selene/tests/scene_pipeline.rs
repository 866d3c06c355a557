use selene::config::ViewerConfig;
use selene::{
    FixedLocation, MeeusEphemeris, ObservationContext, Renderer, SceneProjector, SceneTransform,
    TextRenderer, TimeProvider, UTC,
};

/// Keeps every transform it is handed.
#[derive(Default)]
struct Recorder {
    frames: Vec<SceneTransform>,
}

impl Renderer for Recorder {
    fn apply(&mut self, transform: &SceneTransform) -> selene::OrientationResult<()> {
        self.frames.push(*transform);
        Ok(())
    }
}

fn base() -> UTC {
    "2024-01-11T00:00:00Z".parse().unwrap()
}

#[test]
fn test_slider_drives_renderer() {
    let eph = MeeusEphemeris::default();
    let config = ViewerConfig::default();
    let provider = TimeProvider::new(base());
    let ctx = ObservationContext::from_providers(&provider, &FixedLocation::default()).unwrap();
    let projector = config.projector();

    let mut recorder = Recorder::default();
    for offset in [-1.0, 0.0, 1.0] {
        let moved = ctx.with_offset_days(&provider, offset).unwrap();
        recorder.apply(&moved.transform(&eph, &projector).unwrap()).unwrap();
    }

    assert_eq!(recorder.frames.len(), 3);
    // Offsets are relative to one base: going back to 0 reproduces the first pass
    let again = ctx.with_offset_days(&provider, 0.0).unwrap();
    assert_eq!(recorder.frames[1], again.transform(&eph, &projector).unwrap());
    assert_ne!(recorder.frames[0], recorder.frames[2]);
}

#[test]
fn test_rejected_fix_keeps_rendering_previous_location() {
    let eph = MeeusEphemeris::default();
    let projector = SceneProjector::default();
    let provider = TimeProvider::new(base());

    let mut location = FixedLocation::default();
    let before = ObservationContext::from_providers(&provider, &location).unwrap();
    assert!(location.update(f64::NAN, 2.0).is_err());
    let after = ObservationContext::from_providers(&provider, &location).unwrap();

    assert_eq!(
        before.transform(&eph, &projector).unwrap(),
        after.transform(&eph, &projector).unwrap()
    );
}

#[test]
fn test_text_renderer_through_config() {
    let config = ViewerConfig::from_toml_str(
        r#"
        [scene]
        units_per_km = 0.001

        [render]
        fov_deg = 30.0
        "#,
    )
    .unwrap();
    let eph = MeeusEphemeris::default();
    let ctx = ObservationContext::new(base(), config.location().unwrap()).unwrap();
    let transform = ctx.transform(&eph, &config.projector()).unwrap();
    assert!(transform.camera_distance > 356.0 && transform.camera_distance < 407.0);

    let mut renderer = TextRenderer::new(Vec::new(), config.render);
    renderer.apply(&transform).unwrap();
    let text = String::from_utf8(renderer.into_inner()).unwrap();
    assert!(text.starts_with("Scene: fov 30°"));
}

#[test]
fn test_orientation_serializes_to_json() {
    let eph = MeeusEphemeris::default();
    let ctx = ObservationContext::new(base(), Default::default()).unwrap();
    let o = ctx.orientation(&eph).unwrap();
    let value = serde_json::to_value(o).unwrap();
    for key in ["elon", "elat", "distance_km", "phase_angle_deg", "parallactic_angle_deg"] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
}
