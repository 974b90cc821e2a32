#![cfg(not(target_arch = "wasm32"))]

use kaleido_wasm::palette::RANDOM;
use kaleido_wasm::shape::{ColorState, ShapeKind};
use kaleido_wasm::{
    Config, ConfigOutcome, ConfigUpdate, DrawCommand, Kaleidoscope, Point, RecordingSurface,
    Variant,
};

fn arcs(surface: &RecordingSurface) -> usize {
    surface.count(|c| matches!(c, DrawCommand::Arc { .. }))
}

fn scope_with(slices: u32, shapes: usize, variant: Variant) -> Kaleidoscope {
    Kaleidoscope::new(
        Config {
            slices,
            max_shapes: shapes,
            variant,
            ..Config::default()
        },
        11,
    )
}

#[test]
fn frame_is_fade_then_particles_then_slices() {
    let mut scope = Kaleidoscope::with_seed(9);
    let mut surface = RecordingSurface::new();
    scope.draw(&mut surface, 640.0, 480.0, 1000.0, None);

    let cmds = surface.commands();
    assert_eq!(cmds[0], DrawCommand::FillStyle("rgba(0, 0, 0, 0.1)".into()));
    assert_eq!(
        cmds[1],
        DrawCommand::FillRect {
            x: 0.0,
            y: 0.0,
            width: 640.0,
            height: 480.0
        }
    );
    let blur = cmds
        .iter()
        .position(|c| *c == DrawCommand::Filter("blur(1px)".into()))
        .expect("particle layer is blurred");
    let center = cmds
        .iter()
        .position(|c| *c == DrawCommand::Translate(Point::new(320.0, 240.0)))
        .expect("slices are centered");
    assert!(blur < center);
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn every_shape_is_drawn_twice_per_slice() {
    for slices in [1, 3, 8] {
        // Classic has no particle layer, so every arc is a circle shape.
        let mut scope = scope_with(slices, 12, Variant::Classic);
        let circles = scope
            .shapes()
            .iter()
            .filter(|s| s.kind == ShapeKind::Circle)
            .count();
        let mut surface = RecordingSurface::new();
        scope.draw(&mut surface, 500.0, 500.0, 0.0, None);
        assert_eq!(arcs(&surface), circles * 2 * slices as usize);
        let flips = surface.count(|c| *c == DrawCommand::Scale(Point::new(1.0, -1.0)));
        assert_eq!(flips, slices as usize);
    }
}

#[test]
fn classic_variant_skips_particles_and_fades_slower() {
    let mut scope = scope_with(4, 5, Variant::Classic);
    let mut surface = RecordingSurface::new();
    scope.draw(&mut surface, 300.0, 300.0, 0.0, None);
    assert_eq!(
        surface.commands()[0],
        DrawCommand::FillStyle("rgba(0, 0, 0, 0.05)".into())
    );
    assert_eq!(surface.count(|c| matches!(c, DrawCommand::Filter(_))), 0);
}

#[test]
fn shape_draw_order_is_ascending_radius() {
    let mut scope = Kaleidoscope::new(
        Config {
            slices: 1,
            max_shapes: 10,
            variant: Variant::Classic,
            ..Config::default()
        },
        21,
    );
    let mut surface = RecordingSurface::new();
    scope.draw(&mut surface, 400.0, 400.0, 0.0, None);

    // Each shape opens with save + translate(x, y); recover its position and
    // map back to the base radius.
    let shapes = scope.shapes();
    let mut radii = Vec::new();
    let cmds = surface.commands();
    for w in cmds.windows(2).skip(3) {
        if let [DrawCommand::Save, DrawCommand::Translate(p)] = w {
            if let Some(s) = shapes.iter().find(|s| s.x == p.x && s.y == p.y) {
                radii.push(s.radius);
            }
            if radii.len() == shapes.len() {
                break;
            }
        }
    }
    assert_eq!(radii.len(), shapes.len());
    assert!(radii.windows(2).all(|w| w[0] <= w[1]), "{radii:?}");
}

#[test]
fn grow_then_shrink_preserves_earliest_shapes() {
    let mut scope = Kaleidoscope::with_seed(5);
    let mut surface = RecordingSurface::new();
    scope.draw(&mut surface, 800.0, 600.0, 16.0, None);
    let snapshot = scope.shapes().to_vec();

    assert_eq!(
        scope.update_config(ConfigUpdate {
            max_shapes: Some(50),
            ..ConfigUpdate::default()
        }),
        ConfigOutcome::Resized { from: 20, to: 50 }
    );
    assert_eq!(&scope.shapes()[..20], &snapshot[..]);

    scope.update_config(ConfigUpdate {
        max_shapes: Some(6),
        ..ConfigUpdate::default()
    });
    assert_eq!(scope.shapes(), &snapshot[..6]);

    scope.update_config(ConfigUpdate {
        max_shapes: Some(0),
        ..ConfigUpdate::default()
    });
    assert!(scope.shapes().is_empty());
    surface.clear();
    scope.draw(&mut surface, 800.0, 600.0, 32.0, None);
    assert_eq!(surface.save_depth(), 0);
}

#[test]
fn palette_switch_changes_color_mode() {
    let mut scope = Kaleidoscope::with_seed(8);
    assert!(scope.shapes().iter().all(|s| s.color_state.is_palette()));

    let old: Vec<u64> = scope.shapes().iter().map(|s| s.id).collect();
    scope.update_config(ConfigUpdate {
        palette: Some(RANDOM.into()),
        ..ConfigUpdate::default()
    });
    assert!(scope
        .shapes()
        .iter()
        .all(|s| matches!(s.color_state, ColorState::Hue { .. })));
    assert!(scope.shapes().iter().all(|s| !old.contains(&s.id)));

    scope.update_config(ConfigUpdate {
        palette: Some("Ember".into()),
        ..ConfigUpdate::default()
    });
    assert!(scope.shapes().iter().all(|s| s.color_state.is_palette()));
}

#[test]
fn pointer_disturbs_particles_only_transiently() {
    let mut scope = Kaleidoscope::with_seed(13);
    let mut surface = RecordingSurface::new();
    scope.draw(&mut surface, 400.0, 400.0, 0.0, None);

    let pointer = Point::new(200.0, 200.0);
    for frame in 1..5 {
        scope.draw(&mut surface, 400.0, 400.0, f64::from(frame) * 16.0, Some(pointer));
    }
    for frame in 5..400 {
        scope.draw(&mut surface, 400.0, 400.0, f64::from(frame) * 16.0, None);
        surface.clear();
    }
    for p in scope.particles() {
        assert!((p.vx - p.base_vx).abs() < 1e-4);
        assert!((p.vy - p.base_vy).abs() < 1e-4);
    }
}

#[test]
fn particles_stay_on_surface() {
    let mut scope = Kaleidoscope::with_seed(17);
    let mut surface = RecordingSurface::new();
    for frame in 0..600 {
        scope.draw(&mut surface, 200.0, 150.0, f64::from(frame) * 16.0, None);
        surface.clear();
    }
    for p in scope.particles() {
        assert!((0.0..=200.0).contains(&p.x));
        assert!((0.0..=150.0).contains(&p.y));
        assert!(p.trail.len() <= kaleido_wasm::particle::MAX_TRAIL);
    }
}
