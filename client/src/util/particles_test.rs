use super::*;

#[test]
fn generate_is_deterministic_per_seed() {
    let a = ParticleField::generate(50, FIELD_SPREAD, 7);
    let b = ParticleField::generate(50, FIELD_SPREAD, 7);
    let c = ParticleField::generate(50, FIELD_SPREAD, 8);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn generate_respects_bounds() {
    let field = ParticleField::generate(PARTICLE_COUNT, FIELD_SPREAD, 42);
    assert_eq!(field.particles().len(), PARTICLE_COUNT);
    for p in field.particles() {
        for coord in [p.x, p.y, p.z] {
            assert!((-50.0..50.0).contains(&coord), "{coord} out of range");
        }
        assert!((0.5..0.6).contains(&p.hue));
    }
}

#[test]
fn zero_spread_collapses_to_origin() {
    let field = ParticleField::generate(3, 0.0, 1);
    assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0 && p.z == 0.0));
}

#[test]
fn origin_projects_to_canvas_center() {
    let (x, y, scale) = project((0.0, 0.0, 0.0), 800.0, 600.0).expect("in front of camera");
    assert!((x - 400.0).abs() < 1e-9);
    assert!((y - 300.0).abs() < 1e-9);
    assert!(scale > 0.0);
}

#[test]
fn points_behind_camera_are_culled() {
    assert!(project((0.0, 0.0, CAMERA_Z), 800.0, 600.0).is_none());
    assert!(project((0.0, 0.0, CAMERA_Z + 5.0), 800.0, 600.0).is_none());
}

#[test]
fn empty_canvas_projects_nothing() {
    assert!(project((0.0, 0.0, 0.0), 0.0, 600.0).is_none());
}

#[test]
fn positive_y_is_up_on_screen() {
    let (_, y, _) = project((0.0, 1.0, 0.0), 800.0, 600.0).expect("visible");
    assert!(y < 300.0);
}

#[test]
fn closer_points_are_larger() {
    let (_, _, near) = project((0.0, 0.0, 5.0), 800.0, 600.0).expect("visible");
    let (_, _, far) = project((0.0, 0.0, -20.0), 800.0, 600.0).expect("visible");
    assert!(near > far);
}

#[test]
fn rotate_y_quarter_turn() {
    let (x, y, z) = rotate_y(1.0, 2.0, 0.0, std::f64::consts::FRAC_PI_2);
    assert!(x.abs() < 1e-9);
    assert!((y - 2.0).abs() < 1e-9);
    assert!((z + 1.0).abs() < 1e-9);
}

#[test]
fn rotation_grows_with_time() {
    assert_eq!(rotation_at(0.0), 0.0);
    assert!((rotation_at(20.0) - 1.0).abs() < 1e-9);
}

#[test]
fn project_field_skips_culled_particles() {
    let field = ParticleField::generate(200, FIELD_SPREAD, 3);
    let visible = field.project(0.0, 800.0, 600.0).count();
    let in_front = field.particles().iter().filter(|p| CAMERA_Z - p.z > 0.01).count();
    assert_eq!(visible, in_front);
}

#[test]
fn hue_css_formats_degrees() {
    assert_eq!(hue_css(0.5, 0.6), "hsla(180, 100%, 50%, 0.6)");
    assert_eq!(hue_css(1.25, 1.0), "hsla(90, 100%, 50%, 1)");
}

#[test]
fn floating_shape_bobs_around_base() {
    let shape = FLOATING_SHAPES[0];
    assert_eq!(shape.position_at(0.0), shape.position);
    for t in [0.5, 1.0, 4.0, 10.0] {
        let (_, y, _) = shape.position_at(t);
        assert!((y - shape.position.1).abs() <= 0.5);
    }
}
