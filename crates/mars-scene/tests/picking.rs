use glam::Vec2;
use mars_config::Config;
use mars_input::{InputEvent, PointerEvent, WheelEvent};
use mars_scene::{PickHit, SceneContext, Selection, find_site};
use mars_surface::generate_surface_maps;

const FRAME: f32 = 1.0 / 60.0;

fn scene() -> SceneContext {
    let mut config = Config::default();
    config.orbit.time_scale = 0.0;
    let mut scene = SceneContext::new(&config);
    scene.set_viewport(800, 600);
    scene
        .attach_surface(generate_surface_maps(42, 64, 32).unwrap())
        .unwrap();
    scene
}

fn settle(scene: &mut SceneContext) {
    for _ in 0..240 {
        scene.tick(FRAME).unwrap();
    }
}

fn click(scene: &mut SceneContext, pixel: Vec2) -> Option<PickHit> {
    let event = PointerEvent::primary(pixel.x, pixel.y);
    scene.handle_pointer(&InputEvent::PointerDown(event));
    scene.handle_pointer(&InputEvent::PointerUp(event))
}

#[test]
fn clicking_a_site_marker_selects_it() {
    let mut scene = scene();
    scene.select_site("gale-crater").unwrap();
    settle(&mut scene);
    scene.clear_selection();

    let site = find_site("gale-crater").unwrap();
    let ndc = scene.camera().project(site.position(1.0)).unwrap();
    let pixel = scene.ndc_to_pixel(ndc);

    assert_eq!(click(&mut scene, pixel), Some(PickHit::Site("gale-crater")));
    assert_eq!(scene.selection(), Some(Selection::Site(site)));
    assert!(scene.controller().is_flying());
}

#[test]
fn far_side_site_is_not_pickable() {
    let mut scene = scene();
    scene.select_site("olympus-mons").unwrap();
    settle(&mut scene);

    // Hellas sits on the opposite hemisphere from Olympus Mons.
    let hellas = find_site("hellas-planitia").unwrap();
    let direction = hellas.position(1.0);
    assert!(direction.dot(scene.camera().position) < 0.0);

    for px in [Vec2::new(400.0, 300.0), Vec2::new(420.0, 280.0)] {
        let hit = scene.pick(scene.pixel_to_ndc(px));
        assert_ne!(hit, Some(PickHit::Site("hellas-planitia")));
    }
}

#[test]
fn wheel_during_flight_is_ignored_then_applies() {
    let mut scene = scene();
    scene.select_site("jezero-crater").unwrap();
    let before = scene.controller().spherical().radius;
    scene.handle_wheel(&WheelEvent { notches: 5.0 });
    settle(&mut scene);
    assert!((scene.controller().spherical().radius - before).abs() < 1e-3);

    scene.handle_pointer(&InputEvent::Wheel(WheelEvent { notches: 5.0 }));
    scene.tick(FRAME).unwrap();
    assert!(scene.controller().spherical().radius < before);
}

#[test]
fn dragging_never_escapes_polar_bounds() {
    let mut scene = scene();
    let (min_polar, max_polar) = {
        let options = scene.controller().options();
        (options.min_polar, options.max_polar)
    };
    for dy in [-4000.0, 4000.0, -4000.0] {
        scene.handle_pointer(&InputEvent::PointerDown(PointerEvent::primary(400.0, 300.0)));
        scene.handle_pointer(&InputEvent::PointerMove(PointerEvent::primary(400.0, 300.0 + dy)));
        scene.handle_pointer(&InputEvent::PointerUp(PointerEvent::primary(400.0, 300.0 + dy)));
        for _ in 0..30 {
            scene.tick(FRAME).unwrap();
            let polar = scene.controller().spherical().polar;
            assert!(polar >= min_polar - 1e-4 && polar <= max_polar + 1e-4, "polar {polar}");
        }
    }
}

#[test]
fn site_fly_to_stays_outside_the_globe() {
    let mut scene = scene();
    let min_distance = scene.controller().options().min_distance;
    scene.select_site("jezero-crater").unwrap();

    let mut lowest = f32::INFINITY;
    while scene.controller().is_flying() {
        scene.tick(FRAME).unwrap();
        lowest = lowest.min(scene.controller().spherical().radius);
    }
    assert!(lowest >= min_distance - 1e-4, "camera dipped to radius {lowest}");

    let site = find_site("jezero-crater").unwrap();
    let toward_site = scene.camera().position.normalize().dot(site.position(1.0).normalize());
    assert!(toward_site > 0.999, "camera not over the site: {toward_site}");
}
