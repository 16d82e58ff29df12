use super::*;
use crate::domain::WallOptions;
use crate::systems::debug_render::STROKE_STATIC;
use crate::systems::body::Shape;
use crate::core::Vec2;

fn metrics() -> Option<ContainerMetrics> {
    Some(ContainerMetrics::new(300.0, 200.0))
}

#[test]
fn new_builds_engine_from_config() {
    let stage = StageCore::new(StageConfig {
        grav_x: 0.25,
        grav_y: -1.0,
        sleeping: true,
        ..StageConfig::default()
    });
    assert!(stage.engine().enable_sleeping());
    assert_eq!(stage.engine().gravity.x, 0.25);
    assert_eq!(stage.engine().gravity.y, -1.0);
    assert_eq!(stage.body_count(), 0);
    assert_eq!(stage.lifecycle(), Lifecycle::Created);

    let plain = StageCore::new(StageConfig::default());
    assert!(!plain.engine().enable_sleeping());
}

#[test]
fn mount_adds_one_static_body_per_enabled_wall() {
    for mask in 0u8..16 {
        let walls = WallOptions {
            top: mask & 1 != 0,
            bottom: mask & 2 != 0,
            left: mask & 4 != 0,
            right: mask & 8 != 0,
        };
        let mut stage = StageCore::new(StageConfig { wall_options: walls, ..StageConfig::default() });
        assert_eq!(stage.mount(metrics()), Ok(true));

        let expected = mask.count_ones() as usize;
        assert_eq!(stage.body_count(), expected);
        assert_eq!(stage.engine().world.static_count(), expected);
        assert_eq!(stage.wall_ids().len(), expected);
    }
}

#[test]
fn top_wall_spans_container_width() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();

    let top = stage.engine().world.get(stage.wall_ids()[0]).unwrap();
    assert_eq!(top.position, Vec2::new(150.0, 0.0));
    assert_eq!(top.shape, Shape::Rect { width: 300.0, height: 50.0 });
}

#[test]
fn mount_without_container_does_nothing() {
    let mut stage = StageCore::new(StageConfig { debug: true, ..StageConfig::default() });
    assert_eq!(stage.mount(None), Ok(false));
    assert_eq!(stage.body_count(), 0);
    assert!(stage.renderer().is_none());
    assert!(!stage.frame_loop().is_running());
    assert!(!stage.tick());
    assert_eq!(stage.frame(), 0);
}

#[test]
fn mount_twice_is_rejected() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    assert_eq!(stage.mount(metrics()), Err(StageError::AlreadyMounted));
    assert_eq!(stage.body_count(), 4);
}

#[test]
fn ensure_mountable_only_before_first_mount() {
    let mut stage = StageCore::new(StageConfig::default());
    assert!(stage.ensure_mountable().is_ok());
    assert_eq!(stage.mount(None), Ok(false));
    assert!(stage.ensure_mountable().is_ok());

    stage.mount(metrics()).unwrap();
    assert_eq!(stage.ensure_mountable(), Err(StageError::AlreadyMounted));
    stage.unmount();
    assert_eq!(stage.ensure_mountable(), Err(StageError::AlreadyMounted));
}

#[test]
fn negative_size_rectangle_steps_without_panicking() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    let rect = stage.spawn_rectangle(100.0, 100.0, -20.0, 20.0);
    let ball = stage.spawn_circle(100.0, 100.0, 15.0);

    for _ in 0..10 {
        assert!(stage.tick());
    }
    assert_eq!(stage.frame(), 10);
    for id in [rect, ball] {
        let body = stage.engine().world.get(id).unwrap();
        assert!(body.position.x.is_finite() && body.position.y.is_finite());
    }
}

#[test]
fn debug_off_attaches_no_renderer() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    assert!(stage.renderer().is_none());
    assert!(stage.tick());
    assert!(stage.debug_commands().is_empty());
}

#[test]
fn debug_on_runs_renderer_at_client_size() {
    let mut stage = StageCore::new(StageConfig { debug: true, ..StageConfig::default() });
    stage
        .mount(Some(ContainerMetrics::new(300.5, 200.0).with_client_size(300, 200)))
        .unwrap();

    let renderer = stage.renderer().expect("debug renderer attached");
    assert!(renderer.is_running());
    assert_eq!(renderer.options().width, 300);
    assert_eq!(renderer.options().height, 200);
    assert!(renderer.options().show_velocity);
    assert!(renderer.options().show_angle_indicator);

    assert!(stage.tick());
    // clear + 4 wall outlines + 4 angle lines (walls have no velocity line)
    assert_eq!(stage.debug_commands().len(), 9);
    assert!(matches!(stage.debug_commands()[1], DrawCommand::Rect { stroke: STROKE_STATIC, .. }));
}

#[test]
fn one_step_per_delivered_frame() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    assert!(stage.frame_loop().is_pending());

    for n in 1..=25u64 {
        assert!(stage.tick());
        assert_eq!(stage.frame(), n);
        assert_eq!(stage.frame_loop().delivered(), n);
        assert!(stage.frame_loop().is_pending());
    }
}

#[test]
fn unmount_cancels_loop_and_stops_renderer() {
    let mut stage = StageCore::new(StageConfig { debug: true, ..StageConfig::default() });
    stage.mount(metrics()).unwrap();
    stage.tick();
    stage.tick();

    stage.unmount();
    assert_eq!(stage.lifecycle(), Lifecycle::Unmounted);
    assert_eq!(stage.frame_loop().state(), LoopState::Cancelled);
    assert!(!stage.frame_loop().is_pending());
    assert!(!stage.renderer().unwrap().is_running());

    // A frame already in flight must not advance the world.
    assert!(!stage.tick());
    assert_eq!(stage.frame(), 2);

    stage.unmount();
    assert_eq!(stage.lifecycle(), Lifecycle::Unmounted);
}

#[test]
fn ball_settles_on_bottom_wall() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    let ball = stage.spawn_circle(150.0, 100.0, 10.0);

    for _ in 0..600 {
        stage.tick();
    }

    let body = stage.engine().world.get(ball).unwrap();
    // Bottom wall top edge sits at 200 - 25.
    assert!(body.position.y > 160.0 && body.position.y < 176.0, "y = {}", body.position.y);
    assert!(body.velocity.y.abs() < 0.5);
    assert!(!body.is_sleeping);
}

#[test]
fn resting_ball_falls_asleep_when_enabled() {
    let mut stage = StageCore::new(StageConfig { sleeping: true, ..StageConfig::default() });
    stage.mount(metrics()).unwrap();
    let ball = stage.spawn_circle(150.0, 160.0, 10.0);

    for _ in 0..600 {
        stage.tick();
    }

    assert!(stage.engine().world.get(ball).unwrap().is_sleeping);
}

#[test]
fn remove_body_keeps_walls_and_unbinds_slots() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    stage.set_children(2);
    let box_id = stage.spawn_rectangle(100.0, 100.0, 20.0, 20.0);

    assert!(stage.bind_child(1, box_id));
    assert!(!stage.bind_child(5, box_id));
    assert!(!stage.bind_child(0, 999));
    assert_eq!(stage.slot_transforms(), vec![1.0, 100.0, 100.0, 0.0]);

    assert!(!stage.remove_body(stage.wall_ids()[0]));
    assert!(stage.remove_body(box_id));
    assert!(!stage.remove_body(box_id));
    assert_eq!(stage.slots().body_for(1), None);
    assert!(stage.slot_transforms().is_empty());
}

#[test]
fn body_transforms_skip_walls() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    let a = stage.spawn_circle(50.0, 50.0, 5.0);
    let b = stage.spawn_rectangle(80.0, 40.0, 10.0, 10.0);

    let buf = stage.body_transforms();
    assert_eq!(buf.len(), 2 * BODY_STRIDE);
    assert_eq!(buf[0], a as f32);
    assert_eq!(buf[4], b as f32);
    assert_eq!(&buf[5..7], &[80.0, 40.0]);
}

#[test]
fn perf_stats_fill_when_enabled() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(metrics()).unwrap();
    stage.spawn_circle(150.0, 100.0, 10.0);

    stage.tick();
    assert_eq!(stage.perf_stats().bodies(), 0);

    stage.enable_perf_metrics(true);
    stage.tick();
    let stats = stage.perf_stats();
    assert_eq!(stats.bodies(), 5);
    assert_eq!(stats.static_bodies(), 4);
    assert_eq!(stats.frame(), 2);
    assert!(stats.step_ms() >= 0.0);
}

#[test]
fn set_gravity_reaches_engine() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.set_gravity(0.0, -1.0);
    assert_eq!(stage.engine().gravity.y, -1.0);
    assert_eq!(stage.config().grav_y, -1.0);
}
