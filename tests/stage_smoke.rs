use physics_stage::simulation::LoopState;
use physics_stage::{ContainerMetrics, StageConfig, StageCore};

#[test]
fn stage_smoke_mount_tick_unmount() {
    let config = StageConfig::from_json(
        r#"{ "gravY": 1, "sleeping": true, "debug": true,
             "wallOptions": { "top": false, "bottom": true, "left": true, "right": true } }"#,
    )
    .expect("config should parse");

    let mut stage = StageCore::new(config);
    stage.set_children(3);
    assert_eq!(stage.mount(Some(ContainerMetrics::new(640.0, 480.0))), Ok(true));
    assert_eq!(stage.body_count(), 3);

    let ids: Vec<u32> = (0..3)
        .map(|i| stage.spawn_rectangle(200.0 + 80.0 * i as f32, 100.0, 40.0, 40.0))
        .collect();
    for (slot, id) in ids.iter().enumerate() {
        assert!(stage.bind_child(slot, *id));
    }

    for _ in 0..300 {
        assert!(stage.tick());
    }
    assert_eq!(stage.frame(), 300);
    assert!(!stage.debug_commands().is_empty());

    let slots = stage.slot_transforms();
    assert_eq!(slots.len(), 3 * 4);
    for record in slots.chunks(4) {
        // Boxes rest on the bottom wall (top edge at 480 - 25).
        assert!(record[2] > 400.0 && record[2] < 456.0, "y = {}", record[2]);
    }

    stage.unmount();
    assert_eq!(stage.frame_loop().state(), LoopState::Cancelled);
    assert!(!stage.tick());
    assert!(stage.debug_commands().is_empty());
}

#[test]
fn stage_smoke_perf_step() {
    let mut stage = StageCore::new(StageConfig::default());
    stage.mount(Some(ContainerMetrics::new(128.0, 64.0))).unwrap();
    stage.enable_perf_metrics(true);
    for x in 0..4 {
        stage.spawn_circle(40.0 + 15.0 * x as f32, 32.0, 5.0);
    }
    stage.tick();
    let stats = stage.perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert_eq!(stats.bodies(), 8);
}
