use std::{sync::atomic::Ordering, thread, time::Duration};

use crate::core::{
    capture::SilenceCapture,
    engine::{
        renderengine::{create_render_engine, StopButton},
        test::testobjects::{passthrough_engine, CountingStrategy, TestCapture},
    },
    parameters::{ParameterMap, RenderConfig},
    scene::{scene::Scene, sceneerror::SceneError},
};

#[test]
fn single_source_is_mirrored() {
    let (mut interface, mut engine, _disposer, _stop) = passthrough_engine(4);

    let mut scene = Scene::new();
    let a = scene.add_source(&ParameterMap::new());
    interface.update(&scene).unwrap();

    let mut capture = TestCapture::new();
    capture.set(a, &[1.0, 2.0, 3.0, 4.0]);

    engine.process_one_block(&mut capture);

    let node = engine.graph().node(a).unwrap();
    assert_eq!(node.output_samples(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn no_cross_talk_between_sources() {
    let (mut interface, mut engine, _disposer, _stop) = passthrough_engine(4);

    let mut scene = Scene::new();
    let params = ParameterMap::new();
    let a = scene.add_source(&params);
    let b = scene.add_source(&params);
    let c = scene.add_source(&params);
    interface.update(&scene).unwrap();

    let mut capture = TestCapture::new();
    capture.set(a, &[1.0; 4]);
    capture.set(b, &[2.0; 4]);
    capture.set(c, &[3.0; 4]);

    engine.process_one_block(&mut capture);

    assert_eq!(engine.graph().node(a).unwrap().output_samples(), &[1.0; 4]);
    assert_eq!(engine.graph().node(b).unwrap().output_samples(), &[2.0; 4]);
    assert_eq!(engine.graph().node(c).unwrap().output_samples(), &[3.0; 4]);
}

#[test]
fn edits_are_applied_between_blocks() {
    let (mut interface, mut engine, _disposer, _stop) = passthrough_engine(4);

    let mut scene = Scene::new();
    scene.add_source(&ParameterMap::new());
    interface.update(&scene).unwrap();

    // The queued addition is not visible until the next block starts
    assert_eq!(engine.graph().nodes().len(), 0);

    engine.process_one_block(&mut SilenceCapture);
    assert_eq!(engine.graph().nodes().len(), 1);
}

#[test]
fn removed_source_is_not_dispatched_again() {
    let (mut interface, mut engine, disposer, _stop) = passthrough_engine(4);

    let mut scene = Scene::new();
    let params = ParameterMap::new();
    let a = scene.add_source(&params);
    let b = scene.add_source(&params);
    interface.update(&scene).unwrap();

    let mut capture = TestCapture::new();
    capture.set(a, &[1.0; 4]);
    capture.set(b, &[2.0; 4]);
    engine.process_one_block(&mut capture);
    assert_eq!(engine.graph().nodes().len(), 2);

    scene.remove_source(a).unwrap();
    interface.update(&scene).unwrap();

    capture.set(b, &[5.0; 4]);
    engine.process_one_block(&mut capture);
    disposer.clear();

    assert_eq!(engine.graph().nodes().len(), 1);
    assert!(engine.graph().node(a).is_none());
    assert_eq!(engine.graph().node(b).unwrap().output_samples(), &[5.0; 4]);
}

#[test]
fn routing_prefix_leaves_mirroring_unchanged() {
    let (mut interface, mut engine, _disposer, _stop) = passthrough_engine(4);

    let mut params = ParameterMap::new();
    params.set("system_output_prefix", "out");

    let mut scene = Scene::new();
    let a = scene.add_source(&params);
    interface.update(&scene).unwrap();

    let mut capture = TestCapture::new();
    capture.set(a, &[1.0, 2.0, 3.0, 4.0]);
    engine.process_one_block(&mut capture);

    assert_eq!(
        engine.graph().node(a).unwrap().output_samples(),
        &[1.0, 2.0, 3.0, 4.0]
    );
}

#[test]
fn setup_runs_once_before_processing() {
    let stop_button = StopButton::new();
    let (strategy, setup_calls, process_calls) = CountingStrategy::new();
    let (mut interface, mut engine, _disposer) = create_render_engine(
        Box::new(strategy),
        RenderConfig::new(8, 48_000),
        &stop_button,
    );

    let mut scene = Scene::new();
    scene.add_source(&ParameterMap::new());
    interface.update(&scene).unwrap();

    engine.process_one_block(&mut SilenceCapture);
    engine.process_one_block(&mut SilenceCapture);
    engine.process_one_block(&mut SilenceCapture);

    assert_eq!(setup_calls.load(Ordering::Relaxed), 1);
    assert_eq!(process_calls.load(Ordering::Relaxed), 3);
}

#[test]
fn report_reflects_dispatch() {
    let (mut interface, mut engine, _disposer, _stop) = passthrough_engine(4);

    let mut scene = Scene::new();
    let params = ParameterMap::new();
    scene.add_source(&params);
    scene.add_source(&params);
    interface.update(&scene).unwrap();

    engine.process_one_block(&mut SilenceCapture);
    engine.process_one_block(&mut SilenceCapture);

    assert_eq!(interface.report().blocks_processed(), 2);
    assert_eq!(interface.report().sources_rendered(), 2);
}

#[test]
fn update_fails_for_invalid_scene() {
    let (mut interface, _engine, _disposer, _stop) = passthrough_engine(4);

    let mut scene = Scene::new();
    let a = scene.add_source(&ParameterMap::new());
    let output_id = scene.source(a).unwrap().output().unwrap();

    // Craft a broken scene: clone, then remove the source but leave the
    // output registered
    let mut broken = Scene::new();
    broken.insert_output(scene.output(output_id).unwrap().clone());

    assert_eq!(
        interface.update(&broken),
        Err(SceneError::OrphanOutput(output_id))
    );
}

#[test]
fn update_fails_after_engine_is_gone() {
    let (mut interface, engine, _disposer, _stop) = passthrough_engine(4);
    drop(engine);

    let mut scene = Scene::new();
    scene.add_source(&ParameterMap::new());

    assert_eq!(interface.update(&scene), Err(SceneError::EngineStopped));
}

#[test]
fn run_loop_stops_when_interface_is_dropped() {
    let (interface, engine, _disposer, _stop) = passthrough_engine(64);

    let handle = thread::spawn(move || {
        let mut capture = SilenceCapture;
        engine.run(&mut capture);
    });

    thread::sleep(Duration::from_millis(20));
    let report_blocks = interface.report().blocks_processed();
    assert!(report_blocks >= 1);

    // Dropping the interface presses the stop button
    drop(interface);
    handle.join().unwrap();
}
