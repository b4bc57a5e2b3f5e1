use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        mpsc::{sync_channel, Receiver, SyncSender, TrySendError},
        Arc,
    },
    thread::{self, JoinHandle},
    time::{Duration, Instant},
};

use thread_priority::{set_current_thread_priority, ThreadPriority};
use tracing::{info, warn};

use crate::core::{
    capture::AudioCapture,
    parameters::RenderConfig,
    renderer::strategy::RenderStrategy,
    scene::{scene::Scene, sceneerror::SceneError},
};

use super::{
    enginereport::RenderEngineReport,
    garbage::{new_garbage_disposer, Garbage, GarbageChute, GarbageDisposer},
    rendergraph::RenderGraph,
    rendergraphedit::RenderGraphEdit,
    scenecompiler::diff_scene,
};

/// A thread-safe signaling mechanism used to communicate
/// 'keep going' or 'stop', to allow loops on multiple threads to
/// terminate together. Uses an atomic boolean internally.
pub struct StopButton(Arc<AtomicBool>);

impl StopButton {
    /// Create a new StopButton in its default, not-yet-stopped
    /// state. To share the same stop button, simply clone it.
    pub fn new() -> StopButton {
        StopButton(Arc::new(AtomicBool::new(false)))
    }

    /// Push the stop button. After this point, all clones of the
    /// stop button on all threads will see 'was_stopped()'
    /// return true.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Check whether the stop button has been pushed. Use this in
    /// a loop condition to know when a different thread wants you
    /// to exit the loop.
    pub fn was_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Clone for StopButton {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl Default for StopButton {
    fn default() -> StopButton {
        StopButton::new()
    }
}

/// Constructs a new render engine, an interface for it, and a garbage
/// disposer.
///
/// The render engine itself is intended for direct audio processing on a
/// high-priority thread via its `run` method. Use the provided stop
/// button to cause the `run` method to exit.
///
/// The interface receives scene changes from the control thread, compiles
/// them into preallocated render graph edits, and ships those to the
/// audio thread over a bounded queue.
///
/// The garbage disposer receives stale nodes from the engine that require
/// heap deallocation, which is not realtime-safe to perform on the audio
/// thread. It needs to be emptied periodically while scene changes are
/// being made.
pub fn create_render_engine(
    strategy: Box<dyn RenderStrategy>,
    config: RenderConfig,
    stop_button: &StopButton,
) -> (RenderEngineInterface, RenderEngine, GarbageDisposer) {
    let edit_queue_size = 1024;
    let (edit_sender, edit_receiver) = sync_channel::<RenderGraphEdit>(edit_queue_size);
    let (garbage_chute, garbage_disposer) = new_garbage_disposer();
    let report = Arc::new(RenderEngineReport::new());

    let interface = RenderEngineInterface {
        current_scene: Scene::new(),
        config,
        stop_button: stop_button.clone(),
        edit_queue: edit_sender,
        report: Arc::clone(&report),
    };

    let engine = RenderEngine {
        graph: RenderGraph::new(),
        strategy,
        config,
        stop_button: stop_button.clone(),
        edit_queue: edit_receiver,
        deadline_warning_issued: false,
        setup_done: false,
        garbage_chute,
        report,
    };

    (interface, engine, garbage_disposer)
}

/// An intermediate object between a series of changing Scene instances
/// and the RenderEngine running on a separate thread, which is intended
/// to audibly model those changes as they come. The interface compiles
/// scene changes into render graph edits and sends them to the audio
/// thread, where they are patched in without any heap allocation or
/// deallocation on the audio thread.
///
/// Note that dropping the RenderEngineInterface will cause the
/// RenderEngine to stop running.
pub struct RenderEngineInterface {
    current_scene: Scene,
    config: RenderConfig,
    stop_button: StopButton,
    edit_queue: SyncSender<RenderGraphEdit>,
    report: Arc<RenderEngineReport>,
}

impl RenderEngineInterface {
    /// Update the RenderEngine on the separate thread to render the
    /// given scene. Changes between this and the most recently applied
    /// scene are compiled and sent to the audio thread. The scene must
    /// pass validation; a structurally broken scene is never shipped.
    pub fn update(&mut self, new_scene: &Scene) -> Result<(), SceneError> {
        new_scene.validate()?;

        let edits = diff_scene(&self.current_scene, new_scene, &self.config);

        for edit in edits {
            match self.edit_queue.try_send(edit) {
                Err(TrySendError::Full(_)) => panic!("Render graph edit queue overflow!"),
                Err(TrySendError::Disconnected(_)) => {
                    info!("render thread is no longer running, dropping scene update");
                    return Err(SceneError::EngineStopped);
                }
                Ok(_) => (),
            }
        }

        self.current_scene = new_scene.clone();

        Ok(())
    }

    pub fn report(&self) -> &RenderEngineReport {
        &self.report
    }
}

impl Drop for RenderEngineInterface {
    fn drop(&mut self) {
        self.stop_button.stop();
    }
}

/// RenderEngine is directly responsible for invoking the rendering
/// strategy to produce audio on the high-priority audio thread. Simply
/// call the `run()` method on a high-priority thread, and it will
/// perpetually render blocks until the stop button is pressed (for
/// example, if the RenderEngineInterface it was created with is
/// dropped).
pub struct RenderEngine {
    /// The render graph, containing all compiled source/output pairs
    /// and their block buffers
    graph: RenderGraph,

    /// The rendering strategy invoked once per block
    strategy: Box<dyn RenderStrategy>,

    /// Block size and sample rate, fixed for the run
    config: RenderConfig,

    /// The stop button describing when to exit the audio loop due
    /// to things happening on other threads
    stop_button: StopButton,

    /// Inbound edits to the render graph, received from diffing and
    /// compiling scenes in the associated RenderEngineInterface
    edit_queue: Receiver<RenderGraphEdit>,

    /// Has a warning been issued that recent blocks are behind
    /// schedule? Used to prevent spam
    deadline_warning_issued: bool,

    /// Has the strategy's one-time setup hook run yet?
    setup_done: bool,

    /// Garbage chute for sending away stale nodes that are being
    /// removed, to avoid heap deallocation happening on the audio
    /// thread
    garbage_chute: GarbageChute,

    /// Timing figures shared with the control thread
    report: Arc<RenderEngineReport>,
}

impl RenderEngine {
    /// Render audio in realtime. Internally, this receives edits to the
    /// render graph from the RenderEngineInterface and invokes the
    /// rendering strategy once per block according to a high-precision
    /// timer.
    pub fn run(mut self, capture: &mut dyn AudioCapture) {
        info!(
            "render engine starting with strategy \"{}\"",
            self.strategy.name()
        );

        let block_period = self.block_period();
        let mut deadline = Instant::now() + block_period;

        loop {
            self.process_one_block(capture);
            if self.stop_button.was_stopped() {
                break;
            }

            let now = Instant::now();
            if now > deadline {
                // If we just fell behind schedule, issue a warning
                // because audio dropouts are happening.
                if !self.deadline_warning_issued {
                    warn!("render engine missed a block deadline");
                    self.deadline_warning_issued = true;
                }
            } else {
                // If we're on schedule, sleep for precisely the
                // amount of time remaining until the next block
                // needs to start.
                self.deadline_warning_issued = false;
                let delta = deadline.duration_since(now);
                spin_sleep::sleep(delta);
            }
            deadline += block_period;
        }

        // Throw out the render graph to ensure node deallocation
        // happens on the control thread
        self.graph.toss(&self.garbage_chute);
    }

    /// Render exactly one block: run the strategy's one-time setup if it
    /// hasn't run yet, incorporate pending edits, fill source buffers
    /// from the capture stage, and dispatch the strategy across the node
    /// list. Hosts whose audio driver delivers its own periodic callback
    /// call this directly instead of `run`.
    pub fn process_one_block(&mut self, capture: &mut dyn AudioCapture) {
        if !self.setup_done {
            // Called once before processing begins, never per block.
            // Strategies build algorithm-specific scene state here.
            self.strategy.setup(&mut self.graph);
            self.setup_done = true;
        }

        self.flush_edits();

        let start = Instant::now();
        self.graph.capture_inputs(capture);
        self.strategy.process_block(&mut self.graph);
        self.report
            .publish(start.elapsed(), self.block_period(), self.graph.nodes().len());
    }

    /// Read access to the render graph, e.g. for pulling rendered
    /// output buffers after `process_one_block`
    pub fn graph(&self) -> &RenderGraph {
        &self.graph
    }

    /// Receive and incorporate any edits to the render graph from the
    /// edit queue. Stale nodes go down the garbage chute.
    fn flush_edits(&mut self) {
        while let Ok(edit) = self.edit_queue.try_recv() {
            self.graph.make_edit(edit, &self.garbage_chute);
        }
    }

    fn block_period(&self) -> Duration {
        let blocks_per_sec = (self.config.sample_rate as f64) / (self.config.block_size as f64);
        Duration::from_micros((1_000_000.0 / blocks_per_sec) as u64)
    }
}

/// Spawn the engine's `run` loop on a dedicated thread, raised to the
/// highest available priority. A failure to raise the priority is only
/// logged; the engine still runs.
pub fn spawn_engine_thread(
    engine: RenderEngine,
    mut capture: Box<dyn AudioCapture>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("soundscene-render".to_string())
        .spawn(move || {
            if let Err(e) = set_current_thread_priority(ThreadPriority::Max) {
                warn!("failed to raise render thread priority: {:?}", e);
            }
            engine.run(capture.as_mut());
        })
}
