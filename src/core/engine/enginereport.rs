use std::{
    sync::atomic::{AtomicUsize, Ordering},
    time::Duration,
};

use atomic_float::AtomicF32;

/// Timing and load figures published by the audio thread after each
/// block and read from the control thread. Everything is a relaxed
/// atomic; readers see a recent block, not necessarily the same one
/// across fields.
pub struct RenderEngineReport {
    blocks_processed: AtomicUsize,
    sources_rendered: AtomicUsize,
    last_block_micros: AtomicUsize,
    load: AtomicF32,
}

impl RenderEngineReport {
    pub(crate) fn new() -> RenderEngineReport {
        RenderEngineReport {
            blocks_processed: AtomicUsize::new(0),
            sources_rendered: AtomicUsize::new(0),
            last_block_micros: AtomicUsize::new(0),
            load: AtomicF32::new(0.0),
        }
    }

    pub(crate) fn publish(&self, block_time: Duration, block_period: Duration, sources: usize) {
        self.blocks_processed.fetch_add(1, Ordering::Relaxed);
        self.sources_rendered.store(sources, Ordering::Relaxed);
        self.last_block_micros
            .store(block_time.as_micros() as usize, Ordering::Relaxed);
        self.load.store(
            block_time.as_secs_f32() / block_period.as_secs_f32(),
            Ordering::Relaxed,
        );
    }

    /// Total number of blocks dispatched since the engine started
    pub fn blocks_processed(&self) -> usize {
        self.blocks_processed.load(Ordering::Relaxed)
    }

    /// Number of sources rendered during the most recent block
    pub fn sources_rendered(&self) -> usize {
        self.sources_rendered.load(Ordering::Relaxed)
    }

    /// Wall-clock time spent processing the most recent block, in
    /// microseconds
    pub fn last_block_micros(&self) -> usize {
        self.last_block_micros.load(Ordering::Relaxed)
    }

    /// Fraction of the block deadline spent processing the most recent
    /// block. Values approaching 1.0 mean dropouts are imminent.
    pub fn load(&self) -> f32 {
        self.load.load(Ordering::Relaxed)
    }
}
