use crate::core::scene::source::SourceId;

/// The upstream mechanism that fills each source's buffer with the
/// current block of input audio. Called once per source per block on the
/// audio path, so implementations must not allocate, block, or otherwise
/// take unbounded time.
pub trait AudioCapture: Send {
    fn capture(&mut self, source_id: SourceId, buffer: &mut [f32]);
}

/// Capture stage that produces silence for every source. Useful for
/// hosts that drive source buffers through some other mechanism, and as
/// a stand-in while no input device is attached.
pub struct SilenceCapture;

impl AudioCapture for SilenceCapture {
    fn capture(&mut self, _source_id: SourceId, buffer: &mut [f32]) {
        for s in buffer.iter_mut() {
            *s = 0.0;
        }
    }
}
