/// A contiguous block of audio samples. The length is fixed by the
/// renderer's block-size configuration when the buffer is allocated on
/// the control path and never changes afterwards, so the audio path can
/// read and copy it without any bounds surprises or reallocation.
pub struct BlockBuffer {
    samples: Vec<f32>,
}

impl BlockBuffer {
    /// Allocate a zeroed buffer of exactly `block_size` samples.
    /// Control path only.
    pub fn new(block_size: usize) -> BlockBuffer {
        BlockBuffer {
            samples: vec![0.0; block_size],
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.samples
    }

    /// Element-wise copy of one full block, preserving order. Both
    /// buffers must have been allocated with the same block size.
    pub fn copy_from(&mut self, other: &BlockBuffer) {
        debug_assert_eq!(self.samples.len(), other.samples.len());
        self.samples.copy_from_slice(&other.samples);
    }
}
