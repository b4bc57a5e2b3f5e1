use crate::core::{
    blockbuffer::BlockBuffer,
    scene::{output::OutputId, source::SourceId},
};

/// The capture side of a compiled source/output pair: holds the block of
/// input samples most recently produced for one source. The buffer is
/// filled by the capture stage at the start of each block; the source
/// itself performs no computation.
pub struct CompiledSource {
    id: SourceId,
    buffer: BlockBuffer,
}

impl CompiledSource {
    pub(crate) fn new(id: SourceId, block_size: usize) -> CompiledSource {
        CompiledSource {
            id,
            buffer: BlockBuffer::new(block_size),
        }
    }

    pub fn id(&self) -> SourceId {
        self.id
    }

    pub fn buffer(&self) -> &BlockBuffer {
        &self.buffer
    }

    pub(crate) fn buffer_mut(&mut self) -> &mut BlockBuffer {
        &mut self.buffer
    }
}

/// The rendering side of a compiled source/output pair. Mirrors its
/// source's current block into its own buffer, with no mixing, scaling,
/// or filtering.
pub struct CompiledOutput {
    id: OutputId,
    source: Option<SourceId>,
    buffer: BlockBuffer,
}

impl CompiledOutput {
    pub(crate) fn new(
        id: OutputId,
        source: Option<SourceId>,
        block_size: usize,
    ) -> CompiledOutput {
        CompiledOutput {
            id,
            source,
            buffer: BlockBuffer::new(block_size),
        }
    }

    pub fn id(&self) -> OutputId {
        self.id
    }

    /// Copy one full block from the given source. Bounded time, no
    /// allocation, no error path.
    ///
    /// Panics if the back-reference is unset or names a different
    /// source. That means processing was requested before construction
    /// finished or after destruction began, and silently producing wrong
    /// audio would be worse than stopping.
    pub fn process(&mut self, source: &CompiledSource) {
        assert_eq!(
            self.source,
            Some(source.id()),
            "output #{} processed with a missing or stale source back-reference",
            self.id.value()
        );
        self.buffer.copy_from(source.buffer());
    }

    pub fn buffer(&self) -> &BlockBuffer {
        &self.buffer
    }
}

/// One source/output pair as seen by the audio thread, with both block
/// buffers preallocated on the control path. Nodes are stored by the
/// render graph in registration order and invoked exactly once per
/// block.
pub struct RenderNode {
    source: CompiledSource,
    output: CompiledOutput,
}

impl RenderNode {
    pub(crate) fn new(source_id: SourceId, output_id: OutputId, block_size: usize) -> RenderNode {
        RenderNode {
            source: CompiledSource::new(source_id, block_size),
            output: CompiledOutput::new(output_id, Some(source_id), block_size),
        }
    }

    pub fn source_id(&self) -> SourceId {
        self.source.id()
    }

    pub fn output_id(&self) -> OutputId {
        self.output.id()
    }

    /// Run the output's mirror copy for the current block.
    pub fn process(&mut self) {
        self.output.process(&self.source);
    }

    pub fn source_samples(&self) -> &[f32] {
        self.source.buffer().samples()
    }

    pub fn output_samples(&self) -> &[f32] {
        self.output.buffer().samples()
    }

    pub(crate) fn capture_buffer_mut(&mut self) -> &mut [f32] {
        self.source.buffer_mut().samples_mut()
    }
}
