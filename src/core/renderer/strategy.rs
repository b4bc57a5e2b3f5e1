use crate::core::engine::rendergraph::RenderGraph;

/// A rendering algorithm, selected at the composition root and driven by
/// the render engine. The engine owns the node list and its buffers; a
/// strategy decides what happens to them each block.
pub trait RenderStrategy: Send {
    /// Fixed display name consumed by hosting CLI/GUI layers purely for
    /// labeling. No behavioral effect.
    fn name(&self) -> &'static str;

    /// Called exactly once before processing begins, never per block.
    /// Strategies that need routing or spatialization state derived from
    /// the reproduction setup build it here.
    fn setup(&mut self, graph: &mut RenderGraph);

    /// Render one block across the node list. Must visit every node
    /// exactly once, in registration order, within the real-time
    /// deadline: no allocation, no blocking, no error paths.
    fn process_block(&mut self, graph: &mut RenderGraph);
}
