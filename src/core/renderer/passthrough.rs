use crate::core::engine::rendergraph::RenderGraph;

use super::strategy::RenderStrategy;

/// The simplest rendering strategy: each source's block is mirrored
/// unmodified into its dedicated output. No spatialization, no mixing.
pub struct PassthroughRenderer;

impl PassthroughRenderer {
    pub fn new() -> PassthroughRenderer {
        PassthroughRenderer
    }
}

impl Default for PassthroughRenderer {
    fn default() -> PassthroughRenderer {
        PassthroughRenderer::new()
    }
}

impl RenderStrategy for PassthroughRenderer {
    fn name(&self) -> &'static str {
        "Pass-Through-Renderer"
    }

    fn setup(&mut self, _graph: &mut RenderGraph) {
        // A plain mirror needs no reproduction setup
    }

    fn process_block(&mut self, graph: &mut RenderGraph) {
        for node in graph.nodes_mut() {
            node.process();
        }
    }
}
