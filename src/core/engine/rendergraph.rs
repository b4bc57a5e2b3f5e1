use crate::core::{capture::AudioCapture, scene::source::SourceId};

use super::{
    garbage::{Garbage, GarbageChute},
    rendergraphedit::RenderGraphEdit,
    rendernode::RenderNode,
};

/// The audio thread's view of the scene: compiled source/output pairs in
/// registration order. The graph is owned exclusively by the audio
/// thread; all mutation happens through pre-built edits applied between
/// blocks, and anything removed is tossed down the garbage chute rather
/// than dropped here.
pub struct RenderGraph {
    nodes: Vec<Box<RenderNode>>,
}

impl RenderGraph {
    pub(crate) fn new() -> RenderGraph {
        RenderGraph { nodes: Vec::new() }
    }

    /// The nodes in registration order
    pub fn nodes(&self) -> &[Box<RenderNode>] {
        &self.nodes
    }

    pub fn nodes_mut(&mut self) -> &mut [Box<RenderNode>] {
        &mut self.nodes
    }

    pub fn node(&self, source_id: SourceId) -> Option<&RenderNode> {
        self.nodes
            .iter()
            .find(|n| n.source_id() == source_id)
            .map(|n| &**n)
    }

    pub(crate) fn make_edit(&mut self, edit: RenderGraphEdit, garbage_chute: &GarbageChute) {
        match edit {
            RenderGraphEdit::AddNode(node) => self.add_node(node),
            RenderGraphEdit::RemoveNode(source_id) => self.remove_node(source_id, garbage_chute),
        }
    }

    fn add_node(&mut self, node: Box<RenderNode>) {
        debug_assert!(self
            .nodes
            .iter()
            .all(|n| n.source_id() != node.source_id()));
        self.nodes.push(node);
    }

    fn remove_node(&mut self, source_id: SourceId, garbage_chute: &GarbageChute) {
        debug_assert_eq!(
            self.nodes
                .iter()
                .filter(|n| n.source_id() == source_id)
                .count(),
            1
        );
        let i = self
            .nodes
            .iter()
            .position(|n| n.source_id() == source_id)
            .unwrap();
        let old_node = self.nodes.remove(i);
        old_node.toss(garbage_chute);
    }

    /// Fill every source's buffer with the current block of input audio,
    /// in registration order.
    pub(crate) fn capture_inputs(&mut self, capture: &mut dyn AudioCapture) {
        for node in &mut self.nodes {
            let source_id = node.source_id();
            capture.capture(source_id, node.capture_buffer_mut());
        }
    }
}

impl Garbage for Box<RenderNode> {
    fn toss(self, chute: &GarbageChute) {
        chute.send_box(self);
    }
}

impl Garbage for RenderGraph {
    fn toss(self, chute: &GarbageChute) {
        for node in self.nodes {
            node.toss(chute);
        }
    }
}
