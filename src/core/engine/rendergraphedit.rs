use crate::core::scene::source::SourceId;

use super::rendernode::RenderNode;

/// A single pre-built modification to the render graph. Edits are
/// allocated and compiled on the control thread, shipped over a bounded
/// queue, and applied by the audio thread strictly between blocks, so a
/// block's dispatch always sees a consistent snapshot of the node list.
pub(crate) enum RenderGraphEdit {
    AddNode(Box<RenderNode>),
    RemoveNode(SourceId),
}
