use crate::core::{parameters::RenderConfig, scene::scene::Scene};

use super::{rendergraphedit::RenderGraphEdit, rendernode::RenderNode};

/// Compute the edits that bring a render graph modeling `old` in line
/// with `new`. Removals come first so that a pair removed and a pair
/// added in the same update never coexist in the graph; additions follow
/// in the new scene's registration order. Node buffers are allocated
/// here, on the control path, so the audio thread only ever patches in
/// ready-made nodes.
pub(crate) fn diff_scene(old: &Scene, new: &Scene, config: &RenderConfig) -> Vec<RenderGraphEdit> {
    let mut edits = Vec::new();

    for source in old.sources() {
        if new.source(source.id()).is_none() {
            edits.push(RenderGraphEdit::RemoveNode(source.id()));
        }
    }

    for source in new.sources() {
        if old.source(source.id()).is_none() {
            let output_id = source
                .output()
                .expect("compiling a source with no paired output");
            edits.push(RenderGraphEdit::AddNode(Box::new(RenderNode::new(
                source.id(),
                output_id,
                config.block_size,
            ))));
        }
    }

    edits
}
