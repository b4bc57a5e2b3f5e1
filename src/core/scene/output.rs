use crate::core::uniqueid::UniqueId;

use super::source::SourceId;

pub struct OutputTag;

pub type OutputId = UniqueId<OutputTag>;

/// One logical audio output channel, paired 1:1 with a source. The
/// back-reference is set at construction and never reassigned. Outputs
/// are owned by the scene's output registry and never survive their
/// source.
#[derive(Clone)]
pub struct Output {
    id: OutputId,
    source: SourceId,
}

impl Output {
    pub(crate) fn new(id: OutputId, source: SourceId) -> Output {
        Output { id, source }
    }

    pub fn id(&self) -> OutputId {
        self.id
    }

    pub fn source(&self) -> SourceId {
        self.source
    }
}
