use crate::core::uniqueid::UniqueId;

use super::output::OutputId;

pub struct SourceTag;

pub type SourceId = UniqueId<SourceTag>;

/// One logical audio input channel. A source guarantees that its
/// mirrored output exists for exactly its own lifetime: the paired
/// output is registered as part of source construction and deregistered
/// before the source itself is removed. The source holds only the
/// output's handle, never the output itself, which is owned by the
/// scene's output registry.
#[derive(Clone)]
pub struct Source {
    id: SourceId,
    output: Option<OutputId>,
}

impl Source {
    pub(crate) fn new(id: SourceId) -> Source {
        Source { id, output: None }
    }

    pub fn id(&self) -> SourceId {
        self.id
    }

    /// Handle of the paired output. None only while construction or
    /// destruction of the pair is underway.
    pub fn output(&self) -> Option<OutputId> {
        self.output
    }

    pub(crate) fn set_output(&mut self, output: Option<OutputId>) {
        self.output = output;
    }
}
