use std::collections::HashMap;

use tracing::warn;

use crate::core::parameters::ParameterMap;

use super::{
    output::{Output, OutputId},
    sceneerror::SceneError,
    scenevalidation::find_scene_error,
    source::{Source, SourceId},
};

/// The control-plane description of everything currently being rendered:
/// the ordered list of sources and the registry of their paired outputs.
/// Sources are kept in registration order, which is also the order in
/// which the audio thread dispatches them each block. Nothing here is
/// touched by the audio thread; scenes are compiled into render graph
/// edits and shipped across (see the engine module).
#[derive(Clone)]
pub struct Scene {
    sources: Vec<Source>,
    outputs: HashMap<OutputId, Output>,
}

impl Scene {
    pub fn new() -> Scene {
        Scene {
            sources: Vec::new(),
            outputs: HashMap::new(),
        }
    }

    /// The sources in registration order
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    pub fn source(&self, id: SourceId) -> Option<&Source> {
        self.sources.iter().find(|s| s.id() == id)
    }

    pub fn outputs(&self) -> &HashMap<OutputId, Output> {
        &self.outputs
    }

    pub fn output(&self, id: OutputId) -> Option<&Output> {
        self.outputs.get(&id)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Add a new source together with its dedicated output. The output
    /// is created and registered synchronously, before the source becomes
    /// visible, so the 1:1 pairing holds from the moment this returns.
    ///
    /// If the recognized option `system_output_prefix` is present and
    /// non-empty, it names an external output device the new output is
    /// meant to be connected to. That connection step is not implemented;
    /// a diagnostic is emitted and rendering proceeds unchanged.
    pub fn add_source(&mut self, params: &ParameterMap) -> SourceId {
        let source_id = SourceId::new_unique();
        let mut source = Source::new(source_id);

        let output = Output::new(OutputId::new_unique(), source_id);
        source.set_output(Some(output.id()));
        self.insert_output(output);

        let prefix = params.get_str("system_output_prefix", "");
        if !prefix.is_empty() {
            warn!(
                "connecting the new output to \"{}\" is not implemented, \
                leaving it unconnected",
                prefix
            );
        }

        self.insert_source(source);
        source_id
    }

    /// Remove a source and its paired output. The output is deregistered
    /// first. A source whose output handle was already cleared (a
    /// partially failed construction) is removed without complaint.
    pub fn remove_source(&mut self, source_id: SourceId) -> Result<(), SceneError> {
        let Some(i) = self.sources.iter().position(|s| s.id() == source_id) else {
            return Err(SceneError::SourceNotFound(source_id));
        };
        if let Some(output_id) = self.sources[i].output() {
            self.sources[i].set_output(None);
            self.outputs.remove(&output_id);
        }
        self.sources.remove(i);
        Ok(())
    }

    pub(crate) fn insert_source(&mut self, source: Source) {
        debug_assert!(self.sources.iter().all(|s| s.id() != source.id()));
        self.sources.push(source);
    }

    pub(crate) fn insert_output(&mut self, output: Output) {
        let prev = self.outputs.insert(output.id(), output);
        debug_assert!(prev.is_none());
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        match find_scene_error(self) {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Default for Scene {
    fn default() -> Scene {
        Scene::new()
    }
}
