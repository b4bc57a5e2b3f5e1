use super::{output::OutputId, source::SourceId};

#[derive(Debug, Eq, PartialEq)]
pub enum SceneError {
    SourceNotFound(SourceId),
    OutputNotFound(OutputId),
    MissingOutput(SourceId),
    MismatchedBackReference { source: SourceId, output: OutputId },
    OrphanOutput(OutputId),
    EngineStopped,
}

impl SceneError {
    pub fn explain(&self) -> String {
        match self {
            SceneError::SourceNotFound(sid) => {
                format!("A source with id #{} could not be found", sid.value())
            }
            SceneError::OutputNotFound(oid) => {
                format!("An output with id #{} could not be found", oid.value())
            }
            SceneError::MissingOutput(sid) => {
                format!(
                    "Source #{} has no paired output registered",
                    sid.value()
                )
            }
            SceneError::MismatchedBackReference { source, output } => {
                format!(
                    "Output #{} does not refer back to source #{}, which holds its handle",
                    output.value(),
                    source.value()
                )
            }
            SceneError::OrphanOutput(oid) => {
                format!(
                    "Output #{} refers to a source which no longer exists",
                    oid.value()
                )
            }
            SceneError::EngineStopped => {
                "The render engine is no longer running".to_string()
            }
        }
    }
}
