use super::{scene::Scene, sceneerror::SceneError};

/// Check the structural invariants of a scene: every source holds the
/// handle of a live output whose back-reference points back at it, and
/// no output survives its source. A scene that passes has exactly one
/// live output per live source.
pub(crate) fn find_scene_error(scene: &Scene) -> Option<SceneError> {
    for source in scene.sources() {
        let Some(output_id) = source.output() else {
            return Some(SceneError::MissingOutput(source.id()));
        };
        let Some(output) = scene.output(output_id) else {
            return Some(SceneError::OutputNotFound(output_id));
        };
        if output.source() != source.id() {
            return Some(SceneError::MismatchedBackReference {
                source: source.id(),
                output: output_id,
            });
        }
    }

    for (output_id, output) in scene.outputs() {
        if scene.source(output.source()).is_none() {
            return Some(SceneError::OrphanOutput(*output_id));
        }
    }

    None
}
