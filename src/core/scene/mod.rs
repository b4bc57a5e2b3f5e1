pub mod output;
pub mod scene;
pub mod sceneerror;
pub(crate) mod scenevalidation;
pub mod source;
