pub mod enginereport;
pub mod garbage;
pub mod renderengine;
pub mod rendergraph;
pub(crate) mod rendergraphedit;
pub mod rendernode;
pub(crate) mod scenecompiler;

#[cfg(test)]
mod test;
