//! soundscene is the signal-routing core of a spatial-audio rendering
//! engine: a dynamically changing set of audio sources is mapped, block
//! by block, onto a dynamically changing set of audio outputs inside a
//! real-time processing loop. The passthrough strategy included here
//! mirrors each source unmodified to its paired output; every other
//! rendering algorithm builds on the same lifecycle and dispatch
//! machinery.

pub mod core;
