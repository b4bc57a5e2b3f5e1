pub mod blockbuffer;
pub mod capture;
pub mod engine;
pub mod parameters;
pub mod renderer;
pub mod scene;
pub mod uniqueid;
