//! Frame rendering — one ASCII/Unicode picture per simulation step.

pub mod canvas;
pub mod charset;
pub mod frame;

pub use frame::FrameRenderer;
