#![no_std]

pub mod bar_graph;
pub mod display;
pub mod frame_scheduler;
pub mod glyphs;
pub mod splash;

pub use bar_graph::{clip_level, BarCell, BarGraph, MAX_BAR_LEVEL};
pub use display::{CharacterDisplay, GlyphBitmap};
pub use frame_scheduler::{FrameOutcome, FrameScheduler};
pub use glyphs::{load_bar_glyphs, BAR_GLYPHS};
pub use splash::Splash;
