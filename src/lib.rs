//! SpaceK: a side-scrolling astronaut platformer.
//!
//! `entities` holds pure data, `compute` advances it one frame at a time,
//! `display` projects it onto a canvas and `audio` turns queued cues into
//! sound.  The binary in `main.rs` wires all of that to a terminal.

pub mod audio;
pub mod compute;
pub mod config;
pub mod constants;
pub mod display;
pub mod entities;
pub mod geometry;
pub mod levels;
