//! Command-line options for the `spacek` binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::entities::Variant;

/// How long a key counts as held without a fresh press or repeat.  Only
/// used on terminals that never report key releases; the OS repeat rate
/// refreshes a key that is really held well inside this window.
pub const HOLD_WINDOW: Duration = Duration::from_millis(150);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CliVariant {
    /// One level, no oxygen, no power-ups
    Mini,
    /// Two levels with oxygen, jetpack, shield and power-ups
    Full,
}

impl From<CliVariant> for Variant {
    fn from(value: CliVariant) -> Self {
        match value {
            CliVariant::Mini => Variant::Mini,
            CliVariant::Full => Variant::Full,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "spacek")]
#[command(about = "Side-scrolling astronaut platformer for the terminal")]
pub struct Args {
    /// Rule set and level tables to play
    #[arg(long, value_enum, default_value_t = CliVariant::Full)]
    pub variant: CliVariant,

    /// Seed for a reproducible run (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Simulation frames per second
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// Directory holding the sound assets
    #[arg(long, default_value = "sounds")]
    pub sounds_dir: PathBuf,

    /// Start with sound off and skip loading assets
    #[arg(long)]
    pub mute: bool,

    /// Where structured logs are written
    #[arg(long, default_value = "spacek.log")]
    pub log_file: PathBuf,
}

impl Args {
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.fps))
    }

    /// [`HOLD_WINDOW`] in frames at the configured rate, at least one.
    pub fn hold_frames(&self) -> u64 {
        (HOLD_WINDOW.as_millis() as u64 * u64::from(self.fps) / 1000).max(1)
    }
}
