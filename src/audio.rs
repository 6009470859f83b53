//! Sound assets and playback.
//!
//! The game core only queues [`SoundCue`]s; this module decides which of
//! them can actually be heard.  Every asset is probed once at startup and a
//! missing or broken file turns that cue into a silent no-op.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{trace, warn};

use crate::entities::SoundCue;

#[derive(Debug)]
pub enum AudioError {
    Missing { cue: SoundCue, path: PathBuf },
    Unreadable { cue: SoundCue, path: PathBuf, source: io::Error },
    Empty { cue: SoundCue, path: PathBuf },
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { cue, path } => {
                write!(f, "sound {cue:?}: {} not found", path.display())
            }
            Self::Unreadable { cue, path, source } => {
                write!(f, "sound {cue:?}: cannot read {}: {source}", path.display())
            }
            Self::Empty { cue, path } => {
                write!(f, "sound {cue:?}: {} is empty", path.display())
            }
        }
    }
}

impl std::error::Error for AudioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Check that the asset for `cue` exists under `dir` and is non-empty.
pub fn load_cue(dir: &Path, cue: SoundCue) -> Result<PathBuf, AudioError> {
    let path = dir.join(cue.file_name());
    let meta = match std::fs::metadata(&path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(AudioError::Missing { cue, path });
        }
        Err(source) => return Err(AudioError::Unreadable { cue, path, source }),
    };
    if !meta.is_file() {
        return Err(AudioError::Missing { cue, path });
    }
    if meta.len() == 0 {
        return Err(AudioError::Empty { cue, path });
    }
    Ok(path)
}

/// The set of cues that can be played.
#[derive(Debug, Default)]
pub struct Audio {
    available: HashSet<SoundCue>,
}

impl Audio {
    /// Probe every cue under `dir`.  Several cues share a file; a broken
    /// file is reported once.
    pub fn load(dir: &Path) -> Audio {
        let mut probed: HashMap<&'static str, bool> = HashMap::new();
        let mut available = HashSet::new();

        for cue in SoundCue::ALL {
            let ok = *probed.entry(cue.file_name()).or_insert_with(|| match load_cue(dir, cue) {
                Ok(_) => true,
                Err(err) => {
                    warn!(%err, "sound unavailable");
                    false
                }
            });
            if ok {
                available.insert(cue);
            }
        }
        Audio { available }
    }

    /// No cue is available; every play request is a no-op.
    pub fn muted() -> Audio {
        Audio::default()
    }

    pub fn is_available(&self, cue: SoundCue) -> bool {
        self.available.contains(&cue)
    }

    /// Play this frame's cues.  A terminal can only ring its bell, so at
    /// most one bell is written however many cues are audible.  Returns the
    /// number of audible cues.
    pub fn play_all<W: Write>(&self, out: &mut W, cues: &[SoundCue]) -> io::Result<usize> {
        let mut audible = 0;
        for &cue in cues {
            if self.is_available(cue) {
                trace!(?cue, "play");
                audible += 1;
            }
        }
        if audible > 0 {
            out.write_all(b"\x07")?;
        }
        Ok(audible)
    }
}
