//! JSON persistence for the player profile in `~/.slither/`.
//!
//! Persistence is best-effort: every failure (no home directory, unreadable
//! or corrupt file, unwritable disk) degrades to defaults and never reaches
//! the simulation.

use crate::constants::PROFILE_FILENAME;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;

/// The only state surviving across runs: high score and mute preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub high_score: u32,
    #[serde(default)]
    pub muted: bool,
}

/// Get the ~/.slither/ directory path, creating it if needed.
fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".slither");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn profile_path() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(PROFILE_FILENAME))
}

/// Load the profile, falling back to defaults if missing or invalid.
pub fn load_profile() -> Profile {
    let path = match profile_path() {
        Ok(p) => p,
        Err(_) => return Profile::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => Profile::default(),
    }
}

/// Save the profile as pretty-printed JSON. Callers treat a failure as
/// "persistence disabled" and continue.
pub fn save_profile(profile: &Profile) -> io::Result<()> {
    let path = profile_path()?;
    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(path, json)?;
    Ok(())
}
