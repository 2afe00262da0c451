use crate::errors::AppError;
use crate::models::ApplicationState;
use serde::{Deserialize, Serialize};
use std::{env, path::Path, path::PathBuf};
use thiserror::Error;
use tokio::{fs, io::AsyncWriteExt};
use tracing::warn;

/// Key of the single durable storage slot.
pub const SLOT_KEY: &str = "@localstate";
pub const SLOT_VERSION: u32 = 1;
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum SlotError {
    #[error("failed to read slot: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse slot: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unexpected slot key '{0}'")]
    KeyMismatch(String),

    #[error("unsupported slot version {0}")]
    UnsupportedVersion(u32),
}

#[derive(Debug, Serialize, Deserialize)]
struct SlotEnvelope<T> {
    key: String,
    version: u32,
    state: T,
}

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/localstate.json"))
}

/// Reads the slot. `Ok(None)` means the slot has never been written.
pub async fn read_slot(path: &Path) -> Result<Option<ApplicationState>, SlotError> {
    let bytes = match fs::read(path).await {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let envelope: SlotEnvelope<ApplicationState> = serde_json::from_slice(&bytes)?;
    if envelope.key != SLOT_KEY {
        return Err(SlotError::KeyMismatch(envelope.key));
    }
    if envelope.version != SLOT_VERSION {
        return Err(SlotError::UnsupportedVersion(envelope.version));
    }

    Ok(Some(envelope.state))
}

pub async fn load_state(path: &Path, default: ApplicationState) -> ApplicationState {
    match read_slot(path).await {
        Ok(Some(state)) => state,
        Ok(None) => default,
        Err(err) => {
            warn!("discarding stored state at {}: {err}", path.display());
            default
        }
    }
}

pub async fn persist_state(path: &Path, state: &ApplicationState) -> Result<(), AppError> {
    let envelope = SlotEnvelope {
        key: SLOT_KEY.to_string(),
        version: SLOT_VERSION,
        state,
    };
    let payload = serde_json::to_vec_pretty(&envelope)?;

    // Readers only ever see the previous slot or the complete new one.
    let tmp = tmp_path(path);
    let mut file = fs::File::create(&tmp).await?;
    file.write_all(&payload).await?;
    file.sync_all().await?;
    drop(file);
    fs::rename(&tmp, path).await?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{existing}.{TMP_SUFFIX}"),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}
