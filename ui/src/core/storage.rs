//! Local persistence for the visitor's language choice.
//!
//! On the web the choice lives in `localStorage`; other targets keep nothing
//! between runs.

use super::language::LanguageCode;

/// `localStorage` key holding the language code.
pub const LANGUAGE_KEY: &str = "shams.language";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("localStorage unavailable")]
    Unavailable,
    #[error("localStorage rejected write for `{key}`")]
    WriteRejected { key: &'static str },
}

/// Previously saved language, if any and still supported.
pub fn load_language() -> Option<LanguageCode> {
    #[cfg(target_arch = "wasm32")]
    {
        let stored = local_storage().ok()?.get_item(LANGUAGE_KEY).ok()??;
        match stored.parse() {
            Ok(code) => Some(code),
            Err(err) => {
                tracing::warn!("ignoring stored language: {err}");
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

pub fn save_language(code: LanguageCode) -> Result<(), StorageError> {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()?
            .set_item(LANGUAGE_KEY, code.code())
            .map_err(|_| StorageError::WriteRejected { key: LANGUAGE_KEY })
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = code;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or(StorageError::NoWindow)?;
    window
        .local_storage()
        .map_err(|_| StorageError::Unavailable)?
        .ok_or(StorageError::Unavailable)
}
