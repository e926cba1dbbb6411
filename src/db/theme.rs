use crate::types::Theme;

use super::{Storage, StoreError, THEME_KEY};

pub fn get_theme(storage: &impl Storage) -> Result<Option<Theme>, StoreError> {
    let Some(raw) = storage.get_item(THEME_KEY)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Corrupt {
            key: THEME_KEY,
            source,
        })
}

pub fn set_theme(theme: Theme, storage: &mut impl Storage) -> Result<(), StoreError> {
    let raw = serde_json::to_string(&theme).map_err(|source| StoreError::Corrupt {
        key: THEME_KEY,
        source,
    })?;
    storage.set_item(THEME_KEY, &raw)?;
    tracing::debug!(%theme, "theme stored");
    Ok(())
}
