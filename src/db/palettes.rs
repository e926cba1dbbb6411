/// Saved palette queries.
use crate::palette::Palette;
use crate::types::SaveOutcome;

use super::{SAVED_PALETTES_KEY, Storage, StoreError};

pub fn load_palettes(storage: &impl Storage) -> Result<Vec<Palette>, StoreError> {
    let Some(raw) = storage.get_item(SAVED_PALETTES_KEY)? else {
        return Ok(Vec::new());
    };
    serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
        key: SAVED_PALETTES_KEY,
        source,
    })
}

/// Appends `palette` unless nothing is displayed or the same sequence is already saved.
pub fn save_palette(
    palette: Option<&Palette>,
    storage: &mut impl Storage,
) -> Result<SaveOutcome, StoreError> {
    let Some(palette) = palette else {
        return Ok(SaveOutcome::Empty);
    };
    let mut palettes = load_palettes(&*storage)?;
    if palettes.contains(palette) {
        return Ok(SaveOutcome::Duplicate);
    }
    palettes.push(palette.clone());
    store_palettes(&palettes, storage)?;
    tracing::info!(count = palettes.len(), "palette saved");
    Ok(SaveOutcome::Saved)
}

/// Removes the palette at `index`, keeping the others in order.
pub fn delete_palette(index: usize, storage: &mut impl Storage) -> Result<Palette, StoreError> {
    let mut palettes = load_palettes(&*storage)?;
    if index >= palettes.len() {
        return Err(StoreError::NoSuchPalette {
            index,
            len: palettes.len(),
        });
    }
    let removed = palettes.remove(index);
    store_palettes(&palettes, storage)?;
    tracing::info!(index, remaining = palettes.len(), "palette deleted");
    Ok(removed)
}

fn store_palettes(palettes: &[Palette], storage: &mut impl Storage) -> Result<(), StoreError> {
    let raw = serde_json::to_string(palettes).map_err(|source| StoreError::Corrupt {
        key: SAVED_PALETTES_KEY,
        source,
    })?;
    storage.set_item(SAVED_PALETTES_KEY, &raw)
}
