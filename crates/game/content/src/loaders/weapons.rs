//! Weapon catalog loader.

use std::collections::HashSet;
use std::path::Path;

use game_core::WeaponDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Weapon catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeaponCatalog {
    pub weapons: Vec<WeaponDefinition>,
}

/// Loader for the weapon catalog from RON files.
pub struct WeaponLoader;

impl WeaponLoader {
    /// Load the weapon catalog from a RON file.
    ///
    /// # Errors
    ///
    /// Fails on unreadable files, parse errors and duplicate handles.
    pub fn load(path: &Path) -> LoadResult<Vec<WeaponDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<WeaponDefinition>> {
        let catalog: WeaponCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse weapon catalog RON: {}", e))?;

        let mut seen = HashSet::new();
        for weapon in &catalog.weapons {
            if !seen.insert(weapon.handle) {
                anyhow::bail!("Duplicate weapon handle {} ({})", weapon.handle, weapon.name);
            }
        }

        Ok(catalog.weapons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{WeaponHandle, WeaponKind};

    #[test]
    fn parses_catalog() {
        let weapons = WeaponLoader::parse(
            r#"(
                weapons: [
                    (handle: (1), name: "Short Sword", attack: 2, kind: melee),
                    (handle: (2), name: "Bow", attack: 3, kind: ranged, range: Some(5)),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(weapons.len(), 2);
        assert_eq!(weapons[0].handle, WeaponHandle(1));
        assert_eq!(weapons[1].kind, WeaponKind::Ranged);
        assert_eq!(weapons[1].range, Some(5));
        assert!(weapons[0].info.is_empty());
    }

    #[test]
    fn rejects_duplicate_handles() {
        let err = WeaponLoader::parse(
            r#"(weapons: [
                (handle: (1), name: "A", attack: 1, kind: melee),
                (handle: (1), name: "B", attack: 1, kind: melee),
            ])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate weapon handle"));
    }
}
