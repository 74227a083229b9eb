use crate::state::WeaponHandle;

/// Read-only access to the weapon catalog owned by the items system.
///
/// Participants hold [`WeaponHandle`]s; combat resolves them here at the time
/// of the attack.
pub trait WeaponOracle: Send + Sync {
    fn weapon(&self, handle: WeaponHandle) -> Option<&WeaponDefinition>;
}

/// Weapon definition loaded at content-load time.
///
/// Only `attack` takes part in the base damage rule. `kind`, `effect`,
/// `range` and `lifespan` are carried for rules that gate on them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDefinition {
    pub handle: WeaponHandle,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub info: String,
    /// Added to the wielder's base attack.
    pub attack: u32,
    /// Durability in uses.
    #[cfg_attr(feature = "serde", serde(default))]
    pub lifespan: u32,
    pub kind: WeaponKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub effect: Option<String>,
    /// Reach in tiles, only meaningful for ranged weapons.
    #[cfg_attr(feature = "serde", serde(default))]
    pub range: Option<u32>,
}

impl WeaponDefinition {
    pub fn new(handle: WeaponHandle, name: impl Into<String>, attack: u32, kind: WeaponKind) -> Self {
        Self {
            handle,
            name: name.into(),
            info: String::new(),
            attack,
            lifespan: 0,
            kind,
            effect: None,
            range: None,
        }
    }
}

/// Weapon families.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WeaponKind {
    Melee,
    Ranged,
    Magic,
}
