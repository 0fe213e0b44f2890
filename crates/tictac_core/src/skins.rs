//! Cosmetic skins.
//!
//! A skin names the asset set for the board bounds, the tiles and the two
//! piece models, plus the colours a terminal front-end uses in their
//! place. Assets are descriptors only; nothing here loads them.

use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Name of the skin used when a lookup misses.
pub const DEFAULT_SKIN: &str = "Classic";

/// Terminal colours for a skin, as colour names or `#RRGGBB`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Palette {
    /// Colour of X pieces.
    x_piece: String,
    /// Colour of O pieces.
    o_piece: String,
    /// Colour of the board lines and borders.
    bounds: String,
}

/// A named asset set.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Skin {
    /// Display name, also the lookup key.
    name: String,
    /// Model for the board bounds.
    bounds: String,
    /// Model containing the nine tile meshes.
    tiles: String,
    /// Model for X pieces.
    x_piece: String,
    /// Model for O pieces.
    o_piece: String,
    /// Terminal colours standing in for the models.
    palette: Palette,
}

/// The set of skins a player can choose from, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkinCatalog {
    skins: Vec<Skin>,
}

impl SkinCatalog {
    /// The skins shipped with the game.
    #[instrument]
    pub fn builtin() -> Self {
        let skin = |name: &str, suffix: &str, tiles: &str, x: &str, o: &str, palette: Palette| {
            let dir = format!("assets/3D models/skins/{name}");
            Skin::new(
                name.to_string(),
                format!("{dir}/Bounds{suffix}.glb"),
                format!("{dir}/{tiles}"),
                format!("{dir}/{x}"),
                format!("{dir}/{o}"),
                palette,
            )
        };

        Self {
            skins: vec![
                skin(
                    "Classic",
                    "",
                    "PlayTiles mesh.glb",
                    "Xs mesh.glb",
                    "Os mesh.glb",
                    Palette::new("#71E700".into(), "#0427E7".into(), "white".into()),
                ),
                skin(
                    "Game Night",
                    " (GN)",
                    "PlayTiles mesh.glb",
                    "Xs mesh (GN) 2.glb",
                    "Os mesh (GN) 2.glb",
                    Palette::new("yellow".into(), "magenta".into(), "darkgray".into()),
                ),
                skin(
                    "Under Water",
                    " (UW)",
                    "PlayTiles mesh.glb",
                    "Xs mesh (UW).glb",
                    "Os mesh (UW).glb",
                    Palette::new("lightcyan".into(), "lightgreen".into(), "blue".into()),
                ),
            ],
        }
    }

    /// Creates a catalog from explicit skins.
    ///
    /// The first skin is the fallback if the catalog has no skin named
    /// [`DEFAULT_SKIN`].
    pub fn from_skins(skins: Vec<Skin>) -> Self {
        Self { skins }
    }

    /// All skins in display order.
    pub fn skins(&self) -> &[Skin] {
        &self.skins
    }

    /// Skin names in display order.
    pub fn names(&self) -> Vec<&str> {
        self.skins.iter().map(|s| s.name.as_str()).collect()
    }

    /// Whether a skin called `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    fn find(&self, name: &str) -> Option<&Skin> {
        self.skins.iter().find(|s| s.name == name)
    }

    /// Looks up a skin, falling back to the default for unknown names.
    ///
    /// Returns `None` only for an empty catalog.
    #[instrument(skip(self))]
    pub fn get(&self, name: &str) -> Option<&Skin> {
        self.find(name).or_else(|| {
            warn!(name, fallback = DEFAULT_SKIN, "Unknown skin");
            self.find(DEFAULT_SKIN).or_else(|| self.skins.first())
        })
    }

    /// Picks a skin uniformly at random.
    #[instrument(skip(self, rng))]
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Skin> {
        let skin = self.skins.choose(rng);
        if let Some(skin) = skin {
            debug!(name = %skin.name, "Picked random skin");
        }
        skin
    }

    /// The skin after `name` in display order, wrapping around.
    #[instrument(skip(self))]
    pub fn next_after(&self, name: &str) -> Option<&Skin> {
        let pos = self.skins.iter().position(|s| s.name == name);
        match pos {
            Some(i) => self.skins.get((i + 1) % self.skins.len()),
            None => self.skins.first(),
        }
    }
}

impl Default for SkinCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
