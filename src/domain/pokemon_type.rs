//! The closed enumeration of creature type tags.
//!
//! Type tags travel through the engine as plain strings so that values
//! outside this enumeration are accepted (and simply never match). This enum
//! is what the presentation layer offers in the type picker and uses to
//! colour type badges.

use std::fmt;
use std::str::FromStr;

/// One of the 18 known type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PokemonType {
    Grass,
    Fire,
    Water,
    Bug,
    Normal,
    Flying,
    Dark,
    Electric,
    Dragon,
    Poison,
    Fairy,
    Fighting,
    Ghost,
    Ground,
    Ice,
    Psychic,
    Rock,
    Steel,
}

impl PokemonType {
    /// Every type, in picker order.
    pub const ALL: [Self; 18] = [
        Self::Grass,
        Self::Fire,
        Self::Water,
        Self::Bug,
        Self::Normal,
        Self::Flying,
        Self::Dark,
        Self::Electric,
        Self::Dragon,
        Self::Poison,
        Self::Fairy,
        Self::Fighting,
        Self::Ghost,
        Self::Ground,
        Self::Ice,
        Self::Psychic,
        Self::Rock,
        Self::Steel,
    ];

    /// The tag as spelled by the API (lowercase).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grass => "grass",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Bug => "bug",
            Self::Normal => "normal",
            Self::Flying => "flying",
            Self::Dark => "dark",
            Self::Electric => "electric",
            Self::Dragon => "dragon",
            Self::Poison => "poison",
            Self::Fairy => "fairy",
            Self::Fighting => "fighting",
            Self::Ghost => "ghost",
            Self::Ground => "ground",
            Self::Ice => "ice",
            Self::Psychic => "psychic",
            Self::Rock => "rock",
            Self::Steel => "steel",
        }
    }

    /// Badge colour as a hex string, usable with [`crate::ui::Theme::fg`].
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Grass => "#7ac74c",
            Self::Fire => "#ee8130",
            Self::Water => "#6390f0",
            Self::Bug => "#a6b91a",
            Self::Normal => "#a8a77a",
            Self::Flying => "#a98ff3",
            Self::Dark => "#705746",
            Self::Electric => "#f7d02c",
            Self::Dragon => "#6f35fc",
            Self::Poison => "#a33ea1",
            Self::Fairy => "#d685ad",
            Self::Fighting => "#c22e28",
            Self::Ghost => "#735797",
            Self::Ground => "#e2bf65",
            Self::Ice => "#96d9d6",
            Self::Psychic => "#f95587",
            Self::Rock => "#b6a136",
            Self::Steel => "#b7b7ce",
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the known tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown pokemon type `{0}`")]
pub struct UnknownType(pub String);

impl FromStr for PokemonType {
    type Err = UnknownType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str() == s)
            .ok_or_else(|| UnknownType(s.to_string()))
    }
}
