use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::CandidateDomain;

/// A trainable skill that an experience lamp can be spent on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Skill {
    Attack,
    Strength,
    Ranged,
    Magic,
    Defence,
    Constitution,
    Prayer,
    Summoning,
    Dungeoneering,
    Agility,
    Herblore,
    Thieving,
    Crafting,
    Fletching,
    Slayer,
    Hunter,
    Divination,
    Mining,
    Smithing,
    Fishing,
    Cooking,
    Firemaking,
    Woodcutting,
    Farming,
    Construction,
    Runecrafting,
    Invention,
    Archaeology,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown skill: {0:?}")]
pub struct ParseSkillError(pub String);

impl Skill {
    /// Every skill, in the order the picker lists them.
    pub const ALL: [Self; 28] = [
        Self::Attack,
        Self::Strength,
        Self::Ranged,
        Self::Magic,
        Self::Defence,
        Self::Constitution,
        Self::Prayer,
        Self::Summoning,
        Self::Dungeoneering,
        Self::Agility,
        Self::Herblore,
        Self::Thieving,
        Self::Crafting,
        Self::Fletching,
        Self::Slayer,
        Self::Hunter,
        Self::Divination,
        Self::Mining,
        Self::Smithing,
        Self::Fishing,
        Self::Cooking,
        Self::Firemaking,
        Self::Woodcutting,
        Self::Farming,
        Self::Construction,
        Self::Runecrafting,
        Self::Invention,
        Self::Archaeology,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Strength => "Strength",
            Self::Ranged => "Ranged",
            Self::Magic => "Magic",
            Self::Defence => "Defence",
            Self::Constitution => "Constitution",
            Self::Prayer => "Prayer",
            Self::Summoning => "Summoning",
            Self::Dungeoneering => "Dungeoneering",
            Self::Agility => "Agility",
            Self::Herblore => "Herblore",
            Self::Thieving => "Thieving",
            Self::Crafting => "Crafting",
            Self::Fletching => "Fletching",
            Self::Slayer => "Slayer",
            Self::Hunter => "Hunter",
            Self::Divination => "Divination",
            Self::Mining => "Mining",
            Self::Smithing => "Smithing",
            Self::Fishing => "Fishing",
            Self::Cooking => "Cooking",
            Self::Firemaking => "Firemaking",
            Self::Woodcutting => "Woodcutting",
            Self::Farming => "Farming",
            Self::Construction => "Construction",
            Self::Runecrafting => "Runecrafting",
            Self::Invention => "Invention",
            Self::Archaeology => "Archaeology",
        }
    }

    /// The full picker domain. `ALL` has no repeats, so this cannot fail.
    #[must_use]
    pub fn domain() -> CandidateDomain<Self> {
        CandidateDomain::from_unique(Self::ALL.to_vec())
    }
}

impl fmt::Display for Skill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Skill {
    type Err = ParseSkillError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|skill| skill.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ParseSkillError(s.to_string()))
    }
}

