//! Style catalog: the closed set of vibes that condition ad-lib generation.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::AppError;

/// Stable identifier of a musical style.
///
/// Variant order is catalog order; `StyleSet` iterates in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleId {
    Trap,
    OldSchool,
    Melodic,
    Drill,
    Grime,
    Hyperpop,
    EmoRap,
    RnB,
    Rage,
    WestCoast,
    Afrobeats,
    BoomBap,
    Plugg,
    Reggaeton,
    Glitchcore,
    Phonk,
    ChillDrill,
    LatinTrap,
    Comedy,
    Horror,
}

/// Presentation text for a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleInfo {
    pub id: StyleId,
    pub label: &'static str,
    pub descriptor: &'static str,
}

impl StyleInfo {
    /// `Label (Descriptor)`, the form injected into the prompt.
    pub fn description(&self) -> String {
        format!("{} ({})", self.label, self.descriptor)
    }
}

static CATALOG: [StyleInfo; 20] = [
    StyleInfo { id: StyleId::Trap, label: "Trap", descriptor: "Modern, energetic" },
    StyleInfo { id: StyleId::OldSchool, label: "Old School", descriptor: "Classic, storytelling" },
    StyleInfo { id: StyleId::Melodic, label: "Melodic", descriptor: "Smooth, sung" },
    StyleInfo { id: StyleId::Drill, label: "Drill", descriptor: "Aggressive, gritty" },
    StyleInfo { id: StyleId::Grime, label: "Grime", descriptor: "Fast-paced, punchy" },
    StyleInfo { id: StyleId::Hyperpop, label: "Hyperpop", descriptor: "High-energy, glitchy" },
    StyleInfo { id: StyleId::EmoRap, label: "Emo Rap", descriptor: "Moody, melodic" },
    StyleInfo { id: StyleId::RnB, label: "R&B", descriptor: "Soulful, sensual" },
    StyleInfo { id: StyleId::Rage, label: "Rage", descriptor: "Distorted, high-energy" },
    StyleInfo { id: StyleId::WestCoast, label: "West Coast", descriptor: "Funky, bouncing" },
    StyleInfo { id: StyleId::Afrobeats, label: "Afrobeats", descriptor: "Rhythmic, melodic" },
    StyleInfo { id: StyleId::BoomBap, label: "Boom Bap", descriptor: "Raw, classic" },
    StyleInfo { id: StyleId::Plugg, label: "Plugg", descriptor: "Ambient, ethereal" },
    StyleInfo { id: StyleId::Reggaeton, label: "Reggaeton", descriptor: "Dance, rhythmic" },
    StyleInfo { id: StyleId::Glitchcore, label: "Glitchcore", descriptor: "Experimental, chaotic" },
    StyleInfo { id: StyleId::Phonk, label: "Phonk", descriptor: "Dark, bass-heavy" },
    StyleInfo { id: StyleId::ChillDrill, label: "Chill Drill", descriptor: "Ambient, melodic" },
    StyleInfo { id: StyleId::LatinTrap, label: "Latin Trap", descriptor: "Rhythmic, urban" },
    StyleInfo {
        id: StyleId::Comedy,
        label: "Comedy",
        descriptor: "Funny, sarcastic, sound effects",
    },
    StyleInfo { id: StyleId::Horror, label: "Horror", descriptor: "Eerie, dark, cinematic" },
];

impl StyleId {
    /// All styles in catalog order.
    pub const ALL: [StyleId; 20] = [
        StyleId::Trap,
        StyleId::OldSchool,
        StyleId::Melodic,
        StyleId::Drill,
        StyleId::Grime,
        StyleId::Hyperpop,
        StyleId::EmoRap,
        StyleId::RnB,
        StyleId::Rage,
        StyleId::WestCoast,
        StyleId::Afrobeats,
        StyleId::BoomBap,
        StyleId::Plugg,
        StyleId::Reggaeton,
        StyleId::Glitchcore,
        StyleId::Phonk,
        StyleId::ChillDrill,
        StyleId::LatinTrap,
        StyleId::Comedy,
        StyleId::Horror,
    ];

    /// Style pre-selected when a session starts.
    pub const DEFAULT: StyleId = StyleId::Trap;

    /// Kebab-case identifier used on the command line and in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleId::Trap => "trap",
            StyleId::OldSchool => "old-school",
            StyleId::Melodic => "melodic",
            StyleId::Drill => "drill",
            StyleId::Grime => "grime",
            StyleId::Hyperpop => "hyperpop",
            StyleId::EmoRap => "emo-rap",
            StyleId::RnB => "r-and-b",
            StyleId::Rage => "rage",
            StyleId::WestCoast => "west-coast",
            StyleId::Afrobeats => "afrobeats",
            StyleId::BoomBap => "boom-bap",
            StyleId::Plugg => "plugg",
            StyleId::Reggaeton => "reggaeton",
            StyleId::Glitchcore => "glitchcore",
            StyleId::Phonk => "phonk",
            StyleId::ChillDrill => "chill-drill",
            StyleId::LatinTrap => "latin-trap",
            StyleId::Comedy => "comedy",
            StyleId::Horror => "horror",
        }
    }

    pub fn info(&self) -> &'static StyleInfo {
        // CATALOG is declared in variant order.
        &CATALOG[*self as usize]
    }

    pub fn label(&self) -> &'static str {
        self.info().label
    }

    pub fn descriptor(&self) -> &'static str {
        self.info().descriptor
    }

    /// Parse an identifier or a display label, case-insensitively.
    pub fn parse(input: &str) -> Option<StyleId> {
        let needle = input.trim();
        if needle.is_empty() {
            return None;
        }
        StyleId::ALL.into_iter().find(|style| {
            style.as_str().eq_ignore_ascii_case(needle)
                || style.label().eq_ignore_ascii_case(needle)
                || style.info().description().eq_ignore_ascii_case(needle)
        })
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StyleId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleId::parse(s).ok_or_else(|| AppError::UnknownStyle(s.to_string()))
    }
}

impl Serialize for StyleId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        StyleId::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown style '{}'", raw)))
    }
}

/// The catalog, in stable order.
pub fn list_styles() -> &'static [StyleInfo] {
    &CATALOG
}

/// Set of selected styles, iterated in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleSet(BTreeSet<StyleId>);

impl StyleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(style: StyleId) -> Self {
        Self(BTreeSet::from([style]))
    }

    /// Add `style` if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, style: StyleId) -> bool {
        if self.0.remove(&style) {
            false
        } else {
            self.0.insert(style);
            true
        }
    }

    pub fn insert(&mut self, style: StyleId) -> bool {
        self.0.insert(style)
    }

    pub fn contains(&self, style: StyleId) -> bool {
        self.0.contains(&style)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = StyleId> + '_ {
        self.0.iter().copied()
    }

    /// Labels joined with ", ".
    pub fn labels(&self) -> String {
        self.iter().map(|style| style.label()).collect::<Vec<_>>().join(", ")
    }
}

impl FromIterator<StyleId> for StyleSet {
    fn from_iter<I: IntoIterator<Item = StyleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
