/// Card sets known to the matcher
///
/// Profile pages embed a short set key in every card image path
/// (e.g. `.../genetic_apex/full/12.webp`); the catalog labels the same set
/// by its full display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardSet {
    GeneticApex,
    MythicalIsland,
    SpaceTimeSmackdown,
    TriumphantLight,
}

impl CardSet {
    pub const ALL: [CardSet; 4] = [
        CardSet::GeneticApex,
        CardSet::MythicalIsland,
        CardSet::SpaceTimeSmackdown,
        CardSet::TriumphantLight,
    ];

    /// Parse the set key as it appears in image paths (e.g. "genetic_apex")
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "genetic_apex" => Some(CardSet::GeneticApex),
            "mythical_island" => Some(CardSet::MythicalIsland),
            "space_time_smackdown" => Some(CardSet::SpaceTimeSmackdown),
            "triumphant_light" => Some(CardSet::TriumphantLight),
            _ => None,
        }
    }

    /// Returns the image path key (e.g. "genetic_apex")
    pub fn key(&self) -> &'static str {
        match self {
            CardSet::GeneticApex => "genetic_apex",
            CardSet::MythicalIsland => "mythical_island",
            CardSet::SpaceTimeSmackdown => "space_time_smackdown",
            CardSet::TriumphantLight => "triumphant_light",
        }
    }

    /// Returns the full display name used by the card catalog (e.g. "Genetic Apex (A1)")
    pub fn display_name(&self) -> &'static str {
        match self {
            CardSet::GeneticApex => "Genetic Apex (A1)",
            CardSet::MythicalIsland => "Mythical Island (A1a)",
            CardSet::SpaceTimeSmackdown => "Space-Time Smackdown (A2)",
            CardSet::TriumphantLight => "Triumphant Light (A2a)",
        }
    }
}

/// Map an image path set key straight to its display name
pub fn full_set_name(key: &str) -> Option<&'static str> {
    CardSet::from_key(key).map(|set| set.display_name())
}
