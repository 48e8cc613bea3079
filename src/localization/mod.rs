//! # Localization
//!
//! Display strings are looked up by [`LocalizationId`] through a
//! [`TextSource`]. The game stores whatever a source returns without
//! interpreting it. [`EnglishText`] is the built-in source.

use serde::{Deserialize, Serialize};

/// Keys for every localized string the core needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocalizationId {
    GameTitle,
    Human,
    HumanDesc,
    Catfolk,
    CatfolkDesc,
    HouseElf,
    HouseElfDesc,
    Dwarf,
    DwarfDesc,
    Gnome,
    GnomeDesc,
    Random,
    RandomDesc,
    AttributesDesc,
    /// Warning when walking into an obstacle
    Bump,
    /// Warning when walking off the edge of the map
    CantLeaveArea,
    /// Narrative shown on arriving at floor 0
    EntryRoomNarrative,
}

/// Supplies display strings by key.
pub trait TextSource {
    fn text(&self, id: LocalizationId) -> String;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishText;

impl TextSource for EnglishText {
    fn text(&self, id: LocalizationId) -> String {
        let text = match id {
            LocalizationId::GameTitle => "Rrogue",
            LocalizationId::Human => "Human",
            LocalizationId::HumanDesc => {
                "Humans are adaptive folk well spread across continents that have a medium \
                 lifespan but are fast learners. You learn Perks at a faster rate.\n\n\
                 Humans in general don't have any apparent strengths or weaknesses but \
                 individuals can excel in various ways. They prosper because of their \
                 differences. What sets you apart?\n\n\
                 There's no Attribute Point requirements to play a human."
            }
            LocalizationId::Catfolk => "Catfolk",
            LocalizationId::CatfolkDesc => {
                "Catfolk are nimble bipedal predators that speak funnily but scratch mightily. \
                 Some are more cat-like and others resemble tigers or panthers.\n\n\
                 Catfolk have excellent senses and they have a bonus for avoiding hits. These \
                 great cats make good mages as well due to their connection with the nature.\n\n\
                 To play as one put at least one attribute point to Dex and another to Dex or Str."
            }
            LocalizationId::HouseElf => "House-elf",
            LocalizationId::HouseElfDesc => {
                "House-elves have many names. They are small, helpful but stubborn and very \
                 magical folk. Once a day House-elves can turn invisible.\n\n\
                 For clothes they prefer cool hats and rags or just relying on their hairy \
                 bodies.\n\n\
                 To play as one put one point into Spi and another point into Spi/Dex/Kno."
            }
            LocalizationId::Dwarf => "Dwarf",
            LocalizationId::DwarfDesc => {
                "Dwarves are hardy mountain or hill-dwellers, skilled craftsmen and \
                 knowledgeable.\n\n\
                 Dwarves have two poison resistance Perks as well as darkvision, they are \
                 proficient with battle axe/hammer and many kinds of crafting.\n\n\
                 To play as one put one point into Con and another point into Con/Str/Spi/Kno."
            }
            LocalizationId::Gnome => "Gnome",
            LocalizationId::GnomeDesc => {
                "Gnomes are long-living small, curious, fun-loving and intelligent. They can \
                 be for example tinkerers, researchers or jewelers.\n\n\
                 You have darkvision, some magic is less effective on you. You are proficient \
                 in adding affixes to items.\n\n\
                 To play as one put one point into Kno and another point into Kno/Con/Dex."
            }
            LocalizationId::Random => "Random",
            LocalizationId::RandomDesc => "",
            LocalizationId::AttributesDesc => {
                "Attributes increase your effectiveness.\n\n\
                 Strength adds damage to hits and helps you wear armor and carry items.\n\
                 Dexterity helps you both land a hit and avoid hits.\n\
                 Constitution increases your health and helps you regain it and protects you \
                 from some ill effects.\n\
                 Spirit is your magical connection to the world. It aids you in spellcasting.\n\
                 Knowledge measures your knowledge, expertise in techniques and your learning \
                 ability."
            }
            LocalizationId::Bump => "Bump.",
            LocalizationId::CantLeaveArea => "Can't go back to world map.",
            LocalizationId::EntryRoomNarrative => {
                "The door grinds shut behind you. Something stirs in the dark."
            }
        };
        text.to_string()
    }
}
