//! # Ancestries
//!
//! Playable lineages, the attribute requirement each one imposes, and the
//! catalog the creation screen shows. Random is a catalog entry too, but it
//! is never a final answer: picking it rolls one of the five concrete
//! ancestries instead.

use crate::{Attribute, Attributes, LocalizationId, RrogueError, RrogueResult, TextSource};
use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Combined attribute total every requirement clause asks for.
pub const REQUIRED_COMBINED_POINTS: u32 = 2;

/// Ancestry identifiers in catalog display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AncestryType {
    Human,
    Catfolk,
    Dwarf,
    Gnome,
    HouseElf,
    /// Sentinel that must be re-rolled to a concrete ancestry
    Random,
}

/// How an ancestry constrains a point distribution beyond the full budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AncestryRule {
    /// The budget must be spent exactly
    ExactBudget,
    /// A key attribute and a combined total must be reached
    Requirement(Requirement),
    /// Never satisfiable
    Unresolved,
}

/// Requirement clause of a non-human ancestry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requirement {
    /// Attribute that must hold at least one point
    pub key: Attribute,
    /// Attributes summed against [`REQUIRED_COMBINED_POINTS`]. An attribute
    /// may be listed more than once and then counts that many times.
    pub combined: &'static [Attribute],
}

impl Requirement {
    /// Sum of the combined attributes, with repeats.
    pub fn combined_total(&self, attributes: &Attributes) -> u32 {
        self.combined
            .iter()
            .map(|&attribute| u32::from(attributes.get(attribute)))
            .sum()
    }

    /// Checks the key attribute and the combined total.
    pub fn is_met(&self, attributes: &Attributes) -> bool {
        attributes.get(self.key) > 0 && self.combined_total(attributes) >= REQUIRED_COMBINED_POINTS
    }
}

impl AncestryType {
    /// Every ancestry, Random last.
    pub const ALL: [AncestryType; 6] = [
        AncestryType::Human,
        AncestryType::Catfolk,
        AncestryType::Dwarf,
        AncestryType::Gnome,
        AncestryType::HouseElf,
        AncestryType::Random,
    ];

    /// The five playable ancestries.
    pub const CONCRETE: [AncestryType; 5] = [
        AncestryType::Human,
        AncestryType::Catfolk,
        AncestryType::Dwarf,
        AncestryType::Gnome,
        AncestryType::HouseElf,
    ];

    /// Position in the catalog display order.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<AncestryType> {
        Self::ALL.get(index).copied()
    }

    pub fn is_random(self) -> bool {
        self == AncestryType::Random
    }

    /// The attribute rule of this ancestry.
    ///
    /// The House-elf clause counts knowledge twice and leaves dexterity out,
    /// although its description asks for Spi/Dex/Kno.
    // TODO: confirm the House-elf clause with design before changing it;
    // the description and the rule disagree.
    pub fn rule(self) -> AncestryRule {
        use Attribute::*;
        match self {
            AncestryType::Human => AncestryRule::ExactBudget,
            AncestryType::Catfolk => AncestryRule::Requirement(Requirement {
                key: Dexterity,
                combined: &[Strength, Dexterity],
            }),
            AncestryType::Dwarf => AncestryRule::Requirement(Requirement {
                key: Constitution,
                combined: &[Constitution, Strength, Spirit, Knowledge],
            }),
            AncestryType::Gnome => AncestryRule::Requirement(Requirement {
                key: Knowledge,
                combined: &[Knowledge, Constitution, Dexterity],
            }),
            AncestryType::HouseElf => AncestryRule::Requirement(Requirement {
                key: Spirit,
                combined: &[Spirit, Knowledge, Knowledge],
            }),
            AncestryType::Random => AncestryRule::Unresolved,
        }
    }

    /// Rolls a concrete ancestry other than the one at `last_displayed`.
    ///
    /// When `last_displayed` is not a concrete ancestry index, any of the
    /// five may come up.
    pub fn reroll<R: Rng + ?Sized>(last_displayed: usize, rng: &mut R) -> AncestryType {
        let count = Self::CONCRETE.len();
        let index = if last_displayed < count {
            let pick = rng.gen_range(0..count - 1);
            if pick >= last_displayed {
                pick + 1
            } else {
                pick
            }
        } else {
            rng.gen_range(0..count)
        };
        Self::CONCRETE[index]
    }

    fn name_key(self) -> LocalizationId {
        match self {
            AncestryType::Human => LocalizationId::Human,
            AncestryType::Catfolk => LocalizationId::Catfolk,
            AncestryType::Dwarf => LocalizationId::Dwarf,
            AncestryType::Gnome => LocalizationId::Gnome,
            AncestryType::HouseElf => LocalizationId::HouseElf,
            AncestryType::Random => LocalizationId::Random,
        }
    }

    fn description_key(self) -> LocalizationId {
        match self {
            AncestryType::Human => LocalizationId::HumanDesc,
            AncestryType::Catfolk => LocalizationId::CatfolkDesc,
            AncestryType::Dwarf => LocalizationId::DwarfDesc,
            AncestryType::Gnome => LocalizationId::GnomeDesc,
            AncestryType::HouseElf => LocalizationId::HouseElfDesc,
            AncestryType::Random => LocalizationId::RandomDesc,
        }
    }
}

impl std::str::FromStr for AncestryType {
    type Err = RrogueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(|c: char| c == '-' || c == '_' || c == ' ', "").as_str() {
            "human" => Ok(AncestryType::Human),
            "catfolk" => Ok(AncestryType::Catfolk),
            "dwarf" => Ok(AncestryType::Dwarf),
            "gnome" => Ok(AncestryType::Gnome),
            "houseelf" => Ok(AncestryType::HouseElf),
            "random" => Ok(AncestryType::Random),
            _ => Err(RrogueError::InvalidAction(format!("Unknown ancestry: {}", s))),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ancestry {
    pub ancestry_type: AncestryType,
    /// Display name, e.g. "House-elf"
    pub name: String,
    /// Text for the info panel
    pub description: String,
}

/// All ancestries with their display texts, built once at startup and
/// shared by reference afterwards.
#[derive(Debug, Clone)]
pub struct AncestryCatalog {
    entries: Vec<Ancestry>,
}

impl AncestryCatalog {
    /// Builds the catalog with texts from `text`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{AncestryCatalog, AncestryType, EnglishText};
    ///
    /// let catalog = AncestryCatalog::new(&EnglishText);
    /// assert_eq!(catalog.get(AncestryType::HouseElf).name, "House-elf");
    /// assert_eq!(catalog.concrete().len(), 5);
    /// ```
    pub fn new(text: &dyn TextSource) -> Self {
        let entries = AncestryType::ALL
            .iter()
            .map(|&ancestry_type| Ancestry {
                ancestry_type,
                name: text.text(ancestry_type.name_key()),
                description: text.text(ancestry_type.description_key()),
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, ancestry_type: AncestryType) -> &Ancestry {
        &self.entries[ancestry_type.index()]
    }

    /// Entry at a display index, Random included.
    pub fn entry(&self, index: usize) -> Option<&Ancestry> {
        self.entries.get(index)
    }

    /// The playable entries.
    pub fn concrete(&self) -> &[Ancestry] {
        &self.entries[..AncestryType::CONCRETE.len()]
    }

    /// The Random sentinel entry.
    pub fn random(&self) -> &Ancestry {
        self.get(AncestryType::Random)
    }

    /// Number of entries, Random included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rolls a concrete entry other than the one last displayed.
    pub fn reroll<R: Rng + ?Sized>(&self, last_displayed: usize, rng: &mut R) -> &Ancestry {
        self.get(AncestryType::reroll(last_displayed, rng))
    }
}

/// Selection cursor of the ancestry list.
///
/// The cursor always rests on a concrete ancestry. Moving onto Random
/// immediately rolls a different concrete ancestry and shows that one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestryPicker {
    displayed: usize,
}

impl AncestryPicker {
    /// Starts on Human.
    pub fn new() -> Self {
        Self {
            displayed: AncestryType::Human.index(),
        }
    }

    /// The ancestry currently shown.
    pub fn current(&self) -> AncestryType {
        AncestryType::CONCRETE[self.displayed]
    }

    /// Display index of the ancestry currently shown.
    pub fn displayed_index(&self) -> usize {
        self.displayed
    }

    /// Moves to the next entry, wrapping around.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AncestryType {
        let index = (self.displayed + 1) % AncestryType::ALL.len();
        self.show(index, rng)
    }

    /// Moves to the previous entry, wrapping around.
    pub fn previous<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AncestryType {
        let count = AncestryType::ALL.len();
        let index = (self.displayed + count - 1) % count;
        self.show(index, rng)
    }

    /// Selects an ancestry directly.
    pub fn select<R: Rng + ?Sized>(&mut self, ancestry: AncestryType, rng: &mut R) -> AncestryType {
        self.show(ancestry.index(), rng)
    }

    /// Selects by display index.
    pub fn select_index<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> RrogueResult<AncestryType> {
        if AncestryType::from_index(index).is_none() {
            return Err(RrogueError::InvalidAction(format!(
                "No ancestry at index {}",
                index
            )));
        }
        Ok(self.show(index, rng))
    }

    fn show<R: Rng + ?Sized>(&mut self, index: usize, rng: &mut R) -> AncestryType {
        let ancestry = match AncestryType::from_index(index) {
            Some(AncestryType::Random) | None => {
                let rolled = AncestryType::reroll(self.displayed, rng);
                debug!("Random ancestry rolled {:?}", rolled);
                rolled
            }
            Some(ancestry) => ancestry,
        };
        self.displayed = ancestry.index();
        ancestry
    }
}

impl Default for AncestryPicker {
    fn default() -> Self {
        Self::new()
    }
}
