//! # Character Creation
//!
//! The model behind the character-creation form: a name, the ancestry
//! cursor and a pool of attribute points spent one at a time.

use crate::config;
use crate::{
    AncestryPicker, AncestryType, Attribute, AttributeRandomizer, Attributes, Player,
    RandomizeOutcome, RrogueError, RrogueResult,
};
use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

/// Names offered by Randomize All.
pub const RANDOM_NAMES: [&str; 8] = [
    "Aldric", "Brenna", "Corwin", "Dagny", "Elspeth", "Fenwick", "Gisla", "Hollis",
];

/// A character under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterDraft {
    pub name: String,
    picker: AncestryPicker,
    attributes: Attributes,
    points_remaining: u8,
}

impl Default for CharacterDraft {
    fn default() -> Self {
        Self::new("")
    }
}

impl CharacterDraft {
    /// A Human draft with every point unspent.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            picker: AncestryPicker::new(),
            attributes: Attributes::new(),
            points_remaining: config::ATTRIBUTE_POINT_BUDGET,
        }
    }

    pub fn ancestry(&self) -> AncestryType {
        self.picker.current()
    }

    pub fn picker(&self) -> &AncestryPicker {
        &self.picker
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn points_remaining(&self) -> u8 {
        self.points_remaining
    }

    /// Selects an ancestry. Random resolves to a concrete one right away.
    pub fn set_ancestry<R: Rng + ?Sized>(&mut self, ancestry: AncestryType, rng: &mut R) -> AncestryType {
        self.picker.select(ancestry, rng)
    }

    pub fn next_ancestry<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AncestryType {
        self.picker.next(rng)
    }

    pub fn previous_ancestry<R: Rng + ?Sized>(&mut self, rng: &mut R) -> AncestryType {
        self.picker.previous(rng)
    }

    /// Spends one point on an attribute.
    ///
    /// Fails when the pool is empty or the attribute is already at the cap.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::{Attribute, CharacterDraft};
    ///
    /// let mut draft = CharacterDraft::new("Hero");
    /// draft.increase(Attribute::Strength).unwrap();
    /// draft.increase(Attribute::Strength).unwrap();
    /// draft.increase(Attribute::Strength).unwrap();
    /// assert!(draft.increase(Attribute::Strength).is_err());
    /// assert_eq!(draft.points_remaining(), 2);
    /// ```
    pub fn increase(&mut self, attribute: Attribute) -> RrogueResult<u8> {
        let current = self.attributes.get(attribute);
        if self.points_remaining == 0 {
            return Err(RrogueError::InvalidAction(
                "No attribute points remaining".to_string(),
            ));
        }
        if current >= config::MAX_ATTRIBUTE_VALUE {
            return Err(RrogueError::InvalidAction(format!(
                "{} is already at {}",
                attribute.abbreviation(),
                config::MAX_ATTRIBUTE_VALUE
            )));
        }
        self.attributes.set(attribute, current + 1);
        self.points_remaining -= 1;
        Ok(current + 1)
    }

    /// Returns one point from an attribute to the pool.
    pub fn decrease(&mut self, attribute: Attribute) -> RrogueResult<u8> {
        let current = self.attributes.get(attribute);
        if current == 0 {
            return Err(RrogueError::InvalidAction(format!(
                "{} is already at 0",
                attribute.abbreviation()
            )));
        }
        self.attributes.set(attribute, current - 1);
        self.points_remaining += 1;
        Ok(current - 1)
    }

    /// Puts every point back into the pool.
    pub fn reset_attributes(&mut self) {
        self.attributes = Attributes::new();
        self.points_remaining = config::ATTRIBUTE_POINT_BUDGET;
    }

    /// Fills the attributes for the current ancestry with the randomizer.
    /// The randomizer always spends the whole budget.
    pub fn randomize_attributes<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> RrogueResult<RandomizeOutcome> {
        let outcome =
            AttributeRandomizer::new().randomize(self.ancestry(), &mut self.attributes, rng)?;
        self.points_remaining = 0;
        Ok(outcome)
    }

    /// Rolls a name, a concrete ancestry and attributes to match.
    pub fn randomize_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> RrogueResult<RandomizeOutcome> {
        if let Some(name) = RANDOM_NAMES.choose(rng) {
            self.name = (*name).to_string();
        }
        let ancestry = self.picker.select(AncestryType::Random, rng);
        debug!("Randomize All picked {} the {:?}", self.name, ancestry);
        self.randomize_attributes(rng)
    }

    /// Whether the draft can become a player.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && self.attributes.is_valid_for(self.ancestry())
    }

    /// Turns the draft into a player.
    pub fn finalize(&self) -> RrogueResult<Player> {
        let ancestry = self.ancestry();
        if ancestry.is_random() {
            return Err(RrogueError::UnresolvedAncestry);
        }
        if self.name.trim().is_empty() {
            return Err(RrogueError::IncompleteCharacter(
                "the character needs a name".to_string(),
            ));
        }
        if !self.attributes.is_valid_for(ancestry) {
            return Err(RrogueError::IncompleteCharacter(format!(
                "attributes {:?} do not meet the {:?} requirement",
                self.attributes.as_array(),
                ancestry
            )));
        }
        info!("Created {} the {:?}", self.name.trim(), ancestry);
        Ok(Player::new(self.name.trim(), ancestry, self.attributes))
    }
}
