//! # Attributes
//!
//! How many points a creature has in each of the five attributes, and the
//! check of a point distribution against an ancestry's requirement.

use crate::config;
use crate::{AncestryRule, AncestryType, RrogueError, RrogueResult};
use serde::{Deserialize, Serialize};

/// One of the five character attributes.
///
/// The declaration order is the order used by bulk assignment and by the
/// randomizer's slot indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute {
    Strength,
    Dexterity,
    Constitution,
    Spirit,
    Knowledge,
}

impl Attribute {
    /// All attributes in slot order.
    pub const ALL: [Attribute; 5] = [
        Attribute::Strength,
        Attribute::Dexterity,
        Attribute::Constitution,
        Attribute::Spirit,
        Attribute::Knowledge,
    ];

    /// Slot index of the attribute (0 to 4).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The attribute in a slot.
    pub fn from_index(index: usize) -> Option<Attribute> {
        Self::ALL.get(index).copied()
    }

    /// Three-letter abbreviation shown in the creation form.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Attribute::Strength => "Str",
            Attribute::Dexterity => "Dex",
            Attribute::Constitution => "Con",
            Attribute::Spirit => "Spi",
            Attribute::Knowledge => "Kno",
        }
    }
}

/// Point values of the five attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attributes {
    pub strength: u8,
    pub dexterity: u8,
    pub constitution: u8,
    pub spirit: u8,
    pub knowledge: u8,
}

impl Attributes {
    /// All attributes at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds attributes from values in slot order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rrogue::Attributes;
    ///
    /// let attributes = Attributes::from_slice(&[1, 2, 0, 1, 1]).unwrap();
    /// assert_eq!(attributes.dexterity, 2);
    /// assert!(Attributes::from_slice(&[1, 2]).is_err());
    /// ```
    pub fn from_slice(values: &[u8]) -> RrogueResult<Self> {
        let mut attributes = Self::new();
        attributes.assign_from_slice(values)?;
        Ok(attributes)
    }

    /// Overwrites every attribute from values in the order
    /// strength, dexterity, constitution, spirit, knowledge.
    ///
    /// Exactly five values are required; otherwise nothing is assigned.
    pub fn assign_from_slice(&mut self, values: &[u8]) -> RrogueResult<()> {
        let values: [u8; 5] = values
            .try_into()
            .map_err(|_| RrogueError::InvalidLength {
                expected: Attribute::ALL.len(),
                actual: values.len(),
            })?;
        *self = Self::from_array(values);
        Ok(())
    }

    /// Builds attributes from a slot-ordered array.
    pub fn from_array(values: [u8; 5]) -> Self {
        Self {
            strength: values[0],
            dexterity: values[1],
            constitution: values[2],
            spirit: values[3],
            knowledge: values[4],
        }
    }

    /// Values in slot order.
    pub fn as_array(&self) -> [u8; 5] {
        [
            self.strength,
            self.dexterity,
            self.constitution,
            self.spirit,
            self.knowledge,
        ]
    }

    pub fn get(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Dexterity => self.dexterity,
            Attribute::Constitution => self.constitution,
            Attribute::Spirit => self.spirit,
            Attribute::Knowledge => self.knowledge,
        }
    }

    /// Sets one attribute to an exact value. No bounds are applied here;
    /// the creation form enforces the per-attribute cap and point budget.
    pub fn set(&mut self, attribute: Attribute, amount: u8) {
        let slot = match attribute {
            Attribute::Strength => &mut self.strength,
            Attribute::Dexterity => &mut self.dexterity,
            Attribute::Constitution => &mut self.constitution,
            Attribute::Spirit => &mut self.spirit,
            Attribute::Knowledge => &mut self.knowledge,
        };
        *slot = amount;
    }

    /// Sum of all five attributes.
    pub fn total(&self) -> u32 {
        self.as_array().iter().map(|&value| u32::from(value)).sum()
    }

    /// Checks this distribution against an ancestry's requirement.
    pub fn is_valid_for(&self, ancestry: AncestryType) -> bool {
        is_valid_for_ancestry(ancestry, self)
    }
}

/// Checks whether a point distribution lets a character play an ancestry.
///
/// Every ancestry needs the full point budget spent. Human needs exactly
/// that and nothing more; the other concrete ancestries add a clause on a
/// key attribute and a combined total. Random never validates.
///
/// # Examples
///
/// ```
/// use rrogue::{is_valid_for_ancestry, AncestryType, Attributes};
///
/// let attributes = Attributes::from_slice(&[1, 1, 1, 1, 1]).unwrap();
/// assert!(is_valid_for_ancestry(AncestryType::Human, &attributes));
/// assert!(is_valid_for_ancestry(AncestryType::Catfolk, &attributes));
/// assert!(!is_valid_for_ancestry(AncestryType::Random, &attributes));
/// ```
pub fn is_valid_for_ancestry(ancestry: AncestryType, attributes: &Attributes) -> bool {
    let budget = u32::from(config::ATTRIBUTE_POINT_BUDGET);
    let total = attributes.total();
    if total < budget {
        return false;
    }
    match ancestry.rule() {
        AncestryRule::ExactBudget => total == budget,
        AncestryRule::Requirement(requirement) => requirement.is_met(attributes),
        AncestryRule::Unresolved => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes_are_zero() {
        let attributes = Attributes::new();
        assert_eq!(attributes.as_array(), [0; 5]);
        assert_eq!(attributes.total(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut attributes = Attributes::new();
        for (value, attribute) in Attribute::ALL.into_iter().enumerate() {
            attributes.set(attribute, value as u8);
        }
        assert_eq!(attributes.as_array(), [0, 1, 2, 3, 4]);
        assert_eq!(attributes.get(Attribute::Spirit), 3);
        assert_eq!(attributes.total(), 10);
    }

    #[test]
    fn test_set_has_no_cap() {
        let mut attributes = Attributes::new();
        attributes.set(Attribute::Strength, 200);
        assert_eq!(attributes.strength, 200);
    }

    #[test]
    fn test_bulk_assignment_order() {
        let attributes = Attributes::from_slice(&[1, 2, 0, 1, 1]).unwrap();
        assert_eq!(attributes.strength, 1);
        assert_eq!(attributes.dexterity, 2);
        assert_eq!(attributes.constitution, 0);
        assert_eq!(attributes.spirit, 1);
        assert_eq!(attributes.knowledge, 1);
    }

    #[test]
    fn test_bulk_assignment_short_input_fails_untouched() {
        let mut attributes = Attributes::from_slice(&[3, 0, 0, 1, 1]).unwrap();
        let result = attributes.assign_from_slice(&[1, 2, 3]);
        assert!(matches!(
            result,
            Err(RrogueError::InvalidLength {
                expected: 5,
                actual: 3
            })
        ));
        assert_eq!(attributes.as_array(), [3, 0, 0, 1, 1]);
    }

    #[test]
    fn test_bulk_assignment_long_input_fails() {
        let result = Attributes::from_slice(&[1, 1, 1, 1, 1, 1]);
        assert!(matches!(
            result,
            Err(RrogueError::InvalidLength { actual: 6, .. })
        ));
    }

    #[test]
    fn test_attribute_index_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_index(attribute.index()), Some(attribute));
        }
        assert_eq!(Attribute::from_index(5), None);
    }

    #[test]
    fn test_human_needs_exact_budget() {
        let five = Attributes::from_slice(&[5, 0, 0, 0, 0]).unwrap();
        let six = Attributes::from_slice(&[3, 3, 0, 0, 0]).unwrap();
        let four = Attributes::from_slice(&[1, 1, 1, 1, 0]).unwrap();
        assert!(five.is_valid_for(AncestryType::Human));
        assert!(!six.is_valid_for(AncestryType::Human));
        assert!(!four.is_valid_for(AncestryType::Human));
    }

    #[test]
    fn test_catfolk_rule() {
        let valid = Attributes::from_slice(&[1, 1, 1, 1, 1]).unwrap();
        let no_dex = Attributes::from_slice(&[3, 0, 1, 1, 0]).unwrap();
        let thin = Attributes::from_slice(&[0, 1, 2, 1, 1]).unwrap();
        assert!(valid.is_valid_for(AncestryType::Catfolk));
        assert!(!no_dex.is_valid_for(AncestryType::Catfolk));
        assert!(!thin.is_valid_for(AncestryType::Catfolk));
    }

    #[test]
    fn test_dwarf_rule() {
        let valid = Attributes::from_slice(&[0, 3, 1, 1, 0]).unwrap();
        let no_con = Attributes::from_slice(&[1, 1, 0, 2, 1]).unwrap();
        let thin = Attributes::from_slice(&[0, 4, 1, 0, 0]).unwrap();
        assert!(valid.is_valid_for(AncestryType::Dwarf));
        assert!(!no_con.is_valid_for(AncestryType::Dwarf));
        assert!(!thin.is_valid_for(AncestryType::Dwarf));
    }

    #[test]
    fn test_gnome_fixture() {
        // kno 1 > 0 and kno + con + dex = 1 + 0 + 2 = 3
        let attributes = Attributes::from_slice(&[1, 2, 0, 1, 1]).unwrap();
        assert!(attributes.is_valid_for(AncestryType::Gnome));

        let no_kno = Attributes::from_slice(&[1, 2, 1, 1, 0]).unwrap();
        assert!(!no_kno.is_valid_for(AncestryType::Gnome));
    }

    #[test]
    fn test_house_elf_counts_knowledge_twice() {
        // spi 1 + kno 1 + kno 1 = 3, dexterity never contributes
        let via_knowledge = Attributes::from_slice(&[2, 1, 0, 1, 1]).unwrap();
        assert!(via_knowledge.is_valid_for(AncestryType::HouseElf));

        // spi 1 + kno 0 + kno 0 = 1 even with plenty of dexterity
        let via_dexterity = Attributes::from_slice(&[1, 3, 0, 1, 0]).unwrap();
        assert!(!via_dexterity.is_valid_for(AncestryType::HouseElf));
    }

    #[test]
    fn test_random_never_valid() {
        for values in [[1, 1, 1, 1, 1], [3, 2, 0, 0, 0], [0, 0, 0, 2, 3]] {
            let attributes = Attributes::from_array(values);
            assert!(!attributes.is_valid_for(AncestryType::Random));
        }
    }

    #[test]
    fn test_under_budget_never_valid() {
        let attributes = Attributes::from_slice(&[1, 1, 1, 1, 0]).unwrap();
        for ancestry in AncestryType::ALL {
            assert!(!attributes.is_valid_for(ancestry));
        }
    }
}
