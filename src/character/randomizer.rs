//! # Attribute Randomizer
//!
//! Finds a point distribution for an ancestry by randomized local search.
//!
//! The search starts from one point in every attribute and shuffles single
//! points between slots. From iteration 50 on, every fifth iteration looks
//! at the ancestry's requirement clause: a key attribute at zero is forced
//! up on the next move, and a met combined total ends the search. Nothing
//! guarantees success within the iteration ceiling, so the outcome reports
//! whether the final distribution actually satisfies the ancestry.

use crate::config;
use crate::{AncestryRule, AncestryType, Attribute, Attributes, RrogueError, RrogueResult};
use log::{debug, warn};
use rand::Rng;

/// How a randomizer run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomizeOutcome {
    /// Iterations performed, counting from 1
    pub iterations: u32,
    /// The requirement check ended the search before the ceiling
    pub stopped_early: bool,
    /// The resulting distribution is valid for the ancestry
    pub satisfied: bool,
}

impl RandomizeOutcome {
    /// The search ran to the ceiling without an early stop.
    pub fn exhausted(&self) -> bool {
        !self.stopped_early
    }
}

/// Tunables of the randomized search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRandomizer {
    pub max_iterations: u32,
    pub first_check: u32,
    pub check_interval: u32,
    /// Per-attribute cap during the search
    pub max_value: u8,
}

impl Default for AttributeRandomizer {
    fn default() -> Self {
        Self::new()
    }
}

impl AttributeRandomizer {
    /// A randomizer with the standard limits.
    pub fn new() -> Self {
        Self {
            max_iterations: config::RANDOMIZER_MAX_ITERATIONS,
            first_check: config::RANDOMIZER_FIRST_CHECK,
            check_interval: config::RANDOMIZER_CHECK_INTERVAL,
            max_value: config::MAX_ATTRIBUTE_VALUE,
        }
    }

    /// Overwrites `attributes` with a distribution searched for `ancestry`.
    ///
    /// The result always has every attribute between 0 and the cap and
    /// spends exactly five points; whether it meets the ancestry clause is
    /// reported in the outcome. Random has to be resolved first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rand::{rngs::StdRng, SeedableRng};
    /// use rrogue::{AncestryType, AttributeRandomizer, Attributes};
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let mut attributes = Attributes::new();
    /// let outcome = AttributeRandomizer::new()
    ///     .randomize(AncestryType::Human, &mut attributes, &mut rng)
    ///     .unwrap();
    /// assert_eq!(outcome.iterations, 50);
    /// assert_eq!(attributes.total(), 5);
    /// ```
    pub fn randomize<R: Rng + ?Sized>(
        &self,
        ancestry: AncestryType,
        attributes: &mut Attributes,
        rng: &mut R,
    ) -> RrogueResult<RandomizeOutcome> {
        let rule = ancestry.rule();
        if rule == AncestryRule::Unresolved {
            return Err(RrogueError::UnresolvedAncestry);
        }

        let mut values = [1u8; 5];
        let (iterations, stopped_early) = self.search(rule, &mut values, rng);

        *attributes = Attributes::from_array(values);
        let satisfied = attributes.is_valid_for(ancestry);
        if satisfied {
            debug!(
                "Randomized {:?} attributes {:?} in {} iterations",
                ancestry,
                values,
                iterations
            );
        } else {
            warn!(
                "Attribute search for {:?} gave up after {} iterations with {:?}",
                ancestry, iterations, values
            );
        }

        Ok(RandomizeOutcome {
            iterations,
            stopped_early,
            satisfied,
        })
    }

    /// Runs the point-shuffling loop on `values` until the rule's check
    /// stops it or the ceiling is reached.
    ///
    /// Returns the iterations performed and whether the check stopped it.
    fn search<R: Rng + ?Sized>(
        &self,
        rule: AncestryRule,
        values: &mut [u8; 5],
        rng: &mut R,
    ) -> (u32, bool) {
        let slots = Attribute::ALL.len();
        let mut must_increase: Option<usize> = None;
        let mut iterations = 0;

        for iteration in 1..=self.max_iterations {
            iterations = iteration;

            let from = rng.gen_range(0..slots);
            let mut to = (from + rng.gen_range(0..=3)) % slots;
            if let Some(slot) = must_increase.take() {
                to = slot;
            }
            self.shift_point(values, from, to);

            if iteration < self.first_check || iteration % self.check_interval != 0 {
                continue;
            }

            match rule {
                AncestryRule::Requirement(requirement) => {
                    let current = Attributes::from_array(*values);
                    if current.get(requirement.key) == 0 {
                        must_increase = Some(requirement.key.index());
                        continue;
                    }
                    if requirement.combined_total(&current) >= crate::REQUIRED_COMBINED_POINTS {
                        return (iterations, true);
                    }
                }
                _ => return (iterations, true),
            }
        }

        (iterations, false)
    }

    /// Moves one point from `from` to `to`, or back the other way when that
    /// direction is blocked by the cap or an empty slot.
    fn shift_point(&self, values: &mut [u8; 5], from: usize, to: usize) {
        if values[to] < self.max_value && values[from] > 0 {
            values[from] -= 1;
            values[to] += 1;
        } else if values[from] < self.max_value && values[to] > 0 {
            values[to] -= 1;
            values[from] += 1;
        }
    }
}
