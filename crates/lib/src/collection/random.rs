//! Random sampling and shuffling.

use rand::Rng;
use rand::seq::SliceRandom;

use super::{Collection, CollectionError};
use crate::Result;

/// Result of [`Collection::random`].
#[derive(Debug, Clone, PartialEq)]
pub enum Pick<V> {
    /// A single sampled value
    One(V),
    /// Several sampled entries, with their original keys and relative order
    Many(Collection<V>),
}

impl<V> Pick<V> {
    /// Returns the value if a single item was picked
    pub fn into_one(self) -> Option<V> {
        match self {
            Pick::One(value) => Some(value),
            Pick::Many(_) => None,
        }
    }

    /// Returns the sub-collection if several items were picked
    pub fn into_many(self) -> Option<Collection<V>> {
        match self {
            Pick::Many(collection) => Some(collection),
            Pick::One(_) => None,
        }
    }

    /// Number of items picked
    pub fn len(&self) -> usize {
        match self {
            Pick::One(_) => 1,
            Pick::Many(collection) => collection.len(),
        }
    }

    /// Always false; a pick holds at least one item
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl<V: Clone> Collection<V> {
    /// Picks `amount` entries uniformly at random, without replacement.
    ///
    /// Returns `Ok(None)` for an empty collection. Fails with `OutOfRange`
    /// when `amount` is zero or larger than the collection.
    pub fn random(&self, amount: usize) -> Result<Option<Pick<V>>> {
        self.random_with(&mut rand::thread_rng(), amount)
    }

    /// [`Collection::random`] with a caller-supplied random number generator
    pub fn random_with<R: Rng>(&self, rng: &mut R, amount: usize) -> Result<Option<Pick<V>>> {
        if self.is_empty() {
            return Ok(None);
        }
        if amount == 0 || amount > self.len() {
            return Err(CollectionError::OutOfRange {
                requested: amount,
                available: self.len(),
            }
            .into());
        }

        tracing::trace!(amount, available = self.len(), "Sampling collection");
        if amount == 1 {
            let position = rng.gen_range(0..self.len());
            let value = self.all()[position].clone();
            return Ok(Some(Pick::One(value)));
        }

        let mut positions = rand::seq::index::sample(rng, self.len(), amount).into_vec();
        positions.sort_unstable();
        let entries = positions.into_iter().filter_map(|position| {
            self.all()
                .get_index(position)
                .map(|(key, value)| (key.clone(), value.clone()))
        });
        Ok(Some(Pick::Many(Self::from_unique_entries(entries))))
    }

    /// Returns the values in random order under fresh positional keys
    pub fn shuffle(&self) -> Self {
        self.shuffle_with(&mut rand::thread_rng())
    }

    /// [`Collection::shuffle`] with a caller-supplied random number generator
    pub fn shuffle_with<R: Rng>(&self, rng: &mut R) -> Self {
        let mut values = self.to_vec();
        values.shuffle(rng);
        Self::from_values(values)
    }
}
