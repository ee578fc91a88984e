use std::collections::HashSet;

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::model::EntryId;

/// Draws dictionary entries without repetition within a session.
///
/// The sampler only remembers what it has handed out. Callers pass the
/// eligible ids on every call, so a level filter can change without the
/// sampler knowing how the list was produced.
#[derive(Debug, Clone, Default)]
pub struct Sampler {
    drawn: HashSet<EntryId>,
}

impl Sampler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Eligible ids not drawn yet, in input order with duplicates removed.
    #[must_use]
    pub fn available(&self, all: &[EntryId]) -> Vec<EntryId> {
        let mut seen = HashSet::with_capacity(all.len());
        all.iter()
            .copied()
            .filter(|id| !self.drawn.contains(id) && seen.insert(*id))
            .collect()
    }

    /// Draw an unused id uniformly at random.
    ///
    /// Returns `None` once every id in `all` has been drawn; that is the
    /// normal end of a session, not an error.
    pub fn draw(&mut self, all: &[EntryId]) -> Option<EntryId> {
        self.draw_with(all, &mut rand::rng())
    }

    /// Same as [`Sampler::draw`] with a caller-supplied random source.
    pub fn draw_with<R: Rng + ?Sized>(&mut self, all: &[EntryId], rng: &mut R) -> Option<EntryId> {
        let available = self.available(all);
        let id = *available.choose(rng)?;
        self.drawn.insert(id);
        Some(id)
    }

    /// Number of ids in `all` that can still be drawn.
    #[must_use]
    pub fn remaining_count(&self, all: &[EntryId]) -> usize {
        self.available(all).len()
    }

    /// Forget every drawn id.
    pub fn reset(&mut self) {
        self.drawn.clear();
    }

    #[must_use]
    pub fn drawn_count(&self) -> usize {
        self.drawn.len()
    }

    #[must_use]
    pub fn is_drawn(&self, id: EntryId) -> bool {
        self.drawn.contains(&id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn ids(values: &[usize]) -> Vec<EntryId> {
        values.iter().copied().map(EntryId::new).collect()
    }

    #[test]
    fn draws_are_distinct_and_within_the_set() {
        let all = ids(&[3, 5, 8, 13, 21]);
        let mut rng = StdRng::seed_from_u64(7);
        let mut sampler = Sampler::new();
        let mut seen = HashSet::new();

        for _ in 0..all.len() {
            let id = sampler.draw_with(&all, &mut rng).unwrap();
            assert!(all.contains(&id));
            assert!(seen.insert(id), "{id:?} drawn twice");
        }
        assert_eq!(sampler.drawn_count(), all.len());
    }

    #[test]
    fn exhaustion_returns_none_and_zero_remaining() {
        let all = ids(&[0, 1, 2]);
        let mut sampler = Sampler::new();

        assert_eq!(sampler.remaining_count(&all), 3);
        for expected_remaining in [2, 1, 0] {
            assert!(sampler.draw(&all).is_some());
            assert_eq!(sampler.remaining_count(&all), expected_remaining);
        }
        assert_eq!(sampler.draw(&all), None);
        assert_eq!(sampler.remaining_count(&all), 0);
    }

    #[test]
    fn empty_set_is_exhausted_immediately() {
        let mut sampler = Sampler::new();
        assert_eq!(sampler.draw(&[]), None);
        assert_eq!(sampler.remaining_count(&[]), 0);
    }

    #[test]
    fn reset_makes_every_id_drawable_again() {
        let all = ids(&[0, 1, 2]);
        let mut sampler = Sampler::new();
        while sampler.draw(&all).is_some() {}

        sampler.reset();
        assert_eq!(sampler.drawn_count(), 0);
        assert_eq!(sampler.remaining_count(&all), 3);

        let mut redrawn = HashSet::new();
        while let Some(id) = sampler.draw(&all) {
            redrawn.insert(id);
        }
        assert_eq!(redrawn, all.iter().copied().collect());

        sampler.reset();
        sampler.reset();
        assert_eq!(sampler.drawn_count(), 0);
    }

    #[test]
    fn duplicate_inputs_count_once() {
        let all = ids(&[4, 4, 4, 9]);
        let mut sampler = Sampler::new();
        assert_eq!(sampler.remaining_count(&all), 2);
        assert!(sampler.draw(&all).is_some());
        assert!(sampler.draw(&all).is_some());
        assert_eq!(sampler.draw(&all), None);
    }

    #[test]
    fn ids_drawn_outside_the_current_set_do_not_reduce_it() {
        let mut sampler = Sampler::new();
        let _ = sampler.draw(&ids(&[42]));
        assert!(sampler.is_drawn(EntryId::new(42)));
        assert_eq!(sampler.remaining_count(&ids(&[0, 1])), 2);
    }

    #[test]
    fn first_draw_is_roughly_uniform() {
        let all = ids(&[0, 1, 2]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0_u32; 3];

        for _ in 0..3000 {
            let mut sampler = Sampler::new();
            let id = sampler.draw_with(&all, &mut rng).unwrap();
            counts[id.index()] += 1;
        }

        for count in counts {
            assert!((800..=1200).contains(&count), "skewed counts: {counts:?}");
        }
    }
}
