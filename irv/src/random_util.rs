// Copyright 2023-2026 Andrew Conway.
// This file is part of ConcreteIRV.
// ConcreteIRV is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version.
// ConcreteIRV is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License along with ConcreteIRV.  If not, see <https://www.gnu.org/licenses/>.


//! Where random decisions come from.


use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// The source of random decisions. Tests and repeatable counts want something seeded or deterministic.
pub enum Randomness {
    /// Use a pseudo random number generator.
    PRNG(ChaCha20Rng),
    /// No randomness; always choose the first of the candidates given, which is the one earliest on the option list.
    /// This is the reverse donkey vote, which some electoral commissions have used.
    ReverseDonkeyVote,
}

impl Randomness {
    /// A generator seeded from the operating system.
    pub fn from_entropy() -> Self { Randomness::PRNG(ChaCha20Rng::from_os_rng()) }

    /// A repeatable generator.
    pub fn seeded(seed:u64) -> Self { Randomness::PRNG(ChaCha20Rng::seed_from_u64(seed)) }

    /// Choose a number in 0..n uniformly. n must be positive.
    /// ```
    /// use irv::random_util::Randomness;
    /// let mut randomness = Randomness::seeded(7);
    /// for _ in 0..100 { assert!(randomness.choose_index(3)<3); }
    /// assert_eq!(Randomness::ReverseDonkeyVote.choose_index(3),0);
    /// ```
    pub fn choose_index(&mut self,n:usize) -> usize {
        match self {
            Randomness::PRNG(rng) => rng.random_range(0..n),
            Randomness::ReverseDonkeyVote => 0,
        }
    }

    /// Choose one of the given elements.
    pub fn choose<'a,T>(&mut self,elements:&'a [T]) -> Option<&'a T> {
        if elements.is_empty() { None } else { Some(&elements[self.choose_index(elements.len())]) }
    }
}

impl Default for Randomness {
    fn default() -> Self { Randomness::from_entropy() }
}

impl std::fmt::Debug for Randomness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Randomness::PRNG(_) => f.write_str("PRNG"),
            Randomness::ReverseDonkeyVote => f.write_str("ReverseDonkeyVote"),
        }
    }
}
