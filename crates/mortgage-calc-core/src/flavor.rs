//! Light-hearted messages shown alongside a savings projection.

use rand::seq::SliceRandom;
use rand::Rng;

pub const MESSAGES: [&str; 4] = [
    "Looks like you might hatch some extra savings! 🐣",
    "More savings = more chicken feed for you! 🏡",
    "Don't count your chickens yet, but this looks good! 🥚",
    "Interest rates dropping? That's eggs-cellent news! 🍳",
];

/// Pick one message uniformly at random.
pub fn pick_message<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    MESSAGES.choose(rng).copied().unwrap_or(MESSAGES[0])
}

pub fn random_message() -> &'static str {
    pick_message(&mut rand::thread_rng())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_message_comes_from_list() {
        assert!(MESSAGES.contains(&random_message()));
    }

    #[test]
    fn test_every_message_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let seen: HashSet<&str> = (0..200).map(|_| pick_message(&mut rng)).collect();
        assert_eq!(seen.len(), MESSAGES.len());
    }
}
