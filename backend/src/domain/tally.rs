//! Party affiliation tallies.
//!
//! Tallies are derived on demand from a slice of profiles and never
//! persisted. Input order matters: parties keep first-appearance order and
//! the winner resolves ties in favour of the earliest tally.

use crate::domain::{PoliticalParty, User};

/// Number of profiles affiliated with one party.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyTally {
    party: PoliticalParty,
    members: u64,
}

impl PartyTally {
    /// Party the tally counts.
    #[must_use]
    pub fn party(&self) -> &PoliticalParty {
        &self.party
    }

    /// Number of affiliated profiles.
    #[must_use]
    pub fn members(&self) -> u64 {
        self.members
    }
}

/// Count affiliated profiles per party.
///
/// Unaffiliated profiles contribute nothing. Parties appear in the order
/// their first member appears in `users`.
#[must_use]
pub fn tally_parties(users: &[User]) -> Vec<PartyTally> {
    let mut tallies: Vec<PartyTally> = Vec::new();
    for user in users {
        let Some(party) = user.political_party() else {
            continue;
        };
        match tallies.iter_mut().find(|tally| tally.party == *party) {
            Some(tally) => tally.members += 1,
            None => tallies.push(PartyTally {
                party: party.clone(),
                members: 1,
            }),
        }
    }
    tallies
}

/// Tally with the greatest member count.
///
/// Ties keep the earliest tally in the slice; an empty slice has no winner.
#[must_use]
pub fn winning_party(tallies: &[PartyTally]) -> Option<&PartyTally> {
    tallies.iter().reduce(|best, candidate| {
        if candidate.members > best.members {
            candidate
        } else {
            best
        }
    })
}
