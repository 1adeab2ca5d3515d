//! Stop directory: names, per-direction offsets, and fragment lookup.

use std::collections::{BTreeMap, HashSet};

/// One stop: the travel directions serviceable from it, each with the
/// minute offset added to every trunk departure to get the arrival here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stop {
    /// direction label -> minutes after the trunk departure
    pub directions: BTreeMap<String, u32>,
}

impl Stop {
    pub fn new<D: Into<String>>(directions: impl IntoIterator<Item = (D, u32)>) -> Self {
        Self {
            directions: directions
                .into_iter()
                .map(|(d, off)| (d.into(), off))
                .collect(),
        }
    }
}

/// Outcome of a fragment lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopLookup<'a> {
    /// Exactly one stop matched.
    Unique { name: &'a str, stop: &'a Stop },
    /// Several stops matched; the client should narrow the fragment.
    /// Names are sorted for stable responses.
    Ambiguous(Vec<&'a str>),
    /// Nothing matched.
    NotFound,
}

/// The static stop directory, plus the set of transfer stops where the
/// timeline synthesis applies its one-shot index skip.
#[derive(Debug, Clone)]
pub struct StopDirectory {
    stops: BTreeMap<String, Stop>,
    transfer_stops: HashSet<String>,
}

impl StopDirectory {
    pub fn new(
        stops: impl IntoIterator<Item = (String, Stop)>,
        transfer_stops: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            stops: stops.into_iter().collect(),
            transfer_stops: transfer_stops.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Whether a rider changes buses at this stop.
    pub fn is_transfer(&self, name: &str) -> bool {
        self.transfer_stops.contains(name)
    }

    /// Case-insensitive substring lookup of a user-supplied fragment.
    ///
    /// The directory iterates in name order, so an ambiguous result lists
    /// candidates deterministically.
    pub fn find(&self, fragment: &str) -> StopLookup<'_> {
        let needle = fragment.to_lowercase();
        let mut matches: Vec<(&str, &Stop)> = self
            .stops
            .iter()
            .filter(|(name, _)| name.to_lowercase().contains(&needle))
            .map(|(name, stop)| (name.as_str(), stop))
            .collect();

        match matches.len() {
            0 => StopLookup::NotFound,
            1 => {
                let (name, stop) = matches.remove(0);
                StopLookup::Unique { name, stop }
            }
            _ => StopLookup::Ambiguous(matches.into_iter().map(|(name, _)| name).collect()),
        }
    }
}
