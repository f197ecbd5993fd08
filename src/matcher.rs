//! Pairs destroyed addresses with created ones.
//!
//! `terraform plan` tells us the direction (`state mv destroy[i] create[j]`) but
//! not which `i` goes with which `j`. A module move only adds or removes a
//! prefix, so either of these is possible:
//!
//! ```text
//! terraform state mv module.ci.aws_instance.docker           aws_instance.docker
//! terraform state mv           aws_instance.docker module.ci.aws_instance.docker
//! ```
//!
//! The heuristic is a plain string suffix test in either direction. It can
//! pair the wrong resources when several addresses share a trailing segment;
//! the first candidate in plan order always wins.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Address-to-address mapping, iterated in key order.
pub type AddressMapping = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matches {
    /// old -> new (destroy -> create)
    pub up: AddressMapping,
    /// new -> old (create -> destroy)
    pub down: AddressMapping,
    pub unmatched_destroy: Vec<String>,
    pub unmatched_create: Vec<String>,
}

impl Matches {
    pub fn len(&self) -> usize {
        self.up.len()
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_empty()
    }
}

fn is_related(a: &str, b: &str) -> bool {
    a.ends_with(b) || b.ends_with(a)
}

/// Matches each element of `destroy` to the first element of `create` that is
/// a suffix of it, or of which it is a suffix.
///
/// When that first candidate was already paired with an earlier destroy, the
/// destroy stays unmatched; later candidates are never considered.
pub fn match_addresses(create: &[String], destroy: &[String]) -> Matches {
    let mut matches = Matches::default();
    let mut claimed: BTreeSet<usize> = BTreeSet::new();

    for d in destroy {
        if matches.up.contains_key(d) {
            tracing::warn!(address = %d, "address destroyed more than once, keeping first match");
            continue;
        }

        let found = create.iter().enumerate().find(|(_, c)| is_related(c, d));

        match found {
            Some((j, c)) if claimed.contains(&j) => {
                tracing::warn!(address = %d, to = %c, "first match already taken, skipping");
                matches.unmatched_destroy.push(d.clone());
            }
            Some((j, c)) => {
                tracing::debug!(from = %d, to = %c, "matched");
                claimed.insert(j);
                matches.up.insert(d.clone(), c.clone());
                matches.down.insert(c.clone(), d.clone());
            }
            None => {
                tracing::warn!(address = %d, "no created address matches, skipping");
                matches.unmatched_destroy.push(d.clone());
            }
        }
    }

    matches.unmatched_create = create
        .iter()
        .enumerate()
        .filter(|(j, _)| !claimed.contains(j))
        .map(|(_, c)| c.clone())
        .collect();

    for c in &matches.unmatched_create {
        tracing::warn!(address = %c, "no destroyed address matches, skipping");
    }

    matches
}
