use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::RunStatus;

/// Immutable set of run statuses.
///
/// Stored as a bitmask over [`RunStatus::ALL`], so sets are `Copy`, can be built in `const` context
/// and never hold duplicates. Iteration yields statuses in lifecycle order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StatusSet(u16);

impl StatusSet {
    /// Set with no statuses.
    pub const EMPTY: StatusSet = StatusSet(0);

    /// The whole status domain.
    pub const ALL: StatusSet = StatusSet::of(&RunStatus::ALL);

    /// Build a set from a list of statuses. Repeated entries collapse.
    pub const fn of(statuses: &[RunStatus]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < statuses.len() {
            bits |= statuses[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, status: RunStatus) -> bool {
        self.0 & status.bit() != 0
    }

    /// Statuses of the domain not in `self`.
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::ALL.0)
    }

    pub const fn union(self, other: StatusSet) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn intersection(self, other: StatusSet) -> Self {
        Self(self.0 & other.0)
    }

    pub const fn is_subset(self, other: StatusSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub const fn is_disjoint(self, other: StatusSet) -> bool {
        self.0 & other.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in lifecycle order.
    pub fn iter(self) -> impl Iterator<Item = RunStatus> {
        RunStatus::ALL
            .into_iter()
            .filter(move |status| self.contains(*status))
    }

    pub fn to_vec(self) -> Vec<RunStatus> {
        self.iter().collect()
    }
}

impl FromIterator<RunStatus> for StatusSet {
    fn from_iter<I: IntoIterator<Item = RunStatus>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StatusSet::EMPTY, |set, status| StatusSet(set.0 | status.bit()))
    }
}

impl fmt::Debug for StatusSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for StatusSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for StatusSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let statuses = Vec::<RunStatus>::deserialize(deserializer)?;
        Ok(statuses.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_collapses_duplicates() {
        let set = StatusSet::of(&[RunStatus::Done, RunStatus::Done, RunStatus::Failed]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), vec![RunStatus::Failed, RunStatus::Done]);
    }

    #[test]
    fn complement_covers_the_rest_of_the_domain() {
        let set = StatusSet::of(&[RunStatus::Running]);
        let rest = set.complement();

        assert_eq!(rest.len(), RunStatus::ALL.len() - 1);
        assert!(!rest.contains(RunStatus::Running));
        assert!(set.is_disjoint(rest));
        assert_eq!(set.union(rest), StatusSet::ALL);
        assert_eq!(StatusSet::EMPTY.complement(), StatusSet::ALL);
    }

    #[test]
    fn subset_and_intersection() {
        let small = StatusSet::of(&[RunStatus::Pending]);
        let big = StatusSet::of(&[RunStatus::Pending, RunStatus::Running]);

        assert!(small.is_subset(big));
        assert!(!big.is_subset(small));
        assert_eq!(big.intersection(small), small);
        assert!(StatusSet::EMPTY.is_subset(small));
        assert!(StatusSet::EMPTY.is_empty());
    }

    #[test]
    fn collect_from_iterator() {
        let set: StatusSet = [RunStatus::Aborted, RunStatus::Submitted].into_iter().collect();
        assert_eq!(set, StatusSet::of(&[RunStatus::Submitted, RunStatus::Aborted]));
    }

    #[test]
    fn serializes_as_ordered_array() {
        let set = StatusSet::of(&[RunStatus::Done, RunStatus::Pulling]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["pulling","done"]"#);

        let back: StatusSet = serde_json::from_str(r#"["done","pulling","done"]"#).unwrap();
        assert_eq!(back, set);
    }

    #[test]
    fn deserialize_rejects_unknown_status() {
        let res = serde_json::from_str::<StatusSet>(r#"["done","exploded"]"#);
        assert!(res.is_err());
    }
}
