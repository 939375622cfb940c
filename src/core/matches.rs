//! Purpose: Positional boolean result of comparing two columns.
//! Exports: `MatchVector`.
//! Invariants: One entry per input position; entries are plain booleans, never missing.
use serde::Serialize;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MatchVector(Vec<bool>);

impl MatchVector {
    pub fn all_false(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<bool> {
        self.0.get(position).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    /// True when every position matched (vacuously true when empty).
    pub fn all(&self) -> bool {
        self.0.iter().all(|matched| *matched)
    }

    pub fn any(&self) -> bool {
        self.0.iter().any(|matched| *matched)
    }

    pub fn match_count(&self) -> usize {
        self.0.iter().filter(|matched| **matched).count()
    }

    pub fn mismatch_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, matched)| !**matched)
            .map(|(position, _)| position)
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<bool> {
        self.0
    }
}

impl From<Vec<bool>> for MatchVector {
    fn from(matches: Vec<bool>) -> Self {
        Self(matches)
    }
}

impl FromIterator<bool> for MatchVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::MatchVector;

    #[test]
    fn summary_helpers() {
        let matches = MatchVector::from(vec![true, false, true, false]);
        assert_eq!(matches.len(), 4);
        assert!(!matches.all());
        assert!(matches.any());
        assert_eq!(matches.match_count(), 2);
        assert_eq!(matches.mismatch_positions().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(matches.get(2), Some(true));
        assert_eq!(matches.get(4), None);
        assert_eq!(
            matches.iter().map(u8::from).collect::<Vec<_>>(),
            vec![1, 0, 1, 0]
        );
    }

    #[test]
    fn empty_vector_is_vacuously_all() {
        let matches = MatchVector::default();
        assert!(matches.is_empty());
        assert!(matches.all());
        assert!(!matches.any());
    }

    #[test]
    fn serializes_as_plain_array() {
        let matches = MatchVector::all_false(2);
        let json = serde_json::to_string(&matches).expect("serialize");
        assert_eq!(json, "[false,false]");
    }
}
