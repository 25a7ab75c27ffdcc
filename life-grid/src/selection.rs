use crate::Loc;
use std::collections::BTreeSet;

/// Cells the user has marked by clicking since the last reset. Purely an
/// annotation for drawing; the engine never looks at it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionSet {
    locs: BTreeSet<Loc>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.locs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locs.is_empty()
    }

    pub fn contains(&self, loc: Loc) -> bool {
        self.locs.contains(&loc)
    }

    /// Sorted by row, then column.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Loc> + '_ {
        self.locs.iter().copied()
    }

    /// This set with `loc` removed if present, added otherwise.
    pub fn toggle(mut self, loc: Loc) -> Self {
        self.toggle_in_place(loc);
        self
    }

    /// Returns whether `loc` is selected afterwards.
    pub fn toggle_in_place(&mut self, loc: Loc) -> bool {
        if self.locs.remove(&loc) {
            false
        } else {
            self.locs.insert(loc);
            true
        }
    }
}

impl FromIterator<Loc> for SelectionSet {
    fn from_iter<T: IntoIterator<Item = Loc>>(iter: T) -> Self {
        Self {
            locs: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_adds_then_removes() {
        let selection = SelectionSet::new().toggle(Loc::new(2, 3));
        assert!(selection.contains(Loc::new(2, 3)));
        assert_eq!(selection.len(), 1);

        let selection = selection.toggle(Loc::new(2, 3));
        assert!(selection.is_empty());
    }

    #[test]
    fn toggle_leaves_other_entries() {
        let selection: SelectionSet = [Loc::new(0, 0), Loc::new(1, 1)].into_iter().collect();
        let selection = selection.toggle(Loc::new(0, 0)).toggle(Loc::new(4, 2));
        assert_eq!(
            selection.iter().collect::<Vec<_>>(),
            vec![Loc::new(1, 1), Loc::new(4, 2)]
        );
    }

    #[test]
    fn toggle_in_place_reports_membership() {
        let mut selection = SelectionSet::new();
        assert!(selection.toggle_in_place(Loc::new(1, 2)));
        assert!(!selection.toggle_in_place(Loc::new(1, 2)));
        assert!(selection.is_empty());
    }
}
