//! A single peg ("tower") holding discs in strictly decreasing size order.

use std::fmt;

use crate::types::Disc;

/// Ordered stack of discs; the last element is the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Peg {
    name: String,
    discs: Vec<Disc>,
}

impl Peg {
    /// Create an empty peg.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            discs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Discs from bottom to top.
    pub fn discs(&self) -> &[Disc] {
        &self.discs
    }

    pub fn top(&self) -> Option<Disc> {
        self.discs.last().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.discs.is_empty()
    }

    /// Place a disc on top. Rejects (returns false, no mutation) unless the
    /// peg is empty or the disc is strictly smaller than the current top.
    pub fn push(&mut self, disc: Disc) -> bool {
        match self.top() {
            Some(top) if disc.size() >= top.size() => false,
            _ => {
                self.discs.push(disc);
                true
            }
        }
    }

    /// Remove and return the top disc, or `None` when empty.
    pub fn pop(&mut self) -> Option<Disc> {
        self.discs.pop()
    }

    pub fn sizes(&self) -> Vec<u32> {
        self.discs().iter().map(|disc| disc.size()).collect()
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:?}", self.name, self.sizes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn peg_with(sizes: &[u32]) -> Peg {
        let mut peg = Peg::new("A");
        for &size in sizes {
            assert!(peg.push(Disc::new(size)));
        }
        peg
    }

    #[test]
    fn push_onto_empty_peg_succeeds() {
        let mut peg = Peg::new("A");
        assert!(peg.push(Disc::new(5)));
        assert_eq!(peg.top(), Some(Disc::new(5)));
    }

    #[test]
    fn push_rejects_equal_or_larger_disc() {
        let mut peg = peg_with(&[3, 2]);
        assert!(!peg.push(Disc::new(2)));
        assert!(!peg.push(Disc::new(4)));
        // Rejected pushes leave the stack untouched.
        assert_eq!(peg.sizes(), vec![3, 2]);
    }

    #[test]
    fn accepted_push_is_smaller_than_every_disc_below() {
        let mut peg = Peg::new("A");
        for size in [9, 7, 8, 4, 6, 1, 2] {
            if peg.push(Disc::new(size)) {
                let (top, below) = peg.discs().split_last().expect("just pushed");
                assert!(below.iter().all(|disc| disc.size() > top.size()));
            }
        }
        assert_eq!(peg.sizes(), vec![9, 7, 4, 1]);
    }

    #[test]
    fn pop_on_empty_returns_none() {
        let mut peg = Peg::new("A");
        assert_eq!(peg.pop(), None);
        assert!(peg.is_empty());
    }

    #[test]
    fn pop_then_push_back_restores_state() {
        let mut peg = peg_with(&[4, 3, 1]);
        let before = peg.clone();
        let disc = peg.pop().expect("peg not empty");
        assert!(peg.push(disc));
        assert_eq!(peg, before);
    }

    #[test]
    fn display_lists_sizes_bottom_to_top() {
        let peg = peg_with(&[3, 2, 1]);
        assert_eq!(peg.to_string(), "A: [3, 2, 1]");
        assert_eq!(Peg::new("B").to_string(), "B: []");
    }
}
