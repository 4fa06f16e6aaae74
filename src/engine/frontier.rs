/// Farthest-reaching `x` per diagonal for one search depth.
///
/// Diagonals are indexed by `k = x - y`, which ranges over `-d..=d` at depth
/// `d` and can be negative. Slots fold `k` onto a non-negative offset
/// (`k <= 0` maps to `-k`, `k > 0` to `k - 1`), so a flat array of `d + 1`
/// slots covers every diagonal reachable at that depth.
///
/// A frontier is populated during one depth of the forward search and frozen
/// afterwards; the recorded trace is a list of these, one per depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    slots: Vec<usize>,
}

impl Frontier {
    /// Zero-initialized store covering diagonals `-max_index..=max_index`.
    pub fn new(max_index: usize) -> Self {
        Frontier {
            slots: vec![0; max_index + 1],
        }
    }

    #[inline(always)]
    fn slot(k: isize) -> usize {
        if k <= 0 { (-k) as usize } else { (k - 1) as usize }
    }

    pub fn get(&self, k: isize) -> usize {
        debug_assert!(
            Self::slot(k) < self.slots.len(),
            "diagonal {k} out of range for this depth"
        );
        self.slots[Self::slot(k)]
    }

    pub fn set(&mut self, k: isize, x: usize) {
        debug_assert!(
            Self::slot(k) < self.slots.len(),
            "diagonal {k} out of range for this depth"
        );
        self.slots[Self::slot(k)] = x;
    }
}
