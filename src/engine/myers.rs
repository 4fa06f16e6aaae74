use crate::engine::edit::Diff;
use crate::engine::frontier::Frontier;
use derive_new::new;

/// Macro for debug logging that is enabled with the debug_diff feature flag
///
/// # Usage
/// ```rust,ignore
/// debug_log!("depth {d}: frontier {frontier:?}");
/// ```
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "debug_diff")]
        {
            eprintln!($($arg)*);
        }
    };
}

/// Myers shortest-edit-script search over two borrowed sequences.
///
/// The inputs are immutable for the duration of the computation; each call
/// to [`Myers::diff`] owns its own trace and releases it before returning,
/// so independent computations need no coordination.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Myers<'d, T> {
    a: &'d [T],
    b: &'d [T],
}

impl<'d, T: Eq + Clone> Myers<'d, T> {
    /// Minimal edit script transforming `a` into `b`, earliest edit first.
    pub fn diff(&self) -> Vec<Diff<T>> {
        self.backtrace(&self.shortest_edit())
    }

    /// Forward O((n + m) * d) search over the edit graph.
    ///
    /// Returns one frozen frontier per depth. `trace[d]` holds the frontier
    /// as it stood *before* depth `d` ran (index 0 is a dummy all-zero
    /// store), which is exactly the snapshot the backtrace needs when it
    /// walks depth `d`.
    fn shortest_edit(&self) -> Vec<Frontier> {
        let n = self.a.len();
        let m = self.b.len();
        let mut frontier = Frontier::new(1);
        let mut trace = Vec::new();

        // d <= n + m, so the loop always terminates
        for d in 0..=(n + m) as isize {
            let prev = std::mem::replace(&mut frontier, Frontier::new(d as usize));
            let mut reached_corner = false;

            for k in (-d..=d).step_by(2) {
                // Entering diagonal k: a downward move (insertion) from
                // k + 1 keeps the previous x, a rightward move (deletion)
                // from k - 1 advances it by one. Ties go to the insertion
                // branch; this fixed choice is what makes the output
                // deterministic.
                let mut x = if k == -d || (k != d && prev.get(k - 1) < prev.get(k + 1)) {
                    prev.get(k + 1)
                } else {
                    prev.get(k - 1) + 1
                };
                let mut y = (x as isize - k) as usize;

                // snake
                while x < n && y < m && self.a[x] == self.b[y] {
                    x += 1;
                    y += 1;
                }

                frontier.set(k, x);

                if x >= n && y >= m {
                    reached_corner = true;
                    break;
                }
            }

            debug_log!("depth {d}: {frontier:?}");
            trace.push(prev);
            if reached_corner {
                break;
            }
        }

        trace
    }

    /// Walks the recorded frontiers from the bottom-right corner of the
    /// edit graph back to the origin, emitting operations in reverse and
    /// flipping them once at the end.
    fn backtrace(&self, trace: &[Frontier]) -> Vec<Diff<T>> {
        let (mut x, mut y) = (self.a.len(), self.b.len());
        let mut path = Vec::new();

        for (d, frontier) in trace.iter().enumerate().rev() {
            let d = d as isize;
            let k = x as isize - y as isize;

            // Re-derive the branch the forward search took, with the same
            // tie-break, against the previous depth's frontier.
            let prev_k = if k == -d || (k != d && frontier.get(k - 1) < frontier.get(k + 1)) {
                k + 1
            } else {
                k - 1
            };
            let prev_x = frontier.get(prev_k);
            let prev_y = prev_x as isize - prev_k;

            // snake steps, emitted with the 1-based position of the matched
            // element on each side
            while x > prev_x && y as isize > prev_y {
                path.push(Diff::Same {
                    old: x,
                    new: y,
                    value: self.a[x - 1].clone(),
                });
                x -= 1;
                y -= 1;
            }

            // must come before the insert/delete emission: the depth-0
            // dummy frontier never contributes an operation
            if x == 0 && y == 0 {
                break;
            }

            if x == prev_x {
                path.push(Diff::Insert {
                    at: y,
                    value: self.b[y - 1].clone(),
                });
            } else {
                path.push(Diff::Delete {
                    at: x,
                    value: self.a[x - 1].clone(),
                });
            }

            (x, y) = (prev_x, prev_y as usize);
        }

        path.reverse();
        path
    }
}
