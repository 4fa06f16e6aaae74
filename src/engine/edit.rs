use std::fmt::Display;

/// One step of a minimal edit script.
///
/// Positions are 1-based: `Delete` carries the element's position in the old
/// sequence, `Insert` its position in the new sequence, and `Same` both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diff<T> {
    Insert { at: usize, value: T },
    Delete { at: usize, value: T },
    Same { old: usize, new: usize, value: T },
}

impl<T> Diff<T>
where
    T: Display,
{
    /// Positional listing form: old column, new column, then the value.
    pub fn as_string(&self) -> String {
        match self {
            Diff::Delete { at, value } => format!("- {at:>4} {:>4}  {value}", ""),
            Diff::Insert { at, value } => format!("+ {:>4} {at:>4}  {value}", ""),
            Diff::Same { old, new, value } => format!("  {old:>4} {new:>4}  {value}"),
        }
    }
}

impl<T> Display for Diff<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_string())
    }
}
