//! Text rendering: one line per row, entries separated by a space.
//!
//! Entries use the shortest decimal that round-trips to the same `f64`, so
//! integral values print without a fractional part (`1`, `-3`, `0.5`).

use std::fmt;

use super::Matrix;

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.as_rows() {
            let mut entries = row.iter();
            if let Some(first) = entries.next() {
                write!(f, "{}", first)?;
                for v in entries {
                    write!(f, " {}", v)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
