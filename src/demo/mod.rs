//! Walkthroughs of the two ownership disciplines, writing their transcript
//! to any `io::Write` so tests can capture it.

pub mod owned;
pub mod shared;

use std::io::{self, Write};

use crate::shape::{self, Shape};

/// Print the measurement lines for one shape. The square's announcement
/// goes first, so every area query of a square is visibly flagged.
fn report(out: &mut impl Write, shape: &Shape) -> io::Result<()> {
    if let Some(line) = shape::diagnostic(shape) {
        writeln!(out, "{}", line)?;
    }
    writeln!(
        out,
        "The area of {} is: {}",
        shape::name(shape),
        shape::area(shape)
    )?;
    writeln!(
        out,
        "The perimeter of {} is: {}",
        shape::name(shape),
        shape::perimeter(shape)
    )?;
    Ok(())
}
