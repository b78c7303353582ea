use std::io::{self, Write};

use crate::types::{State, Trajectory};

/// Samples shown at each end of the trajectory.
pub const REPORT_SAMPLES: usize = 3;

// Each heading is followed by three pairs.
const HEAD_LABEL: &str = "First two pairs of (x, y) values:";
const TAIL_LABEL: &str = "Last two pairs of (x, y) values:";

/// Write the earliest and latest `(x, y)` pairs of a trajectory.
///
/// Values use `{:?}` formatting: shortest round-trip text, always with a
/// decimal point (`2.0`, `2.12`). Short trajectories print what they have.
pub fn write_report<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "{HEAD_LABEL}")?;
    write_pairs(writer, trajectory.head(REPORT_SAMPLES))?;

    writeln!(writer, "{TAIL_LABEL}")?;
    write_pairs(writer, trajectory.tail(REPORT_SAMPLES))
}

fn write_pairs<W: Write>(writer: &mut W, samples: &[State]) -> io::Result<()> {
    for s in samples {
        writeln!(writer, "({:?}, {:?})", s.prey(), s.predator())?;
    }
    Ok(())
}
