use std::io::{self, Write};
use std::path::Path;

use crate::types::Trajectory;

/// Write trajectory data to CSV format.
///
/// Columns: time, prey, predator
pub fn write_trajectory<W: Write>(writer: &mut W, trajectory: &Trajectory) -> io::Result<()> {
    writeln!(writer, "time,prey,predator")?;

    for s in trajectory {
        writeln!(writer, "{:.6},{},{}", s.time, s.prey(), s.predator())?;
    }

    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file(path: impl AsRef<Path>, trajectory: &Trajectory) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_trajectory(&mut file, trajectory)?;
    file.flush()
}
