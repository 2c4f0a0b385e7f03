use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::math::matrix::linspace;
use crate::reference::WeightSet;

/// Writes a human-readable test-vector file for the RTL testbench: a
/// two-line comment header, then one `x, y` pair per line at 6 decimal
/// digits, sampled evenly over [-3, 3].
pub fn write_test_vectors<P: AsRef<Path>>(
    weights: &WeightSet,
    path: P,
    n_points: usize,
) -> std::io::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "# Test data for boxcar neural network")?;
    writeln!(writer, "# Format: x_input, y_expected")?;
    for x in linspace(-3.0, 3.0, n_points) {
        writeln!(writer, "{:.6}, {:.6}", x, weights.forward(x))?;
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::csv::parse_pairs;
    use crate::reference::TRUE_WEIGHTS;

    #[test]
    fn vector_file_round_trips_through_the_csv_loader() {
        let dir = std::env::temp_dir();
        let path = dir.join("boxcar_vectors_test.txt");
        write_test_vectors(&TRUE_WEIGHTS, &path, 20).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert!(lines.next().unwrap().starts_with('#'));
        assert!(lines.next().unwrap().starts_with('#'));

        // Strip the comment header; the body is plain `x, y` CSV.
        let body: String = text
            .lines()
            .filter(|l| !l.starts_with('#'))
            .collect::<Vec<_>>()
            .join("\n");
        let pairs = parse_pairs(&body).unwrap();
        assert_eq!(pairs.len(), 20);
        assert!((pairs[0].0 - -3.0).abs() < 1e-9);
        assert!((pairs[19].0 - 3.0).abs() < 1e-9);
        // Values were rounded to 6 decimals on the way out.
        assert!((pairs[0].1 - TRUE_WEIGHTS.forward(-3.0)).abs() < 1e-6);

        std::fs::remove_file(&path).ok();
    }
}
