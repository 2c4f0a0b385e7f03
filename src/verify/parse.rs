//! Parser for the RTL testbench's textual output.
//!
//! A record line looks like:
//!
//! ```text
//! x =  1.000 | y =  2.5000 | LEDs = 111100 | y_fixed = 2560
//! ```
//!
//! Only the first two pipe-delimited fields are consumed; `LEDs` and the
//! fixed-point echo are testbench diagnostics. Lines that fail to parse are
//! dropped silently, so the caller must treat "zero records" as a failed
//! verification rather than a vacuous pass.

/// Extracts every `(x, y)` pair from raw simulator stdout.
pub fn parse_simulation_output(output: &str) -> Vec<(f64, f64)> {
    output
        .lines()
        .filter(|line| line.contains("x =") && line.contains("y ="))
        .filter_map(parse_record)
        .collect()
}

fn parse_record(line: &str) -> Option<(f64, f64)> {
    let mut fields = line.split('|');
    let x = field_value(fields.next()?)?;
    let y = field_value(fields.next()?)?;
    Some((x, y))
}

/// Parses the number after the `=` in a `name = value` field.
fn field_value(field: &str) -> Option<f64> {
    field.split('=').nth(1)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_documented_testbench_line() {
        let line = "x =  1.000 | y =  2.5000 | LEDs = 111100 | y_fixed = 2560";
        assert_eq!(parse_simulation_output(line), vec![(1.000, 2.5000)]);
    }

    #[test]
    fn skips_lines_without_both_fields_or_without_a_pipe() {
        let output = "\
VCD info: dumpfile boxcar_nn_tb.vcd opened\n\
x = 1.0 without the other field\n\
x = 1.0 y = 2.0 no pipe separator\n\
x = -0.500 | y =  0.1250 | LEDs = 000001 | y_fixed = 128\n";
        assert_eq!(parse_simulation_output(output), vec![(-0.5, 0.125)]);
    }

    #[test]
    fn malformed_numbers_are_dropped_silently() {
        let output = "x = oops | y = 2.0\nx = 1.0 | y = nope\n";
        assert!(parse_simulation_output(output).is_empty());
    }

    #[test]
    fn negative_and_whitespace_heavy_values_parse() {
        let output = "x =   -2.250   | y =   -1.1515   | LEDs = 000000";
        assert_eq!(parse_simulation_output(output), vec![(-2.25, -1.1515)]);
    }
}
