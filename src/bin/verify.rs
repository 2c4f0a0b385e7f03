//! Compiles and runs the RTL simulation, then checks its outputs against
//! the Rust reference model.
//!
//! Usage:
//!   cargo run --bin verify [tolerance]
//!
//! A missing iverilog toolchain stops the run with a remediation hint; a
//! completed comparison prints a per-point table and the final PASS/FAIL
//! banner. Artifacts: `boxcar_test_data.txt`, `boxcar_verification.png`.

use anyhow::Context;

use boxcar_nn::math::matrix::linspace;
use boxcar_nn::sim::{run_simulation, write_test_vectors, SimConfig};
use boxcar_nn::verify::{compare, parse_simulation_output, Verdict, DEFAULT_TOLERANCE};
use boxcar_nn::{plot, TRUE_WEIGHTS};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tolerance = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f64>()
            .with_context(|| format!("invalid tolerance {arg:?}"))?,
        None => DEFAULT_TOLERANCE,
    };

    println!("{}", "=".repeat(70));
    println!("Boxcar Neural Network RTL Verification");
    println!("{}", "=".repeat(70));

    write_test_vectors(&TRUE_WEIGHTS, "boxcar_test_data.txt", 20)
        .context("writing test vectors")?;
    println!("Test data saved to 'boxcar_test_data.txt'");

    let config = SimConfig::default();
    let output = match run_simulation(&config) {
        Ok(Some(stdout)) => stdout,
        Ok(None) => {
            println!("{} not found. Install with: apt install iverilog", config.compiler);
            return Ok(());
        }
        Err(e) => {
            println!("Simulation failed - cannot verify\n{e}");
            return Ok(());
        }
    };

    let rtl_results = parse_simulation_output(&output);
    let cmp = compare(&TRUE_WEIGHTS, &rtl_results, tolerance);

    println!("\n{}", "=".repeat(70));
    println!("Verification Results");
    println!("{}", "=".repeat(70));
    println!(
        "{:<12} {:<12} {:<12} {:<12} Status",
        "Input (x)", "Reference y", "RTL y", "Error"
    );
    println!("{}", "-".repeat(70));
    for p in &cmp.points {
        println!(
            "{:>11.3}  {:>11.4}  {:>11.4}  {:>11.4}  {}",
            p.x,
            p.y_ref,
            p.y_rtl,
            p.error,
            if p.pass { "PASS" } else { "FAIL" }
        );
    }
    println!("{}", "-".repeat(70));
    println!("Max Error:  {:.4}", cmp.max_error);
    println!("Mean Error: {:.4}", cmp.mean_error);
    println!("RMS Error:  {:.4}", cmp.rms_error);
    println!("{}", "=".repeat(70));

    match cmp.verdict() {
        Verdict::Pass => println!("\nVerification PASSED - RTL matches the reference model"),
        Verdict::Fail => println!("\nVerification FAILED - errors exceed tolerance {tolerance}"),
        Verdict::Indeterminate => {
            println!("\nVerification FAILED - no results parsed from simulation output")
        }
    }

    if !cmp.points.is_empty() {
        let curve_x = linspace(-4.0, 4.0, 200);
        let curve_y = TRUE_WEIGHTS.forward_slice(&curve_x);
        plot::save_verification_plot(&curve_x, &curve_y, &cmp.points, "boxcar_verification.png")
            .context("saving verification plot")?;
        println!("Plot saved to 'boxcar_verification.png'");
    }

    Ok(())
}
