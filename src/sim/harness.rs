//! Subprocess harness around the external RTL toolchain.
//!
//! Two blocking steps: compile the RTL sources into a simulation executable,
//! then run it and capture stdout. No timeout and no retry; a failure is
//! terminal for the run.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Commands and file names for one simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Compiler binary, e.g. `iverilog`.
    pub compiler: String,
    /// Extra compiler flags (language standard etc.).
    pub flags: Vec<String>,
    /// RTL source files handed to the compiler.
    pub sources: Vec<String>,
    /// Name of the compiled simulation executable.
    pub executable: String,
    /// Directory the toolchain runs in.
    pub work_dir: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            compiler: "iverilog".into(),
            flags: vec!["-g2012".into()],
            sources: vec!["boxcar_nn.sv".into(), "boxcar_nn_tb.sv".into()],
            executable: "boxcar_nn_sim".into(),
            work_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug)]
pub enum SimError {
    /// The compiler exited non-zero; carries its captured stderr.
    CompileFailed { stderr: String },
    /// The compiled simulation exited non-zero; carries its captured stderr.
    RunFailed { stderr: String },
    /// An I/O failure other than "compiler not installed".
    Io(io::Error),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CompileFailed { stderr } => write!(f, "RTL compilation failed:\n{stderr}"),
            Self::RunFailed { stderr } => write!(f, "RTL simulation failed:\n{stderr}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for SimError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SimError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Compiles and runs the RTL simulation.
///
/// Returns `Ok(Some(stdout))` on success. A missing compiler binary is not
/// an error from the caller's point of view: it is logged with a remediation
/// hint and reported as `Ok(None)` so verification can stop cleanly.
pub fn run_simulation(config: &SimConfig) -> Result<Option<String>, SimError> {
    log::info!("compiling RTL with {}", config.compiler);

    let compile = Command::new(&config.compiler)
        .args(&config.flags)
        .arg("-o")
        .arg(&config.executable)
        .args(&config.sources)
        .current_dir(&config.work_dir)
        .output();

    let compile = match compile {
        Ok(output) => output,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!(
                "{} not found; install icarus-verilog to run RTL verification",
                config.compiler
            );
            return Ok(None);
        }
        Err(e) => return Err(SimError::Io(e)),
    };

    if !compile.status.success() {
        return Err(SimError::CompileFailed {
            stderr: String::from_utf8_lossy(&compile.stderr).into_owned(),
        });
    }
    log::info!("compilation successful");

    let exe = config.work_dir.join(&config.executable);
    let run = Command::new(&exe).current_dir(&config.work_dir).output()?;
    if !run.status.success() {
        return Err(SimError::RunFailed {
            stderr: String::from_utf8_lossy(&run.stderr).into_owned(),
        });
    }
    log::info!("simulation completed");

    Ok(Some(String::from_utf8_lossy(&run.stdout).into_owned()))
}
