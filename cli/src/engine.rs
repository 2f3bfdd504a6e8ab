//! Adaptor for an out-of-process conversion engine.
//!
//! The engine is started with the input and output paths as arguments and
//! receives the converter options as JSON on stdin. It writes the PDF to
//! stdout.

use std::ffi::OsString;
use std::io::{self, Write};
use std::thread;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use mdpdf::{Converter, ConverterOptions, Error, Result};

/// Environment variable naming the engine executable.
pub const ENGINE_ENV: &str = "MDPDF_ENGINE";

const DEFAULT_ENGINE: &str = "markdown2pdf-engine";

/// Runs an external engine executable.
#[derive(Debug, Clone)]
pub struct EngineConverter {
    program: PathBuf,
}

impl EngineConverter {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `$MDPDF_ENGINE`, or the default engine name.
    pub fn from_env() -> Self {
        let program = std::env::var_os(ENGINE_ENV)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| OsString::from(DEFAULT_ENGINE));
        Self::new(program)
    }
}

impl Converter for EngineConverter {
    fn name(&self) -> &str {
        self.program.to_str().unwrap_or(DEFAULT_ENGINE)
    }

    fn convert(&self, input: &Path, output: &Path, options: &ConverterOptions) -> Result<Vec<u8>> {
        let payload = serde_json::to_vec(options)?;

        let mut child = Command::new(&self.program)
            .arg(input)
            .arg(output)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                Error::Convert(format!(
                    "failed to start '{}': {}",
                    self.program.display(),
                    e
                ))
            })?;

        // Stdin is fed from its own thread; the engine may fill stdout first.
        let stdin = child.stdin.take();
        let writer = thread::spawn(move || -> io::Result<()> {
            if let Some(mut stdin) = stdin {
                match stdin.write_all(&payload) {
                    Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                    other => other?,
                }
            }
            Ok(())
        });

        let result = child.wait_with_output()?;
        let written = writer
            .join()
            .map_err(|_| Error::Convert("engine input writer panicked".to_string()))?;
        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Convert(format!(
                "'{}' exited with {}: {}",
                self.program.display(),
                result.status,
                stderr.trim()
            )));
        }

        written?;

        log::debug!("engine produced {} bytes", result.stdout.len());
        Ok(result.stdout)
    }
}
