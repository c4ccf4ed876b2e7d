use std::{
    collections::BTreeMap,
    env,
    fs::OpenOptions,
    io::{self, Write},
    path::{Path, PathBuf},
};
use tracing::{info, warn};
use uuid::Uuid;

/// Side channel through which a run talks to the CI system
pub trait Reporter {
    fn info(&mut self, message: &str);

    fn warning(&mut self, message: &str);

    /// Mask `value` in every following log line
    fn set_secret(&mut self, value: &str);

    /// Publish a step output
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written
    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()>;

    /// Record the failure of the run
    fn set_failed(&mut self, message: &str);
}

/// Escape the data part of a workflow command
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Escape a workflow command property
#[must_use]
pub fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

/// Reporter speaking the GitHub Actions workflow command protocol
pub struct GithubReporter<W: Write> {
    out: W,
    output_file: Option<PathBuf>,
}

impl GithubReporter<io::Stdout> {
    /// Commands on stdout, outputs appended to `$GITHUB_OUTPUT` when set
    #[must_use]
    pub fn from_env() -> Self {
        let output_file = env::var_os("GITHUB_OUTPUT")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);
        Self::new(io::stdout(), output_file)
    }
}

impl<W: Write> GithubReporter<W> {
    #[must_use]
    pub const fn new(out: W, output_file: Option<PathBuf>) -> Self {
        Self { out, output_file }
    }

    /// Give back the command writer
    #[must_use]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn command(&mut self, command: &str, data: &str) {
        if let Err(e) = writeln!(self.out, "::{command}::{}", escape_data(data)) {
            warn!("failed to write workflow command {command}: {e}");
        }
    }

    fn append_output(path: &Path, name: &str, value: &str) -> io::Result<()> {
        let delimiter = format!("ghadelimiter_{}", Uuid::new_v4());
        if name.contains(&delimiter) || value.contains(&delimiter) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unexpected input: output {name} contains the delimiter {delimiter}"),
            ));
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{name}<<{delimiter}\n{value}\n{delimiter}")
    }
}

impl<W: Write> Reporter for GithubReporter<W> {
    fn info(&mut self, message: &str) {
        info!("{message}");
    }

    fn warning(&mut self, message: &str) {
        warn!("{message}");
        self.command("warning", message);
    }

    fn set_secret(&mut self, value: &str) {
        self.command("add-mask", value);
    }

    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        if let Some(path) = &self.output_file {
            Self::append_output(path, name, value)
        } else {
            writeln!(self.out)?;
            writeln!(
                self.out,
                "::set-output name={}::{}",
                escape_property(name),
                escape_data(value)
            )
        }
    }

    fn set_failed(&mut self, message: &str) {
        self.command("error", message);
    }
}

/// Reporter that keeps everything in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub infos: Vec<String>,
    pub warnings: Vec<String>,
    pub secrets: Vec<String>,
    pub outputs: BTreeMap<String, String>,
    pub failures: Vec<String>,
}

impl MemoryReporter {
    #[must_use]
    pub fn output(&self, name: &str) -> Option<&str> {
        self.outputs.get(name).map(String::as_str)
    }

    #[must_use]
    pub fn failed(&self) -> bool {
        !self.failures.is_empty()
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, message: &str) {
        self.infos.push(message.to_string());
    }

    fn warning(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn set_secret(&mut self, value: &str) {
        self.secrets.push(value.to_string());
    }

    fn set_output(&mut self, name: &str, value: &str) -> io::Result<()> {
        self.outputs.insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn set_failed(&mut self, message: &str) {
        self.failures.push(message.to_string());
    }
}
