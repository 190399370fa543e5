//! Reading code samples from files and stdin.

use anyhow::{Context, Result};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Where a sample comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// `-` means stdin; anything else is a path.
    pub fn from_arg(arg: &Path) -> Self {
        if arg == Path::new("-") {
            Source::Stdin
        } else {
            Source::File(arg.to_path_buf())
        }
    }

    /// Sources for the given positional arguments; stdin when there are none.
    pub fn from_args(args: &[PathBuf]) -> Vec<Self> {
        if args.is_empty() {
            vec![Source::Stdin]
        } else {
            args.iter().map(|arg| Self::from_arg(arg)).collect()
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => "<stdin>".to_string(),
            Source::File(path) => path.display().to_string(),
        }
    }

    /// Read the sample. `stdin` is the already-buffered standard input.
    pub fn read(&self, stdin: Option<&str>) -> Result<String> {
        match self {
            Source::Stdin => Ok(stdin.unwrap_or_default().to_string()),
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display())),
        }
    }
}

/// Buffer standard input if any source needs it. Stdin can only be read
/// once, so every `-` shares this buffer.
pub fn buffer_stdin(sources: &[Source]) -> Result<Option<String>> {
    if !sources.contains(&Source::Stdin) {
        return Ok(None);
    }
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read standard input")?;
    Ok(Some(buf))
}
