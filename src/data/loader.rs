use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::model::Spectrum;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to turn a file into a [`Spectrum`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file format: {} (expected .dat or .csv)", .path.display())]
    UnsupportedFormat { path: PathBuf },

    #[error("reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("parsing {}: {source}", .path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("{}: missing required column '{column}'", .path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("{}: file contains no samples", .path.display())]
    Empty { path: PathBuf },
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Supported on-disk layouts, selected by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumFormat {
    /// `.dat` – whitespace-delimited, header row.
    Whitespace,
    /// `.csv` – comma-delimited, header row, `#` comment lines.
    Comma,
}

impl SpectrumFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "dat" => Some(Self::Whitespace),
            "csv" => Some(Self::Comma),
            _ => None,
        }
    }
}

/// Extensions offered by the file dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["dat", "csv"];

const WAVELENGTH: &str = "wavelength";
const FLUX: &str = "flux";

/// One table row; any further columns are ignored.
#[derive(Debug, Deserialize)]
struct Sample {
    wavelength: f64,
    flux: f64,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a spectrum from a file.  Dispatch by extension.
///
/// Both formats need a header naming `wavelength` and `flux` columns.
pub fn load_spectrum(path: &Path) -> Result<Spectrum, LoadError> {
    let format = SpectrumFormat::from_path(path).ok_or_else(|| LoadError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let spectrum = match format {
        SpectrumFormat::Whitespace => parse_table(&whitespace_to_csv(&text), None, path)?,
        SpectrumFormat::Comma => parse_table(&text, Some(b'#'), path)?,
    };

    if spectrum.is_empty() {
        return Err(LoadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(spectrum)
}

/// Collapse runs of blanks/tabs into single commas, dropping blank lines.
fn whitespace_to_csv(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(","))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn parse_table(text: &str, comment: Option<u8>, path: &Path) -> Result<Spectrum, LoadError> {
    let csv_err = |source: csv::Error| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .comment(comment)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers().map_err(csv_err)?;
    for column in [WAVELENGTH, FLUX] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: path.to_path_buf(),
                column,
            });
        }
    }

    let samples = reader
        .deserialize::<Sample>()
        .map(|row| row.map(|s| (s.wavelength, s.flux)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(csv_err)?;

    Ok(Spectrum::from_samples(samples))
}
