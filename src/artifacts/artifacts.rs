use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::{lexer::report::render_token_report, CheckReport};

pub const CLEAN_SOURCE_FILE: &str = "NOSPACES.TXT";
pub const TOKEN_REPORT_FILE: &str = "RES_SYM.TXT";

/// Where the artifacts of a run are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub clean_source: PathBuf,
    pub token_report: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        ArtifactPaths {
            clean_source: dir.join(CLEAN_SOURCE_FILE),
            token_report: dir.join(TOKEN_REPORT_FILE),
        }
    }
}

impl Default for ArtifactPaths {
    fn default() -> Self {
        ArtifactPaths {
            clean_source: PathBuf::from(CLEAN_SOURCE_FILE),
            token_report: PathBuf::from(TOKEN_REPORT_FILE),
        }
    }
}

/// Writes the cleaned source verbatim and the token report one pair per line.
pub fn write_artifacts(report: &CheckReport, paths: &ArtifactPaths) -> io::Result<()> {
    fs::write(&paths.clean_source, report.clean.text())?;
    fs::write(&paths.token_report, render_token_report(&report.report))?;
    Ok(())
}
