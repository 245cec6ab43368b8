//! Artifact discovery, parallel reading and per-destination output

use abigen_compiler::{
    build_module, is_excluded, parse_artifact, render_module, AbigenError, Artifact,
    CodegenConfig, DestinationGroups, Fragment,
};
use anyhow::{Context, Result};
use glob::{glob, Pattern};
use rayon::prelude::*;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

/// Counters for one generation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub artifacts_read: usize,
    pub artifacts_skipped: usize,
    pub read_failures: usize,
    pub parse_failures: usize,
    pub files_written: usize,
    pub empty_destinations: usize,
    pub failed_destinations: usize,
}

impl RunReport {
    pub fn has_failures(&self) -> bool {
        self.read_failures + self.parse_failures + self.failed_destinations > 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   Artifacts read:      {}", self.artifacts_read)?;
        writeln!(f, "   Artifacts skipped:   {}", self.artifacts_skipped)?;
        writeln!(f, "   Files written:       {}", self.files_written)?;
        writeln!(f, "   Empty destinations:  {}", self.empty_destinations)?;
        write!(
            f,
            "   Failures:            {} read, {} parse, {} destination",
            self.read_failures, self.parse_failures, self.failed_destinations
        )
    }
}

enum Outcome {
    Written(PathBuf),
    Empty,
    Failed(AbigenError),
}

pub struct AbiProcessor {
    out_dir: PathBuf,
    exclude: Vec<Pattern>,
    config: CodegenConfig,
    groups: DestinationGroups,
    report: RunReport,
}

impl AbiProcessor {
    pub fn new<P: AsRef<Path>>(out_dir: P, config: CodegenConfig) -> Self {
        Self {
            out_dir: out_dir.as_ref().to_path_buf(),
            exclude: Vec::new(),
            config,
            groups: DestinationGroups::new(),
            report: RunReport::default(),
        }
    }

    pub fn with_exclude(mut self, exclude: Vec<Pattern>) -> Self {
        self.exclude = exclude;
        self
    }

    pub fn report(&self) -> &RunReport {
        &self.report
    }

    pub fn groups(&self) -> &DestinationGroups {
        &self.groups
    }

    /// Finds `*.json` artifacts below `source`, in sorted order
    pub fn discover(&self, source: &Path) -> Result<Vec<PathBuf>> {
        let pattern = format!("{}/**/*.json", source.display());

        let mut paths: Vec<PathBuf> = glob(&pattern)
            .context(format!("Invalid source pattern: {}", pattern))?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    warn!("Cannot access {}: {}", e.path().display(), e.error());
                    None
                }
            })
            .filter(|path| !is_excluded(path, &self.exclude))
            .collect();
        paths.sort();

        debug!("Discovered {} artifact(s) under {}", paths.len(), source.display());
        Ok(paths)
    }

    pub fn collect_abi_files(&mut self, source: &Path) -> Result<()> {
        let paths = self.discover(source)?;
        self.collect_paths(&paths);
        Ok(())
    }

    /// Reads artifacts in parallel and merges them into destination groups
    ///
    /// Results are merged in path order after all reads finish, so the group
    /// contents do not depend on thread scheduling.
    pub fn collect_paths(&mut self, paths: &[PathBuf]) {
        let results: Vec<(&PathBuf, abigen_compiler::Result<Option<Artifact>>)> =
            paths.par_iter().map(|path| (path, read_artifact(path))).collect();

        for (path, result) in results {
            match result {
                Ok(Some(artifact)) => {
                    debug!(
                        "{} -> {} ({} fragment(s))",
                        path.display(),
                        artifact.destination,
                        artifact.fragments.len()
                    );
                    self.report.artifacts_read += 1;
                    self.groups.merge_artifact(artifact);
                }
                Ok(None) => {
                    debug!("No abi in {}", path.display());
                    self.report.artifacts_skipped += 1;
                }
                Err(e @ AbigenError::ParseFailure { .. }) => {
                    error!("{}", e);
                    self.report.parse_failures += 1;
                }
                Err(e) => {
                    error!("Error reading {}: {}", path.display(), e);
                    self.report.read_failures += 1;
                }
            }
        }
    }

    /// Writes one module per destination group
    ///
    /// Failing to create the output directory is the only error returned;
    /// per-destination failures are logged and counted in the report.
    pub fn generate_typescript_files(&mut self) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .map_err(|e| AbigenError::write_failure(&self.out_dir, e))
            .context("Failed to create output directory")?;

        let groups: Vec<(String, Vec<Fragment>)> =
            std::mem::take(&mut self.groups).into_iter().collect();

        let this = &*self;
        let outcomes: Vec<(String, Outcome)> = groups
            .into_par_iter()
            .map(|(destination, fragments)| {
                let outcome = this.generate_destination(&destination, fragments);
                (destination, outcome)
            })
            .collect();

        for (destination, outcome) in outcomes {
            match outcome {
                Outcome::Written(path) => {
                    info!("Wrote {}", path.display());
                    self.report.files_written += 1;
                }
                Outcome::Empty => {
                    debug!("Nothing to generate for {}", destination);
                    self.report.empty_destinations += 1;
                }
                Outcome::Failed(e) => {
                    error!("Skipping {}: {}", destination, e);
                    self.report.failed_destinations += 1;
                }
            }
        }

        Ok(())
    }

    pub fn output_path(&self, destination: &str) -> PathBuf {
        self.out_dir.join(format!("{}.{}", destination, self.config.file_extension))
    }

    fn generate_destination(&self, destination: &str, fragments: Vec<Fragment>) -> Outcome {
        let module = match build_module(fragments) {
            Ok(Some(module)) => module,
            Ok(None) => return Outcome::Empty,
            Err(e) => return Outcome::Failed(e),
        };

        let path = self.output_path(destination);
        let content = render_module(&module, &self.config);

        match write_complete(&path, &content) {
            Ok(()) => Outcome::Written(path),
            Err(e) => Outcome::Failed(e),
        }
    }
}

fn read_artifact(path: &Path) -> abigen_compiler::Result<Option<Artifact>> {
    let content = fs::read(path)?;
    parse_artifact(path, &content)
}

/// Writes to a sibling temporary file, then renames it into place
fn write_complete(path: &Path, content: &str) -> abigen_compiler::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp);
        return Err(AbigenError::write_failure(path, e));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_complete_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("Token.ts");

        write_complete(&path, "export default [] as const;\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "export default [] as const;\n");
        assert!(!dir.path().join("Token.ts.tmp").exists());
    }

    #[test]
    fn test_write_complete_missing_dir_is_write_failure() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing").join("Token.ts");

        let result = write_complete(&path, "");
        assert!(matches!(result, Err(AbigenError::WriteFailure { .. })));
    }

    #[test]
    fn test_output_path_uses_extension() {
        let config =
            CodegenConfig { file_extension: "mts".to_string(), ..CodegenConfig::default() };
        let processor = AbiProcessor::new("abis", config);

        assert_eq!(processor.output_path("Token"), PathBuf::from("abis/Token.mts"));
    }

    #[test]
    fn test_report_has_failures() {
        let mut report = RunReport::default();
        assert!(!report.has_failures());

        report.parse_failures = 1;
        assert!(report.has_failures());
    }
}
