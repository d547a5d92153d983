//! Sequential processing of many merge jobs with per-file failure isolation.

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use super::discovery::{
    JobMode,
    MergeJob,
};
use super::error::MergeError;
use super::pipeline::{
    MergeOutcome,
    adopt_file,
    merge_files,
};

/// Result of [`run_batch`].
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Destinations written, with what was done
    pub succeeded: Vec<(PathBuf, MergeOutcome)>,
    /// Destinations that failed; their sidecars are left in place
    pub failed: Vec<(PathBuf, MergeError)>,
}

impl BatchReport {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Runs every job in order. A failing job is logged and recorded; the
/// remaining jobs still run.
///
/// When `remove_intermediates` is set, the `old`/`new` sidecars of each
/// succeeded job are deleted afterwards.
pub fn run_batch(jobs: &[MergeJob], remove_intermediates: bool) -> BatchReport {
    let mut report = BatchReport::default();

    for job in jobs {
        let result = match job.mode {
            JobMode::Merge => merge_files(&job.old, &job.new, &job.dest),
            JobMode::Adopt => adopt_file(&job.new, &job.dest),
        };

        match result {
            Ok(outcome) => {
                if remove_intermediates {
                    remove_sidecar(&job.old);
                    remove_sidecar(&job.new);
                }
                report.succeeded.push((job.dest.clone(), outcome));
            }
            Err(e) => {
                tracing::warn!("[{}] {}", job.language, e);
                report.failed.push((job.dest.clone(), e));
            }
        }
    }

    tracing::debug!(
        "Batch finished: {} succeeded, {} failed",
        report.succeeded.len(),
        report.failed.len()
    );
    report
}

/// 中間ファイルを削除する。存在しなければ何もしない
fn remove_sidecar(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => tracing::debug!("Removed {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("Failed to remove {}: {}", path.display(), e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use pretty_assertions::assert_eq;
    use rstest::*;
    use tempfile::TempDir;

    use super::*;

    fn job(dir: &Path, language: &str, mode: JobMode) -> MergeJob {
        let lproj = dir.join(format!("{language}.lproj"));
        fs::create_dir_all(&lproj).unwrap();
        MergeJob {
            language: language.to_string(),
            old: lproj.join("Localizable.strings.old"),
            new: lproj.join("Localizable.strings.new"),
            dest: lproj.join("Localizable.strings"),
            mode,
        }
    }

    #[rstest]
    fn run_batch_isolates_failures() {
        let dir = TempDir::new().unwrap();
        let broken = job(dir.path(), "de", JobMode::Merge);
        fs::write(&broken.old, "/* unterminated\n").unwrap();
        fs::write(&broken.new, "/* a */\n\"a\" = \"A\";\n").unwrap();
        let fine = job(dir.path(), "fr", JobMode::Merge);
        fs::write(&fine.old, "/* a */\n\"a\" = \"Ah\";\n").unwrap();
        fs::write(&fine.new, "/* a */\n\"a\" = \"A\";\n").unwrap();

        let report = run_batch(&[broken.clone(), fine.clone()], true);

        assert_that!(report.is_success(), eq(false));
        assert_that!(report.failed, len(eq(1)));
        assert_that!(report.failed[0].0, eq(&broken.dest));
        assert_that!(report.succeeded, len(eq(1)));
        assert_eq!(fs::read_to_string(&fine.dest).unwrap(), "/* a */\n\"a\" = \"Ah\";\n");

        // 失敗したジョブの中間ファイルは残す
        assert_that!(broken.old.exists(), eq(true));
        assert_that!(broken.new.exists(), eq(true));
        assert_that!(fine.old.exists(), eq(false));
        assert_that!(fine.new.exists(), eq(false));
    }

    #[rstest]
    fn run_batch_keeps_intermediates_when_asked() {
        let dir = TempDir::new().unwrap();
        let en = job(dir.path(), "en", JobMode::Adopt);
        fs::write(&en.new, "/* a */\n\"a\" = \"A\";\n\n").unwrap();

        let report = run_batch(std::slice::from_ref(&en), false);

        assert_that!(report.is_success(), eq(true));
        assert_that!(report.succeeded[0].1, eq(MergeOutcome::Adopted { entries: 1 }));
        assert_that!(en.new.exists(), eq(true));
        assert_eq!(fs::read_to_string(&en.dest).unwrap(), "/* a */\n\"a\" = \"A\";\n");
    }

    #[rstest]
    fn run_batch_empty() {
        let report = run_batch(&[], true);

        assert_that!(report.is_success(), eq(true));
        assert_that!(report.succeeded, is_empty());
    }
}
