// Test fixtures for integration testing

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Documents shipped under tests/fixtures: 100 top-level pages plus
/// nested/top.md and nested/subdir/deep.md
#[allow(dead_code)]
pub const FIXTURE_DOCUMENT_COUNT: usize = 102;

/// Root of the shipped fixture corpus
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// On-disk corpus built from literal files
#[allow(dead_code)]
pub struct TestRepo {
    pub dir: TempDir,
    pub files: Vec<PathBuf>,
}

impl TestRepo {
    /// A small help-center corpus
    #[allow(dead_code)]
    pub fn help_center() -> Self {
        Self::with_files(&[
            (
                "account/password-reset.md",
                "# Password Reset\n\n## How to reset your password\n\n1. Go to Settings\n2. Click Reset Password",
            ),
            (
                "billing/refund.md",
                "# Refunds\n\nTo request a refund, contact support.\n\nRefunds are processed within 5 business days.",
            ),
            (
                "billing/invoices/download.md",
                "# Downloading invoices\n\nOpen Billing > Invoices and click Download.",
            ),
            ("README.txt", "Help center export"),
        ])
    }

    /// Create with custom files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();

        for (path, content) in files {
            let full_path = dir.path().join(path);
            std::fs::create_dir_all(full_path.parent().unwrap()).unwrap();
            std::fs::write(&full_path, content).unwrap();
            paths.push(full_path);
        }

        Self { dir, files: paths }
    }

    /// Get path to the corpus root
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }
}
