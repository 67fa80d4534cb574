#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mocboard::models::{ActivityRecord, Dataset};
use mocboard::store::Store;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const USER: &str = "admin";
pub const PASS: &str = "mocpass";

pub fn mb() -> Command {
    cargo_bin_cmd!("mocboard")
}

/// Isolated HOME / working directory plus a dataset path inside it.
pub struct Sandbox {
    pub dir: TempDir,
    pub data: String,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let data = dir
            .path()
            .join("moc_records.csv")
            .to_string_lossy()
            .to_string();
        Self { dir, data }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Command running inside this sandbox (HOME and working directory),
    /// with no dataset override and no credentials.
    pub fn bare(&self) -> Command {
        let mut cmd = mb();
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("MOCBOARD_USER")
            .env_remove("MOCBOARD_PASSWORD")
            .env_remove("EMAIL_USER")
            .env_remove("EMAIL_PASS");
        cmd
    }

    /// Command bound to this sandbox's dataset, without credentials.
    pub fn cmd(&self) -> Command {
        let mut cmd = self.bare();
        cmd.args(["--data", &self.data]);
        cmd
    }

    /// Command bound to this sandbox, logged in.
    pub fn session(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.args(["--user", USER, "--password", PASS]);
        cmd
    }

    pub fn store(&self) -> Store {
        Store::new(&self.data)
    }

    pub fn seed(&self, rows: &[(&str, &str, f64, u32, &str)]) {
        self.store()
            .save(&dataset(rows))
            .expect("seed dataset");
    }
}

pub fn record(name: &str, desc: &str, hours: f64, count: u32, month: &str) -> ActivityRecord {
    ActivityRecord::with_month(name, desc, hours, count, month)
}

pub fn dataset(rows: &[(&str, &str, f64, u32, &str)]) -> Dataset {
    rows.iter()
        .map(|(n, d, h, c, m)| record(n, d, *h, *c, m))
        .collect()
}

pub fn read(path: &Path) -> String {
    std::fs::read_to_string(path).expect("read file")
}
