#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn tp() -> Command {
    cargo_bin_cmd!("techpedia")
}

/// Scratch directory with a colourless config file, so table output can be
/// matched as plain text.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let ws = Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        };
        ws.write_config("color: false\n");
        ws
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn config(&self) -> PathBuf {
        self.path("techpedia.conf")
    }

    pub fn write_config(&self, yaml: &str) {
        fs::write(self.config(), yaml).expect("write config");
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let p = self.path(name);
        fs::write(&p, content).expect("write file");
        p
    }

    /// `techpedia --config <ws>/techpedia.conf <args...>`
    pub fn cmd(&self, args: &[&str]) -> Command {
        let mut cmd = tp();
        cmd.arg("--config").arg(self.config()).args(args);
        cmd
    }
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).expect("read file")
}

/// A day sheet without a date (so it always falls inside the history window).
pub const SHEET: &str = r#"{
  "employees": [
    { "name": "Иванов", "breakLimitMinutes": 30, "lunchLimitMinutes": 60 },
    { "name": "Андреев", "breakLimitMinutes": 15, "lunchLimitMinutes": 45 }
  ],
  "events": [
    { "employeeName": "Иванов", "kind": "break", "state": "finished", "startTime": "09:00", "endTime": "09:20" },
    { "employeeName": "Андреев", "kind": "lunch", "state": "finished", "startTime": "12:00", "endTime": "13:00" },
    { "employeeName": "Андреев", "kind": "break", "state": "planned", "startTime": "15:00", "endTime": "" },
    { "employeeName": "Сидоров", "kind": "break", "state": "finished", "startTime": "10:00", "endTime": "10:10" }
  ]
}"#;
