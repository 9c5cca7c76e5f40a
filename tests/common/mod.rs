//! Shared fixtures for driving the binary against an isolated home

#![allow(dead_code, deprecated)]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use std::path::{Path, PathBuf};
use std::process::Command;

use fast_nav::storage::Store;

/// A throwaway `HOME` and config directory for one test
pub struct Sandbox {
    temp: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        temp.child("home").create_dir_all().unwrap();
        temp.child("config").create_dir_all().unwrap();
        Self { temp }
    }

    pub fn home(&self) -> PathBuf {
        self.temp.child("home").path().to_path_buf()
    }

    pub fn config_home(&self) -> PathBuf {
        self.temp.child("config").path().to_path_buf()
    }

    pub fn bookmarks_file(&self) -> PathBuf {
        self.home().join(".fn").join("bookmarks.json")
    }

    /// Create a directory under the sandbox and return its canonical path
    pub fn dir(&self, name: &str) -> PathBuf {
        let child = self.temp.child("dirs").child(name);
        child.create_dir_all().unwrap();
        child.path().canonicalize().unwrap()
    }

    /// The binary with environment pointed at the sandbox
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("fast-nav").unwrap();
        cmd.env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env_remove("FN_BOOKMARKS_FILE")
            .env_remove("FN_LOG")
            .current_dir(self.temp.path());
        cmd
    }

    /// `bash -c` with the sandbox environment and the built binary on `PATH`
    pub fn bash(&self, script: &str) -> Command {
        let bin = assert_cmd::cargo::cargo_bin("fast-nav");
        let bin_dir = bin.parent().unwrap().to_path_buf();
        let inherited = std::env::var_os("PATH").unwrap_or_default();
        let path = std::env::join_paths(
            std::iter::once(bin_dir).chain(std::env::split_paths(&inherited)),
        )
        .unwrap();

        let mut cmd = Command::new("bash");
        cmd.arg("-c")
            .arg(script)
            .env("PATH", path)
            .env_remove("CDPATH")
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("NO_COLOR", "1")
            .env_remove("FN_BOOKMARKS_FILE")
            .env_remove("FN_LOG")
            .current_dir(self.temp.path());
        cmd
    }

    /// Run `save <alias>` from inside `dir`
    pub fn save(&self, alias: &str, dir: &Path) {
        self.cmd()
            .args(["save", alias])
            .current_dir(dir)
            .assert()
            .success();
    }

    /// Load the bookmarks file as the binary left it
    pub fn store(&self) -> Store {
        Store::open(self.bookmarks_file()).unwrap()
    }
}

/// What the binary prints for a navigable path
pub fn path_line(path: &Path) -> String {
    format!("{}\n", path.display())
}
