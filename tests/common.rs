#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

pub fn termsuggest_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_termsuggest"))
}

pub struct TestEnvironment {
    // TempDir is kept to ensure cleanup happens when TestEnvironment is dropped
    pub(crate) temp_dir: TempDir,
    pub config_dir: PathBuf,
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnvironment {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_dir = temp_dir.path().join("config");
        Self {
            temp_dir,
            config_dir,
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn create_file(&self, filename: &str, content: &str) -> PathBuf {
        let file_path = self.path().join(filename);
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    pub fn create_config(&self, config_content: &str) -> PathBuf {
        fs::create_dir_all(&self.config_dir).expect("Failed to create config directory");
        let config_path = self.config_dir.join("config.toml");
        fs::write(&config_path, config_content).expect("Failed to write config file");
        config_path
    }

    fn command(&self, args: &[&str]) -> Command {
        self.command_in(&self.config_dir, args)
    }

    fn command_in(&self, config_dir: &Path, args: &[&str]) -> Command {
        let mut command = Command::new(termsuggest_bin());
        command
            .env_remove("TERMSUGGEST_CONFIG_DIR")
            .env_remove("TERMSUGGEST_LOG")
            .args(["--config-dir", config_dir.to_str().expect("config dir")])
            .args(args)
            .current_dir(self.path());
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("run termsuggest")
    }

    pub fn run_with_config_dir(&self, config_dir: &Path, args: &[&str]) -> Output {
        self.command_in(config_dir, args)
            .stdin(Stdio::null())
            .output()
            .expect("run termsuggest")
    }

    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn termsuggest");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(stdin.as_bytes())
            .expect("write stdin");
        child.wait_with_output().expect("wait termsuggest")
    }
}

pub fn assert_success(output: &Output) {
    if output.status.success() {
        return;
    }
    panic!(
        "Command failed: {}\nstdout:\n{}\nstderr:\n{}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

pub fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}
