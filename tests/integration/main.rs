//! Integration tests for dagcache

mod cli_tests {
    use assert_cmd::{cargo::cargo_bin_cmd, Command};
    use dagcache::cache::{CacheHeader, SeedHash};
    use predicates::prelude::*;
    use std::io::Write;
    use tempfile::TempDir;

    const SEED: &str = "290decd9548b62a8d60345a988386fc84ba6bc95484008f6362f93160ef3e563";

    /// Binary pointed at a config file that does not exist
    fn dagcache(temp: &TempDir) -> Command {
        let mut cmd = cargo_bin_cmd!("dagcache");
        cmd.env("DAGCACHE_CONFIG", temp.path().join("config.toml"));
        cmd
    }

    #[test]
    fn help_displays() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("DAG cache file manager"));
    }

    #[test]
    fn name_prints_revision_and_prefix() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["name", "--seed", SEED])
            .assert()
            .success()
            .stdout("23_290decd9548b62a8\n");
    }

    #[test]
    fn name_rejects_short_seed() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["name", "--seed", "abcd"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("expected 64 hex characters"));
    }

    #[test]
    fn path_joins_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dag");
        let expected = dir.join("7_290decd9548b62a8");
        dagcache(&temp)
            .args(["path", "--seed", SEED, "--revision", "7"])
            .arg("--dir")
            .arg(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains(expected.display().to_string()));
    }

    #[test]
    fn prepare_mismatch_then_match() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("dag");

        dagcache(&temp)
            .args(["prepare", "--seed", SEED])
            .arg("--dir")
            .arg(&dir)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("mismatch"));

        // Play the generator: stamp header and payload
        let seed: SeedHash = SEED.parse().unwrap();
        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .open(dir.join("23_290decd9548b62a8"))
            .unwrap();
        CacheHeader::new(seed).write_to(&mut file).unwrap();
        file.write_all(b"payload").unwrap();
        drop(file);

        dagcache(&temp)
            .args(["prepare", "--seed", SEED, "--format", "json"])
            .arg("--dir")
            .arg(&dir)
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""outcome": "match""#));

        dagcache(&temp)
            .args(["inspect", "--format", "json"])
            .arg(dir.join("23_290decd9548b62a8"))
            .assert()
            .success()
            .stdout(predicate::str::contains(r#""header": "valid""#))
            .stdout(predicate::str::contains(r#""payload_bytes": 7"#));

        dagcache(&temp)
            .args(["list", "--format", "plain"])
            .arg("--dir")
            .arg(&dir)
            .assert()
            .success()
            .stdout("23_290decd9548b62a8\n");
    }

    #[test]
    fn prepare_fails_when_dir_is_a_file() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        dagcache(&temp)
            .args(["prepare", "--seed", SEED])
            .arg("--dir")
            .arg(&blocker)
            .assert()
            .failure()
            .stderr(predicate::str::contains("Failed to create cache directory"));
    }

    #[test]
    fn prepare_reports_fail_as_json() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, b"").unwrap();

        dagcache(&temp)
            .args(["prepare", "--seed", SEED, "--format", "json"])
            .arg("--dir")
            .arg(&blocker)
            .assert()
            .failure()
            .stdout(predicate::str::contains(r#""outcome": "fail""#))
            .stdout(predicate::str::contains(r#""error": "Failed to create cache directory"#))
            .stderr(predicate::str::contains("Error:"));
    }

    #[test]
    fn config_path_honours_env() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.toml"));
    }

    #[test]
    fn config_show_defaults() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["config", "show"])
            .assert()
            .success()
            .stdout(predicate::str::contains("[cache]"))
            .stdout(predicate::str::contains("revision = 23"));
    }

    #[test]
    fn config_revision_drives_naming() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("config.toml"), "[cache]\nrevision = 24\n").unwrap();
        dagcache(&temp)
            .args(["name", "--seed", SEED])
            .assert()
            .success()
            .stdout("24_290decd9548b62a8\n");
    }

    #[test]
    fn list_empty_dir() {
        let temp = TempDir::new().unwrap();
        dagcache(&temp)
            .args(["list"])
            .arg("--dir")
            .arg(temp.path().join("nothing-here"))
            .assert()
            .success()
            .stdout(predicate::str::contains("No cache files"));
    }
}
