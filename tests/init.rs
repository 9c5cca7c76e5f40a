mod common;

use assert_cmd::prelude::*;
use common::Sandbox;
use predicates::prelude::*;

#[test]
fn test_init_creates_global_config() {
    let sandbox = Sandbox::new();
    let config = sandbox.config_home().join("fast-nav").join("config.toml");

    sandbox
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("Created config"));

    let content = std::fs::read_to_string(&config).unwrap();
    assert!(content.contains("fast-nav configuration"));
    assert!(content.contains("max_distance = 3"));
}

#[test]
fn test_init_skip_existing_without_force() {
    let sandbox = Sandbox::new();
    let dir = sandbox.config_home().join("fast-nav");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "# existing content").unwrap();

    sandbox
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    // Original content should be preserved
    assert_eq!(
        std::fs::read_to_string(dir.join("config.toml")).unwrap(),
        "# existing content"
    );
}

#[test]
fn test_init_force_overwrite() {
    let sandbox = Sandbox::new();
    let dir = sandbox.config_home().join("fast-nav");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "# existing content").unwrap();

    sandbox
        .cmd()
        .args(["init", "--force"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Created config"));

    let content = std::fs::read_to_string(dir.join("config.toml")).unwrap();
    assert!(content.contains("fast-nav configuration"));
}

#[test]
fn test_init_works_with_broken_config() {
    let sandbox = Sandbox::new();
    let dir = sandbox.config_home().join("fast-nav");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[navigate\n").unwrap();

    sandbox
        .cmd()
        .args(["init", "--force"])
        .assert()
        .success();

    // The regenerated template is valid again
    sandbox.cmd().arg("list").assert().success();
}

#[test]
fn test_broken_config_fails_store_commands() {
    let sandbox = Sandbox::new();
    let dir = sandbox.config_home().join("fast-nav");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("config.toml"), "[navigate\n").unwrap();

    sandbox
        .cmd()
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_storage_file_is_used() {
    let sandbox = Sandbox::new();
    let dir = sandbox.config_home().join("fast-nav");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(
        dir.join("config.toml"),
        "[storage]\nfile = \"~/elsewhere/marks.json\"\n",
    )
    .unwrap();

    let project = sandbox.dir("project");
    sandbox.save("proj", &project);

    assert!(sandbox.home().join("elsewhere/marks.json").exists());
    assert!(!sandbox.bookmarks_file().exists());
}
