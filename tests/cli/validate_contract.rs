use crate::harness::TestContext;
use crate::harness::cluster_config::{STATIC_ZOOKEEPER, compose};
use predicates::prelude::*;

#[test]
fn validate_reports_variants_without_writing() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration for prod-1 is valid"))
        .stdout(predicate::str::contains("static master discovery, zookeeper storage backend"));

    assert!(!ctx.serve_dir().exists());
}

#[test]
fn validate_rejects_trailing_slash_bootstrap_url() {
    let ctx = TestContext::new();
    ctx.write_config(&compose(
        "master_discovery: static\nmaster_list: [10.0.0.1]\n",
        "exhibitor_storage_backend: shared_filesystem\nexhibitor_fs_config_path: /mnt/ex\n",
    )
    .replace("http://bootstrap.example", "http://bootstrap.example/"));

    ctx.cli()
        .arg("validate")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid bootstrap_url"));
}

#[test]
fn validate_accepts_alternate_config_path() {
    let ctx = TestContext::new();
    std::fs::write(ctx.work_dir().join("other.yaml"), STATIC_ZOOKEEPER).unwrap();

    ctx.cli().args(["validate", "--config", "other.yaml"]).assert().success();
}
