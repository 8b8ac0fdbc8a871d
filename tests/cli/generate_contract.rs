use crate::harness::TestContext;
use crate::harness::cluster_config::{STATIC_ZOOKEEPER, compose};
use predicates::prelude::*;
use std::fs;

#[test]
fn generate_writes_rendered_files_under_serve_dir() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✅ Generated"));

    assert_eq!(ctx.read_output("etc/cluster-id"), "prod-1\n");
    assert_eq!(
        ctx.read_output("etc/master_list"),
        "[\"10.0.0.1\", \"10.0.0.2\", \"10.0.0.3\"]\n"
    );
    assert!(ctx.read_output("etc/mesos-master-quorum").contains("MESOS_QUORUM=2"));
    let exhibitor = ctx.read_output("etc/exhibitor");
    assert!(exhibitor.contains("ZK_CONFIG_CONNECT=zk1:2181,zk2:2181"));
    assert!(exhibitor.contains("ZK_CONFIG_ZPATH=/exhibitor"));
    let bootstrap = ctx.read_output("etc/bootstrap.env");
    assert!(bootstrap.contains("BOOTSTRAP_ID=0123abcd"));
    assert!(bootstrap.contains("CHANNEL_NAME=testing/continuous"));
    assert!(ctx.read_output("etc/mesos-slave-common").contains("MESOS_GC_DELAY=2days"));
}

#[test]
fn generate_is_idempotent() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli().args(["generate", "-d", "onprem"]).assert().success();
    let first = ctx.read_output("etc/mesos-dns.json");
    ctx.cli().args(["generate", "-d", "onprem"]).assert().success();

    assert_eq!(ctx.read_output("etc/mesos-dns.json"), first);
}

#[test]
fn unsupported_deployment_type_exits_nonzero_without_output() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli()
        .args(["generate", "--deployment-type", "chef"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: 'chef' is not a supported installation type"));

    assert!(!ctx.serve_dir().exists());
}

#[test]
fn missing_environment_variable_is_named() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli()
        .env_remove("DCOS_BOOTSTRAP_ID")
        .args(["generate", "--deployment-type", "onprem"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: DCOS_BOOTSTRAP_ID is not set"));

    assert!(!ctx.serve_dir().exists());
}

#[test]
fn missing_config_file_is_reported() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem", "--config", "absent.yaml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found: absent.yaml"));
}

#[test]
fn missing_required_field_names_field_and_variant() {
    let ctx = TestContext::new();
    ctx.write_config(&compose(
        "master_discovery: keepalived\nkeepalived_router_id: 51\nkeepalived_interface: eth0\n\
         keepalived_virtual_ipaddress: 10.0.0.100\n",
        "exhibitor_storage_backend: shared_filesystem\nexhibitor_fs_config_path: /mnt/ex\n",
    ));

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Must set keepalived_pass when using master_discovery type keepalived",
        ));

    ctx.assert_nothing_generated();
}

#[test]
fn invalid_parameter_is_rejected_before_rendering() {
    let ctx = TestContext::new();
    ctx.write_config(&compose(
        "master_discovery: cloud-dynamic\nnum_masters: 4\n",
        "exhibitor_storage_backend: shared_filesystem\nexhibitor_fs_config_path: /mnt/ex\n",
    ));

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid num_masters"));

    ctx.assert_nothing_generated();
}

#[test]
fn unknown_variant_requires_opt_in() {
    let ctx = TestContext::new();
    ctx.write_config(&compose(
        "master_discovery: static\nmaster_list: [10.0.0.1]\n",
        "exhibitor_storage_backend: etcd\n",
    ));

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'etcd' is not a known exhibitor_storage_backend type"));

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem", "--allow-unknown-variants"])
        .assert()
        .success();

    assert!(ctx.serve_dir().join("etc/master_list").exists());
    assert!(!ctx.serve_dir().join("etc/exhibitor").exists());
}

#[test]
fn dry_run_lists_templates_and_writes_nothing() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli()
        .args(["generate", "--deployment-type", "onprem", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run: 3 template(s)"))
        .stdout(predicate::str::contains("onprem/master-discovery/static/config.yaml"))
        .stdout(predicate::str::contains("onprem/exhibitor-storage-backend/zookeeper/config.yaml"));

    assert!(!ctx.serve_dir().exists());
}

#[test]
fn output_and_templates_flags_override_defaults() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    let templates = ctx.home().join("templates/onprem");
    fs::create_dir_all(templates.join("master-discovery/static")).unwrap();
    fs::create_dir_all(templates.join("exhibitor-storage-backend/zookeeper")).unwrap();
    fs::write(
        templates.join("config.yaml"),
        "write_files:\n  - path: /name\n    content: \"{{ cluster_name }}\"\n",
    )
    .unwrap();
    fs::write(templates.join("master-discovery/static/config.yaml"), "write_files: []\n").unwrap();
    fs::write(templates.join("exhibitor-storage-backend/zookeeper/config.yaml"), "").unwrap();

    let out = ctx.home().join("custom-out");
    ctx.cli()
        .args(["generate", "-d", "onprem", "--output"])
        .arg(&out)
        .arg("--templates")
        .arg(ctx.home().join("templates"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated 1 file(s) from 3 template(s)"));

    assert_eq!(fs::read_to_string(out.join("name")).unwrap(), "prod-1");
    assert!(!ctx.serve_dir().exists());
}

#[test]
fn verbose_logs_written_files_to_stderr() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    ctx.cli()
        .args(["-v", "generate", "--deployment-type", "onprem"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Wrote"))
        .stderr(predicate::str::contains("DCOS_BOOTSTRAP_ID found in environment"));
}
