use crate::harness::TestContext;
use crate::harness::cluster_config::{
    MASTER_DISCOVERY_BLOCKS, STATIC_ZOOKEEPER, STORAGE_BACKEND_BLOCKS, compose,
};
use genconf::{
    AppError, DeploymentType, GenerateOptions, GenerateOutcome, GenerationError, GenerationState,
    ValidateOptions, VariantPolicy, generate_with_env, validate_with_env,
};
use std::fs;

fn options_for(ctx: &TestContext) -> GenerateOptions {
    let mut options = GenerateOptions::new("onprem");
    options.config_path = ctx.work_dir().join("dcos-config.yaml");
    options
}

#[test]
fn every_variant_combination_renders_with_builtin_templates() {
    for (master_tag, master_block) in MASTER_DISCOVERY_BLOCKS {
        for (storage_tag, storage_block) in STORAGE_BACKEND_BLOCKS {
            let ctx = TestContext::new();
            ctx.write_config(&compose(master_block, storage_block));

            let outcome = generate_with_env(&options_for(&ctx), &ctx.environment())
                .unwrap_or_else(|err| panic!("{}/{} failed: {}", master_tag, storage_tag, err));

            let GenerateOutcome::Generated { report, output_dir } = outcome else {
                panic!("expected generated outcome");
            };
            assert_eq!(report.deployment, DeploymentType::OnPrem);
            assert_eq!(report.committed.len(), 3, "{}/{}", master_tag, storage_tag);
            assert_eq!(output_dir, ctx.serve_dir());
            assert!(ctx.read_output("etc/exhibitor").contains("EXHIBITOR_BACKEND="));
            assert!(ctx.read_output("etc/exhibitor.discovery").contains("MASTER_SOURCE="));
        }
    }
}

#[test]
fn render_failure_keeps_earlier_templates_on_disk() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    let root = ctx.home().join("templates");
    let onprem = root.join("onprem");
    fs::create_dir_all(onprem.join("master-discovery/static")).unwrap();
    fs::create_dir_all(onprem.join("exhibitor-storage-backend/zookeeper")).unwrap();
    fs::write(onprem.join("config.yaml"), "write_files:\n  - path: /a\n    content: a\n").unwrap();
    fs::write(
        onprem.join("master-discovery/static/config.yaml"),
        "write_files:\n  - path: /b\n    content: b\n",
    )
    .unwrap();
    // References a field that only exists for aws_s3.
    fs::write(
        onprem.join("exhibitor-storage-backend/zookeeper/config.yaml"),
        "write_files:\n  - path: /c\n    content: \"{{ s3_bucket }}\"\n",
    )
    .unwrap();

    let mut options = options_for(&ctx);
    options.templates_dir = Some(root);
    let err = generate_with_env(&options, &ctx.environment()).unwrap_err();

    let AppError::Generation(failure) = err else {
        panic!("expected generation failure, got {:?}", err);
    };
    assert_eq!(failure.state, GenerationState::Rendering);
    assert!(matches!(failure.error, GenerationError::TemplateRender { .. }));
    assert_eq!(failure.committed.len(), 2);
    assert_eq!(ctx.read_output("a"), "a");
    assert_eq!(ctx.read_output("b"), "b");
    assert!(!ctx.serve_dir().join("c").exists());
}

#[test]
fn validate_api_matches_generate_selection() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);

    let validated = validate_with_env(
        &ValidateOptions {
            config_path: ctx.work_dir().join("dcos-config.yaml"),
            policy: VariantPolicy::Strict,
            ..Default::default()
        },
        &ctx.environment(),
    )
    .unwrap();

    let mut options = options_for(&ctx);
    options.dry_run = true;
    let GenerateOutcome::Planned { templates, .. } =
        generate_with_env(&options, &ctx.environment()).unwrap()
    else {
        panic!("expected planned outcome");
    };

    assert_eq!(validated.templates, templates);
    assert_eq!(validated.deployment, DeploymentType::OnPrem);
}

#[test]
fn missing_environment_fails_before_any_write() {
    let ctx = TestContext::new();
    ctx.write_config(STATIC_ZOOKEEPER);
    let mut env = ctx.environment();
    env.bootstrap_id = None;

    let err = generate_with_env(&options_for(&ctx), &env).unwrap_err();

    assert!(matches!(err, AppError::MissingEnvironment(ref name) if name == "DCOS_BOOTSTRAP_ID"));
    assert!(!ctx.serve_dir().exists());
}
