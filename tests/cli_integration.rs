//! CLI integration tests
//!
//! These run the built binary against a temporary solution checkout laid out
//! the way the publishing pipeline expects:
//!
//! ```text
//! <root>/deployment/            <- working directory
//! <root>/terraform/*.tf
//! <root>/source/custom-resource/<function>/
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn helper_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_solution-helper"))
}

const MAIN_TF: &str = r#"locals {
  solution_name    = "live-streaming-on-aws"
  solution_version = "v4.2.0"
}

resource "aws_s3_object" "template" {
  bucket = "my-solution-bucket"
  source = "s3://my-solution-bucket/templates/main.template"
}
"#;

fn create_solution(dir: &TempDir) -> PathBuf {
    let root = dir.path();

    fs::create_dir_all(root.join("deployment")).expect("Failed to create deployment dir");
    fs::create_dir_all(root.join("terraform")).expect("Failed to create terraform dir");
    fs::write(root.join("terraform/main.tf"), MAIN_TF).expect("Failed to write main.tf");
    fs::write(root.join("terraform/terraform.tfvars"), "bucket = \"keep\"\n")
        .expect("Failed to write tfvars");

    let send_metrics = root.join("source/custom-resource/send-metrics");
    fs::create_dir_all(&send_metrics).expect("Failed to create function dir");
    fs::write(
        send_metrics.join("package.json"),
        r#"{"name": "send-metrics", "engines": {"node": ">=18.0.0"}}"#,
    )
    .expect("Failed to write package.json");
    fs::write(send_metrics.join("index.js"), "exports.handler = async () => {};\n")
        .expect("Failed to write index.js");

    let resizer = root.join("source/custom-resource/resizer");
    fs::create_dir_all(&resizer).expect("Failed to create function dir");
    fs::write(resizer.join("package.json"), "{}").expect("Failed to write package.json");
    fs::write(resizer.join("main.py"), "def lambda_handler(event, context):\n    pass\n")
        .expect("Failed to write main.py");

    root.join("deployment")
}

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(helper_bin())
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute solution-helper")
}

fn read_json(path: &Path) -> serde_json::Value {
    let content = fs::read_to_string(path).expect("Failed to read artifact");
    serde_json::from_str(&content).expect("Artifact is not valid JSON")
}

#[test]
fn test_cli_help() {
    let output = Command::new(helper_bin())
        .arg("--help")
        .output()
        .expect("Failed to execute solution-helper");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--terraform-dir"));
    assert!(stdout.contains("--dry-run"));
}

#[test]
fn test_cli_version() {
    let output = Command::new(helper_bin())
        .arg("--version")
        .output()
        .expect("Failed to execute solution-helper");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("solution-helper"));
}

#[test]
fn test_no_argument_run() {
    let temp = TempDir::new().unwrap();
    let workdir = create_solution(&temp);

    let output = run_in(&workdir, &[]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Processing complete!"));
    assert!(stdout.contains("Next steps:"));

    let assets = temp.path().join("deployment/regional-s3-assets");
    let metrics = read_json(&assets.join("send-metrics-metadata.json"));
    assert_eq!(metrics["runtime"], "nodejs18.0.0");
    assert_eq!(metrics["handler"], "index.handler");
    assert_eq!(
        metrics["keyPlaceholder"],
        "%%SOLUTION_NAME%%/%%VERSION%%/send-metrics.zip"
    );

    let resizer = read_json(&assets.join("resizer-metadata.json"));
    assert_eq!(resizer["runtime"], "nodejs18.x");
    assert_eq!(resizer["handler"], "main.lambda_handler");

    let variables = read_json(&assets.join("pipeline-variables.json"));
    assert_eq!(variables["deployment"]["bucket_name"], "%%BUCKET_NAME%%");

    let manifest = read_json(&assets.join("deployment-manifest.json"));
    assert_eq!(manifest["infrastructure"], "terraform");
    assert!(manifest["timestamp"].as_str().unwrap().ends_with('Z'));

    let main_tf = fs::read_to_string(temp.path().join("terraform/main.tf")).unwrap();
    assert!(main_tf.contains(r#"bucket = "${%%BUCKET_NAME%%}-${var.aws_region}""#));
    assert!(main_tf.contains("s3://${%%BUCKET_NAME%%}-${var.aws_region}/templates/main.template"));
    assert!(main_tf.contains(r#"solution_name    = "%%SOLUTION_NAME%%""#));
    assert!(main_tf.contains(r#"solution_version = "%%VERSION%%""#));

    let tfvars = fs::read_to_string(temp.path().join("terraform/terraform.tfvars")).unwrap();
    assert_eq!(tfvars, "bucket = \"keep\"\n");
}

#[test]
fn test_second_run_is_idempotent() {
    let temp = TempDir::new().unwrap();
    let workdir = create_solution(&temp);
    let assets = temp.path().join("deployment/regional-s3-assets");

    assert!(run_in(&workdir, &["--quiet"]).status.success());
    let main_tf = fs::read_to_string(temp.path().join("terraform/main.tf")).unwrap();
    let metadata = fs::read_to_string(assets.join("send-metrics-metadata.json")).unwrap();
    let variables = fs::read_to_string(assets.join("pipeline-variables.json")).unwrap();
    let mut first_manifest = read_json(&assets.join("deployment-manifest.json"));

    assert!(run_in(&workdir, &["--quiet"]).status.success());

    assert_eq!(fs::read_to_string(temp.path().join("terraform/main.tf")).unwrap(), main_tf);
    assert_eq!(fs::read_to_string(assets.join("send-metrics-metadata.json")).unwrap(), metadata);
    assert_eq!(fs::read_to_string(assets.join("pipeline-variables.json")).unwrap(), variables);

    let mut second_manifest = read_json(&assets.join("deployment-manifest.json"));
    first_manifest["timestamp"] = serde_json::Value::Null;
    second_manifest["timestamp"] = serde_json::Value::Null;
    assert_eq!(first_manifest, second_manifest);
}

#[test]
fn test_missing_sources_still_emit_documents() {
    let temp = TempDir::new().unwrap();
    let workdir = temp.path().join("deployment");
    fs::create_dir_all(&workdir).unwrap();

    let output = run_in(&workdir, &[]);

    assert!(output.status.success());
    let assets = temp.path().join("deployment/regional-s3-assets");
    assert!(assets.join("pipeline-variables.json").is_file());
    assert!(assets.join("deployment-manifest.json").is_file());
}

#[test]
fn test_malformed_package_json_exits_with_error() {
    let temp = TempDir::new().unwrap();
    let workdir = create_solution(&temp);
    fs::write(
        temp.path().join("source/custom-resource/send-metrics/package.json"),
        "{ \"engines\": ",
    )
    .unwrap();

    let output = run_in(&workdir, &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("Malformed package.json").count(), 1);
    // The rewrite phase never ran
    assert_eq!(
        fs::read_to_string(temp.path().join("terraform/main.tf")).unwrap(),
        MAIN_TF
    );
}

#[test]
fn test_dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let workdir = create_solution(&temp);

    let output = run_in(&workdir, &["--dry-run"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Dry run complete"));
    assert!(!temp.path().join("deployment/regional-s3-assets").exists());
    assert_eq!(
        fs::read_to_string(temp.path().join("terraform/main.tf")).unwrap(),
        MAIN_TF
    );
}

#[test]
fn test_explicit_directories_and_config_file() {
    let temp = TempDir::new().unwrap();
    create_solution(&temp);
    let root = temp.path();
    fs::write(
        root.join("helper.toml"),
        "terraform_dir = \"terraform\"\nlambda_dir = \"source/custom-resource\"\n\n[placeholders]\nbucket_name = \"DIST_BUCKET\"\n",
    )
    .unwrap();

    let output = run_in(root, &["--config", "helper.toml", "--output-dir", "dist"]);

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let metrics = read_json(&root.join("dist/send-metrics-metadata.json"));
    assert_eq!(metrics["bucketPlaceholder"], "%%DIST_BUCKET%%");
    let main_tf = fs::read_to_string(root.join("terraform/main.tf")).unwrap();
    assert!(main_tf.contains("${%%DIST_BUCKET%%}-${var.aws_region}"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    let output = Command::new(helper_bin())
        .arg("--no-such-flag")
        .output()
        .expect("Failed to execute solution-helper");

    assert_eq!(output.status.code(), Some(2));
}
