use mess::commands::{run_check, run_sample};
use mess::{CheckArgs, SampleArgs};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_check_describes_schema() {
    let args = CheckArgs {
        schema: fixture("orders.yaml"),
    };

    let mut out = Vec::new();
    run_check(&args, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert!(text.starts_with("table: orders\n"));
    assert!(text.contains("  order_id (int, nullable 0%) [primary key]"));
    assert!(text.contains("  note (string, nullable 50%)\n"));
    assert!(text.contains("unique keys:\n  (created_at, sku)"));

    // Fields are listed in key order
    let amount = text.find("  amount").unwrap();
    let user_id = text.find("  user_id").unwrap();
    assert!(amount < user_id);
}

#[test]
fn test_check_reports_load_failure() {
    let args = CheckArgs {
        schema: fixture("absent.json"),
    };

    let err = run_check(&args, &mut Vec::new()).unwrap_err();
    assert!(err.to_string().starts_with("Failed to load schema"));
}

#[test]
fn test_sample_writes_jsonl() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("users.jsonl");
    let args = SampleArgs {
        schema: fixture("users.json"),
        count: 25,
        seed: 42,
        output: Some(output.clone()),
    };

    assert_eq!(run_sample(&args).unwrap(), 25);

    let content = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 25);
    for line in lines {
        let row: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(row["id"], serde_json::json!(1));
        assert_eq!(row["name"].as_str().unwrap().split(' ').count(), 2);
    }
}

#[test]
fn test_sample_is_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let run = |name: &str| {
        let output = dir.path().join(name);
        let args = SampleArgs {
            schema: fixture("orders.yaml"),
            count: 20,
            seed: 3,
            output: Some(output.clone()),
        };
        run_sample(&args).unwrap();
        std::fs::read_to_string(output).unwrap()
    };

    assert_eq!(run("a.jsonl"), run("b.jsonl"));
}
