use std::io::Write;

use colfit_demo::{Cli, DemoError, run};

const PEOPLE_GRID_JSON: &str = r#"{
  "knownColumns": ["firstName", "lastName", "age", "email", "phone", "address"],
  "breakpoints": [
    { "minWidth": 1200, "columns": ["firstName", "lastName", "age", "email", "phone", "address"] },
    { "minWidth": 768, "columns": ["firstName", "lastName", "email", "phone"] },
    { "minWidth": 0, "columns": ["firstName", "lastName", "email"] }
  ],
  "defaultColumns": ["firstName", "lastName"],
  "options": { "lastColumnSwitchable": true, "enableColumnSwitcher": true }
}"#;

fn config_file(suffix: &str, body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("temp config");
    file.write_all(body.as_bytes()).expect("write config");
    file
}

fn run_lines(cli: Cli) -> Vec<String> {
    let mut out = Vec::new();
    run(cli, &mut out).expect("replay succeeds");
    String::from_utf8(out)
        .expect("utf8 output")
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn json_config_replays_resizes_and_cycles() {
    let file = config_file(".json", PEOPLE_GRID_JSON);
    let lines = run_lines(Cli {
        config: file.path().to_path_buf(),
        widths: vec![500.0, 900.0],
        cycle: 3,
        switches: vec![],
        json: false,
    });
    assert_eq!(
        lines,
        [
            "event=attach width=500 visible=firstName,lastName,email swap=-",
            "event=resize width=900 visible=firstName,lastName,email,phone swap=-",
            "event=cycle width=900 visible=firstName,lastName,email,age swap=age",
            "event=cycle width=900 visible=firstName,lastName,email,address swap=address",
            "event=cycle width=900 visible=firstName,lastName,email,phone swap=-",
        ]
    );
}

#[test]
fn switcher_replaces_clicked_column() {
    let file = config_file(".json", PEOPLE_GRID_JSON);
    let lines = run_lines(Cli {
        config: file.path().to_path_buf(),
        widths: vec![800.0],
        cycle: 0,
        switches: vec!["lastName".to_owned()],
        json: false,
    });
    assert_eq!(
        lines.last().map(String::as_str),
        Some("event=switch width=800 visible=firstName,age,email,phone swap=-")
    );
}

#[test]
fn toml_config_with_json_output() {
    let file = config_file(
        ".toml",
        r#"
default_columns = ["id"]

[[breakpoints]]
min_width = 400
columns = ["id", "name"]
"#,
    );
    let lines = run_lines(Cli {
        config: file.path().to_path_buf(),
        widths: vec![-1.0, 640.0],
        cycle: 0,
        switches: vec![],
        json: true,
    });
    assert_eq!(lines.len(), 2);
    let first: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(first["visible"], serde_json::json!(["id"]));
    let second: serde_json::Value = serde_json::from_str(&lines[1]).unwrap();
    assert_eq!(second["visible"], serde_json::json!(["id", "name"]));
}

#[test]
fn duplicate_breakpoint_is_a_config_error() {
    let file = config_file(
        ".toml",
        r#"
[[breakpoints]]
min_width = 400
columns = ["a"]

[[breakpoints]]
min_width = 400
columns = ["b"]
"#,
    );
    let err = run(
        Cli {
            config: file.path().to_path_buf(),
            widths: vec![500.0],
            cycle: 0,
            switches: vec![],
            json: false,
        },
        &mut Vec::new(),
    )
    .unwrap_err();
    assert!(matches!(err, DemoError::Config(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("duplicate breakpoint min_width 400"));
}
