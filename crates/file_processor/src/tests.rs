use super::*;

#[test]
fn options_build() {
    let table = options("file_processor").unwrap();
    assert_eq!(table.len(), 5);
    assert!(table.to_string().starts_with(
        "file_processor - File Processor - processes input files and generates output\n"
    ));
}

#[test]
fn report_text() {
    let table = options("fp").unwrap();
    let args = ["fp", "-v", "-o", "out.txt", "a", "b"];
    let matches = cmdparser::parse(&args, &table).unwrap();

    let expected = "\
Verbose mode: ON
Output file: out.txt
Positional arguments:
  1: a
  2: b
";
    assert_eq!(Report::from(&matches).to_string(), expected);
}

#[test]
fn report_defaults() {
    let table = options("fp").unwrap();
    let matches = cmdparser::parse(&["fp", "-isize"], &table).unwrap();

    let expected = "\
Verbose mode: OFF
Output file: test.c
Sort option: size
Positional arguments:
";
    assert_eq!(Report::from(&matches).to_string(), expected);
}

#[test]
fn report_json() {
    let table = options("fp").unwrap();
    let matches = cmdparser::parse(&["fp", "--json", "--", "-x"], &table).unwrap();
    assert!(matches.flag("json"));

    let value = serde_json::to_value(&Report::from(&matches)).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "verbose": false,
            "output": "test.c",
            "sort": null,
            "positionals": ["-x"],
        })
    );
}

#[test]
fn render_help_branch() {
    let table = options("fp").unwrap();
    for &args in &[&["fp", "-h", "a"][..], &["fp", "--json", "--help"][..]] {
        let matches = cmdparser::parse(args, &table).unwrap();
        assert_eq!(render(&matches).unwrap(), table.to_string());
    }
}

#[test]
fn render_json_branch() {
    let table = options("fp").unwrap();
    let matches = cmdparser::parse(&["fp", "--json", "-v", "in"], &table).unwrap();

    let out = render(&matches).unwrap();
    assert!(out.ends_with("}\n"));

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["verbose"], true);
    assert_eq!(value["positionals"], serde_json::json!(["in"]));
}

#[test]
fn render_text_branch() {
    let table = options("fp").unwrap();
    let matches = cmdparser::parse(&["fp", "x"], &table).unwrap();
    assert_eq!(
        render(&matches).unwrap(),
        "Verbose mode: OFF\nOutput file: test.c\nPositional arguments:\n  1: x\n"
    );
}

#[test]
fn utf8_args() {
    let args = vec![OsString::from("fp"), OsString::from("-v")];
    assert_eq!(collect_args(args).unwrap(), vec!["fp", "-v"]);
}

#[cfg(unix)]
#[test]
fn non_utf8_args() {
    use std::os::unix::ffi::OsStringExt as _;

    let args = vec![
        OsString::from("fp"),
        OsString::from("-v"),
        OsString::from_vec(vec![b'a', 0xff]),
    ];
    let err = collect_args(args).unwrap_err();
    assert!(err.to_string().starts_with("argument is not valid UTF-8"));
}
