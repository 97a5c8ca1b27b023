//! Integration tests for logpreset
//!
//! Each case resolves a configurator, points the resulting logger at a
//! temporary file, emits two records and inspects what was written.

use logpreset::{Config, Configurator, Environment, Error, Format, Level, Preset, TimeEncoding};
use pretty_assertions::assert_eq;
use rstest::rstest;

// Keep at the top of the file: assertions below check its line numbers.
fn log_foobar() {
    tracing::debug!(foo = "bar", "hello world!");
    tracing::info!(target: "foobar", baz = 42, "hello world!");
}

const DEBUG_LINE: u32 = 12;
const INFO_LINE: u32 = 13;

/// Resolve `configurator`, then run [`log_foobar`] through a logger built
/// from the resolved config with its outputs redirected to a temp file.
fn capture(configurator: &Configurator, env: Environment) -> (logpreset::Result<Config>, Vec<String>) {
    let resolved = match configurator.resolve(env) {
        Ok(config) => config,
        Err(err) => return (Err(err), Vec::new()),
    };

    let file = tempfile::NamedTempFile::new().expect("tempfile");
    let path = file.path().display().to_string();
    let redirected = Config {
        output_paths: vec![path.clone()],
        error_output_paths: vec![path],
        ..resolved.clone()
    };

    let logger = redirected.build().expect("build");
    logger.in_scope(log_foobar);

    let contents = std::fs::read_to_string(file.path()).expect("read");
    assert!(contents.is_empty() || contents.ends_with('\n'));
    let lines = contents.lines().map(String::from).collect();
    (Ok(resolved), lines)
}

const CALLER: &str = "tests/integration_tests.rs";

fn starts_with_timestamp(line: &str) -> bool {
    let bytes = line.as_bytes();
    bytes.len() > 19
        && bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[10] == b'T'
}

/// Both records as the default development profile renders them, after
/// the timestamp.
fn assert_text_records(lines: &[String]) {
    assert_eq!(lines.len(), 2, "{lines:#?}");

    let debug = format!(
        "\t\x1b[35mDEBUG\x1b[0m\t{CALLER}:{DEBUG_LINE}\thello world!\t{{\"foo\": \"bar\"}}"
    );
    let info = format!(
        "\t\x1b[34mINFO\x1b[0m\tfoobar\t{CALLER}:{INFO_LINE}\thello world!\t{{\"baz\": 42}}"
    );
    assert!(lines[0].ends_with(&debug), "{:?}", lines[0]);
    assert!(lines[1].ends_with(&info), "{:?}", lines[1]);
}

/// Both records under `light-console`: padded levels and logger names,
/// no timestamp.
fn light_console_records() -> Vec<String> {
    vec![
        format!("\x1b[35mDEBUG\x1b[0m\t{CALLER}:{DEBUG_LINE}\thello world!\t{{\"foo\": \"bar\"}}"),
        format!(
            "\x1b[34mINFO \x1b[0m\tfoobar            \t{CALLER}:{INFO_LINE}\thello world!\t{{\"baz\": 42}}"
        ),
    ]
}

fn parse_json(lines: &[String]) -> Vec<serde_json::Value> {
    lines
        .iter()
        .map(|line| serde_json::from_str(line).expect("json record"))
        .collect()
}

#[test]
fn default_configurator() {
    let mut configurator = Configurator::new();
    assert!(configurator.is_empty());
    assert_eq!(configurator.to_string(), "{}");

    let config = configurator.resolve(Environment::Unspecified).expect("resolve");
    assert!(configurator.is_empty());
    assert_eq!(config, Config::default());

    let file = tempfile::NamedTempFile::new().expect("tempfile");
    configurator.set_output_path(file.path().display().to_string());
    assert!(!configurator.is_empty());

    let config = configurator.resolve(Environment::Unspecified).expect("resolve");
    assert!(!configurator.is_empty());

    let logger = config.build().expect("build");
    logger.in_scope(|| tracing::info!("Hello World!"));

    let contents = std::fs::read_to_string(file.path()).expect("read");
    assert!(contents.contains("integration_tests.rs:"), "{contents}");
    assert!(contents.contains("Hello World!"), "{contents}");
}

#[test]
fn default_output() {
    let (config, lines) = capture(&Configurator::new(), Environment::Unspecified);
    let config = config.expect("resolve");

    assert_eq!(config.output_paths, vec!["stderr"]);
    assert_eq!(config.error_output_paths, vec!["stderr"]);
    assert!(config.disable_stacktrace);
    assert_eq!(config.level, Level::Debug);
    assert_eq!(config.encoding.format, Format::Text);

    assert_text_records(&lines);
    assert!(starts_with_timestamp(&lines[0]), "{:?}", lines[0]);
}

#[rstest]
#[case::debug(Level::Debug, 2)]
#[case::info(Level::Info, 1)]
#[case::warn(Level::Warn, 0)]
#[case::error(Level::Error, 0)]
fn level_threshold(#[case] level: Level, #[case] expected: usize) {
    let mut configurator = Configurator::new();
    configurator.set_level(level);

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    assert_eq!(config.expect("resolve").level, level);
    assert_eq!(lines.len(), expected, "{lines:#?}");
    if expected == 1 {
        assert!(lines[0].contains("INFO"), "{:?}", lines[0]);
    }
}

#[rstest]
#[case("stdout")]
#[case("stderr")]
fn single_output_path(#[case] dest: &str) {
    let mut configurator = Configurator::new();
    configurator.set_output_path(dest);

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    let config = config.expect("resolve");
    assert_eq!(config.output_paths, vec![dest]);
    assert_eq!(config.error_output_paths, vec![dest]);
    assert_text_records(&lines);
}

#[test]
fn builds_on_standard_streams() {
    let mut configurator = Configurator::new();
    configurator.set_output_path("stdout").enable_stacktrace();
    let config = Config {
        error_output_paths: vec!["stderr".to_owned()],
        ..configurator.resolve(Environment::Unspecified).expect("resolve")
    };

    let logger = config.build().expect("build");
    assert_eq!(logger.config().output_paths, vec!["stdout"]);
    assert_eq!(logger.config().error_output_paths, vec!["stderr"]);
    logger.in_scope(log_foobar);
}

#[test]
fn multiple_output_paths_receive_every_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let a = dir.path().join("a.log").display().to_string();
    let b = dir.path().join("b.log").display().to_string();

    let mut configurator = Configurator::new();
    configurator.set_output_paths([a.clone(), b.clone()]).set_preset("light-json");

    let logger = configurator
        .resolve(Environment::Unspecified)
        .and_then(|config| config.build())
        .expect("build");
    logger.in_scope(log_foobar);

    let a = std::fs::read_to_string(a).expect("read");
    let b = std::fs::read_to_string(b).expect("read");
    assert_eq!(a.lines().count(), 2);
    assert_eq!(a, b);
}

#[test]
fn enable_stacktrace() {
    let mut configurator = Configurator::new();
    configurator.enable_stacktrace();

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    assert!(!config.expect("resolve").disable_stacktrace);
    assert_text_records(&lines);
}

#[rstest]
#[case::unset(Environment::classify(None), false)]
#[case::empty(Environment::classify(Some("")), false)]
#[case::production(Environment::classify(Some("production")), false)]
#[case::prod(Environment::classify(Some("prod")), false)]
#[case::development(Environment::classify(Some("development")), true)]
#[case::dev(Environment::classify(Some("dev")), true)]
fn environment_signal(#[case] env: Environment, #[case] development: bool) {
    let (config, lines) = capture(&Configurator::new(), env);
    assert_eq!(config.expect("resolve").development, development);
    assert_text_records(&lines);
}

#[test]
fn invalid_preset() {
    let mut configurator = Configurator::new();
    configurator.set_preset("INVALID");

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    let err = config.expect_err("must fail");
    assert_eq!(err.to_string(), r#"unknown preset: "INVALID""#);
    assert!(matches!(err, Error::Config(_)));
    assert!(lines.is_empty());

    assert!(configurator.build().is_err());
}

#[test]
fn light_console_preset() {
    let mut configurator = Configurator::new();
    configurator.set_preset("light-console");

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    assert_eq!(config.expect("resolve").encoding.time, TimeEncoding::Omitted);
    assert_eq!(lines, light_console_records());
}

#[test]
fn console_preset() {
    let mut configurator = Configurator::new();
    configurator.set_preset("console");

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    assert_eq!(config.expect("resolve").encoding, Preset::Console.profile());
    assert_eq!(lines.len(), 2, "{lines:#?}");

    for (line, expected) in lines.iter().zip(light_console_records()) {
        let (timestamp, rest) = line.split_once('\t').expect("timestamp column");
        assert!(starts_with_timestamp(timestamp), "{line:?}");
        assert!(timestamp.ends_with('Z'), "{timestamp}");
        assert_eq!(rest, expected);
    }
}

#[test]
fn light_json_preset() {
    let mut configurator = Configurator::new();
    configurator.set_preset("light-json");

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    let config = config.expect("resolve");
    assert_eq!(config.encoding.format, Format::Json);
    assert_eq!(config.encoding.time, TimeEncoding::Omitted);

    assert_eq!(
        lines,
        vec![
            format!(
                r#"{{"level":"debug","caller":"{CALLER}:{DEBUG_LINE}","msg":"hello world!","foo":"bar"}}"#
            ),
            format!(
                r#"{{"level":"info","logger":"foobar","caller":"{CALLER}:{INFO_LINE}","msg":"hello world!","baz":42}}"#
            ),
        ]
    );
}

#[test]
fn json_preset() {
    let mut configurator = Configurator::new();
    configurator.set_preset("json");

    let (config, lines) = capture(&configurator, Environment::Unspecified);
    assert_eq!(config.expect("resolve").encoding, Preset::Json.profile());

    assert!(lines[0].starts_with(r#"{"level":"debug","ts":"#), "{}", lines[0]);
    assert!(
        lines[0].ends_with(&format!(
            r#","caller":"{CALLER}:{DEBUG_LINE}","msg":"hello world!","foo":"bar"}}"#
        )),
        "{}",
        lines[0]
    );
    assert!(
        lines[1].ends_with(&format!(
            r#","logger":"foobar","caller":"{CALLER}:{INFO_LINE}","msg":"hello world!","baz":42}}"#
        )),
        "{}",
        lines[1]
    );

    let records = parse_json(&lines);
    assert_eq!(records.len(), 2);
    for record in &records {
        assert!(record["ts"].is_string(), "{record}");
    }
    assert!(records[0].get("logger").is_none());
    assert_eq!(records[1]["logger"], "foobar");
}

#[test]
fn repeated_resolution_is_stable() {
    let mut configurator = Configurator::new();
    configurator
        .set_output_paths(["stderr", "stdout"])
        .set_level(Level::Info)
        .enable_stacktrace()
        .set_preset("console");

    let first = configurator.resolve(Environment::Development).expect("resolve");
    let second = configurator.resolve(Environment::Development).expect("resolve");
    assert_eq!(first, second);
}

#[test]
fn config_round_trips_through_json() -> anyhow::Result<()> {
    let mut configurator = Configurator::new();
    configurator.set_preset("light-console").set_level(Level::Warn);
    let config = configurator.resolve(Environment::Production)?;

    let json = serde_json::to_string(&config)?;
    let back: Config = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    Ok(())
}

#[test]
fn unwritable_destination_fails_build() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut configurator = Configurator::new();
    configurator.set_output_path(dir.path().join("missing/app.log").display().to_string());

    let err = configurator
        .resolve(Environment::Unspecified)
        .and_then(|config| config.build())
        .expect_err("must fail");
    assert!(matches!(err, Error::Sink { .. }), "{err:?}");
}

#[test]
#[should_panic(expected = "unknown preset")]
fn must_build_is_fatal() {
    let mut configurator = Configurator::new();
    configurator.set_preset("INVALID");
    let _ = configurator.must_build();
}
