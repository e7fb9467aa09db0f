//! End-to-end flow as a formatter drives it
//!
//! Deserialize user settings -> resolve -> decide on diagnostics -> print text
//! with the resolved indentation and newline policy.

use pretty_assertions::assert_eq;
use printfmt_config::{
    Configuration, ConfigurationResolver, HostNewline, RawConfiguration, ResolvedConfiguration,
};

/// Minimal printer: re-indents each line by its leading tab count and joins
/// lines with the configured newline.
fn print(text: &str, config: &ResolvedConfiguration) -> String {
    let newline = config.newline_for(text);
    let indent = config.indent_text();

    text.lines()
        .map(|line| {
            let depth = line.chars().take_while(|c| *c == '\t').count();
            format!("{}{}", indent.repeat(depth), line.trim_start_matches('\t'))
        })
        .collect::<Vec<_>>()
        .join(newline)
}

#[test]
fn test_settings_file_to_printed_output() {
    let raw: RawConfiguration = toml::from_str(
        r#"
indentWidth = 2
newlineKind = "crlf"
projectType = "openSource"
plugins = ["https://plugins.example/typescript.wasm"]
"#,
    )
    .unwrap();

    let result = ConfigurationResolver::with_host_newline(HostNewline::Lf).resolve(&raw);
    let config = result.into_result().unwrap();

    assert_eq!(print("fn\n\tbody\n\t\tnested", &config), "fn\r\n  body\r\n    nested");
}

#[test]
fn test_diagnostics_do_not_block_printing() {
    let raw = RawConfiguration::try_from(serde_json::json!({
        "useTabs": "always",
        "indentSize": 8
    }))
    .unwrap();

    let result = ConfigurationResolver::with_host_newline(HostNewline::Lf).resolve(&raw);

    assert_eq!(result.diagnostics.len(), 2);
    // The caller chose to carry on with the fallback configuration.
    assert_eq!(print("a\r\n\tb", &result.config), "a\r\n    b");
}

#[test]
fn test_strict_caller_rejects_unknown_properties() {
    let raw = RawConfiguration::try_from(serde_json::json!({ "indentSize": 8 })).unwrap();

    let err = ConfigurationResolver::new()
        .resolve(&raw)
        .into_result()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Configuration has 1 problem(s): indentSize: Unexpected property in configuration: indentSize"
    );
}

#[test]
fn test_typed_configuration_round_trip() {
    let typed = Configuration {
        line_width: Some(60.into()),
        use_tabs: Some(true),
        newline_kind: Some("system".to_string()),
        project_type: Some("commercial".to_string()),
        ..Default::default()
    };

    let result =
        ConfigurationResolver::with_host_newline(HostNewline::Crlf).resolve(&typed.into());
    assert!(result.is_clean());
    assert_eq!(print("x\n\ty", &result.config), "x\r\n\ty");

    let again = ConfigurationResolver::with_host_newline(HostNewline::Lf)
        .resolve(&RawConfiguration::from(&result.config));
    assert!(again.is_clean());
    assert_eq!(again.config, result.config);
}
