//! Basic rendering tests for template engine

use super::helpers::simple_vars;
use super::*;

#[test]
fn test_render_simple_placeholder() {
    let vars = simple_vars();
    let template = "dbname: {{DB_NAME}}";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "dbname: guacamole");
}

#[test]
fn test_render_placeholder_with_spaces() {
    let vars = simple_vars();
    let template = "dbname: {{ DB_NAME }}";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "dbname: guacamole");
}

#[test]
fn test_render_placeholder_with_many_spaces() {
    let vars = simple_vars();
    let template = "dbname: {{  DB_NAME  }}";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "dbname: guacamole");
}

#[test]
fn test_render_multiple_placeholders() {
    let vars = simple_vars();
    let template = "psql -h {{DB_HOST}} -p {{DB_PORT}} -d {{DB_NAME}}";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "psql -h db.example.com -p 5432 -d guacamole");
}

#[test]
fn test_render_repeated_placeholder() {
    let vars = simple_vars();
    let template = "{{DB_NAME}} and {{DB_NAME}} again";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "guacamole and guacamole again");
}

#[test]
fn test_render_no_placeholders() {
    let vars = simple_vars();
    let template = "This is plain text with no placeholders.";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "This is plain text with no placeholders.");
}

#[test]
fn test_render_unmapped_placeholder_is_empty() {
    let vars = simple_vars();
    let template = "host: [{{NOT_MAPPED}}]";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "host: []");
}

#[test]
fn test_render_empty_string_value() {
    let vars = simple_vars();
    let template = "empty: [{{EMPTY}}]";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "empty: []");
}

#[test]
fn test_render_empty_template() {
    let vars = simple_vars();
    let result = render("", &vars).unwrap();
    assert_eq!(result, "");
}

#[test]
fn test_render_placeholder_at_start_and_end() {
    let vars = simple_vars();
    let template = "{{DB_HOST}}:{{DB_PORT}}";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "db.example.com:5432");
}

#[test]
fn test_render_single_braces_are_literal() {
    let vars = simple_vars();
    let template = "a { b } c }} d";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "a { b } c }} d");
}

#[test]
fn test_render_multiline_template() {
    let vars = simple_vars();
    let template = "host: {{DB_HOST}}\nport: {{DB_PORT}}\n";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "host: db.example.com\nport: 5432\n");
}

#[test]
fn test_render_value_with_braces_is_not_rescanned() {
    let mut vars = VarMap::new();
    vars.set("OUTER", "{{INNER}}");
    vars.set("INNER", "nope");
    let result = render("{{OUTER}}", &vars).unwrap();
    assert_eq!(result, "{{INNER}}");
}

#[test]
fn test_render_is_deterministic() {
    let vars = simple_vars();
    let template = "-h {{DB_HOST}} -p {{DB_PORT}} -d {{DB_NAME}} [{{UNSET}}]";
    let first = render(template, &vars).unwrap();
    let second = render(template, &vars).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_underscore_leading_name() {
    let mut vars = VarMap::new();
    vars.set("_PRIVATE", "1");
    let result = render("{{_PRIVATE}}", &vars).unwrap();
    assert_eq!(result, "1");
}

#[test]
fn test_render_lowercase_name() {
    let mut vars = VarMap::new();
    vars.set("db_name", "lower");
    let result = render("{{db_name}}", &vars).unwrap();
    assert_eq!(result, "lower");
}

#[test]
fn test_render_multibyte_text_around_placeholder() {
    let vars = simple_vars();
    let template = "データベース: {{DB_NAME}} 接続";
    let result = render(template, &vars).unwrap();
    assert_eq!(result, "データベース: guacamole 接続");
}
