use anyhow::Result;

use crate::CliTest;

#[test]
fn test_clean_file() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"/**
 * Adds two numbers.
 */
export function add(a: number, b: number) {
    /* inline note */
    return a + b; // trailing comments are fine
}
"#,
    )?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(0));
    assert!(
        result
            .stdout
            .contains("Checked 1 source file - no issues found")
    );

    Ok(())
}

#[test]
fn test_line_comment_group() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"// Adds two numbers.
// Returns the sum.
export function add(a: number, b: number) {
    return a + b;
}
"#,
    )?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains(
        "warning: Expected a starred block comment instead of multiple-line comments  [no-line-comments]"
    ));
    assert!(result.stdout.contains("--> ./src/app.ts:1:1"));
    assert!(result.stdout.contains("1 | // Adds two numbers."));
    assert!(result.stdout.contains("= note: no-line-multiple"));
    assert!(result.stdout.contains("1 problems (0 errors, 1 warning)"));
    // Not fixable by default, so no hint.
    assert!(!result.stdout.contains("hint:"));

    Ok(())
}

#[test]
fn test_each_violation_reported() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"// single

/*no spacing*/

/**
 * missing star
 on this line
 */

/**
 * closing delimiter
*/
"#,
    )?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    for note in ["no-line", "invalid-spacing", "missing-star", "invalid-offset"] {
        assert!(
            result.stdout.contains(&format!("= note: {}\n", note)),
            "missing {note} in:\n{}",
            result.stdout
        );
    }
    assert!(result.stdout.contains("4 problems (0 errors, 4 warnings)"));

    Ok(())
}

#[test]
fn test_directives_not_reported() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"/// <reference path="./globals.d.ts" />
// eslint-disable-next-line no-console
console.log("hi");
// istanbul ignore next
export const x = 1;
"#,
    )?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(0), "stdout:\n{}", result.stdout);

    Ok(())
}

#[test]
fn test_config_ignore_patterns() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.ts",
        r#"// region Helpers
export const a = 1;
// @ts-expect-error legacy
export const b: number = "x";
"#,
    )?;
    test.write_config(
        r#"{
    "noLineComments": {
        "ignore": { "startsWith": ["region"], "includes": ["@ts-"] }
    }
}"#,
    )?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(0), "stdout:\n{}", result.stdout);

    Ok(())
}

#[test]
fn test_jsx_and_module_extensions() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "src/Button.tsx",
        r#"export function Button() {
    // JSX expression containers are not own-line comments here
    return <button>{/* label */}</button>;
}
"#,
    )?;
    test.write_file("src/util.mjs", "// util\nexport default 1;\n")?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("./src/Button.tsx:2:5"));
    assert!(result.stdout.contains("./src/util.mjs:1:1"));
    assert!(result.stdout.contains("2 problems"));

    Ok(())
}

#[test]
fn test_parse_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("src/broken.ts", "const = ;\n")?;
    test.write_file("src/ok.ts", "/* ok */\n")?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stdout.contains("[parse-error]"));
    assert!(result.stdout.contains("--> ./src/broken.ts"));
    assert!(result.stderr.contains("1 file(s) could not be parsed"));

    Ok(())
}

#[test]
fn test_node_modules_ignored_by_default() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("node_modules/lib/index.js", "// vendored\n")?;
    test.write_file("src/app.ts", "export const a = 1;\n")?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(0));

    Ok(())
}

#[test]
fn test_source_root_option() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("web/app.ts", "// web\nexport const a = 1;\n")?;
    test.write_file("other/app.ts", "// other\nexport const a = 1;\n")?;

    let mut cmd = test.check_command();
    cmd.args(["--source-root", "web"]);
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("web/app.ts:1:1"));
    assert!(!result.stdout.contains("other/app.ts"));

    Ok(())
}

#[test]
fn test_invalid_config() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "export const a = 1;\n")?;
    test.write_config(r#"{ "noLineComments": { "ignore": { "startsWith": ["x", "x"] } } }"#)?;

    let result = test.run(test.check_command())?;

    assert_eq!(result.code, Some(2));
    assert!(result.stderr.contains("Error:"));
    assert!(result.stderr.contains("Duplicate pattern"));

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("--help");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(0));
    for command in ["check", "fix", "init"] {
        assert!(result.stdout.contains(command));
    }

    Ok(())
}
