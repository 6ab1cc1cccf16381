use anyhow::Result;
use insta::assert_snapshot;

use crate::CliTest;

const FIXABLE_CONFIG: &str = r#"{ "noLineComments": { "fixable": true } }"#;

const SOURCE: &str = r#"// Adds two numbers.
// Returns the sum.
export function add(a: number, b: number) {
    // Plain addition:
    //   no overflow checks
    return a + b;
}
"#;

#[test]
fn test_fix_dry_run() -> Result<()> {
    let test = CliTest::with_file("src/math.ts", SOURCE)?;
    test.write_config(FIXABLE_CONFIG)?;

    let result = test.run(test.fix_command())?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("./src/math.ts:1:"));
    assert!(result.stdout.contains("  - // Adds two numbers."));
    assert!(result.stdout.contains("  + /**"));
    assert!(result.stdout.contains("  +  * Returns the sum."));
    assert!(
        result
            .stdout
            .contains("Would rewrite 2 comment(s) in 1 file(s).")
    );
    assert!(result.stdout.contains("Run with --apply"));

    // Dry run leaves the file alone.
    assert_eq!(test.read_file("src/math.ts")?, SOURCE);

    Ok(())
}

#[test]
fn test_fix_apply() -> Result<()> {
    let test = CliTest::with_file("src/math.ts", SOURCE)?;
    test.write_config(FIXABLE_CONFIG)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(0), "stdout:\n{}", result.stdout);
    assert!(result.stdout.contains("Rewrote 2 comment(s) in 1 file(s)."));

    assert_snapshot!(test.read_file("src/math.ts")?, @r"
/**
 * Adds two numbers.
 * Returns the sum.
 */
export function add(a: number, b: number) {
    /**
     * Plain addition:
     *  no overflow checks
     */
    return a + b;
}
");

    // The rewritten file is clean.
    let check = test.run(test.check_command())?;
    assert_eq!(check.code, Some(0), "stdout:\n{}", check.stdout);

    Ok(())
}

#[test]
fn test_fix_block_comments() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.js",
        r#"/**
 * first
 second
 */
function f() {
    /**
     * misaligned
    */
}
"#,
    )?;
    test.write_config(FIXABLE_CONFIG)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(0), "stdout:\n{}", result.stdout);
    assert_snapshot!(test.read_file("src/app.js")?, @r"
/**
 * first
 * second
 */
function f() {
    /**
     * misaligned
     */
}
");

    Ok(())
}

#[test]
fn test_fix_single_line_block_option() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "// note\nexport const a = 1;\n/*tight*/\n")?;
    test.write_config(
        r#"{ "noLineComments": { "fixable": true, "singleLineToSingleLineBlock": true } }"#,
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(0), "stdout:\n{}", result.stdout);
    assert_eq!(
        test.read_file("src/app.ts")?,
        "/* note */\nexport const a = 1;\n/* tight */\n"
    );

    Ok(())
}

#[test]
fn test_fix_disabled_by_default() -> Result<()> {
    let test = CliTest::with_file("src/math.ts", SOURCE)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("Note: fixes are disabled"));
    assert!(result.stdout.contains("[no-line-comments]"));
    assert_eq!(test.read_file("src/math.ts")?, SOURCE);

    Ok(())
}

#[test]
fn test_unfixable_comment_reported() -> Result<()> {
    let source = "// matches src/**/*.ts\nexport const a = 1;\n";
    let test = CliTest::with_file("src/app.ts", source)?;
    test.write_config(FIXABLE_CONFIG)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert!(result.stdout.contains("--> ./src/app.ts:1:1"));
    assert!(!result.stdout.contains("Rewrote"));
    assert_eq!(test.read_file("src/app.ts")?, source);

    Ok(())
}

#[test]
fn test_fix_nothing_to_do() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "/* fine */\nexport const a = 1;\n")?;
    test.write_config(FIXABLE_CONFIG)?;

    let result = test.run(test.fix_command())?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("no issues found"));

    Ok(())
}

#[test]
fn test_fix_file_with_byte_order_mark() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "\u{feff}// a\n// b\nexport const a = 1;\n")?;
    test.write_config(FIXABLE_CONFIG)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(0), "stdout:\n{}", result.stdout);
    assert_eq!(
        test.read_file("src/app.ts")?,
        "\u{feff}/**\n * a\n * b\n */\nexport const a = 1;\n"
    );

    Ok(())
}

#[test]
fn test_fix_double_space_line_comments() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "//  a\n//  b\nexport const a = 1;\n")?;
    test.write_config(FIXABLE_CONFIG)?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    test.run(cmd)?;

    assert_eq!(
        test.read_file("src/app.ts")?,
        "/**\n * a\n * b\n */\nexport const a = 1;\n"
    );

    Ok(())
}
