use anyhow::{Context, Result};
use serde_json::Value;

use crate::CliTest;

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.command();
    cmd.arg("init");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(0));
    assert!(result.stdout.contains("Created .starlintrc.json"));
    assert!(test.root().join(".starlintrc.json").exists());

    let content = test.read_file(".starlintrc.json")?;
    let parsed: Value = serde_json::from_str(&content).context("Config should be valid JSON")?;

    assert_eq!(parsed["sourceRoot"], "./");
    assert_eq!(parsed["ignores"][0], "**/node_modules/**");
    assert_eq!(parsed["noLineComments"]["fixable"], false);
    assert_eq!(parsed["noLineComments"]["singleLineToSingleLineBlock"], false);
    assert!(parsed["noLineComments"]["ignore"]["startsWith"].is_array());

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_config("{}")?;

    let mut cmd = test.command();
    cmd.arg("init");
    let result = test.run(cmd)?;

    assert_eq!(result.code, Some(1));
    assert!(result.stderr.contains(".starlintrc.json already exists"));
    assert_eq!(test.read_file(".starlintrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_immediately_usable() -> Result<()> {
    let test = CliTest::new()?;

    let mut init = test.command();
    init.arg("init");
    test.run(init)?;

    test.write_file("src/app.ts", "/**\n * App entry.\n */\nexport const app = 1;\n")?;

    let result = test.run(test.check_command())?;
    assert_eq!(
        result.code,
        Some(0),
        "Check command should work with initialized config. stderr: {}",
        result.stderr
    );

    Ok(())
}
