use anyhow::Result;
use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{CliTest, RunOutput, ts_context, ts_document};

fn setup_dialog(test: &CliTest, reference: &str, target: &str) -> Result<()> {
    test.write_file(
        "reference.ts",
        &ts_document(&ts_context("Dialog", &[("OK", reference)])),
    )?;
    test.write_file(
        "target.ts",
        &ts_document(&ts_context("Dialog", &[("OK", target)])),
    )
}

#[test]
fn test_merge_exact_match() -> Result<()> {
    let test = CliTest::new()?;
    setup_dialog(&test, "OK-fixed", "OK-old")?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "reference.ts",
        "--target",
        "target.ts",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_snapshot!(output.stdout, @r"
    Indexing reference.ts...
    Index built. Exact keys: 1, Relaxed keys: 1
    Processing target.ts...
    Stats: Exact Matches: 1, Relaxed Matches: 0, Unmatched: 0
    Writing updated content to target.ts...
    ✓ Done.
    ");
    assert_eq!(
        test.read_file("target.ts")?,
        ts_document(&ts_context("Dialog", &[("OK", "OK-fixed")]))
    );

    Ok(())
}

#[test]
fn test_merge_relaxed_match_reports_line() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "reference.ts",
        &ts_document(&ts_context("Dialog", &[("Hello World", "你好世界")])),
    )?;
    let target = ts_document(&ts_context(
        "Dialog",
        &[("Cancel", "取消"), ("Hello\n    World", "")],
    ));
    test.write_file("target.ts", &target)?;

    let output = RunOutput::from_command(test.merge_command().args([
        "-s",
        "reference.ts",
        "-t",
        "target.ts",
    ]))?;

    assert_eq!(output.code, Some(0));
    // Second message: the translation sits on line 13.
    assert!(
        output
            .stdout
            .contains("Relaxed match at line 13: Context='Dialog'\n"),
        "unexpected output:\n{}",
        output.stdout
    );
    assert!(
        output
            .stdout
            .contains("Stats: Exact Matches: 0, Relaxed Matches: 1, Unmatched: 1\n")
    );
    assert_eq!(
        test.read_file("target.ts")?,
        ts_document(&ts_context(
            "Dialog",
            &[("Cancel", "取消"), ("Hello\n    World", "你好世界")],
        ))
    );

    Ok(())
}

#[test]
fn test_merge_unknown_context_is_unmatched() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "reference.ts",
        &ts_document(&ts_context("Dialog", &[("OK", "确定")])),
    )?;
    let target = ts_document(&ts_context("Toolbar", &[("OK", "旧")]));
    test.write_file("target.ts", &target)?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "reference.ts",
        "--target",
        "target.ts",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert!(
        output
            .stdout
            .contains("Stats: Exact Matches: 0, Relaxed Matches: 0, Unmatched: 1\n")
    );
    assert_eq!(test.read_file("target.ts")?, target);

    Ok(())
}

#[test]
fn test_merge_dry_run_leaves_target() -> Result<()> {
    let test = CliTest::new()?;
    setup_dialog(&test, "OK-fixed", "OK-old")?;
    let before = test.read_file("target.ts")?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "reference.ts",
        "--target",
        "target.ts",
        "--dry-run",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("Would replace 1 translation in target.ts\n"));
    assert!(!output.stdout.contains("Writing updated content"));
    assert_eq!(test.read_file("target.ts")?, before);

    Ok(())
}

#[test]
fn test_merge_multiple_targets() -> Result<()> {
    let test = CliTest::new()?;
    setup_dialog(&test, "OK-fixed", "OK-old")?;
    test.write_file(
        "second.ts",
        &ts_document(&ts_context("Dialog", &[("OK", "OK-older")])),
    )?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "reference.ts",
        "--target",
        "target.ts",
        "--target",
        "second.ts",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains(
        "Total: Exact Matches: 2, Relaxed Matches: 0, Unmatched: 0 across 2 files\n"
    ));
    let expected = ts_document(&ts_context("Dialog", &[("OK", "OK-fixed")]));
    assert_eq!(test.read_file("target.ts")?, expected);
    assert_eq!(test.read_file("second.ts")?, expected);

    Ok(())
}

#[test]
fn test_merge_uses_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".tsmergerc.json",
        r#"{
            "source": "i18n/reference.ts",
            "targets": ["i18n/target.ts"]
        }"#,
    )?;
    test.write_file(
        "i18n/reference.ts",
        &ts_document(&ts_context("Dialog", &[("OK", "OK-fixed")])),
    )?;
    test.write_file(
        "i18n/target.ts",
        &ts_document(&ts_context("Dialog", &[("OK", "OK-old")])),
    )?;

    let output = RunOutput::from_command(&mut test.merge_command())?;

    assert_eq!(output.code, Some(0), "stderr:\n{}", output.stderr);
    assert_eq!(
        test.read_file("i18n/target.ts")?,
        ts_document(&ts_context("Dialog", &[("OK", "OK-fixed")]))
    );

    Ok(())
}

#[test]
fn test_merge_source_from_env() -> Result<()> {
    let test = CliTest::new()?;
    setup_dialog(&test, "OK-fixed", "OK-old")?;

    let output = RunOutput::from_command(
        test.merge_command()
            .env("TSMERGE_SOURCE", "reference.ts")
            .args(["--target", "target.ts"]),
    )?;

    assert_eq!(output.code, Some(0), "stderr:\n{}", output.stderr);
    assert_eq!(
        test.read_file("target.ts")?,
        ts_document(&ts_context("Dialog", &[("OK", "OK-fixed")]))
    );

    Ok(())
}

#[test]
fn test_merge_missing_source_file() -> Result<()> {
    let test = CliTest::new()?;
    setup_dialog(&test, "OK-fixed", "OK-old")?;
    let before = test.read_file("target.ts")?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "missing.ts",
        "--target",
        "target.ts",
    ]))?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .starts_with("Error: Failed to read file: missing.ts")
    );
    assert_eq!(test.read_file("target.ts")?, before);

    Ok(())
}

#[test]
fn test_merge_missing_target_aborts_before_writing() -> Result<()> {
    let test = CliTest::new()?;
    setup_dialog(&test, "OK-fixed", "OK-old")?;
    let before = test.read_file("target.ts")?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "reference.ts",
        "--target",
        "target.ts",
        "--target",
        "missing.ts",
    ]))?;

    assert_eq!(output.code, Some(2));
    assert!(
        output
            .stderr
            .starts_with("Error: Failed to read file: missing.ts")
    );
    assert!(output.stdout.is_empty());
    assert_eq!(test.read_file("target.ts")?, before);

    Ok(())
}

#[test]
fn test_merge_without_paths_is_error() -> Result<()> {
    let test = CliTest::new()?;

    let output = RunOutput::from_command(&mut test.merge_command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.starts_with("Error: No source file given."));

    Ok(())
}

#[test]
fn test_merge_preserves_untouched_bytes() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "reference.ts",
        &ts_document(&ts_context("Dialog", &[("OK", "确定")])),
    )?;
    let target = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n\
        <!DOCTYPE TS>\r\n\
        <TS version=\"2.1\">\r\n\
        <!-- <context><name>Dialog</name></context> -->\r\n\
        <context>\r\n\
        \t<name>Dialog</name>\r\n\
        \t<message>\r\n\
        \t\t<location filename=\"dialog.cpp\" line=\"3\"/>\r\n\
        \t\t<source>OK</source>\r\n\
        \t\t<translation type=\"unfinished\">旧</translation>\r\n\
        \t</message>\r\n\
        </context>\r\n\
        </TS>";
    test.write_file("target.ts", target)?;

    let output = RunOutput::from_command(test.merge_command().args([
        "--source",
        "reference.ts",
        "--target",
        "target.ts",
    ]))?;

    assert_eq!(output.code, Some(0));
    assert_eq!(
        test.read_file("target.ts")?,
        target.replace(">旧<", ">确定<")
    );

    Ok(())
}
