// tests/integration_tests/report_test.rs
use super::common::{create_test_file, setup_test_directory};
use anyhow::Result;
use linetally::{DEFAULT_TOP, NO_FILES_MESSAGE, build_report, scan_directory};
use tempfile::TempDir;

#[test]
fn test_top_five_of_seven_unknown_extensions() -> Result<()> {
    let temp_dir = TempDir::new()?;
    for ext in ["aa", "bb", "cc2", "dd", "ee", "ff", "gg"] {
        create_test_file(temp_dir.path(), &format!("file.{ext}"), "one line\n")?;
    }

    let result = scan_directory(temp_dir.path())?;
    assert_eq!(result.len(), 7);

    let report = build_report(&result, false);
    assert_eq!(report.rows.len(), DEFAULT_TOP);
    assert_eq!(report.total_lines, 7);

    let rendered = report.render();
    assert_eq!(rendered.lines().count(), 2 + DEFAULT_TOP + 2);
    assert!(rendered.ends_with("| Total        |     7 |  100.0% |\n"));
    assert!(rendered.contains("| .aa          |     1 |   14.3% |"));

    let all = build_report(&result, true);
    assert_eq!(all.rows.len(), 7);

    Ok(())
}

#[test]
fn test_total_matches_sum_of_categories() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let result = scan_directory(temp_dir.path())?;
    let report = build_report(&result, true);

    let sum: u64 = report.rows.iter().map(|r| r.lines).sum();
    assert_eq!(sum, report.total_lines);
    assert_eq!(report.total_lines, result.total_lines());

    let percent_sum: f64 = report.rows.iter().map(|r| r.percent).sum();
    assert!((percent_sum - 100.0).abs() < 1e-9);

    Ok(())
}

#[test]
fn test_render_scanned_project() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    let result = scan_directory(temp_dir.path())?;
    let rendered = build_report(&result, false).render();

    let expected = "\
| FileType     | Lines | Percent |
| ------------ | ----- | ------- |
| TypeScript   |     6 |   46.2% |
| Markdown     |     3 |   23.1% |
| JavaScript   |     2 |   15.4% |
| Makefile     |     2 |   15.4% |
| ============ | ===== | ======= |
| Total        |    13 |  100.0% |
";
    assert_eq!(rendered, expected);

    Ok(())
}

#[test]
fn test_empty_directory_reports_no_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let result = scan_directory(temp_dir.path())?;

    let report = build_report(&result, false);
    assert!(report.is_empty());
    assert_eq!(report.render().trim_end(), NO_FILES_MESSAGE);

    Ok(())
}
