//! Checks-file loading against real files on disk.

use std::io::Write;

use tempfile::NamedTempFile;
use uicheck_cli::CheckError;
use uicheck_cli::checks::load_checks;

fn write_temp(contents: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().expect("create temp file");
	file.write_all(contents.as_bytes()).expect("write temp file");
	file
}

#[test]
fn loads_a_well_formed_checks_file() {
	let file = write_temp(
		r#"
elements:
  hero:
    locator: "h1.hero"
    expected_text: "Welcome back"
    description: "hero heading"
  footer:
    locator: "footer .copyright"
    expected_text: "© 2026 Example Corp"
"#,
	);

	let checks = load_checks(file.path()).unwrap();
	assert_eq!(checks.len(), 2);
	assert_eq!(checks[0].name, "hero");
	assert_eq!(checks[0].description, "hero heading");
	assert_eq!(checks[1].name, "footer");
	assert_eq!(checks[1].description, "footer");
	assert_eq!(checks[1].expected_text, "© 2026 Example Corp");
}

#[test]
fn missing_file_is_a_checks_file_error() {
	let err = load_checks(std::path::Path::new("/nonexistent/checks.yaml")).unwrap_err();
	match err {
		CheckError::ChecksFile { path, .. } => {
			assert_eq!(path, std::path::PathBuf::from("/nonexistent/checks.yaml"));
		}
		other => panic!("expected ChecksFile error, got {other:?}"),
	}
}

#[test]
fn file_without_elements_mapping_is_rejected() {
	let file = write_temp("targets:\n  hero:\n    locator: h1\n");
	let err = load_checks(file.path()).unwrap_err();
	assert!(matches!(err, CheckError::ChecksFile { .. }));
	assert!(err.to_string().contains("elements"), "unexpected: {err}");
}

#[test]
fn entry_without_locator_is_rejected_by_name() {
	let file = write_temp("elements:\n  hero:\n    expected_text: hi\n");
	let err = load_checks(file.path()).unwrap_err();
	assert!(err.to_string().contains("hero"), "unexpected: {err}");
}

#[test]
fn invalid_yaml_is_rejected() {
	let file = write_temp("elements: [not, a, mapping\n");
	assert!(load_checks(file.path()).is_err());
}
