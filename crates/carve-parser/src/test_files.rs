//! Test file and directory detection for filtering during batch scans.
//!
//! Used by the walker in `carve-index` to skip test sources. Patterns follow
//! the JUnit/TestNG and Maven/Gradle layout conventions.

/// Directory names conventionally used for tests, fixtures and samples.
const TEST_DIRS: &[&str] = &[
    "test",
    "tests",
    "testFixtures",
    "integrationTest",
    "testdata",
    "test-data",
    "fixtures",
    "jmh",
    "benchmarks",
];

/// File-stem suffixes used by test classes.
const TEST_SUFFIXES: &[&str] = &["Test", "Tests", "IT", "ITCase", "TestCase"];

/// Returns `true` if `dir_name` matches a known test directory convention.
///
/// Comparison is case-sensitive.
///
/// # Examples
///
/// ```
/// use carve_parser::is_test_dir;
/// assert!(is_test_dir("test"));
/// assert!(is_test_dir("testFixtures"));
/// assert!(!is_test_dir("main"));
/// ```
#[must_use]
pub fn is_test_dir(dir_name: &str) -> bool {
    TEST_DIRS.contains(&dir_name)
}

/// Returns `true` if `file_name` names a test class.
///
/// Matches `*Test`, `*Tests`, `*IT`, `*ITCase` and `*TestCase` stems, plus
/// the older `TestFoo` prefix form. The stem must have something before the
/// suffix, so a class literally named `Test` is not a test file.
///
/// # Examples
///
/// ```
/// use carve_parser::is_test_file;
/// assert!(is_test_file("ParserTest.java"));
/// assert!(is_test_file("TestParser.java"));
/// assert!(!is_test_file("Parser.java"));
/// ```
#[must_use]
pub fn is_test_file(file_name: &str) -> bool {
    let stem = file_name
        .rsplit_once('.')
        .map_or(file_name, |(stem, _)| stem);
    if stem.is_empty() {
        return false;
    }

    let suffixed = TEST_SUFFIXES
        .iter()
        .any(|suffix| stem.len() > suffix.len() && stem.ends_with(suffix));
    let prefixed = stem
        .strip_prefix("Test")
        .and_then(|rest| rest.chars().next())
        .is_some_and(char::is_uppercase);

    suffixed || prefixed
}
