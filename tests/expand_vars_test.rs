//! Tests for shell expansion of the configured program path

use rscamelot::domain::expand_env_vars;

#[test]
fn given_program_with_dollar_var_when_expanding_then_substitutes() {
    // Arrange
    std::env::set_var("RSCAMELOT_TEST_VENV", "/opt/venvs/camelot");

    // Act
    let result = expand_env_vars("$RSCAMELOT_TEST_VENV/bin/camelot");

    // Assert
    assert_eq!(result, "/opt/venvs/camelot/bin/camelot");

    // Cleanup
    std::env::remove_var("RSCAMELOT_TEST_VENV");
}

#[test]
fn given_program_with_braced_var_when_expanding_then_substitutes() {
    std::env::set_var("RSCAMELOT_TEST_PREFIX", "/usr/local");

    let result = expand_env_vars("${RSCAMELOT_TEST_PREFIX}/bin/camelot");

    assert_eq!(result, "/usr/local/bin/camelot");
    std::env::remove_var("RSCAMELOT_TEST_PREFIX");
}

#[test]
fn given_undefined_var_when_expanding_then_returns_input_unchanged() {
    let result = expand_env_vars("$RSCAMELOT_TEST_UNDEFINED_XYZ/camelot");

    assert_eq!(result, "$RSCAMELOT_TEST_UNDEFINED_XYZ/camelot");
}

#[test]
fn given_bare_program_name_when_expanding_then_returns_unchanged() {
    assert_eq!(expand_env_vars("camelot"), "camelot");
}
