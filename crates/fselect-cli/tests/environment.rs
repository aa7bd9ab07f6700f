//! Environment layer of the settings, kept in its own process so the
//! variables cannot leak into the unit tests

use feature_select::Algorithm;
use fselect_cli::output::OutputFormat;
use fselect_cli::settings::Settings;

#[test]
fn test_env_override() {
    std::env::set_var("FSELECT_SELECTOR__K", "5");
    std::env::set_var("FSELECT_SELECTOR__ALGORITHM", "disr");
    std::env::set_var("FSELECT_FORMAT", "json");

    let settings = Settings::load(None).unwrap();
    assert_eq!(settings.selector.k, 5);
    assert_eq!(settings.selector.algorithm, Algorithm::Disr);
    assert_eq!(settings.format, OutputFormat::Json);
    assert!(settings.selector.weighted);
}
