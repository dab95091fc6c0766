mod support;

use credit_guard::app_dirs::APP_DIR_NAME;
use credit_guard::config::{self, AppSettings, CONFIG_FILE_NAME};
use support::credit_env::CreditGuardEnvGuard;

#[test]
fn config_home_env_relocates_settings() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = CreditGuardEnvGuard::set_config_home(temp.path().to_path_buf());

    assert_eq!(config::load_or_default().expect("defaults"), AppSettings::default());

    let mut settings = AppSettings::default();
    settings.training.trees = 12;
    settings.top_features = 3;
    config::save(&settings).expect("save settings");

    let path = temp.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
    assert!(path.is_file());
    let text = std::fs::read_to_string(&path).expect("read config");
    assert!(text.contains("[training]"));
    assert_eq!(config::load_or_default().expect("load settings"), settings);
}

#[test]
fn logs_land_under_config_home() {
    let temp = tempfile::tempdir().expect("create tempdir");
    let _env = CreditGuardEnvGuard::set_config_home(temp.path().to_path_buf());
    let logs = credit_guard::app_dirs::logs_dir().expect("logs dir");
    assert_eq!(logs, temp.path().join(APP_DIR_NAME).join("logs"));
    assert!(logs.is_dir());
}
