use fxc::core::currency::Currency;
use fxc::core::history::HistoryLog;
use fxc::core::theme::Theme;
use std::sync::Arc;
use tracing::info;

mod test_utils {
    use std::path::Path;

    /// Writes a config file pointing the data path at a temp directory, so
    /// each test gets an isolated store.
    pub fn write_config(config_path: &Path, data_path: &Path) {
        let config_content = format!(
            r#"
defaults:
  amount: 100.0
  from: "USD"
  to: "EUR"
data_path: "{}"
"#,
            data_path.display()
        );
        std::fs::write(config_path, config_content).expect("Failed to write config file");
    }

    /// Opens the same store `run_command` used, after it has been dropped.
    pub fn open_store(data_path: &Path) -> fxc::store::disk::DiskStore {
        fxc::store::disk::DiskStore::open(&data_path.join("state")).expect("Failed to open store")
    }
}

fn convert_command(amount: f64, from: Currency, to: Currency) -> fxc::AppCommand {
    fxc::AppCommand::Convert {
        amount: Some(amount),
        from: Some(from),
        to: Some(to),
        swap: false,
    }
}

#[test_log::test]
fn test_convert_records_history() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());

    let result = fxc::run_command(
        convert_command(100.0, Currency::Usd, Currency::Eur),
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_ok(), "convert failed with: {:?}", result.err());

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert_eq!(history.len(), 1);

    let record = &history.records()[0];
    info!(?record, "Recorded conversion");
    assert_eq!(record.amount, 100.0);
    assert_eq!(record.from, Currency::Usd);
    assert_eq!(record.result, 85.0);
    assert_eq!(record.to, Currency::Eur);
}

#[test_log::test]
fn test_convert_uses_config_defaults() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());

    // All operands omitted: 100 USD -> EUR from the config.
    let result = fxc::run_command(
        fxc::AppCommand::Convert {
            amount: None,
            from: None,
            to: None,
            swap: false,
        },
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_ok(), "convert failed with: {:?}", result.err());

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert_eq!(history.len(), 1);
    assert_eq!(history.records()[0].result, 85.0);
}

#[test_log::test]
fn test_swap_exchanges_the_selection() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());

    let result = fxc::run_command(
        fxc::AppCommand::Convert {
            amount: Some(100.0),
            from: Some(Currency::Eur),
            to: Some(Currency::Usd),
            swap: true,
        },
        Some(config_file.path().to_str().unwrap()),
    );
    assert!(result.is_ok(), "convert failed with: {:?}", result.err());

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert_eq!(history.len(), 1);

    // Swapped to USD -> EUR before converting.
    let record = &history.records()[0];
    assert_eq!(record.from, Currency::Usd);
    assert_eq!(record.to, Currency::Eur);
    assert_eq!(record.result, 85.0);
}

#[test_log::test]
fn test_history_is_capped_through_the_public_surface() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());
    let config_path = config_file.path().to_str().unwrap().to_string();

    for i in 1..=11 {
        let result = fxc::run_command(
            convert_command(i as f64, Currency::Usd, Currency::Eur),
            Some(&config_path),
        );
        assert!(result.is_ok(), "convert {i} failed with: {:?}", result.err());
    }

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert_eq!(history.len(), 10);
    assert_eq!(history.records()[0].amount, 11.0);
    assert_eq!(history.records()[9].amount, 2.0);
}

#[test_log::test]
fn test_rejected_conversions_do_not_fail_or_record() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());
    let config_path = config_file.path().to_str().unwrap().to_string();

    // Invalid amount and same-currency selection are user-correctable;
    // the command still exits cleanly and the log stays untouched.
    let result = fxc::run_command(
        convert_command(-5.0, Currency::Usd, Currency::Eur),
        Some(&config_path),
    );
    assert!(result.is_ok());

    let result = fxc::run_command(
        convert_command(100.0, Currency::Jpy, Currency::Jpy),
        Some(&config_path),
    );
    assert!(result.is_ok());

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert!(history.is_empty());
}

#[test_log::test]
fn test_clear_empties_the_persisted_history() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());
    let config_path = config_file.path().to_str().unwrap().to_string();

    for i in 1..=3 {
        fxc::run_command(
            convert_command(i as f64, Currency::Gbp, Currency::Inr),
            Some(&config_path),
        )
        .unwrap();
    }

    let result = fxc::run_command(fxc::AppCommand::ClearHistory, Some(&config_path));
    assert!(result.is_ok(), "clear failed with: {:?}", result.err());

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert!(history.is_empty());
}

#[test_log::test]
fn test_theme_toggle_persists() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());
    let config_path = config_file.path().to_str().unwrap().to_string();

    // Starts light; a bare theme command toggles to dark.
    let result = fxc::run_command(fxc::AppCommand::Theme(None), Some(&config_path));
    assert!(result.is_ok());

    {
        let store = test_utils::open_store(data_dir.path());
        assert_eq!(Theme::load(&store), Theme::Dark);
    }

    // An explicit value sets it directly.
    let result = fxc::run_command(
        fxc::AppCommand::Theme(Some(Theme::Light)),
        Some(&config_path),
    );
    assert!(result.is_ok());

    let store = test_utils::open_store(data_dir.path());
    assert_eq!(Theme::load(&store), Theme::Light);
}

#[test_log::test]
fn test_history_command_runs_on_empty_and_populated_logs() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());
    let config_path = config_file.path().to_str().unwrap().to_string();

    assert!(fxc::run_command(fxc::AppCommand::History, Some(&config_path)).is_ok());

    fxc::run_command(
        convert_command(42.0, Currency::Cad, Currency::Chf),
        Some(&config_path),
    )
    .unwrap();

    assert!(fxc::run_command(fxc::AppCommand::History, Some(&config_path)).is_ok());
}

#[test_log::test]
fn test_explicit_missing_config_path_fails() {
    let result = fxc::run_command(
        convert_command(100.0, Currency::Usd, Currency::Eur),
        Some("/nonexistent/fxc/config.yaml"),
    );
    assert!(result.is_err());
}

#[test_log::test]
fn test_records_persist_between_invocations() {
    let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let data_dir = tempfile::tempdir().expect("Failed to create temp dir");
    test_utils::write_config(config_file.path(), data_dir.path());
    let config_path = config_file.path().to_str().unwrap().to_string();

    fxc::run_command(
        convert_command(100.0, Currency::Usd, Currency::Gbp),
        Some(&config_path),
    )
    .unwrap();
    fxc::run_command(
        convert_command(50.0, Currency::Eur, Currency::Jpy),
        Some(&config_path),
    )
    .unwrap();

    let store = Arc::new(test_utils::open_store(data_dir.path()));
    let history = HistoryLog::load(store);
    assert_eq!(history.len(), 2);
    assert_eq!(history.records()[0].amount, 50.0);
    assert_eq!(history.records()[0].result, 6475.0); // 50 * 129.5
    assert_eq!(history.records()[1].amount, 100.0);
    assert_eq!(history.records()[1].result, 73.0); // 100 * 0.73
}
