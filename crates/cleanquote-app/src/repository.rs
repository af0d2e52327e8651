//! Store adapters for the persistence layer

use std::path::PathBuf;

use cleanquote_store::UiStateStore;
use cleanquote_types::Result;

use crate::config::Config;

/// Open the UI state store in the configured data directory
pub fn open_ui_store(config: &Config) -> Result<UiStateStore> {
    let data_dir = config.data_dir()?;
    UiStateStore::open(data_dir)
}

/// Open the UI state store at a custom directory
pub fn open_ui_store_at(data_dir: PathBuf) -> Result<UiStateStore> {
    UiStateStore::open(data_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cleanquote_store::Theme;
    use tempfile::tempdir;

    #[test]
    fn test_open_ui_store_uses_configured_dir() {
        let dir = tempdir().unwrap();
        let config = Config {
            data_dir: Some(dir.path().join("ui")),
            ..Config::default()
        };

        let mut store = open_ui_store(&config).unwrap();
        store.set_theme(Theme::Dark).unwrap();

        assert!(dir.path().join("ui").join("ui_state.json").exists());
        let reopened = open_ui_store_at(dir.path().join("ui")).unwrap();
        assert_eq!(reopened.state().theme, Theme::Dark);
    }
}
