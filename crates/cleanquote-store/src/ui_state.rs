//! UI state store
//!
//! State is hydrated from `ui_state.json` when the store is opened and flushed
//! back after every change. Reads and updates go through the store methods
//! only.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use cleanquote_types::{Result, StoreError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

const STATE_FILE: &str = "ui_state.json";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
            Theme::System => write!(f, "system"),
        }
    }
}

/// Elapsed-time tracker for a job
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobTimer {
    /// Set while the timer is running
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    /// Seconds banked by previous start/stop cycles
    #[serde(default)]
    pub accumulated_secs: i64,
}

impl JobTimer {
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Total elapsed seconds as of `now`
    pub fn elapsed_secs(&self, now: DateTime<Utc>) -> i64 {
        let running = self
            .started_at
            .map(|start| (now - start).num_seconds().max(0))
            .unwrap_or(0);
        self.accumulated_secs + running
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default)]
    pub sidebar_collapsed: bool,

    #[serde(default)]
    pub theme: Theme,

    #[serde(default)]
    pub job_timers: BTreeMap<String, JobTimer>,
}

/// Persistent store for UI state
pub struct UiStateStore {
    store_path: PathBuf,
    state: UiState,
}

impl UiStateStore {
    /// Create or hydrate a store in `store_dir`
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join(STATE_FILE);
        let state = Self::hydrate(&store_path)?;
        Ok(Self { store_path, state })
    }

    fn hydrate(path: &Path) -> Result<UiState> {
        if !path.exists() {
            return Ok(UiState::default());
        }

        let file = File::open(path)?;
        let reader = BufReader::new(file);
        match serde_json::from_reader::<_, UiState>(reader) {
            Ok(state) => Ok(state),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "UI state unreadable, starting from defaults");
                Ok(UiState::default())
            }
        }
    }

    /// Write `state` to disk
    fn flush(&self, state: &UiState) -> Result<()> {
        let io_err = |e: std::io::Error| StoreError::Io(format!("{}: {}", self.store_path.display(), e));
        let file = File::create(&self.store_path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, state)?;
        writer.flush().map_err(io_err)?;
        tracing::debug!(path = %self.store_path.display(), "UI state flushed");
        Ok(())
    }

    /// Apply `change`, flush if it altered the state, then commit it.
    /// A failed flush leaves the in-memory state untouched.
    fn update<F>(&mut self, change: F) -> Result<bool>
    where
        F: FnOnce(&mut UiState),
    {
        let mut next = self.state.clone();
        change(&mut next);
        if next == self.state {
            return Ok(false);
        }
        self.flush(&next)?;
        self.state = next;
        Ok(true)
    }

    pub fn path(&self) -> &Path {
        &self.store_path
    }

    pub fn state(&self) -> &UiState {
        &self.state
    }

    pub fn timer(&self, job_id: &str) -> Option<&JobTimer> {
        self.state.job_timers.get(job_id)
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.update(|state| state.theme = theme)?;
        Ok(())
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) -> Result<()> {
        self.update(|state| state.sidebar_collapsed = collapsed)?;
        Ok(())
    }

    /// Flip the sidebar flag and return the new value
    pub fn toggle_sidebar(&mut self) -> Result<bool> {
        self.update(|state| state.sidebar_collapsed = !state.sidebar_collapsed)?;
        Ok(self.state.sidebar_collapsed)
    }

    /// Start (or resume) a job timer. Returns false if it was already running.
    pub fn start_timer(&mut self, job_id: &str, now: DateTime<Utc>) -> Result<bool> {
        self.update(|state| {
            let timer = state.job_timers.entry(job_id.to_string()).or_default();
            if timer.started_at.is_none() {
                timer.started_at = Some(now);
            }
        })
    }

    /// Stop a job timer, banking the running interval. Returns false if the
    /// timer was not running.
    pub fn stop_timer(&mut self, job_id: &str, now: DateTime<Utc>) -> Result<bool> {
        self.update(|state| {
            if let Some(timer) = state.job_timers.get_mut(job_id) {
                if timer.started_at.is_some() {
                    timer.accumulated_secs = timer.elapsed_secs(now);
                    timer.started_at = None;
                }
            }
        })
    }

    /// Forget a job timer. Returns false if there was none.
    pub fn clear_timer(&mut self, job_id: &str) -> Result<bool> {
        self.update(|state| {
            state.job_timers.remove(job_id);
        })
    }
}
