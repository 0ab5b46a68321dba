// File: ./src/storage.rs
// Manages local file storage for the task list.
//
// Changes to the serialized shape of Task or TaskKind require incrementing
// LOCAL_STORAGE_VERSION below.
use crate::context::AppContext;
use crate::model::Task;
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LOCAL_STORAGE_VERSION: u32 = 1;

/// Wrapper struct for versioned local storage
#[derive(Serialize, Deserialize)]
struct LocalStorageData {
    #[serde(default)]
    version: u32,
    tasks: Vec<Task>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Uninitialized,
    Success,
    /// The file exists but could not be read. Saving would destroy it.
    Failed,
}

/// Loads and saves the task list as versioned JSON in the data directory.
#[derive(Debug)]
pub struct LocalStorage {
    path: PathBuf,
    load_state: LoadState,
}

impl LocalStorage {
    pub fn new(ctx: &dyn AppContext) -> Result<Self> {
        Ok(Self::at_path(ctx.get_task_file_path()?))
    }

    pub fn at_path(path: PathBuf) -> Self {
        Self {
            path,
            load_state: LoadState::Uninitialized,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    /// Runs `f` while holding an exclusive advisory lock on a sidecar `.lock` file.
    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)
            .with_context(|| format!("Failed to open lock file {:?}", lock_path))?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    /// Atomic write: Write to .tmp file then rename
    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    /// Reads the task file. A missing file is an empty list.
    ///
    /// If the file exists but cannot be parsed, the error is returned and
    /// later `save()` calls are refused until `force_save()` is used.
    pub fn load(&mut self) -> Result<Vec<Task>> {
        if !self.path.exists() {
            self.load_state = LoadState::Success;
            return Ok(vec![]);
        }

        let path = self.path.clone();
        let result = Self::with_lock(&path, || {
            let json = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {:?}", path))?;
            let data: LocalStorageData = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {:?}", path))?;
            if data.version != LOCAL_STORAGE_VERSION {
                return Err(anyhow::anyhow!(
                    "Unsupported task file version {} in {:?} (expected {})",
                    data.version,
                    path,
                    LOCAL_STORAGE_VERSION
                ));
            }
            data.tasks
                .into_iter()
                .enumerate()
                .map(|(i, task)| {
                    task.revalidated()
                        .with_context(|| format!("Task {} in {:?}", i + 1, path))
                })
                .collect::<Result<Vec<_>>>()
        });

        match &result {
            Ok(tasks) => {
                log::info!("Loaded {} task(s) from {:?}", tasks.len(), self.path);
                self.load_state = LoadState::Success;
            }
            Err(e) => {
                log::error!("Could not load tasks: {:#}", e);
                self.load_state = LoadState::Failed;
            }
        }
        result
    }

    pub fn can_save(&self) -> bool {
        match self.load_state {
            LoadState::Uninitialized => true,
            LoadState::Success => true,
            LoadState::Failed => false,
        }
    }

    /// Saves the full list, replacing the file.
    ///
    /// # Data Loss Prevention
    /// Refuses to write if the last `load()` failed, so an unreadable file is
    /// not overwritten with a partial list.
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if !self.can_save() {
            return Err(anyhow::anyhow!(
                "Cannot save {:?}: previous load failed. This prevents overwriting data that couldn't be read.",
                self.path
            ));
        }
        self.write(tasks)
    }

    /// Saves even after a failed load. Only for deliberate recovery.
    pub fn force_save(&mut self, tasks: &[Task]) -> Result<()> {
        self.write(tasks)?;
        self.load_state = LoadState::Success;
        Ok(())
    }

    fn write(&self, tasks: &[Task]) -> Result<()> {
        Self::with_lock(&self.path, || {
            let data = LocalStorageData {
                version: LOCAL_STORAGE_VERSION,
                tasks: tasks.to_vec(),
            };
            let json = serde_json::to_string_pretty(&data)?;
            Self::atomic_write(&self.path, json)?;
            Ok(())
        })?;
        log::debug!("Saved {} task(s) to {:?}", tasks.len(), self.path);
        Ok(())
    }

    /// One rendered line per task, as shown by `list`.
    pub fn to_text_string(tasks: &[Task]) -> String {
        let mut out = String::new();
        for task in tasks {
            out.push_str(&task.render());
            out.push('\n');
        }
        out
    }

    /// Decodes the output of `to_text_string`. Blank lines are skipped.
    pub fn parse_text(content: &str) -> Result<Vec<Task>> {
        content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(i, line)| Task::from_rendered(line).with_context(|| format!("Line {}", i + 1)))
            .collect()
    }
}
