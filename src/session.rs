// File: src/session.rs
//! The outer driver shared by the console and TUI front ends.
//!
//! A `Session` owns the task list, the storage and the config. It feeds each
//! line to the interpreter and persists the list when it changed. The
//! interpreter itself never does I/O.
use crate::config::Config;
use crate::context::AppContext;
use crate::interpreter::{self, Outcome};
use crate::model::Task;
use crate::reply;
use crate::storage::LocalStorage;
use crate::tasklist::TaskList;
use anyhow::Result;

/// What a front end should show after one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub exit: bool,
}

#[derive(Debug)]
pub struct Session {
    tasks: TaskList,
    storage: LocalStorage,
    config: Config,
}

impl Session {
    /// Loads config and tasks for `ctx`.
    ///
    /// A task file that cannot be read does not stop the session: it starts
    /// empty and refuses to save over the unreadable file.
    pub fn open(ctx: &dyn AppContext) -> Result<Self> {
        let config = Config::load_or_default(ctx)?;
        let storage = LocalStorage::new(ctx)?;
        Ok(Self::with_parts(config, storage))
    }

    pub fn with_parts(config: Config, mut storage: LocalStorage) -> Self {
        let tasks = match storage.load() {
            Ok(tasks) => TaskList::from(tasks),
            Err(e) => {
                log::warn!("Starting with an empty list: {:#}", e);
                TaskList::new()
            }
        };
        Self {
            tasks,
            storage,
            config,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    pub fn greeting(&self) -> String {
        let mut s = reply::greeting(self.config.user_name.as_deref());
        if !self.storage.can_save() {
            s.push_str(&format!(
                "\n(Derek could not read {:?}, so he won't save over it.)",
                self.storage.path()
            ));
        }
        if self.config.ask_consent {
            s.push('\n');
            s.push_str(reply::consent_prompt());
        }
        s
    }

    pub fn handle(&mut self, line: &str) -> Reply {
        let outcome = interpreter::execute(line, &mut self.tasks);
        let exit = outcome.is_exit();
        let should_save = exit || (outcome.mutated && self.config.autosave);

        let Outcome { mut reply, .. } = outcome;
        if should_save && let Err(e) = self.save() {
            log::error!("Save failed: {:#}", e);
            reply.push_str(&format!("\nWarning: Derek could not save your tasks: {}", e));
        }
        Reply { text: reply, exit }
    }

    pub fn save(&self) -> Result<()> {
        self.storage.save(self.tasks.as_slice())
    }

    /// Appends `tasks` and saves. Returns how many were added.
    ///
    /// Nothing is appended unless the combined list was saved.
    pub fn import(&mut self, tasks: Vec<Task>) -> Result<usize> {
        let count = tasks.len();
        let mut combined = self.tasks.clone();
        combined.extend(tasks);
        self.storage.save(combined.as_slice())?;
        self.tasks = combined;
        log::info!("Imported {} task(s)", count);
        Ok(count)
    }

    pub fn export_text(&self) -> String {
        LocalStorage::to_text_string(self.tasks.as_slice())
    }
}
