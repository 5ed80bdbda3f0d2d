// Manages the on-disk agenda file.
//
// The persisted format is one serialized appointment per line
// (`title|year|month|day|standard_time|duration`). Loading is tolerant:
// blank lines are skipped and every other line yields a record, possibly
// with defaulted fields. Saving always rewrites the whole file through an
// atomic tmp-file rename while holding an exclusive sidecar lock, so a
// crashed write never leaves a half-written agenda behind.
use crate::agenda::Agenda;
use crate::model::Appointment;
use anyhow::{Context, Result};
use fs2::FileExt;
use std::fs;
use std::path::{Path, PathBuf};

pub struct AgendaStorage;

impl AgendaStorage {
    /// Helper to get a sidecar lock file path
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

    /// Runs `f` while holding an exclusive lock on the sidecar lock file.
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
            .open(&lock_path)?;

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

    /// Loads the agenda from `path`. A missing file is an empty agenda.
    pub fn load(path: &Path) -> Result<Agenda> {
        if !path.exists() {
            return Ok(Agenda::default());
        }
        let content = Self::with_lock(path, || {
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read agenda file '{}'", path.display()))
        })?;

        let mut entries = Vec::new();
        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }
            entries.push(Appointment::parse(line));
        }
        log::debug!(
            "Loaded {} appointment(s) from {}",
            entries.len(),
            path.display()
        );
        Ok(Agenda::new(entries))
    }

    /// Rewrites the whole agenda file from the in-memory entries.
    pub fn save(path: &Path, agenda: &Agenda) -> Result<()> {
        let mut contents = String::new();
        for appointment in agenda.entries() {
            contents.push_str(&appointment.to_line());
            contents.push('\n');
        }

        Self::with_lock(path, || {
            Self::atomic_write(path, &contents)
                .with_context(|| format!("Failed to write agenda file '{}'", path.display()))
        })?;
        log::debug!(
            "Saved {} appointment(s) to {}",
            agenda.len(),
            path.display()
        );
        Ok(())
    }
}
