// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Sidepanel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Sidepanel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::model::{Question, Session, Timestamp, TimestampError, DEFAULT_TITLE};
use crate::ops::{apply_op, SessionOp};

const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    /// Backing data exists but does not parse as a session document. Surfaced
    /// instead of resetting the file, so existing submissions survive.
    Corrupt {
        path: PathBuf,
        source: CorruptSource,
    },
    /// The mutation lock was not acquired within the bounded wait.
    Busy {
        timeout: Duration,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Corrupt { path, source } => {
                write!(f, "invalid session document at {path:?}: {source}")
            }
            Self::Busy { timeout } => {
                write!(f, "session store busy: no mutation lock within {timeout:?}")
            }
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Corrupt { source, .. } => Some(source),
            Self::Busy { .. } => None,
        }
    }
}

#[derive(Debug)]
pub enum CorruptSource {
    Json(serde_json::Error),
    Timestamp {
        value: String,
        source: TimestampError,
    },
}

impl fmt::Display for CorruptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json(source) => source.fmt(f),
            Self::Timestamp { value, source } => {
                write!(f, "invalid question timestamp {value:?}: {source}")
            }
        }
    }
}

impl std::error::Error for CorruptSource {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json(source) => Some(source),
            Self::Timestamp { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Fast, best-effort persistence.
    ///
    /// - Writes a temp file and renames atomically into place.
    /// - Does not perform per-file fsync/sync.
    #[default]
    BestEffort,

    /// Slower, best-effort durability.
    ///
    /// Attempts to flush written file contents and rename operations to stable
    /// storage where possible. Exact guarantees are platform/filesystem-dependent.
    Durable,
}

/// Exclusive gate spanning one full load -> apply -> persist cycle.
///
/// Acquisition waits at most the caller's timeout; on expiry the caller gets
/// nothing and surfaces `StoreError::Busy` rather than parking a request
/// thread indefinitely.
#[derive(Debug, Default)]
struct MutateGate {
    locked: Mutex<bool>,
    cv: Condvar,
}

impl MutateGate {
    fn acquire(&self, timeout: Duration) -> Option<MutateGuard<'_>> {
        let deadline = Instant::now() + timeout;
        let mut locked = self.locked.lock().expect("mutate gate poisoned");
        while *locked {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return None;
            }
            let (next, _) = self
                .cv
                .wait_timeout(locked, remaining)
                .expect("mutate gate cv poisoned");
            locked = next;
        }
        *locked = true;
        Some(MutateGuard { gate: self })
    }
}

struct MutateGuard<'a> {
    gate: &'a MutateGate,
}

impl Drop for MutateGuard<'_> {
    fn drop(&mut self) {
        let mut locked = self.gate.locked.lock().expect("mutate gate poisoned");
        *locked = false;
        self.gate.cv.notify_one();
    }
}

/// The authoritative gateway to the one persisted session document.
///
/// Clones share the mutation gate, so every handle derived from one
/// `SessionFile` serializes its mutations against the same file.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
    durability: WriteDurability,
    lock_timeout: Duration,
    gate: Arc<MutateGate>,
}

impl SessionFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            durability: WriteDurability::default(),
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            gate: Arc::new(MutateGate::default()),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    /// Returns the current document, creating the backing file with default
    /// content on first access.
    ///
    /// Plain reads take no lock; the atomic rename in [`Self::persist`] means
    /// a concurrent reader sees either the pre- or post-mutation document,
    /// never a mix. Only the lazy-create path takes the gate, re-checking
    /// after acquisition so racing first loads create the file exactly once.
    pub fn load(&self) -> Result<Session, StoreError> {
        match self.read_session() {
            Ok(session) => Ok(session),
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                let _guard = self.acquire_gate()?;
                self.load_locked()
            }
            Err(err) => Err(err),
        }
    }

    pub fn set_title(&self, new_title: impl Into<String>) -> Result<(), StoreError> {
        self.mutate(SessionOp::SetTitle {
            title: new_title.into(),
        })
    }

    pub fn add_question(
        &self,
        text: impl Into<String>,
        submitted_at: Timestamp,
    ) -> Result<(), StoreError> {
        self.mutate(SessionOp::AddQuestion {
            text: text.into(),
            submitted_at,
        })
    }

    pub fn delete_question(&self, index: usize) -> Result<(), StoreError> {
        self.mutate(SessionOp::DeleteQuestion { index })
    }

    /// Applies one operation under the exclusive gate: load the latest
    /// persisted state, apply in memory, persist atomically.
    ///
    /// Loading inside the gate is what makes positional deletes safe: the
    /// index is resolved against the same snapshot the persist writes back.
    /// An unchanged apply skips the persist, leaving the file untouched.
    pub fn mutate(&self, op: SessionOp) -> Result<(), StoreError> {
        let _guard = self.acquire_gate()?;
        let mut session = self.load_locked()?;
        if apply_op(&mut session, &op).is_changed() {
            self.persist(&session)?;
        }
        Ok(())
    }

    fn acquire_gate(&self) -> Result<MutateGuard<'_>, StoreError> {
        self.gate
            .acquire(self.lock_timeout)
            .ok_or(StoreError::Busy {
                timeout: self.lock_timeout,
            })
    }

    /// Load with lazy-create; the caller must hold the gate.
    fn load_locked(&self) -> Result<Session, StoreError> {
        match self.read_session() {
            Ok(session) => Ok(session),
            Err(StoreError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                let session = Session::new();
                self.persist(&session)?;
                Ok(session)
            }
            Err(err) => Err(err),
        }
    }

    fn read_session(&self) -> Result<Session, StoreError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        let session_json: SessionJson =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source: CorruptSource::Json(source),
            })?;

        session_from_json(&self.path, session_json)
    }

    fn persist(&self, session: &Session) -> Result<(), StoreError> {
        let session_json = session_to_json(session);
        let raw =
            serde_json::to_string_pretty(&session_json).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source: CorruptSource::Json(source),
            })?;

        write_atomic(&self.path, format!("{raw}\n").as_bytes(), self.durability)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionJson {
    #[serde(default = "default_title")]
    title: String,
    #[serde(default)]
    questions: Vec<QuestionJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionJson {
    text: String,
    timestamp: String,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_owned()
}

fn session_from_json(path: &Path, session_json: SessionJson) -> Result<Session, StoreError> {
    let mut session = Session::new();
    session.set_title(session_json.title);

    for question_json in session_json.questions {
        let submitted_at = Timestamp::new(question_json.timestamp.clone()).map_err(|source| {
            StoreError::Corrupt {
                path: path.to_path_buf(),
                source: CorruptSource::Timestamp {
                    value: question_json.timestamp,
                    source,
                },
            }
        })?;
        session
            .questions_mut()
            .push(Question::new(question_json.text, submitted_at));
    }

    Ok(session)
}

fn session_to_json(session: &Session) -> SessionJson {
    SessionJson {
        title: session.title().to_owned(),
        questions: session
            .questions()
            .iter()
            .map(|question| QuestionJson {
                text: question.text().to_owned(),
                timestamp: question.submitted_at().as_str().to_owned(),
            })
            .collect(),
    }
}

fn rename_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        match fs::rename(from, to) {
            Ok(()) => Ok(()),
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::AlreadyExists | io::ErrorKind::PermissionDenied
                ) =>
            {
                let _ = fs::remove_file(to);
                fs::rename(from, to)
            }
            Err(err) => Err(err),
        }
    }

    #[cfg(not(windows))]
    {
        fs::rename(from, to)
    }
}

fn write_atomic(path: &Path, contents: &[u8], durability: WriteDurability) -> Result<(), StoreError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent).map_err(|source| StoreError::Io {
        path: parent.to_path_buf(),
        source,
    })?;

    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = parent.join(format!(
        ".sidepanel.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    file.write_all(contents).map_err(|source| StoreError::Io {
        path: tmp_path.clone(),
        source,
    })?;

    if durability == WriteDurability::Durable {
        file.sync_all().map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;
    }
    drop(file);

    if let Err(source) = rename_overwrite(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        #[cfg(unix)]
        {
            let dir = fs::File::open(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
            dir.sync_all().map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}
