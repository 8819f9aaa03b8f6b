use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use super::{ChosenSet, Skill};

/// Where the chosen items live between picker sessions.
///
/// Read once when a session opens and written after every processed batch.
/// Writing never fails from the caller's point of view.
pub trait ChoiceStore<T> {
    fn chosen(&self) -> ChosenSet<T>;
    fn set_chosen(&mut self, items: &ChosenSet<T>);
}

/// In-memory store: last write wins.
#[derive(Debug, Clone)]
pub struct MemoryStore<T> {
    items: ChosenSet<T>,
    writes: usize,
}

impl<T: std::hash::Hash + Eq> MemoryStore<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            writes: 0,
        }
    }

    #[must_use]
    pub const fn items(&self) -> &ChosenSet<T> {
        &self.items
    }

    /// Number of `set_chosen` calls so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl<T: std::hash::Hash + Eq> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T: std::hash::Hash + Eq + Clone> ChoiceStore<T> for MemoryStore<T> {
    fn chosen(&self) -> ChosenSet<T> {
        self.items.clone()
    }

    fn set_chosen(&mut self, items: &ChosenSet<T>) {
        self.items = items.clone();
        self.writes += 1;
    }
}

/* ============================== Choices file =============================== */

pub const CHOICES_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChoicesFile {
    pub version: u32,
    #[serde(default)]
    pub lamp_skills: Vec<Skill>,
}

impl Default for ChoicesFile {
    fn default() -> Self {
        Self {
            version: CHOICES_VERSION,
            lamp_skills: Vec::new(),
        }
    }
}

#[must_use]
pub fn choices_dir(root: &Path) -> PathBuf {
    root.join(".lampskills")
}

#[must_use]
pub fn choices_file(root: &Path) -> PathBuf {
    choices_dir(root).join("choices.json")
}

/// Missing or unreadable files load as `None`.
#[must_use]
pub fn load_choices(root: &Path) -> Option<ChoicesFile> {
    let data = fs::read(choices_file(root)).ok()?;
    serde_json::from_slice::<ChoicesFile>(&data).ok()
}

pub fn save_choices(root: &Path, choices: &ChoicesFile) -> io::Result<()> {
    fs::create_dir_all(choices_dir(root))?;

    let path = choices_file(root);
    let tmp = path.with_extension("json.tmp");

    let data = serde_json::to_vec_pretty(choices).map_err(|e| io::Error::other(e.to_string()))?;

    fs::write(&tmp, data)?;
    fs::rename(&tmp, &path)?;
    Ok(())
}

/// Lamp skill choices persisted as JSON under `<root>/.lampskills/`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
    items: ChosenSet<Skill>,
}

impl FileStore {
    /// Opens the store at `root`. A missing or corrupt file starts empty.
    pub fn open(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let items = load_choices(&root)
            .map(|c| c.lamp_skills.into_iter().collect())
            .unwrap_or_default();
        Self { root, items }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ChoiceStore<Skill> for FileStore {
    fn chosen(&self) -> ChosenSet<Skill> {
        self.items.clone()
    }

    fn set_chosen(&mut self, items: &ChosenSet<Skill>) {
        self.items = items.clone();
        let file = ChoicesFile {
            version: CHOICES_VERSION,
            lamp_skills: items.iter().copied().collect(),
        };
        if let Err(e) = save_choices(&self.root, &file) {
            tracing::warn!("failed to save lamp skill choices to {}: {e}", self.root.display());
        }
    }
}
