//! Tag directories parsed from `.SPC` specification resources.
//!
//! A tag directory lists, in file order, the fields a record kind is expected
//! to carry. The canonical directories are installed under
//! `$VIEWNIX_ENV/FILES/`, one per record kind; compiled-in copies are also
//! available so no installation is needed.

mod item;

pub use self::item::{Item, ParseError, Requirement, Tag};

use std::{
    env, fs,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use crate::{data_set_type::RecordKind, error::Error};

const ENV: &str = "VIEWNIX_ENV";
const FILES_PATH: &str = "FILES";

static SCENE_SRC: &str = include_str!("../data/SCENE_V1.0.SPC");
static STRUCTURE_SRC: &str = include_str!("../data/STRUCTURE_V1.0.SPC");
static DISPLAY_SRC: &str = include_str!("../data/DISPLAY_V1.0.SPC");

/// The ordered field list of one record kind.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Directory {
    items: Vec<Item>,
}

impl Directory {
    /// Loads the directory for the given record kind from
    /// `$VIEWNIX_ENV/FILES/<KIND>_V1.0.SPC`.
    pub fn open(kind: RecordKind) -> Result<Self, Error> {
        let env = env::var_os(ENV).ok_or(Error::MissingEnvironment)?;

        let path: PathBuf = [env.as_os_str(), FILES_PATH.as_ref(), file_name(kind).as_ref()]
            .iter()
            .collect();

        let file = fs::File::open(path).map_err(Error::Directory)?;

        Self::from_reader(BufReader::new(file)).map_err(Error::Directory)
    }

    /// Returns the compiled-in directory for the given record kind.
    pub fn bundled(kind: RecordKind) -> Self {
        let src = match kind {
            RecordKind::Scene => SCENE_SRC,
            RecordKind::Structure => STRUCTURE_SRC,
            RecordKind::Display => DISPLAY_SRC,
        };

        // the compiled-in resources always parse
        Self::from_reader(src.as_bytes()).unwrap_or(Self { items: Vec::new() })
    }

    /// Reads a directory from `group element requirement label` lines.
    pub fn from_reader<R>(reader: R) -> io::Result<Self>
    where
        R: BufRead,
    {
        let mut items = Vec::new();

        for result in reader.lines() {
            let line = result?;

            if line.trim().is_empty() {
                continue;
            }

            let item = line
                .parse()
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

            items.push(item);
        }

        Ok(Self { items })
    }

    /// Returns the items in file order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }
}

/// The directories of all three record kinds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Directories {
    scene: Directory,
    structure: Directory,
    display: Directory,
}

impl Directories {
    /// Loads all three directories from `$VIEWNIX_ENV/FILES/`.
    pub fn open() -> Result<Self, Error> {
        Ok(Self {
            scene: Directory::open(RecordKind::Scene)?,
            structure: Directory::open(RecordKind::Structure)?,
            display: Directory::open(RecordKind::Display)?,
        })
    }

    /// Returns the compiled-in directories.
    pub fn bundled() -> Self {
        Self {
            scene: Directory::bundled(RecordKind::Scene),
            structure: Directory::bundled(RecordKind::Structure),
            display: Directory::bundled(RecordKind::Display),
        }
    }

    /// Returns the directory for the given record kind.
    pub fn get(&self, kind: RecordKind) -> &Directory {
        match kind {
            RecordKind::Scene => &self.scene,
            RecordKind::Structure => &self.structure,
            RecordKind::Display => &self.display,
        }
    }
}

impl Default for Directories {
    fn default() -> Self {
        Self::bundled()
    }
}

fn file_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Scene => "SCENE_V1.0.SPC",
        RecordKind::Structure => "STRUCTURE_V1.0.SPC",
        RecordKind::Display => "DISPLAY_V1.0.SPC",
    }
}
