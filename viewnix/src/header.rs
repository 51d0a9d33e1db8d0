//! Header model.

pub mod display;
pub mod general;
pub mod scene;
pub mod structure;

pub use self::{display::Display, general::General, scene::Scene, structure::Structure};

use crate::data_set_type::RecordKind;

/// A 3DVIEWNIX file header.
#[derive(Clone, Debug, PartialEq)]
pub struct Header {
    /// Patient, study, and acquisition information common to all data sets.
    pub general: General,
    /// The kind-specific part of the header.
    pub body: Body,
}

impl Header {
    /// Returns the record kind of the body.
    pub fn kind(&self) -> RecordKind {
        self.body.kind()
    }
}

/// The kind-specific part of a header.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Scan data.
    Scene(Scene),
    /// Structure system data.
    Structure(Structure),
    /// Display data.
    Display(Display),
}

impl Body {
    /// Returns the record kind of this body.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Scene(_) => RecordKind::Scene,
            Self::Structure(_) => RecordKind::Structure,
            Self::Display(_) => RecordKind::Display,
        }
    }

    /// Returns the scene, if this is scan data.
    pub fn as_scene(&self) -> Option<&Scene> {
        match self {
            Self::Scene(scene) => Some(scene),
            _ => None,
        }
    }

    /// Returns the structure system, if this is structure data.
    pub fn as_structure(&self) -> Option<&Structure> {
        match self {
            Self::Structure(structure) => Some(structure),
            _ => None,
        }
    }

    /// Returns the display record, if this is display data.
    pub fn as_display(&self) -> Option<&Display> {
        match self {
            Self::Display(display) => Some(display),
            _ => None,
        }
    }
}

impl From<Scene> for Body {
    fn from(scene: Scene) -> Self {
        Self::Scene(scene)
    }
}

impl From<Structure> for Body {
    fn from(structure: Structure) -> Self {
        Self::Structure(structure)
    }
}

impl From<Display> for Body {
    fn from(display: Display) -> Self {
        Self::Display(display)
    }
}
