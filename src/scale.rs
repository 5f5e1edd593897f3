//! # Scale Resolution
//!
//! Turns a key and a scale name into the seven ordered pitch classes of that scale.
//!
//! ## Interval Templates
//! Each template is the list of semitone steps that walks one octave, plus the scale
//! degrees that take a major-family chord. The degree set drives chord-quality
//! correction in the resolver. Both built-in templates use degrees 0, 3 and 4, so over
//! A minor the chords on A, D and E are voiced major:
//!
//! | Scale   | Steps                 | Major-family degrees |
//! |---------|-----------------------|----------------------|
//! | `major` | 2 2 1 2 2 2 1         | 0, 3, 4              |
//! | `minor` | 2 1 2 2 1 2 2         | 0, 3, 4              |
//!
//! ## Example
//! ```rust
//! use fretbook::scale::resolve;
//! use fretbook::pitch::pitch_class_of;
//!
//! let scale = resolve(pitch_class_of("A")?, "minor")?;
//! let names: Vec<_> = scale.notes().iter().map(|n| n.name()).collect();
//! assert_eq!(names, ["A", "B", "C", "D", "E", "F", "G"]);
//! # Ok::<(), fretbook::FretError>(())
//! ```

use serde::Serialize;

use crate::error::FretError;
use crate::pitch::{pitch_class_of, PitchClass};

/// Notes per scale.
pub const SCALE_LEN: usize = 7;

/// Semitone steps for one octave of a seven-note scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTemplate {
    pub name: &'static str,
    pub steps: [u8; SCALE_LEN],
    /// Degrees (0-based) that take a major-family chord.
    pub major_degrees: &'static [usize],
}

/// Built-in interval templates.
pub const TEMPLATES: &[IntervalTemplate] = &[
    IntervalTemplate {
        name: "major",
        steps: [2, 2, 1, 2, 2, 2, 1],
        major_degrees: &[0, 3, 4],
    },
    IntervalTemplate {
        name: "minor",
        steps: [2, 1, 2, 2, 1, 2, 2],
        major_degrees: &[0, 3, 4],
    },
];

/// Look up an interval template by name.
pub fn template(name: &str) -> Result<&'static IntervalTemplate, FretError> {
    TEMPLATES
        .iter()
        .find(|t| t.name == name)
        .ok_or_else(|| FretError::UnknownScale(name.to_string()))
}

/// Chord family a scale degree takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Major,
    Minor,
}

/// A resolved key: root, template and the seven ordered pitch classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scale {
    pub root: PitchClass,
    pub name: &'static str,
    notes: [PitchClass; SCALE_LEN],
    #[serde(skip)]
    template: &'static IntervalTemplate,
}

impl Scale {
    /// Resolve a scale from a key spelling (e.g. `"G#"`) and a scale name.
    pub fn from_key(key: &str, scale_name: &str) -> Result<Self, FretError> {
        resolve(pitch_class_of(key)?, scale_name)
    }

    /// Notes in scale order, index 0 is the root.
    pub fn notes(&self) -> &[PitchClass; SCALE_LEN] {
        &self.notes
    }

    pub fn contains(&self, pc: PitchClass) -> bool {
        self.notes.contains(&pc)
    }

    /// 0-based degree of `pc` in this scale, if it is a member.
    pub fn degree_of(&self, pc: PitchClass) -> Option<usize> {
        self.notes.iter().position(|n| *n == pc)
    }

    /// Chord family of the triad built on `pc`, if `pc` belongs to the scale.
    pub fn family_of(&self, pc: PitchClass) -> Option<Family> {
        self.degree_of(pc).map(|degree| {
            if self.template.major_degrees.contains(&degree) {
                Family::Major
            } else {
                Family::Minor
            }
        })
    }

    /// Display name such as `key_C-major_scale`.
    pub fn label(&self) -> String {
        format!("key_{}-{}_scale", self.root, self.name)
    }
}

/// Walk the template from `root`, collecting seven pitch classes.
pub fn resolve(root: PitchClass, scale_name: &str) -> Result<Scale, FretError> {
    let template = template(scale_name)?;
    let mut notes = [root; SCALE_LEN];
    let mut current = root;
    for (i, step) in template.steps.iter().take(SCALE_LEN - 1).enumerate() {
        current = current.transpose(*step as i32);
        notes[i + 1] = current;
    }
    debug_assert_eq!(
        current.transpose(template.steps[SCALE_LEN - 1] as i32),
        root,
        "template {} does not close the octave",
        template.name
    );
    Ok(Scale {
        root,
        name: template.name,
        notes,
        template,
    })
}
