//! Chord type definitions
//!
//! Qualities, per-string frets, voicings and the diagram payload handed to renderers.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::fretboard::{GuitarString, FRET_COUNT, STRING_COUNT};
use crate::pitch::PitchClass;
use crate::scale::Family;

/// Chord quality, named the way the shape table is keyed.
///
/// Qualities prefixed `major`/`minor` belong to a family and may be flipped to the
/// other family by scale-degree correction, keeping whatever follows the family word
/// (`major7` <-> `minor7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ChordQuality {
    #[serde(rename = "major")]
    Major,
    #[serde(rename = "minor")]
    Minor,
    #[serde(rename = "major7")]
    Major7,
    #[serde(rename = "minor7")]
    Minor7,
    #[serde(rename = "majorM7")]
    MajorMaj7,
    #[serde(rename = "minorM7")]
    MinorMaj7,
    #[serde(rename = "major6")]
    Major6,
    #[serde(rename = "minor6")]
    Minor6,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "7sus4")]
    SevenSus4,
    #[serde(rename = "dim")]
    Diminished,
    #[serde(rename = "aug")]
    Augmented,
}

impl ChordQuality {
    pub const ALL: [ChordQuality; 12] = [
        ChordQuality::Major,
        ChordQuality::Minor,
        ChordQuality::Major7,
        ChordQuality::Minor7,
        ChordQuality::MajorMaj7,
        ChordQuality::MinorMaj7,
        ChordQuality::Major6,
        ChordQuality::Minor6,
        ChordQuality::Sus4,
        ChordQuality::SevenSus4,
        ChordQuality::Diminished,
        ChordQuality::Augmented,
    ];

    /// Table name, e.g. `"minor7"`.
    pub fn name(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
            ChordQuality::Major7 => "major7",
            ChordQuality::Minor7 => "minor7",
            ChordQuality::MajorMaj7 => "majorM7",
            ChordQuality::MinorMaj7 => "minorM7",
            ChordQuality::Major6 => "major6",
            ChordQuality::Minor6 => "minor6",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::SevenSus4 => "7sus4",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
        }
    }

    /// Suffix as written after the root in a chord symbol, e.g. `"m7"`.
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
            ChordQuality::Major7 => "7",
            ChordQuality::Minor7 => "m7",
            ChordQuality::MajorMaj7 => "M7",
            ChordQuality::MinorMaj7 => "mM7",
            ChordQuality::Major6 => "6",
            ChordQuality::Minor6 => "m6",
            ChordQuality::Sus4 => "sus4",
            ChordQuality::SevenSus4 => "7sus4",
            ChordQuality::Diminished => "dim",
            ChordQuality::Augmented => "aug",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.name() == name)
    }

    /// Quality for a symbol suffix. `maj7` is accepted as a spelling of `M7`.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "maj7" => Some(ChordQuality::MajorMaj7),
            _ => Self::ALL.into_iter().find(|q| q.suffix() == suffix),
        }
    }

    pub fn family(self) -> Option<Family> {
        match self {
            ChordQuality::Major
            | ChordQuality::Major7
            | ChordQuality::MajorMaj7
            | ChordQuality::Major6 => Some(Family::Major),
            ChordQuality::Minor
            | ChordQuality::Minor7
            | ChordQuality::MinorMaj7
            | ChordQuality::Minor6 => Some(Family::Minor),
            _ => None,
        }
    }

    /// Same extension, other family. Qualities without a family are returned unchanged.
    pub fn with_family(self, family: Family) -> Self {
        use ChordQuality::*;
        match (self, family) {
            (Major | Minor, Family::Major) => Major,
            (Major | Minor, Family::Minor) => Minor,
            (Major7 | Minor7, Family::Major) => Major7,
            (Major7 | Minor7, Family::Minor) => Minor7,
            (MajorMaj7 | MinorMaj7, Family::Major) => MajorMaj7,
            (MajorMaj7 | MinorMaj7, Family::Minor) => MinorMaj7,
            (Major6 | Minor6, Family::Major) => Major6,
            (Major6 | Minor6, Family::Minor) => Minor6,
            (other, _) => other,
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What one string does in a voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fret {
    Muted,
    At(u8),
}

impl Fret {
    pub fn number(self) -> Option<u8> {
        match self {
            Fret::Muted => None,
            Fret::At(fret) => Some(fret),
        }
    }
}

impl fmt::Display for Fret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fret::Muted => f.write_str("x"),
            Fret::At(fret) => write!(f, "{}", fret),
        }
    }
}

impl Serialize for Fret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Fret::Muted => serializer.serialize_str("x"),
            Fret::At(fret) => serializer.serialize_u8(*fret),
        }
    }
}

/// A concrete fingering of one chord.
///
/// `frets` runs from string 6 to string 1; the anchor string's entry always equals
/// `anchor_fret`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Voicing {
    pub symbol: String,
    pub root: PitchClass,
    pub quality: ChordQuality,
    pub anchor_string: GuitarString,
    pub anchor_fret: u8,
    pub frets: [Fret; STRING_COUNT],
}

impl Voicing {
    /// Chord name after quality correction, e.g. `"Em"` for `E` in C major.
    pub fn name(&self) -> String {
        format!("{}{}", self.root, self.quality.suffix())
    }

    pub fn fret_on(&self, string: GuitarString) -> Fret {
        self.frets[string.slot()]
    }

    /// Pitch class each string sounds, `None` where muted.
    pub fn pitches(&self) -> [Option<PitchClass>; STRING_COUNT] {
        let mut pitches = [None; STRING_COUNT];
        for string in GuitarString::low_to_high() {
            pitches[string.slot()] = self
                .fret_on(string)
                .number()
                .map(|fret| string.open_note().transpose(fret as i32));
        }
        pitches
    }

    /// Chart notation, low string first: `"x 3 2 0 1 0"`.
    pub fn tab(&self) -> String {
        self.frets
            .iter()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Advisory raised while resolving; the voicing is still produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ChordWarning {
    /// Root is not a member of the current scale; the written quality was kept.
    #[serde(rename_all = "camelCase")]
    OutOfScaleChord {
        symbol: String,
        root: PitchClass,
        scale: String,
    },
}

impl fmt::Display for ChordWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChordWarning::OutOfScaleChord {
                symbol,
                root,
                scale,
            } => write!(f, "{} is not included in {} (root {})", symbol, scale, root),
        }
    }
}

/// A voicing plus any advisory raised on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedChord {
    pub voicing: Voicing,
    pub warning: Option<ChordWarning>,
}

/// Frets a renderer should show for a diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretWindow {
    pub first: u8,
    pub last: u8,
}

/// Number of frets shown in a chord diagram.
pub const WINDOW_WIDTH: u8 = 5;

/// Everything a renderer needs to draw one chord box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordDiagram {
    pub name: String,
    pub voicing: Voicing,
    /// Note sounded on each string, low to high; `None` where muted.
    pub notes: [Option<PitchClass>; STRING_COUNT],
    pub window: FretWindow,
}

impl From<Voicing> for ChordDiagram {
    fn from(voicing: Voicing) -> Self {
        let first = voicing.anchor_fret;
        let window = FretWindow {
            first,
            last: (first + WINDOW_WIDTH - 1).min(FRET_COUNT),
        };
        ChordDiagram {
            name: voicing.name(),
            notes: voicing.pitches(),
            voicing,
            window,
        }
    }
}

/// A chord requested by hand for a chord sheet.
///
/// Unlike symbols resolved against a song, manual chords keep the quality they are
/// given: no scale-degree correction is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualChord {
    /// Root note name, e.g. `"G#"`.
    pub root: String,
    pub string: GuitarString,
    /// Quality table name, e.g. `"minor7"`.
    pub quality: String,
    /// Anchor on this fret instead of the lowest one sounding the root.
    pub fret: Option<u8>,
}

impl ManualChord {
    pub fn new(root: &str, string: GuitarString, quality: &str) -> Self {
        ManualChord {
            root: root.to_string(),
            string,
            quality: quality.to_string(),
            fret: None,
        }
    }

    pub fn at_fret(mut self, fret: u8) -> Self {
        self.fret = Some(fret);
        self
    }
}
