use crate::stretch::Axis;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for the ten-patch drawable and its definition loader
#[derive(Debug)]
pub enum TenPatchError {
    /// A stretch value lies outside the current source region
    StretchOutOfRange {
        /// Axis the offending value belongs to
        axis: Axis,
        /// The offending pixel index
        value: i32,
        /// Pixel extent of the source region along that axis
        extent: u32,
    },
    /// Stretch pairs are descending or do not start after the previous pair
    StretchNotAscending {
        /// Axis the offending pair belongs to
        axis: Axis,
        /// Last valid pixel index seen before the violation
        prev: i32,
        /// Pixel index that failed to ascend
        next: i32,
    },
    /// A flat stretch list held an odd number of values
    OddStretchValues(usize),
    /// Stretch areas were never assigned before the first draw
    StretchAreasUnset(Axis),
    /// No texture region was assigned before the first draw
    RegionUnset,
    /// The rotated/scaled draw entry point is not implemented
    Unsupported,
    /// File I/O error while reading a definition
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },
    /// JSON parse error in a definition file
    Json {
        /// Path that failed to parse
        path: PathBuf,
        /// Underlying parse error
        source: serde_json::Error,
    },
    /// A definition parsed but described an unusable drawable
    InvalidDefinition(String),
}

impl fmt::Display for TenPatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenPatchError::StretchOutOfRange {
                axis,
                value,
                extent,
            } => write!(
                f,
                "{} stretch value {} is outside the source region (extent {})",
                axis, value, extent
            ),
            TenPatchError::StretchNotAscending { axis, prev, next } => write!(
                f,
                "{} stretch values must ascend: {} follows {}",
                axis, next, prev
            ),
            TenPatchError::OddStretchValues(count) => {
                write!(f, "stretch values must come in pairs, got {} values", count)
            }
            TenPatchError::StretchAreasUnset(axis) => {
                write!(f, "{} stretch areas must be set before drawing", axis)
            }
            TenPatchError::RegionUnset => write!(f, "no texture region set before drawing"),
            TenPatchError::Unsupported => {
                write!(f, "rotated/scaled drawing is not supported by ten-patch")
            }
            TenPatchError::Io { path, source } => {
                write!(f, "I/O error reading {}: {}", path.display(), source)
            }
            TenPatchError::Json { path, source } => {
                write!(f, "JSON parse error in {}: {}", path.display(), source)
            }
            TenPatchError::InvalidDefinition(msg) => write!(f, "invalid definition: {}", msg),
        }
    }
}

impl std::error::Error for TenPatchError {}
