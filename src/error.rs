//! Error types for layout validation and application-level operations.

/// A problem found in a single layout entry.
///
/// Issues are never fatal: the offending entry is skipped and the rest of the
/// layout still renders.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayoutIssue {
    /// The entry is not an object of the expected shape, e.g. `"x": "100"`.
    #[error("{kind} at index {index} is malformed: {reason}")]
    Malformed {
        /// `table` or `seat`
        kind: &'static str,
        /// Position of the entry in its array
        index: usize,
        /// Deserializer message
        reason: String,
    },
    /// The entry has an empty `id`.
    #[error("{kind} at index {index} has an empty id")]
    EmptyId {
        /// `table` or `seat`
        kind: &'static str,
        /// Position of the entry in its array
        index: usize,
    },
    /// Another entry earlier in the layout already uses this id.
    #[error("duplicate id {0:?}")]
    DuplicateId(String),
    /// A required coordinate or size field is absent.
    #[error("{id:?} is missing {field}")]
    MissingGeometry {
        /// Id of the skipped entry
        id: String,
        /// Name of the absent field
        field: &'static str,
    },
    /// A coordinate or size is NaN, infinite, or (for sizes) not positive.
    #[error("{id:?} has invalid {field}: {value}")]
    InvalidGeometry {
        /// Id of the skipped entry
        id: String,
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f32,
    },
    /// The table `type` is none of `rectangle`, `round`, `circle`.
    #[error("{id:?} has unknown table type {kind:?}")]
    UnknownTableType {
        /// Id of the skipped table
        id: String,
        /// The unrecognised `type`
        kind: String,
    },
}

/// Errors surfaced by the seating application (file and export operations).
#[derive(Debug, thiserror::Error)]
pub enum SeatingError {
    /// The document is not JSON, or not a layout object.
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing a file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// usvg rejected the generated SVG.
    #[error("failed to parse exported SVG: {0}")]
    Svg(#[from] usvg::Error),
    /// The raster size was zero or too large.
    #[error("failed to allocate a {width}x{height} pixmap")]
    Pixmap {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },
    /// tiny-skia could not encode the pixmap.
    #[error("failed to encode PNG: {0}")]
    Png(String),
    /// The background rasteriser task panicked or was cancelled.
    #[error("export task failed: {0}")]
    Task(String),
}
