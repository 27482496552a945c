//! Error types for grid construction and region merging.

use crate::region::RegionId;
use thiserror::Error;

/// Error types for layout operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// An argument was outside its valid domain (grid or surface dimensions,
    /// empty selection, unknown region id).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The selected regions cannot be combined into a single rectangle.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(#[from] MergeRejection),
}

/// The specific reason a merge was rejected.
///
/// The `Display` text is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MergeRejection {
    /// At least one region is not reachable from the first one through
    /// shared edges.
    #[error("regions are not fully connected")]
    NotConnected,

    /// The regions leave a gap inside their bounding box.
    #[error(
        "selected regions do not form a valid rectangle \
         (covered area {region_area:.1}, bounding area {bounding_area:.1})"
    )]
    NotRectangle { region_area: f64, bounding_area: f64 },

    /// Two regions cover the same area.
    #[error("regions {first} and {second} overlap")]
    Overlapping { first: RegionId, second: RegionId },
}

/// A rotation value that is not a multiple of 90 in `0..360`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid rotation {0}: expected 0, 90, 180 or 270")]
pub struct InvalidRotation(pub u16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages_name_the_reason() {
        let err = LayoutError::from(MergeRejection::NotConnected);
        assert_eq!(err.to_string(), "Invalid geometry: regions are not fully connected");

        let err = LayoutError::from(MergeRejection::Overlapping { first: 2, second: 7 });
        assert!(err.to_string().contains("regions 2 and 7 overlap"));

        let err = LayoutError::from(MergeRejection::NotRectangle {
            region_area: 300.0,
            bounding_area: 400.0,
        });
        assert!(err.to_string().contains("do not form a valid rectangle"));
    }

    #[test]
    fn test_invalid_rotation_message() {
        assert_eq!(
            InvalidRotation(45).to_string(),
            "Invalid rotation 45: expected 0, 90, 180 or 270"
        );
    }
}
