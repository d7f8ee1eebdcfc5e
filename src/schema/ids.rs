//! Newtype IDs for the dataset entities.
//!
//! COCO files identify everything by plain integers. Wrapping each kind of
//! ID in its own newtype prevents accidentally passing an image ID where a
//! category ID is expected, while `#[serde(transparent)]` keeps the wire
//! format a bare JSON number.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl $name {
            /// Wraps a raw integer ID.
            #[inline]
            pub fn new(id: u64) -> Self {
                Self(id)
            }

            /// Returns the underlying integer value.
            #[inline]
            pub fn as_u64(&self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_type!(
    /// Identifier of an image within a dataset's image list.
    ImageId
);

id_type!(
    /// Identifier of an annotation within a dataset's annotation list.
    AnnotationId
);

id_type!(
    /// Identifier of a category within a dataset's category list.
    CategoryId
);

id_type!(
    /// Identifier of a license within a dataset's license list.
    LicenseId
);

id_type!(
    /// Identifier of a segment within a panoptic segmentation mask.
    SegmentId
);
