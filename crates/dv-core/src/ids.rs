//! Typed integer wrappers for the two kinds of index the engine passes
//! around.
//!
//! The inner integer is `pub` so [`segments`](crate::segments) and the stop
//! records can build them directly.  An absent value is `Option<_>`, never a
//! sentinel.

macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a slice index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

typed_id! {
    /// Index of a segment within a polyline: segment `i` runs from vertex `i`
    /// to vertex `i + 1`.
    pub struct SegmentIndex(u32);
}

typed_id! {
    /// GTFS `direction_id` of a route variant (usually 0 or 1).
    pub struct DirectionId(u8);
}
