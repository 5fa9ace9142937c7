//! Column normalization: maps arbitrary source column names onto the
//! canonical field set defined by an [`AliasTable`].
//!
//! The mapping itself is an exact ordered lookup — first alias present in
//! the source wins, and a source column claimed by an earlier canonical
//! field cannot be claimed again. Fuzzy similarity is used only to attach
//! "did you mean" suggestions to fields that found nothing.

mod normalize;

pub use normalize::{SUGGESTION_THRESHOLD, normalize};
