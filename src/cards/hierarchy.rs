//! Replacement hierarchy.
//!
//! Which played card may evict which occupant from the pyramid:
//!
//! | new \ existing | ace | number    | jack | queen | king |
//! |----------------|-----|-----------|------|-------|------|
//! | ace            | yes | no        | yes  | yes   | yes  |
//! | number(v)      | yes | v >= rank | no   | no    | no   |
//! | jack           | yes | yes       | yes  | no    | no   |
//! | queen          | yes | yes       | yes  | yes   | no   |
//! | king           | yes | yes       | yes  | yes   | yes  |
//!
//! Aces close the cycle: beaten by every number, yet able to evict faces.

use super::card::{Card, CardKind};

/// Can `new` replace `existing` on the board?
///
/// Cards whose rank has no recognized kind never replace or get replaced.
#[must_use]
pub fn can_replace(new: &Card, existing: &Card) -> bool {
    let (Some(new_kind), Some(existing_kind)) = (new.kind(), existing.kind()) else {
        return false;
    };

    use CardKind::*;
    match (new_kind, existing_kind) {
        (King, _) => true,
        (_, Ace) => true,
        (Ace, Number) => false,
        (Ace, _) => true,
        (Number, Number) => new.rank >= existing.rank,
        (Number, _) => false,
        (Jack, Number | Jack) => true,
        (Jack, _) => false,
        (Queen, Number | Jack | Queen) => true,
        (Queen, _) => false,
    }
}
