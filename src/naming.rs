//! File-name derivation for uploaded photos.
//!
//! Names are keyed on the photo's like-count. The first photo in a run
//! with a given count is named `<count>.jpg`; any later photo with the
//! same count gets the upload date appended: `<count>_<YYYYMMDD>.jpg`.
//! Two photos sharing both count and upload date still collide; the
//! scheme stops at one level of disambiguation.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::vk::PhotoSize;

/// Picks the variant with the most pixels. The size-class label is not
/// consulted because VK's letter codes do not sort by area. On a tie
/// the first variant encountered wins.
pub fn largest_variant(sizes: &[PhotoSize]) -> Option<&PhotoSize> {
    let mut best: Option<(&PhotoSize, u64)> = None;

    for size in sizes {
        let area = u64::from(size.width) * u64::from(size.height);
        match best {
            Some((_, best_area)) if area <= best_area => {}
            _ => best = Some((size, area)),
        }
    }

    best.map(|(size, _)| size)
}

/// Derives the destination file name for a photo.
///
/// `seen_like_counts` holds the like-counts already used this run. The
/// caller owns the set and threads it through every call in processing
/// order; that ordering is what makes collision detection
/// deterministic.
pub fn file_name(
    like_count: u64,
    upload_date: NaiveDate,
    seen_like_counts: &mut HashSet<u64>,
) -> String {
    if seen_like_counts.insert(like_count) {
        format!("{like_count}.jpg")
    } else {
        format!("{}_{}.jpg", like_count, upload_date.format("%Y%m%d"))
    }
}
