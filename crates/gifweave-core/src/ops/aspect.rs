//! Aspect-ratio helpers for choosing output sizes.
//!
//! Sizes follow a reference image: when one edge is chosen, the other is
//! derived as `round(edge * other_ref / edge_ref)` and clamped to a
//! [`SizeRange`].

use serde::{Deserialize, Serialize};

use crate::sequence::Size;

/// Allowed range for a single output dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeRange {
    pub min: u32,
    pub max: u32,
}

impl Default for SizeRange {
    fn default() -> Self {
        Self { min: 16, max: 4096 }
    }
}

impl SizeRange {
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max.max(self.min))
    }

    fn clamp_rounded(&self, value: f64) -> u32 {
        let max = self.max.max(self.min);
        if value.is_nan() || value <= self.min as f64 {
            self.min
        } else if value >= max as f64 {
            max
        } else {
            value.round() as u32
        }
    }
}

/// Height that keeps `reference`'s aspect ratio at `width`.
///
/// Returns `None` if `reference` has a zero dimension.
pub fn height_for_width(width: u32, reference: Size, range: SizeRange) -> Option<u32> {
    if reference.is_empty() {
        return None;
    }
    let height = (width as f64 * reference.height as f64 / reference.width as f64).round();
    Some(range.clamp_rounded(height))
}

/// Width that keeps `reference`'s aspect ratio at `height`.
///
/// Returns `None` if `reference` has a zero dimension.
pub fn width_for_height(height: u32, reference: Size, range: SizeRange) -> Option<u32> {
    if reference.is_empty() {
        return None;
    }
    let width = (height as f64 * reference.width as f64 / reference.height as f64).round();
    Some(range.clamp_rounded(width))
}

/// The size aspect calculations follow.
///
/// An explicitly inspected image wins; otherwise the first image of the
/// working set is used. Empty sizes are ignored.
pub fn reference_size(inspected: Option<Size>, working_set: &[Size]) -> Option<Size> {
    inspected
        .filter(|s| !s.is_empty())
        .or_else(|| working_set.first().copied().filter(|s| !s.is_empty()))
}

/// Resolve a requested output size against a reference.
///
/// - Neither edge requested: `None`, meaning keep the native size.
/// - `keep_aspect` with a reference: the requested width drives the height
///   (or the height drives the width when only a height is given).
/// - Otherwise a missing edge is taken from the reference.
///
/// Every returned edge is clamped to `range`. Returns `None` when an edge is
/// missing and there is no reference to fill it from.
pub fn resolve_target_size(
    width: Option<u32>,
    height: Option<u32>,
    keep_aspect: bool,
    reference: Option<Size>,
    range: SizeRange,
) -> Option<Size> {
    if width.is_none() && height.is_none() {
        return None;
    }

    if keep_aspect {
        if let Some(reference) = reference.filter(|r| !r.is_empty()) {
            return match (width, height) {
                (Some(w), _) => {
                    let w = range.clamp(w);
                    height_for_width(w, reference, range).map(|h| Size::new(w, h))
                }
                (None, Some(h)) => {
                    let h = range.clamp(h);
                    width_for_height(h, reference, range).map(|w| Size::new(w, h))
                }
                (None, None) => None,
            };
        }
    }

    let width = width.or(reference.map(|r| r.width))?;
    let height = height.or(reference.map(|r| r.height))?;
    Some(Size::new(range.clamp(width), range.clamp(height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_height_for_width() {
        let reference = Size::new(400, 300);
        assert_eq!(height_for_width(200, reference, SizeRange::default()), Some(150));
        assert_eq!(height_for_width(333, reference, SizeRange::default()), Some(250));
    }

    #[test]
    fn test_width_for_height() {
        let reference = Size::new(400, 300);
        assert_eq!(width_for_height(150, reference, SizeRange::default()), Some(200));
    }

    #[test]
    fn test_derived_edge_is_clamped() {
        let wide = Size::new(1000, 10);
        assert_eq!(height_for_width(100, wide, SizeRange::default()), Some(16));

        let tall = Size::new(10, 1000);
        assert_eq!(height_for_width(100, tall, SizeRange::default()), Some(4096));
    }

    #[test]
    fn test_empty_reference() {
        assert_eq!(height_for_width(100, Size::new(0, 10), SizeRange::default()), None);
        assert_eq!(width_for_height(100, Size::new(10, 0), SizeRange::default()), None);
    }

    #[test]
    fn test_reference_size_priority() {
        let set = [Size::new(10, 20), Size::new(30, 40)];
        assert_eq!(reference_size(Some(Size::new(5, 5)), &set), Some(Size::new(5, 5)));
        assert_eq!(reference_size(None, &set), Some(Size::new(10, 20)));
        assert_eq!(reference_size(Some(Size::new(0, 5)), &set), Some(Size::new(10, 20)));
        assert_eq!(reference_size(None, &[]), None);
    }

    #[test]
    fn test_resolve_nothing_requested() {
        let reference = Some(Size::new(100, 50));
        assert_eq!(resolve_target_size(None, None, true, reference, SizeRange::default()), None);
    }

    #[test]
    fn test_resolve_keep_aspect() {
        let reference = Some(Size::new(400, 200));
        let range = SizeRange::default();

        assert_eq!(
            resolve_target_size(Some(100), None, true, reference, range),
            Some(Size::new(100, 50))
        );
        assert_eq!(
            resolve_target_size(None, Some(100), true, reference, range),
            Some(Size::new(200, 100))
        );
        // Width wins when both are given.
        assert_eq!(
            resolve_target_size(Some(100), Some(999), true, reference, range),
            Some(Size::new(100, 50))
        );
    }

    #[test]
    fn test_resolve_free_size() {
        let reference = Some(Size::new(400, 200));
        let range = SizeRange::default();

        assert_eq!(
            resolve_target_size(Some(100), Some(999), false, reference, range),
            Some(Size::new(100, 999))
        );
        assert_eq!(
            resolve_target_size(Some(100), None, false, reference, range),
            Some(Size::new(100, 200))
        );
        assert_eq!(resolve_target_size(Some(100), None, false, None, range), None);
        assert_eq!(
            resolve_target_size(Some(1), Some(99999), false, None, range),
            Some(Size::new(16, 4096))
        );
    }

    #[test]
    fn test_resolve_keep_aspect_without_reference() {
        let range = SizeRange::default();
        assert_eq!(
            resolve_target_size(Some(64), Some(32), true, None, range),
            Some(Size::new(64, 32))
        );
    }
}
