use std::ops::Index;

use crate::math::Point2;

use super::label::PointLabel;

/// Named construction points derived so far.
///
/// Points are stored in an array indexed by [`PointLabel`]. Because labels
/// are produced in alphabetical order, the defined points always form a
/// prefix `A..` of the alphabet, tracked by a single counter.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSet {
    coords: [Point2; PointLabel::COUNT],
    defined: usize,
}

impl Default for PointSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PointSet {
    /// Creates an empty point set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            coords: [Point2::origin(); PointLabel::COUNT],
            defined: 0,
        }
    }

    /// Forgets every point.
    pub fn clear(&mut self) {
        self.coords = [Point2::origin(); PointLabel::COUNT];
        self.defined = 0;
    }

    /// Defines the next point.
    ///
    /// `label` must be the first undefined label; steps produce points in
    /// alphabetical order.
    pub fn define(&mut self, label: PointLabel, point: Point2) {
        debug_assert_eq!(
            label.index(),
            self.defined,
            "point {label} defined out of order"
        );
        self.coords[label.index()] = point;
        self.defined = self.defined.max(label.index() + 1);
    }

    /// Returns whether `label` has been derived.
    #[must_use]
    pub fn is_defined(&self, label: PointLabel) -> bool {
        label.index() < self.defined
    }

    /// Returns the point for `label`, if derived.
    #[must_use]
    pub fn get(&self, label: PointLabel) -> Option<Point2> {
        self.is_defined(label).then_some(self.coords[label.index()])
    }

    /// Number of derived points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.defined
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defined == 0
    }

    /// Iterates over the derived points in production order.
    pub fn iter(&self) -> impl Iterator<Item = (PointLabel, Point2)> + '_ {
        PointLabel::ALL
            .iter()
            .zip(self.coords.iter())
            .take(self.defined)
            .map(|(label, point)| (*label, *point))
    }
}

impl Index<PointLabel> for PointSet {
    type Output = Point2;

    /// Steps only read points produced by earlier steps.
    fn index(&self, label: PointLabel) -> &Point2 {
        debug_assert!(self.is_defined(label), "point {label} read before definition");
        &self.coords[label.index()]
    }
}
