//! Coordinate rows and ordered point sets.

use smallvec::SmallVec;

/// A spacetime point: component 0 is time, the rest are spatial.
///
/// Every lattice family lives in at most four dimensions, so points are
/// stored inline and never allocate.
pub type Point = SmallVec<[f64; 4]>;

/// An ordered set of points of a single dimension.
///
/// The point at index `i` carries causal label `i + 1`. Order is
/// significant: it is the label order the family's permutation refers to.
///
/// # Examples
///
/// ```
/// use lightcone_core::CoordinateSet;
///
/// let mut set = CoordinateSet::new(2);
/// set.push_row(&[-1.0, 0.5]);
/// set.push_row(&[1.0, -0.5]);
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.bounds(0), Some((-1.0, 1.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CoordinateSet {
    dim: usize,
    points: Vec<Point>,
}

impl CoordinateSet {
    /// Create an empty set of `dim`-dimensional points.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            points: Vec::new(),
        }
    }

    /// Create an empty set with room for `capacity` points.
    pub fn with_capacity(dim: usize, capacity: usize) -> Self {
        Self {
            dim,
            points: Vec::with_capacity(capacity),
        }
    }

    /// Build a set from rows, multiplying every component by `scale`.
    ///
    /// Used by lattice families whose sites are integer or rational
    /// multiples of a single length.
    pub fn from_scaled_rows<R: AsRef<[f64]>>(dim: usize, rows: &[R], scale: f64) -> Self {
        let mut set = Self::with_capacity(dim, rows.len());
        for row in rows {
            set.push(row.as_ref().iter().map(|v| v * scale).collect());
        }
        set
    }

    /// Append a point. Its label is the new length of the set.
    pub fn push(&mut self, point: Point) {
        debug_assert_eq!(
            point.len(),
            self.dim,
            "point {point:?} does not match set dimension {}",
            self.dim
        );
        self.points.push(point);
    }

    /// Append a point given as a slice.
    pub fn push_row(&mut self, row: &[f64]) {
        self.push(Point::from_slice(row));
    }

    /// Number of components per point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the set holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in label order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The point with 1-based causal `label`, if present.
    pub fn by_label(&self, label: u32) -> Option<&Point> {
        let idx = (label as usize).checked_sub(1)?;
        self.points.get(idx)
    }

    /// Iterate points in label order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Time components in label order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p[0])
    }

    /// Apply `f` to component `axis` of every point.
    ///
    /// Out-of-range axes are ignored.
    pub fn map_axis(&mut self, axis: usize, mut f: impl FnMut(f64) -> f64) {
        if axis >= self.dim {
            return;
        }
        for p in &mut self.points {
            p[axis] = f(p[axis]);
        }
    }

    /// Minimum and maximum of component `axis`, or `None` for an empty set
    /// or an out-of-range axis.
    pub fn bounds(&self, axis: usize) -> Option<(f64, f64)> {
        if axis >= self.dim {
            return None;
        }
        let mut it = self.points.iter().map(|p| p[axis]);
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }

    /// A new set holding the points for which `keep` returns true, in order.
    pub fn filtered(&self, mut keep: impl FnMut(&Point) -> bool) -> Self {
        Self {
            dim: self.dim,
            points: self.points.iter().filter(|p| keep(p)).cloned().collect(),
        }
    }

    /// Distinct time values, ascending. Values within `tol` are merged.
    pub fn layers(&self, tol: f64) -> Vec<f64> {
        let mut ts: Vec<f64> = self.times().collect();
        ts.sort_by(f64::total_cmp);
        ts.dedup_by(|a, b| (*a - *b).abs() <= tol);
        ts
    }

    /// Convert into nested vectors, one per point.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.points.iter().map(|p| p.to_vec()).collect()
    }
}

impl<'a> IntoIterator for &'a CoordinateSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn sample() -> CoordinateSet {
        let mut s = CoordinateSet::new(3);
        s.push_row(&[0.0, 1.0, -2.0]);
        s.push_row(&[1.0, -1.0, 4.0]);
        s.push_row(&[0.0, 3.0, 0.0]);
        s
    }

    #[test]
    fn labels_are_one_based() {
        let s = sample();
        assert_eq!(s.by_label(1).map(|p| p[2]), Some(-2.0));
        assert_eq!(s.by_label(3).map(|p| p[1]), Some(3.0));
        assert!(s.by_label(0).is_none());
        assert!(s.by_label(4).is_none());
    }

    #[test]
    fn bounds_per_axis() {
        let s = sample();
        assert_eq!(s.bounds(0), Some((0.0, 1.0)));
        assert_eq!(s.bounds(1), Some((-1.0, 3.0)));
        assert_eq!(s.bounds(2), Some((-2.0, 4.0)));
        assert_eq!(s.bounds(3), None);
        assert_eq!(CoordinateSet::new(2).bounds(0), None);
    }

    #[test]
    fn map_axis_touches_one_component() {
        let mut s = sample();
        s.map_axis(1, |v| -v);
        assert_eq!(s.points()[0].as_slice(), &[0.0, -1.0, -2.0]);
        assert_eq!(s.points()[2].as_slice(), &[0.0, -3.0, 0.0]);
        s.map_axis(7, |_| f64::NAN);
        assert!(s.iter().all(|p| p.iter().all(|v| v.is_finite())));
    }

    #[test]
    fn from_scaled_rows_multiplies_all_components() {
        let s = CoordinateSet::from_scaled_rows(2, &[[1.0, -2.0], [0.5, 0.0]], 0.5);
        let first: Point = smallvec![0.5, -1.0];
        assert_eq!(s.points()[0], first);
        assert_eq!(s.points()[1].as_slice(), &[0.25, 0.0]);
    }

    #[test]
    fn filtered_keeps_order() {
        let s = sample().filtered(|p| p[0] == 0.0);
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[1][1], 3.0);
    }

    #[test]
    fn layers_merge_close_times() {
        let mut s = CoordinateSet::new(1);
        for t in [1.0, -1.0, 1.0 + 1e-12, 0.0, -1.0] {
            s.push_row(&[t]);
        }
        assert_eq!(s.layers(1e-9), vec![-1.0, 0.0, 1.0]);
    }
}
