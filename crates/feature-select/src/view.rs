//! Column-major Feature Matrix View

use crate::error::SelectionError;
use ndarray::ArrayView2;

/// Read-only view of a `samples x features` matrix stored column by column.
///
/// Every feature is a contiguous slice of the underlying buffer, so
/// [`FeatureView::column`] is O(1) and never copies.
#[derive(Debug, Clone, Copy)]
pub struct FeatureView<'a> {
    data: &'a [f64],
    n_samples: usize,
    n_features: usize,
}

impl<'a> FeatureView<'a> {
    /// Wrap a column-major buffer: feature `j` occupies
    /// `data[j * n_samples..(j + 1) * n_samples]`
    pub fn from_column_major(
        data: &'a [f64],
        n_samples: usize,
        n_features: usize,
    ) -> Result<Self, SelectionError> {
        let expected = n_samples.checked_mul(n_features).ok_or(SelectionError::LengthMismatch {
            what: "feature matrix",
            expected: usize::MAX,
            actual: data.len(),
        })?;
        if data.len() != expected {
            return Err(SelectionError::LengthMismatch {
                what: "feature matrix",
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            n_samples,
            n_features,
        })
    }

    /// Wrap an ndarray view with shape `(samples, features)`.
    ///
    /// The view must be in column-major (Fortran) order, e.g. built with
    /// `ShapeBuilder::f()` or by transposing a row-per-feature array.
    pub fn from_array(array: ArrayView2<'a, f64>) -> Result<Self, SelectionError> {
        let (n_samples, n_features) = array.dim();
        let data = array
            .reversed_axes()
            .to_slice()
            .ok_or(SelectionError::NonContiguousColumns)?;
        Ok(Self {
            data,
            n_samples,
            n_features,
        })
    }

    /// Samples of feature `feature`
    ///
    /// # Panics
    ///
    /// Panics if `feature >= n_features()`.
    pub fn column(&self, feature: usize) -> &'a [f64] {
        let start = feature * self.n_samples;
        &self.data[start..start + self.n_samples]
    }

    /// Iterate over all feature columns in index order
    pub fn columns(&self) -> impl ExactSizeIterator<Item = &'a [f64]> + 'a {
        let view = *self;
        (0..self.n_features).map(move |j| view.column(j))
    }

    /// Number of samples (rows)
    pub fn n_samples(&self) -> usize {
        self.n_samples
    }

    /// Number of features (columns)
    pub fn n_features(&self) -> usize {
        self.n_features
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, ShapeBuilder};

    #[test]
    fn test_column_access() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let view = FeatureView::from_column_major(&data, 3, 2).unwrap();
        assert_eq!(view.column(0), &[1.0, 2.0, 3.0]);
        assert_eq!(view.column(1), &[4.0, 5.0, 6.0]);
        assert_eq!(view.columns().count(), 2);
    }

    #[test]
    fn test_column_borrows_buffer() {
        let data = vec![0.0; 8];
        let view = FeatureView::from_column_major(&data, 4, 2).unwrap();
        assert!(std::ptr::eq(view.column(1).as_ptr(), &data[4]));
    }

    #[test]
    fn test_length_mismatch() {
        let err = FeatureView::from_column_major(&[0.0; 5], 3, 2).unwrap_err();
        assert_eq!(
            err,
            SelectionError::LengthMismatch {
                what: "feature matrix",
                expected: 6,
                actual: 5
            }
        );
    }

    #[test]
    fn test_from_fortran_array() {
        let array = Array2::from_shape_vec((3, 2).f(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let view = FeatureView::from_array(array.view()).unwrap();
        assert_eq!(view.n_samples(), 3);
        assert_eq!(view.column(1), &[4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_row_major_array_rejected() {
        let array = Array2::from_shape_vec((3, 2), vec![1.0, 4.0, 2.0, 5.0, 3.0, 6.0]).unwrap();
        let err = FeatureView::from_array(array.view()).unwrap_err();
        assert_eq!(err, SelectionError::NonContiguousColumns);
    }
}
