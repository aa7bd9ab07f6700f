//! Selection Input Validation

use crate::error::SelectionError;
use crate::view::FeatureView;

/// Check every precondition of a selection call before any work is done
pub(crate) fn check_inputs(
    k: usize,
    view: &FeatureView<'_>,
    class: &[f64],
    weights: &[f64],
) -> Result<(), SelectionError> {
    let n_samples = view.n_samples();
    if n_samples == 0 {
        return Err(SelectionError::NoSamples);
    }
    if k == 0 || k > view.n_features() {
        return Err(SelectionError::InvalidK {
            k,
            n_features: view.n_features(),
        });
    }
    check_length("class column", n_samples, class.len())?;
    check_length("weight vector", n_samples, weights.len())?;

    if let Some((index, &value)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| !w.is_finite() || **w < 0.0)
    {
        return Err(SelectionError::InvalidWeight { index, value });
    }
    Ok(())
}

fn check_length(what: &'static str, expected: usize, actual: usize) -> Result<(), SelectionError> {
    if expected != actual {
        Err(SelectionError::LengthMismatch {
            what,
            expected,
            actual,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: [f64; 6] = [0.0, 1.0, 0.0, 1.0, 1.0, 0.0];

    fn view() -> FeatureView<'static> {
        FeatureView::from_column_major(&DATA, 3, 2).unwrap()
    }

    #[test]
    fn test_valid_inputs() {
        assert!(check_inputs(2, &view(), &[0.0, 1.0, 0.0], &[1.0; 3]).is_ok());
    }

    #[test]
    fn test_k_out_of_range() {
        let err = check_inputs(0, &view(), &[0.0; 3], &[1.0; 3]).unwrap_err();
        assert_eq!(err, SelectionError::InvalidK { k: 0, n_features: 2 });
        assert!(check_inputs(3, &view(), &[0.0; 3], &[1.0; 3]).is_err());
    }

    #[test]
    fn test_no_samples() {
        let empty = FeatureView::from_column_major(&[], 0, 4).unwrap();
        assert_eq!(check_inputs(1, &empty, &[], &[]), Err(SelectionError::NoSamples));
    }

    #[test]
    fn test_mismatched_class() {
        let err = check_inputs(1, &view(), &[0.0; 2], &[1.0; 3]).unwrap_err();
        assert!(matches!(err, SelectionError::LengthMismatch { what: "class column", .. }));
    }

    #[test]
    fn test_negative_weight() {
        let err = check_inputs(1, &view(), &[0.0; 3], &[1.0, -0.5, 1.0]).unwrap_err();
        assert_eq!(err, SelectionError::InvalidWeight { index: 1, value: -0.5 });
    }

    #[test]
    fn test_nan_weight() {
        let err = check_inputs(1, &view(), &[0.0; 3], &[1.0, 1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, SelectionError::InvalidWeight { index: 2, .. }));
    }
}
