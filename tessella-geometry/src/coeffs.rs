//! Evaluation of the linear coefficient tables that parameterise a tiling
//! type's geometry.
//!
//! A coefficient row holds one coefficient per shape parameter followed by a
//! constant term, so a row is `params.len() + 1` entries long. The parameter
//! vector itself stays pure; the constant is read at its dedicated offset
//! rather than smuggled in as a trailing 1.0 parameter.

use crate::{point::Pt, xform::Xform};

/// One row: the dot product of the parameters with the coefficients at
/// `offs`, plus the trailing constant.
pub(crate) fn eval(coeffs: &[f64], offs: usize, params: &[f64]) -> f64 {
    let mut total = 0.0;
    for (i, p) in params.iter().enumerate() {
        total += coeffs[offs + i] * p;
    }
    total + coeffs[offs + params.len()]
}

/// Two consecutive rows as a point.
pub(crate) fn make_point(coeffs: &[f64], offs: usize, params: &[f64]) -> Pt {
    let k = params.len() + 1;
    Pt(eval(coeffs, offs, params), eval(coeffs, offs + k, params))
}

/// Six consecutive rows as an affine transform.
pub(crate) fn make_matrix(coeffs: &[f64], offs: usize, params: &[f64]) -> Xform {
    let k = params.len() + 1;
    let mut m = [0.0; 6];
    for (j, slot) in m.iter_mut().enumerate() {
        *slot = eval(coeffs, offs + j * k, params);
    }
    Xform(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn test_eval_constant_only() {
        assert_float_eq!(eval(&[7.5], 0, &[]), 7.5, abs <= 1e-12);
    }

    #[test]
    fn test_eval_reads_constant_at_trailing_offset() {
        // row = [2, 3, 10]: 2*p0 + 3*p1 + 10
        assert_float_eq!(eval(&[2.0, 3.0, 10.0], 0, &[1.0, -1.0]), 9.0, abs <= 1e-12);
    }

    #[test]
    fn test_make_point_consumes_two_rows() {
        let coeffs = [1.0, 0.0, 0.0, 2.0];
        let p = make_point(&coeffs, 0, &[0.25]);
        assert_float_eq!(p.x.0, 0.25, abs <= 1e-12);
        assert_float_eq!(p.y.0, 2.0, abs <= 1e-12);
    }

    #[test]
    fn test_make_matrix_row_layout() {
        // identity with a parameter-driven translation column
        let coeffs = [
            0.0, 1.0, // a
            0.0, 0.0, // b
            1.0, 0.0, // c = p0
            0.0, 0.0, // d
            0.0, 1.0, // e
            -2.0, 0.0, // f = -2*p0
        ];
        let m = make_matrix(&coeffs, 0, &[0.5]);
        assert_eq!(m, Xform([1.0, 0.0, 0.5, 0.0, 1.0, -1.0]));
    }

    #[test]
    fn test_offset_indexing() {
        let coeffs = [9.0, 9.0, 9.0, 4.0, 0.0, -1.0];
        let p = make_point(&coeffs, 2, &[0.5]);
        assert_float_eq!(p.x.0, 8.5, abs <= 1e-12);
        assert_float_eq!(p.y.0, -1.0, abs <= 1e-12);
    }
}
