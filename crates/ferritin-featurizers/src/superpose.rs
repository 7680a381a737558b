//! Rigid-body superposition (Kabsch) and RMSD.
//!
//! [`align`] finds the rotation `R` and translation `t` minimizing
//! `sum_i |R * mobile_i + t - reference_i|^2` for two corresponding point sets.
//!
//! The rotation comes from the SVD of the covariance matrix of the centered point
//! sets. A sign correction on the smallest singular vector keeps `det(R) = +1`, so
//! the result is never a reflection. Rank-deficient inputs (collinear or coincident
//! points) still give a determinate transform; no configuration is rejected.
use crate::error::{FeaturizerError, Result};
use nalgebra::{Matrix3, Vector3};

#[derive(Clone, Debug, PartialEq)]
pub struct RigidTransform {
    pub rotation: Matrix3<f64>,
    pub translation: Vector3<f64>,
}

impl RigidTransform {
    pub fn apply_point(&self, point: &[f64; 3]) -> [f64; 3] {
        let moved = self.rotation * Vector3::from(*point) + self.translation;
        [moved.x, moved.y, moved.z]
    }
    pub fn apply(&self, coords: &[[f64; 3]]) -> Vec<[f64; 3]> {
        coords.iter().map(|point| self.apply_point(point)).collect()
    }
}

fn centroid(coords: &[[f64; 3]]) -> Vector3<f64> {
    let sum = coords
        .iter()
        .fold(Vector3::zeros(), |acc, point| acc + Vector3::from(*point));
    sum / coords.len() as f64
}

fn check_sizes(context: &'static str, mobile: &[[f64; 3]], reference: &[[f64; 3]]) -> Result<()> {
    if mobile.len() != reference.len() || mobile.is_empty() {
        return Err(FeaturizerError::DimensionMismatch {
            context,
            mobile: mobile.len(),
            reference: reference.len(),
        });
    }
    Ok(())
}

/// Optimal rigid transform moving `mobile` onto `reference`.
///
/// Points correspond by position. Fails with [`FeaturizerError::DimensionMismatch`]
/// if the sets differ in size or are empty.
pub fn align(mobile: &[[f64; 3]], reference: &[[f64; 3]]) -> Result<RigidTransform> {
    check_sizes("align", mobile, reference)?;

    let mobile_center = centroid(mobile);
    let reference_center = centroid(reference);

    let mut h: Matrix3<f64> = Matrix3::zeros();
    for (p, q) in mobile.iter().zip(reference) {
        let p = Vector3::from(*p) - mobile_center;
        let q = Vector3::from(*q) - reference_center;
        h += p * q.transpose();
    }

    let svd = h.svd(true, true);
    let smallest = svd.singular_values.imin();
    let rotation = match (svd.u, svd.v_t) {
        (Some(u), Some(v_t)) => {
            let mut rotation = v_t.transpose() * u.transpose();
            if rotation.determinant() < 0.0 {
                let mut v_t = v_t;
                v_t.row_mut(smallest).neg_mut();
                rotation = v_t.transpose() * u.transpose();
            }
            rotation
        }
        _ => Matrix3::identity(),
    };

    Ok(RigidTransform {
        rotation,
        translation: reference_center - rotation * mobile_center,
    })
}

/// RMSD between corresponding points, without any fitting.
pub fn rmsd(a: &[[f64; 3]], b: &[[f64; 3]]) -> Result<f64> {
    check_sizes("rmsd", a, b)?;
    let sum_sq: f64 = a
        .iter()
        .zip(b)
        .map(|(p, q)| (Vector3::from(*p) - Vector3::from(*q)).norm_squared())
        .sum();
    Ok((sum_sq / a.len() as f64).sqrt())
}

/// RMSD after optimally superposing `mobile` onto `reference`.
pub fn superposed_rmsd(mobile: &[[f64; 3]], reference: &[[f64; 3]]) -> Result<f64> {
    let transform = align(mobile, reference)?;
    rmsd(&transform.apply(mobile), reference)
}
