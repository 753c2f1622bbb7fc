use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AlignmentError {
    #[error("Cannot align geometries of different size ({reference} vs {mobile} points)")]
    LengthMismatch { reference: usize, mobile: usize },
    #[error("Cannot align empty geometries")]
    Empty,
    #[error("Singular value decomposition of the covariance matrix failed")]
    Decomposition,
}

/// Optimal rigid-body superposition of a mobile geometry onto a reference geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Superposition {
    /// Proper rotation (determinant +1) applied to the centered mobile points.
    pub rotation: Matrix3<f64>,
    pub reference_centroid: Point3<f64>,
    pub mobile_centroid: Point3<f64>,
    /// RMSD between the reference and the superposed mobile points, in input length units.
    pub rmsd: f64,
}

impl Superposition {
    /// Maps a point from the mobile frame into the reference frame.
    pub fn transform(&self, point: &Point3<f64>) -> Point3<f64> {
        self.reference_centroid + self.rotation * (point - self.mobile_centroid)
    }
}

pub fn centroid(points: &[Point3<f64>]) -> Option<Point3<f64>> {
    if points.is_empty() {
        return None;
    }
    let sum = points
        .iter()
        .fold(Vector3::zeros(), |acc, p| acc + p.coords);
    Some(Point3::from(sum / points.len() as f64))
}

/// Plain RMSD between two coordinate sets, without any superposition.
pub fn calculate_rmsd(coords1: &[Point3<f64>], coords2: &[Point3<f64>]) -> Option<f64> {
    if coords1.len() != coords2.len() || coords1.is_empty() {
        return None;
    }
    let n = coords1.len() as f64;
    let squared_dist_sum: f64 = coords1
        .iter()
        .zip(coords2.iter())
        .map(|(p1, p2)| (p1 - p2).norm_squared())
        .sum();
    Some((squared_dist_sum / n).sqrt())
}

/// Finds the rotation and translation that best superpose `mobile` onto `reference`
/// (Kabsch algorithm).
///
/// The covariance matrix of the centered point sets is decomposed by SVD and the
/// rotation is corrected for reflections, so the result is always a proper rotation.
///
/// # Arguments
///
/// * `reference` - The fixed geometry.
/// * `mobile` - The geometry to superpose, with points in the same order as `reference`.
///
/// # Errors
///
/// Returns [`AlignmentError::LengthMismatch`] or [`AlignmentError::Empty`] for
/// incompatible inputs, and [`AlignmentError::Decomposition`] if the SVD does not
/// produce singular vectors.
pub fn kabsch_superposition(
    reference: &[Point3<f64>],
    mobile: &[Point3<f64>],
) -> Result<Superposition, AlignmentError> {
    if reference.len() != mobile.len() {
        return Err(AlignmentError::LengthMismatch {
            reference: reference.len(),
            mobile: mobile.len(),
        });
    }
    let reference_centroid = centroid(reference).ok_or(AlignmentError::Empty)?;
    let mobile_centroid = centroid(mobile).ok_or(AlignmentError::Empty)?;

    let covariance = mobile
        .iter()
        .zip(reference)
        .fold(Matrix3::zeros(), |acc, (m, r)| {
            acc + (m - mobile_centroid) * (r - reference_centroid).transpose()
        });

    let svd = covariance.svd(true, true);
    let u = svd.u.ok_or(AlignmentError::Decomposition)?;
    let v = svd.v_t.ok_or(AlignmentError::Decomposition)?.transpose();

    let d = if (v * u.transpose()).determinant() < 0.0 {
        -1.0
    } else {
        1.0
    };
    let rotation = v * Matrix3::from_diagonal(&Vector3::new(1.0, 1.0, d)) * u.transpose();

    let squared_dist_sum: f64 = mobile
        .iter()
        .zip(reference)
        .map(|(m, r)| {
            let moved = rotation * (m - mobile_centroid);
            (moved - (r - reference_centroid)).norm_squared()
        })
        .sum();
    let rmsd = (squared_dist_sum / reference.len() as f64).sqrt();

    Ok(Superposition {
        rotation,
        reference_centroid,
        mobile_centroid,
        rmsd,
    })
}

/// RMSD between two geometries after optimal rigid-body superposition.
pub fn kabsch_rmsd(
    reference: &[Point3<f64>],
    mobile: &[Point3<f64>],
) -> Result<f64, AlignmentError> {
    kabsch_superposition(reference, mobile).map(|s| s.rmsd)
}
