use std::f64::consts::PI;

use crate::layout::{LayoutError, PlacedItem, Position};
use crate::types::MusicDatum;

/// One point of the spherical distribution, with the angles it was derived
/// from kept alongside the Cartesian position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpherePoint {
    pub phi: f64,
    pub theta: f64,
    pub position: [f64; 3],
}

/// Distributes `n` points over a sphere's surface.
///
/// For index `i`: `phi = acos(-1 + 2i/n)`, `theta = sqrt(n·π) · phi`, placed
/// at `radius · (cosθ·sinφ, sinθ·sinφ, cosφ)`. The planet scenes depend on
/// this exact index-to-angle mapping for visual balance at small `n`, so it
/// is not interchangeable with other equal-area samplings. `phi` runs from π
/// downward as `i` grows; `n = 1` lands on `phi = π` exactly.
pub fn sphere_surface(n: usize, radius: f64) -> Result<Vec<SpherePoint>, LayoutError> {
    if !(radius > 0.0) {
        return Err(LayoutError::InvalidRadius(radius));
    }
    if n == 0 {
        return Ok(Vec::new());
    }

    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let phi = (-1.0 + (2.0 * i as f64) / n as f64).acos();
        let theta = (n as f64 * PI).sqrt() * phi;
        points.push(SpherePoint {
            phi,
            theta,
            position: [
                radius * theta.cos() * phi.sin(),
                radius * theta.sin() * phi.sin(),
                radius * phi.cos(),
            ],
        });
    }
    Ok(points)
}

/// Places a batch on a sphere's surface, sizing each item through the
/// caller-supplied `(datum, weight) → size` mapping.
///
/// The engine carries no feature-to-size tables of its own; weights are
/// whatever measure the caller derived (a genre's share, an artist's rank).
pub fn place_on_sphere<F>(
    data: &[MusicDatum],
    weights: &[f64],
    radius: f64,
    size: F,
) -> Result<Vec<PlacedItem>, LayoutError>
where
    F: Fn(&MusicDatum, f64) -> f64,
{
    if weights.len() != data.len() {
        return Err(LayoutError::WeightMismatch {
            expected: data.len(),
            got: weights.len(),
        });
    }

    let points = sphere_surface(data.len(), radius)?;
    let items = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let [x, y, z] = point.position;
            PlacedItem {
                datum: i,
                position: Position::Space { x, y, z },
                footprint: size(&data[i], weights[i]),
                rotation: 0.0,
                opacity: 1.0,
                style: 0,
                depth: z,
            }
        })
        .collect();
    Ok(items)
}
