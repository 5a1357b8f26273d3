// Spatial embedding of Boyer-Lindquist radii for display

// ============================================================================
// OBLATE-SPHEROIDAL EMBEDDING
// ============================================================================

// Embed a Boyer-Lindquist point (r, θ, φ) into Cartesian display space
//
// Relations:
// - x = √(r² + a²) sin(θ) cos(φ)
// - y = √(r² + a²) sin(θ) sin(φ)
// - z = r cos(θ)
//
// This is the standard oblate-spheroidal mapping for Kerr spatial slices:
// a sphere of constant r flattens into an oblate spheroid whose equatorial
// bulge grows with the spin, and r = 0 maps onto a disc of radius a rather
// than a single point. The rotation axis is Z, the frame is right-handed.
//
// Total function: NaN radii from out-of-domain spins pass straight through
// to NaN coordinates.
pub fn bl_to_cartesian(r: f64, theta: f64, phi: f64, a: f64) -> [f64; 3] {
    let rho = equatorial_radius(r, a);

    let sin_theta = theta.sin();
    let cos_theta = theta.cos();

    [
        rho * sin_theta * phi.cos(),
        rho * sin_theta * phi.sin(),
        r * cos_theta,
    ]
}

// Cylindrical radius of the r = const surface in the equatorial plane
//
// √(r² + a²), the x-y distance at which a surface of Boyer-Lindquist
// radius r actually crosses z = 0 once the oblate embedding is applied.
#[inline]
pub fn equatorial_radius(r: f64, a: f64) -> f64 {
    (r * r + a * a).sqrt()
}
