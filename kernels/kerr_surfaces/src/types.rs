// Black hole parameters and the characteristic surface radii

use std::f64::consts::FRAC_PI_2;

// ============================================================================
// ORBITAL CONFIGURATION TYPES
// ============================================================================

// Direction of orbital motion relative to black hole spin
//
// Physics: Frame dragging makes circular orbits direction-dependent.
// A prograde orbit (same sense as the spin) can sit much closer to the
// hole than a retrograde one; for a=0.9 the ISCO moves from ~2.3M down
// to ~8.7M depending on direction. The photon sphere splits the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrbitDirection {
    // Orbiting in the same direction as the black hole spin
    Prograde,

    // Orbiting opposite to the black hole spin
    Retrograde,
}

impl Default for OrbitDirection {
    fn default() -> Self {
        Self::Prograde
    }
}

impl OrbitDirection {
    // Sign convention used by the photon sphere and ISCO formulas:
    // minus selects the prograde branch, plus the retrograde one.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Self::Prograde => -1.0,
            Self::Retrograde => 1.0,
        }
    }
}

// ============================================================================
// BLACK HOLE DEFINITION
// ============================================================================

// A Kerr black hole with mass M and spin parameter a
//
// Physics concepts:
// - Mass (M): Sets the size scale. We use M=1 in "geometric units" where
//   G=c=1, so every radius below comes out in units of M.
// - Spin (a): Angular momentum per unit mass, a = J/M. Physical black
//   holes satisfy 0 ≤ a ≤ M, with a = M the extremal case where both
//   horizons merge at r = M.
//
// Spins beyond M describe a naked singularity and are NOT validated here:
// every radius below turns into NaN (the square roots and arccos go out
// of domain) and flows through mesh generation as NaN vertices without
// panicking. Callers that want hard rejection must check a ≤ M first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHole {
    // Mass in geometric units (M = 1 throughout the front end)
    pub mass: f64,

    // Spin parameter a, physically meaningful in [0, M]
    pub spin: f64,
}

impl BlackHole {
    // Create a black hole with explicit mass and spin
    pub fn new(mass: f64, spin: f64) -> Self {
        Self { mass, spin }
    }

    // Unit-mass black hole, the convention every display path uses
    pub fn with_spin(spin: f64) -> Self {
        Self::new(1.0, spin)
    }

    // Get the spin parameter a
    #[inline]
    pub fn a(&self) -> f64 {
        self.spin
    }

    // Check for the non-rotating (Schwarzschild) limit
    //
    // The display layer special-cases a = 0: inner horizon and both
    // ergosphere branches degenerate and get suppressed entirely.
    #[inline]
    pub fn is_schwarzschild(&self) -> bool {
        self.spin.abs() < 1e-10
    }

    // Both event horizon radii (r₊, r₋)
    //
    // Math: r± = M ± √(M² - a²), the roots of Δ = r² - 2Mr + a² = 0
    //
    // Limits:
    // - a=0 (Schwarzschild): (2M, 0)
    // - a=M (extremal): both roots meet at M
    // - a>M: NaN, there is no horizon to draw
    //
    // Note r₊ + r₋ = 2M for every physical spin.
    pub fn horizons(&self) -> (f64, f64) {
        let m = self.mass;
        let a = self.spin;
        let root = (m * m - a * a).sqrt();
        (m + root, m - root)
    }

    // Ergosphere radii (r_e₊, r_e₋) at polar angle θ
    //
    // Math: the horizon formula with a replaced by a·cos(θ):
    // r_e± = M ± √(M² - a²cos²θ)
    //
    // The outer branch is the static limit, the boundary inside which
    // nothing can hover without co-rotating. At the poles (θ = 0, π) both
    // branches touch the horizons; on the equator they reach (2M, 0).
    pub fn ergosphere_radii(&self, theta: f64) -> (f64, f64) {
        let m = self.mass;
        let ac = self.spin * theta.cos();
        let root = (m * m - ac * ac).sqrt();
        (m + root, m - root)
    }

    // Circular photon orbit radius for a given direction
    //
    // Math: r_ph = 2M(1 + cos((2/3)·arccos(∓a/M)))
    //
    // Limits:
    // - a=0: r_ph = 3M both ways
    // - a=M prograde: r_ph = M
    // - a=M retrograde: r_ph = 4M
    //
    // Prograde orbits sink toward the horizon as the spin grows,
    // retrograde ones are pushed out.
    pub fn photon_sphere_radius(&self, direction: OrbitDirection) -> f64 {
        let m = self.mass;
        let x = direction.sign() * self.spin / m;
        2.0 * m * (1.0 + ((2.0 / 3.0) * x.acos()).cos())
    }

    // ISCO radius for a given direction
    //
    // Math: Bardeen, Press & Teukolsky (1972):
    // - Z₁ = 1 + (1-a²/M²)^(1/3) × [(1+a/M)^(1/3) + (1-a/M)^(1/3)]
    // - Z₂ = √(3a²/M² + Z₁²)
    // - r_isco = M × (3 + Z₂ ± √[(3-Z₁)(3+Z₁+2Z₂)])
    //   where minus = prograde, plus = retrograde
    //
    // At a=0 both directions give exactly 6M. The prograde branch
    // decreases monotonically with spin (down to M at extremality), the
    // retrograde branch increases (up to 9M).
    pub fn isco_radius(&self, direction: OrbitDirection) -> f64 {
        let m = self.mass;

        // Special case: Schwarzschild (no spin = direction independent)
        if self.is_schwarzschild() {
            return 6.0 * m;
        }

        // Normalize spin to a/M (dimensionless ratio)
        let a_norm = self.spin / m;
        let a2 = a_norm * a_norm;

        // Z₁ and Z₂ are shared between the two branches
        let z1 = 1.0 + (1.0 - a2).powf(1.0 / 3.0)
            * ((1.0 + a_norm).powf(1.0 / 3.0)
            + (1.0 - a_norm).powf(1.0 / 3.0));
        let z2 = (3.0 * a2 + z1 * z1).sqrt();

        // The direction-dependent sign is the only difference
        m * (3.0 + z2 + direction.sign() * ((3.0 - z1) * (3.0 + z1 + 2.0 * z2)).sqrt())
    }

    // Radius of the ring singularity in the equatorial plane
    //
    // The Kerr singularity is a ring of Boyer-Lindquist radius 0 sitting
    // at cylindrical radius a. It collapses to the central point at a=0.
    #[inline]
    pub fn ring_singularity_radius(&self) -> f64 {
        self.spin
    }
}

// ============================================================================
// SURFACE TAXONOMY
// ============================================================================

// The seven characteristic surfaces the front end can display
//
// Each one is a surface of revolution around the spin axis. Five are
// spheres of constant Boyer-Lindquist radius; the two ergosphere
// branches vary with polar angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SurfaceKind {
    // Outer event horizon r₊
    OuterHorizon,

    // Inner (Cauchy) horizon r₋
    InnerHorizon,

    // Outer ergosphere / static limit (angle dependent)
    OuterErgosphere,

    // Inner ergosphere branch (angle dependent)
    InnerErgosphere,

    // Prograde circular photon orbit
    PhotonSphere,

    // Innermost stable circular orbit, prograde
    IscoPrograde,

    // Innermost stable circular orbit, retrograde
    IscoRetrograde,
}

impl SurfaceKind {
    // Display/stacking order, outermost controls first
    pub const ALL: [SurfaceKind; 7] = [
        SurfaceKind::OuterHorizon,
        SurfaceKind::InnerHorizon,
        SurfaceKind::OuterErgosphere,
        SurfaceKind::InnerErgosphere,
        SurfaceKind::PhotonSphere,
        SurfaceKind::IscoPrograde,
        SurfaceKind::IscoRetrograde,
    ];

    // Short display key used for labels and dump filenames
    pub fn key(&self) -> &'static str {
        match self {
            Self::OuterHorizon => "rs+",
            Self::InnerHorizon => "rs-",
            Self::OuterErgosphere => "re+",
            Self::InnerErgosphere => "re-",
            Self::PhotonSphere => "ro",
            Self::IscoPrograde => "isco+",
            Self::IscoRetrograde => "isco-",
        }
    }

    // Human-readable name for logs and the manifest
    pub fn name(&self) -> &'static str {
        match self {
            Self::OuterHorizon => "outer horizon",
            Self::InnerHorizon => "inner horizon",
            Self::OuterErgosphere => "outer ergosphere",
            Self::InnerErgosphere => "inner ergosphere",
            Self::PhotonSphere => "photon sphere",
            Self::IscoPrograde => "prograde ISCO",
            Self::IscoRetrograde => "retrograde ISCO",
        }
    }

    // Whether this surface needs the angle-dependent ergosphere profile
    #[inline]
    pub fn is_ergosphere(&self) -> bool {
        matches!(self, Self::OuterErgosphere | Self::InnerErgosphere)
    }

    // Boyer-Lindquist radius where this surface crosses the equator
    //
    // For the constant-radius surfaces this is the surface radius itself.
    // The ergosphere branches are evaluated at θ = π/2, giving (2M, 0).
    pub fn equatorial_radius(&self, hole: &BlackHole) -> f64 {
        match self {
            Self::OuterHorizon => hole.horizons().0,
            Self::InnerHorizon => hole.horizons().1,
            Self::OuterErgosphere => hole.ergosphere_radii(FRAC_PI_2).0,
            Self::InnerErgosphere => hole.ergosphere_radii(FRAC_PI_2).1,
            Self::PhotonSphere => hole.photon_sphere_radius(OrbitDirection::Prograde),
            Self::IscoPrograde => hole.isco_radius(OrbitDirection::Prograde),
            Self::IscoRetrograde => hole.isco_radius(OrbitDirection::Retrograde),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwarzschild_radii() {
        let hole = BlackHole::with_spin(0.0);
        let (r_plus, r_minus) = hole.horizons();
        assert!((r_plus - 2.0).abs() < 1e-12, "r+ should be 2M at a=0");
        assert!(r_minus.abs() < 1e-12, "r- should be 0 at a=0");
        assert!(
            (hole.photon_sphere_radius(OrbitDirection::Prograde) - 3.0).abs() < 1e-12,
            "photon sphere should be 3M at a=0"
        );
        assert!(
            (hole.photon_sphere_radius(OrbitDirection::Retrograde) - 3.0).abs() < 1e-12,
            "retrograde photon sphere should also be 3M at a=0"
        );
        assert!(
            (hole.isco_radius(OrbitDirection::Prograde) - 6.0).abs() < 1e-12,
            "ISCO should be 6M at a=0"
        );
        assert!(
            (hole.isco_radius(OrbitDirection::Retrograde) - 6.0).abs() < 1e-12,
            "retrograde ISCO should also be 6M at a=0"
        );
    }

    #[test]
    fn test_extremal_horizons_merge() {
        let (r_plus, r_minus) = BlackHole::with_spin(1.0).horizons();
        assert!((r_plus - 1.0).abs() < 1e-12, "extremal r+ should be M");
        assert!((r_minus - 1.0).abs() < 1e-12, "extremal r- should be M");
    }

    #[test]
    fn test_horizon_sum_and_ordering() {
        // r+ + r- = 2M and r+ > r- >= 0 for every sub-extremal spin
        for i in 0..100 {
            let a = i as f64 / 100.0;
            let (r_plus, r_minus) = BlackHole::with_spin(a).horizons();
            assert!(
                (r_plus + r_minus - 2.0).abs() < 1e-12,
                "horizon radii should sum to 2M at a={}",
                a
            );
            assert!(r_plus > r_minus, "r+ should exceed r- at a={}", a);
            assert!(r_minus >= 0.0, "r- should be non-negative at a={}", a);
        }
    }

    #[test]
    fn test_ergosphere_limits() {
        let hole = BlackHole::with_spin(0.7);

        // Equator: (2M, 0)
        let (re_plus, re_minus) = hole.ergosphere_radii(std::f64::consts::FRAC_PI_2);
        assert!((re_plus - 2.0).abs() < 1e-12, "outer ergosphere should reach 2M on the equator");
        assert!(re_minus.abs() < 1e-12, "inner ergosphere should reach 0 on the equator");

        // Poles: both branches touch the horizons
        let (r_plus, r_minus) = hole.horizons();
        let (pe_plus, pe_minus) = hole.ergosphere_radii(0.0);
        assert!((pe_plus - r_plus).abs() < 1e-12, "ergosphere should meet r+ at the pole");
        assert!((pe_minus - r_minus).abs() < 1e-12, "ergosphere should meet r- at the pole");
        let (se_plus, se_minus) = hole.ergosphere_radii(std::f64::consts::PI);
        assert!((se_plus - r_plus).abs() < 1e-9, "south pole should match too");
        assert!((se_minus - r_minus).abs() < 1e-9, "south pole should match too");
    }

    #[test]
    fn test_isco_monotonic_in_spin() {
        // Prograde ISCO strictly decreases with spin, retrograde increases
        let mut prev_pro = f64::INFINITY;
        let mut prev_retro = 0.0;
        for i in 0..99 {
            let a = i as f64 / 100.0;
            let hole = BlackHole::with_spin(a);
            let pro = hole.isco_radius(OrbitDirection::Prograde);
            let retro = hole.isco_radius(OrbitDirection::Retrograde);
            assert!(pro < prev_pro, "prograde ISCO should decrease through a={}", a);
            assert!(retro > prev_retro || a == 0.0, "retrograde ISCO should increase through a={}", a);
            prev_pro = pro;
            prev_retro = retro;
        }
    }

    #[test]
    fn test_surface_ordering_invariant() {
        // r+ <= r_ph(prograde) <= r_isco(prograde) for physical spins
        for i in 1..=100 {
            let a = i as f64 / 100.0;
            let hole = BlackHole::with_spin(a);
            let r_plus = hole.horizons().0;
            let r_ph = hole.photon_sphere_radius(OrbitDirection::Prograde);
            let r_isco = hole.isco_radius(OrbitDirection::Prograde);
            assert!(r_plus <= r_ph + 1e-12, "horizon should sit inside photon sphere at a={}", a);
            assert!(r_ph <= r_isco + 1e-12, "photon sphere should sit inside ISCO at a={}", a);
        }
    }

    #[test]
    fn test_rapid_spin_scenario() {
        // a = 0.8 reference values from the closed-form expressions
        let hole = BlackHole::with_spin(0.8);
        let (r_plus, r_minus) = hole.horizons();
        assert!((r_plus - 1.6).abs() < 1e-12, "r+ should be 1.6 at a=0.8");
        assert!((r_minus - 0.4).abs() < 1e-12, "r- should be 0.4 at a=0.8");
        assert!(
            (hole.photon_sphere_radius(OrbitDirection::Prograde) - 1.8111).abs() < 1e-3,
            "prograde photon sphere off at a=0.8"
        );
        assert!(
            (hole.isco_radius(OrbitDirection::Prograde) - 2.9066).abs() < 1e-3,
            "prograde ISCO off at a=0.8"
        );
        assert!(
            (hole.isco_radius(OrbitDirection::Retrograde) - 8.4320).abs() < 1e-3,
            "retrograde ISCO off at a=0.8"
        );
    }

    #[test]
    fn test_naked_singularity_propagates_nan() {
        // a > M is out of domain: radii must go NaN without panicking
        let hole = BlackHole::with_spin(1.5);
        let (r_plus, r_minus) = hole.horizons();
        assert!(r_plus.is_nan(), "r+ should be NaN beyond extremality");
        assert!(r_minus.is_nan(), "r- should be NaN beyond extremality");
        assert!(hole.photon_sphere_radius(OrbitDirection::Prograde).is_nan());
        assert!(hole.isco_radius(OrbitDirection::Retrograde).is_nan());
        // Off-equator ergosphere goes NaN once a·cosθ exceeds M
        assert!(hole.ergosphere_radii(0.1).0.is_nan());
        // On the equator the cos term vanishes, so the value stays finite
        assert!(hole.ergosphere_radii(std::f64::consts::FRAC_PI_2).0.is_finite());
    }

    #[test]
    fn test_surface_kind_equatorial_radii() {
        let hole = BlackHole::with_spin(0.8);
        assert_eq!(SurfaceKind::OuterHorizon.equatorial_radius(&hole), hole.horizons().0);
        assert_eq!(
            SurfaceKind::OuterErgosphere.equatorial_radius(&hole),
            hole.ergosphere_radii(std::f64::consts::FRAC_PI_2).0
        );
        assert_eq!(
            SurfaceKind::IscoRetrograde.equatorial_radius(&hole),
            hole.isco_radius(OrbitDirection::Retrograde)
        );
        assert_eq!(SurfaceKind::ALL.len(), 7);
    }
}
