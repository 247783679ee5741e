//! Random barrier placement.

use rand::Rng;

use crate::cell::Role;
use crate::grid::Grid;

impl Grid {
    /// Turn each free cell into a barrier with probability `density`
    /// (clamped to `[0, 1]`). Start and End are left alone.
    ///
    /// Returns the number of barriers placed.
    pub fn scatter_barriers(&mut self, rng: &mut impl Rng, density: f64) -> usize {
        let density = density.clamp(0.0, 1.0);
        let mut placed = 0;
        for i in 0..self.len() {
            let p = self.point(i);
            if self.role(p) != Some(Role::Free) {
                continue;
            }
            if rng.random_bool(density) && self.set_role(p, Role::Barrier).unwrap_or(false) {
                placed += 1;
            }
        }
        log::debug!("scattered {placed} barriers at density {density:.2}");
        placed
    }
}
