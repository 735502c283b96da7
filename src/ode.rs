//! Fixed-step integrators for simulating plant dynamics.
//!
//! Both integrators advance a state vector of `N` scalars by a single step.
//! The derivative function receives the state and the current time and
//! returns the time derivative of each component.

use num_traits::float::FloatCore;

/// Advances `state` by one forward Euler step of size `dt`.
pub fn euler_step<T, F, const N: usize>(f: F, state: [T; N], t: T, dt: T) -> [T; N]
where
    T: FloatCore,
    F: Fn(&[T; N], T) -> [T; N],
{
    add_scaled(&state, &f(&state, t), dt)
}

/// Advances `state` by one classical fourth-order Runge-Kutta step of size
/// `dt`.
///
/// Four derivative evaluations per step; error per step is on the order of
/// `dt^5`, which is adequate for smooth plant models at control-loop rates.
pub fn rk4_step<T, F, const N: usize>(f: F, state: [T; N], t: T, dt: T) -> [T; N]
where
    T: FloatCore,
    F: Fn(&[T; N], T) -> [T; N],
{
    let two = T::one() + T::one();
    let six = two * (two + T::one());
    let half_dt = dt / two;

    let k1 = f(&state, t);
    let k2 = f(&add_scaled(&state, &k1, half_dt), t + half_dt);
    let k3 = f(&add_scaled(&state, &k2, half_dt), t + half_dt);
    let k4 = f(&add_scaled(&state, &k3, dt), t + dt);

    let mut next = state;
    for i in 0..N {
        next[i] = state[i] + (k1[i] + two * k2[i] + two * k3[i] + k4[i]) * dt / six;
    }
    next
}

fn add_scaled<T: FloatCore, const N: usize>(base: &[T; N], dir: &[T; N], scale: T) -> [T; N] {
    let mut out = *base;
    for i in 0..N {
        out[i] = base[i] + dir[i] * scale;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    // dx/dt = -x, x(0) = 1, so x(t) = e^-t.
    fn decay(state: &[f64; 1], _t: f64) -> [f64; 1] {
        [-state[0]]
    }

    #[test]
    fn euler_step_is_first_order() {
        let next = euler_step(decay, [1.0], 0.0, 0.1);
        assert_eq!(next[0], 0.9);
    }

    #[test]
    fn rk4_step_matches_exponential_decay() {
        let next = rk4_step(decay, [1.0], 0.0, 0.1);
        // e^-0.1
        assert!((next[0] - 0.904837418).abs() < 1e-6);
    }

    #[test]
    fn rk4_tracks_decay_over_many_steps() {
        let dt = 0.01;
        let mut state = [1.0];
        for i in 0..100 {
            state = rk4_step(decay, state, i as f64 * dt, dt);
        }
        // e^-1
        assert!((state[0] - 0.36787944117144233).abs() < 1e-9);
    }

    #[test]
    fn constant_derivative_is_exact_for_both() {
        let ramp = |_: &[f64; 2], _: f64| [2.0, -3.0];

        let euler = euler_step(ramp, [0.0, 1.0], 0.0, 0.5);
        let rk4 = rk4_step(ramp, [0.0, 1.0], 0.0, 0.5);

        assert_eq!(euler, [1.0, -0.5]);
        assert_eq!(rk4, [1.0, -0.5]);
    }

    #[test]
    fn time_dependent_derivative_uses_midpoints() {
        // dx/dt = t, x(0) = 0, so x(t) = t^2 / 2. RK4 is exact here.
        let f = |_: &[f64; 1], t: f64| [t];
        let next = rk4_step(f, [0.0], 0.0, 1.0);
        assert!((next[0] - 0.5).abs() < 1e-12);
    }
}
