//! Shared helpers for integration tests.

use maze_pursuit::game::Simulation;

/// A frame at 64 ticks per second. Exactly representable in binary, so
/// position arithmetic in tests stays bit-stable.
pub const DT: f32 = 1.0 / 64.0;

pub fn stock_simulation() -> Simulation {
    Simulation::stock(42).expect("stock simulation should construct")
}

pub fn run_ticks(sim: &mut Simulation, ticks: usize, dt: f32) {
    for _ in 0..ticks {
        sim.tick(dt);
    }
}
