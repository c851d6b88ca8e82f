//! Writes a pair of synthetic dumps (`dumps/0.txt`, `dumps/200.txt`) in the simulation's
//! format: two colliding flows on [-1, 1] with mirrored ghost particles at both walls.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};

const N_ALIVE: usize = 100;
const LIMIT: f64 = 1.0;
const V0: f64 = 1.0;
const MASS: f64 = 2.0 * LIMIT / N_ALIVE as f64;
const H: f64 = 0.04;
const GAMMA: f64 = 5.0 / 3.0;
const U0: f64 = 1.5;

#[derive(Clone)]
struct Particle {
    id: usize,
    ghost: bool,
    pos: f64,
    vel: f64,
    acc: f64,
    u: f64,
    density: f64,
}

/// Gaussian smoothing kernel in 1-D.
fn kernel(r: f64, h: f64) -> f64 {
    (-(r / h).powi(2)).exp() / (h * std::f64::consts::PI.sqrt())
}

fn compute_density(particles: &mut [Particle]) {
    let positions: Vec<f64> = particles.iter().map(|p| p.pos).collect();
    for p in particles.iter_mut() {
        p.density = positions.iter().map(|&x| MASS * kernel(p.pos - x, H)).sum();
    }
}

/// Evenly spaced alive particles plus ghosts mirrored about the outermost ones.
fn initial_state() -> Vec<Particle> {
    let spacing = 2.0 * LIMIT / (N_ALIVE - 1) as f64;
    let mut particles: Vec<Particle> = (0..N_ALIVE)
        .map(|i| {
            let pos = -LIMIT + spacing * i as f64;
            Particle {
                id: i,
                ghost: false,
                pos,
                vel: if pos < 0.0 { V0 } else { -V0 },
                acc: 0.0,
                u: U0,
                density: 0.0,
            }
        })
        .collect();

    let (left, right) = (-LIMIT, LIMIT);
    let mut ghosts = Vec::new();
    for p in &particles {
        let wall = if (p.pos - left).abs() < 3.0 * H && p.pos != left {
            left
        } else if (p.pos - right).abs() < 3.0 * H && p.pos != right {
            right
        } else {
            continue;
        };
        ghosts.push(Particle {
            id: N_ALIVE + ghosts.len(),
            ghost: true,
            pos: 2.0 * wall - p.pos,
            vel: -p.vel,
            ..p.clone()
        });
    }
    particles.extend(ghosts);
    compute_density(&mut particles);
    particles
}

/// A crude post-collision state: a hot, dense, stalled slab grows from the centre.
fn later_state(initial: &[Particle]) -> Vec<Particle> {
    let slab = 0.35;
    let mut particles: Vec<Particle> = initial
        .iter()
        .map(|p| {
            let mut q = p.clone();
            if q.pos.abs() < LIMIT {
                q.pos *= if q.pos.abs() < 0.6 { 0.55 } else { 1.0 };
            }
            if q.pos.abs() < slab {
                q.vel = 0.0;
                q.u = U0 + 0.5 * V0 * V0;
                q.acc = -q.pos.signum() * 0.2;
            }
            q
        })
        .collect();
    compute_density(&mut particles);
    particles
}

fn render(particles: &[Particle], time: f64) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# This file was dumped at t = {time}");
    let _ = writeln!(out, "# Column definitions:");
    let _ = writeln!(
        out,
        "# Particle ID / Type / Smoothing length / Density / Pressure / Acceleration / Velocity / Position / Thermal energy"
    );
    let _ = writeln!(out, "# Aligned definition 'tags' for easier reading:");
    let _ = writeln!(
        out,
        "# ID    TYPE     H          DENSITY  PRESS    ACCEL     VEL       POS       U"
    );
    for p in particles {
        let pressure = (GAMMA - 1.0) * p.density * p.u;
        let _ = writeln!(
            out,
            "{:4}    {}    {:3.5}    {:3.3}    {:3.3}    {:+3.3}    {:+3.3}    {:+3.3}    {:3.3}",
            p.id,
            if p.ghost { "Ghost" } else { "Alive" },
            H,
            p.density,
            pressure,
            p.acc,
            p.vel,
            p.pos,
            p.u
        );
    }
    out
}

fn main() -> Result<()> {
    let dir = Path::new("dumps");
    std::fs::create_dir_all(dir).context("creating ./dumps")?;

    let initial = initial_state();
    let later = later_state(&initial);

    for (step, time, particles) in [(0, 0.0, &initial), (200, 0.2, &later)] {
        let path = dir.join(format!("{step}.txt"));
        std::fs::write(&path, render(particles, time))
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Wrote {} particles to {}", particles.len(), path.display());
    }
    Ok(())
}
