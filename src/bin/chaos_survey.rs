//! Chaos Survey: One Pass Over Every Map Family
//!
//! Prints the headline diagnostics of each system for one configuration:
//!
//! 1. Logistic map: orbit tail, Lyapunov exponent, bifurcation branches
//! 2. Hénon map: attractor extent and dominant-stretch exponent
//! 3. Standard map: rotation number and K stability transition
//! 4. Coupled map lattices: final-state statistics and dominant mode
//!
//! Usage: `chaos_survey [config.json]`

use std::error::Error;

use chaos_dynamics::{
    attractor,
    cobweb,
    logistic_bifurcation,
    lyapunov_exponent,
    mean_power_spectrum,
    phase_portrait,
    rotation_number,
    stability_transition,
    Coupling,
    CoupledMapLattice,
    ExplorerConfig,
    StandardMap,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn load_config() -> Result<ExplorerConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)?;
            Ok(ExplorerConfig::from_json(&json)?)
        }
        None => Ok(ExplorerConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("═══════════════════════════════════════════════════════════════");
    println!("  Chaos Survey: Logistic, Hénon, Standard Map, Coupled Lattices");
    println!("═══════════════════════════════════════════════════════════════\n");

    let config = load_config()?;

    // ── Logistic map ────────────────────────────────────────────────
    let logistic = config.logistic_map();
    println!("Logistic map (r = {:.3}, x0 = {:.3})", logistic.r, config.logistic.x0);

    let web = cobweb(&logistic, config.logistic.x0, config.logistic.iterations);
    if let Some(last) = web.last() {
        println!("  Cobweb: {} pairs, last (x, f(x)) = ({:.4}, {:.4})", web.len(), last.x, last.y);
    }

    let lambda = lyapunov_exponent(&logistic, config.logistic.x0, config.logistic.lyapunov_iterations)?;
    println!("  Lyapunov exponent λ = {:.4} ({})", lambda, regime(lambda));

    let bif = &config.bifurcation;
    let points = logistic_bifurcation(bif.r_min, bif.r_max, bif.steps, bif.transient, bif.iterations)?;
    println!(
        "  Bifurcation: r ∈ [{:.2}, {:.2}], {} points",
        bif.r_min, bif.r_max, points.len()
    );
    for chunk in points.chunks(bif.iterations.max(1)).step_by((bif.steps / 5).max(1)) {
        let mut branches: Vec<f64> = Vec::new();
        for p in chunk {
            if !branches.iter().any(|b| (b - p.value).abs() < 1e-3) {
                branches.push(p.value);
            }
        }
        println!("    r = {:.3}: {} distinct branches", chunk[0].parameter, branches.len());
    }
    println!();

    // ── Hénon map ───────────────────────────────────────────────────
    let henon = config.henon_map();
    println!("Hénon map (a = {:.3}, b = {:.3})", henon.a, henon.b);

    let samples = attractor(&henon, config.henon_initial(), config.henon.iterations);
    let (x_min, x_max) = samples.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.x), hi.max(p.x))
    });
    println!("  Attractor: {} points, x ∈ [{:.4}, {:.4}]", samples.len(), x_min, x_max);

    let lambda = lyapunov_exponent(&henon, config.henon_initial(), config.henon.iterations.max(1))?;
    println!("  Dominant stretch exponent λ = {:.4} ({})", lambda, regime(lambda));
    println!();

    // ── Standard map ────────────────────────────────────────────────
    let standard = config.standard_map();
    println!("Standard map (K = {:.3})", standard.k);

    let portrait = phase_portrait(&standard, config.standard.trajectories, config.standard.iterations);
    println!(
        "  Phase portrait: {} orbits x {} points",
        portrait.len(),
        portrait.first().map_or(0, |o| o.len())
    );

    let rho = rotation_number(&standard, config.standard_initial(), config.standard.iterations.max(1))?;
    println!("  Rotation number ρ = {:.4}", rho);

    let std_cfg = &config.standard;
    let transition = stability_transition(std_cfg.k_min, std_cfg.k_max, std_cfg.k_count)?;
    let onset = transition.iter().find(|s| s.exponent > 0.1);
    match onset {
        Some(s) => println!(
            "  Stability transition: λ first exceeds 0.1 at K = {:.3} (critical K ≈ {:.4})",
            s.parameter,
            StandardMap::CRITICAL_K
        ),
        None => println!("  Stability transition: no chaotic K in [{:.2}, {:.2}]", std_cfg.k_min, std_cfg.k_max),
    }
    println!();

    // ── Coupled map lattices ────────────────────────────────────────
    let lat = &config.lattice;
    println!(
        "Coupled map lattices (r = {:.3}, ε = {:.3}, n = {}, T = {}, seed = {})",
        lat.r, lat.epsilon, lat.size, lat.time_steps, lat.seed
    );

    for coupling in Coupling::ALL {
        let dynamics = CoupledMapLattice::new(coupling, lat.r, lat.epsilon);
        let mut rng = ChaCha8Rng::seed_from_u64(lat.seed);
        let history = dynamics.evolve(lat.size, lat.time_steps, &mut rng)?;

        let last = history.row(history.nrows() - 1);
        let mean = last.sum() / last.len() as f64;
        let var = last.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / last.len() as f64;

        let spectrum = mean_power_spectrum(history.view(), history.nrows() / 2)?;
        let dominant = spectrum
            .iter()
            .enumerate()
            .skip(1)
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(k, _)| k);

        print!("  {:<12} mean = {:.4}, std = {:.4}", coupling.name(), mean, var.sqrt());
        match dominant {
            Some(k) => println!(", dominant wavenumber k = {}", k),
            None => println!(),
        }
    }

    println!("\n═══════════════════════════════════════════════════════════════");
    println!("  Configuration");
    println!("═══════════════════════════════════════════════════════════════");
    println!("{}", config.to_json()?);

    Ok(())
}

fn regime(lambda: f64) -> &'static str {
    if lambda.is_nan() {
        "undefined"
    } else if lambda > 0.01 {
        "chaotic"
    } else if lambda < -0.01 {
        "stable"
    } else {
        "marginal"
    }
}
