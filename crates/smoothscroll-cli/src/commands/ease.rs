use anyhow::{anyhow, Result};

use smoothscroll_core::{scroll::ease, AppConfig};

pub fn run(config: &AppConfig, steps: u32) -> Result<()> {
    if steps == 0 {
        return Err(anyhow!("--steps must be at least 1"));
    }

    let duration = config.scroll.duration_ms as f64;
    println!("Cosine ease-in-out over {}ms:\n", config.scroll.duration_ms);
    println!("  {:>6}  {:>9}  {:>8}", "k", "t (ms)", "eased");

    for i in 0..=steps {
        let k = i as f64 / steps as f64;
        let value = ease(k);
        let bar = "#".repeat((value * 40.0).round() as usize);
        println!("  {:>6.3}  {:>9.1}  {:>8.5}  {}", k, k * duration, value, bar);
    }

    Ok(())
}
