//! Times one generation of the double-buffered simulation at several grid sizes

use std::time::Instant;

use color_life::domain::{ConwayRule, LiveColor, World};
use rand::{SeedableRng, rngs::StdRng};

fn benchmark_world(size: usize, iterations: u32, live_color: LiveColor) -> f64 {
    let mut rng = StdRng::seed_from_u64(size as u64);
    let mut world = World::new(size, size);
    world
        .front_mut()
        .randomize(&mut rng, 0.3, |pos| live_color.color_at(pos, (size, size)));

    let start = Instant::now();
    for _ in 0..iterations {
        if let Err(err) = world.step(&ConwayRule, &live_color) {
            eprintln!("step failed at {size}x{size}: {err}");
            break;
        }
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Performance Benchmark ===\n");

    let sizes = [100, 250, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>14}", "Size", "Solid ms", "Gradient ms", "Mcells/s");
    println!("{:-<52}", "");

    for size in sizes {
        let solid_ms = benchmark_world(size, iterations, LiveColor::default());
        let gradient_ms = benchmark_world(size, iterations, LiveColor::Gradient);
        let cells = (size * size) as f64;

        println!(
            "{:>10} {:>12.2} {:>12.2} {:>14.1}",
            format!("{}x{}", size, size),
            solid_ms,
            gradient_ms,
            cells / (solid_ms / 1000.0) / 1_000_000.0,
        );
    }
}
