#[cfg(feature = "bench_regions")]
use arcfill::Diagram;
#[cfg(feature = "bench_regions")]
use std::time::Instant;

#[cfg(not(feature = "bench_regions"))]
fn main() {
    panic!("regions_bench requires --features bench_regions");
}

#[cfg(feature = "bench_regions")]
/// Returns the scene and how many inputs the caps rejected.
fn build_scene(w: usize, h: usize, rings: usize) -> (Diagram, usize) {
    let mut d = Diagram::new();
    let mut rejected = 0usize;
    for i in 0..=w {
        let x = i as f64 * 6.0;
        if d.add_line(x, 0.0, x, 1.0).is_none() {
            rejected += 1;
        }
    }
    for j in 0..=h {
        let y = j as f64 * 6.0;
        if d.add_line(0.0, y, 1.0, y).is_none() {
            rejected += 1;
        }
    }
    let cx = w as f64 * 3.0;
    let cy = h as f64 * 3.0;
    for k in 1..=rings {
        if d.add_circle(cx, cy, k as f64 * 4.5).is_none() {
            rejected += 1;
        }
    }
    (d, rejected)
}

#[cfg(feature = "bench_regions")]
fn main() {
    use tracing_subscriber::EnvFilter;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut w = 20usize;
    let mut h = 20usize;
    let mut rings = 6usize;
    let mut repeats = 5usize;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--w=") {
            if let Ok(v) = val.parse() {
                w = v;
            }
        } else if let Some(val) = a.strip_prefix("--h=") {
            if let Ok(v) = val.parse() {
                h = v;
            }
        } else if let Some(val) = a.strip_prefix("--rings=") {
            if let Ok(v) = val.parse() {
                rings = v;
            }
        } else if let Some(val) = a.strip_prefix("--repeats=") {
            if let Ok(v) = val.parse() {
                repeats = v;
            }
        }
    }
    let (d, rejected) = build_scene(w, h, rings);
    if rejected > 0 {
        tracing::warn!(rejected, "scene exceeds input caps");
    }
    let mut times = Vec::with_capacity(repeats);
    let mut faces = 0usize;
    let mut half_edges = 0usize;
    for _ in 0..repeats.max(1) {
        let t0 = Instant::now();
        let (arr, loops) = d.trace();
        times.push(t0.elapsed().as_secs_f64() * 1000.0);
        faces = loops.len();
        half_edges = arr.half_edge_count();
    }
    times.sort_by(|a, b| a.total_cmp(b));
    let med = times[times.len() / 2];
    let t_pick = Instant::now();
    let hit = d.region_at(w as f64 * 3.0 + 0.3, h as f64 * 3.0 + 0.2).is_some();
    println!(
        "lines={} circles={} rejected={} half_edges={} faces={} trace_median_ms={:.3} pick_ms={:.3} hit={}",
        d.line_count(),
        d.circle_count(),
        rejected,
        half_edges,
        faces,
        med,
        t_pick.elapsed().as_secs_f64() * 1000.0,
        hit
    );
}
