//! Writes `output.txt` for the viewer: average vertex degree of Erdős–Rényi
//! graphs G(n, p) with `p = min(1, 10/n)`, sampled over a range of `n`.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use serde::Serialize;

const OUTPUT_PATH: &str = "output.txt";
const N_START: usize = 0;
const N_END: usize = 1000;
const N_STEP: usize = 85;
const ITERATIONS: usize = 3;
const SEED: u64 = 42;

/// One output row, serialized as `[n, mean_average_degree]`.
#[derive(Debug, Serialize)]
struct Sample(usize, f64);

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[0, 1)`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Simple undirected graph on vertices `0..n`: no loops, no multi-edges.
struct Graph {
    adjacency: Vec<BTreeSet<usize>>,
}

impl Graph {
    /// Each of the `n(n-1)/2` vertex pairs is joined independently with probability `p`.
    fn erdos_renyi(n: usize, p: f64, rng: &mut SimpleRng) -> Self {
        let mut adjacency = vec![BTreeSet::new(); n];
        for u in 0..n {
            for v in u + 1..n {
                if rng.next_f64() < p {
                    adjacency[u].insert(v);
                    adjacency[v].insert(u);
                }
            }
        }
        Graph { adjacency }
    }

    fn total_degree(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    /// 0 for the empty graph.
    fn average_degree(&self) -> f64 {
        if self.adjacency.is_empty() {
            return 0.0;
        }
        self.total_degree() as f64 / self.adjacency.len() as f64
    }
}

/// Edge probability for a graph on `n` vertices; 1 for `n == 0`.
fn edge_probability(n: usize) -> f64 {
    (10.0 / n as f64).min(1.0)
}

fn run_experiment(rng: &mut SimpleRng) -> Vec<Sample> {
    (N_START..N_END)
        .step_by(N_STEP)
        .map(|n| {
            let p = edge_probability(n);
            let total: f64 = (0..ITERATIONS)
                .map(|_| Graph::erdos_renyi(n, p, rng).average_degree())
                .sum();
            Sample(n, total / ITERATIONS as f64)
        })
        .collect()
}

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(SEED);
    let samples = run_experiment(&mut rng);

    let json = serde_json::to_string_pretty(&samples).context("serializing samples")?;
    std::fs::write(OUTPUT_PATH, json)
        .with_context(|| format!("writing {OUTPUT_PATH}"))?;

    println!(
        "Wrote {} samples (n = {N_START}..{N_END} step {N_STEP}, {ITERATIONS} graphs each) to {OUTPUT_PATH}",
        samples.len()
    );
    Ok(())
}
