//! Random graphs of a given order and density.
use crate::{graph::*, GraphError, Result};
use ahash::RandomState;
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use std::collections::HashSet;

/// Knobs of random graph generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Weights are drawn uniformly from `[1, max_weight]`.
    pub max_weight: Weight,
    /// Retry budget per wanted edge when placements are rejected as duplicates.
    pub attempts_per_edge: usize,
    /// Fixed seed for reproducible graphs; entropy otherwise.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_weight: DEFAULT_MAX_WEIGHT,
            attempts_per_edge: 64,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_max_weight(mut self, max_weight: Weight) -> Self {
        self.max_weight = max_weight;
        self
    }

    pub fn with_attempts_per_edge(mut self, attempts: usize) -> Self {
        self.attempts_per_edge = attempts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Most edges a simple graph of `order` vertices can carry.
pub fn max_size(order: usize, directed: bool) -> usize {
    let pairs = order * order.saturating_sub(1);
    if directed {
        pairs
    } else {
        pairs / 2
    }
}

/// Edge count a density percentage maps to, never below the `order - 1` of a spanning structure.
pub fn size_for_density(order: usize, density: u32, directed: bool) -> usize {
    let by_density = max_size(order, directed) * density as usize / 100;
    by_density.max(order.saturating_sub(1))
}

fn random_weight<R: Rng>(rng: &mut R, max_weight: Weight) -> Weight {
    rng.gen_range(1..=max_weight)
}

impl Graph {
    /// The least density, in percent, whose edge count suffices to connect `order` vertices.
    pub fn min_density(order: usize, directed: bool) -> u32 {
        let max = max_size(order, directed);
        if max == 0 {
            return 0;
        }
        let needed = (order - 1) * 100;
        ((needed + max - 1) / max) as u32
    }

    /// Generates and initializes a random graph.
    ///
    /// `density` is the percentage of `max_size(order, directed)` edges to place,
    /// at least [`min_density`](Self::min_density) and at most 100.
    /// Undirected graphs come out connected; in directed ones every vertex is reachable
    /// from vertex 0.
    pub fn generate_random(
        order: usize,
        density: u32,
        directed: bool,
        config: &GeneratorConfig,
    ) -> Result<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::generate_random_with(order, density, directed, config, &mut rng)
    }

    /// Like [`generate_random`](Self::generate_random) but draws from `rng`, ignoring `config.seed`.
    pub fn generate_random_with<R>(
        order: usize,
        density: u32,
        directed: bool,
        config: &GeneratorConfig,
        rng: &mut R,
    ) -> Result<Self>
    where
        R: Rng,
    {
        if order == 0 {
            return Err(GraphError::Precondition("graph needs at least one vertex"));
        }
        if config.max_weight == 0 {
            return Err(GraphError::Precondition("max weight must be positive"));
        }
        let min = Self::min_density(order, directed);
        if density < min || density > 100 {
            tracing::warn!(order, density, min, "density rejected");
            return Err(GraphError::InvalidDensity {
                density,
                min,
                order,
            });
        }

        let wanted = size_for_density(order, density, directed);
        let key = |a: usize, b: usize| {
            if directed || a < b {
                (a, b)
            } else {
                (b, a)
            }
        };
        let mut seen: HashSet<(usize, usize), RandomState> =
            HashSet::with_capacity_and_hasher(wanted, RandomState::new());
        let mut edges = Vec::with_capacity(wanted);

        // a random tree hanging from vertex 0
        let mut perm: Vec<usize> = (1..order).collect();
        perm.shuffle(rng);
        perm.insert(0, 0);
        for i in 1..order {
            let parent = perm[rng.gen_range(0..i)];
            let child = perm[i];
            seen.insert(key(parent, child));
            let w = random_weight(rng, config.max_weight);
            edges.push(Edge::new(VertexId(parent), VertexId(child), w));
        }

        let budget = config.attempts_per_edge.saturating_mul(wanted);
        let mut attempts = 0;
        while edges.len() < wanted {
            if attempts >= budget {
                return Err(GraphError::GenerationExhausted {
                    attempts,
                    placed: edges.len(),
                    wanted,
                });
            }
            attempts += 1;
            let a = rng.gen_range(0..order);
            let b = rng.gen_range(0..order);
            if a == b || !seen.insert(key(a, b)) {
                continue;
            }
            let w = random_weight(rng, config.max_weight);
            edges.push(Edge::new(VertexId(a), VertexId(b), w));
        }
        tracing::debug!(
            order,
            size = edges.len(),
            directed,
            attempts,
            "random graph generated"
        );

        let mut res = Self::from_edges(order, edges)?;
        res.init(directed)?;
        Ok(res)
    }
}
