//! Deterministic random number generation.
//!
//! RULE: Nothing in the simulation may call any platform RNG.
//! All randomness flows through NodeRng streams derived from the
//! single master seed the field was spawned with.
//!
//! Each node owns its own stream, seeded deterministically from
//! (master_seed, spawn_index). This means:
//!   - Changing the number of nodes never changes the streams of nodes
//!     that kept their spawn index.
//!   - Each node's trajectory is fully reproducible in isolation.

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

/// A deterministic RNG stream for a single node (or the field layout).
#[derive(Debug, Clone)]
pub struct NodeRng {
    inner: Pcg64Mcg,
}

impl NodeRng {
    /// Derive a stream from the master seed and a stable stream index.
    /// The index must never change once assigned.
    pub fn derive(master_seed: u64, stream_index: u64) -> Self {
        let derived_seed = master_seed ^ stream_index.wrapping_mul(0x9e37_79b9_7f4a_7c15);
        Self {
            inner: Pcg64Mcg::seed_from_u64(derived_seed),
        }
    }

    /// Roll a float in [0.0, 1.0).
    pub fn next_f64(&mut self) -> f64 {
        use rand::RngCore;
        let bits = self.inner.next_u64();
        (bits >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Draw from a uniform distribution over [lo, hi), the model's
    /// `U(a, b)` primitive.
    pub fn uniform(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (hi - lo) * self.next_f64()
    }

    /// Roll a u64 in [0, n).
    pub fn next_u64_below(&mut self, n: u64) -> u64 {
        use rand::RngCore;
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Roll a u64 in [lo, hi] inclusive.
    pub fn next_u64_in(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_u64_below(hi - lo + 1)
    }
}

/// Stream derivation for a whole field: one master seed in, one stream
/// per stable index out.
pub struct RngBank {
    master_seed: u64,
}

impl RngBank {
    pub fn new(master_seed: u64) -> Self {
        Self { master_seed }
    }

    /// The layout stream: node count, positions, ids, static cloud rolls.
    pub fn layout(&self) -> NodeRng {
        NodeRng::derive(self.master_seed, 0)
    }

    /// The private stream for the node spawned at `spawn_index`.
    /// Index 0 is reserved for the layout stream, so nodes start at 1.
    pub fn for_node(&self, spawn_index: u64) -> NodeRng {
        NodeRng::derive(self.master_seed, 1 + spawn_index)
    }
}
