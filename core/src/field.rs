//! Node factory: lays out a fresh field of sensor nodes.

use crate::battery::Battery;
use crate::config::SimConfig;
use crate::node::Node;
use crate::rng::RngBank;
use crate::types::NodeId;

/// Display ids are rolled in this band. Duplicates across a field are
/// tolerated; ids are for display only.
const ID_MIN: u64 = 1000;
const ID_MAX: u64 = 9999;

/// Spawn a fresh field of nodes.
///
/// Count and placement come from the layout stream; each node's private
/// stream is derived from its spawn index, so changing the count range
/// or map bounds never perturbs the trajectory of a node that kept its
/// index. Replacing an existing field is the caller's concern; this
/// always returns a brand-new collection.
pub fn spawn_nodes(cfg: &SimConfig, bank: &RngBank) -> Vec<Node> {
    let mut layout = bank.layout();
    let count = layout.next_u64_in(cfg.field.min_nodes, cfg.field.max_nodes);

    (0..count)
        .map(|spawn_index| {
            let x = layout.uniform(cfg.field.x_min, cfg.field.x_max);
            let y = layout.uniform(cfg.field.y_min, cfg.field.y_max);
            let id = layout.next_u64_in(ID_MIN, ID_MAX) as NodeId;
            let cloud_pct = layout.next_u64_in(0, 100) as f64;

            let mut rng = bank.for_node(spawn_index);
            let battery = Battery::spawn(&cfg.battery, &mut rng);
            Node::new(id, x, y, cloud_pct, battery, rng)
        })
        .collect()
}
