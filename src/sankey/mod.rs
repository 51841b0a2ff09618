//! Status-flow aggregation for the Sankey diagram
//!
//! Converts the transition log into weighted nodes and links for a
//! client-side flow renderer. The aggregation is a pure function of its
//! inputs and is recomputed in full on every invocation; the whole log for
//! one person fits comfortably in memory.

mod palette;


pub use palette::{default_colors, ColorPalette, DEFAULT_COLOR, STATUS_COLORS};

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::START_STATUS;
use crate::schemas::TransitionEvent;

/// Node sequences, aligned by node index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyNodes {
    /// Display labels, volume-prefixed except for "Start" and untouched nodes
    pub label: Vec<String>,

    /// Bare status names, for tooltips and click targets
    pub clean_label: Vec<String>,

    /// Hex color per node
    pub color: Vec<String>,
}

/// Link sequences, aligned by link index. Source and target are indices
/// into the node sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLinks {
    /// Index of each link's source node
    pub source: Vec<usize>,

    /// Index of each link's target node
    pub target: Vec<usize>,

    /// Transition count for each link
    pub value: Vec<u64>,

    /// Hex color per link, taken from the link's source status
    pub color: Vec<String>,
}

/// The full flow-diagram payload consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyDiagram {
    pub nodes: SankeyNodes,
    pub links: SankeyLinks,
}

/// Aggregate the transition log into a flow-diagram payload.
///
/// Returns None when the log is empty; callers render a neutral empty state
/// instead of a degenerate chart.
///
/// The output is deterministic for a given event multiset regardless of
/// event order: links are ordered lexicographically by (source, target),
/// and nodes in first-seen order over that link sequence, followed by any
/// vocabulary stage not touched by a transition, in vocabulary order.
pub fn build_sankey(
    events: &[TransitionEvent],
    stages: &[String],
    palette: &ColorPalette,
) -> Option<SankeyDiagram> {
    if events.is_empty() {
        return None;
    }

    // Group events into weighted edges. BTreeMap keeps the (source, target)
    // pairs in lexicographic order.
    let mut edges: BTreeMap<(String, String), u64> = BTreeMap::new();
    for event in events {
        *edges
            .entry((event.from_status.clone(), event.to_status.clone()))
            .or_insert(0) += 1;
    }

    // Node list: first-seen order scanning the sorted edges (source before
    // target per edge), then any remaining vocabulary stage. Untouched
    // stages still appear so the diagram shows the whole lifecycle.
    let mut names: Vec<String> = Vec::new();
    for (source, target) in edges.keys() {
        if !names.contains(source) {
            names.push(source.clone());
        }
        if !names.contains(target) {
            names.push(target.clone());
        }
    }
    for stage in stages {
        if !names.contains(stage) {
            names.push(stage.clone());
        }
    }

    let node_index: BTreeMap<&str, usize> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), i))
        .collect();

    // Per-node inbound and outbound weight totals.
    let mut inbound: BTreeMap<&str, u64> = BTreeMap::new();
    let mut outbound: BTreeMap<&str, u64> = BTreeMap::new();
    for ((source, target), weight) in &edges {
        *outbound.entry(source.as_str()).or_insert(0) += weight;
        *inbound.entry(target.as_str()).or_insert(0) += weight;
    }

    let mut label = Vec::with_capacity(names.len());
    let mut node_color = Vec::with_capacity(names.len());
    for name in &names {
        let volume = u64::max(
            inbound.get(name.as_str()).copied().unwrap_or(0),
            outbound.get(name.as_str()).copied().unwrap_or(0),
        );
        if volume > 0 && name != START_STATUS {
            label.push(format!("{} {}", volume, name));
        } else {
            label.push(name.clone());
        }
        node_color.push(palette.color_for(name).to_string());
    }

    let mut source = Vec::with_capacity(edges.len());
    let mut target = Vec::with_capacity(edges.len());
    let mut value = Vec::with_capacity(edges.len());
    let mut link_color = Vec::with_capacity(edges.len());
    for ((from, to), weight) in &edges {
        source.push(node_index[from.as_str()]);
        target.push(node_index[to.as_str()]);
        value.push(*weight);
        // Links take the color of their origin status
        link_color.push(palette.color_for(from).to_string());
    }

    Some(SankeyDiagram {
        nodes: SankeyNodes {
            label,
            clean_label: names,
            color: node_color,
        },
        links: SankeyLinks {
            source,
            target,
            value,
            color: link_color,
        },
    })
}
