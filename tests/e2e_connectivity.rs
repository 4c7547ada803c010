//! End-to-end tests for connectivity analysis, splitting and demotion.

use pretty_assertions::assert_eq;
use scaffold_graph::{
    ChainDirection, Contig, ContigId, DemotePolicy, EdgeFilter, EdgeStatus, EvidenceEdge, Length,
    NoPlacements, PlacementTable, ReadId, Recontig, ScaffoldGraph, ScaffoldId,
};

/// A contig of length 100 placed forward at `start`.
fn place(
    graph: &mut ScaffoldGraph,
    s: ScaffoldId,
    start: f64,
    customize: impl FnOnce(Contig) -> Contig,
) -> ContigId {
    let near = Length::new(start, start / 10.0);
    let length = Length::new(100.0, 10.0);
    let c = graph.add_contig_with(length, customize);
    graph.insert_contig(s, c, near, near + length, ChainDirection::Forward, Recontig::Off);
    c
}

/// Contigs of length 100 laid out every 200 bases.
fn spaced(graph: &mut ScaffoldGraph, s: ScaffoldId, n: usize) -> Vec<ContigId> {
    (0..n).map(|i| place(graph, s, i as f64 * 200.0, |c| c)).collect()
}

// ============================================================================
// 1. Two unrelated pairs
// ============================================================================

#[test]
fn test_two_disjoint_pairs_are_two_components() {
    let mut graph = ScaffoldGraph::new();
    let s = graph.create_scaffold();
    let c = spaced(&mut graph, s, 4);
    graph.link(c[0], c[1], Length::new(100.0, 10.0), 3);
    graph.link(c[2], c[3], Length::new(100.0, 10.0), 3);

    let parts = graph.analyze_connectivity(s, EdgeFilter::TrustedOrTentative, &NoPlacements);

    assert_eq!(parts.count, 2);
    assert_eq!(parts.label(c[1]), parts.label(c[0]));
    assert_eq!(parts.label(c[3]), parts.label(c[2]));
    assert!(parts.label(c[0]) != parts.label(c[2]));
}

// ============================================================================
// 2. Splitting preserves membership
// ============================================================================

#[test]
fn test_split_preserves_element_count() {
    let mut graph = ScaffoldGraph::new();
    let s = graph.create_scaffold();
    let c = spaced(&mut graph, s, 5);
    graph.link(c[0], c[1], Length::new(100.0, 10.0), 3);
    graph.link(c[1], c[2], Length::new(100.0, 10.0), 3);
    graph.link(c[3], c[4], Length::new(100.0, 10.0), 3);
    let t = graph.create_scaffold();
    graph.add_scaffold_edge(s, t, Length::new(1000.0, 100.0), 5);

    let components = graph.split_if_disconnected(s, EdgeFilter::Trusted, &NoPlacements);

    assert_eq!(components, 2);
    let original = graph.scaffold_record(s).unwrap();
    assert_eq!(original.num_elements(), 0);
    assert_eq!(original.length(), Length::ZERO);
    assert!(graph.scaffold(t).edges.is_empty());

    let pieces: Vec<_> = graph
        .scaffold_ids()
        .into_iter()
        .filter(|id| *id != t)
        .collect();
    let total: usize = pieces.iter().map(|p| graph.scaffold(*p).num_elements()).sum();
    assert_eq!(total, 5);
    assert_eq!(graph.members(pieces[0]), vec![c[0], c[1], c[2]]);
    assert_eq!(graph.members(pieces[1]), vec![c[3], c[4]]);

    // Every piece starts at its own origin.
    for piece in pieces {
        let head = graph.scaffold(piece).head().unwrap();
        assert_eq!(graph.contig(head).near_offset(), Length::ZERO);
        for id in graph.members(piece) {
            assert!(graph.analyze_connectivity(piece, EdgeFilter::Trusted, &NoPlacements).is_connected());
            assert_eq!(graph.scaffold_of(id).unwrap(), piece);
        }
    }
}

// ============================================================================
// 3. Closure reads hold a scaffold together
// ============================================================================

#[test]
fn test_closure_read_prevents_split() {
    let mut graph = ScaffoldGraph::new();
    let s = graph.create_scaffold();
    let read = ReadId(900);
    let c = [
        place(&mut graph, s, 0.0, |c| c),
        place(&mut graph, s, 200.0, |c| c.with_closure_reads([read])),
        place(&mut graph, s, 400.0, |c| c),
    ];
    let mut mates = PlacementTable::new();
    mates.insert(read, c[0], c[2]);

    assert_eq!(graph.split_if_disconnected(s, EdgeFilter::Trusted, &mates), 1);
    assert_eq!(graph.scaffold(s).num_elements(), 3);

    assert_eq!(graph.split_if_disconnected(s, EdgeFilter::Trusted, &NoPlacements), 3);
    assert_eq!(graph.scaffold_ids().len(), 3);
}

// ============================================================================
// 4. Tentative evidence and foreign edges
// ============================================================================

#[test]
fn test_tentative_edges_count_unless_filter_is_strict() {
    let mut graph = ScaffoldGraph::new();
    let s = graph.create_scaffold();
    let c = spaced(&mut graph, s, 2);
    graph.add_edge(|id| {
        EvidenceEdge::new(id, c[0], c[1], Length::new(100.0, 10.0))
            .with_support(2)
            .with_status(EdgeStatus::TentativeTrusted)
    });

    assert_eq!(graph.analyze_connectivity(s, EdgeFilter::Trusted, &NoPlacements).count, 2);
    assert_eq!(graph.analyze_connectivity(s, EdgeFilter::TrustedOrTentative, &NoPlacements).count, 1);
}

#[test]
fn test_split_leaves_no_trusted_edge_inside_pieces_crossing() {
    let mut graph = ScaffoldGraph::new();
    let s = graph.create_scaffold();
    let c = spaced(&mut graph, s, 4);
    graph.link(c[0], c[1], Length::new(100.0, 10.0), 3);
    graph.link(c[2], c[3], Length::new(100.0, 10.0), 3);
    assert!(graph.check_all_trusted_edges().is_empty());

    graph.split_if_disconnected(s, EdgeFilter::Trusted, &NoPlacements);

    assert!(graph.check_all_trusted_edges().is_empty());
    let first = graph.scaffold_of(c[0]).unwrap();
    assert_eq!(graph.count_foreign_edges(first, c[1]), 0);
}

// ============================================================================
// 5. Split fragments feed demotion
// ============================================================================

#[test]
fn test_split_singletons_can_be_demoted() {
    let mut graph = ScaffoldGraph::new();
    let s = graph.create_scaffold();
    let c = spaced(&mut graph, s, 3);
    graph.link(c[0], c[1], Length::new(100.0, 10.0), 3);

    assert_eq!(graph.split_if_disconnected(s, EdgeFilter::Trusted, &NoPlacements), 2);
    let stats = graph.demote_small_singletons(&DemotePolicy::default());

    assert_eq!(stats.singletons, 1);
    assert_eq!(stats.demoted, 1);
    assert!(graph.scaffold_of(c[2]).is_err());
    assert_eq!(graph.scaffold_ids().len(), 1);
}
