use crate::core::{
    engine::{
        garbage::new_garbage_disposer,
        rendergraph::RenderGraph,
        rendergraphedit::RenderGraphEdit,
        rendernode::RenderNode,
    },
    renderer::{passthrough::PassthroughRenderer, strategy::RenderStrategy},
    scene::{output::OutputId, source::SourceId},
};

fn graph_with_sources(block_size: usize, count: usize) -> (RenderGraph, Vec<SourceId>) {
    let (chute, _disposer) = new_garbage_disposer();
    let mut graph = RenderGraph::new();
    let mut ids = Vec::new();
    for _ in 0..count {
        let source_id = SourceId::new_unique();
        let node = Box::new(RenderNode::new(source_id, OutputId::new_unique(), block_size));
        graph.make_edit(RenderGraphEdit::AddNode(node), &chute);
        ids.push(source_id);
    }
    (graph, ids)
}

#[test]
fn display_name_is_fixed() {
    assert_eq!(PassthroughRenderer::new().name(), "Pass-Through-Renderer");
}

#[test]
fn each_output_mirrors_its_own_source() {
    let (mut graph, ids) = graph_with_sources(4, 3);
    for (i, node) in graph.nodes_mut().iter_mut().enumerate() {
        let value = (i + 1) as f32;
        for s in node.capture_buffer_mut().iter_mut() {
            *s = value;
        }
    }

    let mut strategy = PassthroughRenderer::new();
    strategy.process_block(&mut graph);

    for (i, id) in ids.iter().enumerate() {
        let expected = (i + 1) as f32;
        let node = graph.node(*id).unwrap();
        assert!(node.output_samples().iter().all(|s| *s == expected));
    }
}

#[test]
fn setup_is_a_no_op() {
    let (mut graph, ids) = graph_with_sources(4, 2);

    let mut strategy = PassthroughRenderer::new();
    strategy.setup(&mut graph);

    // No nodes appear, disappear, or change
    assert_eq!(graph.nodes().len(), 2);
    for id in ids {
        let node = graph.node(id).unwrap();
        assert!(node.output_samples().iter().all(|s| *s == 0.0));
    }
}

#[test]
fn empty_graph_processes_cleanly() {
    let mut graph = RenderGraph::new();

    let mut strategy = PassthroughRenderer::new();
    strategy.setup(&mut graph);
    strategy.process_block(&mut graph);

    assert!(graph.nodes().is_empty());
}
