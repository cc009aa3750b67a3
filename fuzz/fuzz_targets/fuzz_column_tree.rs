#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tabsift_layout::{Column, ColumnTree, GroupColumn, LeafColumn, pinned_first, sticky_offsets};
use tabsift_layout::ColumnSizing;

#[derive(Arbitrary, Debug)]
enum Node {
    Leaf {
        id: u8,
        name: Option<String>,
        size: Option<u32>,
        min: Option<u32>,
        max: Option<u32>,
        pin: bool,
    },
    Group {
        id: u8,
        pin: bool,
        children: Vec<Node>,
    },
}

fn build(node: &Node, depth: usize) -> Column<()> {
    match node {
        Node::Leaf { id, name, size, min, max, pin } => {
            let mut leaf = LeafColumn::new(format!("c{id}"));
            if let Some(name) = name {
                leaf = leaf.name(name.clone());
            }
            if let Some(size) = size {
                leaf = leaf.size(*size);
            }
            if let Some(min) = min {
                leaf = leaf.min_size(*min);
            }
            if let Some(max) = max {
                leaf = leaf.max_size(*max);
            }
            if *pin {
                leaf = leaf.pin();
            }
            leaf.into()
        }
        Node::Group { id, pin, children } => {
            let mut group = GroupColumn::new(format!("c{id}"));
            if *pin {
                group = group.pin();
            }
            if depth < 6 {
                group = group.children(children.iter().map(|c| build(c, depth + 1)));
            }
            group.into()
        }
    }
}

fuzz_target!(|nodes: Vec<Node>| {
    let columns: Vec<Column<()>> = nodes.iter().map(|n| build(n, 0)).collect();
    let Ok(tree) = ColumnTree::flatten(&columns) else {
        return;
    };

    for leaf in tree.leaves() {
        assert!(tree.resolve(&leaf.name).contains(&leaf.id));
        assert!(leaf.size <= leaf.max_size);
    }

    let order = pinned_first(tree.leaves());
    let mut sizing = ColumnSizing::new(tree.leaves());
    if let Some(first) = order.first() {
        sizing.resize(&first.id, u32::MAX);
    }
    let offsets = sticky_offsets(&order, &sizing);
    assert_eq!(offsets.len(), order.len());
});
