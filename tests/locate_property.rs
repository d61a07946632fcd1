use proptest::prelude::*;
use strands::{locate, Node};

// leaves grouped into nested wrappers of `width` children each
fn nest(leaves: Vec<String>, width: usize) -> Node {
    let chunks = leaves.chunks(width)
        .map(|chunk| Node::parent("p", chunk.iter().map(|text| Node::leaf("span", text.clone())).collect()))
        .collect();
    Node::parent("div", chunks)
}

// cut `target` into non-empty pieces at the given (sorted, deduplicated) char positions
fn split(target: &str, cuts: &[usize]) -> Vec<String> {
    let chars: Vec<char> = target.chars().collect();
    let mut bounds = vec![0];
    bounds.extend(cuts.iter().copied().filter(|cut| *cut > 0 && *cut < chars.len()));
    bounds.push(chars.len());
    bounds.dedup();

    bounds.windows(2).map(|w| chars[w[0]..w[1]].iter().collect()).collect()
}

proptest! {
    #[test]
    fn single_leaf_containing_target_is_returned_alone(
        noise in prop::collection::vec("[ab ]{0,6}", 0..8),
        target in "[a-c]{1,5}",
        at in 0usize..8,
        width in 1usize..4,
    ) {
        let mut leaves = noise;
        let at = at.min(leaves.len());
        leaves.insert(at, format!("x{}y", target));
        let root = nest(leaves.clone(), width);

        let found = locate(&root, &target).unwrap();
        prop_assert_eq!(found.len(), 1);
        let first = leaves.iter().find(|text| text.contains(target.as_str())).unwrap();
        prop_assert_eq!(found[0].text(), first.as_str());
    }

    #[test]
    fn absent_characters_never_match(
        leaves in prop::collection::vec("[ab ]{0,6}", 0..10),
        target in "[ab]{0,3}c[ab]{0,3}",
        width in 1usize..4,
    ) {
        let root = nest(leaves, width);

        prop_assert!(locate(&root, &target).unwrap().is_empty());
    }

    #[test]
    fn split_target_is_reassembled_exactly(
        before in prop::collection::vec("[0-9]{0,3}", 0..4),
        after in prop::collection::vec("[0-9]{0,3}", 0..4),
        target in "[a-z]{2,10}",
        cuts in prop::collection::vec(0usize..10, 0..5),
        width in 1usize..4,
    ) {
        let mut cuts = cuts;
        cuts.sort_unstable();
        let pieces = split(&target, &cuts);
        let leaves: Vec<String> = before.iter().chain(pieces.iter()).chain(after.iter()).cloned().collect();
        let root = nest(leaves, width);

        let found = locate(&root, &target).unwrap();
        let found_texts: Vec<&str> = found.iter().map(|node| node.text()).collect();
        let concatenated: String = found_texts.concat();
        prop_assert!(concatenated.contains(target.as_str()));
        prop_assert_eq!(found_texts, pieces.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn results_are_contiguous_leaves_in_document_order(
        leaves in prop::collection::vec("[ab]{0,4}", 1..10),
        target in "[ab]{1,6}",
        width in 1usize..4,
    ) {
        let root = nest(leaves, width);
        let all: Vec<&Node> = root.leaves().collect();

        let found = locate(&root, &target).unwrap();
        if let Some(first) = found.first() {
            let offset = all.iter().position(|leaf| std::ptr::eq(*leaf, *first)).unwrap();
            for (i, leaf) in found.iter().enumerate() {
                prop_assert!(std::ptr::eq(*leaf, all[offset + i]));
            }

            let concatenated: String = found.iter().map(|node| node.text()).collect();
            prop_assert!(concatenated.contains(target.as_str()));
            // trimmed: neither end leaf can be dropped
            if found.len() > 1 {
                let without_first: String = found[1..].iter().map(|node| node.text()).collect();
                let without_last: String = found[..found.len() - 1].iter().map(|node| node.text()).collect();
                prop_assert!(!without_first.contains(target.as_str()));
                prop_assert!(!without_last.contains(target.as_str()));
            }
        }
    }

    #[test]
    fn locate_is_deterministic(
        leaves in prop::collection::vec("[ab ]{0,5}", 0..10),
        target in "[ab ]{1,5}",
        width in 1usize..4,
    ) {
        let root = nest(leaves, width);

        prop_assert_eq!(locate(&root, &target).unwrap(), locate(&root, &target).unwrap());
    }
}
