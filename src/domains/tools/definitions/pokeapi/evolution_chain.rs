//! Evolution chain flattening.
//!
//! PokéAPI delivers evolution data as a rooted tree: each link names a
//! species and lists the species it can evolve into. For display we want a
//! single ordered sequence ("A → B → C"), so the tree is flattened with a
//! pre-order traversal: the current species first, then each downstream
//! branch in the order the API lists them. Branching chains (e.g. Eevee)
//! are emitted branch by branch with no markers in the flat output.

/// A single stage in an evolution tree.
///
/// Built fresh from an evolution-chain payload for each request and
/// discarded once the response text is produced. The input is a finite
/// acyclic tree by contract of the upstream data source; no cycle or depth
/// guard is applied here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvolutionNode {
    /// Species identifier at this stage.
    pub species_name: String,

    /// Downstream evolutions, in the order the API lists them.
    pub children: Vec<EvolutionNode>,
}

impl EvolutionNode {
    /// Create a leaf node with no further evolutions.
    pub fn leaf(species_name: impl Into<String>) -> Self {
        Self {
            species_name: species_name.into(),
            children: Vec::new(),
        }
    }
}

/// Flatten an evolution tree into an ordered list of species names.
///
/// Pre-order traversal: the node's own name is emitted first, then each
/// child's flattened sequence in listed order. The result always contains
/// at least one element and exactly one entry per node; nothing is
/// reordered, deduplicated, or depth-limited.
pub fn flatten_evolution_chain(root: &EvolutionNode) -> Vec<String> {
    let mut names = vec![root.species_name.clone()];
    for child in &root.children {
        names.extend(flatten_evolution_chain(child));
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, children: Vec<EvolutionNode>) -> EvolutionNode {
        EvolutionNode {
            species_name: name.to_string(),
            children,
        }
    }

    #[test]
    fn test_single_node() {
        let root = EvolutionNode::leaf("tauros");
        assert_eq!(flatten_evolution_chain(&root), vec!["tauros"]);
    }

    #[test]
    fn test_linear_chain() {
        let root = node(
            "bulbasaur",
            vec![node("ivysaur", vec![EvolutionNode::leaf("venusaur")])],
        );
        assert_eq!(
            flatten_evolution_chain(&root),
            vec!["bulbasaur", "ivysaur", "venusaur"]
        );
    }

    #[test]
    fn test_branching_chain() {
        // Root with two childless children: first-listed child comes first.
        let root = node(
            "oddish",
            vec![EvolutionNode::leaf("gloom"), EvolutionNode::leaf("bellossom")],
        );
        assert_eq!(
            flatten_evolution_chain(&root),
            vec!["oddish", "gloom", "bellossom"]
        );
    }

    #[test]
    fn test_branch_emitted_before_sibling() {
        // A → {B → D, C} flattens to [A, B, D, C]: the first branch is
        // fully emitted before the second starts.
        let root = node(
            "a",
            vec![node("b", vec![EvolutionNode::leaf("d")]), EvolutionNode::leaf("c")],
        );
        assert_eq!(flatten_evolution_chain(&root), vec!["a", "b", "d", "c"]);
    }

    #[test]
    fn test_deterministic() {
        let root = node(
            "eevee",
            vec![
                EvolutionNode::leaf("vaporeon"),
                EvolutionNode::leaf("jolteon"),
                EvolutionNode::leaf("flareon"),
            ],
        );
        let first = flatten_evolution_chain(&root);
        let second = flatten_evolution_chain(&root);
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_length_equals_node_count() {
        fn count(node: &EvolutionNode) -> usize {
            1 + node.children.iter().map(count).sum::<usize>()
        }

        let root = node(
            "wurmple",
            vec![
                node("silcoon", vec![EvolutionNode::leaf("beautifly")]),
                node("cascoon", vec![EvolutionNode::leaf("dustox")]),
            ],
        );
        let flat = flatten_evolution_chain(&root);
        assert_eq!(flat.len(), count(&root));
    }

    #[test]
    fn test_input_not_mutated() {
        let root = node("pichu", vec![EvolutionNode::leaf("pikachu")]);
        let snapshot = root.clone();
        let _ = flatten_evolution_chain(&root);
        assert_eq!(root, snapshot);
    }
}
