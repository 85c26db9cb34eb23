//! Cascade resolution: match rules against nodes, merge by specificity.
//!
//! Compiles a parsed [`StyleSheet`] into a form ready for matching, with
//! per-rule specificity precomputed. Matching walks the selector chain right
//! to left over the node's ancestors; pseudo-classes test the node's runtime
//! state flags.

use crate::css::model::{
    Combinator, CompoundSelector, Declaration, Selector, SelectorComponent, SelectorPart,
    StyleSheet,
};
use crate::css::properties::apply_declaration;
use crate::css::specificity::Specificity;
use crate::css::styles::Styles;
use crate::css::tokens::TokenCollection;
use crate::dom::node::{NodeData, NodeId, NodeState};
use crate::dom::tree::Tree;

/// A compiled stylesheet ready for matching against tree nodes.
#[derive(Debug, Default)]
pub struct CompiledStylesheet {
    /// Rules with pre-computed specificity, in source order.
    rules: Vec<CompiledRule>,
}

#[derive(Debug)]
struct CompiledRule {
    selectors: Vec<(Selector, Specificity)>,
    declarations: Vec<Declaration>,
    /// Source order index for stable tie-breaking.
    source_order: usize,
}

impl CompiledStylesheet {
    /// Compile a parsed [`StyleSheet`] by computing specificity per selector.
    pub fn compile(stylesheet: &StyleSheet) -> Self {
        let rules = stylesheet
            .rules
            .iter()
            .enumerate()
            .map(|(i, rule)| CompiledRule {
                selectors: rule
                    .selectors
                    .iter()
                    .map(|sel| (sel.clone(), Specificity::from_selector(sel)))
                    .collect(),
                declarations: rule.declarations.clone(),
                source_order: i,
            })
            .collect();

        CompiledStylesheet { rules }
    }

    /// Compute the sparse cascaded styles for a single node.
    ///
    /// Matching rules are sorted ascending by (specificity, source order) and
    /// merged in that order, so higher specificity applies last and wins, and
    /// equal specificity falls back to declaration order. Declarations that
    /// fail to parse are skipped, leaving the field at whatever an earlier
    /// rule set.
    ///
    /// Inline overrides are *not* applied here; [`resolve_style`] layers them
    /// on top so they win over any stylesheet rule.
    pub fn compute_styles(&self, node_id: NodeId, tree: &Tree, tokens: &TokenCollection) -> Styles {
        // When several selectors of one rule match, the highest specificity
        // among the matching ones ranks the rule.
        let mut matches: Vec<(Specificity, usize, &[Declaration])> = Vec::new();

        for rule in &self.rules {
            let best = rule
                .selectors
                .iter()
                .filter(|(sel, _)| matches_selector(sel, node_id, tree))
                .map(|(_, spec)| *spec)
                .max();

            if let Some(specificity) = best {
                matches.push((specificity, rule.source_order, &rule.declarations));
            }
        }

        matches.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut result = Styles::new();
        for (_, _, declarations) in &matches {
            let mut rule_styles = Styles::new();
            for decl in *declarations {
                // Unparseable values degrade silently.
                let _ = apply_declaration(&mut rule_styles, &decl.property, &decl.values, tokens);
            }
            result = result.merge(&rule_styles);
        }

        result
    }
}

/// Resolve the final sparse styles for a node: every sheet's cascade output in
/// order, then the node's inline overrides last.
///
/// Always starts from an empty baseline, never the previous frame's result.
pub fn resolve_style(
    tree: &Tree,
    node_id: NodeId,
    sheets: &[CompiledStylesheet],
    tokens: &TokenCollection,
) -> Styles {
    let mut result = Styles::new();
    for sheet in sheets {
        result = result.merge(&sheet.compute_styles(node_id, tree, tokens));
    }
    if let Some(node) = tree.get(node_id) {
        result = result.merge(&node.inline);
    }
    result
}

/// Check whether a full selector chain matches a given node.
///
/// The rightmost compound must match the node itself; remaining parts walk
/// leftward, a `Child` combinator testing the immediate parent and a
/// `Descendant` combinator scanning all remaining ancestors.
fn matches_selector(selector: &Selector, node_id: NodeId, tree: &Tree) -> bool {
    let parts = &selector.parts;
    if parts.is_empty() {
        return false;
    }

    let last = parts.len() - 1;
    let SelectorPart::Compound(compound) = &parts[last] else {
        return false;
    };
    let Some(node) = tree.get(node_id) else {
        return false;
    };
    if !matches_compound(compound, node) {
        return false;
    }

    matches_leftward(parts, last, node_id, tree)
}

/// Match the selector chain to the left of `part_idx`, with `current` bound
/// to the compound at `part_idx`.
///
/// Descendant steps try every matching ancestor, not just the nearest, so
/// mixed chains like `X > Y Z` still match when a lower `Y` candidate fails
/// the `X >` test but a higher one passes.
fn matches_leftward(parts: &[SelectorPart], part_idx: usize, current: NodeId, tree: &Tree) -> bool {
    if part_idx == 0 {
        return true;
    }
    if part_idx < 2 {
        // Combinator without a preceding compound.
        return false;
    }
    let SelectorPart::Combinator(combinator) = &parts[part_idx - 1] else {
        return false;
    };
    let SelectorPart::Compound(compound) = &parts[part_idx - 2] else {
        return false;
    };

    match combinator {
        Combinator::Child => {
            let Some(parent_id) = tree.parent(current) else {
                return false;
            };
            let Some(parent) = tree.get(parent_id) else {
                return false;
            };
            matches_compound(compound, parent)
                && matches_leftward(parts, part_idx - 2, parent_id, tree)
        }
        Combinator::Descendant => tree.ancestors(current).into_iter().any(|ancestor_id| {
            tree.get(ancestor_id)
                .is_some_and(|ancestor| matches_compound(compound, ancestor))
                && matches_leftward(parts, part_idx - 2, ancestor_id, tree)
        }),
    }
}

/// Check whether a compound selector matches a single node's data.
///
/// Every component must hold: type equality, id equality, membership of all
/// listed classes, and the runtime state flag for each pseudo-class. Unknown
/// pseudo-classes never match.
fn matches_compound(compound: &CompoundSelector, node: &NodeData) -> bool {
    compound.components.iter().all(|component| match component {
        SelectorComponent::Type(name) => node.kind.name() == name,
        SelectorComponent::Class(name) => node.has_class(name),
        SelectorComponent::Id(name) => node.id.as_deref() == Some(name.as_str()),
        SelectorComponent::Universal => true,
        SelectorComponent::PseudoClass(name) => match NodeState::from_pseudo_class(name) {
            Some(flag) => node.state.contains(flag),
            None => false,
        },
    })
}
