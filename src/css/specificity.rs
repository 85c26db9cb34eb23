//! Selector specificity scoring.
//!
//! A flat numeric score: id contributes 100, class 10, pseudo-class 10,
//! type 1, universal 0. Components are summed across every compound in the
//! selector chain. Matches sort ascending by score so higher-specificity
//! rules apply last; equal scores keep declaration order.

use crate::css::model::{Selector, SelectorComponent, SelectorPart};

/// Numeric specificity of a selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Specificity(pub u32);

impl Specificity {
    /// Compute the specificity score for a full selector chain.
    pub fn from_selector(selector: &Selector) -> Self {
        let mut score = 0;

        for part in &selector.parts {
            let SelectorPart::Compound(compound) = part else {
                continue;
            };
            for component in &compound.components {
                score += match component {
                    SelectorComponent::Id(_) => 100,
                    SelectorComponent::Class(_) => 10,
                    SelectorComponent::PseudoClass(_) => 10,
                    SelectorComponent::Type(_) => 1,
                    SelectorComponent::Universal => 0,
                };
            }
        }

        Self(score)
    }
}
