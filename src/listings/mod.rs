// Reference listings module
// Multi-language source shown next to each animation

pub mod types;
mod bubble_sort;
mod majority_vote;
mod stack_ops;

use crate::trace::types::AlgorithmKind;

/// Get the reference listing for an algorithm in a given language
pub fn get_listing(algorithm: AlgorithmKind, language: types::Language) -> types::CodeListing {
    let source = match algorithm {
        AlgorithmKind::MajorityVote => majority_vote::source(language),
        AlgorithmKind::StackOps => stack_ops::source(language),
        AlgorithmKind::BubbleSort => bubble_sort::source(language),
    };

    types::CodeListing {
        algorithm,
        language,
        source,
    }
}

/// All listings for one algorithm, in display order
pub fn list_listings(algorithm: AlgorithmKind) -> Vec<types::CodeListing> {
    types::Language::ALL
        .iter()
        .map(|language| get_listing(algorithm, *language))
        .collect()
}

// Re-export main types
pub use types::{CodeListing, Language};
