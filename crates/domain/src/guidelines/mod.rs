//! Content guideline compilation.
//!
//! Pure derivation from family/child preferences to the guidance blocks the
//! story and illustration models consume. See `compiler` for the rule order
//! and `tables` for the fixed lookup data.

mod compiler;
mod tables;

pub use compiler::{
    can_include_magic, can_include_talking_animals, generate_content_guidelines, ContentGuidelines,
};
pub use tables::{
    cultural_elements, dietary_rule, dress_code, religious_rule, CulturalElements, ReligiousRule,
};
