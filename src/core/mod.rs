pub mod context;
pub mod format;
pub mod lexicon;
pub mod narrator;
pub mod realizer;
pub mod transform;
