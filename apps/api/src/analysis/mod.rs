// Candidate analysis engine.
// Pipeline: normalize text → extract skills → merge with GitHub signal → rescale →
// score against a role → render advisory text. Only `github` and `pdf` touch I/O.

pub mod advisory;
pub mod compatibility;
pub mod extractor;
pub mod github;
pub mod handlers;
pub mod merge;
pub mod ontology;
pub mod pdf;
pub mod pipeline;
pub mod rescale;
pub mod roles;
pub mod skills;
pub mod text;
