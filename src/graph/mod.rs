//! Graph construction and representation
//!
//! This module builds the sentence-similarity graph shared by TextRank and
//! LexRank and stores it in CSR form for the random walk.

pub mod builder;
pub mod csr;
pub mod similarity;
