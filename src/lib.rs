//! word-shiftr: word-alternating Caesar scrambler
//!
//! A tool that scrambles a message so that:
//! - Word boundaries stay visible (marked with `#`)
//! - Letters shift through the alphabet, direction alternating per word
//!
//! ## How it works
//!
//! 1. **Split**: break the message on single space characters
//! 2. **Shift**: even-indexed words shift forward by the key, odd-indexed
//!    words shift backward
//! 3. **Wrap**: a shift that overflows one alphabet cycle folds back by 26
//! 4. **Join**: emit the transformed words separated by `#`

pub mod cipher;

pub use cipher::scramble;
