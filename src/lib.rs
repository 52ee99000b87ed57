//! A UCI chess engine with a pluggable position evaluator.
//!
//! The crate is split the way the engine works:
//!
//! - [`chess`] implements the rules: board and position representation,
//!   legal move generation, notation conversions and full-game bookkeeping.
//! - [`evaluation`] defines the pluggable scoring seam and the built-in
//!   fallback evaluator; externally trained models plug in through
//!   [`evaluation::OutcomeEvaluator`].
//! - [`search`] is a fixed-depth alpha-beta minimax with batched leaf
//!   evaluation and cooperative cancellation.
//! - [`engine`] speaks UCI on top of all of the above.

// Rustc lints.
#![warn(
    missing_docs,
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]
// Rustdoc lints.
#![warn(
    rustdoc::private_doc_tests,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic
)]
// Move generation and check detection sit on the hot path.
#![deny(clippy::perf)]

pub mod chess;
pub mod engine;
pub mod evaluation;
pub mod search;

pub use engine::Engine;

/// Version of the engine as reported in the UCI handshake.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
