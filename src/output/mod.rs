//! Terminal output formatting
//!
//! Display utilities for CLI results, pretty-printing and diagnostics.

pub mod display;
pub mod formatters;
pub mod log;

pub use display::{
    print_benchmark_comparison, print_benchmark_result, print_matrix_summary, print_solve_result,
    print_source_comparison, write_suggestions,
};
