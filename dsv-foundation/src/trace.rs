//! Tracing support for DSV structures
//!
//! Structured spans for mutations and traversals. Works in both std and
//! `no_std` environments because the `tracing` crate is pulled in without its
//! default features.

#![cfg(feature = "tracing")]

use tracing::Span;

/// Span constructors for structure operations
#[derive(Debug, Clone)]
pub struct StructureTrace;

impl StructureTrace {
    /// Create a span for a mutating operation on a structure
    #[inline]
    pub fn mutation(structure: &'static str, operation: &'static str, size: usize) -> Span {
        ::tracing::trace_span!("structure_mutation", structure = %structure, operation = %operation, size = %size)
    }

    /// Create a span for a graph traversal
    #[inline]
    pub fn traversal(kind: &'static str, start: i32, vertices: usize) -> Span {
        ::tracing::debug_span!("graph_traversal", kind = %kind, start = %start, vertices = %vertices)
    }

    /// Create a span for an array growth step
    #[inline]
    pub fn growth(from: usize, to: usize) -> Span {
        ::tracing::debug_span!("array_grow", from = %from, to = %to)
    }
}
