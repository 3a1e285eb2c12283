// DSV - dsv-foundation
// Module: Internal macros
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Macros shared by the collection modules.

/// Emit a `tracing` event at TRACE level when the `tracing` feature is on.
///
/// Compiles to nothing otherwise, so call sites need no `cfg` of their own.
macro_rules! trace_op {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            ::tracing::trace!($($arg)*);
        }
    };
}

/// Enter a [`StructureTrace`](crate::trace::StructureTrace) span for the rest
/// of the enclosing block when the `tracing` feature is on.
macro_rules! enter_span {
    ($ctor:ident ( $($arg:expr),* $(,)? )) => {
        #[cfg(feature = "tracing")]
        let _entered = $crate::trace::StructureTrace::$ctor($($arg),*).entered();
    };
}
