// DSV - dsv-error
// Module: DSV Error Codes
// SW-REQ-ID: REQ_ERROR_001
//
// Copyright (c) 2025 The DSV Project Developers
// Licensed under the MIT license.
// SPDX-License-Identifier: MIT

//! Error codes for DSV

// Index error codes (1000-1999)
/// Index or position outside the valid bound for the operation
pub const INDEX_OUT_OF_RANGE: u16 = 1000;

// Capacity error codes (2000-2999)
/// Insertion into a bounded stack or queue at full capacity
pub const OVERFLOW: u16 = 2000;

// State error codes (3000-3999)
/// Removal from an empty stack or queue
pub const UNDERFLOW: u16 = 3000;
/// Peek or removal on an empty structure
pub const EMPTY_STRUCTURE: u16 = 3001;

// Key error codes (4000-4999)
/// Insertion of a value already present in a keyed structure
pub const DUPLICATE_KEY: u16 = 4000;
/// Deletion of a value that is not present
pub const NOT_FOUND: u16 = 4001;

// Validation error codes (5000-5999)
/// Operand text is not a well-formed integer
pub const INVALID_OPERAND: u16 = 5000;
/// Operand text is empty or blank
pub const EMPTY_OPERAND: u16 = 5001;
/// Operand parsed but lies outside the accepted value range
pub const OPERAND_OUT_OF_RANGE: u16 = 5002;
/// Operation name not understood by the structure it was sent to
pub const UNKNOWN_OPERATION: u16 = 5003;
/// Wrong number of operands for an operation
pub const OPERAND_COUNT_MISMATCH: u16 = 5004;

// Unknown error codes (9000-9999)
/// Unclassified error
pub const UNKNOWN_ERROR: u16 = 9000;
