//! An unbalanced binary search tree dictionary for Rust.
//!
//! This crate provides [`Dictionary`], an ordered key/value map stored as a plain binary
//! search tree. Unlike a self-balancing map, the tree's shape is fully determined by the
//! caller: by insertion order, by removals, and by explicit rotations.
//!
//! - [`insert`](Dictionary::insert), [`get`](Dictionary::get) and [`remove`](Dictionary::remove)
//!   behave like their `BTreeMap` counterparts
//! - [`rotate_left`](Dictionary::rotate_left) / [`rotate_right`](Dictionary::rotate_right)
//!   restructure the subtree at a key without changing the contents
//! - [`root`](Dictionary::root), [`node`](Dictionary::node) and
//!   [`display_tree`](Dictionary::display_tree) expose the resulting shape
//!
//! # Example
//!
//! ```
//! use bst_dictionary::Dictionary;
//!
//! let mut monarchs = Dictionary::new();
//! monarchs.insert(22, "Mary");
//! monarchs.insert(0, "Harold");
//! monarchs.insert(37, "Victoria");
//! monarchs.insert(42, "Elizabeth");
//!
//! assert_eq!(monarchs.get(&37), Some(&"Victoria"));
//! assert_eq!(monarchs.in_order_keys(), [0, 22, 37, 42]);
//!
//! // Promote 37 above 22; the ordering of the keys is untouched.
//! assert!(monarchs.rotate_left(&22));
//! assert_eq!(monarchs.root().map(|node| *node.key()), Some(37));
//! assert_eq!(monarchs.in_order_keys(), [0, 22, 37, 42]);
//!
//! print!("{}", monarchs.display_tree());
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **No recursion** - Every walk uses an explicit stack, so degenerate trees cannot overflow
//!   the call stack
//! - **Deep copies** - `Clone` duplicates every node; moving with `core::mem::take` leaves an
//!   empty dictionary behind
//!
//! # Implementation
//!
//! Nodes live in an arena and refer to their children by compact handles. A node owns its
//! children exclusively, so every node is reachable from the root along exactly one path.
//! Operations emit `tracing` events at `trace` and `debug` level; they cost nothing unless a
//! subscriber is installed.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod dictionary;

pub use dictionary::Dictionary;
