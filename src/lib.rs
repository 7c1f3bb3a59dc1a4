//! A small linear algebra library for real-time rendering.
//!
//! # Motivation
//!
//! Rendering code needs a handful of numeric primitives (vectors for
//! positions, normals and colors, matrices for camera and model transforms)
//! and needs them to be predictable: fixed-size, stack-resident, and free of
//! allocation or hidden state. This library provides exactly that surface and
//! nothing more.
//!
//! Existing Rust libraries have problems and limitations that make them
//! unsuitable for this use case:
//!
//! - Some of them aim for maximum flexibility, and pay the complexity cost
//!   associated with that. A renderer that only ever works with 2-, 3- and
//!   4-dimensional values does not benefit from dynamically-sized matrices.
//! - Many libraries still see many breaking changes. Exposing their types in
//!   public APIs would cause unnecessary churn for dependants.
//!
//! # Goals & Non-Goals
//!
//! - Support only the sizes real-time graphics uses: 2, 3 and 4. The API can
//!   be significantly simplified by relying on const generics to specify
//!   vector and matrix dimensions.
//! - Support only a single, row-major, unpadded data layout for matrices:
//!   a matrix is an ordered sequence of row vectors, and multiplying by a
//!   vector takes the dot product of each row with it.
//! - Be generic over the element type, but don't try to support non-[`Copy`]
//!   numeric types (eg. "big decimals").
//! - Don't have any unstable public dependencies. "Unstable" includes
//!   everything pre-1.0, as well as libraries that violate semver, as well as
//!   libraries that regularly do breaking post-1.0 releases.
//! - No quaternions, no SIMD layout guarantees, no I/O.

pub mod approx;
mod matrix;
mod traits;
mod vector;

pub use matrix::*;
pub use traits::*;
pub use vector::*;
