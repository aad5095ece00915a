// Copyright (c) 2024-2026 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! The error module contains the `Error` type returned by the fallible
//! calculations of this library.

use alloc::string::String;
use thiserror::Error;

/// The errors that may be returned by `Ellipsoid` calculations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The name does not identify a reference ellipsoid.
    #[error("invalid ellipsoid name: '{0}'")]
    InvalidEllipsoidName(String),

    /// A latitude is at the North or South pole, where the tangent of the
    /// reduced latitude is undefined.
    #[error("latitude is at a pole")]
    PoleSingularity,

    /// A geocentric point lies on the polar axis.
    #[error("geocentric point is on the polar axis")]
    OnPolarAxis,

    /// An iterative solver did not reach its tolerance within its
    /// iteration limit, e.g. for nearly antipodal points.
    #[error("{solver} solver did not converge in {iterations} iterations")]
    NonConvergence {
        /// The name of the solver: "inverse" or "direct".
        solver: &'static str,
        /// The number of iterations performed.
        iterations: u32,
    },

    /// An argument is outside of its valid range.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}

/// A `Result` with the library `Error` type.
pub type Result<T> = core::result::Result<T, Error>;
