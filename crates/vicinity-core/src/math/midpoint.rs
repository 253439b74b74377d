// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Returns the real-valued midpoint of two integer positions.
///
/// Both operands are widened to `f64` before the division so that odd sums
/// keep their half (`midpoint(2, 5) == 3.5`), and the sum itself cannot
/// overflow.
///
/// # Examples
///
/// ```rust
/// # use vicinity_core::math::midpoint::midpoint;
///
/// assert_eq!(midpoint(2, 8), 5.0);
/// assert_eq!(midpoint(1, 2), 1.5);
/// ```
#[inline]
pub fn midpoint(a: u32, b: u32) -> f64 {
    (f64::from(a) + f64::from(b)) / 2.0
}
