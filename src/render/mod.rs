//! Figure rendering
//!
//! Both renderers draw into an in-memory bitmap surface and hand the
//! finished [`Figure`](crate::figure::Figure) back to the caller. Dispatch
//! by dimensionality and plot type lives in
//! [`session`](crate::session), not here.

pub(crate) mod boundary;
pub(crate) mod scatter;
