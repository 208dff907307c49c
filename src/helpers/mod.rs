pub(crate) mod aggregate;
pub(crate) mod arrays;
pub(crate) mod batches;
pub(crate) mod positional;
pub(crate) mod projection;
#[cfg(feature = "random")]
pub(crate) mod sampling;
pub(crate) mod transform;
pub(crate) mod where_clauses;
