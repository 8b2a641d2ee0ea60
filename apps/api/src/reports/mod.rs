// Reporting endpoints: read-only aggregates over the hiring pipeline.
// Each handler opens its own connection and drops it when the scope ends.

pub mod handlers;
pub mod queries;
