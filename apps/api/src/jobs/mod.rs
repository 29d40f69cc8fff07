// Job catalogue: filter composition, lookups, and match-ranked listings.

pub mod filters;
pub mod handlers;
pub mod queries;
