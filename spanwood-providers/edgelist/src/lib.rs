//! Edge-list provider: reads `from,to,weight` records into an undirected,
//! labelled [`spanwood_core::Graph`] keyed by node name.

mod errors;
mod provider;
mod record;

pub use errors::EdgeListError;
pub use provider::EdgeListProvider;
pub use record::EdgeRecord;

#[cfg(test)]
mod tests;
