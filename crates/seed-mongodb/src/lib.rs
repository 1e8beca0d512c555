//! MongoDB-backed document store for ev-seed.

mod opts;
mod store;

pub use opts::MongoOpts;
pub use store::MongoStore;
