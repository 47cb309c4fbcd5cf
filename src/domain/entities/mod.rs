//! Plain domain data structures: [`Link`] and its insert input [`NewLink`].

pub mod link;

pub use link::{Link, NewLink};
