//! Number associations: two-digit numbers (00-99) and their peg words

pub mod models;
pub mod store;

pub use models::NumberAssociation;
pub use store::{NumberAssociationStore, NumberError};
