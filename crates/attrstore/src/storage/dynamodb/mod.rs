//! DynamoDB document store implementation.
//!
//! Each collection maps to a table. An item holds the document id under a key
//! attribute and the document itself as a map under an attributes attribute.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbDocumentStore;
