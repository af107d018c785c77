//! Infrastructure layer: snapshot encoding and `StateStore` backends.

pub mod codec;
pub mod in_memory;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
