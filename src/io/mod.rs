//! In-memory encoding of containers for pre-baked test fixtures.

pub mod fixture;
pub use fixture::{
    decode_matrix, decode_sparse_matrix, decode_sparse_vector, decode_vector, encode_matrix,
    encode_sparse_matrix, encode_sparse_vector, encode_vector,
};
