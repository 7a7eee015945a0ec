//! Trait bundles collecting the digest bounds required to instantiate
//! [`Hmac`](hmac::Hmac) over a [`CipherSuite`](crate::CipherSuite) hash

use hmac::digest::block_buffer::Eager;
use hmac::digest::core_api::{BlockSizeUser, BufferKindUser, CoreProxy, FixedOutputCore, UpdateCore};
use hmac::digest::typenum::{IsLess, Le, NonZero, U256};
use hmac::digest::{Digest, FixedOutput, HashMarker};

/// The requirements on a hash function usable for the zero-knowledge-proof
/// challenge, the secret key-derivation function, and the session MACs
pub trait Hash: Digest + CoreProxy + FixedOutput + HashMarker + Default + Clone {}

impl<T: Digest + CoreProxy + FixedOutput + HashMarker + Default + Clone> Hash for T {}

/// The requirements on the eager core of a [`Hash`]
pub trait ProxyHash:
    HashMarker + UpdateCore + FixedOutputCore + BufferKindUser<BufferKind = Eager> + Default + Clone
where
    <Self as BlockSizeUser>::BlockSize: IsLess<U256>,
    Le<<Self as BlockSizeUser>::BlockSize, U256>: NonZero,
{
}

impl<T> ProxyHash for T
where
    T: HashMarker + UpdateCore + FixedOutputCore + BufferKindUser<BufferKind = Eager> + Default + Clone,
    <T as BlockSizeUser>::BlockSize: IsLess<U256>,
    Le<<T as BlockSizeUser>::BlockSize, U256>: NonZero,
{
}
