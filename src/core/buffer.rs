//! Owned byte buffers passed between pipeline stages.

use crate::error::Result;

/// An owned, write-once block of bytes.
///
/// Stages allocate worst-case capacity up front and keep only what they
/// actually produced: `len()` is the used length and is the only length
/// downstream code may rely on. `capacity()` is exposed for inspection only.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    pub fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

/// Allocate `len` default-initialized slots, reporting allocation failure
/// instead of aborting.
pub(crate) fn try_filled<T: Copy + Default>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)?;
    buf.resize(len, T::default());
    Ok(buf)
}
