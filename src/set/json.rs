//! JSON array encoding shared by every set variant.
//!
//! A set is written as a plain sequence of its members. Reading accepts any
//! sequence and adds the members one by one with the receiving variant's
//! insertion semantics, so duplicates collapse and ordered sets keep the
//! sequence order.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{Deserialize, DeserializeOwned, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};

use super::SetAlgebra;
use crate::error::SetError;

/// Writes `members` as a sequence of known length.
pub(super) fn serialize_members<'a, T, I, Z>(
    members: I,
    length: usize,
    serializer: Z,
) -> Result<Z::Ok, Z::Error>
where
    T: Serialize + 'a,
    I: IntoIterator<Item = &'a T>,
    Z: Serializer,
{
    let mut sequence = serializer.serialize_seq(Some(length))?;
    for member in members {
        sequence.serialize_element(member)?;
    }
    sequence.end()
}

/// Builds a set of variant `C` from a serialized sequence.
pub(super) struct SetVisitor<C, T> {
    marker: PhantomData<fn() -> (C, T)>,
}

impl<C, T> SetVisitor<C, T> {
    pub(super) const fn new() -> Self {
        Self {
            marker: PhantomData,
        }
    }
}

impl<'de, C, T> Visitor<'de> for SetVisitor<C, T>
where
    C: SetAlgebra<T>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of set members")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let set = C::from_items(std::iter::empty());
        while let Some(member) = sequence.next_element()? {
            set.add_items(std::iter::once(member));
        }
        Ok(set)
    }
}

/// Encodes any serializable set as JSON bytes.
pub(super) fn encode<V: Serialize + ?Sized>(set: &V) -> crate::Result<Vec<u8>> {
    serde_json::to_vec(set).map_err(SetError::Encode)
}

/// Decodes a JSON array into its members without touching any set.
///
/// Decoding completes before anything is inserted, so a failure leaves the
/// target set exactly as it was.
pub(super) fn decode<T: DeserializeOwned>(bytes: &[u8]) -> crate::Result<Vec<T>> {
    match serde_json::from_slice::<Vec<T>>(bytes) {
        Ok(members) => {
            tracing::trace!(count = members.len(), "decoded set members");
            Ok(members)
        }
        Err(error) => {
            tracing::debug!(%error, "rejected serialized set");
            Err(SetError::Decode(error))
        }
    }
}
