//! Serde bridge: a variant travels as the 2-tuple `(ordinal, payload)`.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, DeserializeOwned, SeqAccess, Visitor};
use serde::ser::{self, SerializeTuple};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Variant;
use crate::list::TypeList;

/// Every alternative is `Serialize`.
pub trait ListSerialize: TypeList {
    /// Serializes the active payload as `(ordinal, payload)`.
    ///
    /// # Errors
    /// Fails for a valueless storage or when the serializer fails.
    fn serialize_storage<S: Serializer>(storage: &Self::Storage, serializer: S) -> Result<S::Ok, S::Error>;
}

/// Every alternative is deserializable without borrowing from the input.
pub trait ListDeserialize: TypeList {
    /// Reads the payload of alternative `ordinal` as the next element of `seq`.
    ///
    /// # Errors
    /// Fails for an out-of-range ordinal, a missing element, or a payload
    /// error.
    fn deserialize_at<'de, A: SeqAccess<'de>>(ordinal: usize, seq: &mut A) -> Result<Self::Storage, A::Error>;
}

macro_rules! impl_serde {
    ($len:literal, $storage:ident, [$($all:ident),+], [$(($n:literal, $alt:ident, $t:ident)),+]) => {
        impl<$($t: Serialize),+> ListSerialize for ($($t,)+) {
            fn serialize_storage<Sr: Serializer>(storage: &Self::Storage, serializer: Sr) -> Result<Sr::Ok, Sr::Error> {
                let mut tuple = serializer.serialize_tuple(2)?;
                match storage {
                    $(
                        $crate::list::$storage::$alt(value) => {
                            tuple.serialize_element(&($n as usize))?;
                            tuple.serialize_element(value)?;
                        }
                    )+
                    $crate::list::$storage::Valueless => {
                        return Err(<Sr::Error as ser::Error>::custom("cannot serialize a valueless variant"));
                    }
                }
                tuple.end()
            }
        }

        impl<$($t: DeserializeOwned),+> ListDeserialize for ($($t,)+) {
            fn deserialize_at<'de, Sq: SeqAccess<'de>>(ordinal: usize, seq: &mut Sq) -> Result<Self::Storage, Sq::Error> {
                match ordinal {
                    $(
                        $n => seq
                            .next_element::<$t>()?
                            .map($crate::list::$storage::$alt)
                            .ok_or_else(|| de::Error::invalid_length(1, &"a variant payload")),
                    )+
                    _ => Err(de::Error::invalid_value(
                        de::Unexpected::Unsigned(ordinal as u64),
                        &concat!("an ordinal below ", stringify!($len)),
                    )),
                }
            }
        }
    };
}

for_each_arity!(impl_serde);

impl<L: ListSerialize> Serialize for Variant<L> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        L::serialize_storage(self.storage(), serializer)
    }
}

struct VariantVisitor<L>(PhantomData<L>);

impl<'de, L: ListDeserialize> Visitor<'de> for VariantVisitor<L> {
    type Value = Variant<L>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an (ordinal, payload) pair")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let ordinal: usize = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        L::deserialize_at(ordinal, &mut seq).map(Variant::from_storage)
    }
}

impl<'de, L: ListDeserialize> Deserialize<'de> for Variant<L> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_tuple(2, VariantVisitor(PhantomData))
    }
}
