/*!
`serde` support for `These`.

Human-readable formats see an object with a `"This"` field, a `"That"` field, or both, in that
order. Other formats see a tuple of the shape discriminant followed by the payload(s), each in the
format's own encoding. This mirrors the layout of [`binary`](crate::binary), whose payload encoding
is its own.
*/
use crate::these::{Shape, These};
use serde::de::{self, Deserialize, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, SerializeTuple, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// The key of the left value in the object representation
pub const THIS_KEY: &str = "This";
/// The key of the right value in the object representation
pub const THAT_KEY: &str = "That";

const FIELDS: &[&str] = &[THIS_KEY, THAT_KEY];

const EXPECTING: &str = "an object with a \"This\" field, a \"That\" field, or both";

impl<L: Serialize, R: Serialize> Serialize for These<L, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (left, right) = self.as_ref().into_options();
        let fields = left.is_some() as usize + right.is_some() as usize;
        if serializer.is_human_readable() {
            let mut map = serializer.serialize_map(Some(fields))?;
            if let Some(left) = left {
                map.serialize_entry(THIS_KEY, left)?;
            }
            if let Some(right) = right {
                map.serialize_entry(THAT_KEY, right)?;
            }
            map.end()
        } else {
            let mut tuple = serializer.serialize_tuple(1 + fields)?;
            tuple.serialize_element(&self.shape().discriminant())?;
            if let Some(left) = left {
                tuple.serialize_element(left)?;
            }
            if let Some(right) = right {
                tuple.serialize_element(right)?;
            }
            tuple.end()
        }
    }
}

impl<'de, L: Deserialize<'de>, R: Deserialize<'de>> Deserialize<'de> for These<L, R> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<These<L, R>, D::Error> {
        if deserializer.is_human_readable() {
            deserializer.deserialize_map(ObjectVisitor(PhantomData))
        } else {
            deserializer.deserialize_tuple(3, TupleVisitor(PhantomData))
        }
    }
}

/// A field of the object representation
enum Field {
    This,
    That,
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Field, D::Error> {
        struct FieldVisitor;

        impl<'de> Visitor<'de> for FieldVisitor {
            type Value = Field;

            fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
                write!(fmt, "\"{}\" or \"{}\"", THIS_KEY, THAT_KEY)
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<Field, E> {
                match value {
                    THIS_KEY => Ok(Field::This),
                    THAT_KEY => Ok(Field::That),
                    _ => {
                        tracing::debug!(field = value, "rejecting These object with unknown field");
                        Err(de::Error::unknown_field(value, FIELDS))
                    }
                }
            }
        }

        deserializer.deserialize_identifier(FieldVisitor)
    }
}

struct ObjectVisitor<L, R>(PhantomData<fn() -> These<L, R>>);

impl<'de, L: Deserialize<'de>, R: Deserialize<'de>> Visitor<'de> for ObjectVisitor<L, R> {
    type Value = These<L, R>;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(EXPECTING)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<These<L, R>, A::Error> {
        let mut left: Option<L> = None;
        let mut right: Option<R> = None;
        while let Some(field) = map.next_key()? {
            match field {
                Field::This if left.is_some() => return Err(de::Error::duplicate_field(THIS_KEY)),
                Field::That if right.is_some() => return Err(de::Error::duplicate_field(THAT_KEY)),
                Field::This => left = Some(map.next_value()?),
                Field::That => right = Some(map.next_value()?),
            }
        }
        These::from_options(left, right).ok_or_else(|| {
            tracing::debug!("rejecting These object with neither field");
            de::Error::invalid_length(0, &self)
        })
    }
}

struct TupleVisitor<L, R>(PhantomData<fn() -> These<L, R>>);

impl<'de, L: Deserialize<'de>, R: Deserialize<'de>> Visitor<'de> for TupleVisitor<L, R> {
    type Value = These<L, R>;

    fn expecting(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str("a discriminant (0, 1 or 2) followed by the values it announces")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<These<L, R>, A::Error> {
        let discriminant: u8 = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let shape = Shape::from_discriminant(discriminant).ok_or_else(|| {
            tracing::debug!(discriminant, "rejecting These with invalid discriminant");
            de::Error::invalid_value(
                de::Unexpected::Unsigned(discriminant.into()),
                &"discriminant 0 (This), 1 (That) or 2 (Both)",
            )
        })?;
        let value = match shape {
            Shape::This => These::This(
                seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?,
            ),
            Shape::That => These::That(
                seq.next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?,
            ),
            Shape::Both => {
                let left = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(1, &self))?;
                let right = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(2, &self))?;
                These::Both(left, right)
            }
        };
        Ok(value)
    }
}
