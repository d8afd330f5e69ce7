//! serde support for the tri-state containers.
//!
//! Fields must be declared with
//! `#[serde(default, skip_serializing_if = "Optional::is_undefined")]`:
//! `default` turns a missing key into `Undefined`, and the skip keeps an
//! undefined field out of the output. Serializing an undefined value that
//! was not skipped is an error.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Error as _, Serialize, Serializer};

use crate::collection::OptionalCollection;
use crate::optional::Optional;
use crate::state::OptionalState;

const UNDEFINED_MSG: &str = "undefined value cannot be serialized; \
     annotate the field with `skip_serializing_if = \"is_undefined\"`";
const MISSING_PAYLOAD_MSG: &str = "state is `has_value` but no payload is stored";

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.state() {
            OptionalState::Undefined => Err(S::Error::custom(UNDEFINED_MSG)),
            OptionalState::Null => serializer.serialize_none(),
            OptionalState::HasValue => match self.has_value() {
                Some(value) => value.serialize(serializer),
                None => Err(S::Error::custom(MISSING_PAYLOAD_MSG)),
            },
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from_option)
    }
}

impl<T: Serialize> Serialize for OptionalCollection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.state() {
            OptionalState::Undefined => Err(S::Error::custom(UNDEFINED_MSG)),
            OptionalState::Null => serializer.serialize_none(),
            OptionalState::HasValue => match self.has_value() {
                Some(items) => serializer.collect_seq(items),
                None => Err(S::Error::custom(MISSING_PAYLOAD_MSG)),
            },
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalCollection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Self::from_option)
    }
}
