//! Field adapters
//!
//! A field adapter ties one field of a record type to the codec for that
//! field's type and to the column's declared default value. Adapters are
//! built from a pair of accessor functions captured when the column is
//! registered, so no reflection is needed and the field type stays known to
//! the compiler right up to the `dyn FieldAdapter<T>` boundary.

use super::codec::{CodecError, FieldCodec};
use super::segment::Segment;

/// Type-erased view of a single record field
pub trait FieldAdapter<T> {
    /// Parse `value` and store it in the record's field
    ///
    /// On failure the field keeps its previous value.
    fn from_segment(&self, record: &mut T, value: Segment<'_>) -> Result<(), CodecError>;

    /// Append the field's textual form to `out`
    fn to_text(&self, record: &T, out: &mut String);

    fn equals_default_value(&self, record: &T) -> bool;

    fn set_default_value(&self, record: &mut T);
}

/// Concrete adapter for a field of type `C` inside record type `T`
pub struct Field<T, C> {
    get: fn(&T) -> &C,
    get_mut: fn(&mut T) -> &mut C,
    default_value: C,
}

impl<T, C> Field<T, C> {
    pub fn new(get: fn(&T) -> &C, get_mut: fn(&mut T) -> &mut C, default_value: C) -> Self {
        Self {
            get,
            get_mut,
            default_value,
        }
    }

    pub fn default_value(&self) -> &C {
        &self.default_value
    }
}

impl<T, C> FieldAdapter<T> for Field<T, C>
where
    C: FieldCodec + PartialEq + Clone,
{
    fn from_segment(&self, record: &mut T, value: Segment<'_>) -> Result<(), CodecError> {
        let parsed = C::parse(value)?;
        *(self.get_mut)(record) = parsed;
        Ok(())
    }

    fn to_text(&self, record: &T, out: &mut String) {
        (self.get)(record).encode(out);
    }

    fn equals_default_value(&self, record: &T) -> bool {
        *(self.get)(record) == self.default_value
    }

    fn set_default_value(&self, record: &mut T) {
        *(self.get_mut)(record) = self.default_value.clone();
    }
}

impl<T, C: std::fmt::Debug> std::fmt::Debug for Field<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("default_value", &self.default_value)
            .finish_non_exhaustive()
    }
}
