//! Conversion traits used by the value-inspecting collection operations.
//!
//! A [`Collection`](super::Collection) is generic over its payload. Most
//! operations never look inside a value, but a few need to:
//! - `ToNumber`: `sum` and `sum_by`
//! - `ToText`: `implode`
//! - `ToKey`: `flip`
//! - `Indexable`: `sum_by`
//!
//! All of them are implemented for [`Value`] and for the primitive types a
//! typed collection is likely to hold.

use super::{Collection, Key, Number, Value};

/// Values that may have a numeric reading.
pub trait ToNumber {
    /// Returns the numeric value, or `None` if this value is not a number.
    fn to_number(&self) -> Option<Number>;

    /// Type name reported in errors.
    fn kind(&self) -> &'static str;
}

/// Values that may have a natural text form.
pub trait ToText {
    /// Returns the text form, or `None` when there is no natural one.
    ///
    /// ```
    /// use collection::{Value, collection::ToText};
    ///
    /// assert_eq!(Value::from(3).to_text().as_deref(), Some("3"));
    /// assert_eq!(Value::Null.to_text().as_deref(), Some(""));
    /// assert_eq!(Value::List(vec![]).to_text(), None);
    /// ```
    fn to_text(&self) -> Option<String>;

    /// Type name reported in errors.
    fn kind(&self) -> &'static str;
}

/// Values that can become a collection key.
pub trait ToKey {
    /// Returns the key form, or `None` for values that cannot be keys.
    fn to_key(&self) -> Option<Key>;

    /// Type name reported in errors.
    fn kind(&self) -> &'static str;
}

/// Values whose fields can be looked up by key.
pub trait Indexable {
    /// Returns `None` when this value has no fields at all.
    fn fields(&self) -> Option<Fields<'_>>;

    /// Type name reported in errors.
    fn kind(&self) -> &'static str;
}

/// A borrowed view over something with keyed fields.
#[derive(Debug, Clone, Copy)]
pub enum Fields<'a> {
    List(&'a [Value]),
    Map(&'a Collection<Value>),
}

impl<'a> Fields<'a> {
    /// Looks up a field by key; lists only answer integer keys.
    pub fn get(&self, key: &Key) -> Option<&'a Value> {
        match (*self, key) {
            (Fields::Map(map), key) => map.get(key),
            (Fields::List(list), Key::Int(n)) => {
                usize::try_from(*n).ok().and_then(|index| list.get(index))
            }
            (Fields::List(_), Key::Str(_)) => None,
        }
    }
}

impl ToNumber for Value {
    fn to_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Int(*n)),
            Value::Float(n) => Some(Number::Float(*n)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}

impl ToText for Value {
    fn to_text(&self) -> Option<String> {
        match self {
            Value::Null => Some(String::new()),
            Value::List(_) | Value::Map(_) => None,
            scalar => Some(scalar.to_string()),
        }
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}

impl ToKey for Value {
    fn to_key(&self) -> Option<Key> {
        match self {
            Value::Int(n) => Some(Key::Int(*n)),
            Value::Text(s) => Some(Key::Str(s.clone())),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}

impl Indexable for Value {
    fn fields(&self) -> Option<Fields<'_>> {
        match self {
            Value::List(list) => Some(Fields::List(list)),
            Value::Map(map) => Some(Fields::Map(map)),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}

impl Indexable for Collection<Value> {
    fn fields(&self) -> Option<Fields<'_>> {
        Some(Fields::Map(self))
    }

    fn kind(&self) -> &'static str {
        "map"
    }
}

impl ToKey for Key {
    fn to_key(&self) -> Option<Key> {
        Some(self.clone())
    }

    fn kind(&self) -> &'static str {
        match self {
            Key::Int(_) => "int",
            Key::Str(_) => "text",
        }
    }
}

impl ToText for Key {
    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn kind(&self) -> &'static str {
        ToKey::kind(self)
    }
}

impl ToNumber for Number {
    fn to_number(&self) -> Option<Number> {
        Some(*self)
    }

    fn kind(&self) -> &'static str {
        "number"
    }
}

macro_rules! impl_for_integers {
    ($($ty:ty),*) => {
        $(
            impl ToNumber for $ty {
                fn to_number(&self) -> Option<Number> {
                    Some(Number::Int(*self as i64))
                }

                fn kind(&self) -> &'static str {
                    "int"
                }
            }

            impl ToText for $ty {
                fn to_text(&self) -> Option<String> {
                    Some(self.to_string())
                }

                fn kind(&self) -> &'static str {
                    "int"
                }
            }

            impl ToKey for $ty {
                fn to_key(&self) -> Option<Key> {
                    Some(Key::Int(*self as i64))
                }

                fn kind(&self) -> &'static str {
                    "int"
                }
            }
        )*
    };
}

impl_for_integers!(i8, i16, i32, i64, u8, u16, u32);

impl ToNumber for f64 {
    fn to_number(&self) -> Option<Number> {
        Some(Number::Float(*self))
    }

    fn kind(&self) -> &'static str {
        "float"
    }
}

impl ToText for f64 {
    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn kind(&self) -> &'static str {
        "float"
    }
}

impl ToText for bool {
    fn to_text(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn kind(&self) -> &'static str {
        "bool"
    }
}

impl ToText for String {
    fn to_text(&self) -> Option<String> {
        Some(self.clone())
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}

impl ToText for &str {
    fn to_text(&self) -> Option<String> {
        Some((*self).to_string())
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}

impl ToKey for String {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Str(self.clone()))
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}

impl ToKey for &str {
    fn to_key(&self) -> Option<Key> {
        Some(Key::Str((*self).to_string()))
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}
