// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record descriptors: the static metadata the population engine walks.
//!
//! A bindable struct implements [`Record`], exposing a static table of
//! [`FieldDescriptor`]s in declaration order plus an indexed accessor that
//! hands out a [`FieldMut`] for each field. The [`record!`](crate::record)
//! macro writes both for a plain struct definition.

use crate::domain::config_value::{ScalarKind, ScalarValue};
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

/// The binding kind of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A single converted value.
    Scalar(ScalarKind),
    /// A delimited list of converted values.
    Sequence(ScalarKind),
    /// A nested record whose fields are bound beneath this field's key.
    Record,
    /// A type the engine cannot bind; the name is reported in the error.
    Unsupported(&'static str),
}

/// Static metadata for one field of a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// The declared field name.
    pub name: &'static str,
    /// The rename annotation, or [`IGNORE_FIELD`](crate::domain::config_key::IGNORE_FIELD).
    pub tag: Option<&'static str>,
    /// How the field is bound.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Creates a descriptor without an annotation.
    pub const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            tag: None,
            kind,
        }
    }

    /// Attaches a rename (or ignore) annotation.
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }
}

/// Mutable access to one field, by binding kind.
pub enum FieldMut<'a> {
    /// A scalar field.
    Scalar(&'a mut dyn ScalarTarget),
    /// A sequence field.
    Sequence(&'a mut dyn SequenceTarget),
    /// A nested record.
    Record(&'a mut dyn Record),
    /// A field whose type cannot be bound.
    Unsupported,
}

/// A struct that can be populated from the flat configuration map.
///
/// Implementations must keep `fields()` and `field_mut()` in step: index `i`
/// of the table describes the field returned by `field_mut(i)`.
///
/// # Examples
///
/// Implementing the trait by hand:
///
/// ```
/// use hexbind::domain::config_value::ScalarKind;
/// use hexbind::domain::record::{FieldDescriptor, FieldKind, FieldMut, FieldType, Record};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// impl Record for Server {
///     fn fields(&self) -> &'static [FieldDescriptor] {
///         const FIELDS: &[FieldDescriptor] = &[
///             FieldDescriptor::new("host", FieldKind::Scalar(ScalarKind::String)),
///             FieldDescriptor::new("port", FieldKind::Scalar(ScalarKind::U16)),
///         ];
///         FIELDS
///     }
///
///     fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
///         match index {
///             0 => Some(self.host.as_field_mut()),
///             1 => Some(self.port.as_field_mut()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Record {
    /// Returns the field table in declaration order.
    fn fields(&self) -> &'static [FieldDescriptor];

    /// Returns mutable access to the field at `index` of [`Record::fields`].
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}

/// A type that can appear as a field of a [`Record`].
pub trait FieldType {
    /// The binding kind recorded in the descriptor table.
    const KIND: FieldKind;

    /// Returns mutable access to the value as a field.
    fn as_field_mut(&mut self) -> FieldMut<'_>;
}

/// A primitive type the converter can produce.
pub trait Scalar: Default + 'static {
    /// The converter kind for this type.
    const KIND: ScalarKind;

    /// Extracts a value of this type, or `None` if `value` has another kind.
    fn from_value(value: ScalarValue) -> Option<Self>;
}

/// Object-safe view of a scalar field.
pub trait ScalarTarget {
    /// The converter kind of the field.
    fn kind(&self) -> ScalarKind;

    /// Stores `value`, or the zero value if it has a different kind.
    fn assign(&mut self, value: ScalarValue);
}

/// Object-safe view of a sequence field.
pub trait SequenceTarget {
    /// The converter kind of the elements.
    fn element_kind(&self) -> ScalarKind;

    /// Replaces the sequence with `values`.
    fn assign(&mut self, values: Vec<ScalarValue>);
}

impl<T: Scalar> ScalarTarget for T {
    fn kind(&self) -> ScalarKind {
        T::KIND
    }

    fn assign(&mut self, value: ScalarValue) {
        *self = T::from_value(value).unwrap_or_default();
    }
}

impl<T: Scalar> SequenceTarget for Vec<T> {
    fn element_kind(&self) -> ScalarKind {
        T::KIND
    }

    fn assign(&mut self, values: Vec<ScalarValue>) {
        *self = values
            .into_iter()
            .map(|value| T::from_value(value).unwrap_or_default())
            .collect();
    }
}

macro_rules! scalar_types {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const KIND: ScalarKind = ScalarKind::$variant;

                fn from_value(value: ScalarValue) -> Option<Self> {
                    match value {
                        ScalarValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }

            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Scalar(ScalarKind::$variant);

                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Scalar(self)
                }
            }
        )*
    };
}

scalar_types! {
    String => String,
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    Duration => Duration,
}

impl<T: Scalar> FieldType for Vec<T> {
    const KIND: FieldKind = FieldKind::Sequence(T::KIND);

    fn as_field_mut(&mut self) -> FieldMut<'_> {
        FieldMut::Sequence(self)
    }
}

macro_rules! unsupported_types {
    ($($name:literal => [$($generics:tt)*] $ty:ty),* $(,)?) => {
        $(
            impl<$($generics)*> FieldType for $ty {
                const KIND: FieldKind = FieldKind::Unsupported($name);

                fn as_field_mut(&mut self) -> FieldMut<'_> {
                    FieldMut::Unsupported
                }
            }
        )*
    };
}

unsupported_types! {
    "map" => [K, V, S] HashMap<K, V, S>,
    "map" => [K, V] BTreeMap<K, V>,
    "option" => [T] Option<T>,
    "pointer" => [T: ?Sized] Box<T>,
    "array" => [T, const N: usize] [T; N],
    "char" => [] char,
    "unit" => [] (),
}

/// Declares a struct together with its [`Record`] and [`FieldType`] impls.
///
/// Each field may be followed by `as "<key>"` to bind it under a different
/// name, or `as "-"` to leave it out of binding entirely. Field types must
/// themselves implement [`FieldType`]: scalars, `Vec`s of scalars, or other
/// records declared with this macro. Generic structs are not supported.
///
/// # Examples
///
/// ```
/// use hexbind::record;
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct Database {
///         pub host: String,
///         pub port: u16 as "PORT_NUMBER",
///     }
/// }
///
/// record! {
///     #[derive(Debug, Default)]
///     pub struct AppConfig {
///         /// Nested under `database__`.
///         pub database: Database,
///         pub tags: Vec<String>,
///         pub scratch: String as "-",
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty $(as $tag:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field : $field_ty,
            )*
        }

        impl $crate::domain::record::Record for $name {
            fn fields(&self) -> &'static [$crate::domain::record::FieldDescriptor] {
                const FIELDS: &[$crate::domain::record::FieldDescriptor] = &[
                    $(
                        $crate::domain::record::FieldDescriptor::new(
                            stringify!($field),
                            <$field_ty as $crate::domain::record::FieldType>::KIND,
                        )$(.with_tag($tag))?,
                    )*
                ];
                FIELDS
            }

            #[allow(unused_mut, unused_assignments, unused_variables)]
            fn field_mut(
                &mut self,
                index: usize,
            ) -> ::core::option::Option<$crate::domain::record::FieldMut<'_>> {
                let mut position = 0usize;
                $(
                    if index == position {
                        return ::core::option::Option::Some(
                            $crate::domain::record::FieldType::as_field_mut(&mut self.$field),
                        );
                    }
                    position += 1;
                )*
                ::core::option::Option::None
            }
        }

        impl $crate::domain::record::FieldType for $name {
            const KIND: $crate::domain::record::FieldKind =
                $crate::domain::record::FieldKind::Record;

            fn as_field_mut(&mut self) -> $crate::domain::record::FieldMut<'_> {
                $crate::domain::record::FieldMut::Record(self)
            }
        }
    };
}
