//! Field-traversal contract for structured values.
//!
//! A type implementing [`Reflect`] visits each of its declared fields, in
//! declaration order, handing the visitor the field's [`FieldAttribs`] and
//! a type-erased reference to its storage. The [`reflect!`](crate::reflect)
//! macro generates the impl from a field list.
//!
//! Containers take part only as leaf field values: any `'static` value can
//! be a field, and visitors recover the concrete type with
//! [`Any::downcast_mut`].
//!
//! ```
//! use gx_core::reflect::{schema, Reflect};
//!
//! struct Nums { a: i32, b: i32, d: i32 }
//! gx_core::reflect!(Nums { a, b, d: [twice] });
//!
//! let mut n = Nums { a: 1, b: 2, d: 4 };
//! let mut sum = 0;
//! n.for_each_field(&mut |attribs, field| {
//!     let value = *field.downcast_mut::<i32>().unwrap();
//!     sum += if attribs.has("twice") { 2 * value } else { value };
//! });
//! assert_eq!(sum, 11);
//! assert_eq!(schema(&mut n).keys().copied().collect::<Vec<_>>(), ["a", "b", "d"]);
//! ```

use std::any::Any;

use indexmap::IndexMap;

/// Compile-time metadata describing one declared field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldAttribs {
    /// The field's declared name.
    pub name: &'static str,
    /// User-declared boolean attributes set on the field.
    pub attribs: &'static [&'static str],
}

impl FieldAttribs {
    /// Metadata for a field with the given name and attribute set.
    pub const fn new(name: &'static str, attribs: &'static [&'static str]) -> Self {
        Self { name, attribs }
    }

    /// Whether `attrib` was declared on this field.
    pub fn has(&self, attrib: &str) -> bool {
        self.attribs.iter().any(|a| *a == attrib)
    }
}

/// A structured value whose fields can be traversed.
pub trait Reflect {
    /// Invoke `visit` once per declared field, in declaration order.
    fn for_each_field(&mut self, visit: &mut dyn FnMut(&FieldAttribs, &mut dyn Any));
}

/// Collect every field's metadata, keyed by name, in declaration order.
pub fn schema<T: Reflect + ?Sized>(value: &mut T) -> IndexMap<&'static str, FieldAttribs> {
    let mut fields = IndexMap::new();
    value.for_each_field(&mut |attribs, _| {
        fields.insert(attribs.name, *attribs);
    });
    fields
}

/// Implement [`Reflect`] for a struct from its field list.
///
/// Each field may carry a bracketed attribute list: `name: [attr, ...]`.
#[macro_export]
macro_rules! reflect {
    ($ty:ty { $($field:ident $(: [$($attrib:ident),* $(,)?])?),* $(,)? }) => {
        impl $crate::reflect::Reflect for $ty {
            fn for_each_field(
                &mut self,
                visit: &mut dyn FnMut(&$crate::reflect::FieldAttribs, &mut dyn ::core::any::Any),
            ) {
                $(
                    {
                        const ATTRIBS: $crate::reflect::FieldAttribs = $crate::reflect::FieldAttribs::new(
                            stringify!($field),
                            &[$($(stringify!($attrib)),*)?],
                        );
                        visit(&ATTRIBS, &mut self.$field);
                    }
                )*
            }
        }
    };
}
