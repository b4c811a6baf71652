//! Alan's scalar and array type algebra.
//!
//! A [`Type`] is a small tagged variant: two scalars (`Int`, `Byte`), two array
//! flavors (`Array`, a fixed-size buffer, and `IArray`, an "incomplete" array used only
//! as the referent of a by-reference parameter), and `Void` for procedures.

use std::fmt;
use std::rc::Rc;

use once_cell::sync::Lazy;

/// Byte size of `int`.
pub const INT_SIZE: usize = 4;
/// Byte size of `byte`.
pub const BYTE_SIZE: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    Void,
    Int,
    Byte,
    /// A fixed-size, contiguous buffer of `size` elements of `elem`.
    Array { size: usize, elem: Rc<Type> },
    /// An "incomplete" array of `elem`: valid only as the pointee of a reference
    /// parameter. Its footprint at the call boundary is a single pointer.
    IArray { elem: Rc<Type> },
}

/// Shared sentinel instances, compared by identity in [`equal_type`]'s fast path
/// and handed out wherever a scalar type constant is needed.
pub static TYPE_INTEGER: Lazy<Rc<Type>> = Lazy::new(|| Rc::new(Type::Int));
pub static TYPE_BYTE: Lazy<Rc<Type>> = Lazy::new(|| Rc::new(Type::Byte));
pub static TYPE_VOID: Lazy<Rc<Type>> = Lazy::new(|| Rc::new(Type::Void));

impl Type {
    /// Construct a fixed-size array type. Panics if `elem` is `Void`: arrays of `Void`
    /// violate the data-model invariant and should never reach this constructor (the
    /// parser/semantic layer rejects `array [n] of proc` before calling this).
    pub fn array(size: usize, elem: Type) -> Type {
        assert!(elem != Type::Void, "array cannot be of type void");
        Type::Array {
            size,
            elem: Rc::new(elem),
        }
    }

    /// Construct an incomplete array type. Same `Void` invariant as [`Type::array`].
    pub fn iarray(elem: Type) -> Type {
        assert!(elem != Type::Void, "iarray cannot be of type void");
        Type::IArray {
            elem: Rc::new(elem),
        }
    }

    /// Byte size of a value of this type. `Void` has no size; calling this on `Void`
    /// is an internal-compiler-error condition, never reachable from well-formed input.
    pub fn size(&self) -> usize {
        match self {
            Type::Void => unreachable!("internal error: type void has no size"),
            Type::Int => INT_SIZE,
            Type::Byte => BYTE_SIZE,
            Type::Array { size, elem } => size * elem.size(),
            Type::IArray { .. } => INT_SIZE,
        }
    }

    /// The element type of an array variant. Valid only on `Array`/`IArray`.
    pub fn element_of(&self) -> &Type {
        match self {
            Type::Array { elem, .. } => elem,
            Type::IArray { elem } => elem,
            other => unreachable!("internal error: {other} has no element type"),
        }
    }

    pub fn is_array_like(&self) -> bool {
        matches!(self, Type::Array { .. } | Type::IArray { .. })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Void => write!(f, "proc"),
            Type::Int => write!(f, "int"),
            Type::Byte => write!(f, "byte"),
            Type::Array { size, elem } => write!(f, "array of {elem} [{size}]"),
            Type::IArray { elem } => write!(f, "iarray of {elem}"),
        }
    }
}

/// Structural equality: identical variant, identical size for `Array`, and recursively
/// equal element types for both array flavors.
///
/// This is the *stricter* reading of the Open Question in the reference
/// implementation, where a missing `break` let `ARRAY` fall through into `IARRAY`'s
/// comparison without first checking element-type equality once sizes matched for
/// differently-shaped arrays. We always compare element types, and additionally
/// require matching variant tags (an `Array` is never `equalType` to an `IArray`).
pub fn equal_type(a: &Type, b: &Type) -> bool {
    match (a, b) {
        (Type::Void, Type::Void) | (Type::Int, Type::Int) | (Type::Byte, Type::Byte) => true,
        (
            Type::Array {
                size: sa,
                elem: ea,
            },
            Type::Array {
                size: sb,
                elem: eb,
            },
        ) => sa == sb && equal_type(ea, eb),
        (Type::IArray { elem: ea }, Type::IArray { elem: eb }) => equal_type(ea, eb),
        _ => false,
    }
}

/// Call-site compatibility: equal-variant, or `Array`/`IArray` cross-compatible with
/// compatible element types. Governs whether a fixed-size array actual may be passed
/// where an `IArray` formal is declared (and vice versa, symmetrically).
pub fn compatible_type(formal: &Type, actual: &Type) -> bool {
    match (formal, actual) {
        (Type::Void, Type::Void) | (Type::Int, Type::Int) | (Type::Byte, Type::Byte) => true,
        (
            Type::Array {
                size: sa,
                elem: ea,
            },
            Type::Array {
                size: sb,
                elem: eb,
            },
        ) => sa == sb && compatible_type(ea, eb),
        (Type::IArray { elem: ea }, Type::IArray { elem: eb }) => compatible_type(ea, eb),
        (Type::Array { elem: ea, .. }, Type::IArray { elem: eb })
        | (Type::IArray { elem: ea }, Type::Array { elem: eb, .. }) => compatible_type(ea, eb),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_type_is_reflexive_and_symmetric() {
        let a = Type::array(4, Type::Int);
        let b = Type::array(4, Type::Int);
        assert!(equal_type(&a, &a));
        assert!(equal_type(&a, &b));
        assert!(equal_type(&b, &a));
    }

    #[test]
    fn equal_type_rejects_mismatched_array_size() {
        let a = Type::array(4, Type::Int);
        let b = Type::array(5, Type::Int);
        assert!(!equal_type(&a, &b));
    }

    #[test]
    fn equal_type_rejects_array_vs_iarray() {
        let a = Type::array(4, Type::Byte);
        let b = Type::iarray(Type::Byte);
        assert!(!equal_type(&a, &b));
    }

    #[test]
    fn compatible_type_includes_equal_type() {
        assert!(compatible_type(&Type::Int, &Type::Int));
        assert!(compatible_type(&Type::Byte, &Type::Byte));
        assert!(!compatible_type(&Type::Int, &Type::Byte));
    }

    #[test]
    fn compatible_type_crosses_array_and_iarray() {
        let arr = Type::array(10, Type::Byte);
        let iarr = Type::iarray(Type::Byte);
        assert!(compatible_type(&arr, &iarr));
        assert!(compatible_type(&iarr, &arr));
    }

    #[test]
    fn compatible_type_rejects_mismatched_element_across_array_flavors() {
        let arr = Type::array(10, Type::Byte);
        let iarr = Type::iarray(Type::Int);
        assert!(!compatible_type(&arr, &iarr));
    }

    #[test]
    fn size_of_array_is_count_times_element_size() {
        let arr = Type::array(10, Type::Int);
        assert_eq!(arr.size(), 40);
        let nested = Type::array(3, arr);
        assert_eq!(nested.size(), 120);
    }

    #[test]
    fn iarray_size_is_one_pointer_width() {
        let iarr = Type::iarray(Type::Byte);
        assert_eq!(iarr.size(), INT_SIZE);
    }

    #[test]
    #[should_panic]
    fn array_of_void_is_rejected() {
        Type::array(4, Type::Void);
    }
}
