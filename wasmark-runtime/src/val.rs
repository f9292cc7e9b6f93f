//! Typed values for passing into and returning from benchmarked guests.

use std::fmt;

/// Typed values used for call arguments into guest entry points, and for
/// reading results back out of completed calls.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Val {
    /// A WebAssembly linear memory address. Marshals as `i32` on the wire;
    /// kept distinct so hooks can record what they injected.
    GuestPtr(u32),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
}

/// The wasm value kind a [`Val`] marshals as.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValKind {
    I32,
    I64,
    F32,
    F64,
}

impl Val {
    pub fn kind(&self) -> ValKind {
        match self {
            Val::GuestPtr(_) | Val::I32(_) => ValKind::I32,
            Val::I64(_) => ValKind::I64,
            Val::F32(_) => ValKind::F32,
            Val::F64(_) => ValKind::F64,
        }
    }

    /// The result value as an `i32`, if it is one. Most benchmarks report a
    /// single `i32`.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Val::I32(x) => Some(*x),
            Val::GuestPtr(p) => Some(*p as i32),
            _ => None,
        }
    }
}

macro_rules! impl_from_scalars {
    ( { $( $ctor:ident : $ty:ty ),* } ) => {
        $(
            impl From<$ty> for Val {
                fn from(x: $ty) -> Val {
                    Val::$ctor(x)
                }
            }
        )*
    };
}

impl_from_scalars!({
    I32: i32,
    I64: i64,
    F32: f32,
    F64: f64
});

impl fmt::Display for Val {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Val::GuestPtr(p) => write!(f, "{:#x}", p),
            Val::I32(x) => write!(f, "{}", x),
            Val::I64(x) => write!(f, "{}", x),
            Val::F32(x) => write!(f, "{}", x),
            Val::F64(x) => write!(f, "{}", x),
        }
    }
}
