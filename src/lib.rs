#![cfg_attr(docsrs, feature(doc_cfg))]
//! Three-component vector arithmetic for level-editor coordinate math.
//!
//! [`Vector3`] supports the full operator set (add, subtract, multiply,
//! true-divide, floor-divide, modulo) against other vectors, broadcast
//! scalars and raw three-element sequences. Each operator comes in a
//! forward, a reflected and an in-place form, all driven by the
//! [`OpKind`] table. [`dispatch`] resolves operands whose types are only
//! known at runtime.
#[macro_use]
mod macros;

pub mod error;
pub mod logging;
pub mod numeric;
pub mod operand;
pub mod ops;
pub mod value;
pub mod vec;
pub mod vector_math;

// Re-export commonly used items
pub use error::VecError;
pub use logging::init as init_logging;
pub use operand::Operand;
pub use ops::OpKind;
pub use value::{dispatch, Value};
pub use vec::{Axis, Vector3};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust
    //! use srcvec::prelude::*;
    //! let v = Vector3::splat(1.0).try_add([1.0, 2.0, 3.0]);
    //! assert_eq!(v, Ok(Vector3::new(2.0, 3.0, 4.0)));
    //! ```

    pub use crate::{dispatch, Axis, OpKind, Operand, Value, VecError, Vector3};
}
