//! Config-aware equality, hashing and rendering.
//!
//! `PartialEq` on vectors and matrices always compares components. The
//! [`Structural`] trait adds the switchable semantics selected by a
//! [`VecmathConfig`]:
//!
//! | Setting | Enabled | Disabled |
//! |---------|---------|----------|
//! | object-equals | `equals`/`hash_code` use components | identity (address) |
//! | debug-to-string | `render` prints components | `Name@address` |
//!
//! `Display` renders against [`VecmathConfig::global`].
//!
//! ```rust
//! use vecmath::{Structural, Vector3d, VecmathConfig};
//!
//! let mut config = VecmathConfig::development();
//! let a = Vector3d::new(1.0, 2.0, 3.0);
//! let b = a;
//!
//! assert!(!a.equals(&b, &config));
//! config.set_object_equals(true).unwrap();
//! assert!(a.equals(&b, &config));
//! assert_eq!(a.render(&config), "(1.0, 2.0, 3.0)");
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use vecmath_core::{Scalar, VecmathConfig};

use crate::mat4::Matrix4d;
use crate::vector::Vector;

/// Values with switchable structural or identity semantics.
pub trait Structural {
    /// Type name used in opaque renderings, e.g. `Vector3d`.
    fn type_label(&self) -> String;

    /// Component rendering.
    fn components_string(&self) -> String;

    /// Exact component equality.
    fn components_equal(&self, other: &Self) -> bool;

    /// Feeds the component bit patterns into `state`.
    fn hash_components<H: Hasher>(&self, state: &mut H);

    /// Structural equality if object-equals is enabled, identity otherwise.
    fn equals(&self, other: &Self, config: &VecmathConfig) -> bool {
        if config.is_object_equals_enabled() {
            self.components_equal(other)
        } else {
            std::ptr::eq(self, other)
        }
    }

    /// Hash consistent with [`Structural::equals`] under the same config.
    fn hash_code(&self, config: &VecmathConfig) -> u64 {
        let mut hasher = DefaultHasher::new();
        if config.is_object_equals_enabled() {
            self.hash_components(&mut hasher);
        } else {
            (self as *const Self as *const () as usize).hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Components if debug-to-string is enabled, `Name@address` otherwise.
    fn render(&self, config: &VecmathConfig) -> String {
        if config.is_debug_to_string_enabled() {
            self.components_string()
        } else {
            format!("{}@{:p}", self.type_label(), self as *const Self as *const ())
        }
    }
}

impl<T: Scalar, const N: usize> Structural for Vector<T, N> {
    fn type_label(&self) -> String {
        format!("Vector{}{}", N, T::SUFFIX)
    }

    fn components_string(&self) -> String {
        self.as_string()
    }

    fn components_equal(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }

    fn hash_components<H: Hasher>(&self, state: &mut H) {
        for c in self.to_array() {
            state.write_u64(c.to_bits_u64());
        }
    }
}

impl Structural for Matrix4d {
    fn type_label(&self) -> String {
        "Matrix4d".to_string()
    }

    fn components_string(&self) -> String {
        self.as_string()
    }

    fn components_equal(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }

    fn hash_components<H: Hasher>(&self, state: &mut H) {
        for c in self.to_array() {
            state.write_u64(c.to_bits());
        }
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(VecmathConfig::global()))
    }
}

impl fmt::Display for Matrix4d {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(VecmathConfig::global()))
    }
}
