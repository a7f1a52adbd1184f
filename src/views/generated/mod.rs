//! Variants written by `satlens generate`
//!
//! Each `variant_<id>` module is a clone of a base component plus its
//! registration stub. The generator appends new modules directly above the
//! end marker, so keep the marker as the last line of the list.

use crate::registry::VariantDef;

macro_rules! generated_variants {
    ($($module:ident,)*) => {
        $(pub mod $module;)*

        pub static DEFS: &[&VariantDef] = &[$(&$module::VARIANT),*];
    };
}

generated_variants! {
    variant_101,
    variant_102,
    // @satlens:end-variants
}
