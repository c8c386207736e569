//! Field-wise layering of optional values.

/// Layering contract shared by every option group.
///
/// `merge_from` lets set fields of `other` win; `fill_from` only writes fields
/// that are still unset on `self`.
pub trait Overlay {
    fn merge_from(&mut self, other: &Self);
    fn fill_from(&mut self, other: &Self);
    fn is_unset(&self) -> bool;
}

impl<T: Clone> Overlay for Option<T> {
    #[inline]
    fn merge_from(&mut self, other: &Self) {
        if other.is_some() {
            self.clone_from(other);
        }
    }

    #[inline]
    fn fill_from(&mut self, other: &Self) {
        if self.is_none() {
            self.clone_from(other);
        }
    }

    #[inline]
    fn is_unset(&self) -> bool {
        self.is_none()
    }
}

/// Implements [`Overlay`] for a struct by recursing into each listed field.
macro_rules! impl_overlay {
    ($ty:ty { $($field:ident),+ $(,)? }) => {
        impl $crate::overlay::Overlay for $ty {
            fn merge_from(&mut self, other: &Self) {
                $( $crate::overlay::Overlay::merge_from(&mut self.$field, &other.$field); )+
            }

            fn fill_from(&mut self, other: &Self) {
                $( $crate::overlay::Overlay::fill_from(&mut self.$field, &other.$field); )+
            }

            fn is_unset(&self) -> bool {
                true $( && $crate::overlay::Overlay::is_unset(&self.$field) )+
            }
        }
    };
}

pub(crate) use impl_overlay;
