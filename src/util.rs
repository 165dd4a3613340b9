use std::rc::Rc;

/// Returns `true` when both handles share one allocation.
///
/// [`Rc::ptr_eq`] on trait objects also compares vtable pointers, and
/// those are not guaranteed unique per type. Comparing addresses alone
/// is what membership by identity needs.
pub(crate) fn same_allocation<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::eq(Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>())
}
