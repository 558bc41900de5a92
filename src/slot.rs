use std::any;

/// A value which may be called with no arguments and returns nothing.
///
/// Implemented for every `FnMut()` closure and function pointer.
/// Function-object types may implement it directly:
///
/// ```
/// use minifunction::{Callable, Function};
///
/// struct Counter(u32);
///
/// impl Callable for Counter {
///     fn call(&mut self) {
///         self.0 += 1;
///     }
/// }
///
/// let mut f = Function::new(Counter(0));
/// f.call();
/// ```
pub trait Callable {
    fn call(&mut self);
}

impl<F> Callable for F
where
    F: FnMut(),
{
    fn call(&mut self) {
        self()
    }
}

/// Type-erased view of a heap-allocated [`Slot`], as held by the [`Function`].
///
/// Dropping a `Box<dyn CallableSlot>` drops the concrete `Slot<T>` and the callable it holds.
///
/// [`Function`]: struct.Function.html
pub(crate) trait CallableSlot {
    fn invoke(&mut self);

    /// Name of the erased callable type, for diagnostics only.
    fn type_name(&self) -> &'static str;
}

/// Holds exactly one callable of concrete type `T`.
pub(crate) struct Slot<T> {
    target: T,
}

impl<T: Callable> Slot<T> {
    pub(crate) fn new(target: T) -> Self {
        Self { target }
    }
}

impl<T: Callable> CallableSlot for Slot<T> {
    fn invoke(&mut self) {
        self.target.call();
    }

    fn type_name(&self) -> &'static str {
        any::type_name::<T>()
    }
}
