use {
    crate::{
        error::Error,
        slot::{Callable, CallableSlot, Slot},
    },
    static_assertions::{assert_not_impl_any, const_assert_eq},
    std::{
        fmt,
        mem::{self, size_of},
    },
    tracing::{debug, trace},
};

/// Ownership state of a [`Function`].
///
/// A slot is only ever reachable through the `Owning` variant,
/// so it is released exactly once: when the variant is dropped or replaced.
///
/// [`Function`]: struct.Function.html
enum State<'a> {
    Owning(Box<dyn CallableSlot + 'a>),
    Empty,
}

/// Move-only, type-erased wrapper for a callable with no arguments and no return value.
///
/// Accepts closures, function pointers and function objects (anything implementing [`Callable`]).
/// The callable is always stored on the heap, in a slot exclusively owned by the `Function`.
///
/// A `Function` is either owning or empty.
/// It is empty when created via [`empty`] \ [`default`], and after its slot was moved out via [`take`].
/// An empty `Function` stays empty; calling it does nothing.
///
/// A `Function` cannot be copied or cloned:
///
/// ```compile_fail
/// use minifunction::Function;
///
/// let f = Function::new(|| {});
/// let g: Function = f.clone();
/// ```
///
/// ```compile_fail
/// use minifunction::Function;
///
/// let mut f = Function::new(|| {});
/// let g = f;
/// f.call();
/// ```
///
/// [`Callable`]: trait.Callable.html
/// [`empty`]: #method.empty
/// [`default`]: #impl-Default
/// [`take`]: #method.take
pub struct Function<'a> {
    state: State<'a>,
}

// Enum niche in the (fat) box pointer.
const_assert_eq!(size_of::<Function<'static>>(), size_of::<usize>() * 2);

assert_not_impl_any!(Function<'static>: Clone, Copy, Send, Sync);

impl<'a> Function<'a> {
    /// Creates a [`Function`] which owns a heap-allocated slot containing `f`.
    ///
    /// [`Function`]: struct.Function.html
    pub fn new<F>(f: F) -> Self
    where
        F: Callable + 'a,
    {
        let slot: Box<dyn CallableSlot + 'a> = Box::new(Slot::new(f));

        trace!(callable = slot.type_name(), "function slot allocated");

        Self {
            state: State::Owning(slot),
        }
    }

    /// Creates an empty [`Function`].
    ///
    /// [`Function`]: struct.Function.html
    pub fn empty() -> Self {
        Self {
            state: State::Empty,
        }
    }

    /// Moves the slot out of `self` into a new [`Function`], leaving `self` empty.
    ///
    /// Taking from an empty [`Function`] returns an empty [`Function`].
    ///
    /// [`Function`]: struct.Function.html
    pub fn take(&mut self) -> Self {
        let state = mem::replace(&mut self.state, State::Empty);

        if let State::Owning(slot) = &state {
            trace!(callable = slot.type_name(), "function slot moved");
        }

        Self { state }
    }

    /// If the [`Function`] owns a slot, returns `true`; otherwise returns `false`.
    ///
    /// [`Function`]: struct.Function.html
    pub fn is_some(&self) -> bool {
        match self.state {
            State::Owning(_) => true,
            State::Empty => false,
        }
    }

    /// If the [`Function`] is empty, returns `true`; otherwise returns `false`.
    ///
    /// [`Function`]: struct.Function.html
    pub fn is_empty(&self) -> bool {
        !self.is_some()
    }

    /// Calls the stored callable, if any. Does nothing if the [`Function`] is empty.
    ///
    /// Panics raised by the callable propagate to the caller.
    ///
    /// [`Function`]: struct.Function.html
    pub fn call(&mut self) {
        match &mut self.state {
            State::Owning(slot) => slot.invoke(),
            State::Empty => {
                debug!("called an empty function");
            }
        }
    }

    /// Calls the stored callable and returns `Ok`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] and calls nothing if the [`Function`] is empty.
    ///
    /// [`Function`]: struct.Function.html
    /// [`Error::Empty`]: enum.Error.html#variant.Empty
    pub fn try_call(&mut self) -> Result<(), Error> {
        match &mut self.state {
            State::Owning(slot) => {
                slot.invoke();
                Ok(())
            }
            State::Empty => Err(Error::Empty),
        }
    }
}

impl Default for Function<'_> {
    fn default() -> Self {
        Self::empty()
    }
}

impl Drop for Function<'_> {
    fn drop(&mut self) {
        if let State::Owning(slot) = &self.state {
            trace!(callable = slot.type_name(), "function slot released");
        }

        // The slot, if any, is freed when `state` is dropped.
    }
}

impl Callable for Function<'_> {
    fn call(&mut self) {
        Function::call(self)
    }
}

impl fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            State::Owning(slot) => f.debug_tuple("Function").field(&slot.type_name()).finish(),
            State::Empty => f.write_str("Function(<empty>)"),
        }
    }
}
