use {
    crate::{function::Function, slot::Callable},
    tracing::trace,
};

/// Calls the wrapped callable once, when dropped.
///
/// The call happens on every scope exit: normal, early `return`, `?`, or unwinding.
/// Multiple guards in one scope run in reverse declaration order.
///
/// See also [`defer!`].
///
/// [`defer!`]: macro.defer.html
#[must_use = "the callable runs as soon as the `Defer` is dropped"]
pub struct Defer<'a> {
    function: Function<'a>,
}

impl<'a> Defer<'a> {
    pub fn new<F>(f: F) -> Self
    where
        F: Callable + 'a,
    {
        Self {
            function: Function::new(f),
        }
    }
}

impl Drop for Defer<'_> {
    fn drop(&mut self) {
        trace!(function = ?self.function, "running deferred call");

        self.function.take().call();
    }
}

/// Runs the block when the enclosing scope exits.
///
/// ```
/// use minifunction::defer;
///
/// let mut log = Vec::new();
/// {
///     let log = &mut log;
///     defer! { log.push("exit"); }
/// }
/// assert_eq!(log, ["exit"]);
/// ```
#[macro_export]
macro_rules! defer {
    ($($body:tt)*) => {
        let _defer = $crate::Defer::new(|| { $($body)* });
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::RefCell, rc::Rc};

    fn early_exit(log: &RefCell<Vec<&'static str>>, bail: bool) -> Result<(), ()> {
        let _guard = Defer::new(|| log.borrow_mut().push("deferred"));

        if bail {
            log.borrow_mut().push("bail");
            return Err(());
        }

        log.borrow_mut().push("body");
        Ok(())
    }

    #[test]
    fn runs_on_scope_exit() {
        let log = RefCell::new(Vec::new());

        {
            let _guard = Defer::new(|| log.borrow_mut().push("deferred"));
            log.borrow_mut().push("body");
        }

        assert_eq!(*log.borrow(), ["body", "deferred"]);
    }

    #[test]
    fn runs_on_early_return() {
        let log = RefCell::new(Vec::new());

        assert!(early_exit(&log, true).is_err());
        assert_eq!(*log.borrow(), ["bail", "deferred"]);

        log.borrow_mut().clear();

        assert!(early_exit(&log, false).is_ok());
        assert_eq!(*log.borrow(), ["body", "deferred"]);
    }

    #[test]
    fn runs_on_unwind() {
        let log = Rc::new(RefCell::new(Vec::new()));

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let log = log.clone();
            let _guard = Defer::new(move || log.borrow_mut().push("deferred"));

            panic!("scope failed");
        }));

        assert!(result.is_err());
        assert_eq!(*log.borrow(), ["deferred"]);
    }

    #[test]
    fn reverse_order() {
        let log = RefCell::new(Vec::new());

        {
            defer! { log.borrow_mut().push("first"); }
            defer! { log.borrow_mut().push("second"); }

            log.borrow_mut().push("body");
        }

        assert_eq!(*log.borrow(), ["body", "second", "first"]);
    }

    #[test]
    fn runs_once() {
        let log = RefCell::new(Vec::new());

        {
            let _guard = Defer::new(Function::new(|| log.borrow_mut().push("deferred")));
        }

        assert_eq!(*log.borrow(), ["deferred"]);
    }

    #[test]
    fn captures_by_copy() {
        let log = RefCell::new(Vec::new());
        let mut n = 1;

        {
            let log = &log;
            let _guard = Defer::new(move || log.borrow_mut().push(n));

            n = 2;
            log.borrow_mut().push(n);
        }

        assert_eq!(*log.borrow(), [2, 1]);
    }
}
