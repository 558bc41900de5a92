//! Minimal move-only, type-erased `FnMut()` wrapper.
//!
//! A [`Function`] owns one heap-allocated callable of any concrete type
//! (closure, function pointer or [`Callable`] function object) and calls it on demand.
//! [`Defer`] / [`defer!`] build a scope-exit guard on top of it.
//!
//! ```
//! use minifunction::Function;
//!
//! fn free() {
//!     println!("FreeFunc");
//! }
//!
//! let mut functions = vec![
//!     Function::new(free),
//!     Function::new(|| println!("LambdaFunc")),
//! ];
//!
//! for f in functions.iter_mut() {
//!     f.call();
//! }
//!
//! let mut moved = functions[0].take();
//! moved.call();
//! functions[0].call(); // Empty, does nothing.
//! ```
//!
//! [`Function`]: struct.Function.html
//! [`Callable`]: trait.Callable.html
//! [`Defer`]: struct.Defer.html
//! [`defer!`]: macro.defer.html

mod defer;
mod error;
mod function;
mod slot;

pub use {
    defer::Defer,
    error::Error,
    function::Function,
    slot::Callable,
};
