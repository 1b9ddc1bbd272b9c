//! Stack growth for the recursive group reducer.
//!
//! Each nested group or subscript costs one reducer frame. The depth limit
//! in [`EvalConfig`](crate::EvalConfig) bounds the recursion; this keeps
//! high limits from overflowing small thread stacks.

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Remaining stack below which we grow (64KB).
    const RED_ZONE: usize = 64 * 1024;

    /// Size of each new stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
