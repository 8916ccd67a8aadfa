//! Stack growth for deep recursion.
//!
//! The Kiwi parser calls rules as ordinary functions, so nested groups such as
//! `((((x))))` or long chains of unary signs recurse on the native stack. Every
//! memoized rule entry goes through [`ensure_sufficient_stack`], which switches
//! to a freshly allocated segment when the current one runs low.
//!
//! On `wasm32` the call is a plain passthrough.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::ensure_sufficient_stack;

    fn nest(depth: u32) -> u32 {
        ensure_sufficient_stack(|| if depth == 0 { 0 } else { nest(depth - 1) + 1 })
    }

    #[test]
    fn passes_through_result() {
        assert_eq!(ensure_sufficient_stack(|| "kiwi"), "kiwi");
        let res: Result<u8, ()> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(res, Ok(7));
    }

    #[test]
    fn shallow_nesting() {
        assert_eq!(nest(16), 16);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        assert_eq!(nest(200_000), 200_000);
    }
}
