//! Crate-internal macros.
//!
//! Every per-tuple impl in the crate is generated from the single arity table
//! in [`for_each_arity!`], so the supported alternative count is decided in
//! exactly one place.

/// Invokes `$callback!` once per supported alternative count.
///
/// Each invocation receives
/// `(len, StorageN, [all generics], [(ordinal, Arm, Generic), ...])`.
macro_rules! for_each_arity {
    ($callback:ident) => {
        $callback!(1, Storage1, [A], [(0, Alt0, A)]);
        $callback!(2, Storage2, [A, B], [(0, Alt0, A), (1, Alt1, B)]);
        $callback!(3, Storage3, [A, B, C], [(0, Alt0, A), (1, Alt1, B), (2, Alt2, C)]);
        $callback!(
            4,
            Storage4,
            [A, B, C, D],
            [(0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D)]
        );
        $callback!(
            5,
            Storage5,
            [A, B, C, D, E],
            [(0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E)]
        );
        $callback!(
            6,
            Storage6,
            [A, B, C, D, E, F],
            [(0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F)]
        );
        $callback!(
            7,
            Storage7,
            [A, B, C, D, E, F, G],
            [
                (0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F),
                (6, Alt6, G)
            ]
        );
        #[cfg(feature = "wide")]
        $callback!(
            8,
            Storage8,
            [A, B, C, D, E, F, G, H],
            [
                (0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F),
                (6, Alt6, G), (7, Alt7, H)
            ]
        );
        #[cfg(feature = "wide")]
        $callback!(
            9,
            Storage9,
            [A, B, C, D, E, F, G, H, I],
            [
                (0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F),
                (6, Alt6, G), (7, Alt7, H), (8, Alt8, I)
            ]
        );
        #[cfg(feature = "wide")]
        $callback!(
            10,
            Storage10,
            [A, B, C, D, E, F, G, H, I, J],
            [
                (0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F),
                (6, Alt6, G), (7, Alt7, H), (8, Alt8, I), (9, Alt9, J)
            ]
        );
        #[cfg(feature = "wide")]
        $callback!(
            11,
            Storage11,
            [A, B, C, D, E, F, G, H, I, J, K],
            [
                (0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F),
                (6, Alt6, G), (7, Alt7, H), (8, Alt8, I), (9, Alt9, J), (10, Alt10, K)
            ]
        );
        #[cfg(feature = "wide")]
        $callback!(
            12,
            Storage12,
            [A, B, C, D, E, F, G, H, I, J, K, L],
            [
                (0, Alt0, A), (1, Alt1, B), (2, Alt2, C), (3, Alt3, D), (4, Alt4, E), (5, Alt5, F),
                (6, Alt6, G), (7, Alt7, H), (8, Alt8, I), (9, Alt9, J), (10, Alt10, K),
                (11, Alt11, L)
            ]
        );
    };
}

/// Emits a `trace`-level event for a state-machine transition.
///
/// Compiles to nothing unless the `tracing` feature is enabled.
macro_rules! trace_transition {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
    };
}
