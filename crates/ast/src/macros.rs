/// Implements [Spanned] for structs carrying a `span` field.
macro_rules! spanned_struct {
    ($($T:ty),* $(,)?) => {
        $(
            impl global_common::Spanned for $T {
                #[inline]
                fn span(&self) -> global_common::Span {
                    self.span
                }
            }
        )*
    };
}

/// Implements [Spanned] for enums whose variants all wrap a spanned node.
macro_rules! spanned_enum {
    ($T:ident { $($V:ident),* $(,)? }) => {
        impl global_common::Spanned for $T {
            fn span(&self) -> global_common::Span {
                match *self {
                    $($T::$V(ref n) => global_common::Spanned::span(n),)*
                }
            }
        }
    };
}

/// Generates `From<Node> for Enum` for every variant.
macro_rules! enum_from {
    ($T:ident { $($V:ident($N:ty)),* $(,)? }) => {
        $(
            impl From<$N> for $T {
                fn from(n: $N) -> Self {
                    $T::$V(n)
                }
            }
        )*
    };
}
