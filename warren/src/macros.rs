#[macro_export]
macro_rules! from_external_error {
    () => {};
    ($head:path) => {
        impl From<$head> for $crate::error::WarrenError {
            fn from(err: $head) -> Self { $crate::error::WarrenError::Unhandled(Box::new(err)) }
        }
    };
    ($head:path $(, $tail:path)*) => {
        impl From<$head> for $crate::error::WarrenError {
            fn from(err: $head) -> Self { $crate::error::WarrenError::Unhandled(Box::new(err)) }
        }
        from_external_error!($($tail),*);
    };
}
