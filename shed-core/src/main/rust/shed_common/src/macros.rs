
/// construct an io::Error of given ErrorKind with a formatted message
/// (callers need a 'use std::io' in scope)
#[macro_export]
macro_rules! io_error {
    ( $kind:expr, $fmt:literal, $($arg:expr),* ) =>
    {
        io::Error::new( $kind, format!($fmt,$($arg),*).as_str())
    }
}
pub use io_error;
