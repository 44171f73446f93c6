macro_rules! log {
    ($level:ident, $($arg:tt)*) => {{
        ::log::log!(target: "ndtensor", ::log::Level::$level, $($arg)*);
    }}
}
macro_rules! error {
    ($($arg:tt)*) => {{
        crate::log::log!(Error, $($arg)*);
    }}
}
macro_rules! trace {
    ($($arg:tt)*) => {{
        crate::log::log!(Trace, $($arg)*);
    }}
}
pub(crate) use error;
pub(crate) use log;
pub(crate) use trace;
