use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(feature = "error_in_core")] {
        pub use core::error::Error;
    } else if #[cfg(feature = "std")] {
        pub use std::error::Error;
    }
}
