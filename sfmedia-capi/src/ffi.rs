/// The value an exported function returns when its arguments are rejected or its body fails.
pub trait FallbackValue {
    fn fallback() -> Self;
}

impl FallbackValue for () {
    fn fallback() -> Self {}
}

impl<T> FallbackValue for *const T {
    fn fallback() -> Self {
        std::ptr::null()
    }
}

impl<T> FallbackValue for *mut T {
    fn fallback() -> Self {
        std::ptr::null_mut()
    }
}

macro_rules! fallback_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::ffi::FallbackValue for $ty {
                fn fallback() -> Self {
                    ::std::default::Default::default()
                }
            }
        )*
    };
}

fallback_default!(bool, u8, u16, u32, u64, usize, i8, i16, i32, i64, f32);

macro_rules! ret_ty {
    () => { () };
    ($ret:ty) => { $ret };
}

macro_rules! ffi_body {
    ($func_name:ident, $ret:ty, $body:block) => {
        {
            let _span = ::tracing::debug_span!("ffi", function = ::std::stringify!($func_name)).entered();
            match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> $ret { $body })) {
                Ok(value) => value,
                Err(panic) => $crate::error::SfError::panic(panic).export(),
            }
        }
    };
    ($func_name:ident, $ret:ty, |$($ref_capture:ident),*|; mut |$($mut_capture:ident),*| $body:block) => {
        $crate::ffi::ffi_body!($func_name, $ret, {
            $($crate::error::assert_non_null!($ref_capture);)*
            $(let $ref_capture = unsafe { &*$ref_capture };)*
            $($crate::error::assert_non_null!($mut_capture);)*
            $(let $mut_capture = unsafe { &mut *$mut_capture };)*
            $body
        })
    };
    ($func_name:ident, $ret:ty, mut |$($mut_capture:ident),*| $body:block) => {
        $crate::ffi::ffi_body!($func_name, $ret, {
            $($crate::error::assert_non_null!($mut_capture);)*
            $(let $mut_capture = unsafe { &mut *$mut_capture };)*
            $body
        })
    };
    ($func_name:ident, $ret:ty, |$($ref_capture:ident),*| $body:block) => {
        $crate::ffi::ffi_body!($func_name, $ret, {
            $($crate::error::assert_non_null!($ref_capture);)*
            $(let $ref_capture = unsafe { &*$ref_capture };)*
            $body
        })
    };
}

macro_rules! extern_fn {
    ($(#[$($attrss:tt)*])* fn $func_name:ident ($($arg_name:ident : $arg_ty:ty),* $(,)?) $(-> $ret:ty)? $body:block) => {
        ::paste::paste! {
            /// Function pointer definition for
            #[doc = ::std::stringify!($func_name)]
            pub type [<PFN_ $func_name>] = unsafe extern "C" fn($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?);
        }

        #[no_mangle]
        $(#[$($attrss)*])*
        pub unsafe extern "C" fn $func_name($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?) {
            $crate::ffi::ffi_body!($func_name, $crate::ffi::ret_ty!($($ret)?), $body)
        }
    };

    ($(#[$($attrss:tt)*])* fn $func_name:ident ($($arg_name:ident : $arg_ty:ty),* $(,)?) |$($ref_capture:ident),*|; mut |$($mut_capture:ident),*| $(-> $ret:ty)? $body:block) => {
        ::paste::paste! {
            /// Function pointer definition for
            #[doc = ::std::stringify!($func_name)]
            pub type [<PFN_ $func_name>] = unsafe extern "C" fn($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?);
        }

        #[no_mangle]
        $(#[$($attrss)*])*
        pub unsafe extern "C" fn $func_name($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?) {
            $crate::ffi::ffi_body!($func_name, $crate::ffi::ret_ty!($($ret)?), |$($ref_capture),*|; mut |$($mut_capture),*| $body)
        }
    };

    ($(#[$($attrss:tt)*])* fn $func_name:ident ($($arg_name:ident : $arg_ty:ty),* $(,)?) mut |$($mut_capture:ident),*| $(-> $ret:ty)? $body:block) => {
        ::paste::paste! {
            /// Function pointer definition for
            #[doc = ::std::stringify!($func_name)]
            pub type [<PFN_ $func_name>] = unsafe extern "C" fn($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?);
        }

        #[no_mangle]
        $(#[$($attrss)*])*
        pub unsafe extern "C" fn $func_name($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?) {
            $crate::ffi::ffi_body!($func_name, $crate::ffi::ret_ty!($($ret)?), mut |$($mut_capture),*| $body)
        }
    };

    ($(#[$($attrss:tt)*])* fn $func_name:ident ($($arg_name:ident : $arg_ty:ty),* $(,)?) |$($ref_capture:ident),*| $(-> $ret:ty)? $body:block) => {
        ::paste::paste! {
            /// Function pointer definition for
            #[doc = ::std::stringify!($func_name)]
            pub type [<PFN_ $func_name>] = unsafe extern "C" fn($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?);
        }

        #[no_mangle]
        $(#[$($attrss)*])*
        pub unsafe extern "C" fn $func_name($($arg_name: $arg_ty,)*) -> $crate::ffi::ret_ty!($($ret)?) {
            $crate::ffi::ffi_body!($func_name, $crate::ffi::ret_ty!($($ret)?), |$($ref_capture),*| $body)
        }
    };
}

pub(crate) use extern_fn;
pub(crate) use fallback_default;
pub(crate) use ffi_body;
pub(crate) use ret_ty;
