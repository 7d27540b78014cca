//! The C API for [sfmedia](../sfmedia/index.html).
//!
//! Every engine object is exposed as an opaque handle created by a `*_create*` function and
//! released by the matching `*_destroy` function. Value types such as vectors, colors, rects and
//! transforms cross the boundary as plain `#[repr(C)]` structs passed by value.
//!
//! ## Usage
//! ⚠ Rust consumers should use [sfmedia](../sfmedia/index.html) directly ⚠
//!
//! The header `sfmedia.h` is generated by `sfmedia-build-script`.
//!
//! ## Handles
//! Handles are owned by the caller. There is no reference counting: a handle lives until it is
//! passed to its `destroy` function, and passing null to any `destroy` function does nothing.
//! `copy` functions deep copy the engine object. Pointers a handle borrows from another handle,
//! such as the texture of a sprite or the buffer of a sound, are copied as pointers and are never
//! owned; the caller must keep the pointee alive while it is attached.
//!
//! Freeing a handle with the wrong `destroy` function, or twice, is **immediate undefined behaviour**.
//!
//! ## Errors
//! No error value crosses the boundary. A function that fails, or that is passed a null pointer
//! where it needs a valid one, logs the reason through `tracing` and returns its fallback value:
//! null for handles, zero or the default struct for queries, `false` for success flags,
//! `sfSocketError` for socket operations. Panics inside the engine are caught and reported the same
//! way. Call [`sfLog_init`](log::sfLog_init) to see these messages.
//!
//! All functions have safety invariants labeled `## Safety` that must be upheld. Generally speaking,
//! every non-null pointer passed to a function must be valid and aligned.
//!
//! ## Callbacks
//! Custom input streams, shapes, sound streams and sound recorders are driven by C function pointers
//! plus a `userData` pointer, stored by value in the handle. Optional callbacks may be null, in which
//! case the engine's default behaviour is used. Callbacks may be invoked from a thread the caller did
//! not create and must synchronize their own access to `userData`.
//!
//! ## Booleans
//! Any booleans passed to sfmedia **must have a bit pattern equivalent to either `1` or `0`**.
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(non_upper_case_globals)]
#![allow(clippy::missing_safety_doc)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod ctypes;
pub mod error;
mod ffi;
mod handle;
pub mod log;
pub mod system;
pub mod window;

#[cfg(feature = "graphics")]
pub mod graphics;

#[cfg(feature = "audio")]
pub mod audio;

#[cfg(feature = "network")]
pub mod network;
