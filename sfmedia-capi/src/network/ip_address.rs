//! IPv4 addresses as dotted strings.
use crate::error::{assert_non_null, SfError};
use crate::ffi::{extern_fn, fallback_default};
use sfmedia::network::IpAddress;
use std::ffi::{c_char, CStr};
use std::io::Write;
use std::net::Ipv4Addr;

/// An IPv4 address in dotted notation, nul-terminated.
///
/// The empty string is the invalid address, `sfIpAddress_None`.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct sfIpAddress {
    pub address: [c_char; 16],
}

impl sfIpAddress {
    const fn literal(text: &str) -> sfIpAddress {
        let bytes = text.as_bytes();
        let mut address = [0; 16];
        let mut i = 0;
        while i < bytes.len() && i < 15 {
            address[i] = bytes[i] as c_char;
            i += 1;
        }
        sfIpAddress { address }
    }

    fn bytes(&self) -> &[u8] {
        let end = self.address.iter().position(|&c| c == 0).unwrap_or(15);
        // c_char and u8 have the same layout
        unsafe { std::slice::from_raw_parts(self.address.as_ptr().cast::<u8>(), end) }
    }
}

impl From<Option<IpAddress>> for sfIpAddress {
    fn from(value: Option<IpAddress>) -> Self {
        let mut bytes = [0u8; 16];
        if let Some(address) = value {
            let mut cursor: &mut [u8] = &mut bytes[..15];
            // "255.255.255.255" is the longest address and fits
            let _ = write!(cursor, "{address}");
        }
        sfIpAddress {
            address: bytes.map(|b| b as c_char),
        }
    }
}

impl From<IpAddress> for sfIpAddress {
    fn from(value: IpAddress) -> Self {
        Some(value).into()
    }
}

impl From<sfIpAddress> for Option<IpAddress> {
    fn from(value: sfIpAddress) -> Self {
        let text = std::str::from_utf8(value.bytes()).ok()?;
        text.parse::<Ipv4Addr>().ok().map(IpAddress::from)
    }
}

fallback_default!(sfIpAddress);

/// The invalid address.
#[no_mangle]
pub static sfIpAddress_None: sfIpAddress = sfIpAddress::literal("");
/// `0.0.0.0`
#[no_mangle]
pub static sfIpAddress_Any: sfIpAddress = sfIpAddress::literal("0.0.0.0");
/// `127.0.0.1`
#[no_mangle]
pub static sfIpAddress_LocalHost: sfIpAddress = sfIpAddress::literal("127.0.0.1");
/// `255.255.255.255`
#[no_mangle]
pub static sfIpAddress_Broadcast: sfIpAddress = sfIpAddress::literal("255.255.255.255");

extern_fn! {
    /// Parse a dotted address or resolve a host name.
    ///
    /// Returns `sfIpAddress_None` if the name cannot be resolved.
    ///
    /// ## Safety
    /// `address` must be null or a valid nul-terminated string.
    fn sfIpAddress_fromString(address: *const c_char) -> sfIpAddress {
        assert_non_null!(address);
        let Ok(address) = unsafe { CStr::from_ptr(address) }.to_str() else {
            return SfError::InvalidParameter("address").export();
        };
        IpAddress::resolve(address).into()
    }
}

extern_fn! {
    fn sfIpAddress_fromBytes(byte0: u8, byte1: u8, byte2: u8, byte3: u8) -> sfIpAddress {
        IpAddress::from_bytes(byte0, byte1, byte2, byte3).into()
    }
}

extern_fn! {
    /// Build an address from its host byte order integer form.
    fn sfIpAddress_fromInteger(address: u32) -> sfIpAddress {
        IpAddress::from_integer(address).into()
    }
}

extern_fn! {
    /// Write the dotted form of `address` into `string`, which must have room for 16 characters.
    ///
    /// ## Safety
    /// `string` must be null or valid for writes of 16 bytes.
    fn sfIpAddress_toString(address: sfIpAddress, string: *mut c_char) {
        assert_non_null!(string);
        unsafe { std::ptr::copy_nonoverlapping(address.address.as_ptr(), string, address.address.len()) }
    }
}

extern_fn! {
    /// The host byte order integer form of `address`. The invalid address gives 0.
    fn sfIpAddress_toInteger(address: sfIpAddress) -> u32 {
        Option::<IpAddress>::from(address).map_or(0, IpAddress::to_integer)
    }
}

extern_fn! {
    /// The address of this computer on the local network, or `sfIpAddress_None`.
    fn sfIpAddress_getLocalAddress() -> sfIpAddress {
        IpAddress::local_address().into()
    }
}
