use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs, UdpSocket};

/// An IPv4 address, stored in host byte order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IpAddress(u32);

impl IpAddress {
    /// `0.0.0.0`, the wildcard address.
    pub const ANY: IpAddress = IpAddress(0);
    pub const LOCAL_HOST: IpAddress = IpAddress::from_bytes(127, 0, 0, 1);
    pub const BROADCAST: IpAddress = IpAddress::from_bytes(255, 255, 255, 255);

    pub const fn from_bytes(byte0: u8, byte1: u8, byte2: u8, byte3: u8) -> IpAddress {
        IpAddress(u32::from_be_bytes([byte0, byte1, byte2, byte3]))
    }

    pub const fn from_integer(address: u32) -> IpAddress {
        IpAddress(address)
    }

    pub const fn to_integer(self) -> u32 {
        self.0
    }

    /// Resolve a dotted address or a host name.
    ///
    /// Host names are looked up through the system resolver and the first IPv4
    /// result is used. Returns `None` for empty input or when nothing resolves.
    pub fn resolve(address: &str) -> Option<IpAddress> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }

        if let Ok(parsed) = address.parse::<Ipv4Addr>() {
            return Some(parsed.into());
        }

        (address, 0)
            .to_socket_addrs()
            .inspect_err(|err| tracing::debug!(address, %err, "failed to resolve host"))
            .ok()?
            .find_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(IpAddress::from(*v4.ip())),
                SocketAddr::V6(_) => None,
            })
    }

    /// The address of this computer on the local network.
    ///
    /// Found by connecting a UDP socket, which sends nothing.
    pub fn local_address() -> Option<IpAddress> {
        let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).ok()?;
        socket
            .connect((Ipv4Addr::from(IpAddress::LOCAL_HOST), 9))
            .ok()?;
        match socket.local_addr().ok()? {
            SocketAddr::V4(v4) => Some((*v4.ip()).into()),
            SocketAddr::V6(_) => None,
        }
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(value: Ipv4Addr) -> Self {
        IpAddress(value.into())
    }
}

impl From<IpAddress> for Ipv4Addr {
    fn from(value: IpAddress) -> Self {
        Ipv4Addr::from(value.0)
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Ipv4Addr::from(*self), f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!("127.0.0.1", IpAddress::LOCAL_HOST.to_string());
        assert_eq!("255.255.255.255", IpAddress::BROADCAST.to_string());
        assert_eq!(0x7F000001, IpAddress::LOCAL_HOST.to_integer());
        assert_eq!(IpAddress::ANY, IpAddress::from_integer(0));
    }

    #[test]
    fn resolves_dotted() {
        assert_eq!(
            Some(IpAddress::from_bytes(192, 168, 1, 56)),
            IpAddress::resolve("192.168.1.56")
        );
        assert_eq!(Some(IpAddress::BROADCAST), IpAddress::resolve("255.255.255.255"));
        assert_eq!(Some(IpAddress::ANY), IpAddress::resolve("0.0.0.0"));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(None, IpAddress::resolve(""));
        assert_eq!(None, IpAddress::resolve("   "));
    }

    #[test]
    fn resolves_localhost_name() {
        assert_eq!(Some(IpAddress::LOCAL_HOST), IpAddress::resolve("localhost"));
    }
}
