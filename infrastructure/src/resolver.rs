//! Reverse name resolution through the system resolver

use quorumtool_application::NameResolver;
use quorumtool_domain::NameFormat;
use std::ffi::CStr;
use std::net::IpAddr;

/// Longest host name `getnameinfo` may return, plus the terminator
const HOST_BUF_LEN: usize = 1025;

/// [`NameResolver`] backed by `getnameinfo(3)`.
///
/// [`NameFormat::NumericAddress`] passes `NI_NUMERICHOST`, so no lookup
/// leaves the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemNameResolver;

impl SystemNameResolver {
    pub fn new() -> Self {
        Self
    }
}

impl NameResolver for SystemNameResolver {
    fn resolve(&self, addr: IpAddr, format: NameFormat) -> Result<String, String> {
        let flags = match format {
            NameFormat::NumericAddress => libc::NI_NUMERICHOST,
            NameFormat::DisplayName => 0,
        };
        getnameinfo(addr, flags)
    }
}

fn getnameinfo(addr: IpAddr, flags: libc::c_int) -> Result<String, String> {
    // SAFETY: sockaddr_storage is plain old data; all-zero is a valid value
    let mut storage: libc::sockaddr_storage = unsafe { std::mem::zeroed() };
    let len = match addr {
        IpAddr::V4(v4) => {
            // SAFETY: sockaddr_storage is large and aligned enough for sockaddr_in
            let sin = unsafe { &mut *(&mut storage as *mut _ as *mut libc::sockaddr_in) };
            sin.sin_family = libc::AF_INET as libc::sa_family_t;
            sin.sin_addr = libc::in_addr {
                s_addr: u32::from_ne_bytes(v4.octets()),
            };
            std::mem::size_of::<libc::sockaddr_in>()
        }
        IpAddr::V6(v6) => {
            // SAFETY: sockaddr_storage is large and aligned enough for sockaddr_in6
            let sin6 = unsafe { &mut *(&mut storage as *mut _ as *mut libc::sockaddr_in6) };
            sin6.sin6_family = libc::AF_INET6 as libc::sa_family_t;
            sin6.sin6_addr = libc::in6_addr {
                s6_addr: v6.octets(),
            };
            std::mem::size_of::<libc::sockaddr_in6>()
        }
    };

    let mut host = [0 as libc::c_char; HOST_BUF_LEN];
    // SAFETY: storage holds an initialised address of `len` bytes and host
    // is a writable buffer of the advertised length
    let rc = unsafe {
        libc::getnameinfo(
            &storage as *const _ as *const libc::sockaddr,
            len as libc::socklen_t,
            host.as_mut_ptr(),
            host.len() as libc::socklen_t,
            std::ptr::null_mut(),
            0,
            flags,
        )
    };
    if rc != 0 {
        // SAFETY: gai_strerror returns a static NUL-terminated string
        let reason = unsafe { CStr::from_ptr(libc::gai_strerror(rc)) };
        return Err(reason.to_string_lossy().into_owned());
    }

    // SAFETY: getnameinfo NUL-terminates host on success
    let name = unsafe { CStr::from_ptr(host.as_ptr()) };
    Ok(name.to_string_lossy().into_owned())
}
