//! Read-only lookups against the host: machine name and wall clock.
//!
//! Handlers only see these through the traits so tests can pin both values.

use chrono::{Local, NaiveDateTime};
use std::ffi::OsString;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub trait HostnameSource: Send + Sync {
    fn hostname(&self) -> String;
}

pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Hostname from the operating system. Empty when the lookup fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemHostname;

impl HostnameSource for SystemHostname {
    fn hostname(&self) -> String {
        hostname_or_empty(hostname::get())
    }
}

fn hostname_or_empty(lookup: std::io::Result<OsString>) -> String {
    lookup
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_default()
}

/// Local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

#[cfg(any(test, feature = "test-util"))]
#[derive(Clone, Debug)]
pub struct FixedHostname(pub String);

#[cfg(any(test, feature = "test-util"))]
impl HostnameSource for FixedHostname {
    fn hostname(&self) -> String {
        self.0.clone()
    }
}

#[cfg(any(test, feature = "test-util"))]
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(any(test, feature = "test-util"))]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}
