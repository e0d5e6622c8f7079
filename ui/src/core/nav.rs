//! Build-time navigation configuration for the site header.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Absolute (`https://…`) or root-relative (`/…`) target.
    pub href: &'static str,
}

impl NavLink {
    pub const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }

    pub fn is_external(&self) -> bool {
        self.href.starts_with("https://") || self.href.starts_with("http://")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderConfig {
    /// Left-region logo link.
    pub brand: NavLink,
    /// Right-region links, rendered in order.
    pub links: &'static [NavLink],
}

pub const SITE_HEADER: HeaderConfig = HeaderConfig {
    brand: NavLink::new("Robust Incentives Group", "https://github.com/ethereum/rig"),
    links: &[
        NavLink::new("eip1559", "/abm1559"),
        NavLink::new("eth2", "/beaconrunner"),
    ],
};
