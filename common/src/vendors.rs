use pnet::util::MacAddr;

/// Vendor metadata attached to one OUI in the IEEE registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VendorRecord {
    pub name: String,
    pub address: Option<String>,
    pub region: Option<String>,
    pub country: Option<String>,
}

impl VendorRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: None,
            region: None,
            country: None,
        }
    }
}

/// Defines the contract for resolving device manufacturers from MAC addresses.
pub trait VendorRepository {
    /// Retrieves the vendor for a given MAC address.
    ///
    /// # Arguments
    /// * `mac_addr` - The MAC address to lookup.
    ///
    /// # Returns
    /// * `Some(&VendorRecord)` - The vendor registered for the address' OUI.
    /// * `None` - If the OUI is unknown.
    fn get_vendor(&self, mac_addr: MacAddr) -> Option<&VendorRecord>;
}
