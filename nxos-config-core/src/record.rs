use serde::Serialize;

/// Longest alias accepted by the target device.
pub const DESCRIPTION_MAX_CHARS: usize = 25;

/// Normalized settings of one `interface` block.
///
/// Fields stay `None` until a line of the block sets them. `subnet_mask` holds
/// either a dotted-decimal mask (`255.255.255.0`) or a prefix length (`24`),
/// and is shared by `ip_address` and `secondary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    pub vlan_id: Option<String>,
    pub description: Option<String>,
    pub ip_address: Option<String>,
    pub subnet_mask: Option<String>,
    pub secondary: Option<String>,
    pub dhcp_relay_list: Vec<String>,
}

impl InterfaceRecord {
    /// Create an empty record, optionally tagged with a VLAN id.
    pub fn new(vlan_id: Option<String>) -> Self {
        Self {
            vlan_id,
            ..Self::default()
        }
    }

    /// Whether at least one DHCP relay target was captured.
    pub fn has_dhcp_relay(&self) -> bool {
        !self.dhcp_relay_list.is_empty()
    }

    /// Whether the mask is in dotted-decimal form rather than a prefix length.
    ///
    /// Returns `None` when no mask is set.
    pub fn uses_dotted_mask(&self) -> Option<bool> {
        self.subnet_mask.as_deref().map(|mask| mask.contains('.'))
    }

    /// VLAN id for diagnostics, `unknown` when the interface line carried none.
    pub fn vlan_label(&self) -> &str {
        self.vlan_id.as_deref().unwrap_or("unknown")
    }

    /// Store a description, cut to [`DESCRIPTION_MAX_CHARS`] characters.
    pub fn set_description(&mut self, text: &str) {
        self.description = Some(text.chars().take(DESCRIPTION_MAX_CHARS).collect());
    }

    pub(crate) fn push_relays<I>(&mut self, addresses: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.dhcp_relay_list.extend(addresses);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relay_flag_follows_list() {
        let mut record = InterfaceRecord::new(Some("10".to_string()));
        assert!(!record.has_dhcp_relay());

        record.push_relays(vec!["10.0.0.53".to_string()]);
        assert!(record.has_dhcp_relay());
    }

    #[test]
    fn description_is_cut_by_characters() {
        let mut record = InterfaceRecord::default();
        record.set_description("Büro Netzwerk Segment Nord Ost");
        assert_eq!(record.description.as_deref(), Some("Büro Netzwerk Segment Nor"));
        assert_eq!(
            record.description.as_deref().map(|d| d.chars().count()),
            Some(DESCRIPTION_MAX_CHARS)
        );
    }

    #[test]
    fn short_description_is_kept_whole() {
        let mut record = InterfaceRecord::default();
        record.set_description("Servers");
        assert_eq!(record.description.as_deref(), Some("Servers"));
    }

    #[test]
    fn mask_style_detection() {
        let mut record = InterfaceRecord::default();
        assert_eq!(record.uses_dotted_mask(), None);

        record.subnet_mask = Some("255.255.255.0".to_string());
        assert_eq!(record.uses_dotted_mask(), Some(true));

        record.subnet_mask = Some("24".to_string());
        assert_eq!(record.uses_dotted_mask(), Some(false));
    }

    #[test]
    fn vlan_label_defaults_to_unknown() {
        assert_eq!(InterfaceRecord::default().vlan_label(), "unknown");
        assert_eq!(InterfaceRecord::new(Some("42".to_string())).vlan_label(), "42");
    }
}
