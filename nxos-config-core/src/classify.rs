//! Line categories recognized inside an interface configuration.

/// Category of one trimmed configuration line.
///
/// Payload-bearing variants borrow from the classified line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `!` separator closing the current block.
    BlockEnd,
    /// `interface ...` header. The VLAN id is the second token with `Vlan`
    /// removed, present only when the first token is exactly `interface`.
    InterfaceStart { vlan_id: Option<String> },
    /// `description ...` with the keyword removed and whitespace trimmed.
    Description(&'a str),
    /// `ip address ...` in CIDR or dotted-mask form.
    IpAddress,
    /// Explicit negation such as `no ip address`.
    NoOp,
    /// `ip helper-address ...` or `ip dhcp relay address ...`.
    DhcpRelay,
    /// Legacy single-line HSRP, e.g. `standby 10 ip 10.0.0.1`.
    StandbyLegacy,
    /// Block-style `hsrp <group>` header.
    HsrpBlockHeader,
    /// Any other line mentioning ` ip ` outside an HSRP context.
    GenericIp,
    Unrecognized,
}

const RELAY_PREFIXES: [&str; 2] = ["ip helper-address", "ip dhcp relay address"];

/// Classify a trimmed line. The first matching rule wins.
pub fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('!') {
        return LineKind::BlockEnd;
    }
    if line.starts_with("interface") {
        return LineKind::InterfaceStart {
            vlan_id: interface_vlan_id(line),
        };
    }
    if let Some(rest) = line.strip_prefix("description") {
        return LineKind::Description(rest.trim());
    }
    if line.starts_with("ip address") {
        return LineKind::IpAddress;
    }
    if line == "no ip address" {
        return LineKind::NoOp;
    }
    if RELAY_PREFIXES.iter().any(|prefix| line.starts_with(prefix)) {
        return LineKind::DhcpRelay;
    }
    if line.starts_with("standby") {
        return LineKind::StandbyLegacy;
    }
    if line.starts_with("hsrp") {
        return LineKind::HsrpBlockHeader;
    }
    if line.contains(" ip ") && !line.contains("hsrp") {
        return LineKind::GenericIp;
    }
    LineKind::Unrecognized
}

fn interface_vlan_id(line: &str) -> Option<String> {
    let mut tokens = line.split_whitespace();
    if tokens.next() != Some("interface") {
        return None;
    }
    tokens.next().map(|name| name.replace("Vlan", ""))
}

#[cfg(test)]
mod tests {
    use super::{classify, LineKind};

    #[test]
    fn block_end_wins_over_everything() {
        assert_eq!(classify("!"), LineKind::BlockEnd);
        assert_eq!(classify("! interface Vlan10"), LineKind::BlockEnd);
    }

    #[test]
    fn interface_header_extracts_vlan_id() {
        assert_eq!(
            classify("interface Vlan10"),
            LineKind::InterfaceStart {
                vlan_id: Some("10".to_string())
            }
        );
    }

    #[test]
    fn interface_header_without_name_has_no_vlan_id() {
        assert_eq!(
            classify("interface"),
            LineKind::InterfaceStart { vlan_id: None }
        );
        assert_eq!(
            classify("interfaces Vlan10"),
            LineKind::InterfaceStart { vlan_id: None }
        );
    }

    #[test]
    fn description_payload_is_trimmed() {
        assert_eq!(
            classify("description   Core uplink  "),
            LineKind::Description("Core uplink")
        );
    }

    #[test]
    fn address_forms() {
        assert_eq!(classify("ip address 10.0.10.1/24"), LineKind::IpAddress);
        assert_eq!(
            classify("ip address 192.168.1.1 255.255.255.0"),
            LineKind::IpAddress
        );
        assert_eq!(classify("no ip address"), LineKind::NoOp);
    }

    #[test]
    fn relay_forms() {
        assert_eq!(classify("ip helper-address 10.0.0.53"), LineKind::DhcpRelay);
        assert_eq!(classify("ip dhcp relay address"), LineKind::DhcpRelay);
    }

    #[test]
    fn hsrp_forms() {
        assert_eq!(classify("standby 10 ip 10.0.0.1"), LineKind::StandbyLegacy);
        assert_eq!(classify("hsrp 10"), LineKind::HsrpBlockHeader);
    }

    #[test]
    fn generic_fallback_needs_spaced_ip_and_no_hsrp() {
        assert_eq!(
            classify("vip 192.168.1.2 secondary ip"),
            LineKind::Unrecognized
        );
        assert_eq!(
            classify("vip 192.168.1.2 secondary ip tag"),
            LineKind::GenericIp
        );
        assert_eq!(classify("track hsrp ip 10.0.0.1"), LineKind::Unrecognized);
        assert_eq!(classify("ip 10.0.0.1"), LineKind::Unrecognized);
        assert_eq!(classify("no shutdown"), LineKind::Unrecognized);
    }
}
