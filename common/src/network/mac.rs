//! # MAC Address Codec
//!
//! Normalizes the textual shapes a MAC address shows up in (ARP tables,
//! switch consoles, vendor docs) into a single 48-bit integer, and derives
//! the interesting bits from it.
//!
//! Accepted text forms:
//! * Compact hex: `bc2411cf9a4b`
//! * Two hex digits per group: `bc:24:11:cf:9a:4b`, `bc-24-11-cf-9a-4b`
//! * Grouped EUI-48 notations: `bc24.11cf.9a4b`, `bc2411.cf9a4b`
//! * Missing leading zeros per group: `0:0:10:2:0:0`

use std::net::Ipv4Addr;

use pnet::util::MacAddr;

use crate::error::MacError;

/// Hex digits in a full 48-bit address.
const MAC_HEX_LEN: usize = 12;

/// Longest text accepted by the grouped fallback (`XX:XX:XX:XX:XX:XX`).
const MAC_TEXT_MAX_LEN: usize = 17;

/// Positions of the hex digits in the fixed `XX:XX:XX:XX:XX:XX` layout.
const FIXED_DIGIT_POSITIONS: [usize; MAC_HEX_LEN] = [0, 1, 3, 4, 6, 7, 9, 10, 12, 13, 15, 16];

const MULTICAST_BIT: u64 = 0x0100_0000_0000;
const LOCAL_BIT: u64 = 0x0200_0000_0000;
const DOCKER_PREFIX: u64 = 0x0242;

/// Anything that can be turned into a 48-bit MAC address.
///
/// Integers are trusted as-is, text goes through [`parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MacInput<'a> {
    Text(&'a str),
    Integer(u64),
}

impl<'a> From<&'a str> for MacInput<'a> {
    fn from(text: &'a str) -> Self {
        MacInput::Text(text)
    }
}

impl<'a> From<&'a String> for MacInput<'a> {
    fn from(text: &'a String) -> Self {
        MacInput::Text(text.as_str())
    }
}

impl From<u64> for MacInput<'_> {
    fn from(value: u64) -> Self {
        MacInput::Integer(value)
    }
}

impl From<MacAddr> for MacInput<'_> {
    fn from(mac_addr: MacAddr) -> Self {
        let MacAddr(a, b, c, d, e, f) = mac_addr;
        let value: u64 = [a, b, c, d, e, f]
            .iter()
            .fold(0u64, |acc, octet| (acc << 8) | u64::from(*octet));
        MacInput::Integer(value)
    }
}

/// Parses any supported representation into the 48-bit integer form.
///
/// The first matching strategy wins:
/// 1. 12 hex digits without separators.
/// 2. 17 characters laid out as `XX?XX?XX?XX?XX?XX` (separators are not checked).
/// 3. Hex groups split on runs of non-hex characters, each left-padded to
///    `12 / group_count` digits.
///
/// Integer input is returned untouched.
pub fn parse<'a>(input: impl Into<MacInput<'a>>) -> Result<u64, MacError> {
    match input.into() {
        MacInput::Integer(value) => Ok(value),
        MacInput::Text(text) => parse_text(text),
    }
}

fn parse_text(text: &str) -> Result<u64, MacError> {
    // Lengths are in characters, a multi-byte separator still counts once
    let char_count: usize = text.chars().count();

    if char_count == MAC_HEX_LEN {
        if let Some(value) = parse_hex(text) {
            return Ok(value);
        }
    }

    if char_count == MAC_TEXT_MAX_LEN {
        if let Some(value) = parse_fixed_layout(text) {
            return Ok(value);
        }
    }

    if char_count == 0 || char_count > MAC_TEXT_MAX_LEN {
        return Err(MacError::InvalidMacAddress(text.to_string()));
    }

    parse_grouped(text)
}

/// Strict base-16 parse: every character has to be a hex digit.
fn parse_hex(digits: &str) -> Option<u64> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u64::from_str_radix(digits, 16).ok()
}

fn parse_fixed_layout(text: &str) -> Option<u64> {
    let chars: Vec<char> = text.chars().collect();
    let digits: String = FIXED_DIGIT_POSITIONS
        .iter()
        .map(|&pos| chars[pos])
        .collect();
    parse_hex(&digits)
}

fn parse_grouped(text: &str) -> Result<u64, MacError> {
    let groups: Vec<&str> = split_hex_groups(text);
    if groups.iter().any(|group| group.is_empty()) {
        return Err(MacError::InvalidMacAddress(text.to_string()));
    }
    let chars_per_group: usize = MAC_HEX_LEN / groups.len();

    let mut digits: String = String::with_capacity(MAC_HEX_LEN);
    for group in &groups {
        for _ in group.len()..chars_per_group {
            digits.push('0');
        }
        digits.push_str(group);
    }

    if digits.len() != MAC_HEX_LEN {
        return Err(MacError::InvalidMacAddress(text.to_string()));
    }

    parse_hex(&digits).ok_or_else(|| MacError::InvalidMacAddress(text.to_string()))
}

/// Splits on runs of non-hex characters.
///
/// A leading or trailing separator still yields an empty group at that end,
/// which the caller rejects.
fn split_hex_groups(text: &str) -> Vec<&str> {
    let pieces: Vec<&str> = text.split(|c: char| !c.is_ascii_hexdigit()).collect();
    let last: usize = pieces.len() - 1;

    pieces
        .into_iter()
        .enumerate()
        .filter(|(idx, piece)| !piece.is_empty() || *idx == 0 || *idx == last)
        .map(|(_, piece)| piece)
        .collect()
}

/// Renders the canonical `XX:XX:XX:XX:XX:XX` form.
pub fn to_string<'a>(input: impl Into<MacInput<'a>>) -> Result<String, MacError> {
    let hex: String = format!("{:012X}", parse(input)?);
    let pairs: Vec<&str> = hex
        .as_bytes()
        .chunks(2)
        .filter_map(|pair| std::str::from_utf8(pair).ok())
        .collect();
    Ok(pairs.join(":"))
}

/// Returns the vendor prefix (top 24 bits) as 6 uppercase hex digits.
pub fn get_oui<'a>(input: impl Into<MacInput<'a>>) -> Result<String, MacError> {
    Ok(format!("{:06X}", parse(input)? >> 24))
}

/// Whether the I/G bit is set (multicast or broadcast destination).
pub fn is_multicast<'a>(input: impl Into<MacInput<'a>>) -> Result<bool, MacError> {
    Ok(parse(input)? & MULTICAST_BIT != 0)
}

/// Whether the U/L bit is set (locally administered address).
pub fn is_laa<'a>(input: impl Into<MacInput<'a>>) -> Result<bool, MacError> {
    Ok(parse(input)? & LOCAL_BIT != 0)
}

/// Heuristic for addresses handed out by the default Docker bridge (`02:42:...`).
///
/// `02:42` is not an IEEE assignment, so this is a guess and nothing more.
pub fn is_docker<'a>(input: impl Into<MacInput<'a>>) -> Result<bool, MacError> {
    Ok(parse(input)? >> 32 == DOCKER_PREFIX)
}

/// Reads the low 32 bits as an IPv4 address, most significant octet first.
///
/// Docker derives container MACs from the container IP, so this recovers it.
/// It does not check [`is_docker`].
pub fn docker_ip<'a>(input: impl Into<MacInput<'a>>) -> Result<Ipv4Addr, MacError> {
    let low: u32 = (parse(input)? & 0xFFFF_FFFF) as u32;
    Ok(Ipv4Addr::from(low))
}

/// Converts to the six-octet link-layer type.
pub fn to_mac_addr<'a>(input: impl Into<MacInput<'a>>) -> Result<MacAddr, MacError> {
    let bytes: [u8; 8] = parse(input)?.to_be_bytes();
    Ok(MacAddr::new(bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7]))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
