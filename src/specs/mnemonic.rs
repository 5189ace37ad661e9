// src/specs/mnemonic.rs
//! Mnemonic extraction from opcode/instruction cells.
//!
//! Encoding tables put opcode bytes and the mnemonic in the same cell, e.g.
//! `66 0F 38 30 /r PMOVZXBW xmm1, xmm2/m64`. Rather than a grammar for every
//! prefix vocabulary, strip a leading run of encoding noise, then take the
//! first all-caps token.

use std::sync::LazyLock;

use regex::Regex;

/// Leading encoding noise: hex byte pairs, `m64`, `NP`, REX/VEX/EVEX tags
/// (with dotted qualifiers), `/r`-style operand tags and bare lowercase words.
static ENCODING_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(([0-9a-fA-F]{2}|m64|NP|(REX|E?VEX\.)[.0-9A-Z]*|/[0-9a-z]+|[a-z]+)\b\s*)*")
        .expect("encoding prefix pattern")
});

/// Uppercase letter, then uppercase letters/digits, optional `*`, then space or end.
static MNEMONIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Z][A-Z0-9]+)\*?(\s+|$)").expect("mnemonic pattern")
});

/// Drop the leading encoding noise from a cell.
pub fn strip_encoding(cell: &str) -> &str {
    match ENCODING_PREFIX.find(cell) {
        Some(m) => &cell[m.end()..],
        None => cell,
    }
}

/// The mnemonic a cell describes, without any trailing `*`.
pub fn extract_mnemonic(cell: &str) -> Option<&str> {
    let rest = strip_encoding(cell);
    MNEMONIC
        .captures(rest)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_hex_and_operand_tags() {
        assert_eq!(extract_mnemonic("66 0F 38 30 /r PMOVZXBW xmm1, xmm2/m64"), Some("PMOVZXBW"));
        assert_eq!(extract_mnemonic("0F C7 /1 CMPXCHG8B m64"), Some("CMPXCHG8B"));
        assert_eq!(extract_mnemonic("90 NOP"), Some("NOP"));
    }

    #[test]
    fn strips_rex_vex_and_np() {
        assert_eq!(extract_mnemonic("REX.W + 0F AF /r IMUL r64, r/m64"), None);
        assert_eq!(extract_mnemonic("REX.W 0F AF /r IMUL r64, r/m64"), Some("IMUL"));
        assert_eq!(extract_mnemonic("VEX.128.66.0F38.W0 00 /r VPSHUFB xmm1, xmm2, xmm3/m128"), Some("VPSHUFB"));
        assert_eq!(extract_mnemonic("EVEX.512.66.0F.W1 58 /r VADDPD zmm1"), Some("VADDPD"));
        assert_eq!(extract_mnemonic("NP 0F 58 /r ADDPS xmm1, xmm2/m128"), Some("ADDPS"));
    }

    #[test]
    fn drops_trailing_star() {
        assert_eq!(extract_mnemonic("F3 0F B8 /r POPCNT* r16"), Some("POPCNT"));
        assert_eq!(extract_mnemonic("LZCNT*"), Some("LZCNT"));
    }

    #[test]
    fn mnemonic_at_end_of_string() {
        assert_eq!(extract_mnemonic("C3 RET"), Some("RET"));
        assert_eq!(extract_mnemonic("CPUID"), Some("CPUID"));
    }

    #[test]
    fn no_mnemonic_means_none() {
        assert_eq!(extract_mnemonic("/r"), None);
        assert_eq!(extract_mnemonic(""), None);
        assert_eq!(extract_mnemonic("Opcode/Instruction"), None);
        assert_eq!(extract_mnemonic("A r/m8"), None);
        assert_eq!(extract_mnemonic("MOVx"), None);
    }
}
