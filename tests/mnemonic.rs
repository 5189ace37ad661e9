// tests/mnemonic.rs
//
// Opcode cells as they appear across the reference, prefix noise first.
//
use x86doc_scrape::specs::mnemonic::{extract_mnemonic, strip_encoding};

#[test]
fn encoding_prefixes_are_stripped_before_the_mnemonic() {
    let cases = [
        ("66 0F 38 30 /r PMOVZXBW xmm1, xmm2/m64", "PMOVZXBW"),
        ("m64 MOVQ2DQ xmm, mm", "MOVQ2DQ"),
        ("NP 0F 0D /1 PREFETCHW m8", "PREFETCHW"),
        ("REX 0F B6 /r MOVZX r16, r/m8", "MOVZX"),
        ("VEX.LZ.0F38.W0 F7 /r BEXTR r32a, r/m32, r32b", "BEXTR"),
        ("EVEX.128.F2.0F.W1 10 /r VMOVSD xmm1", "VMOVSD"),
        ("ib PSRLW mm, imm8", "PSRLW"),
        ("0F 01 D0 XGETBV", "XGETBV"),
        ("F3 0F BD /r LZCNT* r16, r/m16", "LZCNT"),
    ];
    for (cell, want) in cases {
        assert_eq!(extract_mnemonic(cell), Some(want), "cell {cell:?}");
    }
}

#[test]
fn only_the_leading_run_is_stripped() {
    assert_eq!(strip_encoding("0F 05 SYSCALL"), "SYSCALL");
    assert_eq!(strip_encoding("SYSCALL 0F 05"), "SYSCALL 0F 05");
}

#[test]
fn cells_without_a_mnemonic_are_absent() {
    for cell in ["/r", "0F 0B", "ib", "Valid", "see note 1", "+ rw"] {
        assert_eq!(extract_mnemonic(cell), None, "cell {cell:?}");
    }
}
