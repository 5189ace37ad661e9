// src/config/consts.rs

// Reference site
pub const BASE_URL: &str = "https://www.felixcloutier.com/x86/";
pub const DOC_EXT: &str = "html";

// Input
pub const DEFAULT_INPUT_DIR: &str = "asm-docs";

// Document parsing
/// The maximum number of description paragraphs copied into a record.
pub const MAX_DESC_PARAS: usize = 25;
/// Paragraphs at or below this many characters end the description walk.
pub const MIN_PARA_CHARS: usize = 20;
pub const DESCRIPTION_ID: &str = "description";
pub const DESCRIPTION_COLUMN: &str = "Description";

/// Column spellings that hold the opcode/instruction cell, in priority order.
pub const OPCODE_COLUMNS: [&str; 7] = [
    "Opcode/Instruction",
    "OpcodeInstruction",
    "Opcode Instruction",
    "Opcode*/Instruction",
    "Opcode / Instruction",
    "Opcode* / Instruction",
    "Instruction",
];

// Index output
pub const TOOLTIP_MAX_CHARS: usize = 255;
pub const ELLIPSIS: &str = "...";
