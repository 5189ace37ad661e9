// src/config/curation.rs
//! Hand-curated tables that steer the corpus pass.
//!
//! These are data, not logic: extending coverage means adding a name to one
//! of the lists below (or calling a `with_*` builder), never touching the
//! parser. `Curation::builtin()` is built once per run and shared read-only.

use std::collections::{HashMap, HashSet};

/// Some pages are so broken that their variants are taken from the filename.
const UNPARSEABLE: &[&str] = &["PSRLW:PSRLD:PSRLQ", "PSLLW:PSLLD:PSLLQ", "MOVBE"];

/// Pages holding instructions we cannot parse or that compilers are unlikely to emit.
const IGNORED: &[&str] = &[
    "._404",
    "404",
    "index",
    // SGX pseudo-instructions
    "EADD",
    "EACCEPT",
    "EAUG",
    "EACCEPTCOPY",
    "EDECVIRTCHILD",
    "EINCVIRTCHILD",
    "EINIT",
    "ELDB:ELDU:ELDBC:ELBUC",
    "EMODPE",
    "EMODPR",
    "EMODT",
    "ERDINFO",
    "ESETCONTEXT",
    "ETRACKC",
    "EBLOCK",
    "ECREATE",
    "EDBGRD",
    "EDBGWR",
    "EENTER",
    "EEXIT",
    "EEXTEND",
    "EGETKEY",
    "ELDB",
    "ELDU",
    "ENCLS",
    "ENCLU",
    "EPA",
    "EREMOVE",
    "EREPORT",
    "ERESUME",
    "ETRACK",
    "EWB",
    // VMX
    "INVEPT",
    "INVVPID",
    "VMCALL",
    "VMCLEAR",
    "VMFUNC",
    "VMLAUNCH",
    "VMLAUNCH:VMRESUME",
    "VMPTRLD",
    "VMPTRST",
    "VMREAD",
    "VMRESUME",
    "VMWRITE",
    "VMXOFF",
    "VMXON",
    // Other
    "INVLPG",
    "LAHF",
    "RDMSR",
    "SGDT",
    // Unparseable for now
    "MONITOR",
    "MOVDQ2Q",
    "MFENCE",
];

/// Instructions documented in more than one page; these copies are dropped.
const DUPLICATES: &[&str] = &[
    "MOV-1", // move to control reg
    "MOV-2", // move to debug reg
    "CMPSD", // in CMPS:CMPSB:CMPSW:CMPSD:CMPSQ
    "MOVQ",  // in MOVD:MOVQ
    "MOVSD", // in MOVS:MOVSB:MOVSW:MOVSD:MOVSQ
    "VPBROADCASTB:VPBROADCASTW:VPBROADCASTD:VPBROADCASTQ", // in VPBROADCAST
    "VGATHERDPS:VGATHERDPD",
    "VGATHERQPS:VGATHERQPD",
    "VPGATHERDD:VPGATHERQD",
    "VPGATHERDQ:VPGATHERQQ",
];

/// Known documentation errors: (record name, wrong text, corrected text, reminder).
const PATCHES: &[(&str, &str, &str, Option<&str>)] = &[(
    "ADDSS",
    "stores the double-precision",
    "stores the single-precision",
    Some("check if https://github.com/compiler-explorer/compiler-explorer/issues/2380 is still relevant"),
)];

/// One textual correction applied to a record's tooltip and body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patch {
    pub find: String,
    pub replace: String,
    /// Printed whenever the patch is applied.
    pub reminder: Option<String>,
}

impl Patch {
    pub fn new(find: impl Into<String>, replace: impl Into<String>) -> Self {
        Self { find: find.into(), replace: replace.into(), reminder: None }
    }

    pub fn with_reminder(mut self, reminder: impl Into<String>) -> Self {
        self.reminder = Some(reminder.into());
        self
    }
}

#[derive(Clone, Debug, Default)]
pub struct Curation {
    unparseable: HashSet<String>,
    ignored: HashSet<String>,
    duplicates: HashSet<String>,
    patches: HashMap<String, Vec<Patch>>,
}

impl Curation {
    /// Empty tables: nothing ignored, nothing patched.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The tables shipped with the tool.
    pub fn builtin() -> Self {
        let mut c = Self::empty();
        c.unparseable.extend(UNPARSEABLE.iter().map(|s| s!(*s)));
        c.ignored.extend(IGNORED.iter().map(|s| s!(*s)));
        c.duplicates.extend(DUPLICATES.iter().map(|s| s!(*s)));
        for &(name, find, replace, reminder) in PATCHES {
            let mut patch = Patch::new(find, replace);
            if let Some(r) = reminder {
                patch = patch.with_reminder(r);
            }
            c = c.with_patch(name, patch);
        }
        c
    }

    pub fn with_ignored(mut self, id: impl Into<String>) -> Self {
        self.ignored.insert(id.into());
        self
    }

    pub fn with_duplicate(mut self, id: impl Into<String>) -> Self {
        self.duplicates.insert(id.into());
        self
    }

    pub fn with_unparseable(mut self, id: impl Into<String>) -> Self {
        self.unparseable.insert(id.into());
        self
    }

    pub fn with_patch(mut self, name: impl Into<String>, patch: Patch) -> Self {
        self.patches.entry(name.into()).or_default().push(patch);
        self
    }

    pub fn is_ignored(&self, id: &str) -> bool {
        self.ignored.contains(id)
    }

    pub fn is_duplicate(&self, id: &str) -> bool {
        self.duplicates.contains(id)
    }

    /// Excluded documents are dropped before parsing.
    pub fn is_excluded(&self, id: &str) -> bool {
        self.is_duplicate(id) || self.is_ignored(id)
    }

    pub fn is_unparseable(&self, id: &str) -> bool {
        self.unparseable.contains(id)
    }

    pub fn patches_for(&self, name: &str) -> &[Patch] {
        self.patches.get(name).map(Vec::as_slice).unwrap_or(&[])
    }
}
