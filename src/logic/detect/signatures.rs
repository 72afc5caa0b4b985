//! Known-Bad Signature Table
//!
//! Each suspicious (parent, child) pair maps to a real MITRE ATT&CK
//! technique. The table is compile-time data, but the engine receives it as
//! an injected [`SignatureSet`] value rather than reading a module global,
//! so alternate rule sets can be swapped in for tests.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::Severity;

/// One known-bad parent/child pair
#[derive(Debug, Clone, Copy)]
pub struct SignatureEntry {
    pub parent: &'static str,
    pub child: &'static str,
    pub reason: &'static str,
    pub mitre_id: &'static str,
    pub severity: Severity,
}

/// The built-in rule table
pub const KNOWN_SUSPICIOUS: &[SignatureEntry] = &[
    SignatureEntry {
        parent: "winword.exe",
        child: "powershell.exe",
        reason: "Word launching PowerShell, common macro-based attack",
        mitre_id: "T1566.001",
        severity: Severity::High,
    },
    SignatureEntry {
        parent: "excel.exe",
        child: "cmd.exe",
        reason: "Excel launching CMD, malicious macro execution",
        mitre_id: "T1059.003",
        severity: Severity::High,
    },
    SignatureEntry {
        parent: "outlook.exe",
        child: "powershell.exe",
        reason: "Outlook launching PowerShell, phishing email execution",
        mitre_id: "T1566.001",
        severity: Severity::High,
    },
    SignatureEntry {
        parent: "powershell.exe",
        child: "cmd.exe",
        reason: "PowerShell spawning CMD, evasion or lateral movement",
        mitre_id: "T1059.001",
        severity: Severity::Medium,
    },
    SignatureEntry {
        parent: "svchost.exe",
        child: "powershell.exe",
        reason: "Service launching PowerShell, potential lateral movement",
        mitre_id: "T1036",
        severity: Severity::Medium,
    },
];

static BUILTIN: Lazy<SignatureSet> = Lazy::new(|| SignatureSet::from_entries(KNOWN_SUSPICIOUS));

/// Lookup table over signature entries, keyed by exact (parent, child)
#[derive(Debug, Clone)]
pub struct SignatureSet {
    map: HashMap<(String, String), &'static SignatureEntry>,
}

impl SignatureSet {
    /// The built-in five-entry table
    pub fn builtin() -> &'static SignatureSet {
        &BUILTIN
    }

    pub fn from_entries(entries: &'static [SignatureEntry]) -> Self {
        let mut map = HashMap::with_capacity(entries.len());
        for entry in entries {
            map.insert((entry.parent.to_string(), entry.child.to_string()), entry);
        }
        Self { map }
    }

    /// Exact, case-sensitive match on the (parent, child) pair
    pub fn lookup(&self, parent: &str, child: &str) -> Option<&'static SignatureEntry> {
        self.map
            .get(&(parent.to_string(), child.to_string()))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_five_entries() {
        assert_eq!(SignatureSet::builtin().len(), 5);
    }

    #[test]
    fn test_lookup_hit() {
        let entry = SignatureSet::builtin()
            .lookup("winword.exe", "powershell.exe")
            .unwrap();
        assert_eq!(entry.mitre_id, "T1566.001");
        assert_eq!(entry.severity, Severity::High);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let signatures = SignatureSet::builtin();
        assert!(signatures.lookup("WINWORD.EXE", "powershell.exe").is_none());
        assert!(signatures.lookup("winword.exe", "POWERSHELL.EXE").is_none());
    }

    #[test]
    fn test_lookup_miss() {
        assert!(SignatureSet::builtin().lookup("explorer.exe", "chrome.exe").is_none());
    }
}
