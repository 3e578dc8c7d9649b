use std::collections::HashSet;

use crate::record::{AnomalyRecord, AnomalyType};

use super::lines::{classify, clean, Line};

/// Parse one free-text report into deduplicated anomaly records. Metadata
/// pass-through fields are left unset; the assembler stamps those.
///
/// The walk keeps the active `(cell_id, band)` section plus the indices of
/// every record emitted under it, so a remediation line can back-fill records
/// that were already pushed. A new header replaces the section wholesale;
/// sections never nest.
pub fn parse_report(text: &str) -> Vec<AnomalyRecord> {
    let mut records: Vec<AnomalyRecord> = Vec::new();
    let mut section: Option<(u32, u32)> = None;
    let mut section_indices: Vec<usize> = Vec::new();

    for raw in text.lines() {
        let line = raw.trim();
        let parsed = classify(line);

        if let Line::SectionHeader { cell_id, band } = parsed {
            section = Some((cell_id, band));
            section_indices.clear();
            continue;
        }

        // Preamble before the first header contributes nothing.
        let Some((cell_id, band)) = section else {
            continue;
        };

        match parsed {
            Line::Remediation(fix) => {
                let fix = clean(&fix);
                for &i in &section_indices {
                    records[i].recommended_fix = Some(fix.clone());
                }
            }
            Line::RecoveredAnomaly { kind, text } | Line::Anomaly { kind, text } => {
                section_indices.push(records.len());
                records.push(new_record(cell_id, band, kind, &text));
            }
            Line::SectionHeader { .. } | Line::Other => {}
        }
    }

    dedup(records)
}

fn new_record(cell_id: u32, band: u32, kind: AnomalyType, text: &str) -> AnomalyRecord {
    AnomalyRecord {
        cell_id,
        band,
        anomaly_type: kind,
        anomaly: format!("{}: {}", kind.label(), clean(text)),
        recommended_fix: None,
        source_id: None,
        creation_date: None,
    }
}

/// Keep the first occurrence per full-record key. The fix is part of the key
/// so identical statements that ended up with different remediations stay
/// distinct.
fn dedup(records: Vec<AnomalyRecord>) -> Vec<AnomalyRecord> {
    let mut seen: HashSet<(u32, u32, AnomalyType, String, String)> = HashSet::new();
    let mut uniq = Vec::with_capacity(records.len());
    for r in records {
        let key = (
            r.cell_id,
            r.band,
            r.anomaly_type,
            r.anomaly.clone(),
            r.recommended_fix.clone().unwrap_or_default(),
        );
        if seen.insert(key) {
            uniq.push(r);
        }
    }
    uniq
}

// ── Tests ──
