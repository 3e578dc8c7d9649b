use std::sync::LazyLock;

use regex::Regex;

use crate::record::AnomalyType;

// Standalone header: "Cell ID 12, Band 3:", tolerating a doubled "Band Band"
// and a "(FORMAT ERROR)" suffix left behind by the upstream generator.
static HEADER_MAIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^Cell ID\s+(\d+),\s*Band(?:\s+Band)?\s+(\d+)\s*(?:\(FORMAT ERROR\))?:\s*$")
        .unwrap()
});

// Numbered inline header: "3. Cell ID 12, Band 3"
static HEADER_INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*\d+\.\s*Cell ID\s+(\d+),\s*Band\s+(\d+)\s*$").unwrap());

static FIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[-*•]\s*)?Recommended\s*fix\s*:\s*(.+)$").unwrap());

static REMEDIATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(?:[-*•]\s*)?Remediation\s*:\s*(.+)$").unwrap());

// Malformed line that still embeds a recognizable anomaly statement.
static INLINE_ERROR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)LLM_FORMAT_ERROR.*?:.*?(Throughput Drop:|Low RSRP:|UEs?\s+Spike/Drop:|Low SINR:)\s*(.+)$")
        .unwrap()
});

// Plain anomaly bullets, tried in this fixed order. Unanchored: the label may
// sit after a bullet marker or mid-line decoration.
static ANOMALY_RES: LazyLock<[(Regex, AnomalyType); 4]> = LazyLock::new(|| {
    [
        (
            Regex::new(r"(?i)Throughput Drop:\s*(.+)").unwrap(),
            AnomalyType::ThroughputDrop,
        ),
        (
            Regex::new(r"(?i)Low RSRP:\s*(.+)").unwrap(),
            AnomalyType::LowRsrp,
        ),
        (
            Regex::new(r"(?i)UEs?\s+Spike/Drop:\s*(.+)").unwrap(),
            AnomalyType::UesSpikeOrDrop,
        ),
        (
            Regex::new(r"(?i)Low SINR:\s*(.+)").unwrap(),
            AnomalyType::LowSinr,
        ),
    ]
});

// Leading bullet decoration. A dash only counts as a bullet when followed by
// whitespace, so negative measurements ("-112 dBm") keep their sign.
static LEADING_DECOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\s+|•|\*|-\s+)+").unwrap());
static FORMAT_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+LLM failed to format:.*$").unwrap());
static WS_RUN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}").unwrap());
static TRAILING_PUNCT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.,;:\s]+$").unwrap());

/// One classified report line. Captured text is raw, not yet cleaned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    SectionHeader { cell_id: u32, band: u32 },
    Remediation(String),
    /// Anomaly recovered from an inline format-error line.
    RecoveredAnomaly { kind: AnomalyType, text: String },
    Anomaly { kind: AnomalyType, text: String },
    Other,
}

/// Classify a trimmed line. Matchers are tried in precedence order; the
/// first that fits wins: header, remediation, inline format error, then the
/// four plain anomaly bullets.
pub fn classify(line: &str) -> Line {
    if let Some((cell_id, band)) = header_caps(line) {
        return Line::SectionHeader { cell_id, band };
    }

    if let Some(caps) = FIX_RE
        .captures(line)
        .or_else(|| REMEDIATION_RE.captures(line))
    {
        return Line::Remediation(caps[1].to_string());
    }

    if let Some(caps) = INLINE_ERROR_RE.captures(line) {
        return Line::RecoveredAnomaly {
            kind: kind_from_label(&caps[1]),
            text: caps[2].to_string(),
        };
    }

    for (re, kind) in ANOMALY_RES.iter() {
        if let Some(caps) = re.captures(line) {
            return Line::Anomaly {
                kind: *kind,
                text: caps[1].to_string(),
            };
        }
    }

    Line::Other
}

fn header_caps(line: &str) -> Option<(u32, u32)> {
    let caps = HEADER_MAIN_RE
        .captures(line)
        .or_else(|| HEADER_INLINE_RE.captures(line))?;
    let cell_id = caps[1].parse().ok()?;
    let band = caps[2].parse().ok()?;
    Some((cell_id, band))
}

/// Resolve a matched anomaly label to its type. Loose `contains` checks so
/// casing and UE/UEs variants all land on the same variant.
fn kind_from_label(label: &str) -> AnomalyType {
    let label = label.to_lowercase();
    if label.contains("throughput") {
        AnomalyType::ThroughputDrop
    } else if label.contains("low rsrp") {
        AnomalyType::LowRsrp
    } else if label.contains("low sinr") {
        AnomalyType::LowSinr
    } else {
        AnomalyType::UesSpikeOrDrop
    }
}

/// Normalize a captured description or fix: strip bullet decoration, drop a
/// trailing "LLM failed to format:" clause, collapse whitespace, strip the
/// trailing punctuation run. Idempotent.
pub fn clean(text: &str) -> String {
    let s = LEADING_DECOR_RE.replace(text, "");
    let s = FORMAT_NOISE_RE.replace(&s, "");
    let s = WS_RUN_RE.replace_all(&s, " ");
    let s = TRAILING_PUNCT_RE.replace(&s, "");
    s.trim().to_string()
}

// ── Tests ──
