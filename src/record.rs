use serde::Serialize;
use serde_json::Value;

/// The four anomaly categories the parser recognizes. Serialized and
/// displayed via the canonical label, so variant spellings in source text
/// ("UE Spike/Drop", "low rsrp") normalize to one form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnomalyType {
    #[serde(rename = "Throughput Drop")]
    ThroughputDrop,
    #[serde(rename = "Low RSRP")]
    LowRsrp,
    #[serde(rename = "UEs Spike/Drop")]
    UesSpikeOrDrop,
    #[serde(rename = "Low SINR")]
    LowSinr,
}

impl AnomalyType {
    pub fn label(self) -> &'static str {
        match self {
            AnomalyType::ThroughputDrop => "Throughput Drop",
            AnomalyType::LowRsrp => "Low RSRP",
            AnomalyType::UesSpikeOrDrop => "UEs Spike/Drop",
            AnomalyType::LowSinr => "Low SINR",
        }
    }
}

/// One extracted anomaly. `cell_id`/`band` come from the enclosing section
/// header and are always present; `recommended_fix` is back-filled once a
/// remediation line appears in the same section; `source_id`/`creation_date`
/// are opaque pass-through from the input item.
#[derive(Debug, Clone, Serialize)]
pub struct AnomalyRecord {
    pub cell_id: u32,
    pub band: u32,
    pub anomaly_type: AnomalyType,
    pub anomaly: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_fix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_serializes_as_label() {
        for t in [
            AnomalyType::ThroughputDrop,
            AnomalyType::LowRsrp,
            AnomalyType::UesSpikeOrDrop,
            AnomalyType::LowSinr,
        ] {
            let v = serde_json::to_value(t).unwrap();
            assert_eq!(v, serde_json::json!(t.label()));
        }
    }

    #[test]
    fn optional_fields_omitted() {
        let r = AnomalyRecord {
            cell_id: 12,
            band: 3,
            anomaly_type: AnomalyType::LowRsrp,
            anomaly: "Low RSRP: -112 dBm".to_string(),
            recommended_fix: None,
            source_id: None,
            creation_date: None,
        };
        let v = serde_json::to_value(&r).unwrap();
        let obj = v.as_object().unwrap();
        assert_eq!(obj.len(), 4);
        assert!(!obj.contains_key("recommended_fix"));
        assert_eq!(obj["anomaly_type"], "Low RSRP");
    }
}
