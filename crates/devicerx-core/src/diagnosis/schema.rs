use serde_json::{json, Value};

/// Structured-output schema for `DiagnosisResult`, in Gemini's schema dialect.
#[must_use]
pub fn response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "diagnosisSummary": {
                "type": "STRING",
                "description": "A concise, non-technical explanation of what is likely wrong with the device."
            },
            "severity": {
                "type": "STRING",
                "enum": ["Critical", "Moderate", "Low"],
                "description": "The severity level of the issue."
            },
            "potentialCauses": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of 3-5 technical reasons for the issue."
            },
            "estimatedFixPriceUSD": {
                "type": "NUMBER",
                "description": "Estimated cost in USD to repair or diagnose at a shop (excluding upgrades)."
            },
            "recommendedUpgrades": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "component": {
                            "type": "STRING",
                            "description": "E.g., '16GB DDR4 RAM', '1TB NVMe SSD'"
                        },
                        "reason": { "type": "STRING", "description": "Why this upgrade helps." },
                        "estimatedCostUSD": {
                            "type": "NUMBER",
                            "description": "Approximate market price for the part."
                        },
                        "performanceBoostPercentage": {
                            "type": "NUMBER",
                            "description": "Estimated % speed improvement."
                        },
                        "priority": { "type": "STRING", "enum": ["High", "Medium", "Low"] }
                    },
                    "required": [
                        "component",
                        "reason",
                        "estimatedCostUSD",
                        "performanceBoostPercentage",
                        "priority"
                    ]
                },
                "description": "List of hardware upgrades that would solve the problem or extend device life."
            },
            "maintenanceTips": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "Actionable advice for the user (e.g., 'Clean fans', 'Update drivers')."
            }
        },
        "required": [
            "diagnosisSummary",
            "severity",
            "potentialCauses",
            "recommendedUpgrades",
            "estimatedFixPriceUSD",
            "maintenanceTips"
        ]
    })
}
