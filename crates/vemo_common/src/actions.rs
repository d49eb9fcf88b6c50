//! Suggested action buttons
//!
//! Action buttons come from their own ordered keyword table, independent of
//! the reply category table in [`crate::intent`]. The two can disagree for the
//! same utterance ("device performance" replies as optimization *and* offers
//! optimization buttons, but "check the sensor status" replies as status while
//! offering device buttons). That divergence is kept as-is.

use serde::{Deserialize, Serialize};

/// A button offered alongside a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionButton {
    pub label: String,
    pub action_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl ActionButton {
    pub fn new(label: &str, action_id: &str, icon: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            action_id: action_id.to_string(),
            icon: icon.map(str::to_string),
        }
    }
}

/// Static button description: (label, action id, icon)
pub type ButtonSpec = (&'static str, &'static str, &'static str);

pub(crate) fn build_buttons(specs: &[ButtonSpec]) -> Vec<ActionButton> {
    specs
        .iter()
        .map(|(label, id, icon)| ActionButton::new(label, id, Some(icon)))
        .collect()
}

struct ActionRule {
    triggers: &'static [&'static str],
    buttons: &'static [ButtonSpec],
}

/// Buttons offered when nothing in [`ACTION_TABLE`] matched
pub const DEFAULT_ACTIONS: &[ButtonSpec] = &[
    ("🌐 Network Overview", "overview", "🌐"),
    ("🔧 Run Diagnostics", "diagnostics", "🔧"),
    ("📊 View Analytics", "analytics", "📈"),
    ("🛡️ Security Scan", "security_scan", "🛡️"),
];

/// Buttons shown with the welcome message
pub const WELCOME_ACTIONS: &[ButtonSpec] = &[
    ("📊 Network Status", "status", "📊"),
    ("🚀 Run Optimization", "optimize", "🚀"),
    ("🛡️ Security Scan", "security", "🛡️"),
    ("📱 Device Inventory", "devices", "📱"),
    ("📈 View Analytics", "analytics", "📈"),
    ("🔧 Run Diagnostics", "diagnostics", "🔧"),
];

static ACTION_TABLE: &[ActionRule] = &[
    ActionRule {
        triggers: &["optimize", "performance", "speed"],
        buttons: &[
            ("⚡ Apply Optimizations", "apply_optimizations", "⚡"),
            ("📊 View Details", "optimization_details", "📊"),
            ("⏰ Schedule Auto-Optimize", "schedule_optimize", "⏰"),
            ("📈 View Results", "optimization_results", "📈"),
        ],
    },
    ActionRule {
        triggers: &["security", "threat", "firewall"],
        buttons: &[
            ("📋 View Security Log", "security_log", "📋"),
            ("🔍 Run Security Scan", "security_scan", "🔍"),
            ("🛡️ Update Policies", "update_policies", "🛡️"),
            ("📄 Security Report", "security_report", "📄"),
        ],
    },
    ActionRule {
        triggers: &["device", "node", "sensor"],
        buttons: &[
            ("📱 View Device List", "device_list", "📱"),
            ("⚠️ Check Offline Devices", "check_offline", "⚠️"),
            ("➕ Add New Device", "add_device", "➕"),
            ("🔄 Update Firmware", "update_firmware", "🔄"),
        ],
    },
    ActionRule {
        triggers: &["status", "health", "monitor"],
        buttons: &[
            ("🌐 Network Overview", "overview", "🌐"),
            ("📊 View Analytics", "analytics", "📈"),
            ("🔧 Run Diagnostics", "diagnostics", "🔧"),
        ],
    },
    ActionRule {
        triggers: &["analytics", "data", "metrics"],
        buttons: &[
            ("📊 View Analytics", "analytics", "📈"),
            ("📈 Performance Trends", "optimization_results", "📈"),
            ("🌐 Network Overview", "overview", "🌐"),
        ],
    },
    ActionRule {
        triggers: &["backup", "restore", "recovery"],
        buttons: &[
            ("💾 Create Backup", "backup", "💾"),
            ("🔄 Restore Config", "restore", "🔄"),
            ("📋 Backup History", "backup_history", "📋"),
        ],
    },
    ActionRule {
        triggers: &["traffic", "flow", "bandwidth"],
        buttons: &[
            ("🔍 Traffic Analysis", "traffic_analysis", "🔍"),
            ("📊 Bandwidth Report", "bandwidth_report", "📊"),
            ("🎯 QoS Adjust", "qos_adjust", "🎯"),
        ],
    },
    ActionRule {
        triggers: &["capacity", "growth", "planning"],
        buttons: &[
            ("📊 Capacity Report", "capacity_report", "📊"),
            ("📈 Growth Forecast", "growth_forecast", "📈"),
            ("💡 Upgrade Recommendations", "upgrade_recommendations", "💡"),
        ],
    },
    ActionRule {
        triggers: &["compliance", "audit", "policy"],
        buttons: &[
            ("📋 Compliance Check", "compliance_check", "📋"),
            ("📄 Audit Report", "audit_report", "📄"),
            ("🛡️ Policy Review", "policy_review", "🛡️"),
        ],
    },
    ActionRule {
        triggers: &["vpn", "remote", "tunnel"],
        buttons: &[
            ("🔐 VPN Status", "vpn_status", "🔐"),
            ("➕ Add VPN User", "add_vpn_user", "➕"),
            ("📊 VPN Analytics", "vpn_analytics", "📊"),
        ],
    },
    ActionRule {
        triggers: &["wireless", "wifi", "rf"],
        buttons: &[
            ("📡 Wireless Optimize", "wireless_optimize", "📡"),
            ("📊 RF Analysis", "rf_analysis", "📊"),
            ("🔧 Channel Scan", "channel_scan", "🔧"),
        ],
    },
    ActionRule {
        triggers: &["log", "event", "history"],
        buttons: &[
            ("📝 Log Analysis", "log_analysis", "📝"),
            ("🔍 Search Logs", "search_logs", "🔍"),
            ("📊 Event Summary", "event_summary", "📊"),
        ],
    },
    ActionRule {
        triggers: &["test", "diagnostic", "troubleshoot"],
        buttons: &[
            ("🔧 Diagnostic Test", "diagnostic_test", "🔧"),
            ("📡 Connectivity Test", "connectivity_test", "📡"),
            ("⚡ Speed Test", "speed_test", "⚡"),
        ],
    },
];

/// Buttons to offer for an utterance. Never empty.
pub fn response_actions(utterance: &str) -> Vec<ActionButton> {
    let lower = utterance.to_lowercase();
    let specs = ACTION_TABLE
        .iter()
        .find(|rule| rule.triggers.iter().any(|t| lower.contains(t)))
        .map(|rule| rule.buttons)
        .unwrap_or(DEFAULT_ACTIONS);
    build_buttons(specs)
}

/// Every action id any button can carry, for lookup coverage checks
pub fn all_button_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = ACTION_TABLE
        .iter()
        .flat_map(|rule| rule.buttons.iter().map(|(_, id, _)| *id))
        .chain(DEFAULT_ACTIONS.iter().map(|(_, id, _)| *id))
        .chain(WELCOME_ACTIONS.iter().map(|(_, id, _)| *id))
        .collect();
    ids.sort_unstable();
    ids.dedup();
    ids
}

/// Label of the first button carrying `action_id`
pub fn button_label(action_id: &str) -> Option<&'static str> {
    WELCOME_ACTIONS
        .iter()
        .chain(ACTION_TABLE.iter().flat_map(|rule| rule.buttons.iter()))
        .chain(DEFAULT_ACTIONS.iter())
        .find(|(_, id, _)| *id == action_id)
        .map(|(label, _, _)| *label)
}
