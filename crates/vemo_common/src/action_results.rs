//! Action Result Lookup
//!
//! Flat tables keyed by action id: canned result text, follow-up buttons,
//! execution-time estimate and follow-up suggestions. Unknown ids never fail;
//! each lookup has a generic default.

use crate::actions::{build_buttons, ActionButton, ButtonSpec, DEFAULT_ACTIONS};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Result text for ids missing from [`ACTION_RESULTS`]
pub const GENERIC_ACTION_RESULT: &str = "✅ Action completed successfully. The requested operation has been executed. All changes have been applied to your network infrastructure. If you need additional assistance, please let me know.";

/// Execution estimate for ids missing from the timing table
pub const DEFAULT_EXECUTION_TIME: Duration = Duration::from_millis(1500);

/// Cosmetic confidence reported for action results
pub const ACTION_CONFIDENCE: f64 = 0.95;

pub static ACTION_RESULTS: &[(&str, &str)] = &[
    ("apply_optimizations", "🎉 Optimizations have been successfully applied. Your network has achieved a 15% performance improvement. Changes are now active across all systems. Performance metrics will be updated in real-time on your dashboard."),
    ("security_scan", "🛡️ Security scan completed successfully. No threats detected. All security protocols are functioning correctly. Your network infrastructure maintains a strong security posture with all defensive systems operational."),
    ("device_list", "📱 Device inventory compiled. 247 devices are currently online and operational. Three devices have been flagged for attention: routine maintenance required. Detailed device status report is available in your dashboard."),
    ("diagnostics", "🔧 System diagnostics completed. Overall system health: 98.7%. Minor issues have been automatically resolved. All critical systems are operating within normal parameters. Detailed diagnostic report is available."),
    ("voice_demo", "🎧 Voice synthesis test. This demonstrates my current voice configuration with your selected settings. Audio quality and clarity should be optimal. You can adjust voice parameters in the settings menu if needed."),
    ("status", "🌐 Network Status: All systems operational. Health score: 98.7%. 247 devices online. Network performance is within optimal parameters. All critical infrastructure components are functioning normally."),
    ("optimize", "🚀 Network optimization initiated. Analyzing traffic patterns, adjusting Quality of Service policies, and optimizing routing tables. Estimated completion time: 30 seconds. Performance improvements will be applied automatically."),
    ("security", "🛡️ Comprehensive security scan in progress across all 247 devices. Checking firewall configurations, analyzing traffic patterns, scanning for vulnerabilities, and verifying encryption protocols. Estimated completion: 45 seconds."),
    ("devices", "📱 Compiling complete device inventory. 247 active devices: 156 ESP32 nodes, 12 gateways, 79 sensors, 8 network switches, and 15 wireless access points. Report includes health scores, firmware versions, and connectivity status."),
    ("analytics", "📊 Generating comprehensive analytics dashboard. Compiling real-time metrics, historical performance trends, benchmark comparisons, and predictive insights. Data visualization will be available momentarily."),
    ("overview", "🌐 Network Overview: 247 devices online. Health score: 98.7 out of 100. Average latency: 12 milliseconds. Throughput: 2.3 gigabits per second. Packet loss: 0.03%. Active connections: 1,847. All systems operational."),
    ("security_log", "📋 Security Log - Last 24 Hours: 1,247 threats successfully blocked. 342 firewall rules active. 23 VPN tunnels secured and encrypted. Zero critical vulnerabilities detected. Network security status: Excellent."),
    ("optimization_details", "📊 Optimization Details: Traffic load balanced across 12 gateways. Quality of Service policies updated with VoIP priority. Bandwidth allocation optimized. Cache placement improved by 23%. Overall performance gain: 15 to 20%."),
    ("schedule_optimize", "⏰ Automatic optimization scheduled. Performance optimizations will run daily at 3:00 AM during low-traffic hours. This ensures minimal disruption while maintaining peak network performance."),
    ("update_policies", "🛡️ Security policies updated successfully. Enhanced firewall rules implemented. Access controls strengthened. Intrusion detection signatures updated. DDoS protection improved. Security posture has been significantly enhanced."),
    ("update_firmware", "🔄 Firmware update initiated for 6 devices. Updates scheduled for maintenance window: 2:00 AM to 4:00 AM. Zero-downtime deployment strategy will be used. All devices will be running the latest firmware version by morning."),
    ("add_device", "➕ Device provisioning wizard activated. I will guide you through the process of adding a new device to your network. Please specify the device type: ESP32 node, Gateway, Sensor, or Other."),
    ("check_offline", "⚠️ Offline device analysis complete. Three devices require attention: Device 142 (ESP32) - Battery level at 12%, requires charging. Device 089 (Sensor) - Connection timeout, investigating. Device 201 (Gateway) - Scheduled maintenance in progress."),
    ("security_report", "📋 Comprehensive security report generated. Report includes: threat analysis, vulnerability assessment, compliance status, incident history, and actionable recommendations. Report has been saved to your dashboard for review."),
    ("optimization_results", "📈 Optimization Results Summary: Latency reduced by 18%. Throughput increased by 15%. Packet loss decreased by 40%. Energy consumption reduced by 12%. Network performance has been significantly improved across all metrics."),
    ("backup", "💾 Backup initiated. Creating comprehensive snapshot of all network configurations, device settings, and system states. Estimated completion time: 3 minutes. Backup will be stored locally and replicated to cloud storage. You'll receive a notification when the backup is complete."),
    ("restore", "🔄 Restore operation prepared. Available restore points from the past 30 days are displayed. Please select the desired restore point. Note: Restore operations may cause brief service interruption. Estimated restore time: 10 to 15 minutes depending on configuration size."),
    ("backup_history", "📋 Backup History: 180 successful backups in the past 30 days. Last backup completed 2 hours ago. Zero failed backups this month. Average backup size: 2.3 gigabytes. All restore points have been verified and are available for recovery."),
    ("traffic_analysis", "🔍 Deep traffic analysis in progress. Analyzing packet flows, protocol distribution, bandwidth consumption by application, and identifying top talkers. Generating comprehensive traffic report with visualizations. Estimated completion: 45 seconds."),
    ("bandwidth_report", "📊 Bandwidth Report: Current utilization is 34% of total capacity. Peak throughput today: 2.3 gigabits per second. Average throughput: 890 megabits per second. Top consumers: Server cluster at 234 Mbps, Gateway 3 at 156 Mbps. No links are approaching saturation."),
    ("qos_adjust", "🎯 Quality of Service policies are being adjusted. Prioritizing voice and video traffic. Implementing bandwidth reservations. Configuring queue management. Changes will take effect immediately. VoIP and video streaming quality will be optimized."),
    ("capacity_report", "📊 Capacity planning report generated. Analysis includes current utilization trends, growth projections, bottleneck identification, and upgrade recommendations. Report includes 12-month forecast and budget estimates. Report is available in your dashboard."),
    ("growth_forecast", "📈 Growth Forecast: Network demand is growing at 3.2% per month. Device count is projected to reach 310 within 12 months. Projected capacity exhaustion: 18 months at the current growth rate. A capacity upgrade is recommended within 8 to 12 months."),
    ("upgrade_recommendations", "💡 Upgrade Recommendations: Add 2 additional gateways to relieve the primary bandwidth constraint. Upgrade core switches to 10 Gbps. Increase internet uplink to 1 Gbps. Estimated cost: moderate. Expected ROI timeline: 14 months."),
    ("compliance_check", "📋 Compliance audit initiated. Checking security policies, access controls, encryption standards, logging requirements, and regulatory compliance. Scanning against ISO 27001, GDPR, and industry best practices. Estimated completion: 2 minutes."),
    ("audit_report", "📄 Audit Report generated. Last compliance audit: 45 days ago with zero findings. Audit logging is enabled on all systems with 90-day retention. All administrative actions have a complete audit trail. Compliance score: 98%."),
    ("policy_review", "🛡️ Policy review complete. 342 firewall rules reviewed, zero conflicts found. Access control policies are role-based with multi-factor authentication. Two unused rules have been flagged for cleanup. All security policies are documented and enforced."),
    ("failover_test", "🔄 Failover test scheduled. This test will verify high availability configurations and automatic failover mechanisms. Test will be performed during low-traffic period to minimize impact. All redundant systems will be validated. Test duration: approximately 5 minutes."),
    ("vpn_status", "🔐 VPN Status: All 23 tunnels are operational. Connection quality is excellent. No authentication failures detected. Encryption is functioning properly. Remote access performance is optimal. Detailed VPN metrics are available in the security dashboard."),
    ("add_vpn_user", "➕ VPN user provisioning started. A new remote access profile will be created with multi-factor authentication and certificate-based validation. Please provide the user name and access group. The profile will be active within 2 minutes."),
    ("vpn_analytics", "📊 VPN Analytics: 47 remote users currently connected. VPN throughput: 234 megabits per second. Connection stability: 99.7%. Concentrator load: 34%. Peak usage occurs between 9:00 AM and 11:00 AM. No tunnel drops recorded this week."),
    ("wireless_optimize", "📡 Wireless optimization initiated. Analyzing RF spectrum, adjusting channel assignments, optimizing transmit power, and reducing interference. Client roaming will be improved. Estimated completion: 60 seconds. Changes will be applied automatically."),
    ("rf_analysis", "📊 RF Analysis: 15 access points scanned. Noise floor: negative 95 dBm. Channel utilization is balanced across channels 1, 6, and 11 on 2.4 GHz. DFS channels are active on 5 GHz. No rogue access points detected. Interference levels are minimal."),
    ("channel_scan", "🔧 Channel scan complete. 2.4 GHz channels 1, 6, and 11 show low congestion. 5 GHz DFS channels are clear. 3 access points have been moved to less congested channels. Expected improvement in client throughput: 8%."),
    ("log_analysis", "📝 Log analysis in progress. Scanning 12,847 events from today. Identifying patterns, anomalies, and potential issues. Correlating events across all systems. Generating summary report with actionable insights. Estimated completion: 30 seconds."),
    ("search_logs", "🔍 Log search ready. 90 days of centralized logs are indexed across all devices. You can filter by device, severity, time range, or keyword. Today's log volume: 12,847 events with zero critical entries."),
    ("event_summary", "📊 Event Summary: 12,847 events logged today. Critical events: zero. Warning events: 3, all reviewed. Informational events make up 99.9% of the total. Most active source: Gateway 3. No unusual event patterns detected."),
    ("diagnostic_test", "🔧 Running comprehensive diagnostic tests. Testing connectivity, bandwidth, latency, packet loss, DNS resolution, and routing. Checking all network segments. Verifying device health. Detailed test results will be available in 45 seconds."),
    ("connectivity_test", "📡 Connectivity test complete. All 247 devices are reachable. Average round-trip time: 12 milliseconds. Packet loss: 0.03%. Internet uplink is healthy with 99.8% uptime. DNS resolution is responding in 8 milliseconds."),
    ("speed_test", "⚡ Speed test complete. Download: 487 megabits per second. Upload: 462 megabits per second. Latency to internet gateway: 15 milliseconds. Jitter: 2 milliseconds. Results are within the expected range for your 500 megabit fiber uplink."),
];

static EXECUTION_TIMES_MS: &[(&str, u64)] = &[
    ("status", 1500),
    ("optimize", 3000),
    ("security", 2500),
    ("devices", 2000),
    ("analytics", 1800),
    ("diagnostics", 2200),
];

static FOLLOW_UPS: &[(&str, &[ButtonSpec])] = &[
    (
        "status",
        &[
            ("🔧 Run Diagnostics", "diagnostics", "🔧"),
            ("📊 View Analytics", "analytics", "📊"),
        ],
    ),
    (
        "optimize",
        &[
            ("📈 View Results", "optimization_results", "📈"),
            ("⏰ Schedule Auto-Optimize", "schedule_optimize", "⏰"),
        ],
    ),
    (
        "security",
        &[
            ("📋 Security Report", "security_report", "📋"),
            ("🛡️ Update Policies", "update_policies", "🛡️"),
        ],
    ),
    (
        "devices",
        &[
            ("🔄 Update Firmware", "update_firmware", "🔄"),
            ("➕ Add Device", "add_device", "➕"),
        ],
    ),
];

static ACTION_SUGGESTIONS: &[(&str, &[&str])] = &[
    ("status", &["Check specific device", "View network topology", "Monitor real-time metrics"]),
    ("optimize", &["Schedule maintenance", "View energy savings", "Check performance trends"]),
    ("security", &["Review threat log", "Update firewall rules", "Check compliance status"]),
    ("devices", &["Monitor device health", "Check connectivity", "View device analytics"]),
];

const DEFAULT_ACTION_SUGGESTIONS: &[&str] = &["Ask another question", "Run diagnostics", "Check system status"];

/// Canned result text for an action id
pub fn resolve_action(action_id: &str) -> &'static str {
    ACTION_RESULTS
        .iter()
        .find(|(id, _)| *id == action_id)
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_ACTION_RESULT)
}

/// Whether an id has its own result text
pub fn is_known_action(action_id: &str) -> bool {
    ACTION_RESULTS.iter().any(|(id, _)| *id == action_id)
}

/// Buttons offered after an action completes
pub fn follow_ups(action_id: &str) -> Vec<ActionButton> {
    let specs = FOLLOW_UPS
        .iter()
        .find(|(id, _)| *id == action_id)
        .map(|(_, specs)| *specs)
        .unwrap_or(DEFAULT_ACTIONS);
    build_buttons(specs)
}

/// Simulated execution time for an action
pub fn execution_time(action_id: &str) -> Duration {
    EXECUTION_TIMES_MS
        .iter()
        .find(|(id, _)| *id == action_id)
        .map(|(_, ms)| Duration::from_millis(*ms))
        .unwrap_or(DEFAULT_EXECUTION_TIME)
}

/// Follow-up phrases after an action completes
pub fn action_suggestions(action_id: &str) -> Vec<String> {
    ACTION_SUGGESTIONS
        .iter()
        .find(|(id, _)| *id == action_id)
        .map(|(_, phrases)| *phrases)
        .unwrap_or(DEFAULT_ACTION_SUGGESTIONS)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Everything the caller renders for a completed action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionOutcome {
    pub action_id: String,
    pub text: String,
    pub follow_ups: Vec<ActionButton>,
    pub suggestions: Vec<String>,
    pub confidence: f64,
    #[serde(with = "crate::reply::duration_ms")]
    pub processing_time: Duration,
}

impl ActionOutcome {
    pub fn for_action(action_id: &str) -> Self {
        Self {
            action_id: action_id.to_string(),
            text: resolve_action(action_id).to_string(),
            follow_ups: follow_ups(action_id),
            suggestions: action_suggestions(action_id),
            confidence: ACTION_CONFIDENCE,
            processing_time: execution_time(action_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::all_button_ids;

    #[test]
    fn test_unknown_action_falls_back() {
        assert_eq!(resolve_action("unknown_id_xyz"), GENERIC_ACTION_RESULT);
        assert!(!is_known_action("unknown_id_xyz"));
        assert_eq!(execution_time("unknown_id_xyz"), DEFAULT_EXECUTION_TIME);
        assert_eq!(follow_ups("unknown_id_xyz").len(), 4);
        assert_eq!(action_suggestions("unknown_id_xyz")[0], "Ask another question");
    }

    #[test]
    fn test_known_actions() {
        assert!(resolve_action("security_scan").contains("No threats detected"));
        assert!(resolve_action("backup").starts_with("💾 Backup initiated"));
        assert_eq!(execution_time("optimize"), Duration::from_millis(3000));
        assert_eq!(follow_ups("devices")[1].action_id, "add_device");
    }

    #[test]
    fn test_table_ids_unique() {
        let mut ids: Vec<&str> = ACTION_RESULTS.iter().map(|(id, _)| *id).collect();
        let before = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(before, ids.len());
        assert_eq!(before, 45);
    }

    #[test]
    fn test_every_button_has_result() {
        for id in all_button_ids() {
            assert!(is_known_action(id), "no result text for button '{}'", id);
        }
        for button in follow_ups("optimize") {
            assert!(is_known_action(&button.action_id));
        }
    }

    #[test]
    fn test_outcome() {
        let outcome = ActionOutcome::for_action("security");
        assert_eq!(outcome.confidence, ACTION_CONFIDENCE);
        assert_eq!(outcome.processing_time, Duration::from_millis(2500));
        assert_eq!(outcome.follow_ups[0].action_id, "security_report");
        assert_eq!(outcome.suggestions[0], "Review threat log");
    }
}
