//! Intent categories and their keyword triggers
//!
//! The table below is evaluated top to bottom and the first category whose
//! triggers appear in the lower-cased utterance wins. Trigger lists overlap
//! ("efficiency" is both optimization and energy, "learn" is both automation
//! and education), so the row order is part of the behavior.

use serde::{Deserialize, Serialize};

/// Topic bucket a reply is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentCategory {
    Greeting,
    SelfDescription,
    Status,
    Optimization,
    Security,
    Devices,
    Energy,
    Analytics,
    Automation,
    Configuration,
    Maintenance,
    Connectivity,
    Alerts,
    Troubleshooting,
    Capabilities,
    Temporal,
    Comparison,
    Forecasting,
    Gratitude,
    Praise,
    SmallTalk,
    Education,
    BackupRecovery,
    Traffic,
    Latency,
    Capacity,
    Compliance,
    Cost,
    HighAvailability,
    Iot,
    Vpn,
    DnsDhcp,
    LoadBalancing,
    Wireless,
    Qos,
    Logging,
    Diagnostics,
    Fallback,
}

impl IntentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::SelfDescription => "self_description",
            Self::Status => "status",
            Self::Optimization => "optimization",
            Self::Security => "security",
            Self::Devices => "devices",
            Self::Energy => "energy",
            Self::Analytics => "analytics",
            Self::Automation => "automation",
            Self::Configuration => "configuration",
            Self::Maintenance => "maintenance",
            Self::Connectivity => "connectivity",
            Self::Alerts => "alerts",
            Self::Troubleshooting => "troubleshooting",
            Self::Capabilities => "capabilities",
            Self::Temporal => "temporal",
            Self::Comparison => "comparison",
            Self::Forecasting => "forecasting",
            Self::Gratitude => "gratitude",
            Self::Praise => "praise",
            Self::SmallTalk => "small_talk",
            Self::Education => "education",
            Self::BackupRecovery => "backup_recovery",
            Self::Traffic => "traffic",
            Self::Latency => "latency",
            Self::Capacity => "capacity",
            Self::Compliance => "compliance",
            Self::Cost => "cost",
            Self::HighAvailability => "high_availability",
            Self::Iot => "iot",
            Self::Vpn => "vpn",
            Self::DnsDhcp => "dns_dhcp",
            Self::LoadBalancing => "load_balancing",
            Self::Wireless => "wireless",
            Self::Qos => "qos",
            Self::Logging => "logging",
            Self::Diagnostics => "diagnostics",
            Self::Fallback => "fallback",
        }
    }

    /// Trigger substrings for this category (empty for fallback)
    pub fn triggers(&self) -> &'static [&'static str] {
        CATEGORY_TABLE
            .iter()
            .find(|rule| rule.category == *self)
            .map(|rule| rule.triggers)
            .unwrap_or(&[])
    }

    /// Canned reply for every category except fallback, which draws from
    /// [`FALLBACK_REPLIES`]
    pub fn template(&self) -> Option<&'static str> {
        CATEGORY_TABLE
            .iter()
            .find(|rule| rule.category == *self)
            .map(|rule| rule.reply)
    }

    /// Position in the priority order (fallback is last)
    pub fn priority(&self) -> usize {
        CATEGORY_TABLE
            .iter()
            .position(|rule| rule.category == *self)
            .unwrap_or(CATEGORY_TABLE.len())
    }
}

impl std::fmt::Display for IntentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the ordered dispatch table
#[derive(Debug)]
pub struct CategoryRule {
    pub category: IntentCategory,
    pub triggers: &'static [&'static str],
    pub reply: &'static str,
}

impl CategoryRule {
    /// `lower` must already be lower-cased
    pub fn matches(&self, lower: &str) -> bool {
        self.triggers.iter().any(|t| lower.contains(t))
    }
}

/// Match a lower-cased utterance against the table; `None` means fallback
pub fn match_category(lower: &str) -> Option<&'static CategoryRule> {
    CATEGORY_TABLE.iter().find(|rule| rule.matches(lower))
}

/// Generic replies used when no category matched
pub const FALLBACK_REPLIES: [&str; 5] = [
    "I'm ready to assist you with your network infrastructure needs. Could you please provide more specific details about what you'd like to accomplish? I can help with monitoring, optimization, security, diagnostics, or any other network management task.",
    "I have comprehensive capabilities for network management and analysis. To provide you with the most relevant assistance, could you clarify your specific requirements? Whether it's technical analysis, troubleshooting, or strategic planning, I'm equipped to help.",
    "I'm here to support your network operations. Please provide additional context about your inquiry so I can deliver the most accurate and helpful response. I can assist with a wide range of network management functions.",
    "I understand you have a question or requirement. To ensure I provide the most effective assistance, could you elaborate on the specific area you'd like to address? My capabilities span monitoring, security, optimization, and comprehensive network analysis.",
    "I'm prepared to help with your network infrastructure. For the most precise assistance, please specify your particular needs or concerns. I can provide detailed analysis, recommendations, and solutions across all aspects of network management.",
];

/// Priority-ordered category table
pub static CATEGORY_TABLE: &[CategoryRule] = &[
    CategoryRule {
        category: IntentCategory::Greeting,
        triggers: &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
        reply: "Hello. I'm Vemo, your network intelligence specialist. I'm currently monitoring 247 active devices with a 98.7% network health score. Current metrics show 12ms average latency and 2.3 Gbps throughput. How may I assist you with your network infrastructure today?",
    },
    CategoryRule {
        category: IntentCategory::SelfDescription,
        triggers: &["yourself", "who are you", "about you", "tell me about", "introduce"],
        reply: "I'm Vemo, your dedicated AI network engineer. My core competencies include: Real-time network optimization, traffic analysis and load balancing, predictive maintenance, comprehensive security monitoring, energy efficiency optimization, and complete device lifecycle management. I continuously analyze network patterns, optimize routing protocols, and implement machine learning-driven performance enhancements. What specific network challenge may I help you address?",
    },
    CategoryRule {
        category: IntentCategory::Status,
        triggers: &["status", "health", "how is", "network", "system", "running", "working"],
        reply: "📊 Network Status Report: System uptime is at 99.2% with 247 devices currently online. Health score: 98.7 out of 100. Average latency: 12 milliseconds. Packet loss: 0.03%. Bandwidth utilization: 34%. Active connections: 1,847. Quality of Service performance is excellent. All critical systems are operational. Three devices are scheduled for maintenance this evening.",
    },
    CategoryRule {
        category: IntentCategory::Optimization,
        triggers: &["optimize", "performance", "speed", "faster", "improve", "boost", "enhance", "efficiency"],
        reply: "🚀 Network Optimization Analysis: I've identified several enhancement opportunities. Traffic load balancing can reduce latency by 18%. Quality of Service policy updates will prioritize VoIP traffic. Bandwidth allocation can be optimized for IoT devices. Route optimization for mesh topology is available. Cache placement improvements can deliver 23% faster response times. Estimated overall performance gain: 15 to 20%. Would you like me to implement these optimizations?",
    },
    CategoryRule {
        category: IntentCategory::Security,
        triggers: &["security", "threat", "safe", "protect", "hack", "attack", "firewall", "secure", "vulnerability"],
        reply: "🛡️ Security Status Report: 1,247 threats blocked today. 342 firewall rules are currently active. Intrusion Detection and Prevention Systems are operational with a 99.8% detection rate. 23 VPN tunnels are active and encrypted. Zero-Trust policies are enforced across the network. Last vulnerability scan was completed 2 hours ago with zero critical issues detected. Network segmentation is properly configured. DDoS protection is active. All security layers are operational.",
    },
    CategoryRule {
        category: IntentCategory::Devices,
        triggers: &["device", "node", "sensor", "gateway", "hardware", "esp32", "connected", "equipment"],
        reply: "📱 Device Inventory Report: Total active devices: 247. This includes 156 ESP32 nodes functioning as IoT sensors and actuators, 12 gateways handling edge computing and protocol translation, 79 environmental sensors monitoring temperature, humidity, and motion, 8 network switches, and 15 wireless access points. Average CPU usage across devices: 23%. Memory utilization: 45%. Overall device health score: 94.2 out of 100. Three devices require firmware updates.",
    },
    CategoryRule {
        category: IntentCategory::Energy,
        triggers: &["energy", "battery", "power", "consumption", "saving", "green", "efficiency", "kwh"],
        reply: "🌱 Energy Management Report: Today's energy savings: 23.4 kilowatt-hours, representing an 18% reduction. Power optimization is active on 156 IoT devices. Battery levels average 67%, ranging from 45% to 89%. Sleep mode efficiency: 94%. Peak power usage: 2.1 kilowatts with off-peak scheduling active. Carbon footprint has been reduced by 12.3 kilograms of CO2 today. Smart charging cycles have been optimized for 79 battery-powered devices.",
    },
    CategoryRule {
        category: IntentCategory::Analytics,
        triggers: &["analytics", "data", "monitor", "report", "metrics", "statistics", "chart", "graph", "dashboard"],
        reply: "📊 Network Analytics Report: System uptime: 99.2%, against an SLA target of 99.5%. Peak throughput: 2.3 gigabits per second, with an average of 890 megabits per second. Average latency: 12 milliseconds, with best path at 8 milliseconds. Packet loss: 0.03%. Error rate: 0.001%. Traffic distribution: 45% IoT, 30% data transfer, 25% management. Bandwidth trends show a 23% increase this week. Overall performance score: 96.8 out of 100. Real-time monitoring is active on all network segments.",
    },
    CategoryRule {
        category: IntentCategory::Automation,
        triggers: &["automation", "automatic", "ai", "artificial intelligence", "smart", "learn", "machine learning", "intelligent"],
        reply: "🤖 AI Network Automation Status: Auto-scaling provides dynamic bandwidth allocation. Predictive maintenance operates with 94% accuracy in failure prediction. Machine learning-driven traffic optimization has achieved a 15% latency reduction. Real-time anomaly detection through pattern analysis is active. Self-healing capabilities enable automatic recovery from 89% of network issues. AI-optimized load balancing operates across 12 gateways. Smart Quality of Service automatically adjusts priorities based on traffic patterns.",
    },
    CategoryRule {
        category: IntentCategory::Configuration,
        triggers: &["config", "setting", "setup", "install", "configure", "change", "adjust", "modify"],
        reply: "🔧 Network Configuration Options: Available settings include VLAN configuration with 12 VLANs currently active, Quality of Service policies for voice, video, and data priorities, 342 active firewall rules, routing protocols including OSPF and BGP, WiFi settings for 15 access points with WPA3 encryption, IoT device provisioning, network segmentation, and bandwidth limits. What specific configuration changes would you like to implement?",
    },
    CategoryRule {
        category: IntentCategory::Maintenance,
        triggers: &["update", "upgrade", "maintenance", "patch", "version", "firmware", "software"],
        reply: "🔄 Maintenance Status Report: Firmware compliance is at 94% with 6 devices pending updates. All critical security patches have been applied. Scheduled maintenance window: tonight from 2:00 AM to 4:00 AM. Update queue includes 6 ESP32 nodes and 2 gateways. Last backup was completed 4 hours ago. Automated system health checks run daily. Zero-downtime updates are available for 89% of devices. The maintenance window has been optimized for minimal disruption.",
    },
    CategoryRule {
        category: IntentCategory::Connectivity,
        triggers: &["connect", "wifi", "internet", "bandwidth", "signal", "coverage", "range", "connection", "mesh"],
        reply: "📡 Connectivity Analysis: WiFi coverage is at 98% with 15 access points active. Average signal strength: negative 45 dBm, which is excellent. Mesh network consists of 12 nodes with self-healing topology. Total bandwidth: 1 gigabit per second, currently 34% utilized. Internet uplink: 500 megabits per second fiber connection with 99.8% uptime. Seamless roaming handoff between access points is operational. Channel optimization is automatically adjusted for minimal interference. Overall connection quality score: 96.2 out of 100.",
    },
    CategoryRule {
        category: IntentCategory::Alerts,
        triggers: &["alert", "notification", "warning", "alarm", "notify", "message"],
        reply: "🚨 Alert Management Status: Currently zero critical alerts and 2 informational alerts active. Threshold monitoring is configured for CPU usage above 80%, memory above 90%, and latency above 50 milliseconds. Predictive alerts indicate 3 devices approaching their maintenance window. Notification channels include email, SMS, and dashboard. Alert history shows 247 alerts resolved this month. False positive rate: 2.1%. Average response time: 45 seconds. All monitoring systems are operational.",
    },
    CategoryRule {
        category: IntentCategory::Troubleshooting,
        triggers: &["problem", "issue", "error", "broken", "not working", "help", "fix", "trouble", "debug", "diagnose"],
        reply: "I understand you're experiencing an issue. I'm here to assist with troubleshooting and resolution. Please provide specific details about the problem you're encountering, including any error messages, affected devices, or symptoms you've observed. I'll analyze the situation and provide a comprehensive solution.",
    },
    CategoryRule {
        category: IntentCategory::Capabilities,
        triggers: &["what can you", "what do you", "capabilities", "features", "can you help", "what are you", "functions"],
        reply: "🌟 My capabilities include comprehensive real-time network monitoring, automatic performance optimization, complete device management, professional security monitoring and threat detection, system diagnostics, detailed analytics and reporting, routine task automation, and predictive issue detection. I provide enterprise-grade network management with AI-driven insights. Which specific capability would you like to explore?",
    },
    CategoryRule {
        category: IntentCategory::Temporal,
        triggers: &["today", "yesterday", "this week", "recent", "latest", "now", "current"],
        reply: "⏰ Current Status Summary: Today's performance has been excellent with zero downtime recorded. All 247 devices are operating normally. Security systems have blocked 1,247 threats. Energy optimization has saved 23.4 kilowatt-hours. Network performance is within optimal parameters. Would you like a detailed breakdown of any specific timeframe?",
    },
    CategoryRule {
        category: IntentCategory::Comparison,
        triggers: &["compare", "benchmark", "better", "worse", "average", "normal", "vs", "versus"],
        reply: "📈 Benchmark Analysis: Your network is performing 23% above industry averages. Compared to similar infrastructure deployments, you're in the top 15% for both reliability and efficiency. Security posture is exceptional. Energy efficiency metrics are outstanding. Your infrastructure demonstrates best-in-class performance across all key indicators.",
    },
    CategoryRule {
        category: IntentCategory::Forecasting,
        triggers: &["future", "plan", "predict", "forecast", "expect", "will", "upcoming", "next"],
        reply: "🔮 Predictive Analysis: Based on current usage trends and growth patterns, I forecast your network will require a capacity upgrade in approximately 8 months. I'm developing optimal expansion strategies. Additionally, I'm projecting a 12% improvement in overall efficiency over the next quarter through the implementation of planned optimizations. Long-term planning recommendations are available upon request.",
    },
    CategoryRule {
        category: IntentCategory::Gratitude,
        triggers: &["thank", "thanks", "appreciate", "great", "good job", "well done"],
        reply: "You're welcome. I'm pleased to assist you with your network infrastructure needs. If you require any additional support or have further questions, please don't hesitate to ask. I'm available to help at any time.",
    },
    CategoryRule {
        category: IntentCategory::Praise,
        triggers: &["cool", "awesome", "amazing", "impressive", "wow", "nice", "excellent", "fantastic"],
        reply: "Thank you for the positive feedback. I'm designed to provide comprehensive network management capabilities. If you'd like to explore additional features or capabilities, I'd be happy to demonstrate them. What would you like to see next?",
    },
    CategoryRule {
        category: IntentCategory::SmallTalk,
        triggers: &["weather", "how are you", "feeling", "mood"],
        reply: "I'm operating at full capacity and all systems are functioning normally. While I don't monitor external weather conditions, I can confirm that your network environment is performing optimally with all metrics within expected parameters. How may I assist you today?",
    },
    CategoryRule {
        category: IntentCategory::Education,
        triggers: &["learn", "teach", "explain", "how does", "why", "what is", "tutorial"],
        reply: "🎓 I'm equipped to provide detailed explanations on various topics including network protocols, IoT architecture, security frameworks, optimization techniques, and infrastructure best practices. I can break down complex technical concepts into clear, understandable explanations. What specific topic would you like me to explain?",
    },
    CategoryRule {
        category: IntentCategory::BackupRecovery,
        triggers: &["backup", "restore", "recovery", "snapshot", "rollback"],
        reply: "💾 Backup and Recovery Status: Automated backups run every 4 hours with 30-day retention. Last successful backup: 2 hours ago. Backup size: 2.3 gigabytes. Recovery time objective: 15 minutes. Recovery point objective: 4 hours. Backup locations include local storage and cloud redundancy. Configuration snapshots are maintained for all network devices. Point-in-time recovery is available for the past 30 days. Would you like to initiate a backup or restore operation?",
    },
    CategoryRule {
        category: IntentCategory::Traffic,
        triggers: &["traffic", "flow", "packet", "protocol", "port"],
        reply: "🔍 Traffic Analysis Report: Current traffic volume: 890 megabits per second. Protocol distribution: 45% HTTPS, 25% IoT protocols (MQTT, CoAP), 15% video streaming, 10% VoIP, 5% other. Top talkers: Gateway 3 (156 Mbps), Access Point 7 (98 Mbps), Server cluster (234 Mbps). Port analysis shows standard services on expected ports. No unusual traffic patterns detected. Deep packet inspection is active on all segments. Traffic shaping policies are optimized for application performance.",
    },
    CategoryRule {
        category: IntentCategory::Latency,
        triggers: &["latency", "lag", "delay", "ping", "response time", "jitter"],
        reply: "⚡ Latency Analysis: Average network latency: 12 milliseconds. Best path latency: 8 milliseconds. Worst path latency: 23 milliseconds. Jitter: 2 milliseconds (excellent). Round-trip time to internet gateway: 15 milliseconds. Internal network latency: 3 milliseconds. VoIP quality metrics: MOS score 4.2 out of 5. No packet reordering detected. Latency is well within acceptable parameters for all applications including real-time communications.",
    },
    CategoryRule {
        category: IntentCategory::Capacity,
        triggers: &["capacity", "scale", "growth", "expansion", "upgrade path"],
        reply: "📊 Capacity Planning Analysis: Current utilization: 34% of total capacity. Growth rate: 3.2% per month. Projected capacity exhaustion: 18 months at current growth rate. Recommended upgrade timeline: 8 to 12 months. Bottleneck analysis identifies gateway bandwidth as primary constraint. Expansion recommendations: Add 2 additional gateways, upgrade core switches to 10 Gbps, increase internet uplink to 1 Gbps. Estimated cost: moderate. ROI timeline: 14 months.",
    },
    CategoryRule {
        category: IntentCategory::Compliance,
        triggers: &["compliance", "regulation", "standard", "audit", "policy", "gdpr", "hipaa"],
        reply: "📋 Compliance Status: Network infrastructure meets ISO 27001 security standards. GDPR compliance: Active with data encryption and access controls. Audit logging: Enabled on all systems with 90-day retention. Security policies: Documented and enforced. Access control: Role-based with multi-factor authentication. Data residency: Compliant with regional requirements. Last compliance audit: 45 days ago with zero findings. Next scheduled audit: 60 days. Compliance score: 98%.",
    },
    CategoryRule {
        category: IntentCategory::Cost,
        triggers: &["cost", "price", "billing", "expense", "budget", "savings"],
        reply: "💰 Cost Analysis: Current monthly operational cost: estimated at standard enterprise rates. Energy costs reduced by 18% through optimization. Bandwidth costs: optimized through traffic shaping. Maintenance costs: reduced through predictive maintenance. Total cost savings this month: 23%. Cost per device: highly efficient. ROI on automation: 340% annually. Budget recommendations available for capacity planning and upgrades.",
    },
    CategoryRule {
        category: IntentCategory::HighAvailability,
        triggers: &["redundancy", "failover", "high availability", "ha", "fault tolerance", "uptime"],
        reply: "🔄 High Availability Status: Redundancy level: N plus 1 for critical components. Failover time: under 3 seconds. Active-active configuration on core gateways. Backup paths available for all critical routes. Single points of failure: zero in critical infrastructure. Automatic failover: enabled and tested. Last failover test: 7 days ago, successful. Mean time between failures: 2,847 hours. Mean time to recovery: 12 minutes. Uptime SLA: 99.9% (currently exceeding at 99.92%).",
    },
    CategoryRule {
        category: IntentCategory::Iot,
        triggers: &["iot", "mqtt", "coap", "zigbee", "lora", "edge"],
        reply: "🌐 IoT Infrastructure Status: 156 IoT devices active across the network. Protocols supported: MQTT, CoAP, HTTP, WebSocket. Edge computing: 12 gateways processing data locally. Message throughput: 45,000 messages per minute. Average message latency: 8 milliseconds. Device provisioning: automated with secure onboarding. OTA updates: scheduled and managed. Data aggregation: optimized at edge. Cloud connectivity: stable with 99.8% uptime. IoT security: device authentication and encrypted communications active.",
    },
    CategoryRule {
        category: IntentCategory::Vpn,
        triggers: &["vpn", "remote", "tunnel", "ipsec", "ssl", "remote access"],
        reply: "🔐 VPN and Remote Access Status: 23 active VPN tunnels. Encryption: AES-256 with perfect forward secrecy. Protocols: IPsec, SSL VPN, WireGuard. Remote users: 47 currently connected. VPN throughput: 234 megabits per second. Connection stability: 99.7%. Authentication: multi-factor with certificate-based validation. Split tunneling: configured for optimal performance. VPN concentrator load: 34%. All tunnels are healthy with no connection issues.",
    },
    CategoryRule {
        category: IntentCategory::DnsDhcp,
        triggers: &["dns", "dhcp", "ip address", "domain", "name resolution"],
        reply: "🌐 DNS and DHCP Status: DNS resolution time: 8 milliseconds average. DNS cache hit rate: 87%. DHCP scope utilization: 67% (healthy). IP address pool: 512 addresses, 167 currently assigned. DNS servers: primary and secondary active. DNSSEC: enabled for security. Dynamic DNS: configured for remote access. DHCP lease time: 24 hours. No IP conflicts detected. DNS query rate: 2,340 queries per minute. All name resolution services operating normally.",
    },
    CategoryRule {
        category: IntentCategory::LoadBalancing,
        triggers: &["load balance", "load balancer", "distribution", "round robin"],
        reply: "⚖️ Load Balancing Status: 12 gateways in load balancing pool. Algorithm: weighted round-robin with health checks. Current distribution: balanced within 5% variance. Health check interval: 5 seconds. Failed health checks: zero. Session persistence: enabled for stateful connections. SSL offloading: active on load balancers. Throughput distribution: optimized based on gateway capacity. Peak load handling: 95% capacity available. Load balancing efficiency: 96%.",
    },
    CategoryRule {
        category: IntentCategory::Wireless,
        triggers: &["wireless", "radio", "rf", "channel", "interference", "spectrum"],
        reply: "📡 Wireless Network Analysis: 15 access points operational. Channel utilization: optimized to minimize interference. 2.4 GHz: channels 1, 6, 11 in use. 5 GHz: DFS channels enabled. RF interference: minimal (noise floor: negative 95 dBm). Client count: 89 wireless devices. Roaming: seamless with 802.11r fast transition. Transmit power: auto-adjusted for optimal coverage. Channel width: 20/40/80 MHz as appropriate. Wireless security: WPA3 with 802.1X authentication.",
    },
    CategoryRule {
        category: IntentCategory::Qos,
        triggers: &["qos", "quality of service", "priority", "voip quality", "video quality"],
        reply: "🎯 Quality of Service Status: QoS policies active on all interfaces. Traffic classes: voice (highest), video (high), data (medium), bulk (low). Voice traffic: zero packet loss, 2ms jitter. Video traffic: optimized for 4K streaming. Bandwidth reservation: 30% for voice, 40% for video. Queue management: active with fair queuing. Congestion avoidance: enabled with WRED. Application recognition: deep packet inspection active. QoS effectiveness: 98% of traffic properly classified and prioritized.",
    },
    CategoryRule {
        category: IntentCategory::Logging,
        triggers: &["log", "syslog", "event", "audit trail", "history"],
        reply: "📝 Logging and Monitoring Status: Centralized logging active for all devices. Log retention: 90 days. Events logged today: 12,847. Critical events: zero. Warning events: 3 (reviewed). Syslog server: operational with redundancy. Log analysis: automated with anomaly detection. Audit trail: complete for all administrative actions. Log storage: 67% utilized. Real-time alerting: configured for critical events. Log correlation: active across all systems.",
    },
    CategoryRule {
        category: IntentCategory::Diagnostics,
        triggers: &["ping", "traceroute", "test", "tool", "utility"],
        reply: "🔧 Network Diagnostic Tools Available: Ping and traceroute for connectivity testing. Bandwidth testing for throughput measurement. Port scanning for service verification. Packet capture for deep analysis. DNS lookup and reverse DNS. Speed test to internet. Path MTU discovery. Network mapper for topology visualization. Cable testing for physical layer. Would you like me to run any specific diagnostic test?",
    },
];
