//! Event System
//!
//! Activity log entries produced by refreshes and monitoring controls

use crate::logging::{LogLevel, should_log_with_env};
use crate::maintenance::DashboardSnapshot;
use chrono::Local;
use std::fmt::Display;
use std::time::Duration;

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    /// A refresh cycle replaced the dashboard data.
    Refresh,
    /// Monitoring started or stopped.
    StateChange,
    /// A control that had nothing to do.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn refresh(cycle: u64, snapshot: &DashboardSnapshot) -> Self {
        Self::new(
            format!(
                "Refresh #{}: cost {}, last maintenance {} ago",
                cycle,
                snapshot.formatted_cost(),
                snapshot.elapsed_since_last_maintenance
            ),
            EventType::Refresh,
            LogLevel::Info,
        )
    }

    pub fn monitoring_started(interval: Duration) -> Self {
        Self::new(
            format!(
                "Monitoring started, refreshing every {} ms",
                interval.as_millis()
            ),
            EventType::StateChange,
            LogLevel::Info,
        )
    }

    pub fn monitoring_stopped() -> Self {
        Self::new(
            "Monitoring stopped".to_string(),
            EventType::StateChange,
            LogLevel::Warn,
        )
    }

    pub fn ignored(msg: impl Into<String>) -> Self {
        Self::new(msg.into(), EventType::Ignored, LogLevel::Debug)
    }

    pub fn should_display(&self) -> bool {
        if self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
